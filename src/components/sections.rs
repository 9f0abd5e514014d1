use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::data::{all_services, Faq, FAQS, PROCESS_STEPS, TESTIMONIALS, TOOLS};
use crate::router::{use_router, Link};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <h1>{"We craft "}<span class="hero-accent">{"digital experiences"}</span>{" that move people"}</h1>
            <p>{"Video editing, web development and AI agents from one obsessive team."}</p>
            <div class="hero-actions">
                <Link to="#services" classes="hero-primary">{"Explore services"}</Link>
                <Link to="#contact" classes="hero-secondary">{"Start a project"}</Link>
            </div>
        </section>
    }
}

#[function_component(ServicesOverview)]
pub fn services_overview() -> Html {
    let router = use_router();

    html! {
        <section id="services" class="services-overview">
            <h2>{"What we do"}</h2>
            <div class="services-overview-grid">
                { for all_services().iter().map(|service| {
                    let onclick = {
                        let router = router.clone();
                        let path = service.path();
                        Callback::from(move |_: MouseEvent| router.navigate(path.clone()))
                    };
                    html! {
                        <button key={service.slug} class={classes!("service-card", service.color)} {onclick}>
                            <span class="service-card-icon">{service.icon}</span>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </button>
                    }
                }) }
            </div>
        </section>
    }
}

/// Scrolling strip of the tools we work with.
#[function_component(Marquee)]
pub fn marquee() -> Html {
    // Rendered twice so the loop has no visible seam.
    let strip = || {
        TOOLS.iter().map(|tool| html! {
            <span class="marquee-item" style={format!("color: {};", tool.color)}>{tool.name}</span>
        })
    };

    html! {
        <section class="marquee">
            <div class="marquee-track">
                { for strip() }
                { for strip() }
            </div>
        </section>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="process">
            <h2>{"How we work"}</h2>
            <ol class="process-steps">
                { for PROCESS_STEPS.iter().map(|step| html! {
                    <li key={step.title} class="process-step">
                        <span class="process-step-number">{format!("{:02}", step.step)}</span>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <h2>{"About Logician Creatives"}</h2>
            <p>
                {"We are a small studio of editors, engineers and automation builders. We pair cinematic craft with performance engineering so your brand looks good and ships fast."}
            </p>
        </section>
    }
}

fn stars(rating: u8) -> String {
    "★".repeat(rating as usize)
}

fn next_index(index: usize, count: usize) -> usize {
    (index + 1) % count
}

fn previous_index(index: usize, count: usize) -> usize {
    (index + count - 1) % count
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let active = use_state(|| 0usize);
    let count = TESTIMONIALS.len();

    // Auto-advance. Restarts whenever the slide changes, so a manual step
    // gets the full interval too.
    {
        let current = *active;
        let active = active.clone();
        use_effect_with_deps(
            move |index| {
                let index = *index;
                let interval = Interval::new(config::TESTIMONIAL_ROTATE_MS, move || {
                    active.set(next_index(index, count));
                });
                move || drop(interval)
            },
            current,
        );
    }

    let prev = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(previous_index(*active, count)))
    };
    let next = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(next_index(*active, count)))
    };

    let current = &TESTIMONIALS[*active % count];
    let rating = stars(current.rating);

    html! {
        <section class="testimonials">
            <h2>{"What clients say"}</h2>
            <figure class="testimonial">
                <blockquote>{current.content}</blockquote>
                <figcaption>
                    <img src={current.avatar} alt={current.name} loading="lazy" />
                    <div>
                        <strong>{current.name}</strong>
                        <span>{format!("{}, {}", current.role, current.company)}</span>
                        <span class="testimonial-rating">{rating}</span>
                    </div>
                </figcaption>
            </figure>
            <div class="testimonial-controls">
                <button onclick={prev}>{"←"}</button>
                <span>{format!("{} / {}", *active + 1, count)}</span>
                <button onclick={next}>{"→"}</button>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    faq: Faq,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.faq.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    <p>{props.faq.answer}</p>
                </div>
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section id="faq" class="faq">
            <h2>{"Frequently Asked Questions"}</h2>
            <p class="faq-subtitle">{"Everything you need to know."}</p>
            { for FAQS.iter().map(|faq| html! { <FaqItem faq={*faq} /> }) }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_renders_one_star_per_point() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(0), "");
    }

    #[test]
    fn carousel_wraps_both_ways() {
        let count = TESTIMONIALS.len();
        assert_eq!(next_index(count - 1, count), 0);
        assert_eq!(next_index(0, count), 1);
        assert_eq!(previous_index(0, count), count - 1);
        assert_eq!(previous_index(2, count), 1);
    }
}
