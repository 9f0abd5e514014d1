use log::{info, warn};
use yew::prelude::*;

use crate::data::{service_by_slug, Category, Item, ItemMetadata, Service};
use crate::router::{use_params, use_router, Link, RouterContext};

fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        warn!("Failed to open {}: {:?}", url, e);
    }
}

fn tag_list(tags: &[&'static str]) -> Html {
    html! {
        <div class="tags">
            { for tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ItemModalProps {
    item: Item,
    on_close: Callback<()>,
}

#[function_component(ItemModal)]
fn item_modal(props: &ItemModalProps) -> Html {
    let item = &props.item;
    let close = props.on_close.reform(|_: MouseEvent| ());
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let details = match item.metadata {
        ItemMetadata::Ai {
            platform,
            features,
            integrations,
        } => html! {
            <>
                if let Some(platform) = platform {
                    <p class="modal-meta">{format!("Platform: {}", platform)}</p>
                }
                <h4>{"Features"}</h4>
                <ul>{ for features.iter().map(|f| html! { <li>{*f}</li> }) }</ul>
                <h4>{"Integrations"}</h4>
                { tag_list(integrations) }
            </>
        },
        ItemMetadata::Web {
            stack, features, ..
        } => html! {
            <>
                if let Some(stack) = stack {
                    <p class="modal-meta">{format!("Stack: {}", stack)}</p>
                }
                <ul>{ for features.iter().map(|f| html! { <li>{*f}</li> }) }</ul>
            </>
        },
        ItemMetadata::Video { .. } => html! {},
    };

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal" onclick={stop}>
                <button class="modal-close" onclick={close}>{"×"}</button>
                <img src={item.thumbnail} alt={item.title} />
                <h3>{item.title}</h3>
                <p>{item.description}</p>
                { details }
                { tag_list(item.tags) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CategoryBlockProps {
    category: Category,
    on_select: Callback<Item>,
}

#[function_component(CategoryBlock)]
fn category_block(props: &CategoryBlockProps) -> Html {
    let category = &props.category;

    html! {
        <div class="category-block">
            <h2>{category.title}</h2>
            <p>{category.description}</p>
            <div class="item-grid">
                { for category.items.iter().map(|item| {
                    let item = *item;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| match item.external_url() {
                            Some(url) => open_external(url),
                            None => on_select.emit(item),
                        })
                    };
                    html! {
                        <button key={item.id} class="item-card" {onclick}>
                            <img src={item.thumbnail} alt={item.title} loading="lazy" />
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                            { tag_list(item.tags) }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

fn video_categories(service: &Service, router: &RouterContext) -> Html {
    html! {
        <div class="category-grid">
            { for service.categories.iter().map(|category| {
                let onclick = {
                    let router = router.clone();
                    let path = format!("/services/video-editing/{}", category.id);
                    Callback::from(move |_: MouseEvent| router.navigate(path.clone()))
                };
                html! {
                    <button key={category.id} class="category-card" {onclick}>
                        <img src={category.image} alt={category.title} loading="lazy" />
                        <div class="category-card-body">
                            <h3>{category.title}</h3>
                            <p>{category.description}</p>
                            <span class="category-count">{format!("{} videos", category.items.len())}</span>
                        </div>
                    </button>
                }
            }) }
        </div>
    }
}

#[function_component(ServicePage)]
pub fn service_page() -> Html {
    let router = use_router();
    let params = use_params();
    let selected = use_state(|| None::<Item>);

    let slug = params.get("slug").unwrap_or_default().to_string();
    info!("Rendering service page for {}", slug);

    let Some(service) = service_by_slug(&slug) else {
        return html! {
            <main class="service-page not-found">
                <h1>{"Service not found"}</h1>
                <p>{"We couldn't find what you were looking for."}</p>
                <Link to="/" classes="back-link">{"Back to home"}</Link>
            </main>
        };
    };

    let go_back = {
        let router = router.clone();
        Callback::from(move |_: MouseEvent| router.go_back())
    };
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |item: Item| selected.set(Some(item)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let body = if service.is_locked() {
        html! {
            <div class="coming-soon">
                <h2>{"Coming soon"}</h2>
                <p>{"We're putting the finishing touches on this. Get in touch to join the early access list."}</p>
                <Link to="#contact" classes="back-link">{"Talk to us"}</Link>
            </div>
        }
    } else if service.slug == "video-editing" {
        video_categories(service, &router)
    } else {
        html! {
            { for service.categories.iter().map(|category| html! {
                <CategoryBlock key={category.id} category={*category} on_select={on_select.clone()} />
            }) }
        }
    };

    html! {
        <main class={classes!("service-page", service.color)}>
            <button class="back-link" onclick={go_back}>{"← Back"}</button>
            <header class="service-header">
                <span class="service-icon">{service.icon}</span>
                <h1>{service.title}</h1>
                <p>{service.description}</p>
            </header>
            { body }
            if let Some(item) = *selected {
                <ItemModal {item} {on_close} />
            }
            <style>
                {r#"
                .service-page {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 4rem;
                }
                .back-link {
                    background: none;
                    border: none;
                    color: #a1a1aa;
                    cursor: pointer;
                    text-decoration: none;
                }
                .back-link:hover {
                    color: #fff;
                }
                .service-header {
                    margin: 2rem 0 3rem;
                }
                .service-icon {
                    font-size: 2.5rem;
                }
                .service-page.pink .service-header h1 { color: #f472b6; }
                .service-page.cyan .service-header h1 { color: #22d3ee; }
                .service-page.violet .service-header h1 { color: #a78bfa; }
                .category-grid,
                .item-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .category-block {
                    margin-bottom: 4rem;
                }
                .category-card,
                .item-card {
                    text-align: left;
                    padding: 0;
                    border-radius: 16px;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    background: rgba(255, 255, 255, 0.02);
                    color: #fff;
                    cursor: pointer;
                }
                .category-card img,
                .item-card img {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    object-fit: cover;
                }
                .category-card-body,
                .item-card h3,
                .item-card p,
                .item-card .tags {
                    padding: 0 1.25rem;
                }
                .category-count {
                    font-size: 0.8rem;
                    color: #a1a1aa;
                }
                .tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    padding-bottom: 1.25rem;
                }
                .tag {
                    font-size: 0.75rem;
                    padding: 0.2rem 0.6rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.08);
                }
                .coming-soon {
                    padding: 4rem 2rem;
                    text-align: center;
                    border: 1px dashed rgba(255, 255, 255, 0.15);
                    border-radius: 20px;
                }
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.8);
                }
                .modal {
                    position: relative;
                    max-width: 640px;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 2rem;
                    border-radius: 20px;
                    background: #09090b;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .modal img {
                    width: 100%;
                    border-radius: 12px;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .modal-meta {
                    color: #a1a1aa;
                }
                .not-found {
                    text-align: center;
                }
                "#}
            </style>
        </main>
    }
}
