use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use log::{error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::data::all_services;
use crate::forms::{
    accepts_newsletter_email, validate_contact, ContactField, ContactFieldError, ContactForm,
    ContactSubmission, FieldErrors, SubmitState, CONTACT_THANKS,
};

/// Reads the value out of whichever form control fired the event.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    target
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| select.value())
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(FieldErrors::default);
    let state = use_state(|| SubmitState::Idle);

    let on_field = |field: ContactField| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let Some(value) = event_value(&e) else {
                return;
            };
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);

            let mut next_errors = (*errors).clone();
            next_errors.clear(field);
            errors.set(next_errors);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !state.accepts_submit() {
                return;
            }

            if let Err(found) = validate_contact(&form) {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::default());
            state.set(SubmitState::Sending);

            let submission = ContactSubmission::new((*form).clone(), Utc::now());
            let form = form.clone();
            let state = state.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::CONTACT_SUBMIT_DELAY_MS).await;
                match serde_json::to_string(&submission) {
                    Ok(json) => info!("Contact request received: {}", json),
                    Err(e) => error!("Failed to serialize contact request: {}", e),
                }
                state.set(SubmitState::Sent);

                TimeoutFuture::new(config::CONTACT_RESET_DELAY_MS).await;
                form.set(ContactForm::default());
                state.set(SubmitState::Idle);
            });
        })
    };

    let error_line = |err: Option<ContactFieldError>| match err {
        Some(err) => html! { <p class="field-error">{err.to_string()}</p> },
        None => html! {},
    };

    let sending = *state == SubmitState::Sending;

    html! {
        <section id="contact" class="contact">
            <div class="contact-intro">
                <h2>{"Let's build something"}</h2>
                <p>{"Tell us about your project and we'll get back within one business day."}</p>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
            </div>

            if *state == SubmitState::Sent {
                <div class="contact-success">
                    <h3>{"Message sent"}</h3>
                    <p>{CONTACT_THANKS}</p>
                </div>
            } else {
                <form class="contact-form" onsubmit={onsubmit}>
                    <label>
                        {"Name"}
                        <input
                            type="text"
                            value={form.name.clone()}
                            onchange={on_field(ContactField::Name)}
                            class={classes!(errors.name.is_some().then(|| "invalid"))}
                        />
                        { error_line(errors.name) }
                    </label>
                    <label>
                        {"Email"}
                        <input
                            type="email"
                            value={form.email.clone()}
                            onchange={on_field(ContactField::Email)}
                            class={classes!(errors.email.is_some().then(|| "invalid"))}
                        />
                        { error_line(errors.email) }
                    </label>
                    <label>
                        {"Service"}
                        <select onchange={on_field(ContactField::Service)}>
                            <option value="" selected={form.service.is_empty()}>{"Select a service"}</option>
                            { for all_services().iter().map(|service| html! {
                                <option
                                    value={service.slug}
                                    selected={form.service == service.slug}
                                >
                                    {service.title}
                                </option>
                            }) }
                        </select>
                    </label>
                    <label>
                        {"Message"}
                        <textarea
                            rows="5"
                            value={form.message.clone()}
                            onchange={on_field(ContactField::Message)}
                            class={classes!(errors.message.is_some().then(|| "invalid"))}
                        />
                        { error_line(errors.message) }
                    </label>
                    <button type="submit" disabled={sending}>
                        { if sending { "Sending..." } else { "Send message" } }
                    </button>
                </form>
            }
            <style>
                {r#"
                .contact {
                    max-width: 1080px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-intro a {
                    color: #a78bfa;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    font-size: 0.85rem;
                    color: #a1a1aa;
                }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    padding: 0.75rem 1rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    color: #fff;
                    font: inherit;
                }
                .contact-form .invalid {
                    border-color: #f87171;
                }
                .field-error {
                    color: #f87171;
                    font-size: 0.8rem;
                }
                .contact-form button {
                    padding: 0.9rem;
                    border: none;
                    border-radius: 10px;
                    background: #fff;
                    color: #000;
                    font-weight: 700;
                    cursor: pointer;
                }
                .contact-form button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .contact-success {
                    padding: 2rem;
                    border-radius: 16px;
                    border: 1px solid rgba(74, 222, 128, 0.3);
                    background: rgba(74, 222, 128, 0.05);
                }
                @media (max-width: 768px) {
                    .contact {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    let email = use_state(String::new);
    let state = use_state(|| SubmitState::Idle);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !state.accepts_submit() || !accepts_newsletter_email(&email) {
                return;
            }
            state.set(SubmitState::Sending);

            let email = email.clone();
            let state = state.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::NEWSLETTER_SUBMIT_DELAY_MS).await;
                info!("Newsletter signup for {}", email.trim());
                email.set(String::new());
                state.set(SubmitState::Sent);

                TimeoutFuture::new(config::NEWSLETTER_RESET_DELAY_MS).await;
                state.set(SubmitState::Idle);
            });
        })
    };

    html! {
        <section class="newsletter">
            <h3>{"Stay in the loop"}</h3>
            <p>{"Occasional notes on video, web and automation. No spam."}</p>
            if *state == SubmitState::Sent {
                <p class="newsletter-done">{"You're subscribed!"}</p>
            } else {
                <form class="newsletter-form" onsubmit={onsubmit}>
                    <input
                        type="email"
                        placeholder="you@company.com"
                        value={(*email).clone()}
                        oninput={oninput}
                    />
                    <button type="submit" disabled={*state == SubmitState::Sending}>
                        { if *state == SubmitState::Sending { "Joining..." } else { "Subscribe" } }
                    </button>
                </form>
            }
            <style>
                {r#"
                .newsletter {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                    text-align: center;
                }
                .newsletter-form {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .newsletter-form input {
                    flex: 1;
                    padding: 0.75rem 1rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.03);
                    color: #fff;
                }
                .newsletter-form button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 10px;
                    background: #a78bfa;
                    color: #000;
                    font-weight: 700;
                }
                .newsletter-done {
                    color: #4ade80;
                    margin-top: 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}
