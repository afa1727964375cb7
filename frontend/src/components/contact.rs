use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::ContactDetails;
use crate::forms::{deliver, ContactForm, Field, FormErrors, SubmissionGate, SubmitState};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub details: &'static ContactDetails,
}

fn error_text(errors: &FormErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(err) => html! { <p class="field-error">{err.to_string()}</p> },
        None => html! {},
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let details = props.details;
    let form = use_state(ContactForm::default);
    let errors = use_state(FormErrors::default);
    let gate = use_mut_ref(SubmissionGate::default);
    let status = use_state(SubmitState::default);

    let update = |field: Field| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        }
    };

    let on_text = |field: Field| {
        let update = update(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let on_select = |field: Field| {
        let update = update(field);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update(select.value());
        })
    };

    let on_message = {
        let update = update(Field::Message);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            update(area.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let gate = gate.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(found) = form.validate() {
                errors.set(found);
                return;
            }
            errors.set(FormErrors::default());
            if let Err(err) = gate.borrow_mut().begin() {
                warn!("{}", err);
                return;
            }
            status.set(SubmitState::Pending);

            let payload = (*form).clone();
            let form = form.clone();
            let gate = gate.clone();
            let status = status.clone();
            spawn_local(async move {
                let outcome = deliver(payload).await;
                let next = gate.borrow_mut().finish(outcome).clone();
                match &next {
                    SubmitState::Sent => form.set(ContactForm::default()),
                    SubmitState::Failed(reason) => gloo_console::error!("contact form:", reason.clone()),
                    _ => {}
                }
                status.set(next);
            });
        })
    };

    let send_another = {
        let gate = gate.clone();
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            gate.borrow_mut().reset();
            status.set(gate.borrow().state().clone());
        })
    };

    let pending = *status == SubmitState::Pending;
    let options = |choices: &'static [&'static str], selected: &str, placeholder: &'static str| {
        html! {
            <>
                <option value="" selected={selected.is_empty()} disabled=true>{placeholder}</option>
                { for choices.iter().map(|choice| html! {
                    <option value={*choice} selected={selected == *choice}>{*choice}</option>
                }) }
            </>
        }
    };

    html! {
        <section id="contact" class="section" aria-label="Contact">
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1.5fr;
                        gap: 4rem;
                    }
                    .contact-info p { color: var(--muted); }
                    .contact-info dt {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: var(--muted);
                        margin-top: 1.25rem;
                    }
                    .contact-info dd { margin: 0.25rem 0 0; font-weight: 600; }
                    .contact-form {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.25rem;
                    }
                    .form-field { display: flex; flex-direction: column; }
                    .form-field.wide { grid-column: 1 / -1; }
                    .form-field label {
                        font-size: 0.85rem;
                        font-weight: 600;
                        margin-bottom: 0.4rem;
                    }
                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        padding: 0.8rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid var(--border);
                        font: inherit;
                    }
                    .form-field textarea { min-height: 8rem; resize: vertical; }
                    .spinner {
                        width: 1rem;
                        height: 1rem;
                        border: 2px solid rgba(255, 255, 255, 0.4);
                        border-top-color: #fff;
                        border-radius: 50%;
                        animation: spin 0.8s linear infinite;
                    }
                    .submit-failed { color: #dc2626; grid-column: 1 / -1; }
                    .contact-success {
                        padding: 3rem;
                        border-radius: 1.25rem;
                        background: var(--light);
                        text-align: center;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    @media (max-width: 900px) {
                        .contact-grid, .contact-form { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="container contact-grid">
                <Reveal class={classes!("contact-info")}>
                    <div class="section-label">{"Contact"}</div>
                    <h2 class="section-title">{"Let's work "}<em>{"together"}</em></h2>
                    <p>{"Tell me about your project and I'll get back to you within 24 hours."}</p>
                    <dl>
                        <dt>{"Email"}</dt>
                        <dd><a href={format!("mailto:{}", details.email)}>{details.email}</a></dd>
                        <dt>{"Phone"}</dt>
                        <dd>{details.phone}</dd>
                        <dt>{"Location"}</dt>
                        <dd>{details.location}</dd>
                    </dl>
                </Reveal>
                if *status == SubmitState::Sent {
                    <div class="contact-success" role="status">
                        <h3>{"Message sent!"}</h3>
                        <p>{"Thanks for reaching out. I'll be in touch shortly."}</p>
                        <button class="btn btn-outline" onclick={send_another}>{"Send another message"}</button>
                    </div>
                } else {
                    <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                        <div class="form-field">
                            <label for="contact-name">{"Name *"}</label>
                            <input id="contact-name" type="text" placeholder="Your name"
                                value={form.name.clone()} oninput={on_text(Field::Name)} />
                            { error_text(&errors, Field::Name) }
                        </div>
                        <div class="form-field">
                            <label for="contact-email">{"Email *"}</label>
                            <input id="contact-email" type="email" placeholder="you@company.com"
                                value={form.email.clone()} oninput={on_text(Field::Email)} />
                            { error_text(&errors, Field::Email) }
                        </div>
                        <div class="form-field">
                            <label for="contact-phone">{"Phone"}</label>
                            <input id="contact-phone" type="tel" placeholder="Optional"
                                value={form.phone.clone()} oninput={on_text(Field::Phone)} />
                        </div>
                        <div class="form-field">
                            <label for="contact-service">{"Service *"}</label>
                            <select id="contact-service" onchange={on_select(Field::Service)}>
                                { options(details.services, &form.service, "Select a service") }
                            </select>
                            { error_text(&errors, Field::Service) }
                        </div>
                        <div class="form-field wide">
                            <label for="contact-budget">{"Budget *"}</label>
                            <select id="contact-budget" onchange={on_select(Field::Budget)}>
                                { options(details.budgets, &form.budget, "Select a budget") }
                            </select>
                            { error_text(&errors, Field::Budget) }
                        </div>
                        <div class="form-field wide">
                            <label for="contact-message">{"Message *"}</label>
                            <textarea id="contact-message" placeholder="Tell me about your project..."
                                value={form.message.clone()} oninput={on_message} />
                            { error_text(&errors, Field::Message) }
                        </div>
                        if let SubmitState::Failed(reason) = &*status {
                            <p class="submit-failed" role="alert">{reason}</p>
                        }
                        <div class="form-field wide">
                            <button type="submit" class="btn btn-primary" disabled={pending}>
                                if pending {
                                    <span class="spinner" />
                                    {"Sending..."}
                                } else {
                                    {"Send Message"}
                                }
                            </button>
                        </div>
                    </form>
                }
            </div>
        </section>
    }
}
