use log::info;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::{
    about::About, faq::Faq, footer::Footer, hero::Hero, navbar::Navbar,
    portfolio::Portfolio, pricing::Pricing, services::Services, stats::Stats,
    testimonials::Testimonials,
};
use crate::content::{ContactDetails, Variant};
use crate::forms::subscriber_email;
use crate::scroll::scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct EmailCaptureProps {
    pub details: &'static ContactDetails,
}

/// One-field "drop your email" box in place of the full contact form.
#[function_component(EmailCapture)]
pub fn email_capture(props: &EmailCaptureProps) -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let sent = use_state(|| false);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match subscriber_email(&email) {
                Ok(address) => {
                    info!("project enquiry from {}", address);
                    email.set(String::new());
                    error.set(None);
                    sent.set(true);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    html! {
        <section id="contact" class="section light" aria-label="Contact">
            <style>
                {r#"
                    .email-capture {
                        display: flex;
                        gap: 0.75rem;
                        max-width: 30rem;
                        margin-top: 2rem;
                    }
                    .email-capture input {
                        flex: 1;
                        padding: 0.9rem 1.25rem;
                        border-radius: 999px;
                        border: 1px solid var(--border);
                        font: inherit;
                    }
                    .capture-sent { color: var(--accent); font-weight: 600; }
                "#}
            </style>
            <div class="container">
                <Reveal>
                    <div class="section-label">{"Contact"}</div>
                    <h2 class="section-title">{"Let's build "}<em>{"something"}</em></h2>
                    <p class="section-lead">
                        {"Have a project in mind? Drop your email and I'll get back to you within 24 hours."}
                    </p>
                    <p><a href={format!("mailto:{}", props.details.email)}>{props.details.email}</a></p>
                    if *sent {
                        <p class="capture-sent" role="status">{"✓ Thanks! I'll be in touch soon."}</p>
                    } else {
                        <form class="email-capture" {onsubmit}>
                            <input type="email" placeholder="your@email.com" aria-label="Your email"
                                value={(*email).clone()} {oninput} />
                            <button type="submit" class="btn btn-primary">{"Send"}</button>
                        </form>
                        if let Some(message) = &*error {
                            <p class="field-error">{message}</p>
                        }
                    }
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Website)]
pub fn website() -> Html {
    let content = Variant::Web.content();

    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <>
            <Navbar content={content} />
            <main>
                <Hero
                    eyebrow="Freelance Web Developer"
                    title="I build websites that"
                    highlight="look great & convert"
                    lead="Modern, minimal, and high-performing websites for brands that care about quality. From concept to code, pixel-perfect execution every time."
                />
                <About about={&content.about} />
                <Stats stats={content.stats} />
                <Services services={content.services} lead="End-to-end web solutions, from design to deployment." />
                <Portfolio projects={content.projects} />
                <Testimonials testimonials={content.testimonials} title="Kind words" />
                <Pricing plans={content.plans} toggle={false} period="" />
                <Faq faqs={content.faqs} />
                <EmailCapture details={&content.contact} />
            </main>
            <Footer content={content} />
        </>
    }
}
