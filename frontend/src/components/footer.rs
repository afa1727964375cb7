use log::info;
use web_sys::{HtmlInputElement, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::SiteContent;
use crate::forms::subscriber_email;
use crate::scroll::scroll_to_section;
use crate::Route;

#[derive(Clone, PartialEq)]
enum Newsletter {
    Open,
    Rejected(String),
    Subscribed,
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: &'static SiteContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let content = props.content;
    let email = use_state(String::new);
    let newsletter = use_state(|| Newsletter::Open);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let newsletter = newsletter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match subscriber_email(&email) {
                Ok(address) => {
                    info!("newsletter sign-up: {}", address);
                    email.set(String::new());
                    newsletter.set(Newsletter::Subscribed);
                }
                Err(err) => newsletter.set(Newsletter::Rejected(err.to_string())),
            }
        })
    };

    let to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("#home");
    });

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 5rem 0 2rem;
                        background: var(--foreground);
                        color: rgba(255, 255, 255, 0.75);
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr repeat(3, 1fr);
                        gap: 3rem;
                    }
                    .footer-brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }
                    .footer-brand span { color: var(--primary); }
                    .footer-column h4 { color: #fff; margin-top: 0; }
                    .footer-column ul { list-style: none; padding: 0; }
                    .footer-column li { padding: 0.3rem 0; font-size: 0.9rem; }
                    .newsletter {
                        display: flex;
                        gap: 0.5rem;
                        margin-top: 1.5rem;
                    }
                    .newsletter input {
                        flex: 1;
                        padding: 0.7rem 1rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: transparent;
                        color: #fff;
                    }
                    .newsletter-note { font-size: 0.8rem; margin-top: 0.5rem; }
                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        margin-top: 4rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 0.85rem;
                    }
                    .footer-bottom a { color: inherit; margin-left: 1rem; }
                    @media (max-width: 900px) {
                        .footer-grid { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <a href="#home" class="footer-brand" onclick={to_top}>
                            {content.brand.first}<span>{content.brand.last}</span>
                        </a>
                        <p>{content.brand.tagline}</p>
                        <form class="newsletter" onsubmit={onsubmit}>
                            <input type="email" placeholder="Your email" aria-label="Newsletter email"
                                value={(*email).clone()} {oninput} />
                            <button type="submit" class="btn btn-primary">{"Subscribe"}</button>
                        </form>
                        {
                            match &*newsletter {
                                Newsletter::Open => html! {},
                                Newsletter::Rejected(reason) => html! { <p class="field-error">{reason}</p> },
                                Newsletter::Subscribed => html! { <p class="newsletter-note">{"Thanks for subscribing!"}</p> },
                            }
                        }
                    </div>
                    { for content.footer.iter().map(|column| html! {
                        <div class="footer-column">
                            <h4>{column.title}</h4>
                            <ul>
                                { for column.links.iter().map(|link| html! { <li>{*link}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    <span>{format!("© {} {}. All rights reserved.", content.brand.first, content.brand.last)}</span>
                    <span>
                        <Link<Route> to={Route::LocalBrands}>{"Local Brands"}</Link<Route>>
                        <Link<Route> to={Route::OnlineBrands}>{"Online Brands"}</Link<Route>>
                        <Link<Route> to={Route::Website}>{"Websites"}</Link<Route>>
                    </span>
                </div>
            </div>
        </footer>
    }
}
