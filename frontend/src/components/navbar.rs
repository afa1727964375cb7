use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config::SCROLLED_OFFSET_PX;
use crate::content::SiteContent;
use crate::scroll::scroll_to_section;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub content: &'static SiteContent,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET_PX
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let content = props.content;
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |anchor: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(anchor);
        })
    };

    let links = content.nav.iter().map(|link| {
        html! {
            <a href={link.anchor} class="nav-link" onclick={go_to(link.anchor)}>{link.label}</a>
        }
    });

    html! {
        <nav class={classes!("top-nav", is_scrolled(scroll_y).then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.25rem 0;
                        background: transparent;
                        transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(255, 255, 255, 0.92);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 0 var(--border);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.4rem;
                        color: var(--foreground);
                        text-decoration: none;
                    }
                    .nav-logo span { color: var(--primary); }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.75rem;
                    }
                    .nav-link {
                        color: var(--muted);
                        text-decoration: none;
                        font-size: 0.95rem;
                    }
                    .nav-link:hover { color: var(--foreground); }
                    .nav-pages {
                        display: flex;
                        gap: 1rem;
                        font-size: 0.85rem;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: var(--foreground);
                    }
                    @media (max-width: 900px) {
                        .burger-menu { display: flex; }
                        .nav-right {
                            position: fixed;
                            top: 0;
                            right: -100%;
                            height: 100vh;
                            width: 75%;
                            flex-direction: column;
                            align-items: flex-start;
                            padding: 5rem 2rem;
                            background: var(--background);
                            box-shadow: -4px 0 20px rgba(0, 0, 0, 0.08);
                            transition: right 0.3s ease;
                        }
                        .nav-right.mobile-menu-open { right: 0; }
                        .nav-pages { flex-direction: column; }
                    }
                "#}
            </style>
            <div class="container nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {content.brand.first}<span>{content.brand.last}</span>
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    { for links }
                    <div class="nav-pages">
                        <Link<Route> to={Route::LocalBrands} classes="nav-link">{"Local Brands"}</Link<Route>>
                        <Link<Route> to={Route::OnlineBrands} classes="nav-link">{"Online Brands"}</Link<Route>>
                        <Link<Route> to={Route::Website} classes="nav-link">{"Websites"}</Link<Route>>
                    </div>
                    <a href="#contact" class="btn btn-primary" onclick={go_to("#contact")}>{"Let's Talk"}</a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_the_offset() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }
}
