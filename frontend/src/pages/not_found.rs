use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();

    use_effect_with_deps(
        move |path| {
            warn!("no page at {}", path);
            || ()
        },
        location.map(|l| l.path().to_string()).unwrap_or_default(),
    );

    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        background: var(--light);
                        text-align: center;
                    }
                    .not-found h1 {
                        font-size: 5rem;
                        margin: 0;
                        color: var(--primary);
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{"Return to Home"}</Link<Route>>
        </div>
    }
}
