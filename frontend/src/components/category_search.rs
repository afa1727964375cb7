use yew::prelude::*;

use crate::content::matching;

#[derive(Properties, PartialEq)]
pub struct CategorySearchProps {
    pub items: &'static [&'static str],
    pub placeholder: AttrValue,
}

/// Search box over a fixed list of business types, shown as pills.
#[function_component(CategorySearch)]
pub fn category_search(props: &CategorySearchProps) -> Html {
    let query = use_state(String::new);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let found = matching(props.items, &query);

    html! {
        <div class="category-search">
            <style>
                {r#"
                    .category-search input {
                        width: 100%;
                        max-width: 28rem;
                        padding: 1rem 1.25rem;
                        border-radius: 999px;
                        border: 1px solid var(--border);
                        font: inherit;
                    }
                    .pills {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-top: 1.5rem;
                    }
                    .pill {
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        border: 1px solid var(--border);
                        background: var(--background);
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <input type="text" placeholder={props.placeholder.clone()} value={(*query).clone()} {oninput} />
            <div class="pills">
                if found.is_empty() {
                    <span class="pill">{"No match. We probably still cover it, just ask!"}</span>
                } else {
                    { for found.into_iter().map(|item| html! { <span class="pill" key={item}>{item}</span> }) }
                }
            </div>
        </div>
    }
}
