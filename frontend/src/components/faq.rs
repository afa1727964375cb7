use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::Faq as FaqEntry;

/// Opening an item closes the others; clicking the open one closes it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: &'static FaqEntry,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))}>
            <button class="faq-question" aria-expanded={props.is_open.to_string()} onclick={toggle}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub faqs: &'static [FaqEntry],
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="section light" aria-label="FAQ">
            <style>
                {r#"
                    .faq-list {
                        max-width: 48rem;
                        margin: 2rem auto 0;
                    }
                    .faq-item {
                        border-bottom: 1px solid var(--border);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.25rem 0;
                        border: none;
                        background: none;
                        font-size: 1.05rem;
                        font-weight: 600;
                        text-align: left;
                        cursor: pointer;
                        color: var(--foreground);
                    }
                    .toggle-icon {
                        font-size: 1.4rem;
                        color: var(--primary);
                    }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        color: var(--muted);
                        line-height: 1.7;
                        transition: max-height 0.3s ease;
                    }
                    .faq-item.open .faq-answer {
                        max-height: 20rem;
                    }
                "#}
            </style>
            <div class="container">
                <Reveal>
                    <div class="section-label">{"FAQ"}</div>
                    <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                </Reveal>
                <div class="faq-list">
                    { for props.faqs.iter().enumerate().map(|(index, entry)| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_| open.set(toggle_open(*open, index)))
                        };
                        html! {
                            <FaqItem entry={entry} is_open={*open == Some(index)} on_toggle={on_toggle} />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_item_is_open() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));
        let open = toggle_open(open, 4);
        assert_eq!(open, Some(4));
        assert_eq!(toggle_open(open, 4), None);
    }
}
