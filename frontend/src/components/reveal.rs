use yew::prelude::*;

use crate::config::VISIBILITY_THRESHOLD;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let (node, in_view) = use_in_view(VISIBILITY_THRESHOLD);

    html! {
        <div ref={node} class={classes!("reveal", in_view.then_some("revealed"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
