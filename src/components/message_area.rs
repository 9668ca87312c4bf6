use yew::prelude::*;

use crate::flash::FlashState;

#[derive(Properties, PartialEq)]
pub struct MessageAreaProps {
    pub state: FlashState,
}

#[function_component(MessageArea)]
pub fn message_area(props: &MessageAreaProps) -> Html {
    let text = props
        .state
        .current
        .as_ref()
        .map(|f| f.text.clone())
        .unwrap_or_default();

    html! {
        <div id="message" class={props.state.class()} role="status" aria-live="polite">
            { text }
        </div>
    }
}
