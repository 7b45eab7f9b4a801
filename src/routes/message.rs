use crate::controller::{Message, MessageKind};
use maud::{Markup, html};

pub const HIDE_MESSAGE_ROUTE: &str = "/internal/message/hide";

///the message area - `None` renders it empty, which is how a message gets hidden
///
///auto-hiding messages ask for their own replacement once the delay is up, so a newer message that
///has already swapped this one out can't be hidden by the older timer
pub fn render_message(message: Option<&Message>, oob: bool) -> Markup {
    let Some(Message {
        text,
        kind,
        auto_hide,
    }) = message
    else {
        return html! {
            div id="message" hx-swap-oob=[oob.then_some("true")] {}
        };
    };

    let colours = match kind {
        MessageKind::Success => "bg-green-100 border-green-400 text-green-700",
        MessageKind::Error => "bg-red-100 border-red-400 text-red-700",
    };
    let hide_trigger = auto_hide.map(|delay| format!("load delay:{}ms", delay.as_millis()));
    let hide_route = auto_hide.map(|_| HIDE_MESSAGE_ROUTE);

    html! {
        div id="message" hx-swap-oob=[oob.then_some("true")] hx-get=[hide_route] hx-trigger=[hide_trigger] hx-swap=[hide_route.map(|_| "outerHTML")] role="alert" class={"border px-4 py-3 rounded relative " (colours)} {
            span {(text)}
        }
    }
}

pub async fn internal_get_hide_message() -> Markup {
    render_message(None, false)
}
