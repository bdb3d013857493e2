use dioxus::prelude::*;

use crate::message::{Author, Message};

#[component]
pub fn MessageEl(msg: Message) -> Element {
    let class = match msg.author {
        Author::Assistant => "message ai-message",
        Author::User => "message human-message",
    };
    rsx! {
        div { class: "{class}",
            p { class: "message-body", "{msg.body}" }
        }
    }
}
