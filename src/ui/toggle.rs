use dioxus::prelude::*;

/// Sliding on/off pill. Display only, the enclosing row handles clicks.
/// `pinned` marks a switch the user cannot operate, like dark mode.
#[component]
pub fn ToggleSwitch(on: bool, pinned: Option<bool>) -> Element {
    let mut class = String::from("toggle");
    if on {
        class.push_str(" on");
    }
    if pinned.unwrap_or(false) {
        class.push_str(" pinned");
    }
    rsx! {
        span { class: "{class}",
            span { class: "toggle-knob" }
        }
    }
}
