use dioxus::prelude::*;

/// Shared dialog overlay.
///
/// Visibility is owned by the host: `open` comes in as plain data and every
/// close affordance (backdrop click, the × button) only asks for a change
/// through `on_open_change`. While closed nothing is rendered, so dialog
/// content and its state are dropped until the next open.
#[component]
pub fn Modal(
    open: bool,
    on_open_change: EventHandler<bool>,
    title: String,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                on_open_change.call(false);
            },
            div {
                class: "modal-panel",
                onclick: move |e: Event<MouseData>| {
                    e.stop_propagation();
                },
                div { class: "modal-header",
                    h3 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| {
                            on_open_change.call(false);
                        },
                        "×"
                    }
                }
                {children}
            }
        }
    }
}
