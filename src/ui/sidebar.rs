use dioxus::prelude::*;

use crate::conversation::Conversation;
use crate::profile::UserProfile;

/// Conversation sidebar with the profile header, the new-chat button, the
/// conversation list and the sign-out footer.
///
/// On narrow layouts the sidebar slides in over the chat and `open` controls
/// it together with a dimming overlay. On wide layouts the stylesheet keeps
/// it docked regardless of `open`.
#[component]
pub fn Sidebar(
    open: bool,
    on_close: EventHandler<()>,
    profile: UserProfile,
    conversations: Vec<Conversation>,
) -> Element {
    let aside_class = if open { "sidebar open" } else { "sidebar" };
    rsx! {
        if open {
            div {
                class: "sidebar-overlay",
                onclick: move |_| {
                    on_close.call(());
                },
            }
        }
        aside { class: "{aside_class}",
            div { class: "sidebar-profile",
                div { class: "sidebar-avatar", "{profile.initial()}" }
                div { class: "sidebar-identity",
                    p { class: "sidebar-name", "{profile.name}" }
                    p { class: "sidebar-email", "{profile.email}" }
                }
            }
            div { class: "sidebar-new-chat",
                button { class: "new-chat-button",
                    span { class: "button-glyph", "+" }
                    "New chat"
                }
            }
            div { class: "sidebar-conversations",
                for conv in conversations {
                    {
                        let class = if conv.active {
                            "conversation-button active"
                        } else {
                            "conversation-button"
                        };
                        rsx! {
                            button { key: "{conv.id}", class: "{class}", "{conv.name}" }
                        }
                    }
                }
            }
            div { class: "sidebar-footer",
                button { class: "sign-out-button",
                    span { class: "button-glyph", "⏻" }
                    "Sign out"
                }
            }
        }
    }
}
