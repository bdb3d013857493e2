//! Main chat screen.
//!
//! Hosts the sidebar, the message transcript, the composer and the two
//! dialogs. All visibility flags live here: the sidebar and dialogs never
//! close themselves, they report the wish through their handlers and these
//! signals stay the single source of truth.

use dioxus::{logger::tracing::info, prelude::*};

use crate::conversation::seed_conversations;
use crate::message::{Message, MessageQuota};
use crate::profile::UserProfile;
use crate::ui::{
    chat_input::ChatInput,
    help::HelpDialog,
    message::MessageEl,
    settings::SettingsDialog,
    sidebar::Sidebar,
};

#[component]
pub fn ChatScreen() -> Element {
    let mut sidebar_open = use_signal(|| false);
    let mut show_help = use_signal(|| false);
    let mut show_settings = use_signal(|| false);
    let mut messages = use_signal(|| vec![Message::greeting()]);
    let mut quota = use_signal(MessageQuota::default);

    let send_msg = move |body: String| {
        if quota.read().is_exhausted() {
            info!("free message limit reached, ignoring send");
            return;
        }
        messages.with_mut(|m| m.push(Message::user(body)));
        quota.with_mut(|q| q.record_send());
    };

    let remaining = quota.read().remaining();
    let out_of_messages = quota.read().is_exhausted();

    rsx! {
        div { class: "chat-screen",
            Sidebar {
                open: sidebar_open(),
                on_close: move |_| {
                    sidebar_open.set(false);
                },
                profile: UserProfile::default(),
                conversations: seed_conversations(),
            }
            div { class: "chat-main",
                header { class: "chat-header",
                    button {
                        class: "icon-button sidebar-toggle",
                        onclick: move |_| {
                            sidebar_open.set(true);
                        },
                        "☰"
                    }
                    h2 { class: "chat-title", "Chat" }
                    div { class: "chat-header-actions",
                        span { class: "message-counter", "{remaining} messages left" }
                        button {
                            class: "icon-button",
                            title: "Tutorial & Help",
                            onclick: move |_| {
                                show_help.set(true);
                            },
                            "?"
                        }
                        button {
                            class: "icon-button",
                            title: "Settings",
                            onclick: move |_| {
                                show_settings.set(true);
                            },
                            "⚙"
                        }
                    }
                }
                div { class: "chat-transcript",
                    for m in messages.read().iter() {
                        MessageEl { msg: (*m).clone() }
                    }
                    if out_of_messages {
                        div { class: "limit-note",
                            "You've used all your free messages. Upgrade your plan to keep chatting."
                        }
                    }
                }
                div { class: "chat-input-area",
                    ChatInput {
                        disabled: out_of_messages,
                        on_send: Callback::new(send_msg),
                    }
                }
            }
            HelpDialog {
                open: show_help(),
                on_open_change: move |next: bool| {
                    show_help.set(next);
                },
            }
            SettingsDialog {
                open: show_settings(),
                on_open_change: move |next: bool| {
                    show_settings.set(next);
                },
            }
        }
    }
}
