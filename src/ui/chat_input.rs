use dioxus::prelude::*;

/// Quick-pick emojis for the strip above the input.
const EMOJIS: [&str; 8] = ["😊", "😂", "❤️", "👍", "🎉", "🤔", "😮", "🔥"];

/// Message composer. Enter sends, Shift+Enter inserts a newline, the smile
/// button opens a strip of emojis that append to the draft.
#[component]
pub fn ChatInput(disabled: bool, on_send: Callback<String, ()>) -> Element {
    let mut text = use_signal(|| "".to_string());
    let mut show_emoji = use_signal(|| false);
    let set_text = move |e: Event<FormData>| {
        if disabled {
            return;
        }
        text.set(e.value());
    };
    let mut _send = move || {
        if disabled {
            return;
        }
        let draft = text.cloned();
        if draft.trim().is_empty() {
            return;
        }
        on_send(draft);
        text.set("".to_string());
    };
    let send = move |_e: Event<MouseData>| {
        _send();
    };
    let disabled = if disabled { Some(true) } else { None };
    rsx! {
        div { class: "chat-input",
            if show_emoji() {
                div { class: "emoji-strip",
                    {EMOJIS.iter().map(|glyph| {
                        let glyph = *glyph;
                        rsx! {
                            button {
                                key: "{glyph}",
                                class: "emoji-button",
                                onclick: move |_| {
                                    text.with_mut(|t| t.push_str(glyph));
                                },
                                "{glyph}"
                            }
                        }
                    })}
                }
            }
            div { class: "chat-input-row",
                button {
                    class: "emoji-toggle",
                    disabled,
                    onclick: move |_| {
                        show_emoji.toggle();
                    },
                    "😊"
                }
                textarea {
                    class: "chat-input-box",
                    placeholder: "Type a message...",
                    disabled,
                    oninput: set_text,
                    onkeydown: move |e: Event<KeyboardData>| {
                        let code = e.data.code();
                        let modifiers = e.data.modifiers();
                        if code == Code::Enter && !modifiers.shift() {
                            e.prevent_default();
                            _send();
                        }
                    },
                    value: text,
                }
                button { class: "send-button", disabled, onclick: send, "➤" }
            }
        }
    }
}
