use dioxus::prelude::*;

use crate::app_settings::{ChatSettings, Privacy};
use crate::ui::modal::Modal;
use crate::ui::toggle::ToggleSwitch;

/// Settings dialog. Edits the app-wide [`ChatSettings`] signal in place,
/// so closing the dialog loses nothing.
#[component]
pub fn SettingsDialog(open: bool, on_open_change: EventHandler<bool>) -> Element {
    let mut settings = consume_context::<Signal<ChatSettings>>();
    let current = settings();
    let privacy = current.privacy;

    rsx! {
        Modal { open, on_open_change, title: "Settings",
            div { class: "settings-rows",
                // Dark mode has no off position, the row is informational.
                div { class: "settings-row",
                    div { class: "settings-row-info",
                        span { class: "settings-row-icon", "🌙" }
                        div {
                            p { class: "settings-row-name", "Dark Mode" }
                            p { class: "settings-row-hint", "Always enabled" }
                        }
                    }
                    ToggleSwitch { on: current.dark_mode, pinned: true }
                }
                ToggleRow {
                    icon: "🔔",
                    name: "Notifications",
                    hint: "In-app alerts",
                    on: current.notifications,
                    ontoggle: move |_| {
                        settings.with_mut(|s| s.toggle_notifications());
                    },
                }
                ToggleRow {
                    icon: "🔒",
                    name: "Email Updates",
                    hint: "Weekly digest",
                    on: current.email_notifications,
                    ontoggle: move |_| {
                        settings.with_mut(|s| s.toggle_email_notifications());
                    },
                }
                ToggleRow {
                    icon: "🔊",
                    name: "Sound Effects",
                    hint: "Message alerts",
                    on: current.sound_enabled,
                    ontoggle: move |_| {
                        settings.with_mut(|s| s.toggle_sound());
                    },
                }
                div { class: "settings-row privacy",
                    p { class: "settings-row-name", "Privacy" }
                    select {
                        class: "privacy-select",
                        onchange: move |e: Event<FormData>| {
                            if let Some(p) = Privacy::from_key(&e.value()) {
                                settings.with_mut(|s| s.set_privacy(p));
                            }
                        },
                        {Privacy::ALL.into_iter().map(|p| {
                            rsx! {
                                option {
                                    key: "{p.key()}",
                                    value: "{p.key()}",
                                    selected: p == privacy,
                                    "{p.label()}"
                                }
                            }
                        })}
                    }
                }
                div { class: "settings-note",
                    p {
                        "Settings are saved automatically. Changes may take a few \
                         seconds to sync across devices."
                    }
                }
            }
        }
    }
}

/// One clickable settings row with a name, a hint line and a toggle pill.
#[component]
fn ToggleRow(
    icon: String,
    name: String,
    hint: String,
    on: bool,
    ontoggle: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "settings-row clickable",
            onclick: move |_| {
                ontoggle.call(());
            },
            div { class: "settings-row-info",
                span { class: "settings-row-icon", "{icon}" }
                div {
                    p { class: "settings-row-name", "{name}" }
                    p { class: "settings-row-hint", "{hint}" }
                }
            }
            ToggleSwitch { on }
        }
    }
}
