use dioxus::prelude::*;

use crate::tutorial::{TutorialState, TOTAL_STEPS, TUTORIAL_STEPS};
use crate::ui::modal::Modal;

/// Tutorial walkthrough dialog.
#[component]
pub fn HelpDialog(open: bool, on_open_change: EventHandler<bool>) -> Element {
    rsx! {
        Modal { open, on_open_change, title: "Tutorial & Help",
            TutorialPages { on_open_change }
        }
    }
}

/// The pages inside the help dialog. The page cursor lives here so it is
/// dropped together with the dialog content and a reopened tutorial starts
/// over from the first page.
#[component]
fn TutorialPages(on_open_change: EventHandler<bool>) -> Element {
    let mut tutorial = use_signal(TutorialState::new);

    let state = tutorial();
    let step = state.current_step();
    let percent = (state.progress() * 100.0).round() as u32;

    rsx! {
        div { class: "tutorial",
            div { class: "tutorial-icon-row",
                div { class: "tutorial-icon", "{step.icon}" }
            }
            div { class: "tutorial-body",
                h4 { class: "tutorial-step-title", "{step.title}" }
                p { class: "tutorial-step-description", "{step.description}" }
                div { class: "tutorial-tip",
                    span { "👉" }
                    span { "Tip: {step.highlight}" }
                }
            }
            div { class: "tutorial-progress",
                div { class: "progress-track", title: "{percent}% complete",
                    {TUTORIAL_STEPS.iter().enumerate().map(|(idx, _)| {
                        let class = if idx == state.current_index() {
                            "progress-segment current"
                        } else if idx < state.current_index() {
                            "progress-segment visited"
                        } else {
                            "progress-segment upcoming"
                        };
                        rsx! {
                            div { key: "{idx}", class: "{class}" }
                        }
                    })}
                }
                p { class: "progress-caption", "Step {state.step_number()} of {TOTAL_STEPS}" }
            }
            div { class: "tutorial-nav",
                button {
                    class: "nav-button previous",
                    disabled: state.is_at_start(),
                    onclick: move |_| {
                        tutorial.with_mut(|t| {
                            t.previous_step();
                        });
                    },
                    "‹ Previous"
                }
                button {
                    class: "nav-button close",
                    onclick: move |_| {
                        on_open_change.call(false);
                    },
                    "Close"
                }
                button {
                    class: "nav-button next",
                    disabled: state.is_at_end(),
                    onclick: move |_| {
                        tutorial.with_mut(|t| {
                            t.next_step();
                        });
                    },
                    "Next ›"
                }
            }
        }
    }
}
