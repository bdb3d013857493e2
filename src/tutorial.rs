//! Tutorial walkthrough state.
//!
//! Holds the fixed sequence of tutorial pages and the cursor that moves
//! through them. Rendering lives in `ui::help`; this module knows nothing
//! about Dioxus.

/// Total number of tutorial steps.
pub const TOTAL_STEPS: usize = 6;

/// One page of the tutorial walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialStep {
    /// Heading shown at the top of the page.
    pub title: &'static str,
    /// Body copy for the page.
    pub description: &'static str,
    /// Name of the interface element this page points at.
    pub highlight: &'static str,
    /// Decorative glyph for the icon circle.
    pub icon: &'static str,
}

/// The walkthrough pages, in display order.
pub const TUTORIAL_STEPS: [TutorialStep; TOTAL_STEPS] = [
    TutorialStep {
        title: "Welcome to the Chat",
        description: "This is your intelligent chat interface. You can have \
                      conversations with AI and manage multiple chats.",
        highlight: "main",
        icon: "✨",
    },
    TutorialStep {
        title: "Create New Conversations",
        description: "Click the 'New conversation' button in the sidebar to \
                      start a fresh chat. Each conversation is saved separately.",
        highlight: "newChat",
        icon: "➕",
    },
    TutorialStep {
        title: "Manage Your Chats",
        description: "Hover over any conversation to see edit and delete \
                      options. Rename conversations or remove ones you no \
                      longer need.",
        highlight: "conversations",
        icon: "✏️",
    },
    TutorialStep {
        title: "Send Messages",
        description: "Type your message in the input box at the bottom. Press \
                      Enter to send, or use Shift+Enter for a new line.",
        highlight: "input",
        icon: "💬",
    },
    TutorialStep {
        title: "Emoji Support",
        description: "Click the smile icon to add emojis to your messages. \
                      Make your conversations more expressive!",
        highlight: "emoji",
        icon: "😊",
    },
    TutorialStep {
        title: "Check Your Usage",
        description: "The message counter shows how many messages you have \
                      left. Upgrade your plan for more messages.",
        highlight: "messages",
        icon: "📊",
    },
];

/// Tracks which tutorial page is currently displayed.
///
/// The cursor always stays inside `0..TOTAL_STEPS`; moving past either end is
/// a no-op. Closing the dialog is not a state transition here, the host owns
/// visibility and the cursor is simply dropped with the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialState {
    current: usize,
}

impl TutorialState {
    /// Creates a cursor positioned on the first page.
    pub fn new() -> Self {
        Self { current: 0 }
    }

    /// Zero-based index of the current page.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// One-based step number for progress captions.
    pub fn step_number(&self) -> usize {
        self.current + 1
    }

    /// The page currently displayed.
    pub fn current_step(&self) -> &'static TutorialStep {
        &TUTORIAL_STEPS[self.current]
    }

    /// Advances to the next page.
    ///
    /// Returns `false` (and leaves the cursor unchanged) on the last page.
    pub fn next_step(&mut self) -> bool {
        if self.current + 1 < TOTAL_STEPS {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Moves back to the previous page.
    ///
    /// Returns `false` (and leaves the cursor unchanged) on the first page.
    pub fn previous_step(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Whether the cursor is on the first page.
    pub fn is_at_start(&self) -> bool {
        self.current == 0
    }

    /// Whether the cursor is on the last page.
    pub fn is_at_end(&self) -> bool {
        self.current == TOTAL_STEPS - 1
    }

    /// Fraction of the walkthrough covered so far, in `(0.0, 1.0]`.
    ///
    /// Derived as `(index + 1) / total`, so the first page already shows some
    /// progress and the last page reads exactly `1.0`.
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / TOTAL_STEPS as f64
    }

    /// Puts the cursor back on the first page.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

impl Default for TutorialState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_page() {
        let state = TutorialState::new();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.step_number(), 1);
        assert!(state.is_at_start());
        assert!(!state.is_at_end());
        assert_eq!(state.current_step().title, "Welcome to the Chat");
    }

    #[test]
    fn test_next_step_walks_forward() {
        let mut state = TutorialState::new();
        assert!(state.next_step());
        assert_eq!(state.current_index(), 1);
        assert!(state.next_step());
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn test_next_step_is_noop_on_last_page() {
        let mut state = TutorialState::new();
        for _ in 0..TOTAL_STEPS - 1 {
            assert!(state.next_step());
        }
        assert!(state.is_at_end());
        assert!(!state.next_step());
        assert_eq!(state.current_index(), TOTAL_STEPS - 1);
        assert!(!state.next_step());
        assert_eq!(state.current_index(), TOTAL_STEPS - 1);
    }

    #[test]
    fn test_previous_step_is_noop_on_first_page() {
        let mut state = TutorialState::new();
        assert!(!state.previous_step());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_back_and_forth_returns_to_same_page() {
        for start in 1..TOTAL_STEPS {
            let mut state = TutorialState::new();
            for _ in 0..start {
                state.next_step();
            }
            assert!(state.previous_step());
            assert!(state.next_step());
            assert_eq!(state.current_index(), start);
        }
        for start in 0..TOTAL_STEPS - 1 {
            let mut state = TutorialState::new();
            for _ in 0..start {
                state.next_step();
            }
            assert!(state.next_step());
            assert!(state.previous_step());
            assert_eq!(state.current_index(), start);
        }
    }

    #[test]
    fn test_progress_is_monotone_and_reaches_one() {
        let mut state = TutorialState::new();
        let mut last = state.progress();
        assert!(last > 0.0);
        while state.next_step() {
            let p = state.progress();
            assert!(p >= last);
            last = p;
        }
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn test_full_walkthrough_scenario() {
        let mut state = TutorialState::new();
        assert_eq!(state.current_step().title, "Welcome to the Chat");

        for _ in 0..5 {
            assert!(state.next_step());
        }
        assert_eq!(state.current_index(), 5);
        assert_eq!(state.progress(), 1.0);
        assert!(!state.next_step());

        for _ in 0..5 {
            assert!(state.previous_step());
        }
        assert!(!state.previous_step());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut state = TutorialState::new();
        state.next_step();
        state.next_step();
        state.reset();
        assert!(state.is_at_start());
    }

    #[test]
    fn test_step_table_shape() {
        assert_eq!(TUTORIAL_STEPS.len(), TOTAL_STEPS);
        for step in &TUTORIAL_STEPS {
            assert!(!step.title.is_empty());
            assert!(!step.description.is_empty());
            assert!(!step.highlight.is_empty());
            assert!(!step.icon.is_empty());
        }
    }
}
