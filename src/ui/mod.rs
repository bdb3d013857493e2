//! User interface components for chatdeck.
//!
//! This module contains all the UI components that make up the application
//! interface, including the main chat screen, the dialogs and various
//! reusable components.

mod chat_input;    // Chat message input component
mod help;          // Tutorial walkthrough dialog
pub mod home;      // Main chat screen (public for routing)
mod message;       // Message display component
mod modal;         // Shared dialog overlay
mod settings;      // Settings dialog
mod sidebar;       // Conversation sidebar
mod toggle;        // Toggle switch pill
