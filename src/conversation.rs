use serde::{Deserialize, Serialize};

/// Summary of one conversation shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: u32,
    pub name: String,
    pub active: bool,
}

/// The conversation list a fresh session starts with.
///
/// The sidebar is a read-only view over whatever list the host hands it;
/// until a conversation service is wired up that is this single entry.
pub fn seed_conversations() -> Vec<Conversation> {
    vec![Conversation {
        id: 1,
        name: "New Conversation".to_string(),
        active: true,
    }]
}
