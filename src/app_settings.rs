use serde::{Deserialize, Serialize};

/// Who can see the user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    Private,
    Friends,
    Public,
}

impl Privacy {
    /// All selectable levels, in display order.
    pub const ALL: [Privacy; 3] = [Privacy::Private, Privacy::Friends, Privacy::Public];

    pub fn label(&self) -> &'static str {
        match self {
            Privacy::Private => "Private",
            Privacy::Friends => "Friends Only",
            Privacy::Public => "Public",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Privacy::Private => "private",
            Privacy::Friends => "friends",
            Privacy::Public => "public",
        }
    }

    pub fn from_key(key: &str) -> Option<Privacy> {
        Privacy::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// User-tunable chat preferences.
///
/// Every cell is independent: each setter touches exactly one field. Dark
/// mode is pinned on in this build and has no setter, the settings dialog
/// shows it as always enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSettings {
    pub dark_mode: bool,
    pub notifications: bool,
    pub email_notifications: bool,
    pub sound_enabled: bool,
    pub privacy: Privacy,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            notifications: true,
            email_notifications: false,
            sound_enabled: true,
            privacy: Privacy::Private,
        }
    }
}

impl ChatSettings {
    pub fn toggle_notifications(&mut self) {
        self.notifications = !self.notifications;
    }

    pub fn toggle_email_notifications(&mut self) {
        self.email_notifications = !self.email_notifications;
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    pub fn set_privacy(&mut self, privacy: Privacy) {
        self.privacy = privacy;
    }
}
