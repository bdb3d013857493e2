use serde::{Deserialize, Serialize};

/// The identity shown in the sidebar header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Nothing".to_string(),
            email: "nothing@example.com".to_string(),
        }
    }
}

impl UserProfile {
    /// Uppercase first letter of the name, for the avatar circle.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_is_uppercase_first_letter() {
        let profile = UserProfile {
            name: "nothing".to_string(),
            email: "nothing@example.com".to_string(),
        };
        assert_eq!(profile.initial(), "N");
        assert_eq!(UserProfile::default().initial(), "N");
    }

    #[test]
    fn test_initial_falls_back_on_empty_name() {
        let profile = UserProfile {
            name: String::new(),
            email: String::new(),
        };
        assert_eq!(profile.initial(), "?");
    }
}
