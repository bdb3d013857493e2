use serde::{Deserialize, Serialize};

/// How many messages the free plan includes.
pub const FREE_MESSAGE_LIMIT: u32 = 50;

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

/// A single message in the conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub author: Author,
    pub body: String,
}

impl Message {
    pub fn user(body: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            body: body.into(),
        }
    }

    pub fn assistant(body: impl Into<String>) -> Self {
        Self {
            author: Author::Assistant,
            body: body.into(),
        }
    }

    /// The message a fresh transcript opens with.
    pub fn greeting() -> Self {
        Self::assistant("Hi! Ask me anything, or open the tutorial from the ? button to take a quick tour.")
    }
}

/// Presentational message allowance backing the "messages left" counter.
///
/// Purely a display concern: the counter in the header and the disabled
/// input at zero. Nothing here talks to a billing or quota service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageQuota {
    used: u32,
    limit: u32,
}

impl MessageQuota {
    pub fn new(limit: u32) -> Self {
        Self { used: 0, limit }
    }

    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Counts one sent message. Saturates at the limit.
    pub fn record_send(&mut self) {
        if self.used < self.limit {
            self.used += 1;
        }
    }
}

impl Default for MessageQuota {
    fn default() -> Self {
        Self::new(FREE_MESSAGE_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_counts_down() {
        let mut quota = MessageQuota::new(3);
        assert_eq!(quota.remaining(), 3);
        quota.record_send();
        assert_eq!(quota.remaining(), 2);
        quota.record_send();
        quota.record_send();
        assert_eq!(quota.remaining(), 0);
        assert!(quota.is_exhausted());
    }

    #[test]
    fn test_quota_saturates_at_zero() {
        let mut quota = MessageQuota::new(1);
        quota.record_send();
        quota.record_send();
        quota.record_send();
        assert_eq!(quota.remaining(), 0);
    }

    #[test]
    fn test_default_quota_uses_free_limit() {
        let quota = MessageQuota::default();
        assert_eq!(quota.remaining(), FREE_MESSAGE_LIMIT);
        assert!(!quota.is_exhausted());
    }

    #[test]
    fn test_message_constructors_tag_author() {
        assert_eq!(Message::user("hi").author, Author::User);
        assert_eq!(Message::assistant("hello").author, Author::Assistant);
        assert_eq!(Message::greeting().author, Author::Assistant);
    }
}
