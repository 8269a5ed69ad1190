//! Chat message model.
//!
//! Messages of a consultation session live only in memory. They are appended
//! in display order and discarded with the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of a consultation conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub is_from_user: bool,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// A message typed by the customer.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_from_user: true,
            sent_at: Utc::now(),
        }
    }

    /// A message produced by the assistant.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_from_user: false,
            sent_at: Utc::now(),
        }
    }

    /// Display label of the author.
    pub fn author(&self) -> &'static str {
        if self.is_from_user { "You" } else { "Assistant" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_author() {
        assert!(ChatMessage::user("hi").is_from_user);
        assert_eq!(ChatMessage::assistant("hello").author(), "Assistant");
    }
}
