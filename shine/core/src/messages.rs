//! Chat Turns
//!
//! One entry in the conversation log. Turns are created when the user
//! submits a message or when a scheduled assistant reply fires, and are never
//! edited afterwards: fields are private and only readable.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::personality::PersonalityVariant;

/// Unique, opaque turn identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnId(pub String);

impl TurnId {
    /// Generate a new unique turn ID
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("turn_{}", Uuid::new_v4().simple()))
    }

    /// Get the string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person being coached
    User,
    /// The coach
    Assistant,
}

/// A single entry in the conversation log
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatTurn {
    id: TurnId,
    content: String,
    sender: Sender,
    timestamp: DateTime<Local>,
    personality: Option<PersonalityVariant>,
}

impl ChatTurn {
    /// A user turn stamped with the current time
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::user_at(content, Local::now())
    }

    /// A user turn with an explicit timestamp
    #[must_use]
    pub fn user_at(content: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            id: TurnId::generate(),
            content: content.into(),
            sender: Sender::User,
            timestamp,
            personality: None,
        }
    }

    /// An assistant turn tagged with the personality that produced it
    #[must_use]
    pub fn assistant(content: impl Into<String>, personality: PersonalityVariant) -> Self {
        Self::assistant_at(content, personality, Local::now())
    }

    /// An assistant turn with an explicit timestamp
    #[must_use]
    pub fn assistant_at(
        content: impl Into<String>,
        personality: PersonalityVariant,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            id: TurnId::generate(),
            content: content.into(),
            sender: Sender::Assistant,
            timestamp,
            personality: Some(personality),
        }
    }

    /// Unique ID
    #[must_use]
    pub fn id(&self) -> &TurnId {
        &self.id
    }

    /// Message text
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Author
    #[must_use]
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Whether the user wrote this turn
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Creation time
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Personality tag (assistant turns only)
    #[must_use]
    pub fn personality(&self) -> Option<PersonalityVariant> {
        self.personality
    }

    /// Timestamp as local hour:minute
    #[must_use]
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_turn_ids_are_unique() {
        let a = ChatTurn::user("one");
        let b = ChatTurn::user("one");
        assert_ne!(a.id(), b.id());
        assert!(a.id().as_str().starts_with("turn_"));
    }

    #[test]
    fn test_turn_id_serializes_as_plain_string() {
        let id = TurnId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_str()));
        assert!(id.as_str().starts_with("turn_"));
    }

    #[test]
    fn test_user_turn_has_no_personality() {
        let turn = ChatTurn::user("hi");
        assert_eq!(turn.sender(), Sender::User);
        assert!(turn.is_user());
        assert_eq!(turn.personality(), None);
    }

    #[test]
    fn test_assistant_turn_carries_personality() {
        let turn = ChatTurn::assistant("hey", PersonalityVariant::Coach);
        assert_eq!(turn.sender(), Sender::Assistant);
        assert_eq!(turn.personality(), Some(PersonalityVariant::Coach));
    }

    #[test]
    fn test_time_label_is_hour_minute() {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 42).unwrap();
        let turn = ChatTurn::user_at("morning", ts);
        assert_eq!(turn.time_label(), "07:05");
    }
}
