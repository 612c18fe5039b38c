//! Conversation State
//!
//! The chat screen's state container: the append-only turn log, the draft
//! the user is typing, the (cosmetic) listening flag, and the reply scheduler
//! that answers each submission after a fixed delay.
//!
//! # Invariants
//!
//! - Turns are only ever appended; the log is ordered by insertion.
//! - Each accepted submission schedules exactly one reply.
//! - Empty or whitespace-only submissions are ignored without touching the
//!   log or the draft.
//! - Dropping the conversation cancels replies that have not fired.

use std::time::Duration;

use chrono::Local;

use crate::messages::{ChatTurn, TurnId};
use crate::personality::PersonalityVariant;
use crate::reply::{ReplyScheduler, DEFAULT_REPLY_DELAY};

/// Quick suggestions offered under the message list
pub const SUGGESTIONS: [&str; 3] = [
    "Could you help me express this better?",
    "I'm feeling more confident today",
    "Let's practice job interview scenarios",
];

/// Placeholder shown in the empty input box
pub const INPUT_PLACEHOLDER: &str = "Breathe. Speak. Shine.";

/// Chat screen state
pub struct Conversation {
    turns: Vec<ChatTurn>,
    draft: String,
    listening: bool,
    personality: PersonalityVariant,
    scheduler: ReplyScheduler,
}

impl Conversation {
    /// Create an empty conversation
    #[must_use]
    pub fn new(personality: PersonalityVariant, reply_delay: Duration) -> Self {
        Self {
            turns: Vec::new(),
            draft: String::new(),
            listening: false,
            personality,
            scheduler: ReplyScheduler::new(reply_delay),
        }
    }

    /// Create a conversation seeded with the opening exchange
    #[must_use]
    pub fn with_opening(personality: PersonalityVariant, reply_delay: Duration) -> Self {
        let mut conversation = Self::new(personality, reply_delay);
        let now = Local::now();
        conversation.turns = vec![
            ChatTurn::assistant_at(
                "I noticed you used 'articulate' beautifully just now. That word carries \
                 such power when you own it like that.",
                personality,
                now - chrono::Duration::seconds(60),
            ),
            ChatTurn::user_at(
                "Really? I wasn't sure if I used it correctly.",
                now - chrono::Duration::seconds(30),
            ),
            ChatTurn::assistant_at(
                "Absolutely. Your intuition guided you perfectly. Let's explore more words \
                 that feel natural to you...",
                personality,
                now,
            ),
        ];
        conversation
    }

    /// All turns, oldest first
    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Current draft text
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether the voice button is toggled on
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Personality that will tag the next scheduled reply
    #[must_use]
    pub fn personality(&self) -> PersonalityVariant {
        self.personality
    }

    /// Replies scheduled but not yet appended
    #[must_use]
    pub fn pending_replies(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Whether the draft would be accepted by [`Conversation::submit_draft`]
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Submit `text` as a user turn
    ///
    /// Returns `None` and changes nothing when `text` is empty or
    /// whitespace-only. Otherwise appends the user turn, clears the draft,
    /// and schedules one assistant reply. Requires a tokio runtime.
    pub fn submit(&mut self, text: &str) -> Option<TurnId> {
        if text.trim().is_empty() {
            return None;
        }

        let turn = ChatTurn::user(text);
        let id = turn.id().clone();
        self.turns.push(turn);
        self.draft.clear();
        self.scheduler.schedule(id.clone(), self.personality);

        tracing::debug!(turn = %id, total = self.turns.len(), "user turn appended");
        Some(id)
    }

    /// Submit the current draft
    pub fn submit_draft(&mut self) -> Option<TurnId> {
        let text = self.draft.clone();
        self.submit(&text)
    }

    /// Copy a suggestion into the draft without sending it
    pub fn select_suggestion(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Flip the voice input flag (no audio capture is involved)
    pub fn toggle_listening(&mut self) {
        self.listening = !self.listening;
    }

    /// Append a character to the draft
    pub fn push_char(&mut self, c: char) {
        self.draft.push(c);
    }

    /// Remove the last character of the draft
    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    /// Change the personality used for replies scheduled from now on
    pub fn set_personality(&mut self, personality: PersonalityVariant) {
        self.personality = personality;
    }

    /// Append every reply whose timer has fired; returns how many
    pub fn poll_replies(&mut self) -> usize {
        let replies = self.scheduler.drain();
        let count = replies.len();
        for reply in replies {
            let turn = ChatTurn::assistant(reply.content, reply.personality);
            tracing::debug!(turn = %turn.id(), reply_to = %reply.reply_to, "assistant turn appended");
            self.turns.push(turn);
        }
        count
    }

    /// Cancel every pending reply
    pub fn teardown(&mut self) {
        self.scheduler.cancel_all();
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::with_opening(PersonalityVariant::default(), DEFAULT_REPLY_DELAY)
    }
}
