//! Canned Reply Scheduling
//!
//! Every user submission schedules exactly one assistant reply after a fixed
//! delay. Each reply runs as its own tokio task that sleeps until its deadline
//! and then posts a [`ScheduledReply`] on a channel; the owner drains the
//! channel once per frame with [`ReplyScheduler::drain`].
//!
//! The scheduler keeps every task handle. [`ReplyScheduler::cancel_all`] (also
//! run on `Drop`) aborts whatever has not fired yet, so a conversation that
//! is torn down mid-delay never receives a late append.
//!
//! ```text
//! submit ──► schedule() ──► tokio::spawn(sleep_until(deadline); tx.send)
//!                                                     │
//! frame tick ──► drain() ◄──────────── rx ◄───────────┘
//! ```

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::messages::TurnId;
use crate::personality::PersonalityVariant;

/// Fixed assistant reply text
pub const CANNED_REPLY: &str = "That's a wonderful observation! I can see your confidence \
growing with each exchange. What would you like to explore next?";

/// Default delay between a user submission and the assistant reply
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// A reply whose timer has fired
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledReply {
    /// The user turn this reply answers
    pub reply_to: TurnId,
    /// Personality captured when the user submitted
    pub personality: PersonalityVariant,
    /// Reply text
    pub content: String,
}

struct PendingReply {
    reply_to: TurnId,
    handle: JoinHandle<()>,
}

/// Owns the delayed reply tasks for one conversation
pub struct ReplyScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<ScheduledReply>,
    rx: mpsc::UnboundedReceiver<ScheduledReply>,
    pending: Vec<PendingReply>,
}

impl ReplyScheduler {
    /// Create a scheduler with the given reply delay
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            tx,
            rx,
            pending: Vec::new(),
        }
    }

    /// Configured delay
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule one reply to `reply_to`
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, reply_to: TurnId, personality: PersonalityVariant) {
        let deadline = Instant::now() + self.delay;
        let tx = self.tx.clone();
        let reply = ScheduledReply {
            reply_to: reply_to.clone(),
            personality,
            content: CANNED_REPLY.to_string(),
        };

        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Receiver gone means the conversation was dropped
            let _ = tx.send(reply);
        });

        tracing::debug!(
            reply_to = %reply_to,
            ?personality,
            delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX),
            "reply scheduled"
        );
        self.pending.push(PendingReply { reply_to, handle });
    }

    /// Take every reply that has fired, in arrival order
    pub fn drain(&mut self) -> Vec<ScheduledReply> {
        let mut ready = Vec::new();
        while let Ok(reply) = self.rx.try_recv() {
            ready.push(reply);
        }
        if !ready.is_empty() {
            self.pending
                .retain(|p| !ready.iter().any(|r| r.reply_to == p.reply_to));
        }
        ready
    }

    /// Number of replies scheduled but not yet drained
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Abort every reply that has not fired yet
    pub fn cancel_all(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        tracing::debug!(count = self.pending.len(), "cancelling pending replies");
        for pending in self.pending.drain(..) {
            pending.handle.abort();
        }
        // Discard anything that fired but was never drained
        while self.rx.try_recv().is_ok() {}
    }
}

impl Default for ReplyScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(1500));
        let id = TurnId::generate();
        scheduler.schedule(id.clone(), PersonalityVariant::Friend);

        tokio::time::sleep(Duration::from_millis(1400)).await;
        assert!(scheduler.drain().is_empty());
        assert_eq!(scheduler.pending_count(), 1);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let replies = scheduler.drain();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].reply_to, id);
        assert_eq!(replies[0].content, CANNED_REPLY);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_schedule_is_independent() {
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(100));
        let first = TurnId::generate();
        let second = TurnId::generate();
        scheduler.schedule(first.clone(), PersonalityVariant::Friend);
        tokio::time::sleep(Duration::from_millis(10)).await;
        scheduler.schedule(second.clone(), PersonalityVariant::Coach);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let replies = scheduler.drain();
        let ids: Vec<_> = replies.iter().map(|r| r.reply_to.clone()).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(replies[1].personality, PersonalityVariant::Coach);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_prevents_delivery() {
        let mut scheduler = ReplyScheduler::new(Duration::from_millis(100));
        scheduler.schedule(TurnId::generate(), PersonalityVariant::Friend);
        scheduler.schedule(TurnId::generate(), PersonalityVariant::Friend);
        assert_eq!(scheduler.pending_count(), 2);

        scheduler.cancel_all();
        assert_eq!(scheduler.pending_count(), 0);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(scheduler.drain().is_empty());
    }

    #[test]
    fn test_default_delay_is_one_and_a_half_seconds() {
        assert_eq!(DEFAULT_REPLY_DELAY, Duration::from_millis(1500));
    }
}
