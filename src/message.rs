//! Status message with timed expiry

use crate::constants::ui::MESSAGE_TIMEOUT_SECS;
use std::time::{Duration, Instant};

/// A transient message for the message bar.
///
/// The message reads as empty once the timeout has elapsed; in a
/// single-threaded event loop this is equivalent to the original's
/// fire-and-forget clear timer.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    text: String,
    set_at: Option<Instant>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message and restart the expiry clock
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.set_at = Some(Instant::now());
    }

    /// Current message text, or "" if expired or never set
    #[must_use]
    pub fn text(&self) -> &str {
        match self.set_at {
            Some(at) if at.elapsed() < Duration::from_secs(MESSAGE_TIMEOUT_SECS) => &self.text,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_message_is_empty() {
        let msg = StatusMessage::new();
        assert_eq!(msg.text(), "");
    }

    #[test]
    fn test_set_message_is_visible() {
        let mut msg = StatusMessage::new();
        msg.set("12 bytes written to disk");
        assert_eq!(msg.text(), "12 bytes written to disk");
    }

    #[test]
    fn test_expired_message_is_empty() {
        let mut msg = StatusMessage::new();
        msg.set("old news");
        // Rewind the clock past the timeout instead of sleeping
        msg.set_at = Instant::now().checked_sub(Duration::from_secs(MESSAGE_TIMEOUT_SECS + 1));
        assert_eq!(msg.text(), "");
    }

    #[test]
    fn test_reset_restarts_expiry() {
        let mut msg = StatusMessage::new();
        msg.set("first");
        msg.set("second");
        assert_eq!(msg.text(), "second");
    }
}
