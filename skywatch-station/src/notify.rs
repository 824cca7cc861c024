//! Notification Delivery with Duplicate Suppression
//!
//! The engine produces two kinds of user-visible messages: urgent threshold
//! alerts (the sink is expected to add an audible cue) and plain status
//! notices such as fetch failures. Both flow through [`Notifier`], which
//! suppresses a message while an identical one is still visible, so a
//! failure repeating on every poll tick surfaces exactly once per
//! visibility window.
//!
//! Suppression is by exact text. Two different failure messages are two
//! different notifications.

use skywatch_core::constants::NOTIFICATION_VISIBLE_MS;
use skywatch_core::time::Timestamp;

/// Where notifications go. Implementations decide presentation; `urgent`
/// marks messages that warrant an audible cue.
pub trait NotificationSink: Send {
    fn notify(&mut self, message: &str, urgent: bool);
}

/// Deduplicating front door for a [`NotificationSink`].
pub struct Notifier {
    sink: Box<dyn NotificationSink>,
    visible: Vec<(String, Timestamp)>,
}

impl Notifier {
    pub fn new(sink: Box<dyn NotificationSink>) -> Self {
        Self {
            sink,
            visible: Vec::new(),
        }
    }

    /// Deliver a message unless an identical one is still visible.
    /// Returns whether the sink was invoked.
    pub fn notify(&mut self, now: Timestamp, message: &str, urgent: bool) -> bool {
        self.visible
            .retain(|(_, shown)| now.saturating_sub(*shown) < NOTIFICATION_VISIBLE_MS);

        if self.visible.iter().any(|(text, _)| text == message) {
            return false;
        }

        self.visible.push((message.to_string(), now));
        self.sink.notify(message, urgent);
        true
    }
}

/// Sink that forwards to the `log` facade. Urgent messages log at warn.
#[derive(Debug, Default)]
pub struct LogNotifications;

impl NotificationSink for LogNotifications {
    fn notify(&mut self, message: &str, urgent: bool) {
        if urgent {
            log::warn!("ALERT: {message}");
        } else {
            log::info!("{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct Recorder {
        seen: Arc<Mutex<Vec<(String, bool)>>>,
    }

    impl NotificationSink for Recorder {
        fn notify(&mut self, message: &str, urgent: bool) {
            self.seen.lock().unwrap().push((message.to_string(), urgent));
        }
    }

    #[test]
    fn duplicate_text_is_suppressed_while_visible() {
        let recorder = Recorder::default();
        let seen = recorder.seen.clone();
        let mut notifier = Notifier::new(Box::new(recorder));

        assert!(notifier.notify(0, "Request failed: timeout", false));
        assert!(!notifier.notify(500, "Request failed: timeout", false));
        assert!(!notifier.notify(1999, "Request failed: timeout", false));

        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn message_reappears_after_visibility_expires() {
        let recorder = Recorder::default();
        let seen = recorder.seen.clone();
        let mut notifier = Notifier::new(Box::new(recorder));

        assert!(notifier.notify(0, "Temperature above 30°C!", true));
        assert!(notifier.notify(2000, "Temperature above 30°C!", true));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|(_, urgent)| *urgent));
    }

    #[test]
    fn distinct_texts_are_independent() {
        let recorder = Recorder::default();
        let seen = recorder.seen.clone();
        let mut notifier = Notifier::new(Box::new(recorder));

        assert!(notifier.notify(0, "Request failed: timeout", false));
        assert!(notifier.notify(10, "Device returned HTTP 500", false));

        assert_eq!(seen.lock().unwrap().len(), 2);
    }
}
