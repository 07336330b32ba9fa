//! User notifications
//!
//! The console's toast analog. Fetch and mutation failures surface one
//! notice each; the rendering layer decides how to show them.

use parking_lot::Mutex;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single user-facing notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Sink for user-facing notices
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);

    fn info(&self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }

    fn warn(&self, message: &str) {
        self.notify(NoticeLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }
}

/// Notifier that forwards notices to the tracing subscriber
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info | NoticeLevel::Success => tracing::info!(target: "notice", "{message}"),
            NoticeLevel::Warning => tracing::warn!(target: "notice", "{message}"),
            NoticeLevel::Error => tracing::error!(target: "notice", "{message}"),
        }
    }
}

/// Notifier that buffers notices in memory (used by tests and by
/// rendering layers that poll)
#[derive(Debug, Default)]
pub struct BufferNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl BufferNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all buffered notices
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut self.notices.lock())
    }
}

impl Notifier for BufferNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.lock().push(Notice {
            level,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_notifier_drains_in_order() {
        let notifier = BufferNotifier::new();
        notifier.error("fetch failed");
        notifier.success("saved");

        let notices = notifier.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[1].message, "saved");
        assert!(notifier.drain().is_empty());
    }
}
