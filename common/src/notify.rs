//! ユーザー通知
//!
//! 通知は観測用の副作用で、ワークフローの正しさには関与しない。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// 通知の送り先（トースト、コンソール等）
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// 受け取った通知を溜めるだけの実装
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_severity() {
        let n = Notification::new("Upload complete", "done");
        assert_eq!(n.severity, Severity::Default);
        assert!(!n.is_destructive());
    }

    #[test]
    fn test_destructive() {
        let n = Notification::destructive("Invalid JSON", "syntax");
        assert!(n.is_destructive());
        assert_eq!(n.title, "Invalid JSON");
    }

    #[test]
    fn test_vec_notifier_records_in_order() {
        let mut log: Vec<Notification> = Vec::new();
        log.notify(Notification::new("a", ""));
        log.notify(Notification::destructive("b", ""));
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].title, "a");
        assert!(log[1].is_destructive());
    }
}
