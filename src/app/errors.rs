//! Error descriptors and the per-scope presentation queue.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User-facing description of a failed operation.
///
/// Every failure gets a fresh `id`, so two failures with the same wording are
/// still distinct errors; dispatching the same descriptor twice is not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub id: Uuid,
    pub title: String,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Ordered, duplicate-free set of errors waiting to be presented.
///
/// Errors leave the queue only through [`ErrorQueue::acknowledge`] with the
/// exact descriptor that was presented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorQueue {
    pending: Vec<ErrorMessage>,
}

impl ErrorQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `error` unless an equal error is already pending.
    pub fn push(&mut self, error: ErrorMessage) -> bool {
        if self.pending.contains(&error) {
            return false;
        }
        self.pending.push(error);
        true
    }

    /// Remove exactly `error`. Returns false when it was not pending.
    pub fn acknowledge(&mut self, error: &ErrorMessage) -> bool {
        let before = self.pending.len();
        self.pending.retain(|pending| pending != error);
        before != self.pending.len()
    }

    /// The error to present next.
    pub fn first(&self) -> Option<&ErrorMessage> {
        self.pending.first()
    }

    pub fn contains(&self, error: &ErrorMessage) -> bool {
        self.pending.contains(error)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorMessage> {
        self.pending.iter()
    }

    /// True when acknowledging `error` would leave the queue clean.
    pub fn is_last(&self, error: &ErrorMessage) -> bool {
        self.pending.len() == 1 && self.pending[0] == *error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_deduplicates_equal_errors() {
        let mut queue = ErrorQueue::new();
        let error = ErrorMessage::new("Sign In Failed", "Bad password");
        assert!(queue.push(error.clone()));
        assert!(!queue.push(error));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn same_text_different_ids_are_distinct() {
        let mut queue = ErrorQueue::new();
        queue.push(ErrorMessage::new("Offline", "No network"));
        queue.push(ErrorMessage::new("Offline", "No network"));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn acknowledge_removes_only_matching_error() {
        let mut queue = ErrorQueue::new();
        let a = ErrorMessage::new("A", "first");
        let b = ErrorMessage::new("B", "second");
        queue.push(a.clone());
        queue.push(b.clone());

        assert!(queue.acknowledge(&a));
        assert_eq!(queue.first(), Some(&b));
        assert!(!queue.acknowledge(&a));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn first_is_stable_in_arrival_order() {
        let mut queue = ErrorQueue::new();
        let a = ErrorMessage::new("A", "first");
        let b = ErrorMessage::new("B", "second");
        queue.push(a.clone());
        queue.push(b);
        assert_eq!(queue.first(), Some(&a));
        assert!(!queue.is_last(&a));
    }

    #[test]
    fn is_last_only_for_single_matching_error() {
        let mut queue = ErrorQueue::new();
        let a = ErrorMessage::new("A", "first");
        assert!(!queue.is_last(&a));
        queue.push(a.clone());
        assert!(queue.is_last(&a));
    }
}
