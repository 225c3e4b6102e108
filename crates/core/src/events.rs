//! Outcome notification sinks.
//!
//! Each operation family (create, search, update, delete) gets its own
//! publisher, injected into the controller through [`Publishers`]. Publishing
//! is fire-and-forget: nothing comes back to the caller.

use std::cell::RefCell;
use std::rc::Rc;

use crate::outcome::OperationKind;

/// Receives one message per completed operation.
pub trait EventPublisher {
    fn publish(&self, message: &str);
}

impl<P: EventPublisher + ?Sized> EventPublisher for Box<P> {
    fn publish(&self, message: &str) {
        (**self).publish(message)
    }
}

impl<P: EventPublisher + ?Sized> EventPublisher for Rc<P> {
    fn publish(&self, message: &str) {
        (**self).publish(message)
    }
}

/// Emits every message as a `tracing` event under `roster::events`.
#[derive(Debug, Clone, Copy)]
pub struct LogPublisher {
    family: &'static str,
}

impl LogPublisher {
    pub fn new(family: &'static str) -> Self {
        LogPublisher { family }
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, message: &str) {
        tracing::info!(target: "roster::events", operation = self.family, "{}", message);
    }
}

/// Keeps published messages in memory.
///
/// Clones share the same buffer, so a caller can hand one clone to the
/// controller and read messages back through another.
#[derive(Debug, Clone, Default)]
pub struct RecordingPublisher {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// The four publisher handles the controller routes outcomes to.
pub struct Publishers {
    pub create: Box<dyn EventPublisher>,
    pub search: Box<dyn EventPublisher>,
    pub update: Box<dyn EventPublisher>,
    pub delete: Box<dyn EventPublisher>,
}

impl Publishers {
    /// One [`LogPublisher`] per family.
    pub fn logging() -> Self {
        Publishers {
            create: Box::new(LogPublisher::new("create")),
            search: Box::new(LogPublisher::new("search")),
            update: Box::new(LogPublisher::new("update")),
            delete: Box::new(LogPublisher::new("delete")),
        }
    }

    /// The publisher responsible for `kind`. All search variants share one.
    pub fn for_kind(&self, kind: OperationKind) -> &dyn EventPublisher {
        match kind {
            OperationKind::Create => &*self.create,
            OperationKind::SearchById
            | OperationKind::SearchByName
            | OperationKind::SearchByDept => &*self.search,
            OperationKind::Update => &*self.update,
            OperationKind::Delete => &*self.delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_kinds_share_one_publisher() {
        let create = RecordingPublisher::new();
        let search = RecordingPublisher::new();
        let update = RecordingPublisher::new();
        let delete = RecordingPublisher::new();
        let publishers = Publishers {
            create: Box::new(create.clone()),
            search: Box::new(search.clone()),
            update: Box::new(update.clone()),
            delete: Box::new(delete.clone()),
        };

        publishers.for_kind(OperationKind::SearchById).publish("a");
        publishers.for_kind(OperationKind::SearchByName).publish("b");
        publishers.for_kind(OperationKind::SearchByDept).publish("c");
        publishers.for_kind(OperationKind::Delete).publish("d");

        assert_eq!(search.messages(), vec!["a", "b", "c"]);
        assert_eq!(delete.messages(), vec!["d"]);
        assert!(create.messages().is_empty());
        assert!(update.messages().is_empty());
    }

    #[test]
    fn recording_clones_share_buffer() {
        let rec = RecordingPublisher::new();
        let handle: Box<dyn EventPublisher> = Box::new(rec.clone());
        handle.publish("Insertion Succeeded");
        assert_eq!(rec.messages(), vec!["Insertion Succeeded"]);
        rec.clear();
        assert!(rec.messages().is_empty());
    }
}
