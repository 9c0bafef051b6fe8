//! Notification stream between the store and the presentation layer.
//!
//! Events carry display strings only (task title, destination column title)
//! so the presentation layer can surface a toast or log line without
//! reaching back into the snapshot. Same-column reordering is silent, and a
//! rejected operation emits nothing.

/// A transient user-feedback event produced by a committed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A task was created and appended to a column.
    TaskCreated {
        task_title: String,
        column_title: String,
    },
    /// A task was moved into a different column.
    TaskMoved {
        task_title: String,
        column_title: String,
    },
}

/// Observer for board events. Delivery is synchronous, on the mutating call,
/// after the new snapshot is in place.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink {
    fn notify(&mut self, event: &BoardEvent);
}
