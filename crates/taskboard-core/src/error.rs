use thiserror::Error;

/// Errors raised by board operations.
///
/// Every variant is recoverable: the store rejects the operation, keeps the
/// last-known-good snapshot, and the board stays renderable. Nothing here
/// should abort the process.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Task creation rejected by validation (e.g. whitespace-only title).
    #[error("Invalid task: {0}")]
    InvalidTask(String),

    /// An operation referenced a column id that does not exist. Indicates a
    /// collaborator bug rather than a user error.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// The reported source coordinates of a move do not match the live
    /// snapshot. Typically a stale drag; the move is ignored.
    #[error("Inconsistent move: task {task_id} is not at index {source_index} of column {column_id}")]
    InconsistentMove {
        task_id: String,
        column_id: String,
        source_index: usize,
    },

    /// The destination index of a move falls outside the valid range for the
    /// destination column.
    #[error("Index {index} out of range for column {column_id} (valid 0..={max})")]
    IndexOutOfRange {
        column_id: String,
        index: usize,
        max: usize,
    },

    /// A supplied board seed failed to decode or violated a board invariant.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
