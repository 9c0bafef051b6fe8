//! The board state store: single owner of the authoritative snapshot.
//!
//! Mutations are validate-then-swap: the operation is checked against the
//! live snapshot, a modified clone of the board is built, and the `Arc` is
//! replaced in one move. Observers holding an earlier snapshot keep a
//! consistent value; a rejected operation leaves the last-known-good
//! snapshot in place and only logs a diagnostic.

use std::sync::Arc;

use taskboard_core::{BoardError, BoardResult};

use crate::board::Board;
use crate::column::ColumnId;
use crate::event::{BoardEvent, EventSink};
use crate::reorder;
use crate::task::{Task, TaskDraft, TaskId};

/// A finalized drop, as reported by the gesture recognizer once a drag
/// commits. A cancelled drag (no destination) never becomes a `Relocation`.
///
/// Index convention: `dest_index` is interpreted against the destination
/// sequence *after* the moved task has been removed. For cross-column moves
/// the two sequences are distinct, so this only matters when
/// `source_column == dest_column`: a backward move within one column uses
/// the post-removal position, not the pre-removal one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub task_id: TaskId,
    pub source_column: ColumnId,
    pub source_index: usize,
    pub dest_column: ColumnId,
    pub dest_index: usize,
}

/// Owns the current [`Board`] snapshot and applies operations atomically.
pub struct BoardStore {
    board: Arc<Board>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl BoardStore {
    /// Wrap a seed board. The seed is checked against the board invariants
    /// so a malformed external seed is rejected up front.
    pub fn new(board: Board) -> BoardResult<Self> {
        board.validate()?;
        Ok(Self {
            board: Arc::new(board),
            sinks: Vec::new(),
        })
    }

    /// Store over the built-in sample board.
    pub fn with_sample_board() -> Self {
        Self {
            board: Arc::new(crate::seed::sample_board()),
            sinks: Vec::new(),
        }
    }

    /// The current snapshot. Cheap to call; the returned value stays
    /// consistent even across later mutations.
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Register an observer for created/moved notifications.
    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Create a task from the form draft and append it to `column_id`.
    ///
    /// Returns the created task. Fails with [`BoardError::UnknownColumn`] for
    /// a bad column id and [`BoardError::InvalidTask`] when the title trims
    /// to nothing; in both cases the board is untouched.
    pub fn create_task(&mut self, column_id: &str, draft: TaskDraft) -> BoardResult<Task> {
        let result = self.try_create_task(column_id, draft);
        if let Err(e) = &result {
            tracing::warn!("Rejected task creation in column {}: {}", column_id, e);
        }
        result
    }

    fn try_create_task(&mut self, column_id: &str, draft: TaskDraft) -> BoardResult<Task> {
        self.board.column(column_id)?;
        let title = draft
            .trimmed_title()
            .ok_or_else(|| BoardError::InvalidTask("title is empty".to_string()))?;

        let task = Task::from_draft(draft, title, column_id.to_string());

        let mut next = (*self.board).clone();
        next.tasks.insert(task.id.clone(), task.clone());
        let column = next
            .columns
            .get_mut(column_id)
            .ok_or_else(|| BoardError::UnknownColumn(column_id.to_string()))?;
        column.task_ids.push(task.id.clone());
        let column_title = column.title.clone();
        self.board = Arc::new(next);

        tracing::debug!("Created task {} in column {}", task.id, column_id);
        self.emit(BoardEvent::TaskCreated {
            task_title: task.title.clone(),
            column_title,
        });
        Ok(task)
    }

    /// Apply a finalized drop, possibly across columns.
    ///
    /// Dropping a task back onto its own position is an idempotent no-op:
    /// the same snapshot comes back, no timestamp moves, and nothing is
    /// emitted. A cross-column move re-stamps the task's `status` and
    /// `updated_at` and notifies subscribers; a same-column reorder does
    /// neither. All errors leave the snapshot untouched.
    pub fn relocate_task(&mut self, relocation: Relocation) -> BoardResult<Arc<Board>> {
        let result = self.try_relocate_task(&relocation);
        if let Err(e) = &result {
            tracing::warn!("Rejected relocation of task {}: {}", relocation.task_id, e);
        }
        result
    }

    fn try_relocate_task(&mut self, relocation: &Relocation) -> BoardResult<Arc<Board>> {
        let Relocation {
            task_id,
            source_column,
            source_index,
            dest_column,
            dest_index,
        } = relocation;

        let source = self.board.column(source_column)?;
        let dest = self.board.column(dest_column)?;

        let live_position = self
            .board
            .tasks
            .contains_key(task_id)
            .then(|| source.position_of(task_id))
            .flatten();
        if live_position != Some(*source_index) {
            return Err(BoardError::InconsistentMove {
                task_id: task_id.clone(),
                column_id: source_column.clone(),
                source_index: *source_index,
            });
        }

        let same_column = source_column == dest_column;
        // For a same-column move the task is pulled out first, so the last
        // valid slot is len - 1; across columns the destination is intact
        // and len appends.
        let max_index = if same_column {
            dest.task_ids.len() - 1
        } else {
            dest.task_ids.len()
        };
        if *dest_index > max_index {
            return Err(BoardError::IndexOutOfRange {
                column_id: dest_column.clone(),
                index: *dest_index,
                max: max_index,
            });
        }

        // Dropped in place: nothing to do, nothing to announce.
        if same_column && source_index == dest_index {
            return Ok(self.snapshot());
        }

        let mut next = (*self.board).clone();
        if same_column {
            let reordered = reorder::reposition(&source.task_ids, *source_index, *dest_index);
            if let Some(column) = next.columns.get_mut(source_column) {
                column.task_ids = reordered;
            }
            self.board = Arc::new(next);
            tracing::debug!(
                "Reordered task {} within column {} to index {}",
                task_id,
                source_column,
                dest_index
            );
            return Ok(self.snapshot());
        }

        let (new_source, new_dest) =
            reorder::transfer(&source.task_ids, *source_index, &dest.task_ids, *dest_index);
        if let Some(column) = next.columns.get_mut(source_column) {
            column.task_ids = new_source;
        }
        if let Some(column) = next.columns.get_mut(dest_column) {
            column.task_ids = new_dest;
        }

        let (task_title, column_title) = {
            let task = next.tasks.get_mut(task_id).ok_or_else(|| {
                BoardError::InconsistentMove {
                    task_id: task_id.clone(),
                    column_id: source_column.clone(),
                    source_index: *source_index,
                }
            })?;
            task.move_to_column(dest_column.clone());
            (task.title.clone(), next.columns[dest_column].title.clone())
        };

        self.board = Arc::new(next);
        tracing::debug!("Moved task {} to column {}", task_id, dest_column);
        self.emit(BoardEvent::TaskMoved {
            task_title,
            column_title,
        });
        Ok(self.snapshot())
    }

    fn emit(&mut self, event: BoardEvent) {
        for sink in &mut self.sinks {
            sink.notify(&event);
        }
    }
}
