pub mod board;
pub mod column;
pub mod event;
pub mod reorder;
pub mod seed;
pub mod store;
pub mod task;

pub use board::Board;
pub use column::{Column, ColumnId};
pub use event::{BoardEvent, EventSink};
pub use store::{BoardStore, Relocation};
pub use task::{Priority, Task, TaskDraft, TaskId};
