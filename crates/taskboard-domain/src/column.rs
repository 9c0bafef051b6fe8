use serde::{Deserialize, Serialize};

use crate::task::TaskId;

pub type ColumnId = String;

/// A named, ordered bucket of task ids. `task_ids` is the sole source of
/// intra-column position; tasks carry no rank of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub task_ids: Vec<TaskId>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    pub fn position_of(&self, task_id: &str) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_of() {
        let mut column = Column::new("todo", "To Do");
        column.task_ids = vec!["t1".to_string(), "t2".to_string()];

        assert_eq!(column.position_of("t1"), Some(0));
        assert_eq!(column.position_of("t2"), Some(1));
        assert_eq!(column.position_of("t3"), None);
    }
}
