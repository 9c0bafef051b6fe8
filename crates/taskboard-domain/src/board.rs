use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use taskboard_core::{BoardError, BoardResult};

use crate::column::{Column, ColumnId};
use crate::task::{Task, TaskId};

/// The aggregate root: every task, every column, and the left-to-right
/// display order of the columns. A fully-consistent `Board` value is what
/// the store hands out as a snapshot.
///
/// Columns and `column_order` are fixed at construction; tasks are added by
/// the store and never deleted within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub tasks: HashMap<TaskId, Task>,
    pub columns: HashMap<ColumnId, Column>,
    pub column_order: Vec<ColumnId>,
}

impl Board {
    /// Empty board over a fixed set of columns, displayed in the given order.
    pub fn new(columns: Vec<Column>, column_order: Vec<ColumnId>) -> Self {
        Self {
            tasks: HashMap::new(),
            columns: columns.into_iter().map(|c| (c.id.clone(), c)).collect(),
            column_order,
        }
    }

    pub fn column(&self, column_id: &str) -> BoardResult<&Column> {
        self.columns
            .get(column_id)
            .ok_or_else(|| BoardError::UnknownColumn(column_id.to_string()))
    }

    /// Tasks of one column in display order. This is the sequence the
    /// rendering layer iterates top to bottom.
    pub fn tasks_in(&self, column_id: &str) -> BoardResult<Vec<&Task>> {
        let column = self.column(column_id)?;
        Ok(column
            .task_ids
            .iter()
            .filter_map(|id| self.tasks.get(id))
            .collect())
    }

    /// Check the structural invariants that must hold after every mutation:
    /// every listed task id resolves, every task sits in exactly the column
    /// named by its status (exactly once), and `column_order` is a
    /// permutation of the column ids.
    pub fn validate(&self) -> BoardResult<()> {
        for column in self.columns.values() {
            for task_id in &column.task_ids {
                let task = self.tasks.get(task_id).ok_or_else(|| {
                    BoardError::Serialization(format!(
                        "column {} lists unknown task {}",
                        column.id, task_id
                    ))
                })?;
                if task.status != column.id {
                    return Err(BoardError::Serialization(format!(
                        "task {} has status {} but sits in column {}",
                        task_id, task.status, column.id
                    )));
                }
            }
        }

        for (task_id, task) in &self.tasks {
            let column = self.columns.get(&task.status).ok_or_else(|| {
                BoardError::Serialization(format!(
                    "task {} has unknown status {}",
                    task_id, task.status
                ))
            })?;
            let occurrences = column.task_ids.iter().filter(|id| *id == task_id).count();
            if occurrences != 1 {
                return Err(BoardError::Serialization(format!(
                    "task {} appears {} times in column {}",
                    task_id, occurrences, column.id
                )));
            }
        }

        if self.column_order.len() != self.columns.len() {
            return Err(BoardError::Serialization(
                "columnOrder is not a permutation of the column ids".to_string(),
            ));
        }
        for column_id in &self.column_order {
            if !self.columns.contains_key(column_id) {
                return Err(BoardError::Serialization(format!(
                    "columnOrder names unknown column {}",
                    column_id
                )));
            }
        }

        Ok(())
    }
}
