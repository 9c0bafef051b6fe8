use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column::ColumnId;

pub type TaskId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub status: ColumnId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Build a task from a validated draft, placed in `status`. The caller
    /// (the store) is responsible for having checked the title and column.
    pub(crate) fn from_draft(draft: TaskDraft, title: String, status: ColumnId) -> Self {
        let now = Utc::now();
        let tags = draft.parsed_tags();
        Self {
            id: synthesize_task_id(),
            title,
            description: draft.description,
            priority: draft.priority,
            assignee: draft.assignee,
            due_date: draft.due_date,
            tags,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn move_to_column(&mut self, status: ColumnId) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

/// Fresh unique id token. The uuid guarantees no collision with any task
/// created earlier in the session.
fn synthesize_task_id() -> TaskId {
    format!("task-{}", Uuid::new_v4())
}

/// Free-text payload from the task-creation form. Tag text arrives raw and
/// comma-separated; the store parses it rather than the form.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub tags: Option<String>,
}

impl TaskDraft {
    /// Title with surrounding whitespace removed; `None` if nothing remains.
    pub fn trimmed_title(&self) -> Option<String> {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Split the raw tag text on commas, trim each piece, and drop empties.
    /// An empty result is absent, not an empty sequence.
    pub fn parsed_tags(&self) -> Option<Vec<String>> {
        let raw = self.tags.as_deref()?;
        let tags: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect();
        if tags.is_empty() {
            None
        } else {
            Some(tags)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_title_rejects_whitespace() {
        let draft = TaskDraft {
            title: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.trimmed_title(), None);

        let draft = TaskDraft {
            title: "  Ship it  ".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.trimmed_title(), Some("Ship it".to_string()));
    }

    #[test]
    fn test_parsed_tags_splits_and_drops_empties() {
        let draft = TaskDraft {
            tags: Some("a, b ,, c".to_string()),
            ..Default::default()
        };
        assert_eq!(
            draft.parsed_tags(),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_parsed_tags_empty_text_is_absent() {
        for raw in ["", ",", " , , "] {
            let draft = TaskDraft {
                tags: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(draft.parsed_tags(), None, "raw tag text {raw:?}");
        }

        let draft = TaskDraft::default();
        assert_eq!(draft.parsed_tags(), None);
    }

    #[test]
    fn test_from_draft_stamps_timestamps_and_status() {
        let draft = TaskDraft {
            title: "Write docs".to_string(),
            description: "API docs".to_string(),
            priority: Priority::High,
            ..Default::default()
        };
        let title = draft.trimmed_title().unwrap();
        let task = Task::from_draft(draft, title, "todo".to_string());

        assert_eq!(task.status, "todo");
        assert_eq!(task.created_at, task.updated_at);
        assert!(task.id.starts_with("task-"));
    }

    #[test]
    fn test_move_to_column_touches_updated_at() {
        let draft = TaskDraft {
            title: "Task".to_string(),
            ..Default::default()
        };
        let title = draft.trimmed_title().unwrap();
        let mut task = Task::from_draft(draft, title, "todo".to_string());
        let created = task.created_at;

        task.move_to_column("done".to_string());
        assert_eq!(task.status, "done");
        assert!(task.updated_at >= created);
    }

    #[test]
    fn test_priority_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
    }
}
