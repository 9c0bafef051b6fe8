//! Session seeds: the built-in sample board and the externally-supplied
//! JSON path. Both produce a `Board` that already satisfies `validate`.

use chrono::{DateTime, NaiveDate, Utc};
use taskboard_core::{BoardError, BoardResult};

use crate::board::Board;
use crate::column::Column;
use crate::task::{Priority, Task};

/// Decode a board seed from JSON and check its invariants before use.
pub fn board_from_json(json: &str) -> BoardResult<Board> {
    let board: Board =
        serde_json::from_str(json).map_err(|e| BoardError::Serialization(e.to_string()))?;
    board.validate()?;
    Ok(board)
}

/// The built-in demo board: three workflow columns with a handful of tasks.
pub fn sample_board() -> Board {
    let mut todo = Column::new("todo", "To Do");
    todo.task_ids = vec!["task-1".to_string(), "task-4".to_string()];
    let mut in_progress = Column::new("in-progress", "In Progress");
    in_progress.task_ids = vec!["task-2".to_string()];
    let mut done = Column::new("done", "Done");
    done.task_ids = vec!["task-3".to_string()];

    let mut board = Board::new(
        vec![todo, in_progress, done],
        vec![
            "todo".to_string(),
            "in-progress".to_string(),
            "done".to_string(),
        ],
    );

    for task in sample_tasks() {
        board.tasks.insert(task.id.clone(), task);
    }
    board
}

fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "task-1".to_string(),
            title: "Design new homepage".to_string(),
            description: "Create a modern and responsive homepage design that reflects our \
                          brand values and improves user engagement."
                .to_string(),
            priority: Priority::High,
            assignee: Some("Sarah Johnson".to_string()),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            tags: Some(vec![
                "design".to_string(),
                "ui".to_string(),
                "frontend".to_string(),
            ]),
            status: "todo".to_string(),
            created_at: instant("2024-01-01T10:00:00Z"),
            updated_at: instant("2024-01-01T10:00:00Z"),
        },
        Task {
            id: "task-2".to_string(),
            title: "Implement user authentication".to_string(),
            description: "Set up secure user authentication system with login, registration, \
                          and password reset functionality."
                .to_string(),
            priority: Priority::High,
            assignee: Some("Mike Chen".to_string()),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 20),
            tags: Some(vec![
                "backend".to_string(),
                "security".to_string(),
                "auth".to_string(),
            ]),
            status: "in-progress".to_string(),
            created_at: instant("2024-01-02T09:30:00Z"),
            updated_at: instant("2024-01-05T14:20:00Z"),
        },
        Task {
            id: "task-3".to_string(),
            title: "Write API documentation".to_string(),
            description: "Create comprehensive documentation for all API endpoints including \
                          examples and error handling."
                .to_string(),
            priority: Priority::Medium,
            assignee: Some("Alex Rivera".to_string()),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 10),
            tags: Some(vec!["documentation".to_string(), "api".to_string()]),
            status: "done".to_string(),
            created_at: instant("2024-01-03T11:15:00Z"),
            updated_at: instant("2024-01-08T16:45:00Z"),
        },
        Task {
            id: "task-4".to_string(),
            title: "Set up CI/CD pipeline".to_string(),
            description: "Configure automated testing and deployment pipeline for better \
                          development workflow."
                .to_string(),
            priority: Priority::Medium,
            assignee: Some("Jordan Smith".to_string()),
            due_date: None,
            tags: Some(vec!["devops".to_string(), "automation".to_string()]),
            status: "todo".to_string(),
            created_at: instant("2024-01-04T08:00:00Z"),
            updated_at: instant("2024-01-04T08:00:00Z"),
        },
    ]
}

fn instant(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}
