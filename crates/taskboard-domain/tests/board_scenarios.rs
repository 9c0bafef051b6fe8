//! End-to-end scenarios driving the store the way a presentation layer
//! would: read a snapshot, commit a gesture, read again.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use taskboard_domain::{
    Board, BoardEvent, BoardStore, Column, EventSink, Priority, Relocation, TaskDraft,
};

/// Sink that records every event, standing in for a toast surface.
#[derive(Default)]
struct RecordingSink {
    events: Arc<Mutex<Vec<BoardEvent>>>,
}

impl EventSink for RecordingSink {
    fn notify(&mut self, event: &BoardEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// A two-column board with `todo = [t1, t2]` and `done = []`.
fn two_column_store() -> Result<BoardStore> {
    let board = Board::new(
        vec![Column::new("todo", "To Do"), Column::new("done", "Done")],
        vec!["todo".to_string(), "done".to_string()],
    );

    let mut store = BoardStore::new(board)?;
    let t1 = store.create_task(
        "todo",
        TaskDraft {
            title: "t1".to_string(),
            ..Default::default()
        },
    )?;
    let t2 = store.create_task(
        "todo",
        TaskDraft {
            title: "t2".to_string(),
            ..Default::default()
        },
    )?;

    // Re-key the generated ids to the well-known names used below.
    let mut board = (*store.snapshot()).clone();
    rename_task(&mut board, &t1.id, "t1");
    rename_task(&mut board, &t2.id, "t2");
    BoardStore::new(board).map_err(Into::into)
}

fn rename_task(board: &mut Board, from: &str, to: &str) {
    let mut task = board.tasks.remove(from).unwrap();
    task.id = to.to_string();
    board.tasks.insert(to.to_string(), task);
    for column in board.columns.values_mut() {
        for id in &mut column.task_ids {
            if id == from {
                *id = to.to_string();
            }
        }
    }
}

fn relocation(
    task_id: &str,
    source_column: &str,
    source_index: usize,
    dest_column: &str,
    dest_index: usize,
) -> Relocation {
    Relocation {
        task_id: task_id.to_string(),
        source_column: source_column.to_string(),
        source_index,
        dest_column: dest_column.to_string(),
        dest_index,
    }
}

#[test]
fn moving_first_task_to_empty_column() -> Result<()> {
    let mut store = two_column_store()?;

    store.relocate_task(relocation("t1", "todo", 0, "done", 0))?;

    let board = store.snapshot();
    assert_eq!(board.columns["todo"].task_ids, vec!["t2"]);
    assert_eq!(board.columns["done"].task_ids, vec!["t1"]);
    assert_eq!(board.tasks["t1"].status, "done");
    board.validate()?;
    Ok(())
}

#[test]
fn reordering_within_a_column() -> Result<()> {
    let mut store = two_column_store()?;

    store.relocate_task(relocation("t2", "todo", 1, "todo", 0))?;

    let board = store.snapshot();
    assert_eq!(board.columns["todo"].task_ids, vec!["t2", "t1"]);
    board.validate()?;
    Ok(())
}

#[test]
fn a_full_session_keeps_the_board_consistent() -> Result<()> {
    let mut store = BoardStore::with_sample_board();
    let events = Arc::new(Mutex::new(Vec::new()));
    store.subscribe(Box::new(RecordingSink {
        events: Arc::clone(&events),
    }));

    // Plan some work, start it, finish it.
    let task = store.create_task(
        "todo",
        TaskDraft {
            title: "Fix flaky test".to_string(),
            description: "The watcher test times out on slow runners".to_string(),
            priority: Priority::High,
            tags: Some("ci, tests".to_string()),
            ..Default::default()
        },
    )?;
    let todo_len = store.snapshot().columns["todo"].task_ids.len();
    store.relocate_task(relocation(&task.id, "todo", todo_len - 1, "in-progress", 0))?;
    store.relocate_task(relocation(&task.id, "in-progress", 0, "done", 0))?;

    let board = store.snapshot();
    board.validate()?;
    assert_eq!(board.tasks[&task.id].status, "done");
    assert_eq!(board.columns["done"].task_ids[0], task.id);
    assert_eq!(board.tasks[&task.id].tags.as_deref(), Some(&["ci".to_string(), "tests".to_string()][..]));

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 3);
    assert!(matches!(&events[0], BoardEvent::TaskCreated { column_title, .. } if column_title == "To Do"));
    assert!(matches!(&events[1], BoardEvent::TaskMoved { column_title, .. } if column_title == "In Progress"));
    assert!(matches!(&events[2], BoardEvent::TaskMoved { column_title, .. } if column_title == "Done"));
    Ok(())
}

#[test]
fn rejected_moves_leave_the_last_good_snapshot() -> Result<()> {
    let mut store = two_column_store()?;
    let before = store.snapshot();

    // Stale coordinates, bad destination, bad index: each one a no-op.
    assert!(store
        .relocate_task(relocation("t1", "todo", 1, "done", 0))
        .is_err());
    assert!(store
        .relocate_task(relocation("t1", "todo", 0, "archive", 0))
        .is_err());
    assert!(store
        .relocate_task(relocation("t1", "todo", 0, "done", 5))
        .is_err());

    assert_eq!(*store.snapshot(), *before);
    Ok(())
}

#[test]
fn external_seed_round_trip_drives_the_store() -> Result<()> {
    let json = serde_json::to_string(&*BoardStore::with_sample_board().snapshot())?;
    let board = taskboard_domain::seed::board_from_json(&json)?;
    let mut store = BoardStore::new(board)?;

    store.relocate_task(relocation("task-2", "in-progress", 0, "done", 1))?;
    let board = store.snapshot();
    assert_eq!(board.columns["done"].task_ids, vec!["task-3", "task-2"]);
    board.validate()?;
    Ok(())
}
