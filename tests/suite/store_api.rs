//! Task store behavior through the public engine API.

use ticklist_engine::{IdGenerator, Priority, TaskId, TaskStore};

struct FixedIds(Vec<u64>);

impl IdGenerator for FixedIds {
    fn next_id(&mut self) -> TaskId {
        TaskId::new(self.0.remove(0))
    }
}

#[test]
fn add_uses_draft_text_and_priority_then_clears_text() {
    let mut store = TaskStore::new();
    store.set_draft_text("  Buy milk  ");
    store.set_draft_priority(Priority::High);

    let id = store.add_task().expect("task added");
    let task = store.task(id).expect("task present");
    assert_eq!(task.text(), "Buy milk");
    assert_eq!(task.priority(), Priority::High);
    assert!(!task.completed());
    assert_eq!(store.draft_text(), "");
    // Priority selection survives the add.
    assert_eq!(store.draft_priority(), Priority::High);
}

#[test]
fn whitespace_draft_is_rejected_without_change() {
    let mut store = TaskStore::new();
    store.set_draft_text(" \t ");
    let revision = store.revision();

    assert_eq!(store.add_task(), None);
    assert!(store.is_empty());
    assert_eq!(store.revision(), revision);
}

#[test]
fn control_sequences_are_stripped_from_task_text() {
    let mut store = TaskStore::new();
    store.set_draft_text("\x1b[31mred\x1b[0m alert");
    let id = store.add_task().expect("task added");
    assert_eq!(store.task(id).map(|t| t.text().to_string()).as_deref(), Some("red alert"));
}

#[test]
fn custom_id_generator_is_used() {
    let mut store = TaskStore::with_id_generator(FixedIds(vec![40, 7]));
    store.set_draft_text("first");
    let first = store.add_task().expect("first");
    store.set_draft_text("second");
    let second = store.add_task().expect("second");

    assert_eq!(first, TaskId::new(40));
    assert_eq!(second, TaskId::new(7));
    let ids: Vec<TaskId> = store.tasks().iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn toggle_twice_restores_original() {
    let mut store = TaskStore::new();
    store.set_draft_text("flip");
    let id = store.add_task().expect("added");

    assert!(store.toggle_complete(id));
    assert!(store.task(id).is_some_and(|t| t.completed()));
    assert!(store.toggle_complete(id));
    assert!(store.task(id).is_some_and(|t| !t.completed()));
}

#[test]
fn operations_on_absent_ids_are_noops() {
    let mut store = TaskStore::new();
    store.set_draft_text("stay");
    store.add_task();
    let revision = store.revision();

    assert!(!store.toggle_complete(TaskId::new(999)));
    assert!(store.remove_task(TaskId::new(999)).is_none());
    assert_eq!(store.revision(), revision);
    assert_eq!(store.len(), 1);
}

#[test]
fn filter_changes_view_not_contents() {
    let mut store = TaskStore::new();
    for (text, priority) in [("a", Priority::High), ("b", Priority::Low), ("c", Priority::High)] {
        store.set_draft_text(text);
        store.set_draft_priority(priority);
        store.add_task();
    }

    store.set_filter(Some(Priority::High));
    let visible: Vec<&str> = store.visible_tasks().iter().map(|t| t.text()).collect();
    assert_eq!(visible, vec!["a", "c"]);
    assert_eq!(store.len(), 3);

    store.set_filter(Some(Priority::Medium));
    assert!(store.visible_tasks().is_empty());

    let counts = store.counts();
    assert_eq!(counts.high, 2);
    assert_eq!(counts.low, 1);
    assert_eq!(counts.for_priority(Priority::Medium), 0);
}

#[test]
fn removal_preserves_order_of_the_rest() {
    let mut store = TaskStore::new();
    let mut ids = Vec::new();
    for text in ["one", "two", "three"] {
        store.set_draft_text(text);
        ids.push(store.add_task().expect("added"));
    }

    let removed = store.remove_task(ids[1]).expect("removed");
    assert_eq!(removed.text(), "two");
    let texts: Vec<&str> = store.tasks().iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["one", "three"]);
}
