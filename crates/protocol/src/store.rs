//! The task store.
//!
//! [`TaskStore`] is the single owner of the task collection. Every change
//! goes through one of its operations, or through [`TaskStore::apply`]
//! with a [`TaskIntent`] emitted by the UI. Operations never fail:
//! addressing a task that does not exist leaves the collection untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::task::{Task, TaskDraft, TaskId, TaskStatus};

/// A change requested by a UI component.
///
/// Components never touch the collection directly; they emit intents and
/// the store applies them.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use prodx_protocol::{TaskDraft, TaskIntent, TaskStore};
///
/// let mut store = TaskStore::new();
/// store.apply(TaskIntent::Create(TaskDraft::new("Write report", Utc::now())));
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum TaskIntent {
    /// Add a new task built from the draft.
    Create(TaskDraft),
    /// Replace the status of a task.
    ChangeStatus {
        /// The task to update.
        id: TaskId,
        /// The new status.
        status: TaskStatus,
    },
    /// Advance a task to the next status in the cycle.
    CycleStatus {
        /// The task to update.
        id: TaskId,
    },
    /// Remove a task.
    Delete {
        /// The task to remove.
        id: TaskId,
    },
}

/// Task counts derived from the collection.
///
/// Always computed from the store on demand, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    /// Number of tasks in the collection.
    pub total: usize,
    /// Number of pending tasks.
    pub pending: usize,
    /// Number of tasks in progress.
    pub in_progress: usize,
    /// Number of completed tasks.
    pub completed: usize,
}

impl TaskStats {
    /// Returns the count for a single status.
    #[must_use]
    pub const fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }
}

/// An ordered, in-memory collection of tasks.
///
/// Tasks are kept in insertion order. Identifiers are random UUIDs and are
/// never reused.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use prodx_protocol::{TaskDraft, TaskStatus, TaskStore};
///
/// let mut store = TaskStore::new();
/// let id = store.add_task(TaskDraft::new("Write report", Utc::now() + TimeDelta::days(2)));
///
/// store.cycle_status(id);
/// assert_eq!(store.get(id).unwrap().status, TaskStatus::InProgress);
///
/// store.delete_task(id);
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a task by ID, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the position of a task in display order, if present.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Adds a task built from `draft` to the end of the collection.
    ///
    /// The draft is not validated here; the creation form is responsible
    /// for rejecting empty titles and unparseable deadlines.
    ///
    /// Returns the identifier assigned to the new task.
    pub fn add_task(&mut self, draft: TaskDraft) -> TaskId {
        let id = self.fresh_id();
        let task = Task::from_draft(id, draft);
        debug!(task_id = %id, title = %task.title, deadline = %task.deadline, "task added");
        self.tasks.push(task);
        id
    }

    /// Sets the status of the task with the given ID.
    ///
    /// Does nothing if no such task exists.
    pub fn change_status(&mut self, id: TaskId, status: TaskStatus) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                debug!(task_id = %id, from = %task.status, to = %status, "task status changed");
                task.set_status(status);
            }
            None => debug!(task_id = %id, "status change for unknown task ignored"),
        }
    }

    /// Advances the task with the given ID to its next status.
    ///
    /// Does nothing if no such task exists.
    pub fn cycle_status(&mut self, id: TaskId) {
        if let Some(status) = self.get(id).map(|t| t.status.next()) {
            self.change_status(id, status);
        } else {
            debug!(task_id = %id, "status cycle for unknown task ignored");
        }
    }

    /// Removes the task with the given ID.
    ///
    /// Returns the removed task, or `None` if no such task exists.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let Some(pos) = self.position(id) else {
            debug!(task_id = %id, "delete for unknown task ignored");
            return None;
        };
        debug!(task_id = %id, "task deleted");
        Some(self.tasks.remove(pos))
    }

    /// Applies an intent to the collection.
    ///
    /// Returns the ID of the created task for [`TaskIntent::Create`].
    pub fn apply(&mut self, intent: TaskIntent) -> Option<TaskId> {
        match intent {
            TaskIntent::Create(draft) => return Some(self.add_task(draft)),
            TaskIntent::ChangeStatus { id, status } => self.change_status(id, status),
            TaskIntent::CycleStatus { id } => self.cycle_status(id),
            TaskIntent::Delete { id } => {
                let _ = self.delete_task(id);
            }
        }
        None
    }

    /// Computes task counts from the current collection.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        self.tasks.iter().fold(
            TaskStats {
                total: self.tasks.len(),
                ..TaskStats::default()
            },
            |mut stats, task| {
                match task.status {
                    TaskStatus::Pending => stats.pending += 1,
                    TaskStatus::InProgress => stats.in_progress += 1,
                    TaskStatus::Completed => stats.completed += 1,
                }
                stats
            },
        )
    }

    /// Generates an ID not held by any task in the collection.
    fn fresh_id(&self) -> TaskId {
        loop {
            let id = TaskId::new_v4();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, Utc};

    fn draft(title: &str) -> TaskDraft {
        TaskDraft::new(title, Utc::now() + TimeDelta::days(2))
    }

    #[test]
    fn add_task_appends_in_order() {
        let mut store = TaskStore::new();
        let first = store.add_task(draft("First"));
        let second = store.add_task(draft("Second"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0].id, first);
        assert_eq!(store.tasks()[1].id, second);
        assert_eq!(store.position(second), Some(1));
    }

    #[test]
    fn passed_deadline_leaves_status_alone() {
        let now = Utc::now();
        let mut store = TaskStore::new();
        let id = store.add_task(TaskDraft::new("Overdue", now - TimeDelta::hours(1)));
        let before = store.stats();

        let countdown = crate::Countdown::between(store.get(id).unwrap().deadline, now);
        assert!(countdown.is_expired);

        assert_eq!(store.get(id).unwrap().status, TaskStatus::Pending);
        assert_eq!(store.stats(), before);
        assert_eq!(before.pending, 1);
    }

    #[test]
    fn add_task_keeps_draft_status() {
        let mut store = TaskStore::new();
        let id = store.add_task(draft("Done already").with_status(TaskStatus::Completed));
        assert_eq!(store.get(id).unwrap().status, TaskStatus::Completed);
    }

    #[test]
    fn change_status_replaces_status() {
        let mut store = TaskStore::new();
        let id = store.add_task(draft("Task"));

        store.change_status(id, TaskStatus::Completed);
        assert_eq!(store.get(id).unwrap().status, TaskStatus::Completed);
    }

    #[test]
    fn change_status_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add_task(draft("Task"));
        let before = store.clone();

        store.change_status(TaskId::new_v4(), TaskStatus::Completed);
        assert_eq!(store, before);
    }

    #[test]
    fn cycle_status_three_times_is_identity() {
        let mut store = TaskStore::new();
        let id = store.add_task(draft("Task"));

        store.cycle_status(id);
        assert_eq!(store.get(id).unwrap().status, TaskStatus::InProgress);
        store.cycle_status(id);
        assert_eq!(store.get(id).unwrap().status, TaskStatus::Completed);
        store.cycle_status(id);
        assert_eq!(store.get(id).unwrap().status, TaskStatus::Pending);
    }

    #[test]
    fn delete_task_removes_only_target() {
        let mut store = TaskStore::new();
        let keep = store.add_task(draft("Keep"));
        let gone = store.add_task(draft("Drop"));

        let removed = store.delete_task(gone).expect("task removed");
        assert_eq!(removed.title, "Drop");
        assert_eq!(store.len(), 1);
        assert!(store.get(keep).is_some());
        assert!(store.delete_task(gone).is_none());
    }

    #[test]
    fn delete_then_change_is_noop() {
        let mut store = TaskStore::new();
        let id = store.add_task(draft("Task"));
        store.add_task(draft("Other"));
        store.delete_task(id);
        let before = store.clone();

        for status in TaskStatus::all() {
            store.change_status(id, status);
            assert_eq!(store, before);
        }
    }

    #[test]
    fn apply_dispatches_intents() {
        let mut store = TaskStore::new();
        let id = store
            .apply(TaskIntent::Create(draft("Task")))
            .expect("create returns id");

        assert_eq!(store.apply(TaskIntent::CycleStatus { id }), None);
        assert_eq!(store.get(id).unwrap().status, TaskStatus::InProgress);

        store.apply(TaskIntent::ChangeStatus {
            id,
            status: TaskStatus::Pending,
        });
        assert_eq!(store.get(id).unwrap().status, TaskStatus::Pending);

        store.apply(TaskIntent::Delete { id });
        assert!(store.is_empty());
    }

    #[test]
    fn stats_count_each_status() {
        let mut store = TaskStore::new();
        store.add_task(draft("A"));
        store.add_task(draft("B").with_status(TaskStatus::InProgress));
        store.add_task(draft("C").with_status(TaskStatus::Completed));
        store.add_task(draft("D").with_status(TaskStatus::Completed));

        let stats = store.stats();
        assert_eq!(
            stats,
            TaskStats {
                total: 4,
                pending: 1,
                in_progress: 1,
                completed: 2,
            }
        );
        assert_eq!(stats.count(TaskStatus::Completed), 2);
    }

    #[test]
    fn empty_store_has_zero_stats() {
        assert_eq!(TaskStore::new().stats(), TaskStats::default());
    }

    #[test]
    fn intent_json_format() {
        let id = TaskId::nil();
        let json = serde_json::to_string(&TaskIntent::CycleStatus { id }).expect("serialize");
        assert_eq!(
            json,
            r#"{"intent":"cycle_status","id":"00000000-0000-0000-0000-000000000000"}"#
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use std::collections::HashSet;

    use super::*;
    use crate::task::proptest_tests::arb_draft;
    use proptest::prelude::*;

    /// A store operation addressed by position, so sequences stay meaningful
    /// as tasks come and go.
    #[derive(Debug, Clone)]
    enum Op {
        Add(TaskDraft),
        Change(usize, TaskStatus),
        Cycle(usize),
        Delete(usize),
        DeleteUnknown,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            arb_draft().prop_map(Op::Add),
            (0usize..8, any::<TaskStatus>()).prop_map(|(i, s)| Op::Change(i, s)),
            (0usize..8).prop_map(Op::Cycle),
            (0usize..8).prop_map(Op::Delete),
            Just(Op::DeleteUnknown),
        ]
    }

    fn id_at(store: &TaskStore, index: usize) -> TaskId {
        store
            .tasks()
            .get(index)
            .map_or_else(TaskId::new_v4, |t| t.id)
    }

    proptest! {
        /// Stats always add up and IDs are never handed out twice.
        #[test]
        fn stats_and_ids_stay_consistent(ops in prop::collection::vec(arb_op(), 0..60)) {
            let mut store = TaskStore::new();
            let mut issued = HashSet::new();

            for op in ops {
                match op {
                    Op::Add(draft) => {
                        let id = store.add_task(draft);
                        prop_assert!(issued.insert(id), "id {} issued twice", id);
                    }
                    Op::Change(i, s) => store.change_status(id_at(&store, i), s),
                    Op::Cycle(i) => store.cycle_status(id_at(&store, i)),
                    Op::Delete(i) => {
                        let _ = store.delete_task(id_at(&store, i));
                    }
                    Op::DeleteUnknown => {
                        let _ = store.delete_task(TaskId::new_v4());
                    }
                }

                let stats = store.stats();
                prop_assert_eq!(stats.pending + stats.in_progress + stats.completed, stats.total);
                prop_assert_eq!(stats.total, store.len());

                let live: HashSet<_> = store.tasks().iter().map(|t| t.id).collect();
                prop_assert_eq!(live.len(), store.len());
            }
        }

        /// Cycling any task three times restores its status.
        #[test]
        fn cycling_three_times_restores_status(draft in arb_draft()) {
            let mut store = TaskStore::new();
            let original = draft.status;
            let id = store.add_task(draft);

            for _ in 0..3 {
                store.cycle_status(id);
            }
            prop_assert_eq!(store.get(id).map(|t| t.status), Some(original));
        }
    }
}
