//! Persisted task collection with CRUD operations.
//!
//! Every mutation builds a fresh collection and writes it through the
//! [`PersistentSlot`] under [`TASKS_KEY`]. Changes written by other views are
//! picked up with [`TaskList::sync_remote`].

use std::sync::atomic::{AtomicU64, Ordering};

use demo_deck_core::TaskId;
use demo_deck_storage::{PersistentSlot, RemoteUpdates, StoreView};
use tracing::debug;

use crate::task::{Task, TaskError};

/// Storage key for the task collection.
pub const TASKS_KEY: &str = "tasks";

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Counts shown alongside the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// The task collection for one view.
#[derive(Debug)]
pub struct TaskList {
    tasks: Vec<Task>,
    instance: u64,
    revision: u64,
    slot: PersistentSlot<Vec<Task>>,
    remote: RemoteUpdates<Vec<Task>>,
}

impl TaskList {
    /// Load the stored collection, or `seed` when nothing is stored yet.
    #[must_use]
    pub fn open(view: StoreView, seed: Vec<Task>) -> Self {
        let slot = PersistentSlot::new(view, TASKS_KEY);
        let tasks = slot.stored().unwrap_or_else(|| {
            slot.save(&seed);
            seed
        });
        let remote = slot.watch();

        Self {
            tasks,
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
            revision: 0,
            slot,
            remote,
        }
    }

    /// Current tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Unique per opened list within the process.
    #[must_use]
    pub const fn instance(&self) -> u64 {
        self.instance
    }

    /// Incremented on every change; lets derived views detect staleness.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> TaskStats {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }

    /// Add a task, returning whether it was accepted.
    ///
    /// Rejects blank descriptions and case-insensitive duplicates.
    pub fn add_task(&mut self, description: &str) -> bool {
        self.try_add_task(description).is_ok()
    }

    /// Add a task, returning its id or the reason it was rejected.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::EmptyDescription` for blank input and
    /// `TaskError::Duplicate` if a task with the same description (ignoring
    /// case) already exists. The collection is left unchanged on error.
    pub fn try_add_task(&mut self, description: &str) -> Result<TaskId, TaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        if self.tasks.iter().any(|t| t.has_description(description)) {
            return Err(TaskError::Duplicate(description.to_string()));
        }

        let id = self.next_id();
        let mut next = self.tasks.clone();
        next.push(Task::new(id, description));
        self.commit(next);
        debug!(%id, "Task added");
        Ok(id)
    }

    /// Replace a task's description. No-op if `id` is unknown.
    ///
    /// The new description is not checked against other tasks.
    pub fn edit_task(&mut self, id: TaskId, new_description: impl Into<String>) {
        let new_description = new_description.into();
        self.update(id, |task| task.description = new_description);
    }

    /// Remove a task. No-op if `id` is unknown.
    pub fn delete_task(&mut self, id: TaskId) {
        if self.get(id).is_none() {
            return;
        }
        let next = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.commit(next);
    }

    /// Flip a task's completion flag. No-op if `id` is unknown.
    pub fn toggle_complete(&mut self, id: TaskId) {
        self.update(id, |task| task.completed = !task.completed);
    }

    /// Replace the whole collection.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.commit(tasks);
    }

    /// Adopt the latest collection written by another view, if any.
    ///
    /// Returns whether anything changed. The incoming value is taken wholesale.
    pub fn sync_remote(&mut self) -> bool {
        let Some(tasks) = self.remote.take() else {
            return false;
        };
        debug!(count = tasks.len(), "Adopting tasks written by another view");
        self.tasks = tasks;
        self.revision += 1;
        true
    }

    fn update(&mut self, id: TaskId, change: impl FnOnce(&mut Task)) {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return;
        };
        let mut next = self.tasks.clone();
        if let Some(task) = next.get_mut(index) {
            change(task);
        }
        self.commit(next);
    }

    fn commit(&mut self, next: Vec<Task>) {
        self.tasks = next;
        self.revision += 1;
        self.slot.save(&self.tasks);
    }

    /// Millisecond timestamp, bumped past the largest existing id.
    fn next_id(&self) -> TaskId {
        let now = chrono::Utc::now().timestamp_millis();
        let floor = self
            .tasks
            .iter()
            .map(|t| t.id.get())
            .max()
            .map_or(now, |max| max.saturating_add(1));
        TaskId::new(now.max(floor))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use demo_deck_storage::Store;

    use super::*;
    use crate::task::demo_tasks;

    fn fresh() -> TaskList {
        TaskList::open(Store::memory().open_view(), Vec::new())
    }

    #[test]
    fn test_open_seeds_and_persists_on_first_run() {
        let store = Store::memory();
        let list = TaskList::open(store.open_view(), demo_tasks());
        assert_eq!(list.len(), 3);

        let stored: Vec<Task> = store.open_view().read(TASKS_KEY, Vec::new());
        assert_eq!(stored, demo_tasks());
    }

    #[test]
    fn test_open_prefers_stored_tasks_over_seed() {
        let store = Store::memory();
        let mut first = TaskList::open(store.open_view(), demo_tasks());
        assert!(first.add_task("Water the plants"));

        let second = TaskList::open(store.open_view(), demo_tasks());
        assert_eq!(second.len(), 4);
        assert_eq!(second.tasks()[3].description, "Water the plants");
    }

    #[test]
    fn test_add_task_rejects_blank() {
        let mut list = fresh();
        assert!(!list.add_task(""));
        assert!(!list.add_task("   "));
        assert!(list.is_empty());
        assert_eq!(list.revision(), 0);
    }

    #[test]
    fn test_add_task_rejects_case_insensitive_duplicate() {
        let mut list = fresh();
        assert!(list.add_task("Buy milk"));
        assert!(!list.add_task("buy milk"));
        assert!(!list.add_task("  BUY MILK "));
        assert_eq!(list.len(), 1);
        assert_eq!(
            list.try_add_task("buy Milk"),
            Err(TaskError::Duplicate("buy Milk".to_string()))
        );
    }

    #[test]
    fn test_add_task_trims_and_starts_incomplete() {
        let mut list = fresh();
        let id = list.try_add_task("  Call mom  ").unwrap();
        let task = list.get(id).unwrap();
        assert_eq!(task.description, "Call mom");
        assert!(!task.completed);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut list = fresh();
        let a = list.try_add_task("a").unwrap();
        let b = list.try_add_task("b").unwrap();
        let c = list.try_add_task("c").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_ids_stay_above_seeded_ids() {
        let future = chrono::Utc::now().timestamp_millis() + 1_000_000;
        let mut list = TaskList::open(
            Store::memory().open_view(),
            vec![Task::new(TaskId::new(future), "from the future")],
        );
        let id = list.try_add_task("now").unwrap();
        assert_eq!(id.get(), future + 1);
    }

    #[test]
    fn test_edit_task_is_permissive() {
        let mut list = TaskList::open(Store::memory().open_view(), demo_tasks());
        list.edit_task(TaskId::new(1), "Prepare for the client meeting");
        assert_eq!(
            list.get(TaskId::new(1)).unwrap().description,
            "Prepare for the client meeting"
        );

        let before = list.revision();
        list.edit_task(TaskId::new(99), "nothing");
        assert_eq!(list.revision(), before);
    }

    #[test]
    fn test_delete_and_toggle() {
        let store = Store::memory();
        let mut list = TaskList::open(store.open_view(), demo_tasks());

        list.toggle_complete(TaskId::new(2));
        assert!(list.get(TaskId::new(2)).unwrap().completed);
        list.toggle_complete(TaskId::new(2));
        assert!(!list.get(TaskId::new(2)).unwrap().completed);

        list.delete_task(TaskId::new(1));
        list.delete_task(TaskId::new(1));
        assert_eq!(list.len(), 2);

        let stored: Vec<Task> = store.open_view().read(TASKS_KEY, Vec::new());
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_stats() {
        let mut list = TaskList::open(Store::memory().open_view(), demo_tasks());
        list.toggle_complete(TaskId::new(3));
        assert_eq!(
            list.stats(),
            TaskStats {
                total: 3,
                active: 2,
                completed: 1
            }
        );
    }

    #[test]
    fn test_sync_remote_adopts_other_view_wholesale() {
        let store = Store::memory();
        let mut tab_a = TaskList::open(store.open_view(), demo_tasks());
        let mut tab_b = TaskList::open(store.open_view(), demo_tasks());

        assert!(tab_a.add_task("Only in A"));
        assert!(tab_b.sync_remote());
        assert_eq!(tab_b.tasks(), tab_a.tasks());
        assert!(!tab_b.sync_remote());
        assert!(!tab_a.sync_remote());
    }
}
