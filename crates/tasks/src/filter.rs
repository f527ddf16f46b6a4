//! Status and search filtering over tasks.

use demo_deck_core::TaskStatus;

use crate::manager::TaskList;
use crate::task::Task;

/// Tasks matching `status` whose description contains `search_term`,
/// ignoring case. An empty search term matches everything. Order is preserved.
#[must_use]
pub fn filter_tasks(tasks: &[Task], status: TaskStatus, search_term: &str) -> Vec<Task> {
    let needle = search_term.to_lowercase();
    tasks
        .iter()
        .filter(|task| status.admits(task.completed))
        .filter(|task| needle.is_empty() || task.description.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Filter criteria with a cached result.
///
/// The result is recomputed only when a different list is passed, the list's
/// revision moved, or the status or search term changed since the last call.
#[derive(Debug, Default)]
pub struct TaskFilter {
    status: TaskStatus,
    search_term: String,
    cache: Option<((u64, u64), Vec<Task>)>,
    recomputations: usize,
}

impl TaskFilter {
    #[must_use]
    pub fn new(status: TaskStatus, search_term: impl Into<String>) -> Self {
        Self {
            status,
            search_term: search_term.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        if self.status != status {
            self.status = status;
            self.cache = None;
        }
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        let search_term = search_term.into();
        if self.search_term != search_term {
            self.search_term = search_term;
            self.cache = None;
        }
    }

    /// How many times the result has been computed.
    #[must_use]
    pub const fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// The filtered view of `list`.
    pub fn apply(&mut self, list: &TaskList) -> &[Task] {
        let key = (list.instance(), list.revision());
        if self.cache.as_ref().is_none_or(|(seen, _)| *seen != key) {
            let filtered = filter_tasks(list.tasks(), self.status, &self.search_term);
            self.recomputations += 1;
            self.cache = Some((key, filtered));
        }
        self.cache.as_ref().map_or(&[][..], |(_, tasks)| tasks.as_slice())
    }
}
