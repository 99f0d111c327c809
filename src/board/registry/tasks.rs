//! Task storage indexed by sequential identifier.

use super::{RegistryError, RegistryResult};
use crate::{
    board::domain::{ActivityName, Task, TaskDescription, TaskDuration, TaskId, parse_unsigned},
    sort::{SortKey, merge_sort_by_key},
};

/// Bounded task collection.
///
/// Task `n` is stored at position `n - 1`; tasks are never removed, so the
/// identifiers stay dense.
#[derive(Debug, Clone)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
    capacity: usize,
}

impl TaskRegistry {
    /// Creates an empty registry holding at most `capacity` tasks.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            tasks: Vec::new(),
            capacity,
        }
    }

    /// Stores a new task in `TO DO` and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateDescription`] when a task already
    /// has this exact description, or [`RegistryError::TaskCapacity`] when
    /// the registry is full. The registry is unchanged on error.
    pub fn create(
        &mut self,
        duration: TaskDuration,
        description: TaskDescription,
    ) -> RegistryResult<TaskId> {
        if self
            .tasks
            .iter()
            .any(|task| task.description() == &description)
        {
            return Err(RegistryError::DuplicateDescription(
                description.as_str().to_owned(),
            ));
        }
        if self.tasks.len() >= self.capacity {
            return Err(RegistryError::TaskCapacity {
                limit: self.capacity,
            });
        }

        let id = TaskId::new(self.tasks.len() + 1);
        self.tasks.push(Task::new(id, duration, description));
        Ok(id)
    }

    /// Resolves a textual identifier to an existing task.
    ///
    /// Returns `None` for non-numeric tokens, `0`, and identifiers past the
    /// last task.
    #[must_use]
    pub fn resolve(&self, token: &str) -> Option<TaskId> {
        let value = usize::try_from(parse_unsigned(token)?).ok()?;
        let id = TaskId::new(value);
        self.get(id).map(Task::id)
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id.index()?)
    }

    /// Returns the task with the given identifier for mutation.
    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(id.index()?)
    }

    /// Returns every task ordered by description.
    #[must_use]
    pub fn list_all(&self) -> Vec<&Task> {
        merge_sort_by_key(self.tasks.iter().collect(), |task| {
            SortKey::Str(task.description().as_str())
        })
    }

    /// Returns the tasks named by `tokens`, in the order given.
    ///
    /// The whole list is resolved before anything is returned.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownTaskToken`] naming the first token that
    /// does not resolve.
    pub fn list_by_ids<S: AsRef<str>>(&self, tokens: &[S]) -> RegistryResult<Vec<&Task>> {
        let ids = tokens
            .iter()
            .map(|token| {
                let raw = token.as_ref();
                self.resolve(raw)
                    .ok_or_else(|| RegistryError::UnknownTaskToken(raw.to_owned()))
            })
            .collect::<RegistryResult<Vec<_>>>()?;

        Ok(ids.into_iter().filter_map(|id| self.get(id)).collect())
    }

    /// Returns the tasks currently in `activity`, by start time and then by
    /// description.
    ///
    /// The alphabetical pass runs first over all tasks; the stable start-time
    /// pass then leaves equal starts in alphabetical order.
    #[must_use]
    pub fn list_in_activity(&self, activity: &ActivityName) -> Vec<&Task> {
        let in_activity: Vec<&Task> = self
            .list_all()
            .into_iter()
            .filter(|task| task.activity() == activity)
            .collect();
        merge_sort_by_key(in_activity, |task| SortKey::Int(task.start()))
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when no task exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
