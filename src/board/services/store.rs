//! The board store: clock plus the three registries, mutated one operation
//! at a time.

use crate::board::{
    domain::{
        ActivityName, BoardDomainError, BoardLimits, CompletionReport, ErrorKind, LogicalClock,
        Task, TaskDescription, TaskDuration, TaskId, TimeDelta, UserName,
    },
    registry::{
        Activity, ActivityRegistry, RegistryError, TaskRegistry, User, UserRegistry,
    },
};
use thiserror::Error;
use tracing::info;

/// Service-level errors for board operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// A registry rejected the operation.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl BoardError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::Registry(err) => err.kind(),
        }
    }
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Aggregate of the logical clock and the user, activity and task
/// registries.
///
/// Every operation validates completely before writing, so a failed call
/// leaves the store exactly as it was.
#[derive(Debug, Clone)]
pub struct Store {
    limits: BoardLimits,
    clock: LogicalClock,
    users: UserRegistry,
    activities: ActivityRegistry,
    tasks: TaskRegistry,
}

impl Store {
    /// Creates an empty board bounded by `limits`.
    #[must_use]
    pub fn new(limits: BoardLimits) -> Self {
        Self {
            limits,
            clock: LogicalClock::new(),
            users: UserRegistry::new(limits.max_users()),
            activities: ActivityRegistry::new(limits.max_activities()),
            tasks: TaskRegistry::new(limits.max_tasks()),
        }
    }

    /// Returns the configured bounds.
    #[must_use]
    pub const fn limits(&self) -> &BoardLimits {
        &self.limits
    }

    /// Returns the current clock reading.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.clock.now()
    }

    /// Returns the user registry.
    #[must_use]
    pub const fn users(&self) -> &UserRegistry {
        &self.users
    }

    /// Returns the activity registry.
    #[must_use]
    pub const fn activities(&self) -> &ActivityRegistry {
        &self.activities
    }

    /// Returns the task registry.
    #[must_use]
    pub const fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    /// Advances the clock by `delta`, or reports it when `delta` is absent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTime`] when `delta` is not a
    /// non-negative integer or would overflow the clock.
    pub fn advance_clock(&mut self, delta: Option<&str>) -> BoardResult<u64> {
        let Some(raw) = delta else {
            return Ok(self.clock.now());
        };
        let step = TimeDelta::parse(raw)?;
        let now = self.clock.advance(step)?;
        if !step.is_zero() {
            info!(delta = step.value(), now, "clock advanced");
        }
        Ok(now)
    }

    /// Creates a task and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns, in order of precedence: [`BoardDomainError::InvalidDuration`],
    /// [`BoardDomainError::InvalidDescription`],
    /// [`RegistryError::DuplicateDescription`] and
    /// [`RegistryError::TaskCapacity`].
    pub fn create_task(&mut self, duration: &str, description: &str) -> BoardResult<TaskId> {
        let estimate = TaskDuration::parse(duration)?;
        let text = TaskDescription::new(description, self.limits.max_description_len())?;
        let id = self.tasks.create(estimate, text)?;
        info!(task_id = %id, duration = estimate.value(), "task created");
        Ok(id)
    }

    /// Lists tasks: all of them by description when `ids` is empty,
    /// otherwise the named ones in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownTaskToken`] when any token fails to
    /// resolve; no task is returned in that case.
    pub fn list_tasks<S: AsRef<str>>(&self, ids: &[S]) -> BoardResult<Vec<&Task>> {
        if ids.is_empty() {
            return Ok(self.tasks.list_all());
        }
        Ok(self.tasks.list_by_ids(ids)?)
    }

    /// Registers a user.
    ///
    /// # Errors
    ///
    /// Returns, in order of precedence: [`RegistryError::DuplicateUser`],
    /// [`RegistryError::UserCapacity`] and
    /// [`BoardDomainError::InvalidUserName`].
    pub fn register_user(&mut self, name: &str) -> BoardResult<User> {
        self.users.ensure_available(name)?;
        let user_name = UserName::new(name, self.limits.max_user_name_len())?;
        let user = self.users.create(user_name)?;
        info!(user = %user.name(), "user registered");
        Ok(user)
    }

    /// Registers an activity.
    ///
    /// # Errors
    ///
    /// Returns, in order of precedence: [`RegistryError::DuplicateActivity`],
    /// [`BoardDomainError::InvalidActivityName`] and
    /// [`RegistryError::ActivityCapacity`].
    pub fn register_activity(&mut self, name: &str) -> BoardResult<Activity> {
        if self.activities.contains(name) {
            return Err(RegistryError::DuplicateActivity(name.to_owned()).into());
        }
        let activity_name = ActivityName::new(name, self.limits.max_activity_name_len())?;
        let activity = self.activities.create(activity_name)?;
        info!(activity = %activity.name(), "activity registered");
        Ok(activity)
    }

    /// Moves a task to another activity on behalf of a user.
    ///
    /// Returns a [`CompletionReport`] when the destination is `DONE`.
    ///
    /// # Errors
    ///
    /// Returns, in order of precedence: [`RegistryError::TaskNotFound`],
    /// [`BoardDomainError::TaskAlreadyStarted`] when the destination is
    /// `TO DO`, [`RegistryError::UserNotFound`] and
    /// [`RegistryError::ActivityNotFound`]. The task is untouched on error.
    pub fn move_task(
        &mut self,
        id: &str,
        user: &str,
        activity: &str,
    ) -> BoardResult<Option<CompletionReport>> {
        let task_id = self
            .tasks
            .resolve(id)
            .ok_or_else(|| RegistryError::TaskNotFound(id.to_owned()))?;
        if activity == ActivityName::TO_DO {
            return Err(BoardDomainError::TaskAlreadyStarted.into());
        }
        let assignee = self
            .users
            .find(user)
            .ok_or_else(|| RegistryError::UserNotFound(user.to_owned()))?
            .name()
            .clone();
        let destination = self
            .activities
            .find(activity)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity.to_owned()))?
            .name()
            .clone();

        let now = self.clock.now();
        let task = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| RegistryError::TaskNotFound(id.to_owned()))?;
        let report = task.move_to(assignee, destination, now)?;
        info!(
            task_id = %task_id,
            activity = %task.activity(),
            start = task.start(),
            "task moved"
        );
        Ok(report)
    }

    /// Lists the tasks in an activity by start time, ties by description.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ActivityNotFound`] when the activity is not
    /// registered.
    pub fn tasks_in_activity(&self, activity: &str) -> BoardResult<Vec<&Task>> {
        let stage = self
            .activities
            .find(activity)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity.to_owned()))?;
        Ok(self.tasks.list_in_activity(stage.name()))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(BoardLimits::default())
    }
}
