//! Task aggregate and its activity state machine.

use super::{ActivityName, BoardDomainError, TaskDescription, TaskDuration, TaskId, UserName};
use serde::Serialize;

/// Elapsed time and schedule slack reported when a task enters `DONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CompletionReport {
    spent: u64,
    slack: i128,
}

impl CompletionReport {
    /// Computes the report for a task started at `start`, estimated at
    /// `duration`, observed at clock reading `now`.
    #[must_use]
    pub fn compute(start: u64, duration: TaskDuration, now: u64) -> Self {
        let spent = now.saturating_sub(start);
        Self {
            spent,
            slack: i128::from(spent) - i128::from(duration.value()),
        }
    }

    /// Returns the clock time elapsed since the task started.
    #[must_use]
    pub const fn spent(self) -> u64 {
        self.spent
    }

    /// Returns `spent - duration`. Negative means under the estimate.
    #[must_use]
    pub const fn slack(self) -> i128 {
        self.slack
    }
}

/// Task aggregate root.
///
/// `id`, `duration` and `description` are fixed at creation. `start` is
/// written exactly once, when the task first leaves `TO DO`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    duration: TaskDuration,
    description: TaskDescription,
    start: u64,
    activity: ActivityName,
    user: Option<UserName>,
}

impl Task {
    /// Creates a task in the `TO DO` stage.
    #[must_use]
    pub fn new(id: TaskId, duration: TaskDuration, description: TaskDescription) -> Self {
        let [to_do, _, _] = ActivityName::built_ins();
        Self {
            id,
            duration,
            description,
            start: 0,
            activity: to_do,
            user: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the estimated duration.
    #[must_use]
    pub const fn duration(&self) -> TaskDuration {
        self.duration
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the clock reading at which work started, or `0` before then.
    #[must_use]
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Returns the current activity.
    #[must_use]
    pub const fn activity(&self) -> &ActivityName {
        &self.activity
    }

    /// Returns the last assigned user, if the task was ever moved.
    #[must_use]
    pub const fn user(&self) -> Option<&UserName> {
        self.user.as_ref()
    }

    /// Returns `true` while the task has never left `TO DO`.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.activity.is_to_do()
    }

    /// Moves the task to `activity` on behalf of `user` at clock reading
    /// `now`.
    ///
    /// Leaving `TO DO` stamps `start`. Entering `DONE` yields a
    /// [`CompletionReport`], every time it happens.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskAlreadyStarted`] when `activity` is
    /// `TO DO`, whatever the current stage. The task is left untouched.
    pub fn move_to(
        &mut self,
        user: UserName,
        activity: ActivityName,
        now: u64,
    ) -> Result<Option<CompletionReport>, BoardDomainError> {
        if activity.is_to_do() {
            return Err(BoardDomainError::TaskAlreadyStarted);
        }

        if self.is_pending() {
            self.start = now;
        }
        self.user = Some(user);
        self.activity = activity;

        Ok(self
            .activity
            .is_done()
            .then(|| CompletionReport::compute(self.start, self.duration, now)))
    }
}
