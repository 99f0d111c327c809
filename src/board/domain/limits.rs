//! Capacity and length bounds for a board.

use serde::Deserialize;

/// Configurable bounds enforced by the registries.
///
/// Missing fields fall back to the defaults when deserialized, so a host can
/// override a single bound:
///
/// ```
/// use taskboard::board::domain::BoardLimits;
///
/// let limits: BoardLimits = serde_json::from_str(r#"{ "max_users": 5 }"#).unwrap();
/// assert_eq!(limits.max_users(), 5);
/// assert_eq!(limits.max_tasks(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardLimits {
    max_users: usize,
    max_activities: usize,
    max_tasks: usize,
    max_user_name_len: usize,
    max_activity_name_len: usize,
    max_description_len: usize,
}

impl BoardLimits {
    /// Creates limits with the default bounds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_users: 50,
            max_activities: 10,
            max_tasks: 10_000,
            max_user_name_len: 20,
            max_activity_name_len: 20,
            max_description_len: 50,
        }
    }

    /// Sets the maximum number of users.
    #[must_use]
    pub const fn with_max_users(mut self, value: usize) -> Self {
        self.max_users = value;
        self
    }

    /// Sets the maximum number of activities, built-ins included.
    #[must_use]
    pub const fn with_max_activities(mut self, value: usize) -> Self {
        self.max_activities = value;
        self
    }

    /// Sets the maximum number of tasks.
    #[must_use]
    pub const fn with_max_tasks(mut self, value: usize) -> Self {
        self.max_tasks = value;
        self
    }

    /// Sets the maximum user name length in characters.
    #[must_use]
    pub const fn with_max_user_name_len(mut self, value: usize) -> Self {
        self.max_user_name_len = value;
        self
    }

    /// Sets the maximum activity name length in characters.
    #[must_use]
    pub const fn with_max_activity_name_len(mut self, value: usize) -> Self {
        self.max_activity_name_len = value;
        self
    }

    /// Sets the maximum task description length in characters.
    #[must_use]
    pub const fn with_max_description_len(mut self, value: usize) -> Self {
        self.max_description_len = value;
        self
    }

    /// Returns the maximum number of users.
    #[must_use]
    pub const fn max_users(&self) -> usize {
        self.max_users
    }

    /// Returns the maximum number of activities.
    #[must_use]
    pub const fn max_activities(&self) -> usize {
        self.max_activities
    }

    /// Returns the maximum number of tasks.
    #[must_use]
    pub const fn max_tasks(&self) -> usize {
        self.max_tasks
    }

    /// Returns the maximum user name length.
    #[must_use]
    pub const fn max_user_name_len(&self) -> usize {
        self.max_user_name_len
    }

    /// Returns the maximum activity name length.
    #[must_use]
    pub const fn max_activity_name_len(&self) -> usize {
        self.max_activity_name_len
    }

    /// Returns the maximum description length.
    #[must_use]
    pub const fn max_description_len(&self) -> usize {
        self.max_description_len
    }
}

impl Default for BoardLimits {
    fn default() -> Self {
        Self::new()
    }
}
