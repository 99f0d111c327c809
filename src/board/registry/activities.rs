//! Workflow stages, built-ins first.

use super::{RegistryError, RegistryResult};
use crate::board::domain::ActivityName;
use serde::Serialize;

/// A registered activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    name: ActivityName,
}

impl Activity {
    /// Returns the activity name.
    #[must_use]
    pub const fn name(&self) -> &ActivityName {
        &self.name
    }
}

/// Bounded activity collection seeded with `TO DO`, `IN PROGRESS` and
/// `DONE`. The built-ins count toward the capacity.
#[derive(Debug, Clone)]
pub struct ActivityRegistry {
    activities: Vec<Activity>,
    capacity: usize,
}

impl ActivityRegistry {
    /// Creates a registry holding the built-ins and room for at most
    /// `capacity` activities in total.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            activities: ActivityName::built_ins()
                .into_iter()
                .map(|name| Activity { name })
                .collect(),
            capacity,
        }
    }

    /// Appends a new activity.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateActivity`] or
    /// [`RegistryError::ActivityCapacity`]; the registry is unchanged.
    pub fn create(&mut self, name: ActivityName) -> RegistryResult<Activity> {
        if self.contains(name.as_str()) {
            return Err(RegistryError::DuplicateActivity(name.as_str().to_owned()));
        }
        if self.activities.len() >= self.capacity {
            return Err(RegistryError::ActivityCapacity {
                limit: self.capacity,
            });
        }
        let activity = Activity { name };
        self.activities.push(activity.clone());
        Ok(activity)
    }

    /// Finds an activity by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Activity> {
        self.activities
            .iter()
            .find(|activity| activity.name.as_str() == name)
    }

    /// Returns `true` when an activity has exactly this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Returns all activities in creation order.
    #[must_use]
    pub fn list(&self) -> &[Activity] {
        &self.activities
    }

    /// Returns the number of activities, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Always `false`: the built-ins are present from the start.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
