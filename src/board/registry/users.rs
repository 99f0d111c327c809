//! Registered users in creation order.

use super::{RegistryError, RegistryResult};
use crate::board::domain::UserName;
use serde::Serialize;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    name: UserName,
}

impl User {
    /// Returns the user name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }
}

/// Bounded user collection.
#[derive(Debug, Clone)]
pub struct UserRegistry {
    users: Vec<User>,
    capacity: usize,
}

impl UserRegistry {
    /// Creates an empty registry holding at most `capacity` users.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            users: Vec::new(),
            capacity,
        }
    }

    /// Checks that `name` is free and that there is room for another user.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateUser`] or
    /// [`RegistryError::UserCapacity`].
    pub fn ensure_available(&self, name: &str) -> RegistryResult<()> {
        if self.contains(name) {
            return Err(RegistryError::DuplicateUser(name.to_owned()));
        }
        if self.users.len() >= self.capacity {
            return Err(RegistryError::UserCapacity {
                limit: self.capacity,
            });
        }
        Ok(())
    }

    /// Appends a new user.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateUser`] or
    /// [`RegistryError::UserCapacity`]; the registry is unchanged.
    pub fn create(&mut self, name: UserName) -> RegistryResult<User> {
        self.ensure_available(name.as_str())?;
        let user = User { name };
        self.users.push(user.clone());
        Ok(user)
    }

    /// Finds a user by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name.as_str() == name)
    }

    /// Returns `true` when a user has exactly this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Returns all users in creation order.
    #[must_use]
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Returns the number of registered users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` when no user is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
