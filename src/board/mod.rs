//! Project board: users, activities and tasks on a logical clock.
//!
//! Tasks start in `TO DO`, are moved between registered activities by
//! registered users, and report elapsed time and slack whenever they enter
//! `DONE`. The module is layered the same way throughout the crate:
//!
//! - Domain types in [`domain`]
//! - Bounded collections in [`registry`]
//! - The [`services::Store`] aggregate and its shared handle in [`services`]

pub mod domain;
pub mod registry;
pub mod services;

#[cfg(test)]
mod tests;
