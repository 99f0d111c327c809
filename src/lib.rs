//! Taskboard: a command-driven project tracker on a logical clock.
//!
//! Users, workflow stages ("activities") and tasks live in one in-memory
//! [`board::services::Store`]. Commands read one per line advance the clock,
//! register users and activities, create tasks and move them through the
//! workflow. Listings are deterministic: a stable merge sort orders tasks by
//! description, and within an activity by start time with alphabetical ties.
//!
//! # Architecture
//!
//! - **Domain**: validated values and the task state machine
//! - **Registries**: bounded, append-only collections
//! - **Ports**: line source and output sink traits for the command loop
//! - **Adapters**: standard-stream and in-memory implementations of the ports
//!
//! # Modules
//!
//! - [`board`]: domain, registries and the store
//! - [`command`]: parsing, dispatch and the command loop
//! - [`sort`]: the stable merge sort behind every listing
//! - [`telemetry`]: tracing bootstrap for binaries

pub mod board;
pub mod command;
pub mod sort;
pub mod telemetry;
