//! Domain model for the task board.
//!
//! Validated scalars, the task aggregate with its activity state machine and
//! the logical clock. Nothing here knows about collections or commands.

mod clock;
mod error;
mod ids;
mod limits;
mod names;
mod task;

pub use clock::{LogicalClock, TimeDelta};
pub use error::{BoardDomainError, ErrorKind};
pub use ids::{TaskDuration, TaskId};
pub use limits::BoardLimits;
pub use names::{ActivityName, TaskDescription, UserName};
pub use task::{CompletionReport, Task};

pub(crate) use ids::parse_unsigned;
