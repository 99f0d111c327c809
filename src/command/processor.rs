//! Stateless dispatch from commands to store operations.

use super::Command;
use crate::board::{
    domain::{CompletionReport, ErrorKind, Task, TaskId},
    services::{BoardError, Store},
};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// One output record produced by a command.
///
/// [`fmt::Display`] renders the exact text line; the serialized form carries
/// the same data as structured fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    /// A task was created.
    TaskCreated {
        /// New task identifier.
        id: TaskId,
    },
    /// A row of a task listing.
    Task {
        /// Task identifier.
        id: TaskId,
        /// Current activity.
        activity: String,
        /// Estimated duration.
        duration: u64,
        /// Task description.
        description: String,
    },
    /// A row of a within-activity listing.
    ActivityTask {
        /// Task identifier.
        id: TaskId,
        /// Clock reading at which the task started.
        start: u64,
        /// Task description.
        description: String,
    },
    /// The clock reading after an `n` command.
    Clock {
        /// Current reading.
        now: u64,
    },
    /// A row of the user listing.
    User {
        /// User name.
        name: String,
    },
    /// A row of the activity listing.
    Activity {
        /// Activity name.
        name: String,
    },
    /// A task entered `DONE`.
    Completed {
        /// Clock time since the task started.
        spent: u64,
        /// `spent - duration`.
        slack: i128,
    },
    /// The command was rejected.
    Error {
        /// Failure classification.
        kind: ErrorKind,
        /// Operator-facing message.
        message: String,
    },
}

impl Reply {
    fn task_row(task: &Task) -> Self {
        Self::Task {
            id: task.id(),
            activity: task.activity().to_string(),
            duration: task.duration().value(),
            description: task.description().to_string(),
        }
    }

    fn activity_row(task: &Task) -> Self {
        Self::ActivityTask {
            id: task.id(),
            start: task.start(),
            description: task.description().to_string(),
        }
    }

    fn completed(report: CompletionReport) -> Self {
        Self::Completed {
            spent: report.spent(),
            slack: report.slack(),
        }
    }

    fn error(err: &BoardError) -> Self {
        Self::Error {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Returns `true` for [`Reply::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TaskCreated { id } => write!(f, "task {id}"),
            Self::Task {
                id,
                activity,
                duration,
                description,
            } => write!(f, "{id} {activity} #{duration} {description}"),
            Self::ActivityTask {
                id,
                start,
                description,
            } => write!(f, "{id} {start} {description}"),
            Self::Clock { now } => write!(f, "{now}"),
            Self::User { name } | Self::Activity { name } => f.write_str(name),
            Self::Completed { spent, slack } => write!(f, "duration={spent} slack={slack}"),
            Self::Error { message, .. } => f.write_str(message),
        }
    }
}

/// Whether the command loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop the loop.
    Quit,
}

/// The records produced by one command and the resulting loop control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Output records in emission order.
    pub replies: Vec<Reply>,
    /// Loop control.
    pub flow: Flow,
}

impl Execution {
    fn replies(replies: Vec<Reply>) -> Self {
        Self {
            replies,
            flow: Flow::Continue,
        }
    }

    fn from_result(result: Result<Vec<Reply>, BoardError>) -> Self {
        match result {
            Ok(replies) => Self::replies(replies),
            Err(err) => {
                warn!(kind = ?err.kind(), error = %err, "command rejected");
                Self::replies(vec![Reply::error(&err)])
            }
        }
    }

    const fn quit() -> Self {
        Self {
            replies: Vec::new(),
            flow: Flow::Quit,
        }
    }
}

/// Translates commands into store operations.
///
/// Holds no state: everything lives in the [`Store`] passed to
/// [`CommandProcessor::execute`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProcessor;

impl CommandProcessor {
    /// Creates a processor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs one command against `store`.
    ///
    /// Failures are reported as a single [`Reply::Error`]; the store is
    /// unchanged in that case.
    pub fn execute(self, store: &mut Store, command: Command) -> Execution {
        debug!(verb = %command.verb(), "dispatching command");
        let result = match command {
            Command::CreateTask {
                duration,
                description,
            } => store
                .create_task(&duration, &description)
                .map(|id| vec![Reply::TaskCreated { id }]),
            Command::ListTasks { ids } => store
                .list_tasks(&ids)
                .map(|tasks| tasks.into_iter().map(Reply::task_row).collect()),
            Command::AdvanceClock { delta } => store
                .advance_clock(delta.as_deref())
                .map(|now| vec![Reply::Clock { now }]),
            Command::User { name: Some(name) } => {
                store.register_user(&name).map(|_| Vec::new())
            }
            Command::User { name: None } => Ok(store
                .users()
                .list()
                .iter()
                .map(|user| Reply::User {
                    name: user.name().to_string(),
                })
                .collect()),
            Command::MoveTask { id, user, activity } => store
                .move_task(&id, &user, &activity)
                .map(|report| report.map(Reply::completed).into_iter().collect()),
            Command::ListActivity { activity } => store
                .tasks_in_activity(&activity)
                .map(|tasks| tasks.into_iter().map(Reply::activity_row).collect()),
            Command::Activity { name: Some(name) } => {
                store.register_activity(&name).map(|_| Vec::new())
            }
            Command::Activity { name: None } => Ok(store
                .activities()
                .list()
                .iter()
                .map(|activity| Reply::Activity {
                    name: activity.name().to_string(),
                })
                .collect()),
            Command::Quit => return Execution::quit(),
        };
        Execution::from_result(result)
    }
}
