//! Command surface of the board.
//!
//! One command per input line; the first token selects the verb:
//!
//! | Verb | Arguments                   | Effect                                  |
//! |------|-----------------------------|-----------------------------------------|
//! | `t`  | `<duration> <description>`  | create a task                           |
//! | `l`  | `[<id> ...]`                | list all tasks, or the given ones       |
//! | `n`  | `[<delta>]`                 | advance or query the clock              |
//! | `u`  | `[<name>]`                  | register a user, or list users          |
//! | `m`  | `<id> <user> <activity>`    | move a task                             |
//! | `d`  | `<activity>`                | list the tasks in an activity           |
//! | `a`  | `[<name>]`                  | register an activity, or list them      |
//! | `q`  |                             | stop                                    |
//!
//! Input and output go through the [`ports`] traits so the loop can run over
//! standard streams or in memory.

pub mod adapters;
mod parser;
pub mod ports;
mod processor;
mod session;
mod tokens;

pub use parser::Command;
pub use processor::{CommandProcessor, Execution, Flow, Reply};
pub use session::run_session;
pub use tokens::Tokens;

#[cfg(test)]
mod tests;
