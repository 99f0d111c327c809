//! Verb dispatch from raw input lines to [`Command`] values.

use super::Tokens;

/// A parsed board command.
///
/// Arguments are kept as raw text; the store validates them so that every
/// failure surfaces as a board error with its own message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `t <duration> <description...>`
    CreateTask {
        /// Duration token; empty when missing.
        duration: String,
        /// Remaining text after the duration.
        description: String,
    },
    /// `l [<id> ...]`
    ListTasks {
        /// Identifier tokens; empty to list every task.
        ids: Vec<String>,
    },
    /// `n [<delta>]`
    AdvanceClock {
        /// Everything after the verb, if anything.
        delta: Option<String>,
    },
    /// `u [<name...>]`
    User {
        /// Name to register; `None` lists the users.
        name: Option<String>,
    },
    /// `m <id> <user> <activity...>`
    MoveTask {
        /// Task identifier token.
        id: String,
        /// User name token.
        user: String,
        /// Remaining text naming the destination activity.
        activity: String,
    },
    /// `d <activity...>`
    ListActivity {
        /// Activity name.
        activity: String,
    },
    /// `a [<name...>]`
    Activity {
        /// Name to register; `None` lists the activities.
        name: Option<String>,
    },
    /// `q`
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `None` for blank lines and unrecognised verbs; both are
    /// ignored by the command loop.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = Tokens::new(line);
        let verb = tokens.next()?;
        let command = match verb {
            "t" => Self::CreateTask {
                duration: next_owned(&mut tokens),
                description: tokens.remainder().to_owned(),
            },
            "l" => Self::ListTasks {
                ids: tokens.map(str::to_owned).collect(),
            },
            "n" => Self::AdvanceClock {
                delta: tokens.into_remainder().map(str::to_owned),
            },
            "u" => Self::User {
                name: tokens.into_remainder().map(str::to_owned),
            },
            "m" => Self::MoveTask {
                id: next_owned(&mut tokens),
                user: next_owned(&mut tokens),
                activity: tokens.remainder().to_owned(),
            },
            "d" => Self::ListActivity {
                activity: tokens.remainder().to_owned(),
            },
            "a" => Self::Activity {
                name: tokens.into_remainder().map(str::to_owned),
            },
            "q" => Self::Quit,
            _ => return None,
        };
        Some(command)
    }

    /// Returns the single-letter verb for this command.
    #[must_use]
    pub const fn verb(&self) -> char {
        match self {
            Self::CreateTask { .. } => 't',
            Self::ListTasks { .. } => 'l',
            Self::AdvanceClock { .. } => 'n',
            Self::User { .. } => 'u',
            Self::MoveTask { .. } => 'm',
            Self::ListActivity { .. } => 'd',
            Self::Activity { .. } => 'a',
            Self::Quit => 'q',
        }
    }
}

fn next_owned(tokens: &mut Tokens<'_>) -> String {
    tokens.next().map(str::to_owned).unwrap_or_default()
}
