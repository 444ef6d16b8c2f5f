//! Turns one line of user input into a [`Command`].
//!
//! The first whitespace-separated word picks the command; the rest of the
//! line goes to that command's parser. Parsers that take field values run
//! the arguments through [`tokenizer::tokenize`] and validate each value
//! against a [`FieldRules`] table, so a parsed [`Command`] only ever carries
//! well-formed fields.
//!
//! Parsers never look at the tracker. Whether an index points at a real
//! module, or a name is already taken, is decided when the command runs.

use crate::commands::{self, Command};
use crate::fields::{ConstraintViolation, FieldRules};
use thiserror::Error;

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod helpers;
pub mod sort;
pub mod tokenizer;

use tokenizer::Prefix;

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_RESOURCE: Prefix = Prefix::new("r/");
pub const PREFIX_TIMESLOT: Prefix = Prefix::new("s/");
pub const PREFIX_VENUE: Prefix = Prefix::new("v/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_REMARK: Prefix = Prefix::new("m/");
pub const PREFIX_DEADLINE: Prefix = Prefix::new("d/");
pub const PREFIX_TEACHER: Prefix = Prefix::new("p/");

/// Every field prefix, in the order fields are validated.
pub const ALL_PREFIXES: [Prefix; 8] = [
    PREFIX_NAME,
    PREFIX_RESOURCE,
    PREFIX_TIMESLOT,
    PREFIX_VENUE,
    PREFIX_TAG,
    PREFIX_REMARK,
    PREFIX_DEADLINE,
    PREFIX_TEACHER,
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Required parts missing or malformed; carries the command's usage text.
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),

    #[error("At least one field to edit must be provided.")]
    NotEdited,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl ParseError {
    pub(crate) fn invalid_format(usage: &'static str) -> Self {
        ParseError::InvalidFormat { usage }
    }
}

pub fn parse_command(input: &str, rules: &FieldRules) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(pos) => trimmed.split_at(pos),
        None => (trimmed, ""),
    };

    match word {
        "" => Err(ParseError::invalid_format(commands::help::USAGE)),
        commands::add::COMMAND_WORD => add::parse(args, rules),
        commands::edit::COMMAND_WORD => edit::parse(args, rules),
        commands::delete::COMMAND_WORD => delete::parse(args),
        commands::find::COMMAND_WORD => find::parse(args),
        commands::sort::COMMAND_WORD => sort::parse(args),
        commands::list::COMMAND_WORD => Ok(Command::List),
        commands::clear::COMMAND_WORD => Ok(Command::Clear),
        commands::help::COMMAND_WORD => Ok(Command::Help),
        commands::exit::COMMAND_WORD => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}
