use super::ParseError;
use crate::commands::{sort::USAGE, Command};
use crate::view::SortKey;

pub fn parse(args: &str) -> Result<Command, ParseError> {
    args.parse::<SortKey>()
        .map(Command::Sort)
        .map_err(|_| ParseError::invalid_format(USAGE))
}
