use super::ParseError;
use crate::commands::{delete::USAGE, Command};
use crate::index::Index;

pub fn parse(args: &str) -> Result<Command, ParseError> {
    args.parse::<Index>()
        .map(Command::Delete)
        .map_err(|_| ParseError::invalid_format(USAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_index() {
        assert_eq!(
            parse(" 1 "),
            Ok(Command::Delete(Index::from_one_based(1).unwrap()))
        );
    }

    #[test]
    fn test_invalid_args() {
        for args in ["", "a", "0", "-1", "1 2", "+1", "99999999999"] {
            assert_eq!(parse(args), Err(ParseError::invalid_format(USAGE)), "{args:?}");
        }
    }
}
