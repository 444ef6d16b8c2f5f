use super::ParseError;
use crate::commands::{find::USAGE, Command};

pub fn parse(args: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(USAGE));
    }
    Ok(Command::Find(keywords))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_args() {
        assert_eq!(parse("     "), Err(ParseError::invalid_format(USAGE)));
    }

    #[test]
    fn test_keywords_split_on_any_whitespace() {
        let expected = Ok(Command::Find(vec!["CS2103T".into(), "Lecture".into()]));
        assert_eq!(parse("CS2103T Lecture"), expected);
        assert_eq!(parse(" \n CS2103T \n \t Lecture  \t"), expected);
    }
}
