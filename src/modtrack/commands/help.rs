use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "help";

pub const USAGE: &str = "help: Shows the usage of every command.";

const ALL_USAGES: [&str; 9] = [
    commands::add::USAGE,
    commands::edit::USAGE,
    commands::delete::USAGE,
    commands::find::USAGE,
    commands::list::USAGE,
    commands::sort::USAGE,
    commands::clear::USAGE,
    USAGE,
    commands::exit::USAGE,
];

pub fn run() -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for usage in ALL_USAGES {
        result.add_message(CmdMessage::info(usage));
    }
    Ok(result)
}
