use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "exit";

pub const USAGE: &str = "exit: Leaves the interactive session.";

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Exiting module tracker as requested ..."))
        .with_exit())
}
