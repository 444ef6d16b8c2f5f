use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Module;
use crate::state::TrackerState;

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds a module to the module tracker.
Parameters: n/NAME r/RESOURCE s/TIME_SLOT v/VENUE [m/REMARK] [d/DEADLINE] [p/TEACHER] [t/TAG]...
Example: add n/CS3219 r/https://nusmods.com/modules/CS3219 s/300123 11:00 v/COM1-0204 m/Hybrid d/270223 14:00 p/Prof. Z t/Lecture";

pub fn run(state: &mut TrackerState, module: Module) -> Result<CmdResult> {
    state.tracker.add_module(module.clone())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("New module added: {}", module)))
        .with_affected_modules(vec![module]))
}
