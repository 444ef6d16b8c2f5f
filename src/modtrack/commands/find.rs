use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::TrackerState;
use crate::view::ModuleFilter;

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds all modules whose names or tags contain any of the specified keywords (case-insensitive) and displays them as a list with index numbers.
Parameters: KEYWORD [MORE_KEYWORDS]...
Example: find CS2103T Lecture";

pub fn run(state: &mut TrackerState, keywords: Vec<String>) -> Result<CmdResult> {
    state.view.filter = ModuleFilter::Keywords(keywords);
    let listed = state.displayed();

    let summary = format!("{} modules listed!", listed.len());
    let message = if listed.is_empty() {
        CmdMessage::warning(summary)
    } else {
        CmdMessage::info(summary)
    };

    Ok(CmdResult::default()
        .with_message(message)
        .with_listed_modules(listed))
}
