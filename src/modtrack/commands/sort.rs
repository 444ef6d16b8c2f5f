use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::TrackerState;
use crate::view::SortKey;

pub const COMMAND_WORD: &str = "sort";

pub const USAGE: &str = "sort: Sorts the displayed modules.
Parameters: name | time | deadline
Example: sort deadline";

pub fn run(state: &mut TrackerState, key: SortKey) -> Result<CmdResult> {
    state.view.sort = Some(key);

    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!("Sorted modules by {}", key)))
        .with_listed_modules(state.displayed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldValue;
    use crate::test_utils::typical_tracker;

    #[test]
    fn test_sorts_by_deadline() {
        let mut state = TrackerState::new(typical_tracker());
        let result = run(&mut state, SortKey::Deadline).unwrap();

        assert_eq!(result.messages[0].content, "Sorted modules by deadline");
        assert_eq!(result.listed_modules[0].module.name().as_str(), "CS2101");
        // Sorting only changes the view.
        assert_eq!(state.tracker, typical_tracker());
    }
}
