use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::TrackerState;
use crate::view::ModuleFilter;

pub const COMMAND_WORD: &str = "list";

pub const USAGE: &str = "list: Lists all modules.";

/// Drops any `find` filter. The sort key stays.
pub fn run(state: &mut TrackerState) -> Result<CmdResult> {
    state.view.filter = ModuleFilter::All;

    Ok(CmdResult::default()
        .with_message(CmdMessage::info("Listed all modules"))
        .with_listed_modules(state.displayed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldValue;
    use crate::test_utils::typical_tracker;
    use crate::view::SortKey;

    #[test]
    fn test_resets_filter_keeps_sort() {
        let mut state = TrackerState::new(typical_tracker());
        state.view.filter = ModuleFilter::Keywords(vec!["Lecture".into()]);
        state.view.sort = Some(SortKey::Name);

        let result = run(&mut state).unwrap();
        assert_eq!(result.listed_modules.len(), 5);
        assert_eq!(result.listed_modules[0].module.name().as_str(), "CS1101S");
        assert_eq!(state.view.sort, Some(SortKey::Name));
    }
}
