use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::state::TrackerState;
use crate::view::ModuleView;

pub const COMMAND_WORD: &str = "clear";

pub const USAGE: &str = "clear: Removes every module from the module tracker.";

pub fn run(state: &mut TrackerState) -> Result<CmdResult> {
    state.tracker.clear();
    state.view = ModuleView::default();
    Ok(CmdResult::default().with_message(CmdMessage::success("Module tracker has been cleared!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::typical_tracker;
    use crate::view::SortKey;

    #[test]
    fn test_empties_tracker_and_view() {
        let mut state = TrackerState::new(typical_tracker());
        state.view.sort = Some(SortKey::Name);

        run(&mut state).unwrap();
        assert!(state.tracker.is_empty());
        assert_eq!(state.view, ModuleView::default());
    }
}
