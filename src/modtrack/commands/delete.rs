use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Index;
use crate::state::TrackerState;

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete: Deletes the module identified by the index number used in the displayed module list.
Parameters: INDEX (must be a positive integer)
Example: delete 1";

pub fn run(state: &mut TrackerState, index: Index) -> Result<CmdResult> {
    let target = state.module_at(index)?;
    state.tracker.remove_module(&target)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Deleted Module: {}", target)))
        .with_affected_modules(vec![target]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModtrackError;
    use crate::fields::FieldValue;
    use crate::test_utils::{typical_modules, typical_tracker};
    use crate::view::ModuleFilter;

    #[test]
    fn test_deletes_from_filtered_list() {
        let mut state = TrackerState::new(typical_tracker());
        state.view.filter = ModuleFilter::Keywords(vec!["Tutorial".into()]);

        let result = run(&mut state, Index::from_one_based(2).unwrap()).unwrap();
        assert_eq!(result.affected_modules[0].name().as_str(), "CS1231S");
        assert_eq!(state.tracker.len(), typical_modules().len() - 1);
        assert!(!state
            .tracker
            .modules()
            .iter()
            .any(|m| m.name().as_str() == "CS1231S"));
    }

    #[test]
    fn test_out_of_range_index() {
        let mut state = TrackerState::new(typical_tracker());
        let err = run(&mut state, Index::from_one_based(6).unwrap()).unwrap_err();
        assert!(matches!(err, ModtrackError::InvalidModuleIndex(_)));
        assert_eq!(state.tracker, typical_tracker());
    }
}
