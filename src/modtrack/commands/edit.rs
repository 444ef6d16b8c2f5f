use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::Index;
use crate::model::EditModuleDescriptor;
use crate::state::TrackerState;
use crate::view::ModuleFilter;

pub const COMMAND_WORD: &str = "edit";

pub const USAGE: &str = "edit: Edits the module identified by the index number used in the displayed module list. Existing values will be overwritten by the input values.
Parameters: INDEX (must be a positive integer) [n/NAME] [r/RESOURCE] [s/TIME_SLOT] [v/VENUE] [m/REMARK] [d/DEADLINE] [p/TEACHER] [t/TAG]...
Example: edit 1 s/300123 12:00 v/LT19";

/// Applies `descriptor` to the module displayed at `index`.
///
/// The filter is reset afterwards so the edited module stays visible even if
/// it no longer matches the previous `find`.
pub fn run(
    state: &mut TrackerState,
    index: Index,
    descriptor: &EditModuleDescriptor,
) -> Result<CmdResult> {
    let target = state.module_at(index)?;
    let edited = descriptor.apply(&target);
    state.tracker.set_module(&target, edited.clone())?;
    state.view.filter = ModuleFilter::All;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Edited Module: {}", edited)))
        .with_affected_modules(vec![edited]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModtrackError;
    use crate::fields::{FieldValue, Name, Venue};
    use crate::test_utils::typical_tracker;
    use crate::view::SortKey;
    use std::collections::BTreeSet;

    fn state() -> TrackerState {
        TrackerState::new(typical_tracker())
    }

    fn idx(n: usize) -> Index {
        Index::from_one_based(n).unwrap()
    }

    #[test]
    fn test_edits_displayed_module_in_place() {
        let mut state = state();
        let descriptor = EditModuleDescriptor {
            venue: Some(Venue::parse("LT19").unwrap()),
            tags: Some(BTreeSet::new()),
            ..Default::default()
        };

        let result = run(&mut state, idx(2), &descriptor).unwrap();
        let edited = &state.tracker.modules()[1];
        assert_eq!(edited.name().as_str(), "CS2103T");
        assert_eq!(edited.venue().as_str(), "LT19");
        assert!(edited.tags().is_empty());
        assert!(result.messages[0].content.starts_with("Edited Module: CS2103T"));
    }

    #[test]
    fn test_index_follows_sorted_view() {
        let mut state = state();
        state.view.sort = Some(SortKey::Name);
        let descriptor = EditModuleDescriptor {
            venue: Some(Venue::parse("Zoom").unwrap()),
            ..Default::default()
        };

        run(&mut state, idx(1), &descriptor).unwrap();
        // CS1101S is first by name but last in the tracker.
        assert_eq!(state.tracker.modules()[4].venue().as_str(), "Zoom");
    }

    #[test]
    fn test_keeping_own_name_is_allowed() {
        let mut state = state();
        let descriptor = EditModuleDescriptor {
            name: Some(Name::parse("CS2106").unwrap()),
            ..Default::default()
        };
        assert!(run(&mut state, idx(1), &descriptor).is_ok());
    }

    #[test]
    fn test_taking_another_name_fails_unchanged() {
        let mut state = state();
        let before = state.clone();
        let descriptor = EditModuleDescriptor {
            name: Some(Name::parse("CS2101").unwrap()),
            ..Default::default()
        };

        let err = run(&mut state, idx(1), &descriptor).unwrap_err();
        assert!(matches!(err, ModtrackError::DuplicateModule(_)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_index_past_displayed_list() {
        let mut state = state();
        state.view.filter = ModuleFilter::Keywords(vec!["Presentation".into()]);
        let before = state.clone();
        let descriptor = EditModuleDescriptor {
            venue: Some(Venue::parse("LT19").unwrap()),
            ..Default::default()
        };

        let err = run(&mut state, idx(2), &descriptor).unwrap_err();
        assert!(matches!(err, ModtrackError::InvalidModuleIndex(_)));
        assert!(err
            .to_string()
            .starts_with("The module index provided is invalid"));
        assert_eq!(state, before);
    }
}
