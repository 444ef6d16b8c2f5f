use crate::error::{ModtrackError, Result};
use crate::index::Index;
use crate::model::Module;
use crate::tracker::ModuleTracker;
use crate::view::{DisplayModule, ModuleView};

/// Everything a command can read or change: the tracked modules and the
/// current view over them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerState {
    pub tracker: ModuleTracker,
    pub view: ModuleView,
}

impl TrackerState {
    pub fn new(tracker: ModuleTracker) -> Self {
        Self {
            tracker,
            view: ModuleView::default(),
        }
    }

    /// The displayed list with its one-based indexes.
    pub fn displayed(&self) -> Vec<DisplayModule> {
        self.view.display(&self.tracker)
    }

    /// Resolves a user-supplied index against the displayed list.
    pub fn module_at(&self, index: Index) -> Result<Module> {
        self.view
            .get(&self.tracker, index)
            .cloned()
            .ok_or(ModtrackError::InvalidModuleIndex(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::typical_tracker;
    use crate::view::ModuleFilter;

    #[test]
    fn test_resolves_against_filtered_list() {
        let mut state = TrackerState::new(typical_tracker());
        state.view.filter = ModuleFilter::Keywords(vec!["Lecture".into()]);

        let first = state.module_at(Index::from_zero_based(0)).unwrap();
        assert_eq!(first.name().to_string(), "CS2103T");

        let err = state.module_at(Index::from_zero_based(2)).unwrap_err();
        assert!(matches!(err, ModtrackError::InvalidModuleIndex(_)));
    }
}
