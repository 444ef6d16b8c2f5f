//! The in-memory collection of modules.
//!
//! [`ModuleTracker`] keeps modules in insertion order and guarantees that no
//! two of them share an identity (see [`Module::is_same_module`]). Every
//! mutating operation either succeeds completely or leaves the tracker as it
//! was.

use crate::error::{ModtrackError, Result};
use crate::model::Module;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleTracker {
    modules: Vec<Module>,
}

impl ModuleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tracker from a snapshot, rejecting duplicate identities.
    pub fn from_modules(modules: Vec<Module>) -> Result<Self> {
        let mut tracker = Self::new();
        tracker.reset_data(modules)?;
        Ok(tracker)
    }

    /// Read-only view of the modules in tracker order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// True if a module with the same identity is tracked.
    pub fn has_module(&self, module: &Module) -> bool {
        self.modules.iter().any(|m| m.is_same_module(module))
    }

    pub fn add_module(&mut self, module: Module) -> Result<()> {
        if self.has_module(&module) {
            return Err(ModtrackError::DuplicateModule(module.name().to_string()));
        }
        tracing::trace!(name = %module.name(), "adding module");
        self.modules.push(module);
        Ok(())
    }

    /// Replaces `target` with `edited`, keeping its position.
    ///
    /// `edited` may keep `target`'s identity, but must not take the identity
    /// of any other tracked module.
    pub fn set_module(&mut self, target: &Module, edited: Module) -> Result<()> {
        let position = self
            .position_of(target)
            .ok_or_else(|| ModtrackError::ModuleNotFound(target.name().to_string()))?;

        let collides = self
            .modules
            .iter()
            .enumerate()
            .any(|(i, m)| i != position && m.is_same_module(&edited));
        if collides {
            return Err(ModtrackError::DuplicateModule(edited.name().to_string()));
        }

        tracing::trace!(from = %target.name(), to = %edited.name(), "replacing module");
        self.modules[position] = edited;
        Ok(())
    }

    pub fn remove_module(&mut self, module: &Module) -> Result<()> {
        let position = self
            .position_of(module)
            .ok_or_else(|| ModtrackError::ModuleNotFound(module.name().to_string()))?;
        tracing::trace!(name = %module.name(), "removing module");
        self.modules.remove(position);
        Ok(())
    }

    /// Replaces the whole contents with `snapshot`.
    ///
    /// Fails without touching the current contents if two modules in the
    /// snapshot share an identity.
    pub fn reset_data(&mut self, snapshot: Vec<Module>) -> Result<()> {
        for (i, module) in snapshot.iter().enumerate() {
            if snapshot[..i].iter().any(|m| m.is_same_module(module)) {
                return Err(ModtrackError::DuplicateModule(module.name().to_string()));
            }
        }
        self.modules = snapshot;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.modules.clear();
    }

    fn position_of(&self, module: &Module) -> Option<usize> {
        self.modules.iter().position(|m| m == module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldValue, Name, Venue};
    use crate::model::EditModuleDescriptor;
    use crate::test_utils::{cs3219, cs3230, typical_modules, typical_tracker};

    fn with_venue(module: &Module, venue: &str) -> Module {
        EditModuleDescriptor {
            venue: Some(Venue::parse(venue).unwrap()),
            ..Default::default()
        }
        .apply(module)
    }

    #[test]
    fn test_new_tracker_is_empty() {
        let tracker = ModuleTracker::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.modules(), &[] as &[Module]);
    }

    #[test]
    fn test_add_then_has_module() {
        let mut tracker = ModuleTracker::new();
        assert!(!tracker.has_module(&cs3219()));
        tracker.add_module(cs3219()).unwrap();
        assert!(tracker.has_module(&cs3219()));
        // Same identity, different fields.
        assert!(tracker.has_module(&with_venue(&cs3219(), "LT19")));
    }

    #[test]
    fn test_add_duplicate_fails_without_change() {
        let mut tracker = ModuleTracker::new();
        tracker.add_module(cs3219()).unwrap();

        let err = tracker
            .add_module(with_venue(&cs3219(), "LT19"))
            .unwrap_err();
        assert!(matches!(err, ModtrackError::DuplicateModule(_)));
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.modules()[0], cs3219());
    }

    #[test]
    fn test_set_module_keeps_position() {
        let mut tracker = typical_tracker();
        let target = tracker.modules()[2].clone();
        let edited = with_venue(&target, "LT27");

        tracker.set_module(&target, edited.clone()).unwrap();
        assert_eq!(tracker.modules()[2], edited);
        assert_eq!(tracker.len(), typical_modules().len());
    }

    #[test]
    fn test_set_module_missing_target() {
        let mut tracker = typical_tracker();
        let err = tracker.set_module(&cs3219(), cs3230()).unwrap_err();
        assert!(matches!(err, ModtrackError::ModuleNotFound(_)));
    }

    #[test]
    fn test_set_module_identity_collision() {
        let mut tracker = typical_tracker();
        let target = tracker.modules()[0].clone();
        let other_name = tracker.modules()[1].name().clone();
        let edited = EditModuleDescriptor {
            name: Some(other_name),
            ..Default::default()
        }
        .apply(&target);

        let before = tracker.clone();
        let err = tracker.set_module(&target, edited).unwrap_err();
        assert!(matches!(err, ModtrackError::DuplicateModule(_)));
        assert_eq!(tracker, before);
    }

    #[test]
    fn test_set_module_rename_to_fresh_name() {
        let mut tracker = typical_tracker();
        let target = tracker.modules()[0].clone();
        let edited = EditModuleDescriptor {
            name: Some(Name::parse("CS9999").unwrap()),
            ..Default::default()
        }
        .apply(&target);
        tracker.set_module(&target, edited).unwrap();
        assert_eq!(tracker.modules()[0].name().as_str(), "CS9999");
    }

    #[test]
    fn test_remove_module() {
        let mut tracker = typical_tracker();
        let target = tracker.modules()[1].clone();
        tracker.remove_module(&target).unwrap();
        assert!(!tracker.has_module(&target));
        assert_eq!(tracker.len(), typical_modules().len() - 1);

        let err = tracker.remove_module(&target).unwrap_err();
        assert!(matches!(err, ModtrackError::ModuleNotFound(_)));
    }

    #[test]
    fn test_reset_data_replaces_contents() {
        let mut tracker = ModuleTracker::new();
        tracker.add_module(cs3219()).unwrap();
        tracker.reset_data(typical_modules()).unwrap();
        assert_eq!(tracker, typical_tracker());
    }

    #[test]
    fn test_reset_data_with_duplicates_fails() {
        let mut tracker = ModuleTracker::new();
        tracker.add_module(cs3230()).unwrap();
        let snapshot = vec![cs3219(), with_venue(&cs3219(), "LT19")];

        let err = tracker.reset_data(snapshot).unwrap_err();
        assert!(matches!(err, ModtrackError::DuplicateModule(_)));
        assert_eq!(tracker.modules(), &[cs3230()]);
    }

    #[test]
    fn test_clear() {
        let mut tracker = typical_tracker();
        tracker.clear();
        assert!(tracker.is_empty());
    }
}
