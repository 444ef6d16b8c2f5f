use super::DataStore;
use crate::error::Result;
use crate::fields::FieldRules;
use crate::model::Module;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    modules: Vec<Module>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modules(modules: Vec<Module>) -> Self {
        Self { modules, saves: 0 }
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, _rules: &FieldRules) -> Result<Vec<Module>> {
        Ok(self.modules.clone())
    }

    fn save(&mut self, modules: &[Module]) -> Result<()> {
        self.modules = modules.to_vec();
        self.saves += 1;
        Ok(())
    }
}
