//! The facade every front end talks to.
//!
//! [`TrackerApi`] owns the store, the rule table and the session state. One
//! call to [`TrackerApi::execute`] parses a line, runs the command against a
//! copy of the state, persists it if the command changed any modules, and
//! only then commits the copy. A failure at any step leaves both the session
//! and the data file as they were.

use crate::commands::{CmdResult, Command};
use crate::error::Result;
use crate::fields::FieldRules;
use crate::parser::parse_command;
use crate::state::TrackerState;
use crate::store::DataStore;
use crate::tracker::ModuleTracker;
use crate::view::DisplayModule;

pub struct TrackerApi<S: DataStore> {
    store: S,
    rules: FieldRules,
    state: TrackerState,
}

impl<S: DataStore> TrackerApi<S> {
    /// Loads the stored modules. Fails on unreadable data or duplicate names.
    pub fn open(store: S, rules: FieldRules) -> Result<Self> {
        let modules = store.load(&rules)?;
        let tracker = ModuleTracker::from_modules(modules)?;
        tracing::info!(count = tracker.len(), "module tracker opened");
        Ok(Self {
            store,
            rules,
            state: TrackerState::new(tracker),
        })
    }

    /// Starts with no modules, ignoring whatever the store holds. The first
    /// mutating command overwrites it.
    pub fn empty(store: S, rules: FieldRules) -> Self {
        Self {
            store,
            rules,
            state: TrackerState::default(),
        }
    }

    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        let command = parse_command(line, &self.rules)?;
        self.run(command)
    }

    pub fn run(&mut self, command: Command) -> Result<CmdResult> {
        tracing::debug!(?command, "running command");
        let mutates = command.mutates();

        let mut next = self.state.clone();
        let result = command.execute(&mut next)?;
        if mutates {
            self.store.save(next.tracker.modules())?;
        }
        self.state = next;
        Ok(result)
    }

    pub fn displayed(&self) -> Vec<DisplayModule> {
        self.state.displayed()
    }

    pub fn tracker(&self) -> &ModuleTracker {
        &self.state.tracker
    }

    pub fn rules(&self) -> &FieldRules {
        &self.rules
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
