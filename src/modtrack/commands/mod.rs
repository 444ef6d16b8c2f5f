use crate::error::Result;
use crate::index::Index;
use crate::model::{EditModuleDescriptor, Module};
use crate::state::TrackerState;
use crate::view::{DisplayModule, SortKey};

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;
pub mod sort;

/// A parsed, validated request against the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Module),
    Edit {
        index: Index,
        descriptor: EditModuleDescriptor,
    },
    Delete(Index),
    Find(Vec<String>),
    List,
    Sort(SortKey),
    Clear,
    Help,
    Exit,
}

impl Command {
    /// True when a successful run changes the tracked modules and the data
    /// file must be rewritten.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Edit { .. } | Command::Delete(_) | Command::Clear
        )
    }

    pub fn execute(self, state: &mut TrackerState) -> Result<CmdResult> {
        match self {
            Command::Add(module) => add::run(state, module),
            Command::Edit { index, descriptor } => edit::run(state, index, &descriptor),
            Command::Delete(index) => delete::run(state, index),
            Command::Find(keywords) => find::run(state, keywords),
            Command::List => list::run(state),
            Command::Sort(key) => sort::run(state, key),
            Command::Clear => clear::run(state),
            Command::Help => help::run(),
            Command::Exit => exit::run(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command did, for the caller to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Modules added, edited (new version) or deleted.
    pub affected_modules: Vec<Module>,
    /// Set by commands that change what is displayed.
    pub listed_modules: Vec<DisplayModule>,
    pub messages: Vec<CmdMessage>,
    /// The session should end after this result is shown.
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_modules(mut self, modules: Vec<Module>) -> Self {
        self.affected_modules = modules;
        self
    }

    pub fn with_listed_modules(mut self, modules: Vec<DisplayModule>) -> Self {
        self.listed_modules = modules;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }
}
