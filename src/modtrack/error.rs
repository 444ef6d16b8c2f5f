use crate::index::Index;
use crate::parser::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModtrackError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("This module already exists in the module tracker: {0}")]
    DuplicateModule(String),

    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    #[error("The module index provided is invalid: {0}")]
    InvalidModuleIndex(Index),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Illegal value in data file: {0}")]
    IllegalValue(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl ModtrackError {
    /// True for errors caused by the user's input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ModtrackError::Parse(_)
                | ModtrackError::DuplicateModule(_)
                | ModtrackError::ModuleNotFound(_)
                | ModtrackError::InvalidModuleIndex(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ModtrackError>;
