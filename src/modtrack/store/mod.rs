//! # Storage Layer
//!
//! [`DataStore`] is the persistence seam of the tracker. It deals in whole
//! snapshots: `load` returns every stored module in order and `save` replaces
//! the stored contents with the given modules. The tracker never sees partial
//! writes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON file
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "modules": [
//!     {
//!       "name": "CS3219",
//!       "resource": "https://nusmods.com/modules/CS3219",
//!       "timeSlot": "300123 11:00",
//!       "venue": "COM1-0204",
//!       "tagged": ["Lecture"],
//!       "remark": "Hybrid",
//!       "deadline": "270223 14:00",
//!       "teacher": "Prof. Z"
//!     }
//!   ]
//! }
//! ```
//!
//! Loaded values go through the same [`FieldRules`] as typed input, so a
//! hand-edited file cannot smuggle in a value the parser would reject.

use crate::error::Result;
use crate::fields::FieldRules;
use crate::model::Module;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Reads the stored snapshot, validating every value against `rules`.
    fn load(&self, rules: &FieldRules) -> Result<Vec<Module>>;

    /// Replaces the stored snapshot.
    fn save(&mut self, modules: &[Module]) -> Result<()>;
}
