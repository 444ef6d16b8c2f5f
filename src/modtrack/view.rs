//! The filtered and sorted list of modules the user sees.
//!
//! Indexes typed by the user (`edit 2`, `delete 1`) refer to positions in this
//! list, not in the tracker. The view never owns modules; it only decides
//! which tracked modules to show and in what order.

use crate::index::Index;
use crate::model::Module;
use crate::tracker::ModuleTracker;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A module together with the index it is displayed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModule {
    pub index: Index,
    pub module: Module,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModuleFilter {
    #[default]
    All,
    /// Matches when any keyword equals a whole word of the name or a tag,
    /// ignoring case.
    Keywords(Vec<String>),
}

impl ModuleFilter {
    pub fn matches(&self, module: &Module) -> bool {
        match self {
            ModuleFilter::All => true,
            ModuleFilter::Keywords(keywords) => keywords.iter().any(|keyword| {
                module
                    .name()
                    .to_string()
                    .split_whitespace()
                    .any(|word| word.eq_ignore_ascii_case(keyword))
                    || module
                        .tags()
                        .iter()
                        .any(|tag| tag.to_string().eq_ignore_ascii_case(keyword))
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    TimeSlot,
    Deadline,
}

impl SortKey {
    fn compare(self, a: &Module, b: &Module) -> Ordering {
        match self {
            SortKey::Name => a.name().cmp(b.name()),
            SortKey::TimeSlot => a.time_slot().date_time().cmp(&b.time_slot().date_time()),
            // Modules without a deadline go last.
            SortKey::Deadline => match (a.deadline().date_time(), b.deadline().date_time()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Name => "name",
            SortKey::TimeSlot => "time",
            SortKey::Deadline => "deadline",
        };
        f.write_str(s)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "time" | "timeslot" => Ok(SortKey::TimeSlot),
            "deadline" => Ok(SortKey::Deadline),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Filter and sort settings applied on top of the tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleView {
    pub filter: ModuleFilter,
    pub sort: Option<SortKey>,
}

impl ModuleView {
    /// Modules to display, in display order. The sort is stable, so ties keep
    /// tracker order.
    pub fn resolve<'a>(&self, tracker: &'a ModuleTracker) -> Vec<&'a Module> {
        let mut shown: Vec<&Module> = tracker
            .modules()
            .iter()
            .filter(|m| self.filter.matches(m))
            .collect();
        if let Some(key) = self.sort {
            shown.sort_by(|a, b| key.compare(a, b));
        }
        shown
    }

    pub fn display(&self, tracker: &ModuleTracker) -> Vec<DisplayModule> {
        self.resolve(tracker)
            .into_iter()
            .enumerate()
            .map(|(i, module)| DisplayModule {
                index: Index::from_zero_based(i),
                module: module.clone(),
            })
            .collect()
    }

    /// The module shown at `index`, if the list is that long.
    pub fn get<'a>(&self, tracker: &'a ModuleTracker, index: Index) -> Option<&'a Module> {
        self.resolve(tracker).get(index.zero_based()).copied()
    }
}
