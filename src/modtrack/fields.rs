//! Validated field values for a [`Module`](crate::model::Module).
//!
//! Every attribute of a module is a small immutable newtype around a `String`
//! that can only be built from input accepted by that attribute's rule. The
//! rules themselves are data, not code: a [`FieldRules`] table maps each
//! [`FieldKind`] to a [`Rule`] and the message shown when the rule rejects a
//! value. Parsers and the JSON store take the table as an argument; the
//! newtypes' own [`FieldValue::parse`] and [`FieldValue::is_valid`] use
//! [`standard_rules`].
//!
//! | Field    | Rule                                              |
//! |----------|---------------------------------------------------|
//! | Name     | alphanumeric words separated by spaces            |
//! | Resource | a single link or identifier without whitespace    |
//! | TimeSlot | `DDMMYY HH:MM`, a real calendar date and time     |
//! | Venue    | anything that is not blank                        |
//! | Remark   | anything, including empty                         |
//! | Deadline | `DDMMYY HH:MM`, or empty                          |
//! | Teacher  | letters, spaces, `.`, `'` and `-`; may be empty   |
//! | Tag      | a single alphanumeric word                        |
//!
//! Values are trimmed before validation, so `" CS3219 "` becomes `"CS3219"`.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How time slots and deadlines are rendered for people.
pub const DATE_TIME_DISPLAY_FORMAT: &str = "%a %d %b %Y, %H:%M";

static DATE_TIME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6} [0-9]{2}:[0-9]{2}$").expect("date-time shape regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Name,
    Resource,
    TimeSlot,
    Venue,
    Remark,
    Deadline,
    Teacher,
    Tag,
}

impl FieldKind {
    pub const ALL: [FieldKind; 8] = [
        FieldKind::Name,
        FieldKind::Resource,
        FieldKind::TimeSlot,
        FieldKind::Venue,
        FieldKind::Remark,
        FieldKind::Deadline,
        FieldKind::Teacher,
        FieldKind::Tag,
    ];

    fn position(self) -> usize {
        self as usize
    }

    /// Field name as used in messages and the data file.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Resource => "Resource",
            FieldKind::TimeSlot => "TimeSlot",
            FieldKind::Venue => "Venue",
            FieldKind::Remark => "Remark",
            FieldKind::Deadline => "Deadline",
            FieldKind::Teacher => "Teacher",
            FieldKind::Tag => "Tag",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A declarative format rule for one field.
#[derive(Debug, Clone)]
pub enum Rule {
    /// The whole value must match the regex (anchor it yourself).
    Pattern(Regex),
    /// At least this many characters. Zero accepts anything.
    MinLength(usize),
    /// At least one non-whitespace character.
    NonBlank,
    /// A `DDMMYY HH:MM` date-time that exists on the calendar.
    DateTime { allow_empty: bool },
}

impl Rule {
    /// Builds a [`Rule::Pattern`], panicking on an invalid regex.
    ///
    /// Only meant for patterns written into the source.
    pub fn pattern(re: &str) -> Self {
        Rule::Pattern(Regex::new(re).expect("field rule regex must compile"))
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Rule::Pattern(re) => re.is_match(value),
            Rule::MinLength(min) => value.chars().count() >= *min,
            Rule::NonBlank => !value.trim().is_empty(),
            Rule::DateTime { allow_empty } => {
                (*allow_empty && value.is_empty()) || parse_date_time(value).is_some()
            }
        }
    }
}

/// Parses `DDMMYY HH:MM` into a date-time in the 2000s.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    if !DATE_TIME_SHAPE.is_match(value) {
        return None;
    }
    let num = |range: std::ops::Range<usize>| value[range].parse::<u32>().ok();
    let day = num(0..2)?;
    let month = num(2..4)?;
    let year = num(4..6)?;
    let hour = num(7..9)?;
    let minute = num(10..12)?;
    NaiveDate::from_ymd_opt(2000 + year as i32, month, day)?.and_hms_opt(hour, minute, 0)
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub rule: Rule,
    pub message: String,
}

/// Raised when a raw value does not satisfy its field's rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ConstraintViolation {
    pub kind: FieldKind,
    pub message: String,
}

/// The rule and constraint message for every [`FieldKind`].
#[derive(Debug, Clone)]
pub struct FieldRules {
    specs: [FieldSpec; 8],
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl FieldRules {
    pub fn standard() -> Self {
        Self {
            specs: std::array::from_fn(|i| standard_spec(FieldKind::ALL[i])),
        }
    }

    /// Replaces the rule and message for one field.
    pub fn with_rule(mut self, kind: FieldKind, rule: Rule, message: impl Into<String>) -> Self {
        self.specs[kind.position()] = FieldSpec {
            rule,
            message: message.into(),
        };
        self
    }

    pub fn spec(&self, kind: FieldKind) -> &FieldSpec {
        &self.specs[kind.position()]
    }

    pub fn message(&self, kind: FieldKind) -> &str {
        &self.spec(kind).message
    }

    /// Checks `raw` exactly as given; no trimming.
    pub fn is_valid(&self, kind: FieldKind, raw: &str) -> bool {
        self.spec(kind).rule.accepts(raw)
    }

    /// Trims `raw`, validates it against `T`'s rule and wraps it.
    pub fn parse<T: FieldValue>(&self, raw: &str) -> Result<T, ConstraintViolation> {
        let trimmed = raw.trim();
        if !self.is_valid(T::KIND, trimmed) {
            return Err(ConstraintViolation {
                kind: T::KIND,
                message: self.message(T::KIND).to_string(),
            });
        }
        Ok(T::from_validated(trimmed.to_string()))
    }
}

fn standard_spec(kind: FieldKind) -> FieldSpec {
    let (rule, message) = match kind {
        FieldKind::Name => (
            Rule::pattern(r"^[A-Za-z0-9][A-Za-z0-9 ]*$"),
            "Names should only contain alphanumeric characters and spaces, and it should not be blank",
        ),
        FieldKind::Resource => (
            Rule::pattern(r"^\S+$"),
            "Resources should be a single link or identifier without spaces, and it should not be blank",
        ),
        FieldKind::TimeSlot => (
            Rule::DateTime { allow_empty: false },
            "Time slots should be a valid date and time in the format DDMMYY HH:MM, e.g. 300123 11:00",
        ),
        FieldKind::Venue => (
            Rule::NonBlank,
            "Venues can take any values, and it should not be blank",
        ),
        FieldKind::Remark => (Rule::MinLength(0), "Remarks can take any values"),
        FieldKind::Deadline => (
            Rule::DateTime { allow_empty: true },
            "Deadlines should be a valid date and time in the format DDMMYY HH:MM, e.g. 270223 14:00",
        ),
        FieldKind::Teacher => (
            Rule::pattern(r"^([A-Za-z][A-Za-z .'-]*)?$"),
            "Teacher names should start with a letter and only contain letters, spaces, dots, apostrophes and hyphens",
        ),
        FieldKind::Tag => (
            Rule::pattern(r"^[A-Za-z0-9]+$"),
            "Tags names should be alphanumeric",
        ),
    };
    FieldSpec {
        rule,
        message: message.to_string(),
    }
}

static STANDARD_RULES: Lazy<FieldRules> = Lazy::new(FieldRules::standard);

/// The rule table used when no other table is supplied.
pub fn standard_rules() -> &'static FieldRules {
    &STANDARD_RULES
}

/// A validated string attribute of a module.
pub trait FieldValue: Sized {
    const KIND: FieldKind;

    /// Wraps a value that already passed validation.
    fn from_validated(value: String) -> Self;

    fn as_str(&self) -> &str;

    fn is_valid(raw: &str) -> bool {
        standard_rules().is_valid(Self::KIND, raw)
    }

    fn parse(raw: &str) -> Result<Self, ConstraintViolation> {
        standard_rules().parse(raw)
    }
}

macro_rules! field_value {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl FieldValue for $name {
            const KIND: FieldKind = FieldKind::$kind;

            fn from_validated(value: String) -> Self {
                Self(value)
            }

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ConstraintViolation;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as FieldValue>::parse(s)
            }
        }
    };
}

field_value!(
    /// Module code or title; the identity of a module.
    Name => Name
);
field_value!(
    /// Link or identifier of the module's material.
    Resource => Resource
);
field_value!(TimeSlot => TimeSlot);
field_value!(Venue => Venue);
field_value!(
    /// Free-form note. Empty by default.
    Remark => Remark
);
field_value!(
    /// Optional due date. Empty means no deadline.
    Deadline => Deadline
);
field_value!(
    /// Empty by default.
    Teacher => Teacher
);
field_value!(Tag => Tag);

impl TimeSlot {
    pub fn date_time(&self) -> Option<NaiveDateTime> {
        parse_date_time(&self.0)
    }

    pub fn display_long(&self) -> String {
        display_date_time(&self.0)
    }
}

impl Deadline {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn date_time(&self) -> Option<NaiveDateTime> {
        parse_date_time(&self.0)
    }

    pub fn display_long(&self) -> String {
        if self.is_empty() {
            "None".to_string()
        } else {
            display_date_time(&self.0)
        }
    }
}

fn display_date_time(raw: &str) -> String {
    parse_date_time(raw)
        .map(|dt| dt.format(DATE_TIME_DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

impl Default for Remark {
    fn default() -> Self {
        Self(String::new())
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self(String::new())
    }
}

impl Default for Teacher {
    fn default() -> Self {
        Self(String::new())
    }
}
