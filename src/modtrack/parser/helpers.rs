use super::tokenizer::{ArgumentMultimap, Prefix};
use crate::fields::{ConstraintViolation, FieldRules, FieldValue, Tag};
use std::collections::BTreeSet;

/// Validates the last value given for `prefix`, if any.
pub fn parse_value<T: FieldValue>(
    rules: &FieldRules,
    map: &ArgumentMultimap,
    prefix: Prefix,
) -> Result<Option<T>, ConstraintViolation> {
    map.value(prefix).map(|raw| rules.parse::<T>(raw)).transpose()
}

/// Validates every tag value. Duplicates collapse into one tag.
pub fn parse_tags(
    rules: &FieldRules,
    values: &[String],
) -> Result<BTreeSet<Tag>, ConstraintViolation> {
    values.iter().map(|raw| rules.parse::<Tag>(raw)).collect()
}

/// Tag handling for edits: no `t/` leaves tags alone, a single empty `t/`
/// clears them, anything else replaces them.
pub fn parse_tags_for_edit(
    rules: &FieldRules,
    values: &[String],
) -> Result<Option<BTreeSet<Tag>>, ConstraintViolation> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(rules, values).map(Some),
    }
}
