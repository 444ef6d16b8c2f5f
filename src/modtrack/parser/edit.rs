use super::helpers::{parse_tags_for_edit, parse_value};
use super::tokenizer::tokenize;
use super::{
    ParseError, ALL_PREFIXES, PREFIX_DEADLINE, PREFIX_NAME, PREFIX_REMARK, PREFIX_RESOURCE,
    PREFIX_TAG, PREFIX_TEACHER, PREFIX_TIMESLOT, PREFIX_VENUE,
};
use crate::commands::{edit::USAGE, Command};
use crate::fields::FieldRules;
use crate::index::Index;
use crate::model::EditModuleDescriptor;

pub fn parse(args: &str, rules: &FieldRules) -> Result<Command, ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);
    let index: Index = map
        .preamble()
        .parse()
        .map_err(|_| ParseError::invalid_format(USAGE))?;

    // Struct fields are evaluated in the order written, so the first
    // invalid field in this order is the one reported.
    let descriptor = EditModuleDescriptor {
        name: parse_value(rules, &map, PREFIX_NAME)?,
        resource: parse_value(rules, &map, PREFIX_RESOURCE)?,
        time_slot: parse_value(rules, &map, PREFIX_TIMESLOT)?,
        venue: parse_value(rules, &map, PREFIX_VENUE)?,
        tags: parse_tags_for_edit(rules, map.all_values(PREFIX_TAG))?,
        remark: parse_value(rules, &map, PREFIX_REMARK)?,
        deadline: parse_value(rules, &map, PREFIX_DEADLINE)?,
        teacher: parse_value(rules, &map, PREFIX_TEACHER)?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }
    Ok(Command::Edit { index, descriptor })
}
