use super::helpers::{parse_tags, parse_value};
use super::tokenizer::{tokenize, Prefix};
use super::{
    ParseError, ALL_PREFIXES, PREFIX_DEADLINE, PREFIX_NAME, PREFIX_REMARK, PREFIX_RESOURCE,
    PREFIX_TAG, PREFIX_TEACHER, PREFIX_TIMESLOT, PREFIX_VENUE,
};
use crate::commands::{add::USAGE, Command};
use crate::fields::{Deadline, FieldRules, Name, Remark, Resource, Teacher, TimeSlot, Venue};
use crate::model::Module;

const REQUIRED: [Prefix; 4] = [PREFIX_NAME, PREFIX_RESOURCE, PREFIX_TIMESLOT, PREFIX_VENUE];

pub fn parse(args: &str, rules: &FieldRules) -> Result<Command, ParseError> {
    let map = tokenize(args, &ALL_PREFIXES);
    if !map.are_present(&REQUIRED) || !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(USAGE));
    }

    let name = parse_value::<Name>(rules, &map, PREFIX_NAME)?;
    let resource = parse_value::<Resource>(rules, &map, PREFIX_RESOURCE)?;
    let time_slot = parse_value::<TimeSlot>(rules, &map, PREFIX_TIMESLOT)?;
    let venue = parse_value::<Venue>(rules, &map, PREFIX_VENUE)?;
    let tags = parse_tags(rules, map.all_values(PREFIX_TAG))?;
    let remark = parse_value::<Remark>(rules, &map, PREFIX_REMARK)?;
    let deadline = parse_value::<Deadline>(rules, &map, PREFIX_DEADLINE)?;
    let teacher = parse_value::<Teacher>(rules, &map, PREFIX_TEACHER)?;

    let (Some(name), Some(resource), Some(time_slot), Some(venue)) =
        (name, resource, time_slot, venue)
    else {
        return Err(ParseError::invalid_format(USAGE));
    };

    let module = Module::new(name, resource, time_slot, venue)
        .with_tags(tags)
        .with_remark(remark.unwrap_or_default())
        .with_deadline(deadline.unwrap_or_default())
        .with_teacher(teacher.unwrap_or_default());
    Ok(Command::Add(module))
}
