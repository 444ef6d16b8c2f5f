//! Typical modules shared by unit and integration tests.

use crate::fields::{Deadline, FieldValue, Name, Remark, Resource, Tag, Teacher, TimeSlot, Venue};
use crate::model::Module;
use crate::tracker::ModuleTracker;

pub const VALID_NAME_CS3230: &str = "CS3230";
pub const VALID_NAME_CS3219: &str = "CS3219";
pub const VALID_RESOURCE_CS3230: &str = "11111111";
pub const VALID_RESOURCE_CS3219: &str = "22222222";
pub const VALID_TIMESLOT_CS3230: &str = "230223 18:00";
pub const VALID_TIMESLOT_CS3219: &str = "300123 11:00";
pub const VALID_VENUE_CS3230: &str = "Block 312, Amy Street 1";
pub const VALID_VENUE_CS3219: &str = "Block 123, Bobby Street 3";
pub const VALID_TAG_LECTURE: &str = "Lecture";
pub const VALID_TAG_TUTORIAL: &str = "Tutorial";
pub const VALID_DEADLINE_CS3219: &str = "270223 14:00";
pub const VALID_DEADLINE_CS3230: &str = "300523 12:00";
pub const VALID_REMARK_CS3219: &str = "Hybrid";
pub const VALID_REMARK_CS3230: &str = "Zoom";
pub const VALID_TEACHER_CS3219: &str = "Prof. Z";
pub const VALID_TEACHER_CS3230: &str = "Prof. X";

fn field<T: FieldValue>(raw: &str) -> T {
    T::parse(raw).unwrap_or_else(|e| panic!("bad fixture value {raw:?}: {e}"))
}

pub fn tags(names: &[&str]) -> Vec<Tag> {
    names.iter().map(|n| field(n)).collect()
}

/// A module with the given name, time slot and venue and a placeholder resource.
pub fn module(name: &str, time_slot: &str, venue: &str) -> Module {
    Module::new(
        field::<Name>(name),
        field::<Resource>("https://nusmods.com"),
        field::<TimeSlot>(time_slot),
        field::<Venue>(venue),
    )
}

pub fn cs3219() -> Module {
    Module::new(
        field(VALID_NAME_CS3219),
        field(VALID_RESOURCE_CS3219),
        field(VALID_TIMESLOT_CS3219),
        field(VALID_VENUE_CS3219),
    )
    .with_tags(tags(&[VALID_TAG_LECTURE]))
    .with_remark(field::<Remark>(VALID_REMARK_CS3219))
    .with_deadline(field::<Deadline>(VALID_DEADLINE_CS3219))
    .with_teacher(field::<Teacher>(VALID_TEACHER_CS3219))
}

pub fn cs3230() -> Module {
    Module::new(
        field(VALID_NAME_CS3230),
        field(VALID_RESOURCE_CS3230),
        field(VALID_TIMESLOT_CS3230),
        field(VALID_VENUE_CS3230),
    )
    .with_tags(tags(&[VALID_TAG_TUTORIAL]))
    .with_remark(field::<Remark>(VALID_REMARK_CS3230))
    .with_deadline(field::<Deadline>(VALID_DEADLINE_CS3230))
    .with_teacher(field::<Teacher>(VALID_TEACHER_CS3230))
}

pub fn typical_modules() -> Vec<Module> {
    vec![
        module("CS2106", "290323 12:00", "COM1-0217").with_tags(tags(&["Tutorial"])),
        module("CS2103T", "290323 12:00", "I3-Aud").with_tags(tags(&["Lecture"])),
        module("CS2101", "040423 10:00", "COM1-0210")
            .with_tags(tags(&["Presentation"]))
            .with_deadline(field("010423 23:59")),
        module("CS1231S", "280323 12:00", "COM3").with_tags(tags(&["Tutorial"])),
        module("CS1101S", "270323 09:00", "Hybrid").with_tags(tags(&["Lecture"])),
    ]
}

pub fn typical_tracker() -> ModuleTracker {
    let mut tracker = ModuleTracker::new();
    for m in typical_modules() {
        tracker.add_module(m).expect("typical modules are unique");
    }
    tracker
}
