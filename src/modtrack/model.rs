use crate::fields::{
    Deadline, FieldValue, Name, Remark, Resource, Tag, Teacher, TimeSlot, Venue,
};
use std::collections::BTreeSet;
use std::fmt;

/// A tracked university module, lecture or tutorial.
///
/// Modules are immutable: editing one produces a new `Module` (see
/// [`EditModuleDescriptor::apply`]). Two modules denote the same real-world
/// item when their names match ([`Module::is_same_module`]); `==` compares
/// every field and the tag set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Module {
    name: Name,
    resource: Resource,
    time_slot: TimeSlot,
    venue: Venue,
    tags: BTreeSet<Tag>,
    remark: Remark,
    deadline: Deadline,
    teacher: Teacher,
}

impl Module {
    /// Creates a module with no tags, remark, deadline or teacher.
    pub fn new(name: Name, resource: Resource, time_slot: TimeSlot, venue: Venue) -> Self {
        Self {
            name,
            resource,
            time_slot,
            venue,
            tags: BTreeSet::new(),
            remark: Remark::default(),
            deadline: Deadline::default(),
            teacher: Teacher::default(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn with_remark(mut self, remark: Remark) -> Self {
        self.remark = remark;
        self
    }

    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teacher = teacher;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn time_slot(&self) -> &TimeSlot {
        &self.time_slot
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    /// Tags in alphabetical order.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    /// Identity check: true when both modules have the same name.
    pub fn is_same_module(&self, other: &Module) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Resource: {}; Time: {}; Venue: {}",
            self.name, self.resource, self.time_slot, self.venue
        )?;
        if !self.remark.as_str().is_empty() {
            write!(f, "; Remark: {}", self.remark)?;
        }
        if !self.deadline.is_empty() {
            write!(f, "; Deadline: {}", self.deadline)?;
        }
        if !self.teacher.as_str().is_empty() {
            write!(f, "; Teacher: {}", self.teacher)?;
        }
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{}]", tag)?;
            }
        }
        Ok(())
    }
}

/// The fields a user chose to change on an existing module.
///
/// `tags: Some(empty)` clears every tag, while `tags: None` leaves them alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditModuleDescriptor {
    pub name: Option<Name>,
    pub resource: Option<Resource>,
    pub time_slot: Option<TimeSlot>,
    pub venue: Option<Venue>,
    pub tags: Option<BTreeSet<Tag>>,
    pub remark: Option<Remark>,
    pub deadline: Option<Deadline>,
    pub teacher: Option<Teacher>,
}

impl EditModuleDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.resource.is_some()
            || self.time_slot.is_some()
            || self.venue.is_some()
            || self.tags.is_some()
            || self.remark.is_some()
            || self.deadline.is_some()
            || self.teacher.is_some()
    }

    /// Builds the edited copy of `module`. Fields without an override keep
    /// the original value; `module` itself is untouched.
    pub fn apply(&self, module: &Module) -> Module {
        Module {
            name: self.name.clone().unwrap_or_else(|| module.name.clone()),
            resource: self
                .resource
                .clone()
                .unwrap_or_else(|| module.resource.clone()),
            time_slot: self
                .time_slot
                .clone()
                .unwrap_or_else(|| module.time_slot.clone()),
            venue: self.venue.clone().unwrap_or_else(|| module.venue.clone()),
            tags: self.tags.clone().unwrap_or_else(|| module.tags.clone()),
            remark: self.remark.clone().unwrap_or_else(|| module.remark.clone()),
            deadline: self
                .deadline
                .clone()
                .unwrap_or_else(|| module.deadline.clone()),
            teacher: self
                .teacher
                .clone()
                .unwrap_or_else(|| module.teacher.clone()),
        }
    }
}
