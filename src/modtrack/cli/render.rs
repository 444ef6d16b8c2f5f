use chrono::{Local, NaiveDateTime};
use colored::Colorize;
use modtrack::commands::{CmdMessage, CmdResult, MessageLevel};
use modtrack::config::TrackerConfig;
use modtrack::model::Module;
use modtrack::view::DisplayModule;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const TIME_WIDTH: usize = 25;
const VENUE_WIDTH: usize = 20;

pub(super) fn print_result(result: &CmdResult, config: &TrackerConfig) {
    print_messages(&result.messages);
    if !result.listed_modules.is_empty() {
        print_modules(&result.listed_modules, config);
    } else {
        let now = Local::now().naive_local();
        for line in affected_lines(&result.affected_modules, config.show_countdown, now) {
            println!("{}", line.dimmed());
        }
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_modules(modules: &[DisplayModule], config: &TrackerConfig) {
    if modules.is_empty() {
        println!("No modules tracked.");
        return;
    }

    let now = Local::now().naive_local();
    for dm in modules {
        let idx = format!("{:>3}. ", dm.index);
        println!("{}{}", idx.yellow(), module_row(&dm.module));

        if let Some(line) = deadline_line(&dm.module, config.show_countdown, now) {
            println!("     {}", line.dimmed());
        }
    }
}

/// Rows for modules a command added, edited or deleted, without indexes.
fn affected_lines(modules: &[Module], show_countdown: bool, now: NaiveDateTime) -> Vec<String> {
    let mut lines = Vec::new();
    for module in modules {
        lines.push(format!("     {}", module_row(module)));
        if let Some(line) = deadline_line(module, show_countdown, now) {
            lines.push(format!("     {}", line));
        }
    }
    lines
}

/// Name, time, venue and tags in fixed-width columns.
fn module_row(module: &Module) -> String {
    let tags: String = module.tags().iter().map(|t| format!("[{}]", t)).collect();
    format!(
        "{}{}{}{}",
        pad_to_width(&module.name().to_string(), NAME_WIDTH),
        pad_to_width(&module.time_slot().display_long(), TIME_WIDTH),
        pad_to_width(&module.venue().to_string(), VENUE_WIDTH),
        tags
    )
    .trim_end()
    .to_string()
}

fn deadline_line(module: &Module, show_countdown: bool, now: NaiveDateTime) -> Option<String> {
    let due = module.deadline().date_time()?;
    let mut line = format!("Deadline: {}", module.deadline().display_long());
    if show_countdown {
        line.push_str(&format!(" ({})", countdown(due, now)));
    }
    Some(line)
}

fn countdown(due: NaiveDateTime, now: NaiveDateTime) -> String {
    let formatter = Formatter::new();
    let delta = due.signed_duration_since(now);
    match delta.to_std() {
        Ok(ahead) => format!("due in {}", strip_ago(&formatter.convert(ahead))),
        Err(_) => {
            let behind = (-delta).to_std().unwrap_or_default();
            format!("overdue by {}", strip_ago(&formatter.convert(behind)))
        }
    }
}

fn strip_ago(s: &str) -> &str {
    s.strip_suffix(" ago").unwrap_or(s)
}

/// Truncates with an ellipsis or pads with spaces to exactly `width` columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width.saturating_sub(1));
    let used = out.width();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use modtrack::fields::{Deadline, FieldValue, Name, Resource, Tag, TimeSlot, Venue};

    fn module(name: &str, time_slot: &str, venue: &str) -> Module {
        Module::new(
            Name::parse(name).unwrap(),
            Resource::parse("https://nusmods.com").unwrap(),
            TimeSlot::parse(time_slot).unwrap(),
            Venue::parse(venue).unwrap(),
        )
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_pads_and_truncates_by_display_width() {
        assert_eq!(pad_to_width("CS2103T", 10), "CS2103T   ");
        let long = pad_to_width("Software Engineering Project", 10);
        assert_eq!(long.width(), 10);
        assert!(long.contains('…'));
        assert_eq!(pad_to_width("日本語", 8).width(), 8);
    }

    #[test]
    fn test_row_has_name_venue_and_tags() {
        let m = module("CS3219", "300123 11:00", "COM1-0204")
            .with_tags(vec![Tag::parse("Lecture").unwrap()]);
        let row = module_row(&m);
        assert!(row.starts_with("CS3219 "));
        assert!(row.contains("Mon 30 Jan 2023, 11:00"));
        assert!(row.ends_with("[Lecture]"));
    }

    #[test]
    fn test_affected_modules_get_row_and_deadline() {
        let with_deadline = module("CS2101", "040423 10:00", "COM1")
            .with_deadline(Deadline::parse("010423 23:00").unwrap());
        let plain = module("CS2106", "290323 12:00", "COM1");

        let lines = affected_lines(&[with_deadline, plain], false, at(2023, 3, 1, 0));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].trim_start().starts_with("CS2101"));
        assert_eq!(lines[1].trim_start(), "Deadline: Sat 01 Apr 2023, 23:00");
        assert!(lines[2].trim_start().starts_with("CS2106"));
        assert!(affected_lines(&[], true, at(2023, 3, 1, 0)).is_empty());
    }

    #[test]
    fn test_no_deadline_no_line() {
        let m = module("CS2106", "290323 12:00", "COM1");
        assert!(deadline_line(&m, true, at(2023, 3, 1, 0)).is_none());
    }

    #[test]
    fn test_countdown_before_and_after() {
        let m = module("CS2101", "040423 10:00", "COM1")
            .with_deadline(Deadline::parse("010423 23:00").unwrap());

        let early = deadline_line(&m, true, at(2023, 3, 29, 23)).unwrap();
        assert!(early.starts_with("Deadline: Sat 01 Apr 2023, 23:00"));
        assert!(early.contains("due in 3 days"), "{early}");

        let late = deadline_line(&m, true, at(2023, 4, 2, 23)).unwrap();
        assert!(late.contains("overdue by 1 day"), "{late}");

        let plain = deadline_line(&m, false, at(2023, 4, 2, 23)).unwrap();
        assert!(!plain.contains('('));
    }
}
