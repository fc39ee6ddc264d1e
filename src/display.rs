//! Terminal rendering of an age result.
//!
//! Renderers are stateless: they take the birth date and the computed
//! `AgeResult` and return text, nothing is retained between submissions.

use crate::age::AgeResult;
use chrono::{Datelike, NaiveDate};

const BOX_WIDTH: usize = 9;

/// Long date label, e.g. "June 15th, 2000".
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Heading of the next-birthday panel.
pub fn birthday_heading(age: &AgeResult) -> &'static str {
    if age.next_birthday.is_today {
        "It's your Birthday!"
    } else {
        "Next Birthday"
    }
}

/// Body of the next-birthday panel.
pub fn birthday_countdown(age: &AgeResult) -> String {
    let next = &age.next_birthday;
    if next.is_today {
        "Happy Birthday! 🎉".to_string()
    } else {
        format!("{} Months {} Days", next.months, next.days)
    }
}

pub const COUNTDOWN_CAPTION: &str = "Until your special day";

/// Renders the result card shown after a successful submission.
pub fn render_text(birthdate: NaiveDate, age: &AgeResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Date of Birth: {}\n\n", long_date(birthdate)));

    for label in ["Years", "Months", "Days"] {
        out.push_str(&format!("{label:^BOX_WIDTH$}"));
    }
    out.push('\n');
    for value in [age.years, age.months, age.days] {
        out.push_str(&format!("{value:^BOX_WIDTH$}"));
    }
    out.push_str("\n\n");

    out.push_str(birthday_heading(age));
    out.push('\n');
    out.push_str(&birthday_countdown(age));
    out.push('\n');
    if !age.next_birthday.is_today {
        out.push_str(&format!(
            "{COUNTDOWN_CAPTION} ({})\n",
            long_date(age.next_birthday.date)
        ));
    }

    out
}
