//! Chronological ordering and token formatting for task lists.
//!
//! Dates are displayed as `"Mo, 04.05.2025"` (two-letter German weekday,
//! comma, `DD.MM.YYYY`) and times as `"HH:MM"`. Everything here is total:
//! unparseable input falls back to a sentinel, a pass-through or `None`,
//! never an error, so a list render survives malformed historical rows.

use std::cmp::Ordering;

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::model::Task;

/// Sort key for anything that does not parse: sorts after every real date
/// or time.
pub const SORT_LAST: u32 = u32::MAX;

/// Indexed by days-from-Sunday.
const WEEKDAYS: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[A-Za-z]{2}, )?(\d{2})\.(\d{2})\.(\d{4})$").unwrap());
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());

/// `"Mo, 04.05.2025"` or `"04.05.2025"` -> `20250504`. Anything else,
/// including the empty string, sorts last.
pub fn date_sort_key(date: &str) -> u32 {
    match DATE_RE.captures(date) {
        Some(caps) => {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let year: u32 = caps[3].parse().unwrap_or(0);
            year * 10_000 + month * 100 + day
        }
        None => SORT_LAST,
    }
}

/// `"9:30"` or `"09:30"` -> `930`. Anything else sorts last.
pub fn time_sort_key(time: &str) -> u32 {
    match TIME_RE.captures(time) {
        Some(caps) => {
            let hours: u32 = caps[1].parse().unwrap_or(0);
            let minutes: u32 = caps[2].parse().unwrap_or(0);
            hours * 100 + minutes
        }
        None => SORT_LAST,
    }
}

/// Total order over tasks: empty tasks strictly last, then date ascending,
/// ties broken by time ascending. Derived purely from the stored strings.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => date_sort_key(&a.date)
            .cmp(&date_sort_key(&b.date))
            .then_with(|| time_sort_key(&a.time).cmp(&time_sort_key(&b.time))),
    }
}

/// Canonicalize a compact digit-only date token:
/// `"04"` -> day in the current month, `"0405"` -> day and month in the
/// current year, `"040525"` -> `"So, 04.05.2025"` (year is `2000 + YY`).
/// Anything else, including digit strings naming an impossible date,
/// passes through unchanged.
pub fn format_date_token(input: &str) -> String {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return input.to_string();
    }

    let today = Local::now().date_naive();
    let (day, month, year) = match input.len() {
        2 => (
            input.to_string(),
            format!("{:02}", today.month()),
            today.year(),
        ),
        4 => (input[..2].to_string(), input[2..4].to_string(), today.year()),
        6 => {
            let yy: i32 = input[4..6].parse().unwrap_or(0);
            (input[..2].to_string(), input[2..4].to_string(), 2000 + yy)
        }
        _ => return input.to_string(),
    };

    let canonical = format!("{}.{}.{}", day, month, year);
    let weekday = derive_weekday(&canonical);
    if weekday.is_empty() {
        return input.to_string();
    }

    format!("{}, {}", weekday, canonical)
}

/// `"08"` -> `"08:00"`, `"0830"` -> `"08:30"`, everything else unchanged.
pub fn format_time_token(input: &str) -> String {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return input.to_string();
    }

    match input.len() {
        2 => format!("{}:00", input),
        4 => format!("{}:{}", &input[..2], &input[2..4]),
        _ => input.to_string(),
    }
}

/// Two-letter German weekday abbreviation for a bare `DD.MM.YYYY` string,
/// `""` if the date does not parse.
pub fn derive_weekday(date: &str) -> &'static str {
    match NaiveDate::parse_from_str(date, "%d.%m.%Y") {
        Ok(d) => WEEKDAYS[d.weekday().num_days_from_sunday() as usize],
        Err(_) => "",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    Year,
    Month,
}

/// Whether a separator belongs between `current` and `next` in a
/// chronologically sorted list. Year boundaries win over month boundaries;
/// month boundaries are only drawn inside the real current year. Dates are
/// parsed field-wise (weekday prefix tolerated), not sliced by offset.
pub fn boundary_marker(current: &Task, next: Option<&Task>) -> Option<Boundary> {
    let next = next?;
    let cur = parse_display_date(&current.date)?;
    let nxt = parse_display_date(&next.date)?;

    if cur.year() != nxt.year() {
        return Some(Boundary::Year);
    }
    if cur.month() != nxt.month() && cur.year() == Local::now().year() {
        return Some(Boundary::Month);
    }
    None
}

fn parse_display_date(date: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(date)?;
    NaiveDate::from_ymd_opt(
        caps[3].parse().ok()?,
        caps[2].parse().ok()?,
        caps[1].parse().ok()?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn task(date: &str, time: &str, text: &str) -> Task {
        Task {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: date.to_string(),
            time: time.to_string(),
            text: text.to_string(),
            is_done: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn date_sort_key_accepts_both_display_forms() {
        assert_eq!(date_sort_key("So, 04.05.2025"), 20250504);
        assert_eq!(date_sort_key("04.05.2025"), 20250504);
        assert_eq!(date_sort_key("31.12.2024"), 20241231);
    }

    #[test]
    fn date_sort_key_falls_back_to_sentinel() {
        assert_eq!(date_sort_key(""), SORT_LAST);
        assert_eq!(date_sort_key("sometime next week"), SORT_LAST);
        assert_eq!(date_sort_key("4.5.2025"), SORT_LAST);
    }

    #[test]
    fn time_sort_key_pads_single_digit_hours() {
        assert_eq!(time_sort_key("9:30"), 930);
        assert_eq!(time_sort_key("09:30"), 930);
        assert_eq!(time_sort_key("23:59"), 2359);
        assert_eq!(time_sort_key(""), SORT_LAST);
        assert_eq!(time_sort_key("morning"), SORT_LAST);
    }

    #[test]
    fn empty_tasks_sort_strictly_last() {
        let empty = task("", "", "");
        let undated = task("", "", "call the dentist");
        let dated = task("Mo, 05.05.2025", "", "x");

        assert_eq!(compare_tasks(&empty, &dated), Ordering::Greater);
        assert_eq!(compare_tasks(&dated, &empty), Ordering::Less);
        assert_eq!(compare_tasks(&empty, &task("", "", "")), Ordering::Equal);
        // a task with only text is not empty, but its date does not parse,
        // so it still lands after every dated task
        assert_eq!(compare_tasks(&undated, &dated), Ordering::Greater);
        assert_eq!(compare_tasks(&undated, &empty), Ordering::Less);
    }

    #[test]
    fn sorts_by_date_then_time() {
        let mut tasks = vec![
            task("", "", ""),
            task("Di, 06.05.2025", "08:00", "b"),
            task("Mo, 05.05.2025", "14:00", "a2"),
            task("", "", "no date at all"),
            task("Mo, 05.05.2025", "09:00", "a1"),
            task("Fr, 02.01.2026", "", "c"),
        ];
        tasks.sort_by(compare_tasks);

        let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a1", "a2", "b", "c", "no date at all", ""]);
    }

    #[test]
    fn compare_is_a_total_order() {
        let a = task("Mo, 05.05.2025", "09:00", "a");
        let b = task("Mo, 05.05.2025", "14:00", "b");
        let c = task("Di, 06.05.2025", "08:00", "c");

        assert_eq!(compare_tasks(&a, &a), Ordering::Equal);
        assert_eq!(compare_tasks(&a, &b), compare_tasks(&b, &a).reverse());
        assert_eq!(compare_tasks(&a, &b), Ordering::Less);
        assert_eq!(compare_tasks(&b, &c), Ordering::Less);
        assert_eq!(compare_tasks(&a, &c), Ordering::Less);
    }

    #[test]
    fn full_date_token_round_trips() {
        let formatted = format_date_token("040525");
        assert_eq!(formatted, "So, 04.05.2025");
        assert_eq!(derive_weekday("04.05.2025"), "So");
        assert_eq!(date_sort_key(&formatted), 20250504);
    }

    #[test]
    fn short_date_tokens_default_to_current_month_and_year() {
        let today = Local::now().date_naive();

        let formatted = format_date_token("04");
        let expected_tail = format!("04.{:02}.{}", today.month(), today.year());
        assert!(formatted.ends_with(&expected_tail), "got {}", formatted);
        assert_eq!(
            date_sort_key(&formatted),
            today.year() as u32 * 10_000 + today.month() * 100 + 4
        );

        let formatted = format_date_token("0403");
        assert!(formatted.ends_with(&format!("04.03.{}", today.year())));
    }

    #[test]
    fn unmatched_date_tokens_pass_through() {
        assert_eq!(format_date_token(""), "");
        assert_eq!(format_date_token("4"), "4");
        assert_eq!(format_date_token("04052"), "04052");
        assert_eq!(format_date_token("Mo, 04.05.2025"), "Mo, 04.05.2025");
        // six digits but not a real date
        assert_eq!(format_date_token("320525"), "320525");
    }

    #[test]
    fn time_tokens_format_or_pass_through() {
        assert_eq!(format_time_token("08"), "08:00");
        assert_eq!(format_time_token("0830"), "08:30");
        assert_eq!(format_time_token("830"), "830");
        assert_eq!(format_time_token("08:30"), "08:30");
        assert_eq!(format_time_token(""), "");
    }

    #[test]
    fn derive_weekday_handles_bad_input() {
        assert_eq!(derive_weekday("01.01.2025"), "Mi");
        assert_eq!(derive_weekday("31.02.2025"), "");
        assert_eq!(derive_weekday(""), "");
    }

    #[test]
    fn year_boundary_wins() {
        let a = task("Di, 31.12.2024", "", "x");
        let b = task("Mi, 01.01.2025", "", "y");
        assert_eq!(boundary_marker(&a, Some(&b)), Some(Boundary::Year));
    }

    #[test]
    fn month_boundary_only_in_current_year() {
        let year = Local::now().year();
        let a = task(&format!("30.04.{}", year), "", "x");
        let b = task(&format!("01.05.{}", year), "", "y");
        assert_eq!(boundary_marker(&a, Some(&b)), Some(Boundary::Month));

        // same month boundary in a past year draws nothing
        let a = task("30.04.2020", "", "x");
        let b = task("01.05.2020", "", "y");
        assert_eq!(boundary_marker(&a, Some(&b)), None);
    }

    #[test]
    fn no_marker_without_next_or_dates() {
        let dated = task("Mo, 05.05.2025", "", "x");
        assert_eq!(boundary_marker(&dated, None), None);
        assert_eq!(boundary_marker(&dated, Some(&task("", "", "y"))), None);
        assert_eq!(boundary_marker(&task("", "", "x"), Some(&dated)), None);
        assert_eq!(
            boundary_marker(&dated, Some(&task("Di, 06.05.2025", "", "y"))),
            None
        );
    }
}
