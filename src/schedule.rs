//! Calendar-day generation and the buffered day-window selection.
//!
//! The feed regularly omits weekends, holidays, and in-service days. To keep
//! the displayed window densely populated, the selector generates more
//! candidate days than requested (the buffer), attaches extracted menus by
//! calendar-date equality, and keeps the first N days that actually have a
//! menu. `buffer_days = 0` preserves the strict-calendar behavior: the first
//! N consecutive days, empty or not.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::extract::{ExtractedDayMenu, MealType};

/// A generated candidate day, pre-merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// "Today", "Tomorrow", or the weekday name.
    pub label: String,
}

/// One day of the final schedule.
///
/// Meal fields are omitted from serialized output entirely when no sentence
/// was extracted for that meal, so consumers can tell "no data" from "empty
/// menu text".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    /// Unpadded `M-D-YYYY`, matching the feed's own date style.
    pub date: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch: Option<String>,
}

/// Format a date the way the menu API writes dates: unpadded `M-D-YYYY`.
pub fn format_menu_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.month(), date.day(), date.year())
}

/// Best-effort parse of an upstream date string.
///
/// The feed normally writes unpadded `M-D-YYYY` but is not contractually
/// bound to; slash and ISO forms are accepted too. Unparseable input is
/// `None` and simply never matches a calendar day.
pub fn parse_menu_date(raw: &str) -> Option<NaiveDate> {
    const FORMATS: &[&str] = &["%m-%d-%Y", "%m/%d/%Y", "%Y-%m-%d"];

    let trimmed = raw.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Generate `count` consecutive calendar days starting at `today`, labeled
/// "Today", "Tomorrow", then weekday names.
pub fn upcoming_relative_dates(today: NaiveDate, count: usize) -> Vec<CalendarDay> {
    (0..count)
        .map(|offset| {
            let date = today + Duration::days(offset as i64);
            let label = match offset {
                0 => "Today".to_string(),
                1 => "Tomorrow".to_string(),
                _ => date.format("%A").to_string(),
            };
            CalendarDay { date, label }
        })
        .collect()
}

/// Merge extracted menus with a generated calendar and pick the day window.
///
/// Generates `days_to_display + buffer_days` candidates (exactly
/// `days_to_display` when the buffer is zero), attaches at most one
/// breakfast and one lunch sentence per day by date equality, then:
/// - buffer > 0: keeps days with at least one non-blank sentence and
///   returns the first `days_to_display` of them (fewer if the feed cannot
///   supply that many);
/// - buffer = 0: returns the first `days_to_display` candidates verbatim.
pub fn build_schedule(
    menus: &[Vec<ExtractedDayMenu>],
    today: NaiveDate,
    days_to_display: usize,
    buffer_days: usize,
) -> Vec<ScheduleDay> {
    let days_to_generate = if buffer_days > 0 {
        days_to_display + buffer_days
    } else {
        days_to_display
    };

    let candidates = upcoming_relative_dates(today, days_to_generate);

    let all_days: Vec<ScheduleDay> = candidates
        .into_iter()
        .map(|day| {
            let mut breakfast: Option<String> = None;
            let mut lunch: Option<String> = None;

            for session in menus {
                let matched = session
                    .iter()
                    .find(|menu| parse_menu_date(&menu.date) == Some(day.date));
                if let Some(menu) = matched {
                    match menu.meal {
                        MealType::Breakfast => breakfast = Some(menu.sentence.clone()),
                        MealType::Lunch => lunch = Some(menu.sentence.clone()),
                    }
                }
            }

            ScheduleDay {
                date: format_menu_date(day.date),
                label: day.label,
                breakfast,
                lunch,
            }
        })
        .collect();

    if buffer_days > 0 {
        all_days
            .into_iter()
            .filter(has_menu_content)
            .take(days_to_display)
            .collect()
    } else {
        all_days.into_iter().take(days_to_display).collect()
    }
}

/// A day qualifies for the buffered window when either sentence has content
/// beyond whitespace.
fn has_menu_content(day: &ScheduleDay) -> bool {
    let non_blank = |meal: &Option<String>| {
        meal.as_deref()
            .map(|sentence| !sentence.trim().is_empty())
            .unwrap_or(false)
    };
    non_blank(&day.breakfast) || non_blank(&day.lunch)
}
