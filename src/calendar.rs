//! Month calendar rendering.
//!
//! The month is first laid out as a grid of week rows (Monday first) and
//! then printed cell by cell, so a highlighted day is marked in its own cell
//! rather than by searching the rendered text.
//!
//! ```text
//!          March 2025
//!  Mo  Tu  We  Th  Fr  Sa  Su
//!                       1   2
//!   3   4   5   6   7   8   9
//! [10] 11  12  13  14  15  16
//! ```

use chrono::{Datelike, Month, NaiveDate};

/// Each cell is a bracket column, two digit columns and a bracket column.
const CELL_WIDTH: usize = 4;
const LINE_WIDTH: usize = 7 * CELL_WIDTH;
const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// A month laid out as week rows of seven day cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<u32>; 7]>,
}

impl MonthGrid {
    /// Lay out `year`/`month`; `None` if the month does not exist.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let days = days_in_month(first)?;
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut col = first.weekday().num_days_from_monday() as usize;
        for day in 1..=days {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }
        Some(MonthGrid { year, month, weeks })
    }

    /// Row and column of `day`, if it belongs to this month.
    pub fn locate(&self, day: u32) -> Option<(usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter().position(|cell| *cell == Some(day)).map(|col| (row, col))
        })
    }

    /// Title such as `March 2025`.
    pub fn title(&self) -> String {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("?");
        format!("{name} {}", self.year)
    }

    /// Render as text, bracketing `highlight` if it is a day of this month.
    pub fn render(&self, highlight: Option<u32>) -> String {
        let target = highlight.and_then(|d| self.locate(d));

        let mut lines = Vec::with_capacity(self.weeks.len() + 2);
        lines.push(center(&self.title(), LINE_WIDTH));
        lines.push(WEEKDAYS.iter().map(|name| format!(" {name} ")).collect());
        for (row, week) in self.weeks.iter().enumerate() {
            let line: String = week
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    None => " ".repeat(CELL_WIDTH),
                    Some(day) => cell_text(*day, target == Some((row, col))),
                })
                .collect();
            lines.push(line);
        }

        let mut out = String::new();
        for line in lines {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Render the calendar for `year`/`month`, optionally bracketing one day.
///
/// Returns `None` for a month that does not exist.
pub fn render_month(year: i32, month: u32, highlight_day: Option<u32>) -> Option<String> {
    MonthGrid::new(year, month).map(|grid| grid.render(highlight_day))
}

fn days_in_month(first: NaiveDate) -> Option<u32> {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// ` 5 `, ` 10 `, or bracketed ` [5]`, `[10]` when marked.
fn cell_text(day: u32, marked: bool) -> String {
    if marked {
        format!("{:>4}", format!("[{day}]"))
    } else {
        format!(" {day:>2} ")
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    format!("{}{}", " ".repeat(left), text)
}
