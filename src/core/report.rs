//! Turns a week report into display lines and lays them out on pages.

use crate::core::weeks::Report;
use crate::models::WorkEntry;
use crate::utils::date::{format_long_date, weekday_name};
use crate::utils::time::format_clock_time;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Week,
    Entry,
}

/// A rendered line plus what it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
    pub entry_id: Option<i64>,
}

pub struct ReportRenderer;

impl ReportRenderer {
    pub fn header(employee_label: &str) -> String {
        format!("Hours for Employee: {}", employee_label)
    }

    pub fn week_heading(week_start: NaiveDate) -> String {
        format!("Week of {}", format_long_date(week_start))
    }

    /// `{weekday}, {long date}: Clock-In: {time}, Clock-Out: {time | N/A}`
    pub fn entry_line(entry: &WorkEntry) -> String {
        let out = entry
            .time_out
            .map(format_clock_time)
            .unwrap_or_else(|| "N/A".to_string());

        format!(
            "{}, {}: Clock-In: {}, Clock-Out: {}",
            weekday_name(entry.date),
            format_long_date(entry.date),
            format_clock_time(entry.time_in),
            out
        )
    }

    /// Header, then per bucket one heading and one line per entry.
    pub fn render_lines(report: &Report, employee_label: &str) -> Vec<ReportLine> {
        let mut lines = Vec::with_capacity(1 + report.buckets.len() + report.entry_count());

        lines.push(ReportLine {
            kind: LineKind::Header,
            text: Self::header(employee_label),
            entry_id: None,
        });

        for bucket in &report.buckets {
            lines.push(ReportLine {
                kind: LineKind::Week,
                text: Self::week_heading(bucket.week_start),
                entry_id: None,
            });

            for entry in &bucket.entries {
                lines.push(ReportLine {
                    kind: LineKind::Entry,
                    text: Self::entry_line(entry),
                    entry_id: Some(entry.id),
                });
            }
        }

        lines
    }

    pub fn render(report: &Report, employee_label: &str) -> Vec<String> {
        Self::render_lines(report, employee_label)
            .into_iter()
            .map(|l| l.text)
            .collect()
    }

    /// Place lines top to bottom, `line_height` apart, starting a new page
    /// when the next line would fall below the bottom margin. Text is never
    /// altered or reordered.
    pub fn layout(lines: &[String], spec: &PageSpec) -> Vec<Page> {
        let per_page = spec.lines_per_page();
        let top = spec.height - spec.margin_top;

        lines
            .chunks(per_page)
            .enumerate()
            .map(|(i, chunk)| Page {
                number: i + 1,
                lines: chunk
                    .iter()
                    .enumerate()
                    .map(|(row, text)| PlacedLine {
                        x: spec.margin_left,
                        y: top - row as f32 * spec.line_height,
                        text: text.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Page geometry in PDF points (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpec {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub line_height: f32,
}

impl Default for PageSpec {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            margin_top: 60.0,
            margin_bottom: 60.0,
            margin_left: 50.0,
            line_height: 16.0,
        }
    }
}

impl PageSpec {
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// How many lines fit between the margins; always at least one.
    pub fn lines_per_page(&self) -> usize {
        let usable = self.height - self.margin_top - self.margin_bottom;
        if self.line_height <= 0.0 || usable < 0.0 {
            return 1;
        }
        (usable / self.line_height).floor() as usize + 1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: usize,
    pub lines: Vec<PlacedLine>,
}
