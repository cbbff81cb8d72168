//! Date range expressions used by `list --range` and `export --range`.
//!
//! Supported forms:
//! - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
//! - `start:end` where both sides use the same form

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }

    /// Parse a range expression; `None` or `"all"` means no bound.
    pub fn parse_optional(expr: Option<&str>) -> AppResult<Option<Self>> {
        match expr.map(str::trim) {
            None => Ok(None),
            Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
            Some(r) => Self::parse(r).map(Some),
        }
    }

    pub fn parse(expr: &str) -> AppResult<Self> {
        let expr = expr.trim();

        let (start, end) = match expr.split_once(':') {
            Some((s, e)) => {
                let (s, e) = (s.trim(), e.trim());
                if s.len() != e.len() {
                    return Err(invalid(expr, "start and end must have the same format"));
                }
                (period_bounds(s)?.0, period_bounds(e)?.1)
            }
            None => period_bounds(expr)?,
        };

        if start > end {
            return Err(invalid(expr, "start is after end"));
        }

        Ok(Self { start, end })
    }
}

fn invalid(expr: &str, why: &str) -> AppError {
    AppError::InvalidRange(format!("{expr}: {why}"))
}

/// First and last day covered by a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(p, "invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(p, "invalid year"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(p, "invalid year"))?;
            Ok((d1, d2))
        }
        7 => {
            let (ys, ms) = p.split_once('-').ok_or_else(|| invalid(p, "expected YYYY-MM"))?;
            let y: i32 = ys.parse().map_err(|_| invalid(p, "invalid year"))?;
            let m: u32 = ms.parse().map_err(|_| invalid(p, "invalid month"))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid(p, "invalid month"))?;
            let d2 = month_last_day(y, m).ok_or_else(|| invalid(p, "invalid month"))?;
            Ok((d1, d2))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid(p, "invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid(p, "unsupported format")),
    }
}
