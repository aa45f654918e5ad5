use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn month_last_day(year: i32, month: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    next.pred_opt().or(Some(first))
}

/// Parse a single period expression into inclusive date bounds.
///
/// The shape is matched on length first: chrono would happily accept
/// `2026-9`, which the CLI grammar does not.
///
/// Supports:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
fn single_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(p.to_string());

    match p.len() {
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }

        // YYYY-MM
        7 => {
            if p.as_bytes()[4] != b'-' {
                return Err(invalid());
            }
            let year: i32 = p[0..4].parse().map_err(|_| invalid())?;
            let month: u32 = p[5..7].parse().map_err(|_| invalid())?;

            let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
            let last = month_last_day(year, month).ok_or_else(invalid)?;
            Ok((first, last))
        }

        // YYYY
        4 => {
            let year: i32 = p.parse().map_err(|_| invalid())?;

            let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }

        _ => Err(invalid()),
    }
}

/// Parse a period or a `start:end` range of equal granularity into
/// inclusive date bounds.
///
/// Supports:
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `YYYY:YYYY`, `YYYY-MM:YYYY-MM`, `YYYY-MM-DD:YYYY-MM-DD`
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{} (start and end must have the same format)",
                p
            )));
        }

        let (from, _) = single_bounds(start)?;
        let (_, to) = single_bounds(end)?;

        if to < from {
            return Err(AppError::InvalidPeriod(format!(
                "{} (end is before start)",
                p
            )));
        }

        return Ok((from, to));
    }

    single_bounds(p.trim())
}

/// Bounds for the current month, the default stats window.
pub fn current_month_bounds() -> AppResult<(NaiveDate, NaiveDate)> {
    let t = today();
    let first = NaiveDate::from_ymd_opt(t.year(), t.month(), 1)
        .ok_or_else(|| AppError::InvalidDate(t.to_string()))?;
    let last = month_last_day(t.year(), t.month())
        .ok_or_else(|| AppError::InvalidDate(t.to_string()))?;
    Ok((first, last))
}
