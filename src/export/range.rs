use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse a `--range` expression into inclusive date bounds.
///
/// Accepts a single period (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) or a
/// `start:end` pair of periods; each side expands to its first/last day.
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let (start, _) = parse_period(start_raw.trim())?;
        let (_, end) = parse_period(end_raw.trim())?;

        if end < start {
            return Err(AppError::InvalidDate(format!(
                "range end before start: {}",
                r
            )));
        }

        Ok((start, end))
    } else {
        parse_period(r.trim())
    }
}

/// Expand one period expression to its (first day, last day).
fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if p.len() == 7
        && let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d")
    {
        return Ok((first, last_day_of_month(first)));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(AppError::InvalidDate(format!("unsupported period: {}", p)))
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };

    // First of the next month always exists, as does the day before it.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(first)
}
