//! Typed converters for the raw captures of a record.

use chrono::NaiveDateTime;

use crate::core::{Side, STATUS_SUCCESSFUL};
use crate::parser::diagnostics::SkipReason;

const MONTH_FIRST_FORMAT: &str = "%B %d, %Y %H:%M";

/// Parse an amount such as `1,02,450.00`, ignoring thousands separators.
pub fn parse_amount(field: &'static str, raw: &str) -> Result<f64, SkipReason> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SkipReason::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

pub fn parse_quantity(field: &'static str, raw: &str) -> Result<u64, SkipReason> {
    raw.parse::<u64>().map_err(|_| SkipReason::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

pub fn parse_side(raw: &str) -> Result<Side, SkipReason> {
    Side::from_marker(raw).ok_or_else(|| SkipReason::UnknownSide(raw.to_string()))
}

/// Reorder `DD Mon YYYY HH:MM` into `Mon DD, YYYY HH:MM`.
///
/// Only the first three letters of the month name are kept, so `Sept`,
/// `Sep` and `September` all read as September.
pub fn normalize_date(token: &str) -> Option<String> {
    let mut parts = token.split_whitespace();
    let day = parts.next()?;
    let month: String = parts.next()?.chars().take(3).collect();
    let year = parts.next()?;
    let time = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some(format!("{} {}, {} {}", month, day, year, time))
}

/// Parse the log date token into a timestamp. Month names may be full or abbreviated.
pub fn parse_datetime(token: &str) -> Result<NaiveDateTime, SkipReason> {
    let normalized =
        normalize_date(token).ok_or_else(|| SkipReason::InvalidDate(token.to_string()))?;
    NaiveDateTime::parse_from_str(&normalized, MONTH_FIRST_FORMAT)
        .map_err(|_| SkipReason::InvalidDate(token.to_string()))
}

/// A record is kept when it is marked Successful or when it was filled completely.
pub fn check_validity(status: Option<&str>, filled: u64, ordered: u64) -> Result<(), SkipReason> {
    if status == Some(STATUS_SUCCESSFUL) || filled == ordered {
        return Ok(());
    }
    Err(SkipReason::PartialFill {
        filled,
        ordered,
        status: status.map(str::to_string),
    })
}
