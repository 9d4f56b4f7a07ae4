// --- File: crates/rentify_inventory/src/availability.rs ---
use crate::models::{DateRange, Device};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Reads store date text as a calendar date, ignoring any time of day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times (the date in the value's own
/// offset) and naive `YYYY-MM-DDTHH:MM:SS[.fff]`.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.date_naive());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|date_time| date_time.date())
}

/// Decides whether `device` is free for the whole of `[query_start, query_end]`.
///
/// Callers guarantee `query_start <= query_end`. All bounds are inclusive.
/// A device without locations is always free; a located device without
/// dates, or with date text that does not parse, is never free.
pub fn is_available(device: &Device, query_start: NaiveDate, query_end: NaiveDate) -> bool {
    if device.location_ref_count == 0 {
        return true;
    }

    if device.start_date.is_none() && device.end_date.is_none() {
        return false;
    }

    let start = match device.start_date.as_deref().map(parse_calendar_date) {
        Some(None) => return false,
        Some(parsed) => parsed,
        None => None,
    };
    let end = match device.end_date.as_deref().map(parse_calendar_date) {
        Some(None) => return false,
        Some(parsed) => parsed,
        None => None,
    };

    match (start, end) {
        (Some(start), Some(end)) => !(query_start <= end && query_end >= start),
        (Some(start), None) => query_end < start,
        (None, Some(end)) => query_start > end,
        (None, None) => false,
    }
}

/// [`is_available`] over a validated range.
pub fn is_available_in(device: &Device, range: &DateRange) -> bool {
    is_available(device, range.start(), range.end())
}
