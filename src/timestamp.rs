//! Epoch timestamp parsing and calendar-date conversion.
//!
//! Publication timestamps arrive as strings holding base-10 Unix epoch
//! seconds. Conversion to a calendar date uses the process-local time
//! zone by default; the zone-parameterized variants exist so tests can
//! pin a fixed offset.

use chrono::{LocalResult, TimeZone};

use crate::error::CatalogError;

/// Parse a raw publication timestamp into epoch seconds.
pub fn parse_epoch(raw: &str) -> Result<i64, CatalogError> {
    raw.parse::<i64>().map_err(|_| CatalogError::InvalidTimestamp {
        value: raw.to_string(),
    })
}

/// Convert epoch seconds to a `YYYY-MM-DD` date in the given zone.
pub fn epoch_to_date_in<Tz: TimeZone>(secs: i64, tz: &Tz) -> Result<String, CatalogError> {
    match tz.timestamp_opt(secs, 0) {
        LocalResult::Single(dt) => Ok(dt.date_naive().format("%Y-%m-%d").to_string()),
        // Out of chrono's calendar range: same corruption class as non-numeric.
        _ => Err(CatalogError::InvalidTimestamp {
            value: secs.to_string(),
        }),
    }
}
