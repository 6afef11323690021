// Copyright (C) 2025 Intel Corporation
// SPDX-License-Identifier: MIT

//! Conversions of the board manufacturing date/time.
//!
//! The board area stores the manufacturing date/time as a number of minutes since
//! 1996-01-01 00:00 in 3 bytes, which covers dates up to 2027-11-24 20:15.

use crate::Error;
use crate::area::MAX_MFG_DATE_TIME;
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

/// Format of the date/time strings in the text configuration.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn epoch() -> Result<NaiveDateTime, Error> {
    NaiveDate::from_ymd_opt(1996, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(Error::InternalError)
}

/// Converts a date/time into a number of minutes since 1996-01-01 00:00.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ipmi_fru::date::minutes_from_datetime;
///
/// let date = NaiveDate::from_ymd_opt(2017, 5, 29).unwrap().and_hms_opt(0, 15, 0).unwrap();
/// assert_eq!(minutes_from_datetime(date).unwrap(), 0xabcdef);
/// ```
pub fn minutes_from_datetime(date: NaiveDateTime) -> Result<u32, Error> {
    if date.second() != 0 || date.nanosecond() != 0 {
        return Err(Error::DateTimeIncludesSeconds(date.to_string()));
    }

    let minutes = (date - epoch()?).num_minutes();
    u32::try_from(minutes)
        .ok()
        .filter(|minutes| *minutes <= MAX_MFG_DATE_TIME)
        .ok_or_else(|| Error::DateTimeOutOfRange(date.format(DATE_TIME_FORMAT).to_string()))
}

/// Parses a `YYYY-MM-DD HH:MM` string into a number of minutes since 1996-01-01 00:00.
pub fn minutes_from_str(stamp: &str) -> Result<u32, Error> {
    let date = NaiveDateTime::parse_from_str(stamp, DATE_TIME_FORMAT)
        .map_err(|_| Error::DateTimeBadFormat(stamp.into()))?;
    minutes_from_datetime(date)
}

/// Formats a number of minutes since 1996-01-01 00:00 as a `YYYY-MM-DD HH:MM` string.
pub fn minutes_to_string(minutes: u32) -> Result<String, Error> {
    if minutes > MAX_MFG_DATE_TIME {
        return Err(Error::DateTimeOutOfRange(format!("{minutes:#x} minutes")));
    }

    let date = epoch()? + Duration::minutes(minutes as i64);
    Ok(date.format(DATE_TIME_FORMAT).to_string())
}
