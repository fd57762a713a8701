// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock values and the text forms they travel in.
//!
//! | Form | Example | Parser |
//! |------|---------|--------|
//! | 24-hour time | `"14:30"` | [`ClockTime::parse`] |
//! | 12-hour time | `"2:30 PM"`, `"2:30pm"` | [`ClockTime::parse`] |
//! | long date | `"December 25, 2023"` | [`parse_long_date`] |
//! | short date | `"12-25-2023"` | [`parse_short_date`] |
//!
//! The 12/24-hour form is detected from the presence of an `am`/`pm`
//! marker (case-insensitive) and the result is a tagged [`ClockTime`], so
//! every string either parses into one variant or is rejected.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// English month names, indexed by `month - 1`.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ═══════════════════════════════════════════════════════════════════════════
// WallClock
// ═══════════════════════════════════════════════════════════════════════════

/// A timezone-naive local date and time, normalised at rest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WallClock {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl WallClock {
    /// Build a wall-clock value, rejecting impossible dates and times.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| Error::InvalidDate(format!("{year}-{month}-{day}")))?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| Error::InvalidTime(format!("{hour}:{minute:02}")))?;
        Ok(Self::from_naive(date.and_time(time)))
    }

    /// Drop seconds and below from a chrono value.
    #[inline]
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
        }
    }

    /// The equivalent chrono value.
    ///
    /// Fields are public, so a hand-built value may be out of range; that
    /// case is reported rather than wrapped.
    pub fn to_naive(&self) -> Result<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| Error::InvalidDate(self.short_date()))?;
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .ok_or_else(|| Error::InvalidTime(format!("{}:{:02}", self.hour, self.minute)))?;
        Ok(date.and_time(time))
    }

    /// Calendar date part.
    pub fn date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| Error::InvalidDate(self.short_date()))
    }

    /// `M-D-YYYY`, without zero padding.
    pub fn short_date(&self) -> String {
        format!("{}-{}-{}", self.month, self.day, self.year)
    }

    /// Time of day in the requested notation.
    pub fn clock_time(&self, use_24_hour: bool) -> ClockTime {
        let time = ClockTime::TwentyFourHour {
            hour: self.hour,
            minute: self.minute,
        };
        if use_24_hour {
            time
        } else {
            time.to_twelve_hour()
        }
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ClockTime
// ═══════════════════════════════════════════════════════════════════════════

/// Half of the day in 12-hour notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("AM"),
            Meridiem::Pm => f.write_str("PM"),
        }
    }
}

/// A time of day in the notation it was written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockTime {
    /// `hour` is `1..=12`.
    TwelveHour {
        hour: u32,
        minute: u32,
        meridiem: Meridiem,
    },
    /// `hour` is `0..=23`.
    TwentyFourHour { hour: u32, minute: u32 },
}

impl ClockTime {
    /// Parse `"H:MM"` or `"H:MM AM/PM"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tzline::{ClockTime, Meridiem};
    ///
    /// let t = ClockTime::parse("2:30 pm").unwrap();
    /// assert_eq!(t, ClockTime::TwelveHour { hour: 2, minute: 30, meridiem: Meridiem::Pm });
    /// assert_eq!(t.hour24(), 14);
    ///
    /// assert!(ClockTime::parse(":30").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.contains("am") || lower.contains("pm") {
            Self::parse_twelve_hour(input, &lower)
        } else {
            let (hour, minute) = split_hour_minute(input, trimmed)?;
            if hour > 23 {
                return Err(Error::InvalidTime(input.to_owned()));
            }
            Ok(ClockTime::TwentyFourHour { hour, minute })
        }
    }

    fn parse_twelve_hour(input: &str, lower: &str) -> Result<Self> {
        let meridiem = if lower.ends_with("am") {
            Meridiem::Am
        } else if lower.ends_with("pm") {
            Meridiem::Pm
        } else {
            return Err(Error::InvalidTime(input.to_owned()));
        };
        let body = lower[..lower.len() - 2].trim_end();
        let (hour, minute) = split_hour_minute(input, body)?;
        if !(1..=12).contains(&hour) {
            return Err(Error::InvalidTime(input.to_owned()));
        }
        Ok(ClockTime::TwelveHour {
            hour,
            minute,
            meridiem,
        })
    }

    /// Hour on the 24-hour dial, `0..=23`.
    pub fn hour24(&self) -> u32 {
        match *self {
            ClockTime::TwentyFourHour { hour, .. } => hour,
            ClockTime::TwelveHour {
                hour, meridiem, ..
            } => match meridiem {
                Meridiem::Am => hour % 12,
                Meridiem::Pm => hour % 12 + 12,
            },
        }
    }

    pub fn minute(&self) -> u32 {
        match *self {
            ClockTime::TwelveHour { minute, .. } | ClockTime::TwentyFourHour { minute, .. } => {
                minute
            }
        }
    }

    /// Same instant of the day in 12-hour notation.
    ///
    /// Hour 0 becomes 12 AM and hour 12 becomes 12 PM.
    pub fn to_twelve_hour(self) -> Self {
        let hour = self.hour24();
        ClockTime::TwelveHour {
            hour: ((hour + 11) % 12) + 1,
            minute: self.minute(),
            meridiem: if hour >= 12 { Meridiem::Pm } else { Meridiem::Am },
        }
    }

    /// Same instant of the day in 24-hour notation.
    pub fn to_twenty_four_hour(self) -> Self {
        ClockTime::TwentyFourHour {
            hour: self.hour24(),
            minute: self.minute(),
        }
    }

    pub fn is_twelve_hour(&self) -> bool {
        matches!(self, ClockTime::TwelveHour { .. })
    }

    /// The chrono time of day.
    pub fn to_naive(&self) -> Result<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour24(), self.minute(), 0)
            .ok_or_else(|| Error::InvalidTime(self.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockTime::TwelveHour {
                hour,
                minute,
                meridiem,
            } => write!(f, "{hour}:{minute:02} {meridiem}"),
            ClockTime::TwentyFourHour { hour, minute } => write!(f, "{hour}:{minute:02}"),
        }
    }
}

/// Split `"H:MM"`; both sides must be one or two ASCII digits.
fn split_hour_minute(input: &str, body: &str) -> Result<(u32, u32)> {
    let invalid = || Error::InvalidTime(input.to_owned());
    let (hour, minute) = body.split_once(':').ok_or_else(invalid)?;
    let hour = parse_digits(hour.trim(), 2).ok_or_else(invalid)?;
    let minute = parse_digits(minute.trim(), 2).ok_or_else(invalid)?;
    if minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}

/// Parse a run of at most `max_len` ASCII digits.
fn parse_digits(text: &str, max_len: usize) -> Option<u32> {
    if text.is_empty() || text.len() > max_len || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

// ═══════════════════════════════════════════════════════════════════════════
// Dates
// ═══════════════════════════════════════════════════════════════════════════

/// Month number (`1..=12`) for an English month name, ignoring case.
pub fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name))
        .map(|index| index as u32 + 1)
}

/// Parse `"Month D, YYYY"`, e.g. `"February 13, 2021"`.
pub fn parse_long_date(input: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidDate(input.to_owned());
    let (month_day, year) = input.trim().split_once(',').ok_or_else(invalid)?;
    let mut parts = month_day.split_whitespace();
    let (Some(month), Some(day), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let month = month_number(month).ok_or_else(|| Error::UnknownMonth(month.to_owned()))?;
    let day = parse_digits(day, 2).ok_or_else(invalid)?;
    let year: i32 = parse_digits(year.trim(), 4)
        .ok_or_else(invalid)?
        .try_into()
        .map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// `"December 25, 2023"`.
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        MONTHS[date.month0() as usize],
        date.day(),
        date.year()
    )
}

/// Parse `"M-D-YYYY"` (padding optional), the converter's output form.
pub fn parse_short_date(input: &str) -> Result<NaiveDate> {
    let invalid = || Error::InvalidDate(input.to_owned());
    let mut parts = input.trim().split('-');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    let month = parse_digits(month, 2).ok_or_else(invalid)?;
    let day = parse_digits(day, 2).ok_or_else(invalid)?;
    let year: i32 = parse_digits(year, 4)
        .ok_or_else(invalid)?
        .try_into()
        .map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// `M-D-YYYY`, without zero padding.
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.month(), date.day(), date.year())
}
