// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock conversion between IANA timezones.
//!
//! The conversion routes through an absolute instant:
//!
//! ```text
//! (date, time) in source zone → DateTime<Tz> → wall clock in target zone
//! ```
//!
//! Timezone rules come from the compiled IANA database in `chrono-tz`, so
//! DST offsets in force on the reference date are applied automatically.

use crate::clock::{format_short_date, parse_long_date, ClockTime, WallClock};
use crate::error::{Error, Result};
use chrono::{MappedLocalTime, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Resolve an IANA identifier such as `"America/Port-au-Prince"`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| Error::UnknownTimezone(name.to_owned()))
}

/// Re-project a wall-clock value from `source` into `target`.
///
/// A local time repeated by a DST fold resolves to its earlier instant. A
/// local time skipped by a DST gap has no instant and is an error.
pub fn convert_wall_clock(local: NaiveDateTime, source: &Tz, target: &Tz) -> Result<NaiveDateTime> {
    let instant = match source.from_local_datetime(&local) {
        MappedLocalTime::Single(instant) => instant,
        MappedLocalTime::Ambiguous(earliest, latest) => {
            warn!(
                "{local} is ambiguous in {}: using {earliest} rather than {latest}",
                source.name()
            );
            earliest
        }
        MappedLocalTime::None => {
            return Err(Error::NonexistentLocalTime {
                local,
                timezone: source.name().to_owned(),
            })
        }
    };
    Ok(instant.with_timezone(target).naive_local())
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeSpec
// ═══════════════════════════════════════════════════════════════════════════

/// Validated converter input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimeSpec {
    pub reference_date: NaiveDate,
    pub reference_time: ClockTime,
    pub source: Tz,
    pub target: Tz,
}

impl TimeSpec {
    /// Parse the picker strings.
    ///
    /// * `local_time` - `"H:MM"` or `"H:MM AM/PM"`
    /// * `local_date` - `"Month D, YYYY"`
    pub fn parse(
        source_timezone: &str,
        local_time: &str,
        local_date: &str,
        target_timezone: &str,
    ) -> Result<Self> {
        Ok(Self {
            reference_date: parse_long_date(local_date)?,
            reference_time: ClockTime::parse(local_time)?,
            source: parse_timezone(source_timezone)?,
            target: parse_timezone(target_timezone)?,
        })
    }

    /// The reference wall clock in the source zone.
    pub fn local(&self) -> Result<NaiveDateTime> {
        Ok(self.reference_date.and_time(self.reference_time.to_naive()?))
    }

    /// Convert into the target zone.
    pub fn convert(&self, use_24_hour: bool) -> Result<ConversionResult> {
        let local = self.local()?;
        let converted = convert_wall_clock(local, &self.source, &self.target)?;
        let result = ConversionResult::new(WallClock::from_naive(converted), use_24_hour);
        debug!(
            "{local} {} -> {} {} ({})",
            self.source.name(),
            result.date,
            result.time,
            self.target.name()
        );
        Ok(result)
    }

    /// Source and target swapped.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            ..*self
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ConversionResult
// ═══════════════════════════════════════════════════════════════════════════

/// Converted date and time, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionResult {
    /// `M-D-YYYY`, unpadded.
    pub date: String,
    /// `H:MM` (24-hour) or `H:MM AM/PM`.
    pub time: String,
    /// The converted wall clock, unformatted.
    pub wall_clock: WallClock,
}

impl ConversionResult {
    pub fn new(wall_clock: WallClock, use_24_hour: bool) -> Self {
        Self {
            date: wall_clock.short_date(),
            time: wall_clock.clock_time(use_24_hour).to_string(),
            wall_clock,
        }
    }

    /// The calendar date of the converted wall clock.
    pub fn naive_date(&self) -> Result<NaiveDate> {
        self.wall_clock.date()
    }
}

/// Convert a picker date/time from `source_timezone` into `target_timezone`.
///
/// # Examples
///
/// ```
/// let result = tzline::convert(
///     "America/Los_Angeles",
///     "2:30 PM",
///     "December 25, 2023",
///     "America/New_York",
///     false,
/// )
/// .unwrap();
///
/// assert_eq!(result.time, "5:30 PM");
/// assert_eq!(result.date, "12-25-2023");
/// ```
pub fn convert(
    source_timezone: &str,
    local_time: &str,
    local_date: &str,
    target_timezone: &str,
    use_24_hour: bool,
) -> Result<ConversionResult> {
    TimeSpec::parse(source_timezone, local_time, local_date, target_timezone)?.convert(use_24_hour)
}

/// `M-D-YYYY` for a date, the converter's date notation.
#[inline]
pub fn short_date(date: NaiveDate) -> String {
    format_short_date(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATE: &str = "December 25, 2023";

    #[test]
    fn los_angeles_to_new_york_is_three_hours_ahead() {
        let result = convert(
            "America/Los_Angeles",
            "2:30 PM",
            DATE,
            "America/New_York",
            false,
        )
        .unwrap();
        assert_eq!(result.time, "5:30 PM");
        assert_eq!(result.date, "12-25-2023");

        let military = convert(
            "America/Los_Angeles",
            "2:30 PM",
            DATE,
            "America/New_York",
            true,
        )
        .unwrap();
        assert_eq!(military.time, "17:30");
        assert_eq!(military.wall_clock, result.wall_clock);
    }

    #[test]
    fn twenty_four_hour_input_matches_twelve_hour_input() {
        let a = convert("America/Los_Angeles", "14:30", DATE, "Europe/London", true).unwrap();
        let b = convert("America/Los_Angeles", "2:30 pm", DATE, "Europe/London", true).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.time, "22:30");
    }

    #[test]
    fn crosses_into_next_day() {
        let tokyo = convert("America/New_York", "2:30 PM", DATE, "Asia/Tokyo", true).unwrap();
        assert_eq!(tokyo.time, "4:30");
        assert_eq!(tokyo.date, "12-26-2023");

        let sydney =
            convert("America/New_York", "2:30 PM", DATE, "Australia/Sydney", false).unwrap();
        assert_eq!(sydney.time, "6:30 AM");
        assert_eq!(sydney.date, "12-26-2023");
    }

    #[test]
    fn midnight_output_in_twelve_hour() {
        let r = convert("America/New_York", "3:00 AM", DATE, "America/Los_Angeles", false).unwrap();
        assert_eq!(r.time, "12:00 AM");
        assert_eq!(r.date, "12-25-2023");
    }

    #[test]
    fn round_trip_restores_wall_clock() {
        let zones = [
            "America/Los_Angeles",
            "America/New_York",
            "Europe/London",
            "Asia/Tokyo",
            "Australia/Sydney",
            "Asia/Kolkata",
            "America/Port-au-Prince",
        ];
        for a in zones {
            for b in zones {
                let spec = TimeSpec::parse(a, "9:45 AM", "June 15, 2023", b).unwrap();
                let there = spec.convert(true).unwrap();
                let back = convert_wall_clock(
                    there.wall_clock.to_naive().unwrap(),
                    &spec.target,
                    &spec.source,
                )
                .unwrap();
                assert_eq!(back, spec.local().unwrap(), "{a} -> {b} -> {a}");
            }
        }
    }

    #[test]
    fn both_formats_describe_the_same_instant() {
        let spec = TimeSpec::parse("Europe/Paris", "23:10", DATE, "Asia/Kolkata").unwrap();
        let h24 = spec.convert(true).unwrap();
        let h12 = spec.convert(false).unwrap();
        assert_eq!(h24.wall_clock, h12.wall_clock);
        let reparsed = ClockTime::parse(&h24.time).unwrap().to_twelve_hour();
        assert_eq!(reparsed.to_string(), h12.time);
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        assert_eq!(
            convert("Mars/Olympus_Mons", "2:30 PM", DATE, "Europe/London", true),
            Err(Error::UnknownTimezone("Mars/Olympus_Mons".into()))
        );
        assert!(matches!(
            convert("Europe/London", "2:30 PM", DATE, "", true),
            Err(Error::UnknownTimezone(_))
        ));
    }

    #[test]
    fn malformed_inputs_are_errors() {
        assert!(matches!(
            convert("Europe/London", "2:30 PM", "December 25 2023", "Asia/Tokyo", true),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            convert("Europe/London", ":30", DATE, "Asia/Tokyo", true),
            Err(Error::InvalidTime(_))
        ));
    }

    #[test]
    fn dst_gap_is_reported() {
        let err = convert(
            "America/New_York",
            "2:30 AM",
            "March 12, 2023",
            "Europe/London",
            true,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NonexistentLocalTime { .. }));
    }

    #[test]
    fn dst_fold_uses_earlier_instant() {
        let r = convert(
            "America/New_York",
            "1:30 AM",
            "November 5, 2023",
            "America/Los_Angeles",
            false,
        )
        .unwrap();
        assert_eq!(r.time, "10:30 PM");
        assert_eq!(r.date, "11-4-2023");
    }

    #[test]
    fn reversed_spec_swaps_zones() {
        let spec = TimeSpec::parse("Asia/Tokyo", "8:00", DATE, "Europe/Berlin").unwrap();
        let rev = spec.reversed();
        assert_eq!(rev.source, spec.target);
        assert_eq!(rev.target, spec.source);
        assert_eq!(rev.reference_time, spec.reference_time);
    }
}
