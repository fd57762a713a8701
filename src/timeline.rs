// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hour timelines centred on a wall-clock time.
//!
//! A timeline is a row of one-hour cells. One day of the row is the hours
//! *after* the centred hour followed by the hours *up to and including* it:
//!
//! ```text
//! h = 14:   15 16 … 23 │ 0 1 … 14
//!           └── next ──┘ └─ prev ─┘
//! ```
//!
//! The default window repeats that day twice (48 cells), so the centred hour
//! closes the first day and sits just left of the row's midpoint with a full
//! day of cells on either side. Every midnight cell is a date boundary.
//!
//! Cells are classified against a [`SunWindow`]:
//!
//! | Hour | Phase |
//! |------|-------|
//! | `< sunrise` or `> sunset` | [`DayPhase::Night`] |
//! | `== sunrise` | [`DayPhase::Dawn`] |
//! | between | [`DayPhase::Day`] |
//! | `== sunset` | [`DayPhase::Dusk`] |

use crate::clock::{parse_short_date, ClockTime, WallClock};
use crate::converter::ConversionResult;
use crate::error::{Error, Result};
use chrono::{NaiveDate, TimeDelta};
use log::debug;
use qtty::{Hour, Minutes};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 24-hour labels, `"0"` through `"23"`.
pub const MILITARY_LABELS: [&str; 24] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "23",
];

/// 12-hour labels with a named midnight.
pub const NORMAL_LABELS: [&str; 24] = [
    "Midnight", "1AM", "2AM", "3AM", "4AM", "5AM", "6AM", "7AM", "8AM", "9AM", "10AM", "11AM",
    "12PM", "1PM", "2PM", "3PM", "4PM", "5PM", "6PM", "7PM", "8PM", "9PM", "10PM", "11PM",
];

/// Cell width in pixels when the host does not supply one.
pub const DEFAULT_CELL_WIDTH: f64 = 75.0;

/// Widest window [`build_timeline_with`] accepts, in days.
pub const MAX_WINDOW_DAYS: usize = 8;

const HOURS_PER_DAY: usize = 24;

// ═══════════════════════════════════════════════════════════════════════════
// Labels and classification
// ═══════════════════════════════════════════════════════════════════════════

/// Which label set the cells carry.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HourFormat {
    /// `"0"`..`"23"`.
    #[default]
    Military,
    /// `"Midnight"`, `"1AM"`..`"11PM"`.
    Normal,
}

impl HourFormat {
    pub fn labels(self) -> &'static [&'static str; 24] {
        match self {
            HourFormat::Military => &MILITARY_LABELS,
            HourFormat::Normal => &NORMAL_LABELS,
        }
    }

    #[inline]
    pub fn label(self, hour: u32) -> Option<&'static str> {
        self.labels().get(hour as usize).copied()
    }

    /// Numeric hour behind a label of this set.
    pub fn hour_of(self, label: &str) -> Option<u32> {
        self.labels()
            .iter()
            .position(|candidate| *candidate == label)
            .map(|hour| hour as u32)
    }
}

/// Position of an hour relative to sunrise and sunset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DayPhase {
    Night,
    /// Night-to-day transition hour.
    Dawn,
    Day,
    /// Day-to-night transition hour.
    Dusk,
}

impl fmt::Display for DayPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DayPhase::Night => "NIGHT",
            DayPhase::Dawn => "DAWN",
            DayPhase::Day => "DAY",
            DayPhase::Dusk => "DUSK",
        })
    }
}

/// Sunrise and sunset hours, `sunrise < sunset`, both in `0..=23`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSunWindow"))]
pub struct SunWindow {
    sunrise: u32,
    sunset: u32,
}

impl Default for SunWindow {
    /// 6:00 sunrise, 18:00 sunset.
    fn default() -> Self {
        Self {
            sunrise: 6,
            sunset: 18,
        }
    }
}

impl SunWindow {
    pub fn new(sunrise: u32, sunset: u32) -> Result<Self> {
        if sunrise >= sunset || sunset > 23 {
            return Err(Error::InvalidSunWindow { sunrise, sunset });
        }
        Ok(Self { sunrise, sunset })
    }

    /// Build from `"H:MM"` strings; minutes are ignored.
    pub fn parse(sunrise: &str, sunset: &str) -> Result<Self> {
        Self::new(
            ClockTime::parse(sunrise)?.hour24(),
            ClockTime::parse(sunset)?.hour24(),
        )
    }

    /// Defaults fill whichever bound is missing.
    pub fn from_optional(sunrise: Option<&str>, sunset: Option<&str>) -> Result<Self> {
        let default = Self::default();
        let sunrise = match sunrise {
            Some(text) => ClockTime::parse(text)?.hour24(),
            None => default.sunrise,
        };
        let sunset = match sunset {
            Some(text) => ClockTime::parse(text)?.hour24(),
            None => default.sunset,
        };
        Self::new(sunrise, sunset)
    }

    #[inline]
    pub fn sunrise(&self) -> u32 {
        self.sunrise
    }

    #[inline]
    pub fn sunset(&self) -> u32 {
        self.sunset
    }

    pub fn phase(&self, hour: u32) -> DayPhase {
        if hour == self.sunrise {
            DayPhase::Dawn
        } else if hour == self.sunset {
            DayPhase::Dusk
        } else if hour > self.sunrise && hour < self.sunset {
            DayPhase::Day
        } else {
            DayPhase::Night
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Inputs
// ═══════════════════════════════════════════════════════════════════════════

/// The date and time a timeline centres on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCenteredTime"))]
pub struct CenteredTime {
    pub date: NaiveDate,
    hour: u32,
    minute: u32,
}

impl CenteredTime {
    pub fn new(date: NaiveDate, hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime(format!("{hour}:{minute:02}")));
        }
        Ok(Self { date, hour, minute })
    }

    /// Parse a converter date (`"M-D-YYYY"`) and time (`"H:MM"` or
    /// `"H:MM AM/PM"`). Empty strings are errors, never midnight.
    pub fn parse(date: &str, time: &str) -> Result<Self> {
        let time = ClockTime::parse(time)?;
        Self::new(parse_short_date(date)?, time.hour24(), time.minute())
    }

    pub fn from_wall_clock(wall_clock: &WallClock) -> Result<Self> {
        Self::new(wall_clock.date()?, wall_clock.hour, wall_clock.minute)
    }

    pub fn from_conversion(result: &ConversionResult) -> Result<Self> {
        Self::from_wall_clock(&result.wall_clock)
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.minute
    }
}

// Deserialized values pass through the same checks as the constructors.

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSunWindow {
    sunrise: u32,
    sunset: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSunWindow> for SunWindow {
    type Error = Error;

    fn try_from(raw: RawSunWindow) -> Result<Self> {
        Self::new(raw.sunrise, raw.sunset)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCenteredTime {
    date: NaiveDate,
    hour: u32,
    minute: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCenteredTime> for CenteredTime {
    type Error = Error;

    fn try_from(raw: RawCenteredTime) -> Result<Self> {
        Self::new(raw.date, raw.hour, raw.minute)
    }
}

/// Window sizing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimelineOptions {
    /// Number of 24-cell days in the window; even, from 2 to [`MAX_WINDOW_DAYS`].
    pub window_days: usize,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self { window_days: 2 }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Output
// ═══════════════════════════════════════════════════════════════════════════

/// One hour of a timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TimelineCell {
    pub hour: u32,
    pub label: &'static str,
    pub phase: DayPhase,
    /// Date starting at this cell, set on midnight cells only.
    pub boundary: Option<NaiveDate>,
}

impl TimelineCell {
    #[inline]
    pub fn is_date_boundary(&self) -> bool {
        self.boundary.is_some()
    }

    /// Boundary date as `MM/DD/YYYY`.
    pub fn annotation(&self) -> Option<String> {
        self.boundary
            .map(|date| date.format("%m/%d/%Y").to_string())
    }
}

/// An ordered row of hour cells. Rebuilt on every input change.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Timeline {
    cells: Vec<TimelineCell>,
    centered: CenteredTime,
    centered_index: usize,
}

impl Timeline {
    #[inline]
    pub fn cells(&self) -> &[TimelineCell] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn centered(&self) -> CenteredTime {
        self.centered
    }

    /// Index of the cell holding the centred hour at the row's midpoint.
    #[inline]
    pub fn centered_index(&self) -> usize {
        self.centered_index
    }

    pub fn centered_cell(&self) -> &TimelineCell {
        &self.cells[self.centered_index]
    }

    /// Midnight cells, in row order.
    pub fn boundaries(&self) -> impl Iterator<Item = (usize, &TimelineCell)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_date_boundary())
    }

    /// Left margin of the row, in pixels, relative to the viewport midpoint.
    ///
    /// Places the centred cell in the middle of the viewport, shifted left by
    /// the elapsed fraction of the hour: at `14:30` the midpoint falls exactly
    /// between the `14` and `15` cells.
    pub fn scroll_offset(&self, cell_width: f64) -> f64 {
        let into_hour = Minutes::new(self.centered.minute as f64)
            .to::<Hour>()
            .value();
        let row_width = self.cells.len() as f64 * cell_width;
        -row_width / 2.0 + cell_width / 2.0 - into_hour * cell_width
    }

    /// Left and right edge of a cell relative to the viewport midpoint.
    pub fn cell_span(&self, index: usize, cell_width: f64) -> (f64, f64) {
        let left = self.scroll_offset(cell_width) + index as f64 * cell_width;
        (left, left + cell_width)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Layout
// ═══════════════════════════════════════════════════════════════════════════

/// Build the default two-day timeline.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tzline::{build_timeline, CenteredTime, DayPhase, HourFormat, SunWindow};
///
/// let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
/// let centered = CenteredTime::new(date, 14, 30).unwrap();
/// let timeline = build_timeline(&centered, HourFormat::Normal, SunWindow::default()).unwrap();
///
/// assert_eq!(timeline.len(), 48);
/// assert_eq!(timeline.centered_cell().label, "2PM");
/// assert_eq!(timeline.centered_cell().phase, DayPhase::Day);
/// ```
pub fn build_timeline(
    centered: &CenteredTime,
    format: HourFormat,
    sun: SunWindow,
) -> Result<Timeline> {
    build_timeline_with(centered, format, sun, TimelineOptions::default())
}

/// Build a timeline with an explicit window size.
pub fn build_timeline_with(
    centered: &CenteredTime,
    format: HourFormat,
    sun: SunWindow,
    options: TimelineOptions,
) -> Result<Timeline> {
    let days = options.window_days;
    if !(2..=MAX_WINDOW_DAYS).contains(&days) || days % 2 != 0 {
        return Err(Error::InvalidWindow(days));
    }
    let capacity = days
        .checked_mul(HOURS_PER_DAY)
        .ok_or(Error::InvalidWindow(days))?;

    let hour = centered.hour as usize;
    let day: Vec<usize> = (hour + 1..HOURS_PER_DAY).chain(0..=hour).collect();
    let labels = format.labels();

    // Midnights before the centred day belong to earlier dates.
    let leading_days = (days / 2 - 1) as i64;
    let mut midnights: i64 = 0;
    let mut cells = Vec::with_capacity(capacity);
    for _ in 0..days {
        for &h in &day {
            let boundary = if h == 0 {
                let offset = midnights - leading_days;
                midnights += 1;
                let date = centered
                    .date
                    .checked_add_signed(TimeDelta::days(offset))
                    .ok_or_else(|| Error::InvalidDate(centered.date.to_string()))?;
                Some(date)
            } else {
                None
            };
            cells.push(TimelineCell {
                hour: h as u32,
                label: labels[h],
                phase: sun.phase(h as u32),
                boundary,
            });
        }
    }

    let centered_index = cells.len() / 2 - 1;
    debug!(
        "timeline of {} cells centred on {:02}:{:02} {} ({:?})",
        cells.len(),
        centered.hour,
        centered.minute,
        centered.date,
        format
    );
    Ok(Timeline {
        cells,
        centered: *centered,
        centered_index,
    })
}
