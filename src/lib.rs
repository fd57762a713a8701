// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timezone comparison primitives.
//!
//! Given a reference local date and time, this crate answers "what time is it
//! for them?" for any IANA timezone and lays out a 24-hour day/night timeline
//! centred on the answer.
//!
//! # Core operations
//!
//! - [`convert`]: re-project a picker date/time (`"December 25, 2023"`,
//!   `"2:30 PM"`) from one IANA zone into another.
//! - [`build_timeline`]: a row of hour cells centred on a time, classified
//!   against a [`SunWindow`] and annotated at each midnight.
//!
//! # Supporting types
//!
//! | Type | Role |
//! |------|------|
//! | [`ClockTime`] | `"H:MM"` / `"H:MM AM/PM"`, parsed into a tagged variant |
//! | [`WallClock`] | timezone-naive date and time |
//! | [`TimeSpec`] | validated converter input |
//! | [`ConversionResult`] | converted date and time, formatted |
//! | [`Timeline`] / [`TimelineCell`] | timeline output |
//! | [`Board`] | the people being compared, changed via [`Action`]s |
//! | [`Palette`] | cell colours per [`DayPhase`] |
//!
//! All operations are pure and synchronous; failures surface as [`Error`]
//! rather than defaults.
//!
//! ```
//! use tzline::{build_timeline, convert, CenteredTime, HourFormat, SunWindow};
//!
//! let tokyo = convert("Europe/Paris", "9:00", "June 1, 2024", "Asia/Tokyo", true).unwrap();
//! assert_eq!(tokyo.time, "16:00");
//!
//! let centered = CenteredTime::from_conversion(&tokyo).unwrap();
//! let timeline = build_timeline(&centered, HourFormat::Military, SunWindow::default()).unwrap();
//! assert_eq!(timeline.centered_cell().label, "16");
//! ```

pub mod board;
pub mod clock;
pub mod converter;
mod error;
pub mod now;
pub mod palette;
pub mod timeline;
pub mod zones;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use board::{Action, Board, Comparison, Person};
pub use clock::{parse_long_date, parse_short_date, ClockTime, Meridiem, WallClock};
pub use converter::{convert, convert_wall_clock, parse_timezone, ConversionResult, TimeSpec};
pub use error::{Error, Result};
pub use palette::{CellStyle, Fill, Palette, Rgb};
pub use timeline::{
    build_timeline, build_timeline_with, CenteredTime, DayPhase, HourFormat, SunWindow, Timeline,
    TimelineCell, TimelineOptions, DEFAULT_CELL_WIDTH, MAX_WINDOW_DAYS,
};
pub use zones::{catalogue, ZoneEntry};

pub use chrono_tz::Tz;
