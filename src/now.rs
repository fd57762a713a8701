// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The current instant, written the way the date/time pickers write it.

use crate::clock::format_long_date;
use crate::converter::parse_timezone;
use crate::error::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// A date/time pair in picker notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerDateTime {
    /// `"December 25, 2023"`.
    pub date: String,
    /// `"02:30 PM"`.
    pub time: String,
}

/// `instant` as seen on a wall clock in `tz`.
pub fn current_in(tz: &Tz, instant: DateTime<Utc>) -> PickerDateTime {
    let local = instant.with_timezone(tz);
    PickerDateTime {
        date: format_long_date(local.date_naive()),
        time: local.format("%I:%M %p").to_string(),
    }
}

/// The present moment in the named zone.
pub fn current_in_zone(name: &str) -> Result<PickerDateTime> {
    Ok(current_in(&parse_timezone(name)?, Utc::now()))
}
