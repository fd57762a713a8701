// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Reference list of selectable timezones.
//!
//! Entries are `Region/City` identifiers from the compiled IANA database,
//! each paired with a display string carrying its UTC offset at a given
//! instant, e.g. `"(GMT-05:00) America/New_York"`. Offsets depend on DST, so
//! the list is built for an instant rather than stored.

use crate::converter::parse_timezone;
use crate::error::Result;
use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};

#[cfg(feature = "serde")]
use serde::Serialize;

/// One selectable timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ZoneEntry {
    /// Position in the offset-sorted list, starting at 1.
    pub id: u32,
    /// `"(GMT±HH:MM) Region/City"`.
    pub value: String,
    /// IANA identifier.
    pub label: &'static str,
    pub offset_seconds: i32,
}

impl ZoneEntry {
    fn new(tz: Tz, at: &DateTime<Utc>) -> Self {
        let offset_seconds = utc_offset_seconds(&tz, at);
        Self {
            id: 0,
            value: format!("({}) {}", gmt_offset(offset_seconds), tz.name()),
            label: tz.name(),
            offset_seconds,
        }
    }

    pub fn tz(&self) -> Result<Tz> {
        parse_timezone(self.label)
    }
}

/// Offset from UTC, in seconds, in force at `at`.
pub fn utc_offset_seconds(tz: &Tz, at: &DateTime<Utc>) -> i32 {
    tz.offset_from_utc_datetime(&at.naive_utc())
        .fix()
        .local_minus_utc()
}

/// `"GMT+05:30"` / `"GMT-08:00"`.
pub fn gmt_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("GMT{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

/// `Region/City` with optional further segments; letters, `_`, `-` only.
pub fn is_region_city(name: &str) -> bool {
    let Some((region, city)) = name.split_once('/') else {
        return false;
    };
    !region.is_empty()
        && region.bytes().all(|b| b.is_ascii_alphabetic() || b == b'_')
        && !city.is_empty()
        && city
            .bytes()
            .all(|b| b.is_ascii_alphabetic() || matches!(b, b'_' | b'/' | b'-'))
}

/// Every `Region/City` zone, sorted by offset at `at` then by name.
pub fn catalogue(at: DateTime<Utc>) -> Vec<ZoneEntry> {
    let mut entries: Vec<ZoneEntry> = TZ_VARIANTS
        .iter()
        .filter(|tz| is_region_city(tz.name()))
        .map(|tz| ZoneEntry::new(*tz, &at))
        .collect();
    entries.sort_by(|a, b| {
        a.offset_seconds
            .cmp(&b.offset_seconds)
            .then_with(|| a.label.cmp(b.label))
    });
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.id = index as u32 + 1;
    }
    entries
}

/// Catalogue entry for one identifier.
pub fn lookup(label: &str, at: DateTime<Utc>) -> Option<ZoneEntry> {
    catalogue(at).into_iter().find(|entry| entry.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn winter() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 12, 25, 12, 0, 0).unwrap()
    }

    #[test]
    fn includes_common_zones() {
        let labels: HashSet<_> = catalogue(winter()).into_iter().map(|e| e.label).collect();
        for zone in [
            "America/New_York",
            "America/Los_Angeles",
            "Europe/London",
            "Asia/Tokyo",
            "Australia/Sydney",
            "America/Port-au-Prince",
        ] {
            assert!(labels.contains(zone), "{zone}");
        }
        assert!(labels.len() > 100);
    }

    #[test]
    fn ids_unique_and_values_carry_offset() {
        let entries = catalogue(winter());
        let ids: HashSet<_> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), entries.len());
        let values: HashSet<_> = entries.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values.len(), entries.len());
        for entry in &entries {
            assert!(entry.value.starts_with("(GMT"));
            assert_eq!(&entry.value[10..12], ") ");
            assert!(is_region_city(entry.label));
        }
    }

    #[test]
    fn sorted_from_west_to_east() {
        let entries = catalogue(winter());
        assert!(entries.first().unwrap().value.starts_with("(GMT-"));
        assert!(entries.last().unwrap().value.starts_with("(GMT+"));
        assert!(entries
            .windows(2)
            .all(|pair| pair[0].offset_seconds <= pair[1].offset_seconds));
    }

    #[test]
    fn offsets_follow_dst() {
        let summer = Utc.with_ymd_and_hms(2023, 7, 1, 12, 0, 0).unwrap();
        let ny_winter = lookup("America/New_York", winter()).unwrap();
        let ny_summer = lookup("America/New_York", summer).unwrap();
        assert_eq!(ny_winter.value, "(GMT-05:00) America/New_York");
        assert_eq!(ny_summer.value, "(GMT-04:00) America/New_York");
        assert_eq!(
            lookup("Asia/Kolkata", summer).unwrap().value,
            "(GMT+05:30) Asia/Kolkata"
        );
        assert_eq!(ny_summer.tz().unwrap(), chrono_tz::America::New_York);
    }

    #[test]
    fn region_city_pattern() {
        assert!(is_region_city("America/Argentina/Buenos_Aires"));
        assert!(!is_region_city("UTC"));
        assert!(!is_region_city("Etc/GMT+5"));
        assert!(!is_region_city("/London"));
    }

    #[test]
    fn gmt_offset_format() {
        assert_eq!(gmt_offset(0), "GMT+00:00");
        assert_eq!(gmt_offset(-9 * 3600 - 1800), "GMT-09:30");
        assert_eq!(gmt_offset(5 * 3600 + 45 * 60), "GMT+05:45");
    }
}
