// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for timeline layout.

use crate::catch_panic;
use crate::convert::TzlineWallClock;
use crate::error::TzlineStatus;
use chrono::Datelike;
use tzline::{
    build_timeline_with, CenteredTime, DayPhase, HourFormat, SunWindow, Timeline, TimelineOptions,
};

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// Day/night classification of a cell.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TzlinePhase {
    Night = 0,
    Dawn = 1,
    Day = 2,
    Dusk = 3,
}

impl From<DayPhase> for TzlinePhase {
    fn from(phase: DayPhase) -> Self {
        match phase {
            DayPhase::Night => TzlinePhase::Night,
            DayPhase::Dawn => TzlinePhase::Dawn,
            DayPhase::Day => TzlinePhase::Day,
            DayPhase::Dusk => TzlinePhase::Dusk,
        }
    }
}

/// Timeline inputs.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TzlineTimelineRequest {
    /// Date and time the timeline centres on.
    pub centered: TzlineWallClock,
    /// `true` for `"Midnight"`, `"1AM"`… labels; `false` for `"0"`..`"23"`.
    pub normal_labels: bool,
    pub sunrise_hour: u8,
    pub sunset_hour: u8,
    /// Even, from 2 to 8. Zero selects the default of 2.
    pub window_days: usize,
}

/// One hour cell. Boundary fields are zero unless `is_date_boundary`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TzlineCell {
    pub hour: u8,
    pub phase: TzlinePhase,
    pub is_date_boundary: bool,
    pub boundary_year: i32,
    pub boundary_month: u8,
    pub boundary_day: u8,
}

impl TzlineTimelineRequest {
    fn build(&self) -> Result<Timeline, TzlineStatus> {
        let into_status = |e: tzline::Error| TzlineStatus::from(&e);
        let wall_clock = self.centered.to_wall_clock()?;
        let centered = CenteredTime::from_wall_clock(&wall_clock).map_err(into_status)?;
        let sun = SunWindow::new(self.sunrise_hour.into(), self.sunset_hour.into())
            .map_err(into_status)?;
        let format = if self.normal_labels {
            HourFormat::Normal
        } else {
            HourFormat::Military
        };
        let options = match self.window_days {
            0 => TimelineOptions::default(),
            window_days => TimelineOptions { window_days },
        };
        build_timeline_with(&centered, format, sun, options).map_err(into_status)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Timeline functions
// ═══════════════════════════════════════════════════════════════════════════

/// Lay out a timeline into `out`, which holds `capacity` cells.
///
/// The number of cells is always written to `out_len`; if it exceeds
/// `capacity`, nothing is written to `out` and `BufferTooSmall` is returned.
/// `out_centered_index` (optional) receives the index of the centred cell.
///
/// # Safety
/// `out` must be valid for `capacity` writable cells; `out_len` must be a
/// valid, writable pointer; `out_centered_index` may be null.
#[no_mangle]
pub unsafe extern "C" fn tzline_build_timeline(
    request: TzlineTimelineRequest,
    out: *mut TzlineCell,
    capacity: usize,
    out_len: *mut usize,
    out_centered_index: *mut usize,
) -> TzlineStatus {
    catch_panic!(TzlineStatus::Panic, {
        if out.is_null() || out_len.is_null() {
            return TzlineStatus::NullPointer;
        }
        let timeline = match request.build() {
            Ok(timeline) => timeline,
            Err(status) => return status,
        };
        // SAFETY: `out_len` was checked for null; `out_centered_index` is checked here.
        unsafe {
            *out_len = timeline.len();
            if !out_centered_index.is_null() {
                *out_centered_index = timeline.centered_index();
            }
        }
        if timeline.len() > capacity {
            return TzlineStatus::BufferTooSmall;
        }
        for (index, cell) in timeline.cells().iter().enumerate() {
            let (year, month, day) = cell
                .boundary
                .map(|d| (d.year(), d.month() as u8, d.day() as u8))
                .unwrap_or((0, 0, 0));
            // SAFETY: index < len <= capacity.
            unsafe {
                *out.add(index) = TzlineCell {
                    hour: cell.hour as u8,
                    phase: cell.phase.into(),
                    is_date_boundary: cell.is_date_boundary(),
                    boundary_year: year,
                    boundary_month: month,
                    boundary_day: day,
                };
            }
        }
        TzlineStatus::Ok
    })
}

/// Horizontal margin, in pixels relative to the viewport midpoint, that
/// centres the request's time when every cell is `cell_width` wide.
///
/// # Safety
/// `out` must be a valid, writable pointer to `f64`.
#[no_mangle]
pub unsafe extern "C" fn tzline_scroll_offset(
    request: TzlineTimelineRequest,
    cell_width: f64,
    out: *mut f64,
) -> TzlineStatus {
    catch_panic!(TzlineStatus::Panic, {
        if out.is_null() {
            return TzlineStatus::NullPointer;
        }
        match request.build() {
            Ok(timeline) => {
                // SAFETY: `out` was checked for null.
                unsafe { *out = timeline.scroll_offset(cell_width) };
                TzlineStatus::Ok
            }
            Err(status) => status,
        }
    })
}
