// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for wall-clock conversion between IANA timezones.

use crate::catch_panic;
use crate::error::TzlineStatus;
use std::ffi::{c_char, CStr};
use tzline::{TimeSpec, WallClock};

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// Timezone-naive date and time for C interop.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TzlineWallClock {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl TzlineWallClock {
    pub(crate) fn from_wall_clock(wc: &WallClock) -> Self {
        Self {
            year: wc.year,
            month: wc.month as u8,
            day: wc.day as u8,
            hour: wc.hour as u8,
            minute: wc.minute as u8,
        }
    }

    pub(crate) fn to_wall_clock(self) -> Result<WallClock, TzlineStatus> {
        WallClock::new(
            self.year,
            self.month.into(),
            self.day.into(),
            self.hour.into(),
            self.minute.into(),
        )
        .map_err(|e| TzlineStatus::from(&e))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════════

/// Borrow a C string.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn read_str<'a>(ptr: *const c_char) -> Result<&'a str, TzlineStatus> {
    if ptr.is_null() {
        return Err(TzlineStatus::NullPointer);
    }
    // SAFETY: non-null and NUL-terminated per the caller's contract.
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| TzlineStatus::InvalidUtf8)
}

/// Copy `text` plus a NUL terminator into `buf`.
///
/// # Safety
/// `buf` must be null or valid for `len` writable bytes.
unsafe fn write_str(text: &str, buf: *mut c_char, len: usize) -> Result<(), TzlineStatus> {
    if buf.is_null() {
        return Err(TzlineStatus::NullPointer);
    }
    if len < text.len() + 1 {
        return Err(TzlineStatus::BufferTooSmall);
    }
    // SAFETY: `buf` holds at least `text.len() + 1` bytes.
    unsafe {
        std::ptr::copy_nonoverlapping(text.as_ptr().cast::<c_char>(), buf, text.len());
        *buf.add(text.len()) = 0;
    }
    Ok(())
}

/// # Safety
/// All four pointers must be null or NUL-terminated strings.
unsafe fn read_spec(
    source_timezone: *const c_char,
    local_time: *const c_char,
    local_date: *const c_char,
    target_timezone: *const c_char,
) -> Result<TimeSpec, TzlineStatus> {
    let (source, time, date, target) = unsafe {
        (
            read_str(source_timezone)?,
            read_str(local_time)?,
            read_str(local_date)?,
            read_str(target_timezone)?,
        )
    };
    TimeSpec::parse(source, time, date, target).map_err(|e| TzlineStatus::from(&e))
}

fn status(result: Result<(), TzlineStatus>) -> TzlineStatus {
    match result {
        Ok(()) => TzlineStatus::Ok,
        Err(status) => status,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversion functions
// ═══════════════════════════════════════════════════════════════════════════

/// Convert `local_time` (`"H:MM"` or `"H:MM AM/PM"`) on `local_date`
/// (`"Month D, YYYY"`) from `source_timezone` into `target_timezone`.
///
/// # Safety
/// String arguments must be valid NUL-terminated strings; `out` must be a
/// valid, writable pointer to `TzlineWallClock`.
#[no_mangle]
pub unsafe extern "C" fn tzline_convert(
    source_timezone: *const c_char,
    local_time: *const c_char,
    local_date: *const c_char,
    target_timezone: *const c_char,
    out: *mut TzlineWallClock,
) -> TzlineStatus {
    catch_panic!(TzlineStatus::Panic, {
        if out.is_null() {
            return TzlineStatus::NullPointer;
        }
        status((|| -> Result<(), TzlineStatus> {
            let spec = unsafe { read_spec(source_timezone, local_time, local_date, target_timezone)? };
            let result = spec.convert(true).map_err(|e| TzlineStatus::from(&e))?;
            // SAFETY: `out` was checked for null and the caller guarantees it is writable.
            unsafe { *out = TzlineWallClock::from_wall_clock(&result.wall_clock) };
            Ok(())
        })())
    })
}

/// Convert and format: writes `"M-D-YYYY"` into `date_buf` and `"H:MM"` or
/// `"H:MM AM/PM"` into `time_buf`. Returns `BufferTooSmall` if either buffer
/// cannot hold its string and terminator; 16 bytes always suffice.
///
/// # Safety
/// String arguments must be valid NUL-terminated strings; `date_buf` and
/// `time_buf` must be valid for `date_len` and `time_len` writable bytes.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn tzline_convert_format(
    source_timezone: *const c_char,
    local_time: *const c_char,
    local_date: *const c_char,
    target_timezone: *const c_char,
    use_24_hour: bool,
    date_buf: *mut c_char,
    date_len: usize,
    time_buf: *mut c_char,
    time_len: usize,
) -> TzlineStatus {
    catch_panic!(TzlineStatus::Panic, {
        status((|| -> Result<(), TzlineStatus> {
            let spec = unsafe { read_spec(source_timezone, local_time, local_date, target_timezone)? };
            let result = spec
                .convert(use_24_hour)
                .map_err(|e| TzlineStatus::from(&e))?;
            unsafe {
                write_str(&result.date, date_buf, date_len)?;
                write_str(&result.time, time_buf, time_len)?;
            }
            Ok(())
        })())
    })
}
