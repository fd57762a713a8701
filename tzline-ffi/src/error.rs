// SPDX-License-Identifier: AGPL-3.0-or-later

use tzline::Error;

/// Status codes returned by tzline-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TzlineStatus {
    /// Success.
    Ok = 0,
    /// A required pointer was null.
    NullPointer = 1,
    /// A string argument was not valid UTF-8.
    InvalidUtf8 = 2,
    /// The time string or time fields are malformed.
    InvalidTime = 3,
    /// The date string or date fields are malformed.
    InvalidDate = 4,
    /// The IANA identifier is unknown.
    UnknownTimezone = 5,
    /// The local time falls in a DST gap.
    NonexistentLocalTime = 6,
    /// Sunrise/sunset out of range or not ordered.
    InvalidSunWindow = 7,
    /// The window size is odd or shorter than two days.
    InvalidWindow = 8,
    /// An output buffer is too small; the required length is reported.
    BufferTooSmall = 9,
    /// A panic was caught at the boundary.
    Panic = 10,
    /// Any other rejected input.
    Rejected = 11,
}

impl From<&Error> for TzlineStatus {
    fn from(error: &Error) -> Self {
        match error {
            Error::InvalidTime(_) => TzlineStatus::InvalidTime,
            Error::InvalidDate(_) | Error::UnknownMonth(_) => TzlineStatus::InvalidDate,
            Error::UnknownTimezone(_) => TzlineStatus::UnknownTimezone,
            Error::NonexistentLocalTime { .. } => TzlineStatus::NonexistentLocalTime,
            Error::InvalidSunWindow { .. } => TzlineStatus::InvalidSunWindow,
            Error::InvalidWindow(_) => TzlineStatus::InvalidWindow,
            Error::EmptyName
            | Error::UnknownPerson(_)
            | Error::DuplicatePerson(_)
            | Error::IdsExhausted(_) => TzlineStatus::Rejected,
        }
    }
}
