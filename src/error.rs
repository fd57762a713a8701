// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every tzline operation.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing inputs or building a timeline.
///
/// Nothing in this crate substitutes a default for malformed input; callers
/// receive one of these variants instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The time string is not `H:MM` or `H:MM AM/PM`.
    #[error("invalid time `{0}`: expected `H:MM` or `H:MM AM/PM`")]
    InvalidTime(String),

    /// The date string is malformed or names an impossible calendar day.
    #[error("invalid date `{0}`")]
    InvalidDate(String),

    /// The month name is not one of `January`..`December`.
    #[error("unknown month name `{0}`")]
    UnknownMonth(String),

    /// The IANA identifier is not in the compiled timezone database.
    #[error("unknown timezone `{0}`")]
    UnknownTimezone(String),

    /// The local time falls inside a DST gap of its zone.
    #[error("local time {local} does not exist in {timezone}")]
    NonexistentLocalTime {
        local: NaiveDateTime,
        timezone: String,
    },

    /// Sunrise/sunset bounds outside `0..=23` or not strictly ordered.
    #[error("invalid sun window: sunrise {sunrise}, sunset {sunset}")]
    InvalidSunWindow { sunrise: u32, sunset: u32 },

    /// Timeline windows span an even number of days, from two to eight.
    #[error("invalid timeline window of {0} days")]
    InvalidWindow(usize),

    /// A person's name is empty once trimmed.
    #[error("name cannot be empty")]
    EmptyName,

    /// No person with this id is on the board.
    #[error("no person with id {0}")]
    UnknownPerson(u64),

    /// Two saved people share an id.
    #[error("duplicate person id {0}")]
    DuplicatePerson(u64),

    /// No id is left after this one.
    #[error("person ids exhausted after {0}")]
    IdsExhausted(u64),
}
