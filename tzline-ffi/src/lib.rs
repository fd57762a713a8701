// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! C FFI bindings for **tzline**: wall-clock conversion between IANA
//! timezones and day/night hour timelines.
//!
//! Every fallible function returns a [`TzlineStatus`] and writes its result
//! through an out-pointer. Strings are NUL-terminated UTF-8.

mod convert;
mod error;
mod timeline;

pub use convert::*;
pub use error::*;
pub use timeline::*;

/// Run `$body`, turning a panic into `$status` instead of unwinding into C.
#[macro_export]
macro_rules! catch_panic {
    ($status:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(result) => result,
            Err(_) => {
                ::log::error!("panic caught at the tzline-ffi boundary");
                $status
            }
        }
    };
}

/// Returns the tzline-ffi ABI version (semver-encoded: major*10000 + minor*100 + patch).
#[allow(clippy::erasing_op, clippy::identity_op)]
#[no_mangle]
pub extern "C" fn tzline_ffi_version() -> u32 {
    0 * 10000 + 1 * 100 + 0 // 0.1.0
}
