//! Process-terminating diagnostics for contract violations.
//!
//! Recoverable conditions (allocation failure, absent values) travel through
//! [`Res`](crate::Res) and [`Opt`](crate::Opt). Everything else — an
//! out-of-bounds index, unwrapping the wrong variant — is a programming
//! error, and execution must not continue past it. [`fatal`] is the single
//! funnel for those: it writes the caller's location and a message to
//! stderr, then aborts.

use std::panic::Location;
use std::process;

/// Report an unrecoverable contract violation and terminate the process.
///
/// The emitted trace names the location of the offending call site, not
/// this function: `#[track_caller]` propagates through the `unwrap`/`expect`
/// family so the report points at user code.
///
/// This aborts rather than panicking. An unwinding panic can be caught,
/// which would hand control back to the caller after a violated invariant.
#[cold]
#[track_caller]
pub fn fatal(msg: &str) -> ! {
    let loc = Location::caller();
    eprintln!(
        "ballast fatal error: {}:{}:{}: {msg}",
        loc.file(),
        loc.line(),
        loc.column()
    );
    process::abort();
}
