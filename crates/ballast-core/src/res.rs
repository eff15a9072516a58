//! A fallible result that aborts instead of unwinding on misuse.
//!
//! [`Res`] is the return type for every "may fail" mutating operation in
//! the workspace — pushes, inserts, resizes. The error side is expected to
//! describe itself (`fmt::Display`); that description is included in the
//! fatal trace when an `Err` is unwrapped. Discarding one side is always
//! explicit, via [`ok`](Res::ok) or [`err`](Res::err).

use core::fmt;

use crate::fatal::fatal;
use crate::opt::Opt;

/// A container holding either a success value `T` or an error value `E`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Res<T, E> {
    /// The operation succeeded.
    Ok(T),
    /// The operation failed.
    Err(E),
}

impl<T, E> Res<T, E> {
    /// Returns `true` if the result is `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Res::Ok(_))
    }

    /// Returns `true` if the result is `Err`.
    pub fn is_err(&self) -> bool {
        matches!(self, Res::Err(_))
    }

    /// Maps a `Res<T, E>` to `Res<U, E>` by applying `f` to a contained
    /// `Ok` value, leaving an `Err` value untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Res<U, E> {
        match self {
            Res::Ok(value) => Res::Ok(f(value)),
            Res::Err(e) => Res::Err(e),
        }
    }

    /// Maps a `Res<T, E>` to `Res<T, F>` by applying `f` to a contained
    /// `Err` value, leaving an `Ok` value untouched.
    pub fn map_err<F, O: FnOnce(E) -> F>(self, f: O) -> Res<T, F> {
        match self {
            Res::Ok(value) => Res::Ok(value),
            Res::Err(e) => Res::Err(f(e)),
        }
    }

    /// Converts into `Opt<T>`, discarding the error (if any).
    pub fn ok(self) -> Opt<T> {
        match self {
            Res::Ok(value) => Opt::Some(value),
            Res::Err(_) => Opt::None,
        }
    }

    /// Converts into `Opt<E>`, discarding the success value (if any).
    pub fn err(self) -> Opt<E> {
        match self {
            Res::Ok(_) => Opt::None,
            Res::Err(e) => Opt::Some(e),
        }
    }

    /// Returns the contained `Ok` value, or `default` on `Err`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Res::Ok(value) => value,
            Res::Err(_) => default,
        }
    }

    /// Returns the contained `Ok` value without checking the discriminant.
    ///
    /// # Safety
    ///
    /// Calling this on an `Err` is undefined behavior.
    pub unsafe fn unwrap_unchecked(self) -> T {
        match self {
            Res::Ok(value) => value,
            // SAFETY: the caller guarantees the result is `Ok`.
            Res::Err(_) => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Returns the contained `Err` value.
    ///
    /// # Aborts
    ///
    /// Terminates the process via [`fatal`] if the result is `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Res::Ok(_) => fatal("unwrapped an `Ok` value"),
            Res::Err(e) => e,
        }
    }

    /// Returns the contained `Err` value.
    ///
    /// # Aborts
    ///
    /// Terminates the process with the given message if the result is `Ok`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Res::Ok(_) => fatal(msg),
            Res::Err(e) => e,
        }
    }

    /// Converts into a `std::result::Result`, for interop at crate
    /// boundaries.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E: fmt::Display> Res<T, E> {
    /// Returns the contained `Ok` value.
    ///
    /// # Aborts
    ///
    /// Terminates the process via [`fatal`] if the result is `Err`; the
    /// trace includes the error's description.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Res::Ok(value) => value,
            Res::Err(e) => fatal(&format!("unwrapped an `Err` value: {e}")),
        }
    }

    /// Returns the contained `Ok` value.
    ///
    /// # Aborts
    ///
    /// Terminates the process with the given message (and the error's
    /// description) if the result is `Err`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Res::Ok(value) => value,
            Res::Err(e) => fatal(&format!("{msg}: {e}")),
        }
    }
}

impl<T, E> From<Result<T, E>> for Res<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => Res::Ok(v),
            Err(e) => Res::Err(e),
        }
    }
}

impl<T, E> From<Res<T, E>> for Result<T, E> {
    fn from(value: Res<T, E>) -> Self {
        match value {
            Res::Ok(v) => Ok(v),
            Res::Err(e) => Err(e),
        }
    }
}
