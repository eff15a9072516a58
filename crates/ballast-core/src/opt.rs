//! An optional value that aborts instead of unwinding on misuse.
//!
//! [`Opt`] is the return type for every "may not exist" query in the
//! workspace: popping from an empty buffer, a failed indexed lookup, the
//! allocator's null sentinel. It mirrors `std::option::Option` closely —
//! the difference is the unwrap family, which reports through
//! [`fatal`](crate::fatal::fatal) and terminates the process rather than
//! raising a catchable panic.

use core::mem;

use crate::fatal::fatal;

/// A container holding zero or one value of type `T`.
///
/// Cloning deep-copies the payload (when `T: Clone`); [`take`](Opt::take)
/// provides destructive move-out, leaving `None` behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Opt<T> {
    /// A value is present.
    Some(T),
    /// No value.
    None,
}

impl<T> Opt<T> {
    /// Returns `true` if a value is present.
    pub fn is_some(&self) -> bool {
        matches!(self, Opt::Some(_))
    }

    /// Returns `true` if no value is present.
    pub fn is_none(&self) -> bool {
        matches!(self, Opt::None)
    }

    /// Returns the contained value.
    ///
    /// # Aborts
    ///
    /// Terminates the process via [`fatal`] if the value is `None`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => fatal("unwrapped a `None` value"),
        }
    }

    /// Returns the contained value.
    ///
    /// # Aborts
    ///
    /// Terminates the process with the given message if the value is `None`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => fatal(msg),
        }
    }

    /// Returns the contained value, or `default` if none is present.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Opt::Some(value) => value,
            Opt::None => default,
        }
    }

    /// Returns the contained value without checking the discriminant.
    ///
    /// # Safety
    ///
    /// Calling this on a `None` is undefined behavior.
    pub unsafe fn unwrap_unchecked(self) -> T {
        match self {
            Opt::Some(value) => value,
            // SAFETY: the caller guarantees the value is `Some`.
            Opt::None => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Maps an `Opt<T>` to `Opt<U>` by applying `f` to a contained value.
    ///
    /// `None` propagates untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Opt<U> {
        match self {
            Opt::Some(value) => Opt::Some(f(value)),
            Opt::None => Opt::None,
        }
    }

    /// Returns `self` if it holds a value, otherwise `other`.
    pub fn some_or(self, other: Opt<T>) -> Opt<T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => other,
        }
    }

    /// Installs `value` and returns whatever was held before.
    pub fn replace(&mut self, value: T) -> Opt<T> {
        mem::replace(self, Opt::Some(value))
    }

    /// Removes and returns the current value, leaving `None` behind.
    pub fn take(&mut self) -> Opt<T> {
        mem::replace(self, Opt::None)
    }

    /// Converts from `&Opt<T>` to `Opt<&T>`.
    pub fn as_ref(&self) -> Opt<&T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => Opt::None,
        }
    }

    /// Converts from `&mut Opt<T>` to `Opt<&mut T>`.
    pub fn as_mut(&mut self) -> Opt<&mut T> {
        match self {
            Opt::Some(value) => Opt::Some(value),
            Opt::None => Opt::None,
        }
    }

    /// Converts into a `std::option::Option`, for interop at crate
    /// boundaries.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Opt::None
    }
}

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Opt::Some(v),
            None => Opt::None,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        match value {
            Opt::Some(v) => Some(v),
            Opt::None => None,
        }
    }
}
