//! Ballast: a minimal, allocator-parameterized runtime foundation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the ballast sub-crates. For most users, adding `ballast` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ballast::prelude::*;
//!
//! let mut buf = Buffer::new(&SYSTEM);
//! buf.push(1).unwrap();
//! buf.push(2).unwrap();
//!
//! assert_eq!(buf.pop(), Opt::Some(2));
//! assert_eq!(buf.get(0).unwrap(), &1);
//!
//! // Failure is a value, not an unwind: inspect the discriminant.
//! let res: Res<(), BufferError> = buf.push(3);
//! assert!(res.is_ok());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ballast-core` | `Opt`, `Res`, the fatal sink |
//! | [`alloc`] | `ballast-alloc` | `RawAllocator`, `SystemAllocator` |
//! | [`buffer`] | `ballast-buffer` | `Buffer`, `BufferError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Signaling types and fatal diagnostics (`ballast-core`).
///
/// [`types::Opt`] and [`types::Res`] are the workspace-wide absence and
/// failure wrappers; [`types::fatal()`] is the process-terminating sink
/// for contract violations.
pub use ballast_core as types;

/// Raw allocation capability (`ballast-alloc`).
///
/// The [`alloc::RawAllocator`] trait is what a host environment supplies
/// to construct buffers; [`alloc::SystemAllocator`] is the default
/// heap-backed implementation.
pub use ballast_alloc as alloc;

/// Growable contiguous storage (`ballast-buffer`).
///
/// [`buffer::Buffer`] is the core container; [`buffer::BufferError`]
/// enumerates its recoverable failures.
pub use ballast_buffer as buffer;

/// Common imports for typical ballast usage.
///
/// ```rust
/// use ballast::prelude::*;
/// ```
pub mod prelude {
    pub use ballast_alloc::{RawAllocator, SystemAllocator, SYSTEM};
    pub use ballast_buffer::{Buffer, BufferError};
    pub use ballast_core::{fatal, Opt, Res};
}
