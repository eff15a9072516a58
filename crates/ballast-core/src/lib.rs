//! Core signaling types for the ballast foundation library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! two exception-free signaling wrappers used throughout the workspace —
//! [`Opt`] for absence and [`Res`] for failure — plus the process-terminating
//! [`fatal()`] sink invoked on contract violations.
//!
//! Unlike their `std` counterparts, unwrapping the wrong variant of these
//! types does not unwind: it reports through [`fatal()`] and aborts the
//! process. Recoverable conditions are always carried in the discriminant;
//! an abort means a caller violated a contract, and continuing past that
//! point is defined as undefined behavior by the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fatal;
pub mod opt;
pub mod res;

pub use fatal::fatal;
pub use opt::Opt;
pub use res::Res;
