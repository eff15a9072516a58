//! Pluggable raw allocation for the ballast foundation library.
//!
//! Defines the [`RawAllocator`] capability — allocate, deallocate, resize —
//! and a default [`SystemAllocator`] backed by the host's general-purpose
//! heap. Containers hold a borrowed `&dyn RawAllocator` and wrap every
//! allocation outcome in the signaling types from `ballast-core`; failure
//! is always [`Opt::None`](ballast_core::Opt), never a panic.
//!
//! This crate contains `unsafe` code: the system allocator calls into
//! `std::alloc` primitives, and the deallocate/resize paths trust the
//! caller's ownership claims (see the safety contracts on [`RawAllocator`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod raw;
pub mod system;

pub use raw::RawAllocator;
pub use system::{SystemAllocator, SYSTEM};
