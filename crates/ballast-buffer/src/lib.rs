//! Growable contiguous storage for the ballast foundation library.
//!
//! [`Buffer`] owns an allocator-backed block of `capacity` slots holding
//! `len` live elements. Every capacity change goes through the borrowed
//! [`RawAllocator`](ballast_alloc::RawAllocator) and surfaces failure as a
//! [`Res`](ballast_core::Res); possibly-absent queries return an
//! [`Opt`](ballast_core::Opt). Out-of-bounds indexed access is a contract
//! violation and aborts through the fatal sink.
//!
//! This crate contains `unsafe` code: element slots are raw memory managed
//! with `ptr::read`/`ptr::write`, and drop ordering (elements first, block
//! second) is enforced by hand. The safety argument for each block is
//! local to its use site.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod buffer;
pub mod error;

pub use buffer::Buffer;
pub use error::BufferError;
