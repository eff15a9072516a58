//! Benchmarks for the ballast foundation library.
//!
//! The measurable targets live under `benches/`; this library exists so the
//! bench crate participates in the workspace build.
