//! Media cover handling for Cinevault.
//!
//! Covers arrive from metadata providers at arbitrary sizes; this crate
//! produces the fixed-height variants the UI serves. Decoding and scaling
//! are CPU bound and run on the shared worker pool, never on the async
//! runtime threads.

pub mod cover;
pub mod prelude;

pub use cover::CoverResizer;

// vim: ts=4
