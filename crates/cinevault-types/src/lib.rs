//! Shared types, adapter traits, and core utilities for the Cinevault media manager.
//!
//! This crate contains the foundational types that are shared between the
//! feature crates and all adapter implementations. Extracting these into a
//! separate crate allows adapter crates to compile in parallel with the
//! feature crates.

pub mod config_adapter;
pub mod error;
pub mod prelude;
pub mod worker;

// vim: ts=4
