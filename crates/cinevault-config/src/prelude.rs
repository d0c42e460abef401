pub use cinevault_types::prelude::*;

// vim: ts=4
