//! Configuration repository adapter trait
//!
//! The config store keeps settings as raw strings in a persistent key/value
//! repository. Adapters implement this trait over an embedded store; keys
//! passed in are already normalized to lowercase by the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

/// A single persisted setting row
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConfigEntry {
	pub key: Box<str>,
	pub value: Box<str>,
}

#[async_trait]
pub trait ConfigAdapter: Debug + Send + Sync {
	/// Read a single entry by normalized key
	async fn read(&self, key: &str) -> CvResult<Option<ConfigEntry>>;

	/// Full snapshot of all entries, used to populate the store cache
	async fn list(&self) -> CvResult<Vec<ConfigEntry>>;

	/// Insert-or-replace, atomic per key
	async fn upsert(&self, key: &str, value: &str) -> CvResult<()>;

	/// Whether an explicit row exists for the key
	async fn exists(&self, key: &str) -> CvResult<bool>;
}

// vim: ts=4
