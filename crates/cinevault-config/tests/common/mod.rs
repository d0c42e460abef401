//! Shared test fixtures for the config store integration tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use cinevault_types::config_adapter::{ConfigAdapter, ConfigEntry};
use cinevault_types::prelude::*;

/// In-memory config repository that counts adapter calls, so tests can
/// assert how often the store actually hits the backend.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
	rows: Mutex<HashMap<String, String>>,
	list_delay: Option<Duration>,
	list_calls: AtomicUsize,
	upsert_calls: AtomicUsize,
}

impl MemoryAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adapter whose list() sleeps, widening the window for concurrent
	/// readers to pile up on the populate path
	pub fn with_list_delay(delay: Duration) -> Self {
		Self { list_delay: Some(delay), ..Self::default() }
	}

	pub fn list_calls(&self) -> usize {
		self.list_calls.load(Ordering::SeqCst)
	}

	pub fn upsert_calls(&self) -> usize {
		self.upsert_calls.load(Ordering::SeqCst)
	}

	pub fn reset_counters(&self) {
		self.list_calls.store(0, Ordering::SeqCst);
		self.upsert_calls.store(0, Ordering::SeqCst);
	}

	/// Raw stored value, bypassing the store entirely
	pub fn raw(&self, key: &str) -> Option<String> {
		self.rows.lock().get(key).cloned()
	}
}

#[async_trait]
impl ConfigAdapter for MemoryAdapter {
	async fn read(&self, key: &str) -> CvResult<Option<ConfigEntry>> {
		let rows = self.rows.lock();
		Ok(rows
			.get(key)
			.map(|value| ConfigEntry { key: key.into(), value: value.as_str().into() }))
	}

	async fn list(&self) -> CvResult<Vec<ConfigEntry>> {
		self.list_calls.fetch_add(1, Ordering::SeqCst);
		if let Some(delay) = self.list_delay {
			tokio::time::sleep(delay).await;
		}

		let rows = self.rows.lock();
		Ok(rows
			.iter()
			.map(|(key, value)| ConfigEntry {
				key: key.as_str().into(),
				value: value.as_str().into(),
			})
			.collect())
	}

	async fn upsert(&self, key: &str, value: &str) -> CvResult<()> {
		self.upsert_calls.fetch_add(1, Ordering::SeqCst);
		self.rows.lock().insert(key.to_string(), value.to_string());
		Ok(())
	}

	async fn exists(&self, key: &str) -> CvResult<bool> {
		Ok(self.rows.lock().contains_key(key))
	}
}

// vim: ts=4
