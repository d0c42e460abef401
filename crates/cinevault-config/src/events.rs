//! Configuration save notifications
//!
//! Interested parties (scheduler, proxy layer, UI push) subscribe for a
//! signal that a bulk configuration save happened. The event carries no
//! payload beyond its timestamp; subscribers re-read what they care about.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::prelude::*;

/// Emitted exactly once per bulk configuration save
#[derive(Clone, Debug, Serialize)]
pub struct ConfigSavedEvent {
	pub saved_at: u64,
}

/// Event bus configuration
#[derive(Clone, Debug)]
pub struct EventsConfig {
	/// Maximum number of undelivered events to buffer per subscriber
	pub buffer_size: usize,
}

impl Default for EventsConfig {
	fn default() -> Self {
		Self { buffer_size: 16 }
	}
}

/// Broadcast bus for configuration events
#[derive(Debug)]
pub struct ConfigEvents {
	sender: broadcast::Sender<ConfigSavedEvent>,
}

impl ConfigEvents {
	/// Create a new bus with default config
	pub fn new() -> Self {
		Self::with_config(EventsConfig::default())
	}

	/// Create with custom config
	pub fn with_config(config: EventsConfig) -> Self {
		let (sender, _receiver) = broadcast::channel(config.buffer_size);
		Self { sender }
	}

	/// Subscribe to configuration save events
	pub fn subscribe(&self) -> broadcast::Receiver<ConfigSavedEvent> {
		self.sender.subscribe()
	}

	/// Publish a save event. Lagging or absent subscribers are not an error.
	pub(crate) fn publish_saved(&self) {
		let event = ConfigSavedEvent { saved_at: now_timestamp() };
		let delivered = self.sender.send(event).unwrap_or(0);
		debug!("Config saved event published to {} subscribers", delivered);
	}
}

impl Default for ConfigEvents {
	fn default() -> Self {
		Self::new()
	}
}

/// Get current timestamp
fn now_timestamp() -> u64 {
	std::time::SystemTime::now()
		.duration_since(std::time::UNIX_EPOCH)
		.unwrap_or_default()
		.as_secs()
}


// vim: ts=4
