//! Typed configuration store for Cinevault.
//!
//! Settings live as raw strings in a persistent key/value repository (the
//! `ConfigAdapter`). This crate layers a closed, typed setting catalog on
//! top: a lazily-populated full-snapshot cache, typed accessors with
//! canonical string serialization, bulk-update diffing, and a single
//! "configuration saved" notification per bulk save.

pub mod definitions;
pub mod events;
pub mod prelude;
pub mod store;
pub mod types;

pub use events::{ConfigEvents, ConfigSavedEvent};
pub use store::ConfigStore;
pub use types::{
	CertificateValidationKind, CertificationCountryKind, ConfigEnum, FileDateKind,
	FrozenSettingsRegistry, ProperDownloadKind, ProxyKind, RescanAfterRefreshKind,
	RuntimeFormatKind, SettingDefault, SettingDefinition, SettingDefinitionBuilder, SettingKind,
	SettingValue, SettingsRegistry,
};

// vim: ts=4
