//! Setting types and definitions
//!
//! Core types for the configuration subsystem: the closed set of setting
//! kinds, canonical string serialization, and the definition registry.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::prelude::*;

/// Semantic kind of a setting, used as the type tag in the definition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingKind {
	#[serde(rename = "bool")]
	Bool,
	#[serde(rename = "int")]
	Int,
	#[serde(rename = "string")]
	String,
	#[serde(rename = "enum")]
	Enum,
	#[serde(rename = "intset")]
	IntSet,
}

impl SettingKind {
	/// Get the kind name for error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingKind::Bool => "bool",
			SettingKind::Int => "int",
			SettingKind::String => "string",
			SettingKind::Enum => "enum",
			SettingKind::IntSet => "intset",
		}
	}
}

/// A typed setting value.
///
/// Every value has exactly one canonical string form; the repository stores
/// that form and bulk-save equality compares it.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
	Bool(bool),
	Int(i64),
	String(String),
	/// Canonical lowercase symbolic name of an enum variant
	Enum(&'static str),
	IntSet(BTreeSet<i64>),
}

impl SettingValue {
	pub fn kind(&self) -> SettingKind {
		match self {
			SettingValue::Bool(_) => SettingKind::Bool,
			SettingValue::Int(_) => SettingKind::Int,
			SettingValue::String(_) => SettingKind::String,
			SettingValue::Enum(_) => SettingKind::Enum,
			SettingValue::IntSet(_) => SettingKind::IntSet,
		}
	}

	/// Canonical string form: booleans as "true"/"false", ints in base 10,
	/// strings verbatim, enums as their lowercase symbolic name, int sets
	/// ascending and comma-separated (empty set serializes to "").
	pub fn to_canonical(&self) -> String {
		match self {
			SettingValue::Bool(b) => if *b { "true" } else { "false" }.to_string(),
			SettingValue::Int(i) => i.to_string(),
			SettingValue::String(s) => s.clone(),
			SettingValue::Enum(name) => (*name).to_string(),
			SettingValue::IntSet(set) => {
				set.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
			}
		}
	}
}

/// Default behavior of a setting
#[derive(Debug, Clone, PartialEq)]
pub enum SettingDefault {
	/// Fixed default value, returned on miss, never persisted implicitly
	Value(SettingValue),
	/// Persist-on-default: a fresh identifier is generated on first read and
	/// immediately written back, so the same value is returned forever after
	Generated,
}

/// Setting definition - one row of the closed setting table
#[derive(Debug, Clone)]
pub struct SettingDefinition {
	/// Canonical key (e.g. "RssSyncInterval"); lookups use the lowercase form
	pub key: String,

	/// Human-readable description
	pub description: String,

	/// Default value or generation marker
	pub default: SettingDefault,
}

impl SettingDefinition {
	/// Create a builder for constructing a SettingDefinition
	pub fn builder(key: impl Into<String>) -> SettingDefinitionBuilder {
		SettingDefinitionBuilder::new(key)
	}

	/// The type tag of this setting. Generated defaults are always strings.
	pub fn kind(&self) -> SettingKind {
		match &self.default {
			SettingDefault::Value(value) => value.kind(),
			SettingDefault::Generated => SettingKind::String,
		}
	}
}

/// Builder for SettingDefinition with fluent API
pub struct SettingDefinitionBuilder {
	key: String,
	description: Option<String>,
	default: Option<SettingDefault>,
}

impl SettingDefinitionBuilder {
	pub fn new(key: impl Into<String>) -> Self {
		Self { key: key.into(), description: None, default: None }
	}

	/// Set the description (required)
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Set the default value (required unless the setting is generated)
	pub fn default(mut self, value: SettingValue) -> Self {
		self.default = Some(SettingDefault::Value(value));
		self
	}

	/// Mark this setting as persist-on-default: the first read generates an
	/// identifier and writes it back, making it durable across restarts
	pub fn generated(mut self) -> Self {
		self.default = Some(SettingDefault::Generated);
		self
	}

	/// Build the SettingDefinition
	pub fn build(self) -> CvResult<SettingDefinition> {
		if self.key.trim().is_empty() {
			return Err(Error::ConfigError("Setting key must not be empty".into()));
		}

		let description = self
			.description
			.ok_or_else(|| Error::ConfigError("Setting description is required".into()))?;

		let default = self.default.ok_or_else(|| {
			Error::ConfigError(format!("Setting '{}' needs a default or generated()", self.key))
		})?;

		Ok(SettingDefinition { key: self.key, description, default })
	}
}

/// Mutable registry used while the setting catalog is assembled
pub struct SettingsRegistry {
	definitions: HashMap<String, SettingDefinition>,
}

impl SettingsRegistry {
	pub fn new() -> Self {
		Self { definitions: HashMap::new() }
	}

	/// Register a new setting definition (keyed by the normalized form)
	pub fn register(&mut self, def: SettingDefinition) -> CvResult<()> {
		let normalized = def.key.to_ascii_lowercase();
		if self.definitions.contains_key(&normalized) {
			return Err(Error::ConfigError(format!("Setting '{}' is already registered", def.key)));
		}

		tracing::debug!("Registering setting: {}", def.key);
		self.definitions.insert(normalized, def);
		Ok(())
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenSettingsRegistry {
		tracing::debug!("Freezing settings registry with {} definitions", self.definitions.len());
		FrozenSettingsRegistry { definitions: self.definitions }
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

impl Default for SettingsRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Immutable registry held by the config store
#[derive(Debug)]
pub struct FrozenSettingsRegistry {
	definitions: HashMap<String, SettingDefinition>,
}

impl FrozenSettingsRegistry {
	/// Get a setting definition by key (case-insensitive)
	pub fn get(&self, key: &str) -> Option<&SettingDefinition> {
		self.definitions.get(&key.to_ascii_lowercase())
	}

	/// List all registered settings
	pub fn list(&self) -> impl Iterator<Item = &SettingDefinition> {
		self.definitions.values()
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

/// A closed enumeration usable as a setting value.
///
/// The canonical string form is the lowercase symbolic name; parsing is
/// case-insensitive.
pub trait ConfigEnum: Sized + Copy + 'static {
	/// Type name used in coercion error messages
	const TYPE_NAME: &'static str;

	/// Canonical lowercase symbolic name
	fn as_str(&self) -> &'static str;

	/// Case-insensitive parse of a symbolic name
	fn parse(raw: &str) -> Option<Self>;
}

/// Proxy protocol for outbound indexer/metadata requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProxyKind {
	#[serde(rename = "http")]
	Http,
	#[serde(rename = "socks4")]
	Socks4,
	#[serde(rename = "socks5")]
	Socks5,
}

impl ConfigEnum for ProxyKind {
	const TYPE_NAME: &'static str = "ProxyKind";

	fn as_str(&self) -> &'static str {
		match self {
			ProxyKind::Http => "http",
			ProxyKind::Socks4 => "socks4",
			ProxyKind::Socks5 => "socks5",
		}
	}

	fn parse(raw: &str) -> Option<Self> {
		match raw.to_ascii_lowercase().as_str() {
			"http" => Some(ProxyKind::Http),
			"socks4" => Some(ProxyKind::Socks4),
			"socks5" => Some(ProxyKind::Socks5),
			_ => None,
		}
	}
}

/// TLS certificate validation policy for outbound requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertificateValidationKind {
	#[serde(rename = "enabled")]
	Enabled,
	#[serde(rename = "disabledforlocaladdresses")]
	DisabledForLocalAddresses,
	#[serde(rename = "disabled")]
	Disabled,
}

impl ConfigEnum for CertificateValidationKind {
	const TYPE_NAME: &'static str = "CertificateValidationKind";

	fn as_str(&self) -> &'static str {
		match self {
			CertificateValidationKind::Enabled => "enabled",
			CertificateValidationKind::DisabledForLocalAddresses => "disabledforlocaladdresses",
			CertificateValidationKind::Disabled => "disabled",
		}
	}

	fn parse(raw: &str) -> Option<Self> {
		match raw.to_ascii_lowercase().as_str() {
			"enabled" => Some(CertificateValidationKind::Enabled),
			"disabledforlocaladdresses" => Some(CertificateValidationKind::DisabledForLocalAddresses),
			"disabled" => Some(CertificateValidationKind::Disabled),
			_ => None,
		}
	}
}

/// Country whose certification board is used for movie ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertificationCountryKind {
	#[serde(rename = "au")]
	Au,
	#[serde(rename = "br")]
	Br,
	#[serde(rename = "ca")]
	Ca,
	#[serde(rename = "de")]
	De,
	#[serde(rename = "es")]
	Es,
	#[serde(rename = "fr")]
	Fr,
	#[serde(rename = "gb")]
	Gb,
	#[serde(rename = "ie")]
	Ie,
	#[serde(rename = "it")]
	It,
	#[serde(rename = "nz")]
	Nz,
	#[serde(rename = "us")]
	Us,
}

impl ConfigEnum for CertificationCountryKind {
	const TYPE_NAME: &'static str = "CertificationCountryKind";

	fn as_str(&self) -> &'static str {
		match self {
			CertificationCountryKind::Au => "au",
			CertificationCountryKind::Br => "br",
			CertificationCountryKind::Ca => "ca",
			CertificationCountryKind::De => "de",
			CertificationCountryKind::Es => "es",
			CertificationCountryKind::Fr => "fr",
			CertificationCountryKind::Gb => "gb",
			CertificationCountryKind::Ie => "ie",
			CertificationCountryKind::It => "it",
			CertificationCountryKind::Nz => "nz",
			CertificationCountryKind::Us => "us",
		}
	}

	fn parse(raw: &str) -> Option<Self> {
		match raw.to_ascii_lowercase().as_str() {
			"au" => Some(CertificationCountryKind::Au),
			"br" => Some(CertificationCountryKind::Br),
			"ca" => Some(CertificationCountryKind::Ca),
			"de" => Some(CertificationCountryKind::De),
			"es" => Some(CertificationCountryKind::Es),
			"fr" => Some(CertificationCountryKind::Fr),
			"gb" => Some(CertificationCountryKind::Gb),
			"ie" => Some(CertificationCountryKind::Ie),
			"it" => Some(CertificationCountryKind::It),
			"nz" => Some(CertificationCountryKind::Nz),
			"us" => Some(CertificationCountryKind::Us),
			_ => None,
		}
	}
}

/// Which date to stamp on imported media files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileDateKind {
	#[serde(rename = "none")]
	None,
	#[serde(rename = "cinemas")]
	Cinemas,
	#[serde(rename = "release")]
	Release,
}

impl ConfigEnum for FileDateKind {
	const TYPE_NAME: &'static str = "FileDateKind";

	fn as_str(&self) -> &'static str {
		match self {
			FileDateKind::None => "none",
			FileDateKind::Cinemas => "cinemas",
			FileDateKind::Release => "release",
		}
	}

	fn parse(raw: &str) -> Option<Self> {
		match raw.to_ascii_lowercase().as_str() {
			"none" => Some(FileDateKind::None),
			"cinemas" => Some(FileDateKind::Cinemas),
			"release" => Some(FileDateKind::Release),
			_ => None,
		}
	}
}

/// When to rescan a movie folder after a metadata refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RescanAfterRefreshKind {
	#[serde(rename = "always")]
	Always,
	#[serde(rename = "aftermanual")]
	AfterManual,
	#[serde(rename = "never")]
	Never,
}

impl ConfigEnum for RescanAfterRefreshKind {
	const TYPE_NAME: &'static str = "RescanAfterRefreshKind";

	fn as_str(&self) -> &'static str {
		match self {
			RescanAfterRefreshKind::Always => "always",
			RescanAfterRefreshKind::AfterManual => "aftermanual",
			RescanAfterRefreshKind::Never => "never",
		}
	}

	fn parse(raw: &str) -> Option<Self> {
		match raw.to_ascii_lowercase().as_str() {
			"always" => Some(RescanAfterRefreshKind::Always),
			"aftermanual" => Some(RescanAfterRefreshKind::AfterManual),
			"never" => Some(RescanAfterRefreshKind::Never),
			_ => None,
		}
	}
}

/// Policy for upgrading to proper/repack releases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProperDownloadKind {
	#[serde(rename = "preferandupgrade")]
	PreferAndUpgrade,
	#[serde(rename = "donotupgrade")]
	DoNotUpgrade,
	#[serde(rename = "donotprefer")]
	DoNotPrefer,
}

impl ConfigEnum for ProperDownloadKind {
	const TYPE_NAME: &'static str = "ProperDownloadKind";

	fn as_str(&self) -> &'static str {
		match self {
			ProperDownloadKind::PreferAndUpgrade => "preferandupgrade",
			ProperDownloadKind::DoNotUpgrade => "donotupgrade",
			ProperDownloadKind::DoNotPrefer => "donotprefer",
		}
	}

	fn parse(raw: &str) -> Option<Self> {
		match raw.to_ascii_lowercase().as_str() {
			"preferandupgrade" => Some(ProperDownloadKind::PreferAndUpgrade),
			"donotupgrade" => Some(ProperDownloadKind::DoNotUpgrade),
			"donotprefer" => Some(ProperDownloadKind::DoNotPrefer),
			_ => None,
		}
	}
}

/// Display format for movie runtimes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeFormatKind {
	#[serde(rename = "hoursminutes")]
	HoursMinutes,
	#[serde(rename = "minutes")]
	Minutes,
}

impl ConfigEnum for RuntimeFormatKind {
	const TYPE_NAME: &'static str = "RuntimeFormatKind";

	fn as_str(&self) -> &'static str {
		match self {
			RuntimeFormatKind::HoursMinutes => "hoursminutes",
			RuntimeFormatKind::Minutes => "minutes",
		}
	}

	fn parse(raw: &str) -> Option<Self> {
		match raw.to_ascii_lowercase().as_str() {
			"hoursminutes" => Some(RuntimeFormatKind::HoursMinutes),
			"minutes" => Some(RuntimeFormatKind::Minutes),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_canonical_forms() {
		assert_eq!(SettingValue::Bool(true).to_canonical(), "true");
		assert_eq!(SettingValue::Bool(false).to_canonical(), "false");
		assert_eq!(SettingValue::Int(-42).to_canonical(), "-42");
		assert_eq!(SettingValue::String("Backups".into()).to_canonical(), "Backups");
		assert_eq!(SettingValue::Enum(ProxyKind::Socks5.as_str()).to_canonical(), "socks5");

		let set: BTreeSet<i64> = [7, 3, 11].into_iter().collect();
		assert_eq!(SettingValue::IntSet(set).to_canonical(), "3,7,11");
		assert_eq!(SettingValue::IntSet(BTreeSet::new()).to_canonical(), "");
	}

	#[test]
	fn test_builder_requires_description() {
		let res = SettingDefinition::builder("RssSyncInterval")
			.default(SettingValue::Int(60))
			.build();
		assert!(matches!(res, Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_builder_requires_default() {
		let res = SettingDefinition::builder("RssSyncInterval")
			.description("RSS sync interval in minutes")
			.build();
		assert!(matches!(res, Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_generated_definition_is_string_kind() {
		let def = SettingDefinition::builder("ApiKey")
			.description("API key")
			.generated()
			.build()
			.unwrap();
		assert_eq!(def.kind(), SettingKind::String);
		assert_eq!(def.default, SettingDefault::Generated);
	}

	#[test]
	fn test_registry_rejects_duplicates() {
		let mut registry = SettingsRegistry::new();
		let def = || {
			SettingDefinition::builder("EnableMediaInfo")
				.description("Extract media info from files")
				.default(SettingValue::Bool(true))
				.build()
				.unwrap()
		};
		registry.register(def()).unwrap();
		// Duplicate detection is case-insensitive
		let mut dup = def();
		dup.key = "enablemediainfo".into();
		assert!(matches!(registry.register(dup), Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_frozen_lookup_is_case_insensitive() {
		let mut registry = SettingsRegistry::new();
		registry
			.register(
				SettingDefinition::builder("ProxyPort")
					.description("Proxy port")
					.default(SettingValue::Int(8080))
					.build()
					.unwrap(),
			)
			.unwrap();
		let frozen = registry.freeze();
		assert!(frozen.get("proxyport").is_some());
		assert!(frozen.get("PROXYPORT").is_some());
		assert!(frozen.get("proxyhost").is_none());
	}

	#[test]
	fn test_enum_parse_is_case_insensitive() {
		assert_eq!(ProxyKind::parse("HTTP"), Some(ProxyKind::Http));
		assert_eq!(ProxyKind::parse("Socks5"), Some(ProxyKind::Socks5));
		assert_eq!(ProxyKind::parse("gopher"), None);
		assert_eq!(
			ProperDownloadKind::parse("PreferAndUpgrade"),
			Some(ProperDownloadKind::PreferAndUpgrade)
		);
		assert_eq!(CertificationCountryKind::parse("US"), Some(CertificationCountryKind::Us));
		assert_eq!(CertificationCountryKind::parse("xx"), None);
	}
}

// vim: ts=4
