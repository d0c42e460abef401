//! Configuration store with full-snapshot caching and bulk-save diffing
//!
//! The cache is either empty ("not loaded") or a complete mirror of the
//! repository at last load. Any write clears it wholesale; the next read
//! reloads the full snapshot. One mutex guards populate and clear, so no
//! caller can observe a partially populated cache and a clear can never
//! lose to an in-flight populate.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use cinevault_types::config_adapter::ConfigAdapter;

use crate::definitions;
use crate::events::ConfigEvents;
use crate::prelude::*;
use crate::types::{
	CertificateValidationKind, CertificationCountryKind, ConfigEnum, FileDateKind,
	FrozenSettingsRegistry, ProperDownloadKind, ProxyKind, RescanAfterRefreshKind,
	RuntimeFormatKind, SettingDefault, SettingDefinition, SettingValue,
};

#[derive(Debug)]
struct Inner {
	adapter: Arc<dyn ConfigAdapter>,
	registry: FrozenSettingsRegistry,
	events: ConfigEvents,
	cache: Mutex<HashMap<String, String>>,
}

/// Typed configuration store over a persistent key/value repository.
///
/// Cloning is cheap and clones share the cache; "another store instance over
/// the same repository" is expressed as a clone.
#[derive(Clone, Debug)]
pub struct ConfigStore {
	inner: Arc<Inner>,
}

impl ConfigStore {
	pub fn new(adapter: Arc<dyn ConfigAdapter>) -> CvResult<Self> {
		let registry = definitions::build_registry()?;
		Ok(Self {
			inner: Arc::new(Inner {
				adapter,
				registry,
				events: ConfigEvents::new(),
				cache: Mutex::new(HashMap::new()),
			}),
		})
	}

	/// Save-event bus; subscribe for bulk-save notifications
	pub fn events(&self) -> &ConfigEvents {
		&self.inner.events
	}

	/// The closed setting catalog
	pub fn registry(&self) -> &FrozenSettingsRegistry {
		&self.inner.registry
	}

	// Generic read/write path
	//*************************

	/// Read the raw string value for a key, falling back to `default` on a
	/// cache miss or an empty stored value.
	pub async fn get_string(&self, key: &str, default: &str) -> CvResult<String> {
		self.get_value(key, default, false).await
	}

	pub async fn get_bool(&self, key: &str, default: bool) -> CvResult<bool> {
		let raw = self.get_value(key, bool_canonical(default), false).await?;
		parse_bool(key, &raw)
	}

	pub async fn get_int(&self, key: &str, default: i64) -> CvResult<i64> {
		let raw = self.get_value(key, &default.to_string(), false).await?;
		parse_int(key, &raw)
	}

	pub async fn get_enum<T: ConfigEnum>(&self, key: &str, default: T) -> CvResult<T> {
		let raw = self.get_value(key, default.as_str(), false).await?;
		T::parse(&raw).ok_or_else(|| Error::TypeCoercion {
			key: key.to_ascii_lowercase().into(),
			value: raw.into(),
			expected: T::TYPE_NAME,
		})
	}

	/// Multi-valued integer tags. An empty or absent stored value yields the
	/// empty set, not an error.
	pub async fn get_int_set(&self, key: &str) -> CvResult<BTreeSet<i64>> {
		let raw = self.get_value(key, "", false).await?;
		parse_int_set(key, &raw)
	}

	pub async fn set_bool(&self, key: &str, value: bool) -> CvResult<()> {
		self.set_raw(key, bool_canonical(value)).await
	}

	pub async fn set_int(&self, key: &str, value: i64) -> CvResult<()> {
		self.set_raw(key, &value.to_string()).await
	}

	pub async fn set_string(&self, key: &str, value: &str) -> CvResult<()> {
		self.set_raw(key, value).await
	}

	pub async fn set_enum<T: ConfigEnum>(&self, key: &str, value: T) -> CvResult<()> {
		self.set_raw(key, value.as_str()).await
	}

	pub async fn set_int_set(&self, key: &str, value: &BTreeSet<i64>) -> CvResult<()> {
		let canonical = value.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
		self.set_raw(key, &canonical).await
	}

	/// Upsert a raw string value and invalidate the whole cache.
	/// No notification is emitted for individual writes.
	pub async fn set_raw(&self, key: &str, value: &str) -> CvResult<()> {
		let key = normalize_key(key)?;
		self.set_value(&key, value).await
	}

	/// Whether the repository holds an explicit row for the key.
	/// Queries the repository directly; never consults cache or defaults.
	pub async fn is_defined(&self, key: &str) -> CvResult<bool> {
		let key = normalize_key(key)?;
		self.inner.adapter.exists(&key).await
	}

	/// Current effective value (canonical string form) for every setting in
	/// the catalog, resolving defaults and settling generated secrets.
	pub async fn all_with_defaults(&self) -> CvResult<HashMap<String, String>> {
		let mut all = HashMap::with_capacity(self.inner.registry.len());
		for def in self.inner.registry.list() {
			let value = self.effective_value(def).await?;
			all.insert(def.key.to_ascii_lowercase(), value);
		}
		Ok(all)
	}

	/// Apply a bulk snapshot of settings (as submitted from a settings form).
	///
	/// Only deltas are written: an entry is skipped when its key is not in
	/// the catalog, its incoming value is `None`, or its canonical string
	/// form equals the current effective value. One save notification is
	/// published afterwards, whether or not anything changed.
	pub async fn save_config_map(&self, values: HashMap<String, Option<String>>) -> CvResult<()> {
		let current = self.all_with_defaults().await?;

		for (key, incoming) in &values {
			let Some(incoming) = incoming else { continue };
			let key = key.to_ascii_lowercase();
			let Some(current_value) = current.get(&key) else { continue };

			if current_value != incoming {
				self.set_value(&key, incoming).await?;
			}
		}

		self.inner.events.publish_saved();
		Ok(())
	}

	/// Atomically replace the cache with a fresh empty map
	pub async fn clear_cache(&self) {
		let mut cache = self.inner.cache.lock().await;
		*cache = HashMap::new();
	}

	async fn get_value(&self, key: &str, default: &str, persist: bool) -> CvResult<String> {
		let key = normalize_key(key)?;

		if let Some(value) = self.cached_value(&key).await? {
			if !value.is_empty() {
				return Ok(value);
			}
		}

		trace!("Using default config value for '{}' default:'{}'", key, default);

		if persist {
			self.set_value(&key, default).await?;
		}

		Ok(default.to_string())
	}

	/// Look up a key in the cache, populating the full snapshot first if the
	/// cache is empty. The lock is held across the repository load, so
	/// exactly one populate runs and concurrent readers see either the empty
	/// pre-load state or the complete snapshot, never anything in between.
	async fn cached_value(&self, key: &str) -> CvResult<Option<String>> {
		let mut cache = self.inner.cache.lock().await;

		if cache.is_empty() {
			debug!("Populating config cache from repository");
			let entries = self.inner.adapter.list().await?;
			for entry in entries {
				cache.insert(entry.key.to_ascii_lowercase(), entry.value.into_string());
			}
		}

		Ok(cache.get(key).cloned())
	}

	async fn set_value(&self, key: &str, value: &str) -> CvResult<()> {
		trace!("Writing setting to repository. key:'{}' value:'{}'", key, value);
		self.inner.adapter.upsert(key, value).await?;

		self.clear_cache().await;
		Ok(())
	}

	async fn effective_value(&self, def: &SettingDefinition) -> CvResult<String> {
		match &def.default {
			SettingDefault::Generated => {
				self.get_value(&def.key, &Uuid::new_v4().to_string(), true).await
			}
			SettingDefault::Value(value) => {
				self.get_value(&def.key, &value.to_canonical(), false).await
			}
		}
	}

	// Catalog-backed accessors
	//**************************
	// One accessor per setting; the registry is the single source of
	// defaults, so the typed helpers below resolve the default from the
	// definition before delegating to the generic path.

	fn definition(&self, key: &str) -> CvResult<&SettingDefinition> {
		self.inner
			.registry
			.get(key)
			.ok_or_else(|| Error::ConfigError(format!("Unknown setting: {}", key)))
	}

	async fn def_bool(&self, key: &str) -> CvResult<bool> {
		match &self.definition(key)?.default {
			SettingDefault::Value(SettingValue::Bool(default)) => {
				self.get_bool(key, *default).await
			}
			_ => Err(Error::ConfigError(format!("Setting '{}' is not a bool", key))),
		}
	}

	async fn def_int(&self, key: &str) -> CvResult<i64> {
		match &self.definition(key)?.default {
			SettingDefault::Value(SettingValue::Int(default)) => self.get_int(key, *default).await,
			_ => Err(Error::ConfigError(format!("Setting '{}' is not an int", key))),
		}
	}

	async fn def_string(&self, key: &str) -> CvResult<String> {
		match &self.definition(key)?.default {
			SettingDefault::Value(SettingValue::String(default)) => {
				let default = default.clone();
				self.get_string(key, &default).await
			}
			_ => Err(Error::ConfigError(format!("Setting '{}' is not a string", key))),
		}
	}

	async fn def_enum<T: ConfigEnum>(&self, key: &str) -> CvResult<T> {
		match &self.definition(key)?.default {
			SettingDefault::Value(SettingValue::Enum(name)) => {
				let default = T::parse(name).ok_or_else(|| {
					Error::ConfigError(format!(
						"Setting '{}' default is not a {}",
						key,
						T::TYPE_NAME
					))
				})?;
				self.get_enum(key, default).await
			}
			_ => Err(Error::ConfigError(format!("Setting '{}' is not an enum", key))),
		}
	}

	async fn def_generated(&self, key: &str) -> CvResult<String> {
		match &self.definition(key)?.default {
			SettingDefault::Generated => {
				self.get_value(key, &Uuid::new_v4().to_string(), true).await
			}
			_ => Err(Error::ConfigError(format!("Setting '{}' is not generated", key))),
		}
	}

	// Media management
	//******************

	pub async fn auto_unmonitor_previously_downloaded_movies(&self) -> CvResult<bool> {
		self.def_bool("AutoUnmonitorPreviouslyDownloadedMovies").await
	}

	pub async fn set_auto_unmonitor_previously_downloaded_movies(
		&self,
		value: bool,
	) -> CvResult<()> {
		self.set_bool("AutoUnmonitorPreviouslyDownloadedMovies", value).await
	}

	pub async fn recycle_bin(&self) -> CvResult<String> {
		self.def_string("RecycleBin").await
	}

	pub async fn set_recycle_bin(&self, value: &str) -> CvResult<()> {
		self.set_string("RecycleBin", value).await
	}

	pub async fn recycle_bin_cleanup_days(&self) -> CvResult<i64> {
		self.def_int("RecycleBinCleanupDays").await
	}

	pub async fn set_recycle_bin_cleanup_days(&self, value: i64) -> CvResult<()> {
		self.set_int("RecycleBinCleanupDays", value).await
	}

	pub async fn create_empty_movie_folders(&self) -> CvResult<bool> {
		self.def_bool("CreateEmptyMovieFolders").await
	}

	pub async fn set_create_empty_movie_folders(&self, value: bool) -> CvResult<()> {
		self.set_bool("CreateEmptyMovieFolders", value).await
	}

	pub async fn delete_empty_folders(&self) -> CvResult<bool> {
		self.def_bool("DeleteEmptyFolders").await
	}

	pub async fn set_delete_empty_folders(&self, value: bool) -> CvResult<()> {
		self.set_bool("DeleteEmptyFolders", value).await
	}

	pub async fn file_date(&self) -> CvResult<FileDateKind> {
		self.def_enum("FileDate").await
	}

	pub async fn set_file_date(&self, value: FileDateKind) -> CvResult<()> {
		self.set_enum("FileDate", value).await
	}

	pub async fn rescan_after_refresh(&self) -> CvResult<RescanAfterRefreshKind> {
		self.def_enum("RescanAfterRefresh").await
	}

	pub async fn set_rescan_after_refresh(&self, value: RescanAfterRefreshKind) -> CvResult<()> {
		self.set_enum("RescanAfterRefresh", value).await
	}

	pub async fn auto_rename_folders(&self) -> CvResult<bool> {
		self.def_bool("AutoRenameFolders").await
	}

	pub async fn set_auto_rename_folders(&self, value: bool) -> CvResult<()> {
		self.set_bool("AutoRenameFolders", value).await
	}

	pub async fn permissions_linux(&self) -> CvResult<bool> {
		self.def_bool("SetPermissionsLinux").await
	}

	pub async fn set_permissions_linux(&self, value: bool) -> CvResult<()> {
		self.set_bool("SetPermissionsLinux", value).await
	}

	pub async fn chmod_folder(&self) -> CvResult<String> {
		self.def_string("ChmodFolder").await
	}

	pub async fn set_chmod_folder(&self, value: &str) -> CvResult<()> {
		self.set_string("ChmodFolder", value).await
	}

	pub async fn chown_group(&self) -> CvResult<String> {
		self.def_string("ChownGroup").await
	}

	pub async fn set_chown_group(&self, value: &str) -> CvResult<()> {
		self.set_string("ChownGroup", value).await
	}

	pub async fn skip_free_space_check_when_importing(&self) -> CvResult<bool> {
		self.def_bool("SkipFreeSpaceCheckWhenImporting").await
	}

	pub async fn set_skip_free_space_check_when_importing(&self, value: bool) -> CvResult<()> {
		self.set_bool("SkipFreeSpaceCheckWhenImporting", value).await
	}

	pub async fn minimum_free_space_when_importing(&self) -> CvResult<i64> {
		self.def_int("MinimumFreeSpaceWhenImporting").await
	}

	pub async fn set_minimum_free_space_when_importing(&self, value: i64) -> CvResult<()> {
		self.set_int("MinimumFreeSpaceWhenImporting", value).await
	}

	pub async fn copy_using_hardlinks(&self) -> CvResult<bool> {
		self.def_bool("CopyUsingHardlinks").await
	}

	pub async fn set_copy_using_hardlinks(&self, value: bool) -> CvResult<()> {
		self.set_bool("CopyUsingHardlinks", value).await
	}

	pub async fn enable_media_info(&self) -> CvResult<bool> {
		self.def_bool("EnableMediaInfo").await
	}

	pub async fn set_enable_media_info(&self, value: bool) -> CvResult<()> {
		self.set_bool("EnableMediaInfo", value).await
	}

	pub async fn import_extra_files(&self) -> CvResult<bool> {
		self.def_bool("ImportExtraFiles").await
	}

	pub async fn set_import_extra_files(&self, value: bool) -> CvResult<()> {
		self.set_bool("ImportExtraFiles", value).await
	}

	pub async fn extra_file_extensions(&self) -> CvResult<String> {
		self.def_string("ExtraFileExtensions").await
	}

	pub async fn set_extra_file_extensions(&self, value: &str) -> CvResult<()> {
		self.set_string("ExtraFileExtensions", value).await
	}

	pub async fn clean_library_tags(&self) -> CvResult<BTreeSet<i64>> {
		self.get_int_set("CleanLibraryTags").await
	}

	pub async fn set_clean_library_tags(&self, value: &BTreeSet<i64>) -> CvResult<()> {
		self.set_int_set("CleanLibraryTags", value).await
	}

	pub async fn cleanup_metadata_images(&self) -> CvResult<bool> {
		self.def_bool("CleanupMetadataImages").await
	}

	pub async fn set_cleanup_metadata_images(&self, value: bool) -> CvResult<()> {
		self.set_bool("CleanupMetadataImages", value).await
	}

	pub async fn certification_country(&self) -> CvResult<CertificationCountryKind> {
		self.def_enum("CertificationCountry").await
	}

	pub async fn set_certification_country(
		&self,
		value: CertificationCountryKind,
	) -> CvResult<()> {
		self.set_enum("CertificationCountry", value).await
	}

	pub async fn movie_info_language(&self) -> CvResult<i64> {
		self.def_int("MovieInfoLanguage").await
	}

	pub async fn set_movie_info_language(&self, value: i64) -> CvResult<()> {
		self.set_int("MovieInfoLanguage", value).await
	}

	// Download client
	//*****************

	pub async fn enable_completed_download_handling(&self) -> CvResult<bool> {
		self.def_bool("EnableCompletedDownloadHandling").await
	}

	pub async fn set_enable_completed_download_handling(&self, value: bool) -> CvResult<()> {
		self.set_bool("EnableCompletedDownloadHandling", value).await
	}

	pub async fn remove_completed_downloads(&self) -> CvResult<bool> {
		self.def_bool("RemoveCompletedDownloads").await
	}

	pub async fn set_remove_completed_downloads(&self, value: bool) -> CvResult<()> {
		self.set_bool("RemoveCompletedDownloads", value).await
	}

	pub async fn auto_redownload_failed(&self) -> CvResult<bool> {
		self.def_bool("AutoRedownloadFailed").await
	}

	pub async fn set_auto_redownload_failed(&self, value: bool) -> CvResult<()> {
		self.set_bool("AutoRedownloadFailed", value).await
	}

	pub async fn remove_failed_downloads(&self) -> CvResult<bool> {
		self.def_bool("RemoveFailedDownloads").await
	}

	pub async fn set_remove_failed_downloads(&self, value: bool) -> CvResult<()> {
		self.set_bool("RemoveFailedDownloads", value).await
	}

	pub async fn check_for_finished_download_interval(&self) -> CvResult<i64> {
		self.def_int("CheckForFinishedDownloadInterval").await
	}

	pub async fn set_check_for_finished_download_interval(&self, value: i64) -> CvResult<()> {
		self.set_int("CheckForFinishedDownloadInterval", value).await
	}

	pub async fn download_client_history_limit(&self) -> CvResult<i64> {
		self.def_int("DownloadClientHistoryLimit").await
	}

	pub async fn set_download_client_history_limit(&self, value: i64) -> CvResult<()> {
		self.set_int("DownloadClientHistoryLimit", value).await
	}

	pub async fn download_client_working_folders(&self) -> CvResult<String> {
		self.def_string("DownloadClientWorkingFolders").await
	}

	pub async fn set_download_client_working_folders(&self, value: &str) -> CvResult<()> {
		self.set_string("DownloadClientWorkingFolders", value).await
	}

	// Indexers
	//**********

	pub async fn retention(&self) -> CvResult<i64> {
		self.def_int("Retention").await
	}

	pub async fn set_retention(&self, value: i64) -> CvResult<()> {
		self.set_int("Retention", value).await
	}

	pub async fn rss_sync_interval(&self) -> CvResult<i64> {
		self.def_int("RssSyncInterval").await
	}

	pub async fn set_rss_sync_interval(&self, value: i64) -> CvResult<()> {
		self.set_int("RssSyncInterval", value).await
	}

	pub async fn maximum_size(&self) -> CvResult<i64> {
		self.def_int("MaximumSize").await
	}

	pub async fn set_maximum_size(&self, value: i64) -> CvResult<()> {
		self.set_int("MaximumSize", value).await
	}

	pub async fn minimum_age(&self) -> CvResult<i64> {
		self.def_int("MinimumAge").await
	}

	pub async fn set_minimum_age(&self, value: i64) -> CvResult<()> {
		self.set_int("MinimumAge", value).await
	}

	pub async fn availability_delay(&self) -> CvResult<i64> {
		self.def_int("AvailabilityDelay").await
	}

	pub async fn set_availability_delay(&self, value: i64) -> CvResult<()> {
		self.set_int("AvailabilityDelay", value).await
	}

	pub async fn download_propers_and_repacks(&self) -> CvResult<ProperDownloadKind> {
		self.def_enum("DownloadPropersAndRepacks").await
	}

	pub async fn set_download_propers_and_repacks(
		&self,
		value: ProperDownloadKind,
	) -> CvResult<()> {
		self.set_enum("DownloadPropersAndRepacks", value).await
	}

	pub async fn prefer_indexer_flags(&self) -> CvResult<bool> {
		self.def_bool("PreferIndexerFlags").await
	}

	pub async fn set_prefer_indexer_flags(&self, value: bool) -> CvResult<()> {
		self.set_bool("PreferIndexerFlags", value).await
	}

	pub async fn allow_hardcoded_subs(&self) -> CvResult<bool> {
		self.def_bool("AllowHardcodedSubs").await
	}

	pub async fn set_allow_hardcoded_subs(&self, value: bool) -> CvResult<()> {
		self.set_bool("AllowHardcodedSubs", value).await
	}

	pub async fn whitelisted_hardcoded_subs(&self) -> CvResult<String> {
		self.def_string("WhitelistedHardcodedSubs").await
	}

	pub async fn set_whitelisted_hardcoded_subs(&self, value: &str) -> CvResult<()> {
		self.set_string("WhitelistedHardcodedSubs", value).await
	}

	// Import lists
	//**************

	pub async fn import_list_sync_interval(&self) -> CvResult<i64> {
		self.def_int("ImportListSyncInterval").await
	}

	pub async fn set_import_list_sync_interval(&self, value: i64) -> CvResult<()> {
		self.set_int("ImportListSyncInterval", value).await
	}

	pub async fn list_sync_level(&self) -> CvResult<String> {
		self.def_string("ListSyncLevel").await
	}

	pub async fn set_list_sync_level(&self, value: &str) -> CvResult<()> {
		self.set_string("ListSyncLevel", value).await
	}

	pub async fn import_exclusions(&self) -> CvResult<String> {
		self.def_string("ImportExclusions").await
	}

	pub async fn set_import_exclusions(&self, value: &str) -> CvResult<()> {
		self.set_string("ImportExclusions", value).await
	}

	// Calendar and display
	//**********************

	pub async fn first_day_of_week(&self) -> CvResult<i64> {
		self.def_int("FirstDayOfWeek").await
	}

	pub async fn set_first_day_of_week(&self, value: i64) -> CvResult<()> {
		self.set_int("FirstDayOfWeek", value).await
	}

	pub async fn calendar_week_column_header(&self) -> CvResult<String> {
		self.def_string("CalendarWeekColumnHeader").await
	}

	pub async fn set_calendar_week_column_header(&self, value: &str) -> CvResult<()> {
		self.set_string("CalendarWeekColumnHeader", value).await
	}

	pub async fn short_date_format(&self) -> CvResult<String> {
		self.def_string("ShortDateFormat").await
	}

	pub async fn set_short_date_format(&self, value: &str) -> CvResult<()> {
		self.set_string("ShortDateFormat", value).await
	}

	pub async fn long_date_format(&self) -> CvResult<String> {
		self.def_string("LongDateFormat").await
	}

	pub async fn set_long_date_format(&self, value: &str) -> CvResult<()> {
		self.set_string("LongDateFormat", value).await
	}

	pub async fn time_format(&self) -> CvResult<String> {
		self.def_string("TimeFormat").await
	}

	pub async fn set_time_format(&self, value: &str) -> CvResult<()> {
		self.set_string("TimeFormat", value).await
	}

	pub async fn show_relative_dates(&self) -> CvResult<bool> {
		self.def_bool("ShowRelativeDates").await
	}

	pub async fn set_show_relative_dates(&self, value: bool) -> CvResult<()> {
		self.set_bool("ShowRelativeDates", value).await
	}

	pub async fn enable_color_impaired_mode(&self) -> CvResult<bool> {
		self.def_bool("EnableColorImpairedMode").await
	}

	pub async fn set_enable_color_impaired_mode(&self, value: bool) -> CvResult<()> {
		self.set_bool("EnableColorImpairedMode", value).await
	}

	pub async fn movie_runtime_format(&self) -> CvResult<RuntimeFormatKind> {
		self.def_enum("MovieRuntimeFormat").await
	}

	pub async fn set_movie_runtime_format(&self, value: RuntimeFormatKind) -> CvResult<()> {
		self.set_enum("MovieRuntimeFormat", value).await
	}

	pub async fn ui_language(&self) -> CvResult<i64> {
		self.def_int("UILanguage").await
	}

	pub async fn set_ui_language(&self, value: i64) -> CvResult<()> {
		self.set_int("UILanguage", value).await
	}

	// Proxy (changed via bulk save only)
	//************************************

	pub async fn proxy_enabled(&self) -> CvResult<bool> {
		self.def_bool("ProxyEnabled").await
	}

	pub async fn proxy_type(&self) -> CvResult<ProxyKind> {
		self.def_enum("ProxyType").await
	}

	pub async fn proxy_hostname(&self) -> CvResult<String> {
		self.def_string("ProxyHostname").await
	}

	pub async fn proxy_port(&self) -> CvResult<i64> {
		self.def_int("ProxyPort").await
	}

	pub async fn proxy_username(&self) -> CvResult<String> {
		self.def_string("ProxyUsername").await
	}

	pub async fn proxy_password(&self) -> CvResult<String> {
		self.def_string("ProxyPassword").await
	}

	pub async fn proxy_bypass_filter(&self) -> CvResult<String> {
		self.def_string("ProxyBypassFilter").await
	}

	pub async fn proxy_bypass_local_addresses(&self) -> CvResult<bool> {
		self.def_bool("ProxyBypassLocalAddresses").await
	}

	// Backups
	//*********

	pub async fn backup_folder(&self) -> CvResult<String> {
		self.def_string("BackupFolder").await
	}

	pub async fn backup_interval(&self) -> CvResult<i64> {
		self.def_int("BackupInterval").await
	}

	pub async fn backup_retention(&self) -> CvResult<i64> {
		self.def_int("BackupRetention").await
	}

	// Security
	//**********

	pub async fn certificate_validation(&self) -> CvResult<CertificateValidationKind> {
		self.def_enum("CertificateValidation").await
	}

	pub async fn instance_identifier(&self) -> CvResult<String> {
		self.def_generated("InstanceIdentifier").await
	}

	pub async fn hmac_passphrase(&self) -> CvResult<String> {
		self.def_generated("HmacPassphrase").await
	}

	pub async fn hmac_salt(&self) -> CvResult<String> {
		self.def_generated("HmacSalt").await
	}

	pub async fn rijndael_passphrase(&self) -> CvResult<String> {
		self.def_generated("RijndaelPassphrase").await
	}

	pub async fn rijndael_salt(&self) -> CvResult<String> {
		self.def_generated("RijndaelSalt").await
	}
}

fn normalize_key(key: &str) -> CvResult<String> {
	if key.trim().is_empty() {
		return Err(Error::InvalidKey);
	}
	Ok(key.to_ascii_lowercase())
}

fn bool_canonical(value: bool) -> &'static str {
	if value { "true" } else { "false" }
}

fn parse_bool(key: &str, raw: &str) -> CvResult<bool> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"true" => Ok(true),
		"false" => Ok(false),
		_ => Err(Error::TypeCoercion {
			key: key.to_ascii_lowercase().into(),
			value: raw.into(),
			expected: "bool",
		}),
	}
}

fn parse_int(key: &str, raw: &str) -> CvResult<i64> {
	raw.trim().parse::<i64>().map_err(|_| Error::TypeCoercion {
		key: key.to_ascii_lowercase().into(),
		value: raw.into(),
		expected: "int",
	})
}

fn parse_int_set(key: &str, raw: &str) -> CvResult<BTreeSet<i64>> {
	let mut set = BTreeSet::new();
	if raw.trim().is_empty() {
		return Ok(set);
	}

	for part in raw.split(',') {
		let n = part.trim().parse::<i64>().map_err(|_| Error::TypeCoercion {
			key: key.to_ascii_lowercase().into(),
			value: raw.into(),
			expected: "intset",
		})?;
		set.insert(n);
	}
	Ok(set)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalize_key() {
		assert_eq!(normalize_key("ProxyPort").unwrap(), "proxyport");
		assert!(matches!(normalize_key(""), Err(Error::InvalidKey)));
		assert!(matches!(normalize_key("   "), Err(Error::InvalidKey)));
	}

	#[test]
	fn test_parse_bool() {
		assert_eq!(parse_bool("k", "true").unwrap(), true);
		assert_eq!(parse_bool("k", "False").unwrap(), false);
		assert!(matches!(parse_bool("k", "yes"), Err(Error::TypeCoercion { .. })));
	}

	#[test]
	fn test_parse_int() {
		assert_eq!(parse_int("k", "42").unwrap(), 42);
		assert_eq!(parse_int("k", " -7 ").unwrap(), -7);
		assert!(matches!(parse_int("k", "notanumber"), Err(Error::TypeCoercion { .. })));
	}

	#[test]
	fn test_parse_int_set() {
		assert!(parse_int_set("k", "").unwrap().is_empty());
		assert!(parse_int_set("k", "  ").unwrap().is_empty());

		let set = parse_int_set("k", "3, 1,2").unwrap();
		assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);

		assert!(matches!(parse_int_set("k", "1,x,3"), Err(Error::TypeCoercion { .. })));
	}

	#[test]
	fn test_coercion_error_names_key_and_value() {
		let err = parse_int("RssSyncInterval", "notanumber").unwrap_err();
		match err {
			Error::TypeCoercion { key, value, expected } => {
				assert_eq!(key.as_ref(), "rsssyncinterval");
				assert_eq!(value.as_ref(), "notanumber");
				assert_eq!(expected, "int");
			}
			other => panic!("unexpected error: {:?}", other),
		}
	}
}

// vim: ts=4
