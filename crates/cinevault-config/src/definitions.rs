//! Setting catalog registration
//!
//! The closed set of settings the store knows about, registered per
//! functional area. New settings are added here, not at runtime.

use crate::prelude::*;
use crate::types::{
	CertificateValidationKind, CertificationCountryKind, ConfigEnum, FileDateKind,
	ProperDownloadKind, ProxyKind, RescanAfterRefreshKind, RuntimeFormatKind, SettingDefinition,
	SettingValue, SettingsRegistry,
};
use std::collections::BTreeSet;

/// Build the full, frozen setting catalog
pub fn build_registry() -> CvResult<crate::types::FrozenSettingsRegistry> {
	let mut registry = SettingsRegistry::new();

	register_media_settings(&mut registry)?;
	register_download_settings(&mut registry)?;
	register_indexer_settings(&mut registry)?;
	register_import_list_settings(&mut registry)?;
	register_ui_settings(&mut registry)?;
	register_proxy_settings(&mut registry)?;
	register_backup_settings(&mut registry)?;
	register_security_settings(&mut registry)?;

	Ok(registry.freeze())
}

/// Media management: importing, folder handling, permissions
fn register_media_settings(registry: &mut SettingsRegistry) -> CvResult<()> {
	registry.register(
		SettingDefinition::builder("AutoUnmonitorPreviouslyDownloadedMovies")
			.description("Stop monitoring movies that were deleted from disk")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("RecycleBin")
			.description("Folder deleted media files are moved to instead of being removed")
			.default(SettingValue::String(String::new()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("RecycleBinCleanupDays")
			.description("Days to keep files in the recycle bin before final removal")
			.default(SettingValue::Int(7))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("CreateEmptyMovieFolders")
			.description("Create movie folders during library scans even when no files exist")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("DeleteEmptyFolders")
			.description("Delete empty movie folders during scans and when files are removed")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("FileDate")
			.description("Which release date to stamp on imported files")
			.default(SettingValue::Enum(FileDateKind::None.as_str()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("RescanAfterRefresh")
			.description("When to rescan the movie folder after a metadata refresh")
			.default(SettingValue::Enum(RescanAfterRefreshKind::Always.as_str()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("AutoRenameFolders")
			.description("Rename movie folders when renaming files")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("SetPermissionsLinux")
			.description("Run chmod on imported files and created folders")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ChmodFolder")
			.description("Octal permissions applied to imported media folders")
			.default(SettingValue::String("755".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ChownGroup")
			.description("Group name or gid applied to imported media files")
			.default(SettingValue::String(String::new()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("SkipFreeSpaceCheckWhenImporting")
			.description("Import even when the destination is low on disk space")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("MinimumFreeSpaceWhenImporting")
			.description("Minimum free space (MB) required before importing")
			.default(SettingValue::Int(100))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("CopyUsingHardlinks")
			.description("Hardlink instead of copy when the download is still seeding")
			.default(SettingValue::Bool(true))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("EnableMediaInfo")
			.description("Extract video/audio information from media files")
			.default(SettingValue::Bool(true))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ImportExtraFiles")
			.description("Import matching extra files (subtitles, nfo) next to the movie file")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ExtraFileExtensions")
			.description("Comma-separated list of extra file extensions to import")
			.default(SettingValue::String("srt".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("CleanLibraryTags")
			.description("Tags selecting which library items the cleanup task may touch")
			.default(SettingValue::IntSet(BTreeSet::new()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("CleanupMetadataImages")
			.description("Remove orphaned cover images during housekeeping")
			.default(SettingValue::Bool(true))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("CertificationCountry")
			.description("Country whose certification board supplies movie ratings")
			.default(SettingValue::Enum(CertificationCountryKind::Us.as_str()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("MovieInfoLanguage")
			.description("Language id used when fetching movie metadata")
			.default(SettingValue::Int(1))
			.build()?,
	)?;

	Ok(())
}

/// Download client integration
fn register_download_settings(registry: &mut SettingsRegistry) -> CvResult<()> {
	registry.register(
		SettingDefinition::builder("EnableCompletedDownloadHandling")
			.description("Automatically import completed downloads")
			.default(SettingValue::Bool(true))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("RemoveCompletedDownloads")
			.description("Remove imported downloads from the download client history")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("AutoRedownloadFailed")
			.description("Automatically search for a different release after a failed download")
			.default(SettingValue::Bool(true))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("RemoveFailedDownloads")
			.description("Remove failed downloads from the download client history")
			.default(SettingValue::Bool(true))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("CheckForFinishedDownloadInterval")
			.description("Minutes between download client polls")
			.default(SettingValue::Int(1))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("DownloadClientHistoryLimit")
			.description("Number of history items to fetch from the download client")
			.default(SettingValue::Int(60))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("DownloadClientWorkingFolders")
			.description("Pipe-separated folder names the download client uses while unpacking")
			.default(SettingValue::String("_UNPACK_|_FAILED_".into()))
			.build()?,
	)?;

	Ok(())
}

/// Indexer and release-grabbing behavior
fn register_indexer_settings(registry: &mut SettingsRegistry) -> CvResult<()> {
	registry.register(
		SettingDefinition::builder("Retention")
			.description("Usenet retention in days (0 = unlimited)")
			.default(SettingValue::Int(0))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("RssSyncInterval")
			.description("Minutes between RSS sync runs")
			.default(SettingValue::Int(60))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("MaximumSize")
			.description("Maximum release size in MB to grab (0 = unlimited)")
			.default(SettingValue::Int(0))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("MinimumAge")
			.description("Minimum release age in minutes before grabbing")
			.default(SettingValue::Int(0))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("AvailabilityDelay")
			.description("Days to delay a search after a movie becomes available")
			.default(SettingValue::Int(0))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("DownloadPropersAndRepacks")
			.description("Whether proper/repack releases upgrade existing files")
			.default(SettingValue::Enum(ProperDownloadKind::PreferAndUpgrade.as_str()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("PreferIndexerFlags")
			.description("Prefer releases with special indexer flags when scoring")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("AllowHardcodedSubs")
			.description("Allow releases flagged as having hardcoded subtitles")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("WhitelistedHardcodedSubs")
			.description("Hardcoded-subtitle languages that are always allowed")
			.default(SettingValue::String(String::new()))
			.build()?,
	)?;

	Ok(())
}

/// Import lists
fn register_import_list_settings(registry: &mut SettingsRegistry) -> CvResult<()> {
	registry.register(
		SettingDefinition::builder("ImportListSyncInterval")
			.description("Hours between import list sync runs")
			.default(SettingValue::Int(24))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ListSyncLevel")
			.description("What to do with library items removed from import lists")
			.default(SettingValue::String("disabled".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ImportExclusions")
			.description("Comma-separated identifiers excluded from import list sync")
			.default(SettingValue::String(String::new()))
			.build()?,
	)?;

	Ok(())
}

/// Calendar and date/time display
fn register_ui_settings(registry: &mut SettingsRegistry) -> CvResult<()> {
	registry.register(
		SettingDefinition::builder("FirstDayOfWeek")
			.description("First day of the week in the calendar (0 = Sunday)")
			.default(SettingValue::Int(0))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("CalendarWeekColumnHeader")
			.description("Date format for calendar week column headers")
			.default(SettingValue::String("ddd M/D".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ShortDateFormat")
			.description("Short date display format")
			.default(SettingValue::String("MMM D YYYY".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("LongDateFormat")
			.description("Long date display format")
			.default(SettingValue::String("dddd, MMMM D YYYY".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("TimeFormat")
			.description("Time display format")
			.default(SettingValue::String("h(:mm)a".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ShowRelativeDates")
			.description("Show relative dates (today, yesterday) instead of absolute ones")
			.default(SettingValue::Bool(true))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("EnableColorImpairedMode")
			.description("Altered color style for color-impaired users")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("MovieRuntimeFormat")
			.description("Display format for movie runtimes")
			.default(SettingValue::Enum(RuntimeFormatKind::HoursMinutes.as_str()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("UILanguage")
			.description("Language id used for the interface")
			.default(SettingValue::Int(1))
			.build()?,
	)?;

	Ok(())
}

/// Outbound proxy (read-only at runtime, changed via bulk save)
fn register_proxy_settings(registry: &mut SettingsRegistry) -> CvResult<()> {
	registry.register(
		SettingDefinition::builder("ProxyEnabled")
			.description("Route outbound requests through a proxy")
			.default(SettingValue::Bool(false))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ProxyType")
			.description("Proxy protocol")
			.default(SettingValue::Enum(ProxyKind::Http.as_str()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ProxyHostname")
			.description("Proxy host name or address")
			.default(SettingValue::String(String::new()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ProxyPort")
			.description("Proxy port")
			.default(SettingValue::Int(8080))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ProxyUsername")
			.description("Proxy username")
			.default(SettingValue::String(String::new()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ProxyPassword")
			.description("Proxy password")
			.default(SettingValue::String(String::new()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ProxyBypassFilter")
			.description("Comma-separated host patterns that bypass the proxy")
			.default(SettingValue::String(String::new()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("ProxyBypassLocalAddresses")
			.description("Bypass the proxy for local addresses")
			.default(SettingValue::Bool(true))
			.build()?,
	)?;

	Ok(())
}

/// Backup scheduling
fn register_backup_settings(registry: &mut SettingsRegistry) -> CvResult<()> {
	registry.register(
		SettingDefinition::builder("BackupFolder")
			.description("Folder backups are written to (relative paths are under AppData)")
			.default(SettingValue::String("Backups".into()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("BackupInterval")
			.description("Days between automatic backups")
			.default(SettingValue::Int(7))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("BackupRetention")
			.description("Days to keep automatic backups")
			.default(SettingValue::Int(28))
			.build()?,
	)?;

	Ok(())
}

/// Generated secrets and certificate policy.
/// The generated values are persisted on first read so they stay stable
/// across restarts.
fn register_security_settings(registry: &mut SettingsRegistry) -> CvResult<()> {
	registry.register(
		SettingDefinition::builder("CertificateValidation")
			.description("TLS certificate validation policy for outbound requests")
			.default(SettingValue::Enum(CertificateValidationKind::Enabled.as_str()))
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("InstanceIdentifier")
			.description("Stable identifier reported to external media services")
			.generated()
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("HmacPassphrase")
			.description("Passphrase for HMAC signing of internal tokens")
			.generated()
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("HmacSalt")
			.description("Salt for HMAC signing of internal tokens")
			.generated()
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("RijndaelPassphrase")
			.description("Passphrase for encrypting stored credentials")
			.generated()
			.build()?,
	)?;

	registry.register(
		SettingDefinition::builder("RijndaelSalt")
			.description("Salt for encrypting stored credentials")
			.generated()
			.build()?,
	)?;

	Ok(())
}


// vim: ts=4
