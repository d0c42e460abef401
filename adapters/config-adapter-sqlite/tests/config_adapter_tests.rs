//! Integration tests for the SQLite configuration repository
//!
//! Covers the raw adapter contract (read, list, upsert, exists) and the
//! full stack: the typed config store running over a real database file,
//! including persistence across reopen.

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use tempfile::TempDir;

	use cinevault::config_adapter::ConfigAdapter;
	use cinevault::prelude::*;
	use cinevault_config::ConfigStore;
	use cinevault_config_adapter_sqlite::ConfigAdapterSqlite;

	/// Helper to create a test adapter with a temporary database
	async fn create_test_adapter() -> CvResult<(ConfigAdapterSqlite, TempDir)> {
		let tmp_dir = TempDir::new().expect("Failed to create temp dir");
		let db_path = tmp_dir.path().join("config.db");
		let adapter = ConfigAdapterSqlite::new(db_path).await?;
		Ok((adapter, tmp_dir))
	}

	#[tokio::test]
	async fn test_upsert_and_read() {
		let (adapter, _tmp) = create_test_adapter().await.expect("Failed to create adapter");

		adapter.upsert("rsssyncinterval", "30").await.expect("Failed to upsert");

		let entry = adapter
			.read("rsssyncinterval")
			.await
			.expect("Failed to read")
			.expect("Entry missing");
		assert_eq!(entry.key.as_ref(), "rsssyncinterval");
		assert_eq!(entry.value.as_ref(), "30");

		assert!(adapter.read("nosuchkey").await.expect("Failed to read").is_none());
	}

	#[tokio::test]
	async fn test_upsert_overwrites_existing_row() {
		let (adapter, _tmp) = create_test_adapter().await.expect("Failed to create adapter");

		adapter.upsert("recyclebin", "/mnt/trash").await.expect("Failed to upsert");
		adapter.upsert("recyclebin", "/mnt/bin").await.expect("Failed to upsert");

		let entry = adapter
			.read("recyclebin")
			.await
			.expect("Failed to read")
			.expect("Entry missing");
		assert_eq!(entry.value.as_ref(), "/mnt/bin");

		// Still a single row
		assert_eq!(adapter.list().await.expect("Failed to list").len(), 1);
	}

	#[tokio::test]
	async fn test_list_returns_all_rows() {
		let (adapter, _tmp) = create_test_adapter().await.expect("Failed to create adapter");

		assert!(adapter.list().await.expect("Failed to list").is_empty());

		adapter.upsert("retention", "0").await.expect("Failed to upsert");
		adapter.upsert("proxyport", "8080").await.expect("Failed to upsert");

		let mut keys: Vec<_> = adapter
			.list()
			.await
			.expect("Failed to list")
			.into_iter()
			.map(|entry| entry.key)
			.collect();
		keys.sort();
		assert_eq!(keys.len(), 2);
		assert_eq!(keys[0].as_ref(), "proxyport");
		assert_eq!(keys[1].as_ref(), "retention");
	}

	#[tokio::test]
	async fn test_exists() {
		let (adapter, _tmp) = create_test_adapter().await.expect("Failed to create adapter");

		assert!(!adapter.exists("maximumsize").await.expect("Failed to query"));
		adapter.upsert("maximumsize", "0").await.expect("Failed to upsert");
		assert!(adapter.exists("maximumsize").await.expect("Failed to query"));
	}

	#[tokio::test]
	async fn test_values_persist_across_reopen() {
		let tmp_dir = TempDir::new().expect("Failed to create temp dir");
		let db_path = tmp_dir.path().join("config.db");

		let adapter1 = ConfigAdapterSqlite::new(&db_path)
			.await
			.expect("Failed to create first adapter");
		adapter1.upsert("chownGroup", "media").await.expect("Failed to upsert");
		drop(adapter1);

		let adapter2 = ConfigAdapterSqlite::new(&db_path)
			.await
			.expect("Failed to create second adapter");
		let entry = adapter2
			.read("chownGroup")
			.await
			.expect("Failed to read")
			.expect("Entry missing");
		assert_eq!(entry.value.as_ref(), "media");
	}

	#[tokio::test]
	async fn test_store_over_sqlite_keeps_generated_secrets() {
		let tmp_dir = TempDir::new().expect("Failed to create temp dir");
		let db_path = tmp_dir.path().join("config.db");

		// First run generates and persists the identifier
		let adapter = ConfigAdapterSqlite::new(&db_path)
			.await
			.expect("Failed to create first adapter");
		let store = ConfigStore::new(Arc::new(adapter)).expect("Failed to build store");
		let first = store.instance_identifier().await.expect("Failed to get");
		drop(store);

		// A fresh store over the same database sees the same identifier
		let adapter = ConfigAdapterSqlite::new(&db_path)
			.await
			.expect("Failed to create second adapter");
		let store = ConfigStore::new(Arc::new(adapter)).expect("Failed to build store");
		let second = store.instance_identifier().await.expect("Failed to get");

		assert_eq!(first, second);
	}

	#[tokio::test]
	async fn test_store_typed_round_trip_over_sqlite() {
		let tmp_dir = TempDir::new().expect("Failed to create temp dir");
		let db_path = tmp_dir.path().join("config.db");

		let adapter = ConfigAdapterSqlite::new(&db_path)
			.await
			.expect("Failed to create adapter");
		let store = ConfigStore::new(Arc::new(adapter)).expect("Failed to build store");

		store.set_rss_sync_interval(45).await.expect("Failed to set");
		store.set_enable_media_info(false).await.expect("Failed to set");

		assert_eq!(store.rss_sync_interval().await.expect("Failed to get"), 45);
		assert!(!store.enable_media_info().await.expect("Failed to get"));
	}
}

// vim: ts=4
