//! SQLite-backed configuration repository.
//!
//! Stores settings as raw strings in a single `config` table. Keys arrive
//! already normalized from the store layer; this crate does no casing or
//! type handling of its own.

use async_trait::async_trait;
use sqlx::{
	Row,
	sqlite::{self, SqlitePool},
};
use std::path::Path;

use cinevault::{
	config_adapter::{ConfigAdapter, ConfigEntry},
	prelude::*,
};

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

#[derive(Debug)]
pub struct ConfigAdapterSqlite {
	db: SqlitePool,
}

impl ConfigAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> CvResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		init_db(&db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}
}

#[async_trait]
impl ConfigAdapter for ConfigAdapterSqlite {
	async fn read(&self, key: &str) -> CvResult<Option<ConfigEntry>> {
		let row = sqlx::query("SELECT key, value FROM config WHERE key = ?1")
			.bind(key)
			.fetch_optional(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		Ok(row.map(|row| ConfigEntry {
			key: row.get::<String, _>("key").into(),
			value: row.get::<Option<String>, _>("value").unwrap_or_default().into(),
		}))
	}

	async fn list(&self) -> CvResult<Vec<ConfigEntry>> {
		let rows = sqlx::query("SELECT key, value FROM config")
			.fetch_all(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		Ok(rows
			.into_iter()
			.map(|row| ConfigEntry {
				key: row.get::<String, _>("key").into(),
				value: row.get::<Option<String>, _>("value").unwrap_or_default().into(),
			})
			.collect())
	}

	async fn upsert(&self, key: &str, value: &str) -> CvResult<()> {
		sqlx::query("INSERT OR REPLACE INTO config (key, value) VALUES (?1, ?2)")
			.bind(key)
			.bind(value)
			.execute(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		Ok(())
	}

	async fn exists(&self, key: &str) -> CvResult<bool> {
		let row = sqlx::query("SELECT 1 FROM config WHERE key = ?1")
			.bind(key)
			.fetch_optional(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		Ok(row.is_some())
	}
}

async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS config (
			key text NOT NULL,
			value text,
			PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;
	Ok(())
}

// vim: ts=4
