//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use stocks_core::{SeedStock, StockError, StockRecord, StockStore};

pub const IN_MEMORY_PATH: &str = ":memory:";

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        if database_path == IN_MEMORY_PATH {
            return Self::in_memory().await;
        }

        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create database directory: {}", parent.display())
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        Self::from_pool(pool).await
    }

    /// Private in-memory database; a single connection keeps every query on
    /// the same database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .context("Invalid in-memory SQLite options")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS stocks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                ticker TEXT UNIQUE NOT NULL,
                price REAL NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stocks")
            .fetch_one(&*self.pool)
            .await?;

        Ok(count)
    }

    /// Insert the seed rows if the table is empty. Returns how many were inserted.
    pub async fn seed_if_empty(&self, seed: &[SeedStock]) -> Result<usize> {
        tracing::info!("[Seeding] Checking if seed data is needed...");

        if self.count().await? > 0 {
            tracing::info!("[Seeding] Database already contains data. Skipping seeding.");
            return Ok(0);
        }

        tracing::info!("[Seeding] No data found. Inserting {} stocks...", seed.len());

        let mut tx = self.pool.begin().await?;
        for stock in seed {
            sqlx::query(
                r#"
                INSERT INTO stocks (ticker, price, updated_at)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(&stock.ticker)
            .bind(stock.price)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to seed stock {}", stock.ticker))?;
        }
        tx.commit().await?;

        tracing::info!("[Seeding] Seed data insertion complete.");

        Ok(seed.len())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl StockStore for Database {
    async fn find_by_ticker(&self, ticker: &str) -> stocks_core::Result<Option<StockRecord>> {
        let row: Option<StockRow> = sqlx::query_as(
            r#"
            SELECT id, ticker, price, updated_at FROM stocks WHERE ticker = ?1
            "#,
        )
        .bind(ticker)
        .fetch_optional(&*self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn save(&self, record: &StockRecord) -> stocks_core::Result<StockRecord> {
        let mut saved = record.clone();
        saved.touch();

        let result = sqlx::query(
            r#"
            UPDATE stocks SET price = ?1, updated_at = ?2 WHERE ticker = ?3
            "#,
        )
        .bind(saved.price)
        .bind(saved.updated_at)
        .bind(&saved.ticker)
        .execute(&*self.pool)
        .await
        .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(StockError::NotFound(saved.ticker));
        }

        Ok(saved)
    }
}

fn store_error(e: sqlx::Error) -> StockError {
    StockError::StoreUnavailable(e.to_string())
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct StockRow {
    id: i64,
    ticker: String,
    price: f64,
    updated_at: DateTime<Utc>,
}

impl From<StockRow> for StockRecord {
    fn from(r: StockRow) -> Self {
        StockRecord {
            id: r.id,
            ticker: r.ticker,
            price: r.price,
            updated_at: r.updated_at,
        }
    }
}
