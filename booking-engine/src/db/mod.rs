//! Database Module
//!
//! Owns the embedded SurrealDB instance and defines the booking schema.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::db::repository::RepoResult;

/// Database service — owns the embedded store handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the store at `path` and apply the booking schema
    pub async fn new(path: &str) -> RepoResult<Self> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path).await?;
        db.use_ns("booking").use_db("booking").await?;

        define_schema(&db).await?;
        tracing::info!("Booking store ready at {path}");

        Ok(Self { db })
    }
}

async fn define_schema(db: &Surreal<Db>) -> RepoResult<()> {
    db.query("DEFINE TABLE IF NOT EXISTS booking SCHEMAFULL")
        .await?
        .check()?;
    db.query("DEFINE FIELD IF NOT EXISTS table_id ON booking TYPE option<string>")
        .await?
        .check()?;
    db.query("DEFINE FIELD IF NOT EXISTS booking_time ON booking TYPE string")
        .await?
        .check()?;
    db.query(
        "DEFINE FIELD IF NOT EXISTS booking_type ON booking TYPE string \
         ASSERT $value INSIDE ['dine_in', 'walk_in', 'steak_preorder']",
    )
    .await?
    .check()?;
    db.query(
        "DEFINE FIELD IF NOT EXISTS status ON booking TYPE string \
         ASSERT $value INSIDE ['pending', 'confirmed', 'seated', 'ready', 'approved', 'paid', \
         'completed', 'cancelled']",
    )
    .await?
    .check()?;
    db.query("DEFINE FIELD IF NOT EXISTS created_at ON booking TYPE datetime")
        .await?
        .check()?;
    db.query("DEFINE INDEX IF NOT EXISTS booking_time_idx ON booking FIELDS booking_time")
        .await?
        .check()?;
    Ok(())
}
