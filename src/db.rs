use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, types::Json, Executor, Pool, Postgres, Row};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::entities::Trip;
use crate::error::{invalid_input_error, Error};

/// Repository the trip workflows write through. Trips are append-only and
/// listed in insertion order; there is no removal.
#[async_trait]
pub trait TripStore {
    async fn append(&self, trip: Trip) -> Result<(), Error>;
    async fn list(&self) -> Result<Vec<Trip>, Error>;
    async fn find(&self, id: Uuid) -> Result<Trip, Error>;
}

pub type DynTripStore = Arc<dyn TripStore + Send + Sync>;

/// Session-scoped store, the ordered list the original UI kept in view state.
pub struct MemoryStore {
    trips: Mutex<Vec<Trip>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            trips: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TripStore for MemoryStore {
    async fn append(&self, trip: Trip) -> Result<(), Error> {
        self.trips.lock().await.push(trip);

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Trip>, Error> {
        Ok(self.trips.lock().await.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Trip, Error> {
        let trips = self.trips.lock().await;

        trips
            .iter()
            .find(|trip| trip.id == id)
            .cloned()
            .ok_or_else(invalid_input_error)
    }
}

/// Durable store (KV over jsonb). The bigserial column preserves insertion
/// order across restarts.
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    #[tracing::instrument(name = "PgStore::new", skip_all)]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        pool.execute(
            "CREATE TABLE IF NOT EXISTS trips (seq BIGSERIAL PRIMARY KEY, id UUID NOT NULL UNIQUE, data JSONB NOT NULL)",
        )
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl TripStore for PgStore {
    async fn append(&self, trip: Trip) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO trips (id, data) VALUES ($1, $2)")
                .bind(&trip.id)
                .bind(Json(&trip)),
        )
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Trip>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query("SELECT data FROM trips ORDER BY seq"))
            .await?;

        let mut trips = Vec::with_capacity(rows.len());

        for row in rows {
            let Json(trip): Json<Trip> = row.try_get("data")?;
            trips.push(trip);
        }

        Ok(trips)
    }

    async fn find(&self, id: Uuid) -> Result<Trip, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM trips WHERE id = $1").bind(&id))
            .await?;

        let result = maybe_result.ok_or_else(invalid_input_error)?;
        let Json(trip): Json<Trip> = result.try_get("data")?;

        Ok(trip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_lists_in_insertion_order() {
        let store = MemoryStore::new();

        let first = Trip::new("A".into(), "B".into(), None);
        let second = Trip::new("C".into(), "D".into(), None);

        store.append(first.clone()).await.unwrap();
        store.append(second.clone()).await.unwrap();

        let trips = store.list().await.unwrap();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].id, first.id);
        assert_eq!(trips[1].id, second.id);
    }

    #[tokio::test]
    async fn memory_store_find_unknown_id_is_invalid_input() {
        let store = MemoryStore::new();

        let err = store.find(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.code, 101);
    }
}
