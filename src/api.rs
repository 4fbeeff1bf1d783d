use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{MapScene, RouteResult, Trip, TripSummary};
use crate::error::Error;

#[async_trait]
pub trait TripAPI {
    async fn list_trips(&self) -> Result<Vec<Trip>, Error>;

    async fn find_trip(&self, id: Uuid) -> Result<Trip, Error>;

    async fn create_trip(
        &self,
        from: String,
        to: String,
        date_time: Option<DateTime<Utc>>,
    ) -> Result<Trip, Error>;

    async fn delete_trip(&self, id: Uuid) -> Result<Vec<Trip>, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn resolve_route(&self, from: &str, to: &str) -> Option<RouteResult>;

    async fn trip_summary(&self, id: Uuid) -> Result<TripSummary, Error>;

    async fn trip_map(&self, id: Uuid) -> Result<MapScene, Error>;
}

pub trait API: TripAPI + RouteAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
