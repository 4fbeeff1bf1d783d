use super::Engine;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{api::TripAPI, entities::Trip, error::Error};

#[async_trait]
impl TripAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_trips(&self) -> Result<Vec<Trip>, Error> {
        self.store.list().await
    }

    #[tracing::instrument(skip(self))]
    async fn find_trip(&self, id: Uuid) -> Result<Trip, Error> {
        self.store.find(id).await
    }

    #[tracing::instrument(skip(self))]
    async fn create_trip(
        &self,
        from: String,
        to: String,
        date_time: Option<DateTime<Utc>>,
    ) -> Result<Trip, Error> {
        let trip = Trip::new(from, to, date_time);

        self.store.append(trip.clone()).await?;

        Ok(trip)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_trip(&self, _id: Uuid) -> Result<Vec<Trip>, Error> {
        // deletion of recorded trips is disabled, the list is returned as is
        self.store.list().await
    }
}
