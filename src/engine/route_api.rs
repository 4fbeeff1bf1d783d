use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::RouteAPI,
    entities::{MapScene, RouteResult, TripSummary},
    error::Error,
};

#[async_trait]
impl RouteAPI for Engine {
    /// Geocode origin, geocode destination, request a driving route. Each
    /// stage short-circuits on zero candidates, and every failure mode
    /// collapses to `None` so the caller keeps its previous display state.
    #[tracing::instrument(skip(self))]
    async fn resolve_route(&self, from: &str, to: &str) -> Option<RouteResult> {
        self.try_resolve(from, to).await.ok().flatten()
    }

    #[tracing::instrument(skip(self))]
    async fn trip_summary(&self, id: Uuid) -> Result<TripSummary, Error> {
        let trip = self.store.find(id).await?;

        let mut summary = TripSummary::new(trip);

        if let Some(result) = self
            .resolve_route(&summary.trip.from, &summary.trip.to)
            .await
        {
            summary.apply(&result);
        }

        Ok(summary)
    }

    #[tracing::instrument(skip(self))]
    async fn trip_map(&self, id: Uuid) -> Result<MapScene, Error> {
        let trip = self.store.find(id).await?;

        let mut scene = MapScene::default();

        if let Some(result) = self.resolve_route(&trip.from, &trip.to).await {
            scene.apply_route(&result);
        }

        Ok(scene)
    }
}

impl Engine {
    async fn try_resolve(&self, from: &str, to: &str) -> Result<Option<RouteResult>, Error> {
        let sources = self.geocoder.geocode(from).await?;

        // first candidate wins, the rest are discarded; with no candidate
        // the destination is never geocoded
        let origin = match sources.into_iter().next() {
            Some(coordinates) => coordinates,
            None => return Ok(None),
        };

        let destinations = self.geocoder.geocode(to).await?;

        let destination = match destinations.into_iter().next() {
            Some(coordinates) => coordinates,
            None => return Ok(None),
        };

        let routes = self.directions.driving_route(origin, destination).await?;

        let route = match routes.into_iter().next() {
            Some(route) => route,
            None => return Ok(None),
        };

        Ok(Some(RouteResult::from_meters(
            route.distance_meters,
            route.polyline,
        )))
    }
}
