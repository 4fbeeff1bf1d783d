pub mod google_maps;

use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::Coordinates;
use crate::error::Error;

/// A candidate driving route as returned by the directions service.
#[derive(Clone, Debug)]
pub struct DrivingRoute {
    pub distance_meters: f64,
    pub polyline: Vec<Coordinates>,
}

#[async_trait]
pub trait Geocoder {
    /// Resolves a free-text address to zero or more candidate coordinates.
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinates>, Error>;
}

#[async_trait]
pub trait Directions {
    /// Requests automobile routes between two coordinates.
    async fn driving_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<Vec<DrivingRoute>, Error>;
}

pub type DynGeocoder = Arc<dyn Geocoder + Send + Sync>;
pub type DynDirections = Arc<dyn Directions + Send + Sync>;
