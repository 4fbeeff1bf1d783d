mod route_api;
mod trip_api;

use crate::{
    api::API,
    db::DynTripStore,
    entities::Trip,
    error::Error,
    external::{DynDirections, DynGeocoder},
};

pub struct Engine {
    store: DynTripStore,
    geocoder: DynGeocoder,
    directions: DynDirections,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(
        store: DynTripStore,
        geocoder: DynGeocoder,
        directions: DynDirections,
    ) -> Result<Self, Error> {
        // an empty store gets the two seed entries the app ships with
        if store.list().await?.is_empty() {
            store
                .append(Trip::new(
                    "Foothill College".into(),
                    "De Anza College".into(),
                    None,
                ))
                .await?;
            store
                .append(Trip::new(
                    "Your starting point".into(),
                    "Your destination".into(),
                    None,
                ))
                .await?;
        }

        Ok(Self {
            store,
            geocoder,
            directions,
        })
    }
}

impl API for Engine {}
