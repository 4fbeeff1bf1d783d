use async_trait::async_trait;
use serde::Deserialize;
use std::env;

use crate::{
    entities::Coordinates,
    error::{invalid_input_error, upstream_error, Error},
    external::{Directions, DrivingRoute, Geocoder},
};

#[derive(Clone, Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<LatLng> for Coordinates {
    fn from(value: LatLng) -> Self {
        Coordinates {
            latitude: value.lat,
            longitude: value.lng,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Clone, Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Clone, Debug, Deserialize)]
struct DirectionsRoute {
    legs: Vec<Leg>,
}

#[derive(Clone, Debug, Deserialize)]
struct Leg {
    distance: Distance,
    steps: Vec<Step>,
}

#[derive(Clone, Debug, Deserialize)]
struct Distance {
    value: f64,
}

#[derive(Clone, Debug, Deserialize)]
struct Step {
    start_location: LatLng,
    end_location: LatLng,
}

#[derive(Clone, Debug, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
    routes: Option<T>,
}

impl From<DirectionsRoute> for DrivingRoute {
    fn from(route: DirectionsRoute) -> Self {
        let mut distance_meters = 0.0;
        let mut polyline = Vec::new();

        for leg in route.legs {
            distance_meters += leg.distance.value;

            let mut last_end = None;
            for step in leg.steps {
                polyline.push(step.start_location.into());
                last_end = Some(step.end_location);
            }

            if let Some(end) = last_end {
                polyline.push(end.into());
            }
        }

        DrivingRoute {
            distance_meters,
            polyline,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GoogleMaps {
    client: reqwest::Client,
}

impl GoogleMaps {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Geocoder for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Vec<Coordinates>, Error> {
        let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
        let url = format!("https://{}/maps/api/geocode/json", api_base);
        let key = env::var("GOOGLE_MAPS_API_KEY")?;

        let res = self
            .client
            .get(url)
            .query(&[("key", key)])
            .query(&[("address", address.to_string())])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response<Vec<GeocodeResult>> = res.json().await?;

        if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
            return Err(upstream_error());
        }

        let results = data.results.unwrap_or_default();

        Ok(results
            .into_iter()
            .map(|result| result.geometry.location.into())
            .collect())
    }
}

#[async_trait]
impl Directions for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn driving_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<Vec<DrivingRoute>, Error> {
        let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
        let url = format!("https://{}/maps/api/directions/json", api_base);
        let key = env::var("GOOGLE_MAPS_API_KEY")?;

        let res = self
            .client
            .get(url)
            .query(&[("key", key)])
            .query(&[("origin", format!("{},{}", origin.latitude, origin.longitude))])
            .query(&[(
                "destination",
                format!("{},{}", destination.latitude, destination.longitude),
            )])
            .query(&[("mode", "driving".to_string())])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response<Vec<DirectionsRoute>> = res.json().await?;

        if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
            return Err(upstream_error());
        }

        let routes = data.routes.unwrap_or_default();

        Ok(routes.into_iter().map(DrivingRoute::from).collect())
    }
}
