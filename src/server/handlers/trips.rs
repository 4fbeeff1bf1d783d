use axum::extract::{Extension, Json, Path};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::entities::Trip;
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    from: String,
    to: String,
    date_time: Option<DateTime<Utc>>,
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Trip>>, Error> {
    let trips = api.list_trips().await?;

    Ok(trips.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Trip>, Error> {
    let trip = api
        .create_trip(params.from, params.to, params.date_time)
        .await?;

    Ok(trip.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trip>, Error> {
    let trip = api.find_trip(id).await?;

    Ok(trip.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Trip>>, Error> {
    let trips = api.delete_trip(id).await?;

    Ok(trips.into())
}
