use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::entities::{MapScene, TripSummary};
use crate::error::Error;

pub async fn summary(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<TripSummary>, Error> {
    let summary = api.trip_summary(id).await?;

    Ok(summary.into())
}

pub async fn map(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<MapScene>, Error> {
    let scene = api.trip_map(id).await?;

    Ok(scene.into())
}
