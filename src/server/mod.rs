mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};

use crate::api::{DynAPI, API};
use crate::server::handlers::{routes, trips};

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/trips", get(trips::list).post(trips::create))
        .route("/trips/:id", get(trips::find).delete(trips::remove))
        .route("/trips/:id/summary", get(routes::summary))
        .route("/trips/:id/map", get(routes::map))
        .layer(Extension(api));

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
