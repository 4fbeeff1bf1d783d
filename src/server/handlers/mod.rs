pub mod routes;
pub mod trips;
