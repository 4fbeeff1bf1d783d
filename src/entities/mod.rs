mod map;
mod route;
mod trip;

pub use map::{Annotation, MapScene, Polyline};
pub use route::{Coordinates, Region, RouteResult};
pub use trip::{Trip, TripSummary};
