use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::RouteResult;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub from: String,
    pub to: String,
    pub date_time: DateTime<Utc>,
    pub total_miles: f64,
    pub route: String,
}

impl Trip {
    pub fn new(from: String, to: String, date_time: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            to,
            date_time: date_time.unwrap_or_else(Utc::now),
            total_miles: 0.0,
            route: String::new(),
        }
    }
}

/// The text consumer's view of a trip. Until a route has been applied it
/// shows the trip's stored scratch values unchanged.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TripSummary {
    pub trip: Trip,
    pub total_miles: f64,
    pub route: String,
}

impl TripSummary {
    pub fn new(trip: Trip) -> Self {
        Self {
            total_miles: trip.total_miles,
            route: trip.route.clone(),
            trip,
        }
    }

    pub fn apply(&mut self, result: &RouteResult) {
        self.total_miles = result.total_miles;
        self.route = result.path_text();
    }
}
