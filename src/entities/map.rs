use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Region, RouteResult};

/// The map consumer's view state: point annotations, overlay polylines and
/// the visible region. Applying a route is idempotent so a late result can
/// land on a scene that has already moved on.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MapScene {
    pub annotations: Vec<Annotation>,
    pub overlays: Vec<Polyline>,
    pub region: Option<Region>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Annotation {
    pub title: String,
    pub coordinates: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Coordinates>,
}

impl MapScene {
    /// Clears whatever was drawn before, draws the path as one polyline and
    /// fits the region to bound it.
    pub fn apply_route(&mut self, result: &RouteResult) {
        self.annotations.clear();
        self.overlays.clear();

        self.overlays.push(Polyline {
            points: result.path.clone(),
        });
        self.region = result.bounding_region();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route() -> RouteResult {
        RouteResult::from_meters(
            1609.34,
            vec![
                Coordinates {
                    latitude: 37.0,
                    longitude: -122.0,
                },
                Coordinates {
                    latitude: 37.5,
                    longitude: -122.5,
                },
            ],
        )
    }

    #[test]
    fn apply_route_clears_previous_state() {
        let mut scene = MapScene::default();
        scene.annotations.push(Annotation {
            title: "old pin".into(),
            coordinates: Coordinates {
                latitude: 0.0,
                longitude: 0.0,
            },
        });
        scene.overlays.push(Polyline { points: vec![] });

        scene.apply_route(&route());

        assert!(scene.annotations.is_empty());
        assert_eq!(scene.overlays.len(), 1);
        assert_eq!(scene.overlays[0].points.len(), 2);
        assert!(scene.region.is_some());
    }

    #[test]
    fn apply_route_twice_leaves_one_overlay() {
        let mut scene = MapScene::default();
        let result = route();

        scene.apply_route(&result);
        scene.apply_route(&result);

        assert_eq!(scene.overlays.len(), 1);
    }
}
