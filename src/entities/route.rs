use serde::{Deserialize, Serialize};

const METERS_PER_MILE: f64 = 1609.34;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A resolved driving route: total distance in miles and the polyline
/// coordinates in travel order, first point at the origin and last at the
/// destination.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteResult {
    pub total_miles: f64,
    pub path: Vec<Coordinates>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinates,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl RouteResult {
    pub fn from_meters(distance_meters: f64, path: Vec<Coordinates>) -> Self {
        Self {
            total_miles: distance_meters / METERS_PER_MILE,
            path,
        }
    }

    /// One coordinate pair per line, 5 decimal places, no trailing newline.
    pub fn path_text(&self) -> String {
        self.path
            .iter()
            .map(|point| format!("({:.5}, {:.5})", point.latitude, point.longitude))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The smallest region containing every point of the path.
    pub fn bounding_region(&self) -> Option<Region> {
        let first = *self.path.first()?;

        let mut min = first;
        let mut max = first;

        for point in &self.path[1..] {
            min.latitude = min.latitude.min(point.latitude);
            min.longitude = min.longitude.min(point.longitude);
            max.latitude = max.latitude.max(point.latitude);
            max.longitude = max.longitude.max(point.longitude);
        }

        Some(Region {
            center: Coordinates {
                latitude: (min.latitude + max.latitude) / 2.0,
                longitude: (min.longitude + max.longitude) / 2.0,
            },
            latitude_delta: max.latitude - min.latitude,
            longitude_delta: max.longitude - min.longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_mile_per_1609_34_meters() {
        let result = RouteResult::from_meters(1609.34, vec![]);
        assert_eq!(result.total_miles, 1.0);
    }

    #[test]
    fn path_text_formats_five_decimals_newline_joined() {
        let result = RouteResult::from_meters(
            0.0,
            vec![
                Coordinates {
                    latitude: 37.12345,
                    longitude: -122.98765,
                },
                Coordinates {
                    latitude: 37.00001,
                    longitude: -122.00001,
                },
            ],
        );

        assert_eq!(
            result.path_text(),
            "(37.12345, -122.98765)\n(37.00001, -122.00001)"
        );
    }

    #[test]
    fn path_text_single_point_has_no_newline() {
        let result = RouteResult::from_meters(
            0.0,
            vec![Coordinates {
                latitude: 1.0,
                longitude: 2.0,
            }],
        );

        assert_eq!(result.path_text(), "(1.00000, 2.00000)");
    }

    #[test]
    fn bounding_region_spans_extremes() {
        let result = RouteResult::from_meters(
            0.0,
            vec![
                Coordinates {
                    latitude: 37.0,
                    longitude: -122.0,
                },
                Coordinates {
                    latitude: 37.5,
                    longitude: -122.5,
                },
                Coordinates {
                    latitude: 37.25,
                    longitude: -122.25,
                },
            ],
        );

        let region = result.bounding_region().unwrap();
        assert_eq!(region.center.latitude, 37.25);
        assert_eq!(region.center.longitude, -122.25);
        assert_eq!(region.latitude_delta, 0.5);
        assert_eq!(region.longitude_delta, 0.5);
    }

    #[test]
    fn bounding_region_of_empty_path_is_none() {
        let result = RouteResult::from_meters(0.0, vec![]);
        assert!(result.bounding_region().is_none());
    }
}
