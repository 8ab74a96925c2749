//! Ein einzelnes Sample aus dem Location-Provider-Stream.

use serde::{Deserialize, Serialize};

use super::geo::GeoCoordinate;

/// Position plus Fahrtrichtung zu einem Zeitpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Geographische Position
    pub coordinate: GeoCoordinate,
    /// Kurs über Grund in Grad [0, 360)
    pub course: f64,
}

impl Location {
    /// Erstellt ein Location-Sample.
    pub fn new(coordinate: GeoCoordinate, course: f64) -> Self {
        Self {
            coordinate,
            course,
        }
    }
}
