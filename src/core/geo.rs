//! Geographische Koordinaten-Mathematik auf der Kugel.
//!
//! Layer-neutral: kann von `route`, `camera` und `map` importiert werden
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use serde::{Deserialize, Serialize};

/// Meter pro Radiant auf der Erdkugel (sphärisches Modell).
pub const METERS_PER_RADIAN: f64 = 6_373_000.0;

/// Geographische Koordinate in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Breitengrad in Grad (positiv = Nord)
    pub latitude: f64,
    /// Längengrad in Grad (positiv = Ost)
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Erstellt eine Koordinate aus Breiten- und Längengrad.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine-Distanz zur anderen Koordinate in Metern.
    pub fn distance_to(&self, other: GeoCoordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lng = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + (d_lng / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
        2.0 * a.sqrt().atan2((1.0 - a).sqrt()) * METERS_PER_RADIAN
    }

    /// Anfangs-Kurs (Bearing) zur anderen Koordinate in Grad.
    ///
    /// Ergebnis liegt in (-180, 180]; 0 = Nord, 90 = Ost.
    pub fn direction_to(&self, other: GeoCoordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lng = (other.longitude - self.longitude).to_radians();

        let a = d_lng.sin() * lat2.cos();
        let b = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
        a.atan2(b).to_degrees()
    }

    /// Koordinate in `distance` Metern Entfernung in Richtung `direction` (Grad).
    pub fn coordinate_at_distance(&self, distance: f64, direction: f64) -> GeoCoordinate {
        let lat = self.latitude.to_radians();
        let lng = self.longitude.to_radians();
        let radial = distance / METERS_PER_RADIAN;
        let heading = direction.to_radians();

        let other_lat =
            (lat.sin() * radial.cos() + lat.cos() * radial.sin() * heading.cos()).asin();
        let other_lng = lng
            + (heading.sin() * radial.sin() * lat.cos())
                .atan2(radial.cos() - lat.sin() * other_lat.sin());

        GeoCoordinate::new(other_lat.to_degrees(), other_lng.to_degrees())
    }

    /// Arithmetischer Mittelpunkt zweier Koordinaten.
    ///
    /// Für kurze Spannen (Viewport-Framing) ausreichend genau; keine
    /// Großkreis-Interpolation.
    pub fn midpoint(&self, other: GeoCoordinate) -> GeoCoordinate {
        GeoCoordinate::new(
            (self.latitude + other.latitude) / 2.0,
            (self.longitude + other.longitude) / 2.0,
        )
    }
}

/// Kürzeste Rotation von `from` nach `to` in Grad.
///
/// Ergebnis liegt in (-180, 180]: negatives Vorzeichen = gegen den
/// Uhrzeigersinn. `from + shortest_rotation(to, from)` erreicht `to`
/// ohne die „lange“ Drehung über 180° hinaus.
pub fn shortest_rotation(to: f64, from: f64) -> f64 {
    let diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_one_degree_longitude_at_equator() {
        let a = GeoCoordinate::new(0.0, 0.0);
        let b = GeoCoordinate::new(0.0, 1.0);
        // 1° Bogen auf dem Äquator = METERS_PER_RADIAN * π / 180
        let expected = METERS_PER_RADIAN * std::f64::consts::PI / 180.0;
        assert_relative_eq!(a.distance_to(b), expected, epsilon = 1.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoCoordinate::new(48.137, 11.575);
        let b = GeoCoordinate::new(48.208, 16.373);
        assert_relative_eq!(a.distance_to(b), b.distance_to(a), epsilon = 1e-6);
    }

    #[test]
    fn direction_east_is_90_degrees() {
        let a = GeoCoordinate::new(0.0, 0.0);
        let b = GeoCoordinate::new(0.0, 1.0);
        assert_relative_eq!(a.direction_to(b), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn direction_north_is_0_degrees() {
        let a = GeoCoordinate::new(0.0, 0.0);
        let b = GeoCoordinate::new(1.0, 0.0);
        assert_relative_eq!(a.direction_to(b), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn coordinate_at_distance_roundtrip() {
        let start = GeoCoordinate::new(47.21, 9.52);
        let target = start.coordinate_at_distance(500.0, 135.0);
        assert_relative_eq!(start.distance_to(target), 500.0, epsilon = 0.01);
        assert_relative_eq!(start.direction_to(target), 135.0, epsilon = 0.01);
    }

    #[test]
    fn shortest_rotation_crosses_north() {
        assert_relative_eq!(shortest_rotation(350.0, 10.0), -20.0);
        assert_relative_eq!(shortest_rotation(10.0, 350.0), 20.0);
    }

    #[test]
    fn shortest_rotation_never_exceeds_half_turn() {
        for to in [0.0, 45.0, 179.0, 181.0, 270.0, 359.0] {
            for from in [0.0, 90.0, 180.0, 300.0] {
                let rotation = shortest_rotation(to, from);
                assert!(rotation > -180.0 && rotation <= 180.0);
                // Ziel-Winkel modulo 360 muss erreicht werden
                assert_relative_eq!(
                    (from + rotation).rem_euclid(360.0),
                    to.rem_euclid(360.0),
                    epsilon = 1e-9
                );
            }
        }
    }
}
