//! Bearing-Auflösung: Fahrkurs mit Blick Richtung Manöver verblendet.

use crate::core::{shortest_rotation, GeoCoordinate};
use crate::shared::BearingSmoothing;

/// Löst den Ziel-Bearing der Kamera auf.
///
/// Mit Lookahead-Geometrie wird der Kurs Richtung Manöver gezogen,
/// gedeckelt auf `maximum_bearing_smoothing_angle` Abweichung vom
/// rohen Fahrkurs. Das Ergebnis ist relativ zum aktuellen Kamera-
/// Bearing über die kürzeste Rotation ausgedrückt, damit die Kamera
/// nie den „langen Weg“ dreht.
pub fn resolve_bearing(
    course: f64,
    lookahead: &[GeoCoordinate],
    map_bearing: f64,
    options: &BearingSmoothing,
) -> f64 {
    let mut bearing = course;

    if options.enabled && lookahead.len() >= 2 {
        let first = lookahead[0];
        let last = lookahead[lookahead.len() - 1];
        let direction_to_maneuver = first.direction_to(last);
        let direction_diff = shortest_rotation(direction_to_maneuver, course);
        let max_diff = options.maximum_bearing_smoothing_angle;

        if direction_diff.abs() > max_diff {
            bearing += max_diff * direction_diff.signum();
        } else {
            bearing = direction_to_maneuver;
        }
    }

    map_bearing + shortest_rotation(bearing, map_bearing)
}
