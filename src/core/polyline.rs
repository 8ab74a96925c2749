//! Reine Polyline-Operationen über geographischen Koordinaten.
//!
//! Alle Funktionen arbeiten auf Koordinaten-Slices und degradieren bei
//! entarteter Eingabe still (leeres Ergebnis bzw. `None`), statt zu paniken.

use super::geo::GeoCoordinate;

/// Gesamtlänge der Polyline in Metern.
///
/// `None` bei weniger als zwei Punkten.
pub fn length(coordinates: &[GeoCoordinate]) -> Option<f64> {
    if coordinates.len() < 2 {
        return None;
    }
    Some(
        coordinates
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum(),
    )
}

/// Punkt auf der Polyline in `distance` Metern Bogenlänge ab Start.
///
/// Bei Überlänge wird der letzte Punkt geliefert, bei `distance <= 0`
/// der erste. `None` nur bei leerer Polyline.
pub fn point_at_distance(coordinates: &[GeoCoordinate], distance: f64) -> Option<GeoCoordinate> {
    let first = *coordinates.first()?;
    if distance <= 0.0 {
        return Some(first);
    }

    let mut traveled = 0.0;
    for pair in coordinates.windows(2) {
        let segment = pair[0].distance_to(pair[1]);
        if traveled + segment >= distance && segment > 0.0 {
            let direction = pair[0].direction_to(pair[1]);
            return Some(pair[0].coordinate_at_distance(distance - traveled, direction));
        }
        traveled += segment;
    }

    coordinates.last().copied()
}

/// Anfangsstück der Polyline bis zur Bogenlänge `distance`.
///
/// Endet mit einem interpolierten Punkt auf dem letzten angeschnittenen
/// Segment. Bei `distance <= 0` bleibt nur der Startpunkt übrig.
pub fn prefix(coordinates: &[GeoCoordinate], distance: f64) -> Vec<GeoCoordinate> {
    let Some(first) = coordinates.first() else {
        return Vec::new();
    };
    if distance <= 0.0 {
        return vec![*first];
    }

    let mut result = vec![*first];
    let mut traveled = 0.0;
    for pair in coordinates.windows(2) {
        let segment = pair[0].distance_to(pair[1]);
        if traveled + segment >= distance && segment > 0.0 {
            let direction = pair[0].direction_to(pair[1]);
            result.push(pair[0].coordinate_at_distance(distance - traveled, direction));
            return result;
        }
        traveled += segment;
        result.push(pair[1]);
    }

    result
}

/// Reststück der Polyline ab dem Punkt, der `from` am nächsten liegt.
///
/// Der nächstgelegene Punkt kann zwischen zwei Stützpunkten liegen; er
/// wird als neuer Startpunkt eingesetzt, danach folgen die restlichen
/// Stützpunkte. Bei weniger als zwei Punkten: unveränderte Kopie.
pub fn suffix_from(coordinates: &[GeoCoordinate], from: GeoCoordinate) -> Vec<GeoCoordinate> {
    if coordinates.len() < 2 {
        return coordinates.to_vec();
    }

    let mut best_distance = f64::MAX;
    let mut best_point = coordinates[0];
    let mut best_segment = 0;

    for (index, pair) in coordinates.windows(2).enumerate() {
        let candidate = closest_point_on_segment(pair[0], pair[1], from);
        let candidate_distance = from.distance_to(candidate);
        if candidate_distance < best_distance {
            best_distance = candidate_distance;
            best_point = candidate;
            best_segment = index;
        }
    }

    let mut result = vec![best_point];
    result.extend_from_slice(&coordinates[best_segment + 1..]);
    result
}

/// Nächstgelegener Punkt auf dem Segment `a`→`b` zu `point`.
///
/// Projektion in einer lokalen äquirektangulären Ebene um `point`;
/// für Navigations-Distanzen (Meter bis wenige Kilometer) ausreichend.
fn closest_point_on_segment(
    a: GeoCoordinate,
    b: GeoCoordinate,
    point: GeoCoordinate,
) -> GeoCoordinate {
    let scale = point.latitude.to_radians().cos();

    let ax = (a.longitude - point.longitude) * scale;
    let ay = a.latitude - point.latitude;
    let bx = (b.longitude - point.longitude) * scale;
    let by = b.latitude - point.latitude;

    let dx = bx - ax;
    let dy = by - ay;
    let segment_sq = dx * dx + dy * dy;
    if segment_sq == 0.0 {
        return a;
    }

    let t = ((-ax * dx - ay * dy) / segment_sq).clamp(0.0, 1.0);
    GeoCoordinate::new(
        a.latitude + (b.latitude - a.latitude) * t,
        a.longitude + (b.longitude - a.longitude) * t,
    )
}
