//! Framing-Geometrie: zusammengesetzte Manöver und Bildschirm-Mittelpunkt.

use crate::core::{polyline, GeoCoordinate};
use crate::map::MapSurface;
use crate::route::RouteStep;
use crate::shared::GeometryFramingAfterManeuver;

/// Sammelt die mitzurahmende Geometrie der Steps nach dem aktuellen.
///
/// Kurze Folge-Steps (dicht aufeinanderfolgende Manöver) werden komplett
/// übernommen, damit alle nahen Abbiegungen gemeinsam im Bild bleiben;
/// der erste lange Step wird auf die konfigurierte Sichtweite nach dem
/// Manöver gekürzt und beendet die Sammlung.
pub fn compound_maneuver_geometry(
    steps_after_current: &[RouteStep],
    options: &GeometryFramingAfterManeuver,
) -> Vec<GeoCoordinate> {
    if !options.enabled {
        return Vec::new();
    }

    let mut framed = Vec::new();
    for step in steps_after_current {
        let Some(distance) = step.length() else {
            continue;
        };
        if distance > 0.0 && distance < options.distance_to_coalesce_compound_maneuvers {
            framed.extend_from_slice(&step.geometry);
        } else {
            framed.extend(polyline::prefix(
                &step.geometry,
                options.distance_to_frame_after_maneuver,
            ));
            break;
        }
    }
    framed
}

/// Mittelpunkt der Koordinatenmenge im Bildschirmraum.
///
/// Projiziert alle Koordinaten auf Pixel, nimmt die Ecken der Pixel-
/// Bounding-Box und liefert den geographischen Mittelpunkt der beiden
/// zurückprojizierten Ecken. `None` bei leerer Menge.
pub fn framed_midpoint(
    surface: &dyn MapSurface,
    coordinates: &[GeoCoordinate],
) -> Option<GeoCoordinate> {
    let first = coordinates.first()?;

    let mut min = surface.project(*first);
    let mut max = min;
    for coordinate in &coordinates[1..] {
        let point = surface.project(*coordinate);
        min = min.min(point);
        max = max.max(point);
    }

    let corner_a = surface.unproject(min);
    let corner_b = surface.unproject(max);
    Some(corner_a.midpoint(corner_b))
}

/// Blendet das Kamera-Zentrum zwischen Fahrzeug und gerahmtem Mittelpunkt.
///
/// Interpolationsfaktor `1 - pitch_coefficient`: volle Neigung zieht das
/// Zentrum zum Fahrzeug, flache Kamera zur gerahmten Geometrie.
pub fn blended_center(
    vehicle: GeoCoordinate,
    framed_midpoint: GeoCoordinate,
    pitch_coefficient: f64,
) -> GeoCoordinate {
    let line = [vehicle, framed_midpoint];
    let Some(total) = polyline::length(&line) else {
        return vehicle;
    };
    polyline::point_at_distance(&line, total * (1.0 - pitch_coefficient)).unwrap_or(vehicle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::WebMercatorSurface;
    use crate::route::ManeuverType;
    use approx::assert_relative_eq;
    use glam::DVec2;

    /// Step entlang des Äquators mit gegebener Länge in Metern.
    fn equator_step(start_deg: f64, meters: f64) -> RouteStep {
        let span = meters / (crate::core::METERS_PER_RADIAN * std::f64::consts::PI / 180.0);
        RouteStep::new(
            vec![
                GeoCoordinate::new(0.0, start_deg),
                GeoCoordinate::new(0.0, start_deg + span),
            ],
            ManeuverType::Turn,
        )
    }

    #[test]
    fn short_steps_are_framed_whole_until_first_long_step() {
        let steps = vec![
            equator_step(0.0, 80.0),
            equator_step(0.001, 120.0),
            equator_step(0.003, 900.0),
            equator_step(0.02, 50.0),
        ];
        let framed = compound_maneuver_geometry(&steps, &GeometryFramingAfterManeuver::default());

        // Zwei kurze Steps komplett (je 2 Punkte) + gekürzter langer Step
        assert!(framed.len() >= 6);
        let trailing = &framed[4..];
        let trailing_length = polyline::length(trailing).unwrap();
        assert_relative_eq!(trailing_length, 100.0, epsilon = 0.5);
        // Der Step hinter dem langen Step darf nicht mehr auftauchen
        assert!(framed
            .iter()
            .all(|coordinate| coordinate.longitude < 0.02));
    }

    #[test]
    fn long_first_step_is_trimmed_to_frame_distance() {
        let steps = vec![equator_step(0.0, 500.0)];
        let framed = compound_maneuver_geometry(&steps, &GeometryFramingAfterManeuver::default());
        let length = polyline::length(&framed).unwrap();
        assert_relative_eq!(length, 100.0, epsilon = 0.5);
    }

    #[test]
    fn disabled_framing_returns_empty() {
        let steps = vec![equator_step(0.0, 80.0)];
        let options = GeometryFramingAfterManeuver {
            enabled: false,
            ..GeometryFramingAfterManeuver::default()
        };
        assert!(compound_maneuver_geometry(&steps, &options).is_empty());
    }

    #[test]
    fn framed_midpoint_of_empty_set_is_none() {
        let surface = WebMercatorSurface::new(DVec2::new(512.0, 512.0));
        assert_eq!(framed_midpoint(&surface, &[]), None);
    }

    #[test]
    fn framed_midpoint_matches_span_center() {
        let surface = WebMercatorSurface::with_camera(
            DVec2::new(512.0, 512.0),
            GeoCoordinate::new(0.0, 0.01),
            12.0,
        );
        let coordinates = vec![
            GeoCoordinate::new(0.0, 0.0),
            GeoCoordinate::new(0.0, 0.02),
            GeoCoordinate::new(0.0, 0.005),
        ];
        let midpoint = framed_midpoint(&surface, &coordinates).unwrap();
        assert_relative_eq!(midpoint.longitude, 0.01, epsilon = 1e-6);
        assert_relative_eq!(midpoint.latitude, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn blended_center_follows_pitch_coefficient() {
        let vehicle = GeoCoordinate::new(0.0, 0.0);
        let framed = GeoCoordinate::new(0.0, 0.01);

        // Volle Neigung → Zentrum beim Fahrzeug
        let pitched = blended_center(vehicle, framed, 1.0);
        assert_relative_eq!(pitched.longitude, 0.0, epsilon = 1e-9);

        // Flach → Zentrum beim gerahmten Mittelpunkt
        let flat = blended_center(vehicle, framed, 0.0);
        assert_relative_eq!(flat.longitude, 0.01, epsilon = 1e-6);

        // Halb → auf halber Strecke
        let half = blended_center(vehicle, framed, 0.5);
        assert_relative_eq!(half.longitude, 0.005, epsilon = 1e-6);
    }
}
