//! Zoom-to-Fit: maximaler Zoom, bei dem eine Koordinatenmenge ins
//! gepolsterte, Pitch-korrigierte Viewport passt.

use glam::DVec2;

use crate::core::{BoundingBox, EdgeInsets, GeoCoordinate};

/// Berechnet den Fit-Zoom für `coordinates`.
///
/// Die Neigung verzerrt das sichtbare Trapez: die wirksame Breite
/// wächst mit `pitch / max_pitch` Richtung `2*höhe - breite`, die
/// wirksame Höhe um `sin(pitch) * 1.25`. Entartete Eingaben (leer
/// oder Einzelpunkt) liefern `fallback_zoom`; sonst wird auf
/// `[zoom_min, zoom_max]` geklemmt.
#[allow(clippy::too_many_arguments)]
pub fn zoom_for_fit(
    coordinates: &[GeoCoordinate],
    pitch: f64,
    max_pitch: f64,
    insets: EdgeInsets,
    viewport_size: DVec2,
    fallback_zoom: f64,
    zoom_min: f64,
    zoom_max: f64,
) -> f64 {
    let Some(bounding_box) = BoundingBox::from_coordinates(coordinates) else {
        return fallback_zoom;
    };

    let inset_width = viewport_size.x - insets.horizontal();
    let inset_height = viewport_size.y - insets.vertical();

    let width_delta = inset_height * 2.0 - inset_width;
    let pitch_share = if max_pitch > 0.0 {
        pitch / max_pitch
    } else {
        0.0
    };
    let effective_width = inset_width + pitch_share * width_delta;
    let effective_height = inset_height + inset_height * pitch.to_radians().sin() * 1.25;

    let Some(zoom) =
        bounding_box.zoom_level_to_fit(DVec2::new(effective_width, effective_height))
    else {
        return fallback_zoom;
    };

    zoom.clamp(zoom_min, zoom_max)
}
