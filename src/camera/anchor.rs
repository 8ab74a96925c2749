//! Anker-Punkt der Kamera im Viewport.

use glam::DVec2;

use crate::core::EdgeInsets;
use crate::shared::options::ANCHOR_CENTER_MARGIN_PX;

/// Berechnet den Pixel-Anker für Rotation und Zoom.
///
/// Horizontal liegt der Anker in der Mitte des gepolsterten Viewports.
/// Vertikal startet er in der gepolsterten Mitte und wandert mit dem
/// Pitch-Koeffizienten um bis zu `halbe Höhe - 7 px` nach unten: bei
/// voller Neigung sitzt das Fahrzeug nahe der Unterkante, sodass mehr
/// Route vor dem Fahrzeug sichtbar ist.
pub fn anchor_point(pitch_coefficient: f64, bounds_size: DVec2, insets: EdgeInsets) -> DVec2 {
    let x = ((bounds_size.x - insets.horizontal()) / 2.0 + insets.left).max(0.0);

    let padded_height = bounds_size.y - insets.vertical();
    let y_center = (padded_height / 2.0 + insets.top).max(0.0);
    let y_offset = (padded_height / 2.0 - ANCHOR_CENTER_MARGIN_PX).max(0.0) * pitch_coefficient;

    DVec2::new(x, y_center + y_offset)
}
