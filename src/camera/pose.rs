//! Kamera-Posen: das Ergebnis jeder Viewport-Berechnung.

use glam::DVec2;

use crate::core::{EdgeInsets, GeoCoordinate};

/// Vollständige Ziel-Pose der Kartenkamera.
///
/// Ephemer: wird bei jedem Location-/Fortschritts-Update neu berechnet
/// und nicht persistiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Geographisches Zentrum
    pub center: GeoCoordinate,
    /// Zoom-Level
    pub zoom: f64,
    /// Bearing in Grad [0, 360), relativ zu Nord
    pub bearing: f64,
    /// Neigung in Grad [0, 85]
    pub pitch: f64,
    /// Viewport-Padding in Pixeln
    pub padding: EdgeInsets,
    /// Rotations-/Zoom-Anker in Viewport-Pixeln
    pub anchor: DVec2,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            center: GeoCoordinate::new(0.0, 0.0),
            zoom: 0.0,
            bearing: 0.0,
            pitch: 0.0,
            padding: EdgeInsets::ZERO,
            anchor: DVec2::ZERO,
        }
    }
}

/// Die vier Kamera-Posen eines Updates: Following/Overview × Handheld/Head-Unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationCameraPoses {
    /// Following-Modus auf dem Handheld
    pub following_handheld: CameraPose,
    /// Following-Modus auf der Head-Unit
    pub following_headunit: CameraPose,
    /// Overview-Modus auf dem Handheld
    pub overview_handheld: CameraPose,
    /// Overview-Modus auf der Head-Unit
    pub overview_headunit: CameraPose,
}
