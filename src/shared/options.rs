//! Zentrale Konfiguration der Viewport-Kamera.
//!
//! `ViewportOptions` enthält alle zur Laufzeit änderbaren Werte, pro
//! Datenquellen-Instanz konstruiert (kein prozessweiter Zustand).
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::EdgeInsets;

// ── Zoom ────────────────────────────────────────────────────────────

/// Unterste erlaubte Zoom-Stufe.
pub const ZOOM_MIN: f64 = 2.0;
/// Oberste erlaubte Zoom-Stufe.
pub const ZOOM_MAX: f64 = 22.0;
/// Zoom-Untergrenze im Following-Modus.
pub const FOLLOWING_ZOOM_MIN: f64 = 10.5;
/// Zoom-Obergrenze im Following-Modus.
pub const FOLLOWING_ZOOM_MAX: f64 = 16.35;
/// Fallback-Zoom im Following-Modus bei entarteter Framing-Geometrie.
pub const FOLLOWING_FALLBACK_ZOOM: f64 = 2.0;
/// Fester Zoom im Free-Drive (Position ohne aktive Route).
pub const FREE_DRIVE_ZOOM: f64 = 14.0;
/// Zoom-Obergrenze im Overview-Modus.
pub const OVERVIEW_ZOOM_MAX: f64 = 16.35;
/// Fallback-Zoom im Overview-Modus bei entarteter Routen-Geometrie.
pub const OVERVIEW_FALLBACK_ZOOM: f64 = 12.0;

// ── Pitch ───────────────────────────────────────────────────────────

/// Harte Obergrenze der Kamera-Neigung in Grad.
pub const PITCH_CEILING: f64 = 85.0;
/// Standard-Neigung im Following-Modus in Grad.
pub const DEFAULT_PITCH: f64 = 45.0;
/// Restdistanz zum Manöver, ab der die Abflachung beginnt (Meter).
pub const PITCH_TRIGGER_DISTANCE: f64 = 180.0;
/// Restdistanz, bei der die Kamera vollständig flach ist (Meter).
pub const PITCH_FLATTENED_DISTANCE: f64 = 150.0;

// ── Bearing ─────────────────────────────────────────────────────────

/// Maximale Abweichung des Kamera-Bearings vom Fahrkurs in Grad.
pub const BEARING_SMOOTHING_MAX_ANGLE: f64 = 20.0;

// ── Manöver-Framing ─────────────────────────────────────────────────

/// Steps kürzer als diese Distanz werden als zusammengesetztes Manöver
/// komplett mitgerahmt (Meter).
pub const DISTANCE_TO_COALESCE_COMPOUND_MANEUVERS: f64 = 150.0;
/// Distanz nach dem Manöver, die vom ersten langen Step im Bild bleibt (Meter).
pub const DISTANCE_TO_FRAME_AFTER_MANEUVER: f64 = 100.0;

// ── Kreuzungsdichte ─────────────────────────────────────────────────

/// Multiplikator auf den mittleren Kreuzungsabstand für die Lookahead-Distanz.
pub const INTERSECTION_DISTANCE_MULTIPLIER: f64 = 10.0;
/// Kreuzungsabstände bis zu dieser Länge gelten als Messrauschen (Meter).
pub const MIN_DISTANCE_BETWEEN_INTERSECTIONS: f64 = 20.0;
/// Untergrenze der Lookahead-Distanz für die Bearing-Auflösung (Meter).
pub const FALLBACK_LOOKAHEAD_DISTANCE: f64 = 150.0;

// ── Anchor ──────────────────────────────────────────────────────────

/// Rand-Reserve des Ankers zur Viewport-Unterkante in Pixeln.
pub const ANCHOR_CENTER_MARGIN_PX: f64 = 7.0;

// ── Head-Unit ───────────────────────────────────────────────────────

/// Feste Zusatz-Ränder der Head-Unit über der Safe-Area.
pub const HEADUNIT_EXTRA_INSETS: EdgeInsets = EdgeInsets {
    top: 10.0,
    left: 20.0,
    bottom: 10.0,
    right: 20.0,
};

// ── Options-Strukturen (serialisierbar) ─────────────────────────────

/// Abflachung der Kamera-Neigung vor einem Manöver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchNearManeuver {
    /// Abflachung aktiv
    pub enabled: bool,
    /// Restdistanz, ab der die Abflachung beginnt (Meter)
    pub trigger_distance_to_maneuver: f64,
    /// Restdistanz, bei der die Kamera flach ist (Meter)
    pub flattened_distance_to_maneuver: f64,
}

impl Default for PitchNearManeuver {
    fn default() -> Self {
        Self {
            enabled: true,
            trigger_distance_to_maneuver: PITCH_TRIGGER_DISTANCE,
            flattened_distance_to_maneuver: PITCH_FLATTENED_DISTANCE,
        }
    }
}

/// Mitrahmen der Geometrie nach dem bevorstehenden Manöver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryFramingAfterManeuver {
    /// Framing aktiv
    pub enabled: bool,
    /// Kurze Folge-Steps bis zu dieser Länge komplett mitrahmen (Meter)
    pub distance_to_coalesce_compound_maneuvers: f64,
    /// Sichtbare Distanz nach dem Manöver auf langen Steps (Meter)
    pub distance_to_frame_after_maneuver: f64,
}

impl Default for GeometryFramingAfterManeuver {
    fn default() -> Self {
        Self {
            enabled: true,
            distance_to_coalesce_compound_maneuvers: DISTANCE_TO_COALESCE_COMPOUND_MANEUVERS,
            distance_to_frame_after_maneuver: DISTANCE_TO_FRAME_AFTER_MANEUVER,
        }
    }
}

/// Glättung des Kamera-Bearings Richtung Manöver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingSmoothing {
    /// Glättung aktiv
    pub enabled: bool,
    /// Maximale Abweichung vom Fahrkurs in Grad
    pub maximum_bearing_smoothing_angle: f64,
}

impl Default for BearingSmoothing {
    fn default() -> Self {
        Self {
            enabled: true,
            maximum_bearing_smoothing_angle: BEARING_SMOOTHING_MAX_ANGLE,
        }
    }
}

/// Lookahead-Distanz aus der Kreuzungsdichte des aktuellen Steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionDensity {
    /// Dichte-basierter Lookahead aktiv
    pub enabled: bool,
    /// Multiplikator auf den mittleren Kreuzungsabstand
    pub average_distance_multiplier: f64,
    /// Abstände bis zu dieser Länge verwerfen (Meter)
    pub minimum_distance_between_intersections: f64,
}

impl Default for IntersectionDensity {
    fn default() -> Self {
        Self {
            enabled: true,
            average_distance_multiplier: INTERSECTION_DISTANCE_MULTIPLIER,
            minimum_distance_between_intersections: MIN_DISTANCE_BETWEEN_INTERSECTIONS,
        }
    }
}

/// Optionen des Following-Modus (aktive Zielführung).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FollowingCameraOptions {
    /// Neigung bei voller Pitch-Koeffizienz in Grad
    pub default_pitch: f64,
    /// Zoom-Untergrenze
    pub zoom_min: f64,
    /// Zoom-Obergrenze
    pub zoom_max: f64,
    /// Abflachung vor Manövern
    pub pitch_near_maneuver: PitchNearManeuver,
    /// Framing nach dem Manöver
    pub geometry_framing_after_maneuver: GeometryFramingAfterManeuver,
    /// Bearing-Glättung
    pub bearing_smoothing: BearingSmoothing,
    /// Kreuzungsdichte-Lookahead
    pub intersection_density: IntersectionDensity,
}

impl Default for FollowingCameraOptions {
    fn default() -> Self {
        Self {
            default_pitch: DEFAULT_PITCH,
            zoom_min: FOLLOWING_ZOOM_MIN,
            zoom_max: FOLLOWING_ZOOM_MAX,
            pitch_near_maneuver: PitchNearManeuver::default(),
            geometry_framing_after_maneuver: GeometryFramingAfterManeuver::default(),
            bearing_smoothing: BearingSmoothing::default(),
            intersection_density: IntersectionDensity::default(),
        }
    }
}

/// Optionen des Overview-Modus (Routen-Übersicht).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverviewCameraOptions {
    /// Zoom-Obergrenze der Übersicht
    pub maximum_zoom_level: f64,
}

impl Default for OverviewCameraOptions {
    fn default() -> Self {
        Self {
            maximum_zoom_level: OVERVIEW_ZOOM_MAX,
        }
    }
}

/// Alle zur Laufzeit änderbaren Kamera-Optionen.
///
/// Zwischen Updates vom Host veränderbar; während einer einzelnen
/// Pose-Berechnung nur lesend verwendet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportOptions {
    /// Following-Modus
    #[serde(default)]
    pub following: FollowingCameraOptions,
    /// Overview-Modus
    #[serde(default)]
    pub overview: OverviewCameraOptions,
}

impl ViewportOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(options) => {
                    log::info!("Kamera-Optionen geladen aus: {}", path.display());
                    options
                }
                Err(e) => {
                    log::warn!(
                        "Kamera-Optionen-Datei fehlerhaft, verwende Standardwerte: {}",
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Kamera-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let options = ViewportOptions::default();
        assert_eq!(options.following.default_pitch, DEFAULT_PITCH);
        assert_eq!(options.following.zoom_min, FOLLOWING_ZOOM_MIN);
        assert_eq!(options.following.zoom_max, FOLLOWING_ZOOM_MAX);
        assert_eq!(options.overview.maximum_zoom_level, OVERVIEW_ZOOM_MAX);
        assert!(options.following.pitch_near_maneuver.enabled);
        assert_eq!(
            options.following.bearing_smoothing.maximum_bearing_smoothing_angle,
            BEARING_SMOOTHING_MAX_ANGLE
        );
    }

    #[test]
    fn toml_roundtrip_preserves_options() {
        let mut options = ViewportOptions::default();
        options.following.default_pitch = 40.0;
        options.following.bearing_smoothing.enabled = false;

        let content = toml::to_string_pretty(&options).unwrap();
        let restored: ViewportOptions = toml::from_str(&content).unwrap();
        assert_eq!(restored, options);
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let options =
            ViewportOptions::load_from_file(std::path::Path::new("/nonexistent/options.toml"));
        assert_eq!(options, ViewportOptions::default());
    }

    #[test]
    fn save_and_reload_roundtrip_on_disk() {
        let path = std::env::temp_dir().join("navcam_viewport_options_test.toml");
        let mut options = ViewportOptions::default();
        options.following.zoom_max = 15.0;
        options.overview.maximum_zoom_level = 14.5;

        options.save_to_file(&path).expect("Speichern muss gelingen");
        let reloaded = ViewportOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(reloaded, options);
    }
}
