//! Viewport-Datenquelle: baut pro Update vier Kamera-Posen zusammen.
//!
//! Synchron und Single-Thread: jede Berechnung läuft direkt im
//! Location-/Fortschritts-Callback; ein neues Update ersetzt das
//! vorherige vollständig. Fehlende Eingaben überspringen den
//! jeweiligen Modus still, die letzte Pose bleibt gültig.

use std::sync::Arc;

use crate::core::{polyline, shortest_rotation, EdgeInsets, Location};
use crate::map::MapSurface;
use crate::route::RouteProgress;
use crate::shared::options::{
    FALLBACK_LOOKAHEAD_DISTANCE, FOLLOWING_FALLBACK_ZOOM, FREE_DRIVE_ZOOM,
    HEADUNIT_EXTRA_INSETS, OVERVIEW_FALLBACK_ZOOM, PITCH_CEILING, ZOOM_MIN,
};
use crate::shared::ViewportOptions;

use super::anchor::anchor_point;
use super::bearing::resolve_bearing;
use super::framing::{blended_center, compound_maneuver_geometry, framed_midpoint};
use super::pitch::pitch_coefficient;
use super::pose::{CameraPose, NavigationCameraPoses};
use super::zoom::zoom_for_fit;

/// Eingabedaten eines Kamera-Updates.
#[derive(Debug, Clone, Default)]
pub struct ViewportUpdate {
    /// Position aus Free-Drive (ohne aktive Route); hat Vorrang
    pub passive_location: Option<Location>,
    /// Position während aktiver Zielführung
    pub active_location: Option<Location>,
    /// Aktueller Routenfortschritt
    pub route_progress: Option<RouteProgress>,
}

/// Berechnet aus Location- und Fortschritts-Updates die Ziel-Posen
/// für Following- und Overview-Modus auf Handheld und Head-Unit.
pub struct ViewportDataSource {
    /// Laufzeit-Optionen, zwischen Updates vom Host veränderbar
    pub options: ViewportOptions,
    /// Viewport-Padding des Handhelds in Pixeln
    pub viewport_padding: EdgeInsets,
    /// Feste Zusatz-Ränder der Head-Unit über deren Safe-Area
    pub headunit_extra_insets: EdgeInsets,
    surface: Option<Arc<dyn MapSurface>>,
    poses: NavigationCameraPoses,
}

impl ViewportDataSource {
    /// Erstellt eine Datenquelle ohne angebundene Kartenoberfläche.
    pub fn new(options: ViewportOptions) -> Self {
        Self {
            options,
            viewport_padding: EdgeInsets::ZERO,
            headunit_extra_insets: HEADUNIT_EXTRA_INSETS,
            surface: None,
            poses: NavigationCameraPoses::default(),
        }
    }

    /// Bindet die Kartenoberfläche an, auf die sich alle
    /// Projektions- und Maß-Abfragen beziehen.
    pub fn attach_surface(&mut self, surface: Arc<dyn MapSurface>) {
        self.surface = Some(surface);
    }

    /// Löst die Kartenoberfläche; Updates werden bis zur nächsten
    /// Anbindung still übersprungen.
    pub fn detach_surface(&mut self) {
        self.surface = None;
    }

    /// Zuletzt berechnete Posen.
    pub fn poses(&self) -> &NavigationCameraPoses {
        &self.poses
    }

    /// Verarbeitet ein Update und liefert die neuen Posen.
    ///
    /// `None` wenn keine Oberfläche angebunden ist oder kein Modus
    /// verwertbare Eingaben hatte; die bisherigen Posen bleiben dann
    /// unverändert gültig.
    pub fn update(&mut self, update: &ViewportUpdate) -> Option<NavigationCameraPoses> {
        let Some(surface) = self.surface.clone() else {
            log::debug!("Kamera-Update übersprungen: keine Kartenoberfläche angebunden");
            return None;
        };

        let mut changed = self.update_following(surface.as_ref(), update);
        changed |= self.update_overview(surface.as_ref(), update);

        changed.then_some(self.poses)
    }

    /// Following-Modus: Free-Drive oder aktive Zielführung.
    fn update_following(&mut self, surface: &dyn MapSurface, update: &ViewportUpdate) -> bool {
        // Free-Drive: flache, fest gezoomte Pose ohne Bearing
        if let Some(location) = update.passive_location {
            let pose = CameraPose {
                center: location.coordinate,
                zoom: FREE_DRIVE_ZOOM,
                bearing: 0.0,
                pitch: 0.0,
                padding: EdgeInsets::ZERO,
                anchor: surface.size() / 2.0,
            };
            self.poses.following_handheld = pose;
            self.poses.following_headunit = pose;
            return true;
        }

        let (Some(location), Some(progress)) = (update.active_location, &update.route_progress)
        else {
            log::debug!("Following-Update übersprungen: Position oder Fortschritt fehlt");
            return false;
        };

        let following = self.options.following;
        let coefficient =
            pitch_coefficient(progress, location.coordinate, &following.pitch_near_maneuver);
        let pitch = (following.default_pitch * coefficient).clamp(0.0, PITCH_CEILING);

        // Framing-Geometrie: Rest des aktuellen Steps plus zusammengesetzte Manöver
        let maneuver_framing = compound_maneuver_geometry(
            progress.steps_after_current(),
            &following.geometry_framing_after_maneuver,
        );
        let to_maneuver = progress.remaining_step_geometry(location.coordinate);
        let mut frame = to_maneuver.clone();
        frame.extend_from_slice(&maneuver_framing);

        // Zentrum zwischen Fahrzeug und gerahmter Geometrie verblenden
        let center = match framed_midpoint(surface, &frame) {
            Some(midpoint) => blended_center(location.coordinate, midpoint, coefficient),
            None => location.coordinate,
        };

        // Lookahead aus der Kreuzungsdichte des aktuellen Steps
        let density = following.intersection_density;
        let lookahead_distance = if density.enabled {
            progress.average_intersection_spacing(density.minimum_distance_between_intersections)
                * density.average_distance_multiplier
        } else {
            0.0
        };
        let lookahead = polyline::prefix(
            &to_maneuver,
            lookahead_distance.max(FALLBACK_LOOKAHEAD_DISTANCE),
        );
        let bearing = resolve_bearing(
            location.course,
            &lookahead,
            surface.bearing(),
            &following.bearing_smoothing,
        );

        let size = surface.size();
        let build_pose = |insets: EdgeInsets| CameraPose {
            center,
            zoom: zoom_for_fit(
                &frame,
                pitch,
                following.default_pitch,
                insets,
                size,
                FOLLOWING_FALLBACK_ZOOM,
                following.zoom_min,
                following.zoom_max,
            ),
            bearing,
            pitch,
            padding: insets,
            anchor: anchor_point(coefficient, size, insets),
        };

        self.poses.following_handheld = build_pose(self.viewport_padding);
        self.poses.following_headunit =
            build_pose(surface.safe_area() + self.headunit_extra_insets);
        true
    }

    /// Overview-Modus: rahmt die gesamte verbleibende Route flach ein.
    fn update_overview(&mut self, surface: &dyn MapSurface, update: &ViewportUpdate) -> bool {
        let (Some(location), Some(progress)) = (update.active_location, &update.route_progress)
        else {
            log::debug!("Overview-Update übersprungen: Position oder Fortschritt fehlt");
            return false;
        };

        let mut remaining = progress.remaining_step_geometry(location.coordinate);
        for step in progress.steps_after_current() {
            remaining.extend_from_slice(&step.geometry);
        }

        let Some(center) = framed_midpoint(surface, &remaining) else {
            log::debug!("Overview-Update übersprungen: keine verbleibende Routen-Geometrie");
            return false;
        };

        // Bearing wird vom Renderer in der Übersicht ignoriert, bleibt
        // aber sprungfrei relativ zur aktuellen Kamera ausgedrückt
        let bearing = surface.bearing() + shortest_rotation(location.course, surface.bearing());

        let size = surface.size();
        let overview = self.options.overview;
        let following = self.options.following;
        let build_pose = |insets: EdgeInsets| CameraPose {
            center,
            zoom: zoom_for_fit(
                &remaining,
                0.0,
                following.default_pitch,
                insets,
                size,
                OVERVIEW_FALLBACK_ZOOM,
                ZOOM_MIN,
                overview.maximum_zoom_level,
            ),
            bearing,
            pitch: 0.0,
            padding: insets,
            anchor: anchor_point(0.0, size, insets),
        };

        self.poses.overview_handheld = build_pose(self.viewport_padding);
        self.poses.overview_headunit = build_pose(surface.safe_area() + self.headunit_extra_insets);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoCoordinate;
    use crate::map::WebMercatorSurface;
    use crate::route::{ManeuverType, Route, RouteLeg, RouteStep};
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn surface() -> Arc<WebMercatorSurface> {
        Arc::new(WebMercatorSurface::with_camera(
            DVec2::new(400.0, 800.0),
            GeoCoordinate::new(0.0, 0.0),
            14.0,
        ))
    }

    #[test]
    fn update_without_surface_is_skipped() {
        let mut data_source = ViewportDataSource::new(ViewportOptions::default());
        let update = ViewportUpdate {
            passive_location: Some(Location::new(GeoCoordinate::new(0.0, 0.0), 0.0)),
            ..ViewportUpdate::default()
        };
        assert!(data_source.update(&update).is_none());
    }

    #[test]
    fn update_without_any_location_keeps_previous_poses() {
        let mut data_source = ViewportDataSource::new(ViewportOptions::default());
        data_source.attach_surface(surface());
        let before = *data_source.poses();

        assert!(data_source.update(&ViewportUpdate::default()).is_none());
        assert_eq!(*data_source.poses(), before);
    }

    #[test]
    fn passive_location_yields_free_drive_pose() {
        let mut data_source = ViewportDataSource::new(ViewportOptions::default());
        data_source.attach_surface(surface());

        let coordinate = GeoCoordinate::new(47.2, 9.5);
        let update = ViewportUpdate {
            passive_location: Some(Location::new(coordinate, 135.0)),
            ..ViewportUpdate::default()
        };
        let poses = data_source.update(&update).unwrap();

        let pose = poses.following_handheld;
        assert_eq!(pose.center, coordinate);
        assert_relative_eq!(pose.zoom, FREE_DRIVE_ZOOM);
        assert_relative_eq!(pose.bearing, 0.0);
        assert_relative_eq!(pose.pitch, 0.0);
        assert_eq!(pose.padding, EdgeInsets::ZERO);
        assert_relative_eq!(pose.anchor.x, 200.0);
        assert_relative_eq!(pose.anchor.y, 400.0);
        // Free-Drive gilt identisch für die Head-Unit
        assert_eq!(poses.following_headunit, pose);
    }

    #[test]
    fn active_update_fills_following_and_overview() {
        let step = |from: f64, to: f64, maneuver| {
            RouteStep::new(
                vec![GeoCoordinate::new(0.0, from), GeoCoordinate::new(0.0, to)],
                maneuver,
            )
        };
        let route = Route::new(vec![RouteLeg::new(vec![
            step(0.0, 0.02, ManeuverType::Depart),
            step(0.02, 0.03, ManeuverType::Turn),
            step(0.03, 0.04, ManeuverType::Turn),
            step(0.04, 0.05, ManeuverType::Arrive),
        ])]);
        let progress = RouteProgress::new(Arc::new(route), 0, 0);

        let mut data_source = ViewportDataSource::new(ViewportOptions::default());
        data_source.attach_surface(surface());

        let update = ViewportUpdate {
            active_location: Some(Location::new(GeoCoordinate::new(0.0, 0.0), 90.0)),
            route_progress: Some(progress),
            ..ViewportUpdate::default()
        };
        let poses = data_source.update(&update).unwrap();

        // Weit vor dem Manöver: volle Neigung
        assert_relative_eq!(poses.following_handheld.pitch, 45.0);
        // Overview ist immer flach und respektiert die Zoom-Obergrenze
        assert_relative_eq!(poses.overview_handheld.pitch, 0.0);
        assert!(poses.overview_handheld.zoom <= 16.35);
        // Head-Unit-Posen tragen die festen Zusatz-Ränder
        assert_eq!(
            poses.following_headunit.padding,
            HEADUNIT_EXTRA_INSETS
        );
    }
}
