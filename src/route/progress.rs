//! Snapshot des Routenfortschritts mit abgeleiteten Kamera-Eingaben.

use std::sync::Arc;

use crate::core::{polyline, GeoCoordinate};

use super::{Route, RouteLeg, RouteStep};

/// Fortschritts-Snapshot: Route plus aktuelle Leg-/Step-Indizes.
///
/// Wird pro Location-Update vom Routing-Layer geliefert und von der
/// Kamera nur gelesen. Klonen ist billig (geteilte Route).
#[derive(Debug, Clone)]
pub struct RouteProgress {
    /// Die aktive Route
    pub route: Arc<Route>,
    /// Index des aktuellen Legs
    pub leg_index: usize,
    /// Index des aktuellen Steps im aktuellen Leg
    pub step_index: usize,
}

impl RouteProgress {
    /// Erstellt einen Fortschritts-Snapshot.
    pub fn new(route: Arc<Route>, leg_index: usize, step_index: usize) -> Self {
        Self {
            route,
            leg_index,
            step_index,
        }
    }

    /// Aktueller Leg, falls der Index gültig ist.
    pub fn current_leg(&self) -> Option<&RouteLeg> {
        self.route.legs.get(self.leg_index)
    }

    /// Aktueller Step, falls die Indizes gültig sind.
    pub fn current_step(&self) -> Option<&RouteStep> {
        self.current_leg()?.steps.get(self.step_index)
    }

    /// Step nach dem aktuellen (dessen Manöver steht bevor).
    pub fn upcoming_step(&self) -> Option<&RouteStep> {
        self.current_leg()?.steps.get(self.step_index + 1)
    }

    /// `true` wenn der aktuelle Step der vorletzte des Legs ist.
    pub fn is_on_penultimate_step(&self) -> bool {
        self.current_leg()
            .map(|leg| leg.steps.len() >= 2 && self.step_index == leg.steps.len() - 2)
            .unwrap_or(false)
    }

    /// Alle Steps ab dem nächsten Step des aktuellen Legs.
    ///
    /// Steht das Fahrzeug bereits auf dem letzten Step, wird dieser
    /// selbst geliefert, damit das Framing nie leer ausgeht.
    pub fn steps_after_current(&self) -> &[RouteStep] {
        let Some(leg) = self.current_leg() else {
            return &[];
        };
        if leg.steps.is_empty() {
            return &[];
        }
        let next = (self.step_index + 1).min(leg.steps.len() - 1);
        &leg.steps[next..]
    }

    /// Noch nicht befahrene Geometrie des aktuellen Steps ab `position`.
    pub fn remaining_step_geometry(&self, position: GeoCoordinate) -> Vec<GeoCoordinate> {
        self.current_step()
            .map(|step| polyline::suffix_from(&step.geometry, position))
            .unwrap_or_default()
    }

    /// Restdistanz auf dem aktuellen Step ab `position` in Metern.
    pub fn distance_remaining_on_step(&self, position: GeoCoordinate) -> Option<f64> {
        polyline::length(&self.remaining_step_geometry(position))
    }

    /// Mittlerer Kreuzungsabstand auf dem aktuellen Step in Metern.
    ///
    /// Gemessen über [Step-Start] + Kreuzungen + [Step-Ende]; Abstände
    /// bis `minimum_spacing` werden als Messrauschen verworfen. 0.0 wenn
    /// keine verwertbaren Abstände übrig bleiben.
    pub fn average_intersection_spacing(&self, minimum_spacing: f64) -> f64 {
        let Some(step) = self.current_step() else {
            return 0.0;
        };
        let (Some(first), Some(last)) = (step.geometry.first(), step.geometry.last()) else {
            return 0.0;
        };

        let mut stations = Vec::with_capacity(step.intersections.len() + 2);
        stations.push(*first);
        stations.extend_from_slice(&step.intersections);
        stations.push(*last);

        let spacings: Vec<f64> = stations
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .filter(|spacing| *spacing > minimum_spacing)
            .collect();

        if spacings.is_empty() {
            return 0.0;
        }
        spacings.iter().sum::<f64>() / spacings.len() as f64
    }
}
