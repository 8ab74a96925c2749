//! Routen-Datenmodell: Route → Legs → Steps.
//!
//! Konsumiertes Modell: die Kamera liest nur, was sie zum Framing
//! braucht (Step-Geometrie, Manövertyp, Kreuzungs-Positionen).

use serde::{Deserialize, Serialize};

use crate::core::{polyline, GeoCoordinate};

use super::ManeuverType;

/// Ein Navigations-Step: Geometrie bis zum nächsten Manöver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Polyline des Steps (erster Punkt = Manöverposition des Steps)
    pub geometry: Vec<GeoCoordinate>,
    /// Manöver am Beginn dieses Steps
    pub maneuver_type: ManeuverType,
    /// Kreuzungs-Positionen entlang des Steps (ohne Start/Ende)
    pub intersections: Vec<GeoCoordinate>,
}

impl RouteStep {
    /// Erstellt einen Step ohne Kreuzungs-Angaben.
    pub fn new(geometry: Vec<GeoCoordinate>, maneuver_type: ManeuverType) -> Self {
        Self {
            geometry,
            maneuver_type,
            intersections: Vec::new(),
        }
    }

    /// Länge der Step-Geometrie in Metern. `None` bei entarteter Geometrie.
    pub fn length(&self) -> Option<f64> {
        polyline::length(&self.geometry)
    }
}

/// Ein Routen-Abschnitt zwischen zwei Wegpunkten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Steps des Legs in Fahrreihenfolge
    pub steps: Vec<RouteStep>,
}

impl RouteLeg {
    /// Erstellt einen Leg aus Steps.
    pub fn new(steps: Vec<RouteStep>) -> Self {
        Self {
            steps,
        }
    }
}

/// Vollständige Route über alle Wegpunkte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Legs in Fahrreihenfolge
    pub legs: Vec<RouteLeg>,
}

impl Route {
    /// Erstellt eine Route aus Legs.
    pub fn new(legs: Vec<RouteLeg>) -> Self {
        Self {
            legs,
        }
    }
}
