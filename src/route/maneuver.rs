//! Manövertypen und ihre Kamera-relevante Kategorisierung.

use serde::{Deserialize, Serialize};

/// Manövertyp am Beginn eines Route-Steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManeuverType {
    /// Abfahrt am Routenstart
    Depart,
    /// Abbiegen an einer Kreuzung
    Turn,
    /// Weiterfahrt ohne Richtungswechsel
    Continue,
    /// Einfädeln in einen anderen Fahrstreifen/Straßenzug
    Merge,
    /// Auffahrt auf eine Schnellstraße
    OnRamp,
    /// Abfahrt von einer Schnellstraße
    OffRamp,
    /// Gabelung
    Fork,
    /// Abbiegen am Ende der Straße
    EndOfRoad,
    /// Einfahrt in einen Kreisverkehr
    Roundabout,
    /// Ausfahrt aus einem Kreisverkehr
    ExitRoundabout,
    /// Ankunft am Ziel
    Arrive,
}

impl ManeuverType {
    /// Weiche Übergänge: Manöver ohne harte Richtungsänderung.
    ///
    /// Für diese Typen bleibt die Kamera geneigt, statt vor dem Manöver
    /// in die Draufsicht abzuflachen. Die Menge ist hier zentral
    /// getaggt, damit sie nicht über Aufrufer verstreut wird.
    pub fn is_soft_transition(self) -> bool {
        matches!(
            self,
            ManeuverType::Continue
                | ManeuverType::Merge
                | ManeuverType::OnRamp
                | ManeuverType::OffRamp
                | ManeuverType::Fork
        )
    }
}
