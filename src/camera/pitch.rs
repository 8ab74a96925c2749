//! Pitch-Koeffizient: wie stark die Kamera vor dem Manöver abflacht.

use crate::core::GeoCoordinate;
use crate::route::RouteProgress;
use crate::shared::PitchNearManeuver;

/// Berechnet den Pitch-Koeffizienten in [0, 1].
///
/// Der Koeffizient multipliziert die Kamera-Neigung: 1.0 = volle
/// Neigung, 0.0 = Draufsicht. Innerhalb des konfigurierten Distanz-
/// Bandes vor dem Manöver fällt er linear von 1.0 auf 0.0.
///
/// Das Manöver wird ignoriert (Koeffizient bleibt 1.0), wenn die
/// Abflachung deaktiviert ist, kein Folge-Step existiert, der aktuelle
/// Step der vorletzte des Legs ist oder das bevorstehende Manöver ein
/// weicher Übergang ist.
pub fn pitch_coefficient(
    progress: &RouteProgress,
    position: GeoCoordinate,
    options: &PitchNearManeuver,
) -> f64 {
    if !options.enabled {
        return 1.0;
    }

    let mut ignore_maneuver = false;
    if let Some(upcoming) = progress.upcoming_step() {
        // TODO: Klären, ob der vorletzte Step wirklich von der
        // Abflachung ausgenommen bleiben soll (Verhalten aus dem
        // Fahrversuch übernommen, Begründung steht aus).
        if progress.is_on_penultimate_step() {
            ignore_maneuver = true;
        }
        if upcoming.maneuver_type.is_soft_transition() {
            ignore_maneuver = true;
        }
    }
    if ignore_maneuver {
        return 1.0;
    }

    let Some(distance) = progress.distance_remaining_on_step(position) else {
        return 1.0;
    };

    let trigger = options.trigger_distance_to_maneuver;
    let flattened = options.flattened_distance_to_maneuver;
    if trigger <= flattened {
        // Entartetes Band: keine sinnvolle Interpolation möglich
        return 1.0;
    }

    (distance.clamp(flattened, trigger) - flattened) / (trigger - flattened)
}
