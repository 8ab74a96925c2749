//! Vierseitige Pixel-Abstände (Padding) eines Viewports.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Abstände vom Viewport-Rand in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Abstand von oben
    pub top: f64,
    /// Abstand von links
    pub left: f64,
    /// Abstand von unten
    pub bottom: f64,
    /// Abstand von rechts
    pub right: f64,
}

impl EdgeInsets {
    /// Null-Abstände auf allen Seiten.
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Erstellt Abstände aus allen vier Seiten.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Horizontale Gesamtabstände (links + rechts).
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Vertikale Gesamtabstände (oben + unten).
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Add for EdgeInsets {
    type Output = EdgeInsets;

    /// Seitenweise Summe, z.B. Safe-Area plus feste Zusatzabstände.
    fn add(self, other: EdgeInsets) -> EdgeInsets {
        EdgeInsets::new(
            self.top + other.top,
            self.left + other.left,
            self.bottom + other.bottom,
            self.right + other.right,
        )
    }
}
