//! Einzelner Pfadpunkt mit Position und Anker-Flag.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ein Punkt des Pfads in Screen-Koordinaten.
///
/// `is_anchor` markiert den Punkt als Kontrollpunkt einer quadratischen
/// Bézier-Kurve zwischen seinen beiden Nachbarn statt als normalen Vertex.
/// Ein Anker steht nie am Pfadanfang oder -ende.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    /// Position in Screen-Koordinaten
    pub position: Vec2,
    /// Kontrollpunkt einer quadratischen Kurve?
    pub is_anchor: bool,
}

impl PathPoint {
    /// Erstellt einen normalen Vertex.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            is_anchor: false,
        }
    }

    /// Erstellt einen Kurven-Anker.
    pub fn anchor(position: Vec2) -> Self {
        Self {
            position,
            is_anchor: true,
        }
    }
}
