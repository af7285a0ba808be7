//! Zentrale Konfiguration der Editier-Session.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Zeichnen ────────────────────────────────────────────────────────

/// Snap-Schwelle (quadriert): Punkte innerhalb von 7 Screen-Einheiten
/// gelten als "nah" für Weiterzeichnen und Verschieben.
pub const SNAP_THRESHOLD_SQ: f32 = 49.0;
/// Standard-Mindestabstand der Freihand-Vereinfachung (Screen-Einheiten).
pub const MIN_DISTANCE_DEFAULT: f32 = 10.0;
/// Unterer Rand des Mindestabstands.
pub const MIN_DISTANCE_MIN: f32 = 1.0;
/// Oberer Rand des Mindestabstands.
pub const MIN_DISTANCE_MAX: f32 = 50.0;

// ── Kurven ──────────────────────────────────────────────────────────

/// Sample-Anzahl pro Kurvensegment (Parameter-Schrittweite 0.1).
pub const CURVE_STEP_COUNT: usize = 10;

// ── Export ──────────────────────────────────────────────────────────

/// Untergrenze der Export-Geschwindigkeit (Welt-Einheiten pro Sekunde).
pub const SPEED_MIN: f32 = 0.01;
/// Standard-Export-Geschwindigkeit.
pub const SPEED_DEFAULT: f32 = 1.0;

// ── Verlauf ─────────────────────────────────────────────────────────

/// Maximale Undo-Tiefe einer Session.
pub const HISTORY_DEPTH: usize = 200;

/// Aktiver Zeichenmodus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawMode {
    /// Freihand-Spur mit Abstands-Vereinfachung beim Commit
    Free,
    /// Einzelnes gerades Segment mit Live-Vorschau
    Linear,
    /// Quadratisches Kurvensegment mit Mittelpunkt-Anker
    Curve,
}

/// Ziel-Achse der vertikalen Export-Komponente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationAxis {
    /// Vertikale Komponente auf der Y-Achse
    Y,
    /// Vertikale Komponente auf der Z-Achse (Top-Down-Bewegung)
    Z,
}

/// Laufzeit-Optionen einer Editier-Session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Aktiver Zeichenmodus
    pub draw_mode: DrawMode,
    /// Mindestabstand der Freihand-Vereinfachung (Screen-Einheiten)
    pub min_distance: f32,
    /// Export-Pacing in Welt-Einheiten pro Sekunde
    pub speed: f32,
    /// Achse, auf die die vertikale Kurvenkomponente exportiert wird
    pub animation_axis: AnimationAxis,
}

impl EditorOptions {
    /// Clampt `min_distance` auf den erlaubten Bereich 1–50.
    pub fn set_min_distance(&mut self, value: f32) {
        self.min_distance = value.clamp(MIN_DISTANCE_MIN, MIN_DISTANCE_MAX);
    }

    /// Clampt `speed` auf die Untergrenze 0.01.
    pub fn set_speed(&mut self, value: f32) {
        self.speed = value.max(SPEED_MIN);
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            draw_mode: DrawMode::Free,
            min_distance: MIN_DISTANCE_DEFAULT,
            speed: SPEED_DEFAULT,
            animation_axis: AnimationAxis::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_speed_clamps_to_floor() {
        let mut options = EditorOptions::default();
        options.set_speed(0.0);
        assert_eq!(options.speed, SPEED_MIN);
        options.set_speed(-5.0);
        assert_eq!(options.speed, SPEED_MIN);
        options.set_speed(2.5);
        assert_eq!(options.speed, 2.5);
    }

    #[test]
    fn set_min_distance_clamps_to_range() {
        let mut options = EditorOptions::default();
        options.set_min_distance(0.2);
        assert_eq!(options.min_distance, MIN_DISTANCE_MIN);
        options.set_min_distance(80.0);
        assert_eq!(options.min_distance, MIN_DISTANCE_MAX);
    }
}
