//! Pointer-Eingabe-Events der externen Zeichenfläche.

use glam::Vec2;

/// Pointer-Taste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Taste 0: Zeichnen
    Draw,
    /// Taste 1: Punkt verschieben
    Reposition,
}

/// Phase einer Pointer-Geste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Taste gedrückt
    Down,
    /// Bewegung bei gedrückter Taste (einmal pro Frame)
    Drag,
    /// Taste losgelassen
    Up,
}

/// Ein Eingabe-Event, einmal pro Frame von der Zeichenfläche geliefert.
///
/// Events werden synchron und vollständig verarbeitet, bevor das nächste
/// akzeptiert wird; Hintergrundarbeit gibt es nicht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    /// Auslösende Taste
    pub button: PointerButton,
    /// Phase der Geste
    pub phase: PointerPhase,
    /// Pointer-Position in Screen-Koordinaten
    pub position: Vec2,
}

impl InputEvent {
    /// Erstellt ein Eingabe-Event.
    pub fn new(button: PointerButton, phase: PointerPhase, position: Vec2) -> Self {
        Self {
            button,
            phase,
            position,
        }
    }
}
