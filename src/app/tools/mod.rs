//! Die drei Zeichenmodus-Zustandsmaschinen und ihre gemeinsamen Gesten.
//!
//! Jeder Modus verarbeitet Press/Drag/Release der Zeichen-Taste; die
//! Verschiebegeste der zweiten Taste ist für alle Modi identisch.

mod curve;
mod freehand;
mod linear;

pub(crate) use curve::handle_curve;
pub(crate) use freehand::handle_freehand;
pub(crate) use linear::handle_linear;

use super::events::PointerPhase;
use super::state::EditorState;
use crate::core::PathPoint;
use glam::Vec2;

/// Wie der Startpunkt einer Geste platziert wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StrokeStart {
    /// Neuer Punkt an der Pointer-Position (Freihand)
    AtPointer,
    /// Neuer Punkt an der Position des fortgesetzten Punkts (Linear/Kurve)
    AtContinuedPoint,
}

/// Gemeinsame Press-Regel aller Zeichenmodi.
///
/// Weiterzeichnen ab dem nächstgelegenen Nicht-Anker-Punkt: der Pfad wird
/// ab dessen Index abgeschnitten (einschließlich) und der Startpunkt neu
/// angehängt. Bei leerem Pfad beginnt die Geste bei Index 0. Registriert
/// genau einen Undo-Snapshot pro begonnener Geste.
pub(crate) fn begin_stroke(state: &mut EditorState, pointer: Vec2, start: StrokeStart) {
    if !state.viewport.contains(pointer) {
        return;
    }

    if let Some(index) = state.nearest_index {
        // Anker sind keine gültigen Fortsetzungspunkte
        if !state.document.points[index].is_anchor {
            state.record_undo_snapshot();

            let continued = state.document.points[index].position;
            state.document.truncate_from(index);
            state.gesture.start_index = Some(index);

            let position = match start {
                StrokeStart::AtPointer => pointer,
                StrokeStart::AtContinuedPoint => continued,
            };
            state.document.push(PathPoint::new(position));
            state.gesture.draw_active = true;
        }
    } else if state.document.points.is_empty() {
        state.record_undo_snapshot();

        state.gesture.start_index = Some(0);
        state.document.push(PathPoint::new(pointer));
        state.gesture.draw_active = true;
    }
}

/// Verwirft die Spur, wenn weniger als zwei Punkte zustande kamen.
///
/// Eine Ein-Punkt-Spur kann weder gerendert noch exportiert werden und
/// zählt als normaler User-Abbruch (Klick ohne Ziehen), nicht als Fehler.
pub(crate) fn discard_if_incomplete(state: &mut EditorState) -> bool {
    if state.document.points.len() < 2 {
        state.document.clear_points();
        return true;
    }
    false
}

/// Setzt Gesten- und Nearest-Zustand nach einem Release zurück.
pub(crate) fn end_stroke(state: &mut EditorState) {
    state.gesture.draw_active = false;
    state.gesture.start_index = None;
    state.nearest_index = None;
}

/// Verschiebegeste (Taste 1), von allen Modi geteilt.
///
/// Der einzelne Snapshot beim Press deckt die gesamte Bewegung ab;
/// Zwischenpositionen landen nicht im Verlauf. Beim Press rastet der
/// gegriffene Punkt sofort auf den Pointer ein.
pub(crate) fn handle_reposition(state: &mut EditorState, phase: PointerPhase, pointer: Vec2) {
    match phase {
        PointerPhase::Down => {
            if let Some(index) = state.nearest_index {
                state.record_undo_snapshot();

                state.gesture.moving_index = Some(index);
                state.document.points[index].position = pointer;
                state.gesture.move_active = true;
            }
        }
        PointerPhase::Drag => {
            if !state.gesture.move_active || !state.viewport.contains(pointer) {
                return;
            }
            if let Some(index) = state.gesture.moving_index {
                if index < state.document.points.len() {
                    state.document.points[index].position = pointer;
                }
            }
        }
        PointerPhase::Up => {
            if state.gesture.move_active {
                state.gesture.move_active = false;
                state.gesture.moving_index = None;
            }
        }
    }
}
