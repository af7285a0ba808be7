//! Kurven-Modus: quadratisches Segment, Anker folgt dem Mittelpunkt.

use super::{begin_stroke, discard_if_incomplete, end_stroke, StrokeStart};
use crate::app::events::PointerPhase;
use crate::app::state::EditorState;
use crate::core::PathPoint;
use glam::Vec2;

/// Verarbeitet ein Zeichen-Event im Kurven-Modus.
pub(crate) fn handle_curve(state: &mut EditorState, phase: PointerPhase, pointer: Vec2) {
    match phase {
        PointerPhase::Down => begin_stroke(state, pointer, StrokeStart::AtContinuedPoint),
        PointerPhase::Drag => {
            if !state.gesture.draw_active || !state.viewport.contains(pointer) {
                return;
            }
            if let Some(start) = state.gesture.start_index {
                if start < state.document.points.len() {
                    rebuild_preview(state, start, pointer);
                }
            }
        }
        PointerPhase::Up => {
            if state.gesture.draw_active {
                discard_if_incomplete(state);
                end_stroke(state);
            }
        }
    }
}

/// Ersetzt den tentativen Schwanz durch `[Start, Anker, Pointer]`.
///
/// Der Anker liegt exakt auf dem Mittelpunkt zwischen Start und Pointer
/// und ist während der Geste nicht separat greifbar; nachjustiert wird
/// er nach dem Release über die Verschiebegeste.
fn rebuild_preview(state: &mut EditorState, start: usize, pointer: Vec2) {
    let cached = state.document.points[start].position;
    state.document.truncate_from(start);
    state.document.push(PathPoint::new(cached));
    state.document.push(PathPoint::anchor(cached.lerp(pointer, 0.5)));
    state.document.push(PathPoint::new(pointer));
}
