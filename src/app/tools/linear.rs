//! Linear-Modus: ein einzelnes gerades Segment mit Live-Vorschau.

use super::{begin_stroke, discard_if_incomplete, end_stroke, StrokeStart};
use crate::app::events::PointerPhase;
use crate::app::state::EditorState;
use crate::core::PathPoint;
use glam::Vec2;

/// Verarbeitet ein Zeichen-Event im Linear-Modus.
pub(crate) fn handle_linear(state: &mut EditorState, phase: PointerPhase, pointer: Vec2) {
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

/// Ersetzt den tentativen Schwanz durch exakt `[Start, Pointer]`.
///
/// Voller Ersatz statt inkrementellem Anhängen: die Vorschau ist damit
/// idempotent gegenüber der Pointer-Bewegung, Richtungswechsel lassen
/// keine Zwischenpunkte zurück.
fn rebuild_preview(state: &mut EditorState, start: usize, pointer: Vec2) {
    let cached = state.document.points[start].position;
    state.document.truncate_from(start);
    state.document.push(PathPoint::new(cached));
    state.document.push(PathPoint::new(pointer));
}
