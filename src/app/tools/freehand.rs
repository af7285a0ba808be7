//! Freihand-Modus: dichte Spur beim Ziehen, Abstands-Vereinfachung beim
//! Commit.

use super::{begin_stroke, discard_if_incomplete, end_stroke, StrokeStart};
use crate::app::events::PointerPhase;
use crate::app::state::EditorState;
use crate::core::PathPoint;
use glam::Vec2;

/// Verarbeitet ein Zeichen-Event im Freihand-Modus.
pub(crate) fn handle_freehand(state: &mut EditorState, phase: PointerPhase, pointer: Vec2) {
    match phase {
        PointerPhase::Down => begin_stroke(state, pointer, StrokeStart::AtPointer),
        PointerPhase::Drag => {
            // jede Frame-Position roh anhängen, kein Snapping
            if state.gesture.draw_active && state.viewport.contains(pointer) {
                state.document.push(PathPoint::new(pointer));
            }
        }
        PointerPhase::Up => {
            if !state.gesture.draw_active {
                return;
            }
            if !discard_if_incomplete(state) {
                if let Some(start) = state.gesture.start_index {
                    simplify_trace(state, start);
                }
            }
            end_stroke(state);
        }
    }
}

/// Ersetzt die rohe Spur ab `start` durch eine Teilfolge mit
/// Mindestabstand.
///
/// Gehalten wird jeweils der erste Punkt, dessen quadrierter Abstand zum
/// zuletzt gehaltenen Punkt `min_distance²` überschreitet; der letzte
/// Rohpunkt bleibt immer erhalten, auch wenn er näher liegt.
fn simplify_trace(state: &mut EditorState, start: usize) {
    let min_distance_sq = state.options.min_distance * state.options.min_distance;
    let raw_len = state.document.points.len() - start;

    let kept = {
        let points = &state.document.points;
        let last = points.len() - 1;

        let mut kept = vec![points[start]];
        let mut i = start;
        while i < last {
            let mut k = i + 1;
            while k < last
                && points[i].position.distance_squared(points[k].position) <= min_distance_sq
            {
                k += 1;
            }
            i = k;
            kept.push(points[i]);
        }
        kept
    };

    log::debug!(
        "Freihand-Spur vereinfacht: {} → {} Punkte (Mindestabstand {})",
        raw_len,
        kept.len(),
        state.options.min_distance
    );

    state.document.truncate_from(start);
    state.document.points.extend(kept);
}
