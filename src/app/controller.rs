//! Zentrale Event-Verarbeitung: ein Pointer-Event pro Frame.

use super::events::{InputEvent, PointerButton};
use super::state::EditorState;
use super::tools;
use crate::shared::options::SNAP_THRESHOLD_SQ;
use crate::shared::DrawMode;
use glam::Vec2;

/// Orchestriert Pointer-Events auf den Session-Zustand.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet ein Eingabe-Event und führt danach den Nearest-Index
    /// aus der Event-Position nach.
    ///
    /// Ein Press konsumiert damit den Nearest-Index des vorherigen
    /// Frames.
    pub fn handle_input(&mut self, state: &mut EditorState, event: InputEvent) {
        match event.button {
            PointerButton::Draw => match state.options.draw_mode {
                DrawMode::Free => tools::handle_freehand(state, event.phase, event.position),
                DrawMode::Linear => tools::handle_linear(state, event.phase, event.position),
                DrawMode::Curve => tools::handle_curve(state, event.phase, event.position),
            },
            PointerButton::Reposition => {
                tools::handle_reposition(state, event.phase, event.position)
            }
        }

        self.update_nearest(state, event.position);
    }

    /// Frame ohne Tastenaktion: nur den Nearest-Index nachführen.
    pub fn hover(&mut self, state: &mut EditorState, position: Vec2) {
        self.update_nearest(state, position);
    }

    /// Linearer Scan über alle Punkte mit quadriertem Abstandsvergleich;
    /// nur Treffer innerhalb der Snap-Schwelle zählen als "nah".
    fn update_nearest(&self, state: &mut EditorState, pointer: Vec2) {
        state.nearest_index = state
            .document
            .nearest_point(pointer)
            .filter(|hit| hit.distance_sq <= SNAP_THRESHOLD_SQ)
            .map(|hit| hit.index);
    }
}
