//! Session-Zustand des Editors und dokumentweite Operationen.

use crate::app::history::EditHistory;
use crate::core::{EditorError, PathBounds, PathDocument, Viewport};
use crate::export::json;
use crate::shared::options::HISTORY_DEPTH;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Zustand der aktiven Pointer-Gesten, getrennt pro Taste.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureState {
    /// Läuft gerade eine Zeichengeste (Taste 0)?
    pub draw_active: bool,
    /// Index, an dem die aktuelle Zeichengeste begonnen hat
    pub start_index: Option<usize>,
    /// Läuft gerade eine Verschiebegeste (Taste 1)?
    pub move_active: bool,
    /// Index des Punkts, der gerade verschoben wird
    pub moving_index: Option<usize>,
}

/// Explizit konstruierte Editier-Session.
///
/// Hält das einzige Live-Dokument. Alle Lese- und Schreibzugriffe laufen
/// synchron auf dem Turn des auslösenden Events; außerhalb der Session
/// existiert kein Zustand.
pub struct EditorState {
    /// Das aktive Dokument
    pub document: PathDocument,
    /// Screen-Rechteck der Zeichenfläche
    pub viewport: Viewport,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Undo/Redo-Verlauf (Snapshot-basiert)
    pub history: EditHistory,
    /// Punkt-Index, der dem Pointer aktuell am nächsten ist
    /// (innerhalb der Snap-Schwelle), einmal pro Frame aktualisiert
    pub nearest_index: Option<usize>,
    /// Aktive Gesten pro Taste
    pub gesture: GestureState,
}

impl EditorState {
    /// Erstellt eine neue Session mit leerem Dokument und leerem Verlauf.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            document: PathDocument::new(),
            viewport,
            options: EditorOptions::default(),
            history: EditHistory::new_with_capacity(HISTORY_DEPTH),
            nearest_index: None,
            gesture: GestureState::default(),
        }
    }

    /// Legt einen Undo-Snapshot des aktuellen Dokuments an.
    /// Reduziert Boilerplate in den mutierenden Gesten.
    pub fn record_undo_snapshot(&mut self) {
        self.history.record(&self.document);
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Führt einen Undo-Schritt aus, falls vorhanden.
    ///
    /// Das Dokument wird vollständig ersetzt, nie gemerged.
    pub fn undo(&mut self) {
        let current = self.document.clone();
        if let Some(previous) = self.history.pop_undo_with_current(current) {
            self.document = previous;
            self.reset_interaction();
            log::info!("Undo ausgeführt");
        } else {
            log::debug!("Undo: nichts zu tun");
        }
    }

    /// Führt einen Redo-Schritt aus, falls vorhanden.
    pub fn redo(&mut self) {
        let current = self.document.clone();
        if let Some(next) = self.history.pop_redo_with_current(current) {
            self.document = next;
            self.reset_interaction();
            log::info!("Redo ausgeführt");
        } else {
            log::debug!("Redo: nichts zu tun");
        }
    }

    /// Leert den ganzen Pfad (mit Undo-Snapshot) und setzt Gesten zurück.
    pub fn clear_all(&mut self) {
        self.record_undo_snapshot();
        self.document.clear_points();
        self.reset_interaction();
        log::info!("Pfad geleert");
    }

    /// Setzt das Welt-Rechteck (geclampt).
    ///
    /// Nur solange der Pfad leer ist — danach würden bereits gesetzte
    /// Screen-Punkte ihre Welt-Bedeutung verlieren. Gibt zurück, ob die
    /// Änderung übernommen wurde.
    pub fn set_bounds(&mut self, bounds: PathBounds) -> bool {
        if !self.document.points.is_empty() {
            log::debug!("Bounds eingefroren: Pfad enthält bereits Punkte");
            return false;
        }
        self.document.bounds = bounds.clamped();
        true
    }

    /// Setzt den Export-Offset (Live-Wert, ohne Undo-Snapshot).
    pub fn set_offset(&mut self, offset: Vec2) {
        self.document.offset = offset;
    }

    /// Ersetzt das Dokument durch ein importiertes (vollständig, kein
    /// Merge).
    ///
    /// Erst parsen, dann Snapshot: ein fehlgeschlagener Import lässt
    /// Dokument und Verlauf unangetastet.
    pub fn import_json(&mut self, text: &str) -> Result<(), EditorError> {
        let document = json::parse_document(text)?;
        self.record_undo_snapshot();
        self.document = document;
        self.reset_interaction();
        log::info!("Dokument importiert ({} Punkte)", self.document.points.len());
        Ok(())
    }

    /// Serialisiert das aktuelle Dokument als JSON-Text.
    pub fn export_json(&self) -> Result<String, EditorError> {
        json::write_document(&self.document)
    }

    /// Setzt Nearest-Index und Gesten zurück; nach jedem vollständigen
    /// Dokument-Austausch nötig, da alte Indizes sonst ins Leere zeigen.
    fn reset_interaction(&mut self) {
        self.nearest_index = None;
        self.gesture = GestureState::default();
    }
}
