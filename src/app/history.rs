//! Snapshot-basierter Undo/Redo-Verlauf über dem Pfad-Dokument.

use crate::core::PathDocument;

/// Einfacher Undo/Redo-Manager mit Snapshotting.
///
/// Snapshots sind vollständige, unabhängige Kopien des Dokuments: eine
/// spätere Mutation des Live-Dokuments verändert nie einen gespeicherten
/// Eintrag, und ein wiederhergestellter Eintrag teilt keinen Speicher mit
/// dem Verlauf. Der Redo-Stack wird nur von [`EditHistory::clear`]
/// geleert; `record` lässt ihn unangetastet, Undo/Redo konsumieren und
/// befüllen ihn gegenseitig.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<PathDocument>,
    redo_stack: Vec<PathDocument>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen Verlauf mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt eine Kopie des Dokuments auf den Undo-Stack.
    ///
    /// Genau ein `record` pro abgeschlossener User-Geste, nie pro
    /// Zwischen-Sample — ein Undo nimmt damit immer eine ganze Geste
    /// zurück.
    pub fn record(&mut self, document: &PathDocument) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(document.clone());
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop Undo-Stack und legt `current` auf den Redo-Stack; gibt das
    /// wiederherzustellende Dokument zurück.
    pub fn pop_undo_with_current(&mut self, current: PathDocument) -> Option<PathDocument> {
        if let Some(previous) = self.undo_stack.pop() {
            if self.redo_stack.len() >= self.max_depth {
                self.redo_stack.remove(0);
            }
            self.redo_stack.push(current);
            Some(previous)
        } else {
            None
        }
    }

    /// Pop Redo-Stack und legt `current` auf den Undo-Stack; gibt das
    /// wiederherzustellende Dokument zurück.
    pub fn pop_redo_with_current(&mut self, current: PathDocument) -> Option<PathDocument> {
        if let Some(next) = self.redo_stack.pop() {
            if self.undo_stack.len() >= self.max_depth {
                self.undo_stack.remove(0);
            }
            self.undo_stack.push(current);
            Some(next)
        } else {
            None
        }
    }

    /// Leert beide Stacks; wird beim Session-Start aufgerufen.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PathPoint;
    use glam::Vec2;

    fn document_with_point_count(count: usize) -> PathDocument {
        let mut document = PathDocument::new();
        for i in 0..count {
            let f = i as f32;
            document.push(PathPoint::new(Vec2::new(f * 10.0, f * 7.0)));
        }
        document
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_enables_undo() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record(&document_with_point_count(1));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record(&document_with_point_count(2));

        let restored = history
            .pop_undo_with_current(document_with_point_count(5))
            .expect("Undo vorhanden");

        assert_eq!(restored.points.len(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record(&document_with_point_count(2));
        let _restored = history.pop_undo_with_current(document_with_point_count(5));

        let redone = history
            .pop_redo_with_current(document_with_point_count(2))
            .expect("Redo vorhanden");

        assert_eq!(redone.points.len(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_leaves_redo_stack_alone() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record(&document_with_point_count(1));
        let _restored = history.pop_undo_with_current(document_with_point_count(3));
        assert!(history.can_redo());

        // Redo wird nur durch clear() geleert, nicht durch record()
        history.record(&document_with_point_count(7));
        assert!(history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record(&document_with_point_count(i));
        }

        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(document_with_point_count(99));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(history
            .pop_undo_with_current(document_with_point_count(1))
            .is_none());
        assert!(history
            .pop_redo_with_current(document_with_point_count(1))
            .is_none());
    }

    #[test]
    fn snapshot_is_independent_of_live_document() {
        let mut history = EditHistory::new_with_capacity(10);
        let mut live = document_with_point_count(1);
        history.record(&live);

        live.points[0].position = Vec2::new(999.0, 999.0);

        let restored = history
            .pop_undo_with_current(live.clone())
            .expect("Undo vorhanden");
        assert_eq!(restored.points[0].position, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record(&document_with_point_count(1));
        let _restored = history.pop_undo_with_current(document_with_point_count(2));
        assert!(history.can_redo());

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
