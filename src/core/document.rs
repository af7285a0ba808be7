//! Das Pfad-Dokument: Welt-Rechteck, Punktfolge und Export-Offset.

use super::{EditorError, PathPoint};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Welt-Rechteck, auf das der Viewport abgebildet wird.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathBounds {
    /// Linke Welt-Kante
    pub left: f32,
    /// Rechte Welt-Kante
    pub right: f32,
    /// Obere Welt-Kante
    pub top: f32,
    /// Untere Welt-Kante
    pub bottom: f32,
}

impl PathBounds {
    /// Erstellt ein geclamptes Welt-Rechteck.
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
        .clamped()
    }

    /// Erzwingt `right >= left` und `bottom <= top` durch Clampen des
    /// jeweils zweiten Werts; Eingaben werden nie abgelehnt.
    pub fn clamped(mut self) -> Self {
        if self.right < self.left {
            self.right = self.left;
        }
        if self.bottom > self.top {
            self.bottom = self.top;
        }
        self
    }

    /// Meldet ein degeneriertes Rechteck als Fehler, statt `NaN`/`Inf`
    /// in die Abbildung weiterzureichen.
    pub fn validate(&self) -> Result<(), EditorError> {
        if self.right == self.left || self.top == self.bottom {
            return Err(EditorError::InvalidBounds {
                left: self.left,
                right: self.right,
                top: self.top,
                bottom: self.bottom,
            });
        }
        Ok(())
    }

    /// Welt-Breite.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Welt-Höhe.
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

impl Default for PathBounds {
    fn default() -> Self {
        Self {
            left: -3.0,
            right: 3.0,
            top: 3.0,
            bottom: -3.0,
        }
    }
}

/// Treffer der Nearest-Point-Suche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    /// Index des Punkts in der Pfadfolge
    pub index: usize,
    /// Quadrierter Abstand zur Abfrageposition (Screen-Einheiten²)
    pub distance_sq: f32,
}

/// Das vollständige Dokument einer Editier-Session.
///
/// Alle Punkte liegen by-value in `points` und werden ausschließlich über
/// Indizes referenziert. `Clone` ist ein struktureller Deep-Copy und
/// zugleich der Snapshot-Mechanismus für Undo/Redo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathDocument {
    /// Welt-Rechteck (nur editierbar, solange der Pfad leer ist)
    pub bounds: PathBounds,
    /// Punktfolge in Zeichenreihenfolge
    pub points: Vec<PathPoint>,
    /// Welt-Offset, der beim Export auf alle Positionen addiert wird
    pub offset: Vec2,
}

impl PathDocument {
    /// Erstellt ein leeres Dokument mit Standard-Bounds.
    pub fn new() -> Self {
        Self {
            bounds: PathBounds::default(),
            points: Vec::new(),
            offset: Vec2::ZERO,
        }
    }

    /// Hängt einen Punkt an.
    pub fn push(&mut self, point: PathPoint) {
        self.points.push(point);
    }

    /// Entfernt alle Punkte ab `index` (einschließlich).
    pub fn truncate_from(&mut self, index: usize) {
        self.points.truncate(index);
    }

    /// Entfernt alle Punkte.
    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    /// Findet den Punkt mit minimalem quadrierten Abstand zur
    /// Abfrageposition.
    ///
    /// Linearer Scan in Pfadreihenfolge; bei Gleichstand gewinnt der
    /// zuerst besuchte Punkt. `None` bei leerem Pfad. Die Snap-Schwelle
    /// wendet der Aufrufer an.
    pub fn nearest_point(&self, query: Vec2) -> Option<PointHit> {
        let mut best: Option<PointHit> = None;
        for (index, point) in self.points.iter().enumerate() {
            let distance_sq = point.position.distance_squared(query);
            if best.is_none_or(|hit| distance_sq < hit.distance_sq) {
                best = Some(PointHit { index, distance_sq });
            }
        }
        best
    }

    /// Prüft, dass jeder Anker auf beiden Seiten einen Nicht-Anker-Nachbarn
    /// hat (Kurvensegmente sind immer `[Start, Anker, Ende]`-Tripel).
    pub fn validate_anchor_layout(&self) -> Result<(), EditorError> {
        for (index, point) in self.points.iter().enumerate() {
            if !point.is_anchor {
                continue;
            }
            let has_prev = index > 0 && !self.points[index - 1].is_anchor;
            let has_next = index + 1 < self.points.len() && !self.points[index + 1].is_anchor;
            if !has_prev || !has_next {
                return Err(EditorError::MalformedAnchorSequence { index });
            }
        }
        Ok(())
    }
}

impl Default for PathDocument {
    fn default() -> Self {
        Self::new()
    }
}
