//! Fehler-Taxonomie des Editor-Kerns.

use thiserror::Error;

/// Fehler, die einzelne Editor-Operationen an den Aufrufer melden.
///
/// Jeder Fehler ist auf die auslösende Operation beschränkt: das zuletzt
/// gültige Dokument bleibt unverändert erhalten, es wird nie eine
/// Teilmutation committet.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Degeneriertes Rechteck — eine Achsen-Ausdehnung ist 0, die
    /// Abbildung würde durch 0 teilen
    #[error("degeneriertes Rechteck: left={left}, right={right}, top={top}, bottom={bottom}")]
    InvalidBounds {
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
    },

    /// Zu wenige Punkte für eine Operation, die ein Segment benötigt
    #[error("zu wenige Punkte: {found} vorhanden, mindestens {needed} benötigt")]
    InsufficientPoints { needed: usize, found: usize },

    /// Anker ohne beide Nicht-Anker-Nachbarn (interne Invariante verletzt)
    #[error("Anker an Index {index} hat nicht auf beiden Seiten einen Nachbarpunkt")]
    MalformedAnchorSequence { index: usize },

    /// Export-Geschwindigkeit <= 0; der Aufrufer muss vorher clampen
    #[error("ungültige Export-Geschwindigkeit: {speed}")]
    InvalidSpeed { speed: f32 },

    /// Import-Text konnte nicht gelesen werden
    #[error("Dokument konnte nicht gelesen werden: {0}")]
    Deserialization(#[from] serde_json::Error),
}
