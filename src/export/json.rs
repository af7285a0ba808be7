//! Verlustfreie JSON-Serialisierung des Pfad-Dokuments.
//!
//! Reiner Struktur-Roundtrip (Bounds, Offset, Punktfolge mit
//! Anker-Flags); es findet keine semantische Transformation statt.

use crate::core::{EditorError, PathDocument};

/// Serialisiert das Dokument als JSON-Text.
pub fn write_document(document: &PathDocument) -> Result<String, EditorError> {
    Ok(serde_json::to_string(document)?)
}

/// Liest ein Dokument aus JSON-Text.
///
/// Strukturell fehlerhafte Texte und Anker ohne beide Nachbarn werden
/// abgelehnt.
pub fn parse_document(text: &str) -> Result<PathDocument, EditorError> {
    let document: PathDocument = serde_json::from_str(text)?;
    document.validate_anchor_layout()?;
    Ok(document)
}
