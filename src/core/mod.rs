//! Core-Domänentypen: Pfadpunkte, Dokument, Viewport-Abbildung, Fehler.

pub mod document;
pub mod error;
pub mod point;
pub mod viewport;

pub use document::{PathBounds, PathDocument, PointHit};
pub use error::EditorError;
pub use point::PathPoint;
pub use viewport::{Viewport, WorldMapping};
