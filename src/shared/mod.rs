//! Layer-neutrale Geometrie und Konfiguration.

pub mod curve_geometry;
pub mod options;

pub use options::{AnimationAxis, DrawMode, EditorOptions};
