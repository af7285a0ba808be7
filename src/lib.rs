//! Interaktiver 2D-Pfad-Editor-Kern.
//!
//! Datenmodell, Zeichenmodus-Zustandsmaschinen, Snapshot-Undo und Export
//! als Library. Die Zeichenfläche selbst (Rendering, Fenster, Dialoge)
//! liefert nur Pointer-Events und konsumiert die exportierten Kurven;
//! sie ist bewusst nicht Teil dieses Crates.

pub mod app;
pub mod core;
pub mod export;
pub mod shared;

pub use app::{
    EditHistory, EditorController, EditorState, GestureState, InputEvent, PointerButton,
    PointerPhase,
};
pub use crate::core::{
    EditorError, PathBounds, PathDocument, PathPoint, PointHit, Viewport, WorldMapping,
};
pub use export::{
    export_motion, flatten_path, motion_samples, parse_document, path_length_world,
    segment_duration, segment_length, write_document, write_motion_curves, CurveChannel,
    CurveSink, Keyframe, KeyframeCurves, MotionSample, TangentMode,
};
pub use shared::{AnimationAxis, DrawMode, EditorOptions};
