//! Export-Schicht: Bewegungskurven und JSON-Transport.

pub mod json;
pub mod motion;

pub use json::{parse_document, write_document};
pub use motion::{
    export_motion, flatten_path, motion_samples, path_length_world, segment_duration,
    segment_length, write_motion_curves, CurveChannel, CurveSink, Keyframe, KeyframeCurves,
    MotionSample, TangentMode,
};
