//! Export des Pfads als zeitparametrisierte Bewegungskurven.
//!
//! Keyframe-Zeiten entstehen aus zurückgelegter Welt-Distanz geteilt
//! durch eine konstante Geschwindigkeit (Arc-Length-Pacing), nicht aus
//! gleichförmigen Zeitschritten. Kurvensegmente rücken pro Sub-Segment
//! vor, nicht als ein einzelner Sprung — die Bewegung bleibt damit auch
//! durch Kurven näherungsweise gleichförmig.

use crate::core::{EditorError, PathDocument, PathPoint, WorldMapping};
use crate::shared::curve_geometry::sample_quadratic;
use crate::shared::options::CURVE_STEP_COUNT;
use crate::shared::AnimationAxis;
use glam::Vec2;

/// Ein Welt-Sample der Bewegungskurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Zeit in Sekunden ab Pfadbeginn
    pub time: f32,
    /// Welt-Position inklusive Dokument-Offset
    pub position: Vec2,
}

/// Tangenten-Hinweis eines Keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TangentMode {
    /// Linear in den Key hinein
    Linear,
}

/// Ein Keyframe einer Achsen-Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Zeit in Sekunden
    pub time: f32,
    /// Achsen-Wert in Welt-Einheiten
    pub value: f32,
    /// Eingangs-Tangente des Keys
    pub in_tangent: TangentMode,
}

/// Ziel-Kanal einer Achsen-Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveChannel {
    /// Horizontale Komponente
    X,
    /// Vertikale Komponente auf Y
    Y,
    /// Vertikale Komponente auf Z
    Z,
}

/// Senke für exportierte Achsen-Kurven; wird pro Export frisch vom
/// Aufrufer erstellt und gehört ihm.
pub trait CurveSink {
    /// Hängt einen Keyframe an die Kurve des Kanals an (Zeitreihenfolge).
    fn add_key(&mut self, channel: CurveChannel, key: Keyframe);
}

/// In-Memory-Implementierung der Senke.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct KeyframeCurves {
    /// Keys des X-Kanals
    pub x: Vec<Keyframe>,
    /// Keys des Y-Kanals
    pub y: Vec<Keyframe>,
    /// Keys des Z-Kanals
    pub z: Vec<Keyframe>,
}

impl CurveSink for KeyframeCurves {
    fn add_key(&mut self, channel: CurveChannel, key: Keyframe) {
        match channel {
            CurveChannel::X => self.x.push(key),
            CurveChannel::Y => self.y.push(key),
            CurveChannel::Z => self.z.push(key),
        }
    }
}

/// Flacht den Pfad zu einer Screen-Polyline ab.
///
/// Vertices werden direkt übernommen; ein Anker expandiert zu den
/// Kurven-Samples seines Segments (innere Samples Viewport-gefiltert,
/// Endpunkt exakt). Der Vertex, der ein Kurvensegment abschließt, wird
/// nicht doppelt emittiert. Anker ohne beide Nachbarn werden abgelehnt,
/// statt außerhalb der Punktfolge zu indizieren.
pub fn flatten_path(
    document: &PathDocument,
    mapping: &WorldMapping,
) -> Result<Vec<Vec2>, EditorError> {
    let points = &document.points;
    let viewport = *mapping.viewport();
    let mut polyline = Vec::with_capacity(points.len());

    for (index, point) in points.iter().enumerate() {
        if index > 0 && points[index - 1].is_anchor {
            // Endpunkt des Kurvensegments wurde bereits emittiert
            continue;
        }

        if point.is_anchor {
            let (start, end) = anchor_neighbors(points, index)?;
            let samples = sample_quadratic(start, point.position, end, CURVE_STEP_COUNT, |p| {
                viewport.contains(p)
            });
            // erstes Sample entspricht dem bereits emittierten Startvertex
            polyline.extend(samples.into_iter().skip(1));
        } else {
            polyline.push(point.position);
        }
    }

    Ok(polyline)
}

/// Liefert die Positionen der beiden Nicht-Anker-Nachbarn eines Ankers.
fn anchor_neighbors(points: &[PathPoint], index: usize) -> Result<(Vec2, Vec2), EditorError> {
    let prev = index
        .checked_sub(1)
        .map(|i| &points[i])
        .filter(|p| !p.is_anchor);
    let next = points.get(index + 1).filter(|p| !p.is_anchor);

    match (prev, next) {
        (Some(p), Some(n)) => Ok((p.position, n.position)),
        _ => Err(EditorError::MalformedAnchorSequence { index }),
    }
}

/// Welt-Distanz zwischen zwei Screen-Positionen.
///
/// Beide Punkte werden erst in Welt-Koordinaten abgebildet; die Einheit
/// ist damit Welt, nicht Screen-Pixel.
pub fn segment_length(mapping: &WorldMapping, a: Vec2, b: Vec2) -> f32 {
    mapping.screen_to_world(a).distance(mapping.screen_to_world(b))
}

/// Dauer eines Segments bei konstanter Geschwindigkeit.
pub fn segment_duration(mapping: &WorldMapping, a: Vec2, b: Vec2, speed: f32) -> f32 {
    segment_length(mapping, a, b) / speed
}

/// Gesamtlänge des Pfads in Welt-Einheiten.
pub fn path_length_world(
    document: &PathDocument,
    mapping: &WorldMapping,
) -> Result<f32, EditorError> {
    let polyline = flatten_path(document, mapping)?;
    Ok(polyline
        .windows(2)
        .map(|pair| segment_length(mapping, pair[0], pair[1]))
        .sum())
}

/// Erzeugt die zeitparametrisierten Welt-Samples des Pfads.
///
/// Das erste Sample liegt bei t = 0; jedes weitere rückt um
/// Welt-Distanz / `speed` vor. Der Dokument-Offset wird auf jede
/// Position addiert, geht aber nicht in die Distanzen ein.
pub fn motion_samples(
    document: &PathDocument,
    mapping: &WorldMapping,
    speed: f32,
) -> Result<Vec<MotionSample>, EditorError> {
    if document.points.len() < 2 {
        return Err(EditorError::InsufficientPoints {
            needed: 2,
            found: document.points.len(),
        });
    }
    if speed <= 0.0 {
        return Err(EditorError::InvalidSpeed { speed });
    }

    let polyline = flatten_path(document, mapping)?;
    let mut samples = Vec::with_capacity(polyline.len());
    let mut time = 0.0f32;
    let mut previous_screen: Option<Vec2> = None;

    for screen in polyline {
        if let Some(previous) = previous_screen {
            time += segment_duration(mapping, previous, screen, speed);
        }
        samples.push(MotionSample {
            time,
            position: mapping.screen_to_world(screen) + document.offset,
        });
        previous_screen = Some(screen);
    }

    Ok(samples)
}

/// Schreibt die Samples als Achsen-Kurven in die Senke.
///
/// Kanal X erhält immer die horizontale Komponente; die vertikale geht
/// je nach `axis` an Y oder Z. Jeder Key trägt den
/// Linear-In-Tangenten-Hinweis.
pub fn write_motion_curves(
    samples: &[MotionSample],
    axis: AnimationAxis,
    sink: &mut impl CurveSink,
) {
    let vertical = match axis {
        AnimationAxis::Y => CurveChannel::Y,
        AnimationAxis::Z => CurveChannel::Z,
    };

    for sample in samples {
        sink.add_key(
            CurveChannel::X,
            Keyframe {
                time: sample.time,
                value: sample.position.x,
                in_tangent: TangentMode::Linear,
            },
        );
        sink.add_key(
            vertical,
            Keyframe {
                time: sample.time,
                value: sample.position.y,
                in_tangent: TangentMode::Linear,
            },
        );
    }
}

/// Komplett-Export: Samples erzeugen und in die Senke schreiben.
///
/// Gibt die Anzahl der Keyframes pro Achse zurück.
pub fn export_motion(
    document: &PathDocument,
    mapping: &WorldMapping,
    speed: f32,
    axis: AnimationAxis,
    sink: &mut impl CurveSink,
) -> Result<usize, EditorError> {
    let samples = motion_samples(document, mapping, speed)?;
    write_motion_curves(&samples, axis, sink);
    log::info!("{} Keyframes pro Achse exportiert", samples.len());
    Ok(samples.len())
}
