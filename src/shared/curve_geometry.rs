//! Reine Geometrie-Funktionen für quadratische Bézier-Segmente.
//!
//! Layer-neutral: wird von den Zeichen-Tools und vom Export gemeinsam
//! genutzt, ohne Abhängigkeiten auf den App-Zustand.

use glam::Vec2;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// Sampelt ein quadratisches Segment bei festem Parameter-Schritt.
///
/// Innere Samples bei `t = i/step_count` (t ∈ [0, 1)) werden nur
/// übernommen, wenn `keep` sie akzeptiert; der exakte Endpunkt wird immer
/// ungefiltert angehängt. Die Asymmetrie ist gewollt: ein Segment bleibt
/// auch dann schließbar, wenn innere Samples den sichtbaren Bereich
/// während des Ziehens kurz verlassen.
pub fn sample_quadratic(
    start: Vec2,
    anchor: Vec2,
    end: Vec2,
    step_count: usize,
    keep: impl Fn(Vec2) -> bool,
) -> Vec<Vec2> {
    let step_count = step_count.max(1);
    let mut samples = Vec::with_capacity(step_count + 1);

    for i in 0..step_count {
        let t = i as f32 / step_count as f32;
        let p = quadratic_bezier(start, anchor, end, t);
        if keep(p) {
            samples.push(p);
        }
    }

    samples.push(end);
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bezier_endpoints_and_midpoint() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(5.0, 10.0);
        let p2 = Vec2::new(10.0, 0.0);

        assert!((quadratic_bezier(p0, p1, p2, 0.0) - p0).length() < 1e-4);
        assert!((quadratic_bezier(p0, p1, p2, 1.0) - p2).length() < 1e-4);
        // B(0.5) = 0.25·P0 + 0.5·P1 + 0.25·P2
        assert!((quadratic_bezier(p0, p1, p2, 0.5) - Vec2::new(5.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn test_last_sample_is_exact_end() {
        let end = Vec2::new(7.3, 11.9);
        for step_count in [1, 3, 10, 100] {
            let samples = sample_quadratic(
                Vec2::ZERO,
                Vec2::new(50.0, 50.0),
                end,
                step_count,
                |_| true,
            );
            assert_eq!(*samples.last().unwrap(), end);
        }
    }

    #[test]
    fn test_unfiltered_sampling_yields_step_count_plus_end() {
        let samples = sample_quadratic(
            Vec2::ZERO,
            Vec2::new(5.0, 10.0),
            Vec2::new(10.0, 0.0),
            10,
            |_| true,
        );
        assert_eq!(samples.len(), 11);
        assert_eq!(samples[0], Vec2::ZERO);
    }

    #[test]
    fn test_filter_drops_interior_but_never_end() {
        let end = Vec2::new(10.0, 0.0);
        let samples = sample_quadratic(Vec2::ZERO, Vec2::new(5.0, 10.0), end, 10, |_| false);
        assert_eq!(samples, vec![end]);
    }
}
