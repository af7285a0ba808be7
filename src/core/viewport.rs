//! Viewport-Rechteck und Screen↔Welt-Abbildung.

use super::{EditorError, PathBounds};
use glam::Vec2;

/// Screen-Rechteck der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Linke obere Ecke in Screen-Koordinaten
    pub min: Vec2,
    /// Rechte untere Ecke in Screen-Koordinaten
    pub max: Vec2,
}

impl Viewport {
    /// Erstellt einen Viewport aus zwei Eckpunkten.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Leitet die Viewport-Höhe aus dem Seitenverhältnis des
    /// Welt-Rechtecks ab, damit Welt-Einheiten auf beiden Achsen gleich
    /// groß erscheinen.
    pub fn from_world_aspect(
        origin: Vec2,
        width: f32,
        bounds: &PathBounds,
    ) -> Result<Self, EditorError> {
        bounds.validate()?;
        let ratio = bounds.height() / bounds.width();
        Ok(Self {
            min: origin,
            max: origin + Vec2::new(width, width * ratio),
        })
    }

    /// Halboffener Containment-Test (`min <= p < max`); entscheidet, ob
    /// ein Pointer-Event überhaupt verarbeitet wird.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Ausdehnung des Rechtecks.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Abbildung zwischen Viewport- und Welt-Rechteck.
///
/// Beide Achsen werden unabhängig und ungeclampt interpoliert — Punkte
/// außerhalb der Rechtecke extrapolieren, damit Off-Canvas-Geometrie
/// (etwa beim Export mit Offset) stetig bleibt. Die Y-Achse ist
/// invertiert: Viewport-Oberkante ↦ Welt-`top`, Unterkante ↦ `bottom`.
#[derive(Debug, Clone, Copy)]
pub struct WorldMapping {
    viewport: Viewport,
    bounds: PathBounds,
}

impl WorldMapping {
    /// Validiert beide Rechtecke einmalig; die Abbildungen selbst sind
    /// danach unfehlbar.
    pub fn new(viewport: Viewport, bounds: PathBounds) -> Result<Self, EditorError> {
        bounds.validate()?;
        let size = viewport.size();
        if size.x == 0.0 || size.y == 0.0 {
            return Err(EditorError::InvalidBounds {
                left: viewport.min.x,
                right: viewport.max.x,
                top: viewport.min.y,
                bottom: viewport.max.y,
            });
        }
        Ok(Self { viewport, bounds })
    }

    /// Bildet eine Screen-Position auf Welt-Koordinaten ab.
    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        let fx = (p.x - self.viewport.min.x) / (self.viewport.max.x - self.viewport.min.x);
        let fy = (p.y - self.viewport.min.y) / (self.viewport.max.y - self.viewport.min.y);

        Vec2::new(
            lerp_unclamped(self.bounds.left, self.bounds.right, fx),
            lerp_unclamped(self.bounds.top, self.bounds.bottom, fy),
        )
    }

    /// Exakte Umkehrung von [`Self::screen_to_world`].
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        let fx = (p.x - self.bounds.left) / (self.bounds.right - self.bounds.left);
        let fy = (p.y - self.bounds.top) / (self.bounds.bottom - self.bounds.top);

        Vec2::new(
            lerp_unclamped(self.viewport.min.x, self.viewport.max.x, fx),
            lerp_unclamped(self.viewport.min.y, self.viewport.max.y, fy),
        )
    }

    /// Zugehöriger Viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

/// Ungeclampte lineare Interpolation.
fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mapping() -> WorldMapping {
        let viewport = Viewport::new(Vec2::ZERO, Vec2::new(100.0, 100.0));
        WorldMapping::new(viewport, PathBounds::default()).expect("gültige Rechtecke")
    }

    #[test]
    fn test_screen_to_world_corners() {
        let m = mapping();
        // Oberkante ↦ top, Unterkante ↦ bottom (Y-Inversion)
        let top_left = m.screen_to_world(Vec2::new(0.0, 0.0));
        assert_relative_eq!(top_left.x, -3.0);
        assert_relative_eq!(top_left.y, 3.0);

        let bottom_right = m.screen_to_world(Vec2::new(100.0, 100.0));
        assert_relative_eq!(bottom_right.x, 3.0);
        assert_relative_eq!(bottom_right.y, -3.0);
    }

    #[test]
    fn test_roundtrip_is_identity() {
        let m = mapping();
        for p in [
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(13.7, 92.3),
            Vec2::new(-20.0, 140.0), // außerhalb: Extrapolation bleibt invertierbar
        ] {
            let back = m.world_to_screen(m.screen_to_world(p));
            assert_relative_eq!(back.x, p.x, epsilon = 1e-4);
            assert_relative_eq!(back.y, p.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_contains_is_half_open() {
        let viewport = Viewport::new(Vec2::ZERO, Vec2::new(100.0, 100.0));
        assert!(viewport.contains(Vec2::new(0.0, 0.0)));
        assert!(viewport.contains(Vec2::new(99.9, 99.9)));
        assert!(!viewport.contains(Vec2::new(100.0, 50.0)));
        assert!(!viewport.contains(Vec2::new(50.0, -0.1)));
    }

    #[test]
    fn test_degenerate_world_rect_is_rejected() {
        let viewport = Viewport::new(Vec2::ZERO, Vec2::new(100.0, 100.0));
        let degenerate = PathBounds {
            left: 1.0,
            right: 1.0,
            top: 3.0,
            bottom: -3.0,
        };
        assert!(WorldMapping::new(viewport, degenerate).is_err());
    }

    #[test]
    fn test_viewport_from_world_aspect() {
        let bounds = PathBounds::new(-2.0, 2.0, 1.0, -1.0); // Verhältnis 1:2
        let viewport = Viewport::from_world_aspect(Vec2::new(200.0, 100.0), 250.0, &bounds)
            .expect("gültige Bounds");
        assert_relative_eq!(viewport.size().x, 250.0);
        assert_relative_eq!(viewport.size().y, 125.0);
    }
}
