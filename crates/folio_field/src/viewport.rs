//! Viewport bounds in logical pixels

/// Size of the drawing surface the field lives in
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport, clamping negative extents to zero
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// A viewport with no drawable area (surface not attached or minimized)
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check whether a point lies inside the closed bounds
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

impl From<(u32, u32)> for Viewport {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f32, height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_viewport() {
        assert!(Viewport::new(0.0, 600.0).is_empty());
        assert!(Viewport::new(800.0, 0.0).is_empty());
        assert!(!Viewport::new(800.0, 600.0).is_empty());
    }

    #[test]
    fn test_negative_extents_clamped() {
        let vp = Viewport::new(-5.0, 10.0);
        assert_eq!(vp.width, 0.0);
        assert!(vp.is_empty());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let vp = Viewport::new(800.0, 600.0);
        assert!(vp.contains(0.0, 0.0));
        assert!(vp.contains(800.0, 600.0));
        assert!(!vp.contains(800.1, 10.0));
        assert!(!vp.contains(10.0, -0.1));
    }

    #[test]
    fn test_from_physical_size() {
        let vp: Viewport = (1280u32, 720u32).into();
        assert_eq!(vp, Viewport::new(1280.0, 720.0));
    }
}
