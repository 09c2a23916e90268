//! Particle kinematics and boundary reflection

use glam::Vec2;

use crate::viewport::Viewport;

/// A single animated point in the constellation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in logical pixels
    pub position: Vec2,
    /// Displacement applied every frame (pixels per frame)
    pub velocity: Vec2,
    /// Disc radius in logical pixels
    pub radius: f32,
}

impl Particle {
    /// Create a resting particle at a position
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
        }
    }

    /// Set the velocity of this particle
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advance one frame inside the given bounds
    ///
    /// Returns which axes reflected during this step.
    pub fn step(&mut self, bounds: Viewport) -> Reflection {
        let x = reflect_axis(&mut self.position.x, &mut self.velocity.x, bounds.width);
        let y = reflect_axis(&mut self.position.y, &mut self.velocity.y, bounds.height);
        Reflection { x, y }
    }
}

/// Axes whose velocity component flipped during a step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Move along one axis and reflect off `[0, extent]`
///
/// The velocity is always pointed back inward after a crossing, so a particle
/// sitting outside the bounds (after the viewport shrank) never oscillates.
/// Only a particle that started the step inside gets its overshoot mirrored
/// back; one that was already outside keeps its position and drifts in.
fn reflect_axis(pos: &mut f32, vel: &mut f32, extent: f32) -> bool {
    let was_inside = (0.0..=extent).contains(pos);
    *pos += *vel;

    if *pos < 0.0 {
        let flipped = *vel < 0.0;
        *vel = vel.abs();
        if was_inside {
            *pos = (-*pos).min(extent);
        }
        flipped
    } else if *pos > extent {
        let flipped = *vel > 0.0;
        *vel = -vel.abs();
        if was_inside {
            *pos = (2.0 * extent - *pos).max(0.0);
        }
        flipped
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn test_free_motion() {
        let mut p = Particle::new(Vec2::new(100.0, 100.0), 2.0).with_velocity(Vec2::new(0.25, -0.2));
        let r = p.step(bounds());
        assert!(!r.any());
        assert!((p.position.x - 100.25).abs() < 1e-5);
        assert!((p.position.y - 99.8).abs() < 1e-5);
    }

    #[test]
    fn test_reflects_off_left_wall() {
        let mut p = Particle::new(Vec2::new(0.1, 300.0), 2.0).with_velocity(Vec2::new(-0.25, 0.0));
        let r = p.step(bounds());
        assert!(r.x);
        assert!(p.velocity.x > 0.0);
        assert!(p.position.x >= 0.0);
        assert!((p.position.x - 0.15).abs() < 1e-5);
    }

    #[test]
    fn test_reflects_off_bottom_wall() {
        let mut p = Particle::new(Vec2::new(400.0, 599.9), 2.0).with_velocity(Vec2::new(0.0, 0.25));
        let r = p.step(bounds());
        assert!(r.y);
        assert!(p.velocity.y < 0.0);
        assert!(p.position.y <= 600.0);
    }

    #[test]
    fn test_single_flip_per_crossing() {
        let mut p = Particle::new(Vec2::new(0.05, 300.0), 2.0).with_velocity(Vec2::new(-0.2, 0.0));
        let first = p.step(bounds());
        let second = p.step(bounds());
        assert!(first.x);
        assert!(!second.x, "velocity must not flip back on the following frame");
        assert!(p.velocity.x > 0.0);
    }

    #[test]
    fn test_landing_exactly_on_edge_does_not_flip() {
        let mut p = Particle::new(Vec2::new(0.25, 300.0), 2.0).with_velocity(Vec2::new(-0.25, 0.0));
        let r = p.step(bounds());
        assert!(!r.x);
        assert_eq!(p.position.x, 0.0);
        // Next step leaves the bounds and reflects once
        let r = p.step(bounds());
        assert!(r.x);
        assert!(p.position.x >= 0.0);
    }

    #[test]
    fn test_outside_particle_is_not_relocated() {
        let small = Viewport::new(400.0, 600.0);
        let mut p = Particle::new(Vec2::new(700.0, 300.0), 2.0).with_velocity(Vec2::new(0.25, 0.0));
        let r = p.step(small);
        assert!(r.x);
        assert!((p.position.x - 700.25).abs() < 1e-4, "no forced relocation");
        assert!(p.velocity.x < 0.0);

        // Already heading inward: no further flips while it drifts back
        let r = p.step(small);
        assert!(!r.x);
        assert!((p.position.x - 700.0).abs() < 1e-4);
    }

    #[test]
    fn test_tiny_extent_stays_in_bounds() {
        let tiny = Viewport::new(0.1, 0.1);
        let mut p = Particle::new(Vec2::new(0.05, 0.05), 1.0).with_velocity(Vec2::new(0.25, -0.25));
        for _ in 0..10 {
            p.step(tiny);
            assert!(tiny.contains(p.position.x, p.position.y));
        }
    }
}
