//! Proximity connections between particles
//!
//! Connections own no state. They are recomputed from the particle snapshot
//! every frame with a brute-force pair scan; at the default particle count
//! (40) that is 780 distance checks.

use glam::Vec2;

use crate::particle::Particle;

/// An ephemeral line between two nearby particles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    /// Index of the first particle (always lower than `b`)
    pub a: usize,
    /// Index of the second particle
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    /// Line opacity in `[0, dim_factor]`
    pub opacity: f32,
}

/// Opacity of a connection at distance `distance`, or None when out of range
///
/// Linear falloff: fully `dim_factor` at distance zero, zero at the threshold.
pub fn connection_opacity(distance: f32, threshold: f32, dim_factor: f32) -> Option<f32> {
    if distance.is_nan() || distance >= threshold {
        return None;
    }
    let opacity = (1.0 - distance / threshold) * dim_factor;
    Some(opacity.clamp(0.0, dim_factor))
}

/// Find every unordered pair closer than `threshold`
pub fn find_connections(particles: &[Particle], threshold: f32, dim_factor: f32) -> Vec<Connection> {
    let mut connections = Vec::new();
    find_connections_into(particles, threshold, dim_factor, &mut connections);
    connections
}

/// Same as [`find_connections`] but reuses an output buffer
pub fn find_connections_into(
    particles: &[Particle],
    threshold: f32,
    dim_factor: f32,
    out: &mut Vec<Connection>,
) {
    out.clear();
    let threshold_sq = threshold * threshold;

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let from = particles[i].position;
            let to = particles[j].position;
            let dist_sq = from.distance_squared(to);

            // Cheap reject before the sqrt
            if dist_sq >= threshold_sq {
                continue;
            }

            if let Some(opacity) = connection_opacity(dist_sq.sqrt(), threshold, dim_factor) {
                out.push(Connection {
                    a: i,
                    b: j,
                    from,
                    to,
                    opacity,
                });
            }
        }
    }
}
