//! Particle field: seeding, stepping and per-frame output

use glam::Vec2;
use rand::Rng;

use crate::connection::find_connections_into;
use crate::frame::{Disc, FrameSnapshot};
use crate::particle::Particle;
use crate::viewport::Viewport;

/// Default number of particles
pub const DEFAULT_PARTICLE_COUNT: usize = 40;
/// Default connection distance in logical pixels
pub const DEFAULT_CONNECTION_DISTANCE: f32 = 150.0;

/// Configuration for the particle field
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Number of particles created at start
    pub particle_count: usize,
    /// Pairs closer than this are connected
    pub connection_distance: f32,
    /// Maximum absolute velocity per axis (pixels per frame)
    pub max_speed: f32,
    /// Smallest particle radius
    pub radius_min: f32,
    /// Largest particle radius (exclusive)
    pub radius_max: f32,
    /// Scales connection opacity so lines stay subtle
    pub dim_factor: f32,
    /// Opacity of every particle disc
    pub particle_opacity: f32,
    /// Fixed RNG seed for reproducible layouts
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            connection_distance: DEFAULT_CONNECTION_DISTANCE,
            max_speed: 0.25,
            radius_min: 1.0,
            radius_max: 3.0,
            dim_factor: 0.3,
            particle_opacity: 0.6,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Set the particle count
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the connection distance
    pub fn with_connection_distance(mut self, distance: f32) -> Self {
        self.connection_distance = distance;
        self
    }

    /// Set a fixed RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the values describe a drawable field
    pub fn validate(&self) -> Result<(), FieldConfigError> {
        if !(self.connection_distance > 0.0) {
            return Err(FieldConfigError::ConnectionDistance(self.connection_distance));
        }
        if !(self.max_speed >= 0.0) {
            return Err(FieldConfigError::MaxSpeed(self.max_speed));
        }
        if !(self.radius_min > 0.0 && self.radius_min <= self.radius_max) {
            return Err(FieldConfigError::RadiusRange(self.radius_min, self.radius_max));
        }
        if !(0.0..=1.0).contains(&self.dim_factor) {
            return Err(FieldConfigError::Opacity("dim_factor", self.dim_factor));
        }
        if !(0.0..=1.0).contains(&self.particle_opacity) {
            return Err(FieldConfigError::Opacity("particle_opacity", self.particle_opacity));
        }
        Ok(())
    }
}

/// Rejected field configuration
#[derive(Debug, Clone, PartialEq)]
pub enum FieldConfigError {
    /// Connection distance must be positive
    ConnectionDistance(f32),
    /// Speed must be non-negative
    MaxSpeed(f32),
    /// Radius range must be positive and ordered
    RadiusRange(f32, f32),
    /// Opacity-like value outside [0, 1]
    Opacity(&'static str, f32),
}

impl std::fmt::Display for FieldConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldConfigError::ConnectionDistance(d) => {
                write!(f, "connection distance must be positive, got {}", d)
            }
            FieldConfigError::MaxSpeed(s) => write!(f, "max speed must be non-negative, got {}", s),
            FieldConfigError::RadiusRange(min, max) => {
                write!(f, "invalid radius range [{}, {}]", min, max)
            }
            FieldConfigError::Opacity(name, v) => write!(f, "{} must be within [0, 1], got {}", name, v),
        }
    }
}

impl std::error::Error for FieldConfigError {}

/// A fixed set of particles moving inside a viewport
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Viewport,
    config: FieldConfig,
    frame: u64,
    /// Reused between frames to avoid reallocating
    snapshot: FrameSnapshot,
}

impl ParticleField {
    /// Seed a new field with uniformly random particles
    pub fn seed<R: Rng>(bounds: Viewport, config: FieldConfig, rng: &mut R) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| random_particle(bounds, &config, rng))
            .collect();
        Self::from_particles(particles, bounds, config)
    }

    /// Build a field from explicit particles
    pub fn from_particles(particles: Vec<Particle>, bounds: Viewport, config: FieldConfig) -> Self {
        Self {
            particles,
            bounds,
            config,
            frame: 0,
            snapshot: FrameSnapshot::default(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Frames advanced so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Change the bounds without touching particle positions
    pub fn resize(&mut self, bounds: Viewport) {
        self.bounds = bounds;
    }

    /// Advance one frame and rebuild the draw snapshot
    ///
    /// All positions are updated before any connection is computed, so
    /// connections always use post-update positions.
    pub fn advance(&mut self) -> &FrameSnapshot {
        // 1. Kinematics
        let mut reflections = 0usize;
        for particle in &mut self.particles {
            if particle.step(self.bounds).any() {
                reflections += 1;
            }
        }
        self.frame += 1;

        // 2. Connections from the updated snapshot
        find_connections_into(
            &self.particles,
            self.config.connection_distance,
            self.config.dim_factor,
            &mut self.snapshot.connections,
        );

        // 3. Discs
        let opacity = self.config.particle_opacity;
        self.snapshot.discs.clear();
        self.snapshot.discs.extend(self.particles.iter().map(|p| Disc {
            center: p.position,
            radius: p.radius,
            opacity,
        }));
        self.snapshot.frame = self.frame;

        log::trace!(
            "frame {}: {} connections, {} reflections",
            self.frame,
            self.snapshot.connections.len(),
            reflections
        );

        &self.snapshot
    }

    /// The most recent snapshot
    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.snapshot
    }
}

fn random_particle<R: Rng>(bounds: Viewport, config: &FieldConfig, rng: &mut R) -> Particle {
    let position = Vec2::new(
        rng.gen::<f32>() * bounds.width,
        rng.gen::<f32>() * bounds.height,
    );
    let velocity = Vec2::new(
        (rng.gen::<f32>() - 0.5) * 2.0 * config.max_speed,
        (rng.gen::<f32>() - 0.5) * 2.0 * config.max_speed,
    );
    let radius = config.radius_min + rng.gen::<f32>() * (config.radius_max - config.radius_min);
    Particle::new(position, radius).with_velocity(velocity)
}
