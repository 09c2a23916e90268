//! Constellation particle field
//!
//! This crate provides the decorative background simulation:
//! - [`Particle`] kinematics with elastic boundary reflection
//! - [`Connection`] detection between nearby particles
//! - [`ParticleField`] stepping and per-frame [`FrameSnapshot`] output
//! - [`ConstellationAnimation`] start / frame / resize / stop lifecycle
//!   against a [`FrameHost`]

pub mod animation;
pub mod connection;
pub mod field;
pub mod frame;
pub mod particle;
pub mod viewport;

// Re-export commonly used types
pub use animation::{AnimationState, ConstellationAnimation, FrameHost, FrameToken, ListenerId};
pub use connection::{connection_opacity, find_connections, Connection};
pub use field::{FieldConfig, FieldConfigError, ParticleField, DEFAULT_CONNECTION_DISTANCE, DEFAULT_PARTICLE_COUNT};
pub use frame::{Disc, FrameSnapshot};
pub use particle::{Particle, Reflection};
pub use viewport::Viewport;

pub use glam::Vec2;
