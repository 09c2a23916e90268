//! Per-frame draw output
//!
//! A snapshot fully describes one frame. Nothing carries over between
//! snapshots, so the renderer clears before drawing each one.

use glam::Vec2;

use crate::connection::Connection;

/// A filled particle circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

/// Everything drawn in one frame: connection lines first, then discs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameSnapshot {
    /// Frame counter since the animation started
    pub frame: u64,
    pub connections: Vec<Connection>,
    pub discs: Vec<Disc>,
}

impl FrameSnapshot {
    /// An empty frame (nothing to draw)
    pub fn empty(frame: u64) -> Self {
        Self {
            frame,
            connections: Vec::new(),
            discs: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty() && self.discs.is_empty()
    }
}
