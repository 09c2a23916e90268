//! Frame geometry - bridges field snapshots to GPU buffers
//!
//! Converts a [`FrameSnapshot`] into line vertices and disc instances in a
//! format ready for upload. Pure CPU work, rebuilt every frame.

use folio_field::FrameSnapshot;

use crate::pipeline::{DiscInstance, LineVertex};

/// Colours of the background layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Connection stroke, RGB in 0..=1
    pub line: [f32; 3],
    /// Particle fill, RGB in 0..=1
    pub particle: [f32; 3],
    /// Clear colour, RGBA in 0..=1
    pub background: [f32; 4],
}

impl Palette {
    /// Copper lines, slate particles, near-black background
    pub const CONSTELLATION: Palette = Palette {
        line: [0xB8 as f32 / 255.0, 0x73 as f32 / 255.0, 0x33 as f32 / 255.0],
        particle: [0x94 as f32 / 255.0, 0xA3 as f32 / 255.0, 0xB8 as f32 / 255.0],
        background: [0x02 as f32 / 255.0, 0x06 as f32 / 255.0, 0x17 as f32 / 255.0, 1.0],
    };

    /// Same palette with every channel converted for an sRGB render target
    pub fn to_linear(&self) -> Palette {
        let lin3 = |c: [f32; 3]| [srgb_to_linear(c[0]), srgb_to_linear(c[1]), srgb_to_linear(c[2])];
        let bg = self.background;
        Palette {
            line: lin3(self.line),
            particle: lin3(self.particle),
            background: [
                srgb_to_linear(bg[0]),
                srgb_to_linear(bg[1]),
                srgb_to_linear(bg[2]),
                bg[3],
            ],
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::CONSTELLATION
    }
}

/// Standard sRGB transfer function
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// GPU-ready geometry for one frame
#[derive(Debug, Default, Clone)]
pub struct FrameGeometry {
    /// Two vertices per connection
    pub lines: Vec<LineVertex>,
    pub discs: Vec<DiscInstance>,
}

impl FrameGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build geometry for a snapshot
    pub fn from_snapshot(snapshot: &FrameSnapshot, palette: &Palette) -> Self {
        let mut geometry = Self::new();
        geometry.rebuild(snapshot, palette);
        geometry
    }

    /// Replace the contents with a new snapshot, keeping allocations
    pub fn rebuild(&mut self, snapshot: &FrameSnapshot, palette: &Palette) {
        self.clear();
        self.lines.reserve(snapshot.connections.len() * 2);
        self.discs.reserve(snapshot.discs.len());

        let [lr, lg, lb] = palette.line;
        for conn in &snapshot.connections {
            let color = [lr, lg, lb, conn.opacity];
            self.lines.push(LineVertex::new(conn.from.to_array(), color));
            self.lines.push(LineVertex::new(conn.to.to_array(), color));
        }

        let [pr, pg, pb] = palette.particle;
        for disc in &snapshot.discs {
            self.discs.push(DiscInstance::new(
                disc.center.to_array(),
                disc.radius,
                [pr, pg, pb, disc.opacity],
            ));
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.discs.clear();
    }

    pub fn line_count(&self) -> usize {
        self.lines.len() / 2
    }

    pub fn disc_count(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.discs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_field::{FieldConfig, Particle, ParticleField, Vec2, Viewport};

    fn two_particle_snapshot() -> FrameSnapshot {
        let particles = vec![
            Particle::new(Vec2::new(100.0, 100.0), 2.0),
            Particle::new(Vec2::new(200.0, 100.0), 1.5),
        ];
        let mut field = ParticleField::from_particles(
            particles,
            Viewport::new(800.0, 600.0),
            FieldConfig::default(),
        );
        field.advance().clone()
    }

    #[test]
    fn test_snapshot_to_geometry() {
        let snapshot = two_particle_snapshot();
        let geometry = FrameGeometry::from_snapshot(&snapshot, &Palette::CONSTELLATION);

        assert_eq!(geometry.line_count(), 1);
        assert_eq!(geometry.disc_count(), 2);
        assert_eq!(geometry.lines[0].position, [100.0, 100.0]);
        assert_eq!(geometry.lines[1].position, [200.0, 100.0]);
        // (1 - 100/150) * 0.3
        assert!((geometry.lines[0].color[3] - 0.1).abs() < 1e-5);
        assert_eq!(geometry.discs[0].color[3], 0.6);
        assert_eq!(geometry.discs[1].radius, 1.5);
    }

    #[test]
    fn test_rebuild_replaces_previous_frame() {
        let snapshot = two_particle_snapshot();
        let mut geometry = FrameGeometry::from_snapshot(&snapshot, &Palette::default());
        geometry.rebuild(&FrameSnapshot::empty(7), &Palette::default());
        assert!(geometry.is_empty());
    }

    #[test]
    fn test_palette_colors() {
        let p = Palette::CONSTELLATION;
        assert!((p.line[0] - 184.0 / 255.0).abs() < 1e-6);
        assert!((p.particle[2] - 184.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(srgb_to_linear(0.5) < 0.5);
        let lin = Palette::CONSTELLATION.to_linear();
        assert_eq!(lin.background[3], 1.0);
    }
}
