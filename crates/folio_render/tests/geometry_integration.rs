//! Snapshot-to-geometry tests driven by a running field

use folio_field::{FieldConfig, ParticleField, Viewport};
use folio_render::{FrameGeometry, Palette, ViewportUniforms, DEFAULT_LAYER_OPACITY};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_geometry_tracks_every_frame() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut field = ParticleField::seed(Viewport::new(800.0, 600.0), FieldConfig::default(), &mut rng);
    let palette = Palette::CONSTELLATION.to_linear();
    let mut geometry = FrameGeometry::new();

    for _ in 0..120 {
        let snapshot = field.advance();
        geometry.rebuild(snapshot, &palette);

        assert_eq!(geometry.disc_count(), 40);
        assert_eq!(geometry.line_count(), snapshot.connections.len());
        for v in &geometry.lines {
            assert!(v.color[3] >= 0.0 && v.color[3] <= 0.3);
            assert!(v.position[0] >= 0.0 && v.position[0] <= 800.0);
            assert!(v.position[1] >= 0.0 && v.position[1] <= 600.0);
        }
    }
}

#[test]
fn test_background_layer_uniforms() {
    let uniforms = ViewportUniforms::new(1280.0, 720.0, DEFAULT_LAYER_OPACITY);
    assert_eq!(uniforms.size, [1280.0, 720.0]);
    assert!((uniforms.layer_opacity - 0.4).abs() < f32::EPSILON);
}
