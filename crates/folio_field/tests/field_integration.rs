//! Integration tests for the constellation lifecycle
//!
//! These tests drive the animation the way a window would:
//! 1. Start against a host and deliver frames by token
//! 2. Resize mid-flight
//! 3. Tear down and restart

use folio_field::{
    AnimationState, ConstellationAnimation, FieldConfig, FrameHost, FrameToken, ListenerId,
    Particle, ParticleField, Viewport,
};
use glam::Vec2;

/// Minimal host that counts live registrations
#[derive(Default)]
struct CountingHost {
    next: u64,
    live_frames: i64,
    live_listeners: i64,
}

impl FrameHost for CountingHost {
    fn request_frame(&mut self) -> FrameToken {
        self.next += 1;
        self.live_frames += 1;
        FrameToken(self.next)
    }

    fn cancel_frame(&mut self, _token: FrameToken) {
        self.live_frames -= 1;
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        self.next += 1;
        self.live_listeners += 1;
        ListenerId(self.next)
    }

    fn remove_resize_listener(&mut self, _id: ListenerId) {
        self.live_listeners -= 1;
    }
}

fn run_frames(host: &mut CountingHost, anim: &mut ConstellationAnimation, frames: usize) {
    for _ in 0..frames {
        let token = anim.pending_frame().expect("frame scheduled");
        // Delivered frames are consumed by the host before the callback runs
        host.live_frames -= 1;
        anim.on_frame(host, token);
    }
}

// ==================== Scenario Tests ====================

#[test]
fn test_start_800x600_has_40_particles_in_bounds() {
    let mut host = CountingHost::default();
    let mut anim = ConstellationAnimation::start(&mut host, 800.0, 600.0, FieldConfig::default());

    let field = anim.field().expect("field seeded");
    assert_eq!(field.particles().len(), 40);
    for p in field.particles() {
        assert!(Viewport::new(800.0, 600.0).contains(p.position.x, p.position.y));
    }

    anim.stop(&mut host);
}

#[test]
fn test_particles_never_escape() {
    let mut host = CountingHost::default();
    let mut anim = ConstellationAnimation::start(
        &mut host,
        320.0,
        240.0,
        FieldConfig::default().with_seed(3).with_particle_count(60),
    );

    for _ in 0..2_000 {
        run_frames(&mut host, &mut anim, 1);
        let bounds = anim.viewport();
        for p in anim.field().unwrap().particles() {
            assert!(bounds.contains(p.position.x, p.position.y), "escaped: {:?}", p);
        }
    }

    anim.stop(&mut host);
}

#[test]
fn test_connection_at_distance_100() {
    let particles = vec![
        Particle::new(Vec2::new(100.0, 300.0), 2.0),
        Particle::new(Vec2::new(200.0, 300.0), 2.0),
    ];
    let mut field = ParticleField::from_particles(particles, Viewport::new(800.0, 600.0), FieldConfig::default());
    let snapshot = field.advance();

    assert_eq!(snapshot.connections.len(), 1);
    let expected = (1.0 - 100.0 / 150.0) * 0.3;
    assert!((snapshot.connections[0].opacity - expected).abs() < 1e-5);
    assert!((snapshot.connections[0].opacity - 0.1).abs() < 1e-3);
}

#[test]
fn test_no_connection_at_distance_200() {
    let particles = vec![
        Particle::new(Vec2::new(100.0, 300.0), 2.0),
        Particle::new(Vec2::new(300.0, 300.0), 2.0),
    ];
    let mut field = ParticleField::from_particles(particles, Viewport::new(800.0, 600.0), FieldConfig::default());
    assert!(field.advance().connections.is_empty());
}

#[test]
fn test_resize_800_to_400() {
    let mut host = CountingHost::default();
    let mut anim = ConstellationAnimation::start(
        &mut host,
        800.0,
        600.0,
        FieldConfig::default().with_seed(11).with_particle_count(80),
    );
    run_frames(&mut host, &mut anim, 10);

    let before: Vec<Vec2> = anim.field().unwrap().particles().iter().map(|p| p.position).collect();
    anim.on_resize(400.0, 600.0);
    let after: Vec<Vec2> = anim.field().unwrap().particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after, "resize must not reposition particles");

    let outside: Vec<usize> = (0..before.len()).filter(|&i| before[i].x > 400.0).collect();
    let inside: Vec<usize> = (0..before.len()).filter(|&i| before[i].x <= 400.0).collect();
    assert!(!outside.is_empty(), "seed should leave some particles beyond the new bound");

    // One frame to steer the outside particles inward
    run_frames(&mut host, &mut anim, 1);
    let mut last: Vec<f32> = anim.field().unwrap().particles().iter().map(|p| p.position.x).collect();

    for _ in 0..500 {
        run_frames(&mut host, &mut anim, 1);
        let particles = anim.field().unwrap().particles();
        for &i in &inside {
            assert!(particles[i].position.x <= 400.0, "inside particle crossed the new bound");
        }
        for &i in &outside {
            let x = particles[i].position.x;
            if last[i] > 400.0 {
                assert!(x <= last[i], "outside particle moved away from the viewport");
            }
            last[i] = x;
        }
    }

    anim.stop(&mut host);
}

// ==================== Lifecycle Tests ====================

#[test]
fn test_stop_twice_releases_once() {
    let mut host = CountingHost::default();
    let mut anim = ConstellationAnimation::start(&mut host, 800.0, 600.0, FieldConfig::default());
    run_frames(&mut host, &mut anim, 3);

    anim.stop(&mut host);
    anim.stop(&mut host);

    assert_eq!(host.live_frames, 0);
    assert_eq!(host.live_listeners, 0);
    assert_eq!(anim.state(), AnimationState::Stopped);
}

#[test]
fn test_remount_cycles_leave_no_registrations() {
    let mut host = CountingHost::default();
    for _ in 0..5 {
        let mut anim = ConstellationAnimation::start(&mut host, 800.0, 600.0, FieldConfig::default());
        run_frames(&mut host, &mut anim, 2);
        anim.stop(&mut host);
    }
    assert_eq!(host.live_frames, 0);
    assert_eq!(host.live_listeners, 0);
}

#[test]
fn test_stop_before_surface_available() {
    let mut host = CountingHost::default();
    let mut anim = ConstellationAnimation::start(&mut host, 0.0, 0.0, FieldConfig::default());
    assert_eq!(anim.state(), AnimationState::AwaitingSurface);
    anim.stop(&mut host);
    assert_eq!(host.live_frames, 0);
    assert_eq!(host.live_listeners, 0);
}
