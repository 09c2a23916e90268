//! Animation lifecycle for the constellation background
//!
//! The host owns the frame scheduler and the resize listener registry. The
//! animation asks the host for one frame at a time and keeps the token it got
//! back; stopping hands that same token to `cancel_frame` and removes the
//! resize listener. A frame delivered with any other token is ignored.
//!
//! # Example
//! ```ignore
//! let mut animation = ConstellationAnimation::start(&mut host, 800.0, 600.0, FieldConfig::default());
//!
//! // Host frame callback
//! if let Some(snapshot) = animation.on_frame(&mut host, token) {
//!     renderer.draw(snapshot);
//! }
//!
//! // View removed
//! animation.stop(&mut host);
//! ```

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::field::{FieldConfig, ParticleField};
use crate::frame::FrameSnapshot;
use crate::viewport::Viewport;

/// Token for one scheduled frame callback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Handle for a registered resize listener
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The environment that drives the animation
///
/// Implemented by the windowing layer; tests use a recording mock.
pub trait FrameHost {
    /// Schedule a single frame callback
    fn request_frame(&mut self) -> FrameToken;
    /// Cancel a scheduled frame callback
    fn cancel_frame(&mut self, token: FrameToken);
    /// Start delivering viewport resize events
    fn add_resize_listener(&mut self) -> ListenerId;
    /// Stop delivering viewport resize events
    fn remove_resize_listener(&mut self, id: ListenerId);
}

/// Lifecycle state of an animation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Started on a surface with no area; particles are seeded on the next
    /// non-empty resize
    AwaitingSurface,
    /// Particles exist and frames advance them
    Running,
    /// Torn down; no further frames are processed
    Stopped,
}

/// A running constellation animation
///
/// Owns the particles and the host registrations. Everything is released by
/// [`stop`](Self::stop).
pub struct ConstellationAnimation {
    state: AnimationState,
    config: FieldConfig,
    viewport: Viewport,
    field: Option<ParticleField>,
    rng: SmallRng,
    pending_frame: Option<FrameToken>,
    resize_listener: Option<ListenerId>,
}

impl ConstellationAnimation {
    /// Start an animation covering a `width` x `height` viewport
    ///
    /// Registers the resize listener and schedules the first frame. If the
    /// viewport has no area the animation waits for a resize before seeding.
    pub fn start<H: FrameHost + ?Sized>(
        host: &mut H,
        width: f32,
        height: f32,
        config: FieldConfig,
    ) -> Self {
        let viewport = Viewport::new(width, height);
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let (state, field) = if viewport.is_empty() {
            log::debug!("Constellation started without a surface, waiting for resize");
            (AnimationState::AwaitingSurface, None)
        } else {
            let field = ParticleField::seed(viewport, config.clone(), &mut rng);
            log::debug!(
                "Constellation started: {} particles in {}x{}",
                field.particles().len(),
                viewport.width,
                viewport.height
            );
            (AnimationState::Running, Some(field))
        };

        let resize_listener = Some(host.add_resize_listener());
        let pending_frame = Some(host.request_frame());

        Self {
            state,
            config,
            viewport,
            field,
            rng,
            pending_frame,
            resize_listener,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.state == AnimationState::Stopped
    }

    /// Current viewport bounds
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The particle field, if seeded
    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    /// Token of the frame currently scheduled with the host
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending_frame
    }

    /// Listener currently registered with the host
    pub fn resize_listener(&self) -> Option<ListenerId> {
        self.resize_listener
    }

    /// Frame callback
    ///
    /// Advances the field, schedules the next frame and returns what to
    /// draw. Returns None for stale or cancelled tokens, after stop, and
    /// while waiting for a surface (in which case nothing is drawn but the
    /// loop keeps running).
    pub fn on_frame<H: FrameHost + ?Sized>(
        &mut self,
        host: &mut H,
        token: FrameToken,
    ) -> Option<&FrameSnapshot> {
        if self.is_stopped() || self.pending_frame != Some(token) {
            log::trace!("Ignoring frame {:?}", token);
            return None;
        }

        self.pending_frame = Some(host.request_frame());

        match self.field.as_mut() {
            Some(field) => Some(field.advance()),
            None => None,
        }
    }

    /// Resize callback
    ///
    /// Only the bounds change. Particles outside the new bounds are left
    /// where they are and drift back in on their own.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        if self.is_stopped() {
            return;
        }

        self.viewport = Viewport::new(width, height);

        if let Some(field) = self.field.as_mut() {
            field.resize(self.viewport);
        } else if self.state == AnimationState::AwaitingSurface && !self.viewport.is_empty() {
            let field = ParticleField::seed(self.viewport, self.config.clone(), &mut self.rng);
            log::debug!(
                "Surface available: seeded {} particles in {}x{}",
                field.particles().len(),
                width,
                height
            );
            self.field = Some(field);
            self.state = AnimationState::Running;
        }
    }

    /// Tear down: cancel the pending frame and remove the resize listener
    ///
    /// Safe to call more than once; later calls do nothing.
    pub fn stop<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if let Some(token) = self.pending_frame.take() {
            host.cancel_frame(token);
        }
        if let Some(id) = self.resize_listener.take() {
            host.remove_resize_listener(id);
        }
        if self.state != AnimationState::Stopped {
            log::debug!("Constellation stopped");
        }
        self.state = AnimationState::Stopped;
        self.field = None;
    }
}

impl Drop for ConstellationAnimation {
    fn drop(&mut self) {
        if self.pending_frame.is_some() || self.resize_listener.is_some() {
            log::warn!("Constellation dropped without stop(); host registrations leaked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Host that records every registration
    #[derive(Default)]
    struct MockHost {
        next_id: u64,
        scheduled: HashSet<FrameToken>,
        listeners: HashSet<ListenerId>,
        cancels: usize,
        removals: usize,
    }

    impl FrameHost for MockHost {
        fn request_frame(&mut self) -> FrameToken {
            self.next_id += 1;
            let token = FrameToken(self.next_id);
            self.scheduled.insert(token);
            token
        }

        fn cancel_frame(&mut self, token: FrameToken) {
            self.cancels += 1;
            self.scheduled.remove(&token);
        }

        fn add_resize_listener(&mut self) -> ListenerId {
            self.next_id += 1;
            let id = ListenerId(self.next_id);
            self.listeners.insert(id);
            id
        }

        fn remove_resize_listener(&mut self, id: ListenerId) {
            self.removals += 1;
            assert!(self.listeners.remove(&id), "listener removed twice");
        }
    }

    impl MockHost {
        /// Deliver the scheduled frame, as a display refresh would
        fn fire(&mut self, animation: &mut ConstellationAnimation) -> bool {
            let token = animation.pending_frame().expect("no frame scheduled");
            self.scheduled.remove(&token);
            animation.on_frame(self, token).is_some()
        }
    }

    fn config() -> FieldConfig {
        FieldConfig::default().with_seed(42)
    }

    #[test]
    fn test_start_registers_with_host() {
        let mut host = MockHost::default();
        let mut anim = ConstellationAnimation::start(&mut host, 800.0, 600.0, config());
        assert_eq!(anim.state(), AnimationState::Running);
        assert_eq!(host.listeners.len(), 1);
        assert_eq!(host.scheduled.len(), 1);
        assert_eq!(anim.field().unwrap().particles().len(), 40);
        anim.stop(&mut host);
    }

    #[test]
    fn test_frame_reschedules() {
        let mut host = MockHost::default();
        let mut anim = ConstellationAnimation::start(&mut host, 800.0, 600.0, config());
        let first = anim.pending_frame().unwrap();
        assert!(host.fire(&mut anim));
        let second = anim.pending_frame().unwrap();
        assert_ne!(first, second);
        assert_eq!(host.scheduled.len(), 1);
        anim.stop(&mut host);
    }

    #[test]
    fn test_stale_token_ignored() {
        let mut host = MockHost::default();
        let mut anim = ConstellationAnimation::start(&mut host, 800.0, 600.0, config());
        assert!(anim.on_frame(&mut host, FrameToken(9999)).is_none());
        assert_eq!(anim.field().unwrap().frame(), 0);
        anim.stop(&mut host);
    }

    #[test]
    fn test_stop_releases_everything() {
        let mut host = MockHost::default();
        let mut anim = ConstellationAnimation::start(&mut host, 800.0, 600.0, config());
        host.fire(&mut anim);
        let token = anim.pending_frame().unwrap();
        anim.stop(&mut host);

        assert!(host.scheduled.is_empty());
        assert!(host.listeners.is_empty());
        assert!(anim.is_stopped());
        assert!(anim.on_frame(&mut host, token).is_none());
        assert!(host.scheduled.is_empty(), "no frame requested after stop");
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut host = MockHost::default();
        let mut anim = ConstellationAnimation::start(&mut host, 800.0, 600.0, config());
        anim.stop(&mut host);
        anim.stop(&mut host);
        assert_eq!(host.cancels, 1);
        assert_eq!(host.removals, 1);
    }

    #[test]
    fn test_zero_area_waits_for_resize() {
        let mut host = MockHost::default();
        let mut anim = ConstellationAnimation::start(&mut host, 0.0, 0.0, config());
        assert_eq!(anim.state(), AnimationState::AwaitingSurface);
        assert!(anim.field().is_none());

        // Frames keep running but draw nothing
        assert!(!host.fire(&mut anim));
        assert!(anim.pending_frame().is_some());

        anim.on_resize(0.0, 600.0);
        assert_eq!(anim.state(), AnimationState::AwaitingSurface);

        anim.on_resize(800.0, 600.0);
        assert_eq!(anim.state(), AnimationState::Running);
        assert_eq!(anim.field().unwrap().particles().len(), 40);
        assert!(host.fire(&mut anim));
        anim.stop(&mut host);
    }

    #[test]
    fn test_resize_does_not_reposition() {
        let mut host = MockHost::default();
        let mut anim = ConstellationAnimation::start(&mut host, 800.0, 600.0, config());
        let before: Vec<_> = anim.field().unwrap().particles().iter().map(|p| p.position).collect();
        anim.on_resize(400.0, 600.0);
        let after: Vec<_> = anim.field().unwrap().particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);
        assert_eq!(anim.viewport().width, 400.0);
        anim.stop(&mut host);
    }

    #[test]
    fn test_restart_does_not_leak() {
        let mut host = MockHost::default();
        for _ in 0..3 {
            let mut anim = ConstellationAnimation::start(&mut host, 800.0, 600.0, config());
            host.fire(&mut anim);
            anim.stop(&mut host);
        }
        assert!(host.listeners.is_empty());
        assert!(host.scheduled.is_empty());
    }

    #[test]
    fn test_seeded_starts_are_reproducible() {
        let mut host = MockHost::default();
        let mut a = ConstellationAnimation::start(&mut host, 800.0, 600.0, config());
        let mut b = ConstellationAnimation::start(&mut host, 800.0, 600.0, config());
        assert_eq!(a.field().unwrap().particles(), b.field().unwrap().particles());
        a.stop(&mut host);
        b.stop(&mut host);
    }
}
