//! Constellation animation system
//!
//! Drives a [`ConstellationAnimation`] from winit redraw requests. Each
//! scheduled frame becomes one `request_redraw`; the matching
//! `RedrawRequested` delivers the token back to the animation.

use std::collections::HashSet;
use std::sync::Arc;
use winit::window::Window;
use folio_field::{
    AnimationState, ConstellationAnimation, FieldConfig, FrameHost, FrameSnapshot, FrameToken,
    ListenerId, Viewport,
};

/// [`FrameHost`] backed by a winit window
///
/// Without a window (tests, or before `resumed`) frames are only recorded.
#[derive(Default)]
pub struct WindowFrameHost {
    window: Option<Arc<Window>>,
    next_id: u64,
    pending: Option<FrameToken>,
    listeners: HashSet<ListenerId>,
}

impl WindowFrameHost {
    pub fn new(window: Option<Arc<Window>>) -> Self {
        Self {
            window,
            ..Default::default()
        }
    }

    /// Token of the frame waiting for the next redraw
    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Hand out the pending token for a redraw
    fn take_pending(&mut self) -> Option<FrameToken> {
        self.pending.take()
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }
}

impl FrameHost for WindowFrameHost {
    fn request_frame(&mut self) -> FrameToken {
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        self.pending = Some(token);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self.pending == Some(token) {
            self.pending = None;
        }
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.insert(id);
        id
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}

/// Owns the background animation and its host
pub struct AnimationSystem {
    host: WindowFrameHost,
    animation: Option<ConstellationAnimation>,
    config: FieldConfig,
}

impl AnimationSystem {
    pub fn new(window: Option<Arc<Window>>, config: FieldConfig) -> Self {
        Self {
            host: WindowFrameHost::new(window),
            animation: None,
            config,
        }
    }

    /// Start the animation over a logical `width` x `height` area
    ///
    /// A running animation is stopped first.
    pub fn start(&mut self, width: f32, height: f32) {
        self.stop();
        self.animation = Some(ConstellationAnimation::start(
            &mut self.host,
            width,
            height,
            self.config.clone(),
        ));
    }

    /// Deliver a redraw to the animation
    ///
    /// Returns the new snapshot, or None for redraws the animation did not
    /// ask for (expose events, waiting for a surface, stopped).
    pub fn on_redraw(&mut self) -> Option<&FrameSnapshot> {
        let token = self.host.take_pending()?;
        let animation = self.animation.as_mut()?;
        animation.on_frame(&mut self.host, token)
    }

    /// Forward a logical resize to a listening animation
    pub fn resize(&mut self, width: f32, height: f32) {
        if !self.host.has_listeners() {
            return;
        }
        if let Some(animation) = self.animation.as_mut() {
            animation.on_resize(width, height);
        }
    }

    /// Stop and release the animation; safe to call repeatedly
    pub fn stop(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.stop(&mut self.host);
        }
    }

    /// Restart with a fresh layout over the current viewport
    pub fn reseed(&mut self) {
        let viewport = self.viewport();
        log::info!("Reseeding constellation");
        self.start(viewport.width, viewport.height);
    }

    pub fn state(&self) -> AnimationState {
        self.animation
            .as_ref()
            .map(|a| a.state())
            .unwrap_or(AnimationState::Stopped)
    }

    pub fn viewport(&self) -> Viewport {
        self.animation
            .as_ref()
            .map(|a| a.viewport())
            .unwrap_or_default()
    }

    pub fn host(&self) -> &WindowFrameHost {
        &self.host
    }
}

impl Drop for AnimationSystem {
    fn drop(&mut self) {
        self.stop();
    }
}
