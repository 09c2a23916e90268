//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod animation;
mod navigation;
mod render;
mod window;

pub use animation::{AnimationSystem, WindowFrameHost};
pub use navigation::{NavigationSystem, NavigationUpdate};
pub use render::{RenderError, RenderSystem};
pub use window::{format_title, WindowError, WindowSystem};
