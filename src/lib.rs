//! Folio - personal site with a constellation background
//!
//! The binary opens a window, draws the animated particle field with wgpu and
//! walks the site's pages from the keyboard. The library half exposes the
//! configuration, input mapping and application systems for tests.

pub mod config;
pub mod input;
pub mod systems;
