//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to site actions like NextPage, GoBack, Exit, etc.
//! The background animation consumes no input, so nothing here reaches it
//! except Reseed.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape when the menu is closed)
    Exit,
    /// Toggle fullscreen mode (F / F11)
    ToggleFullscreen,
    /// Next main navigation page (Right / PageDown)
    NextPage,
    /// Previous main navigation page (Left / PageUp)
    PreviousPage,
    /// Back in history (Backspace)
    GoBack,
    /// Jump to a main navigation item (1-9)
    GoToNav(usize),
    /// Open or close the mobile menu (M, Escape when open)
    ToggleMenu,
    /// Next category on filterable pages (C)
    CycleCategory,
    /// Expand the next venture on the ecosystem page (E)
    ExpandNextVenture,
    /// Restart the background with fresh particles (R)
    Reseed,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and unbound keys
    pub fn map_keyboard(key: KeyCode, state: ElementState, menu_open: bool) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => {
                if menu_open {
                    Some(InputAction::ToggleMenu)
                } else {
                    Some(InputAction::Exit)
                }
            }
            KeyCode::KeyF | KeyCode::F11 => Some(InputAction::ToggleFullscreen),
            KeyCode::ArrowRight | KeyCode::PageDown => Some(InputAction::NextPage),
            KeyCode::ArrowLeft | KeyCode::PageUp => Some(InputAction::PreviousPage),
            KeyCode::Backspace => Some(InputAction::GoBack),
            KeyCode::KeyM => Some(InputAction::ToggleMenu),
            KeyCode::KeyC => Some(InputAction::CycleCategory),
            KeyCode::KeyE => Some(InputAction::ExpandNextVenture),
            KeyCode::KeyR => Some(InputAction::Reseed),
            other => Self::digit(other).map(|n| InputAction::GoToNav(n - 1)),
        }
    }

    fn digit(key: KeyCode) -> Option<usize> {
        let n = match key {
            KeyCode::Digit1 | KeyCode::Numpad1 => 1,
            KeyCode::Digit2 | KeyCode::Numpad2 => 2,
            KeyCode::Digit3 | KeyCode::Numpad3 => 3,
            KeyCode::Digit4 | KeyCode::Numpad4 => 4,
            KeyCode::Digit5 | KeyCode::Numpad5 => 5,
            KeyCode::Digit6 | KeyCode::Numpad6 => 6,
            KeyCode::Digit7 | KeyCode::Numpad7 => 7,
            KeyCode::Digit8 | KeyCode::Numpad8 => 8,
            KeyCode::Digit9 | KeyCode::Numpad9 => 9,
            _ => return None,
        };
        Some(n)
    }
}
