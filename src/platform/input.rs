//! Input handling
//!
//! Tracks held keys (continuous bumper movement) and one-shot commands
//! (activate, restart answer, quit) between simulation ticks. One-shots are
//! cleared after the first tick that sees them.

use winit::event::MouseButton;
use winit::keyboard::{Key, KeyCode, NamedKey, PhysicalKey};

use crate::sim::TickInput;

#[derive(Debug, Clone, Default)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    // One-shot commands
    pointer_x: Option<f32>,
    activate: bool,
    restart_answer: Option<bool>,
    quit: bool,
}

/// Answer to the restart prompt from the typed key
///
/// `y` in any layout means yes. Modifiers and dead keys are not an answer;
/// anything else means no.
fn restart_answer(logical: &Key) -> Option<bool> {
    match logical {
        Key::Character(c) => Some(c.as_str().eq_ignore_ascii_case("y")),
        Key::Dead(_) => None,
        Key::Named(
            NamedKey::Shift
            | NamedKey::Control
            | NamedKey::Alt
            | NamedKey::AltGraph
            | NamedKey::Super
            | NamedKey::Meta
            | NamedKey::CapsLock
            | NamedKey::NumLock,
        ) => None,
        _ => Some(false),
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyboard press/release
    ///
    /// Game controls use key positions; the restart answer uses the
    /// character the key types.
    pub fn key(&mut self, physical: PhysicalKey, logical: &Key, pressed: bool, repeat: bool) {
        match physical {
            PhysicalKey::Code(KeyCode::ArrowLeft) => self.left_held = pressed,
            PhysicalKey::Code(KeyCode::ArrowRight) => self.right_held = pressed,
            _ => {}
        }

        if !pressed || repeat {
            return;
        }

        match physical {
            PhysicalKey::Code(KeyCode::Escape) => self.quit = true,
            PhysicalKey::Code(KeyCode::Space) => {
                self.activate = true;
                self.restart_answer = Some(false);
            }
            _ => {
                if let Some(answer) = restart_answer(logical) {
                    self.restart_answer = Some(answer);
                }
            }
        }
    }

    /// Pointer moved; `world_x` is already in play-area pixels
    pub fn pointer_moved(&mut self, world_x: f32) {
        self.pointer_x = Some(world_x);
    }

    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Left && pressed {
            self.activate = true;
        }
    }

    /// Focus lost: forget held keys so the bumper does not keep sliding
    pub fn release_all(&mut self) {
        self.left_held = false;
        self.right_held = false;
    }

    /// Snapshot for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            pointer_x: self.pointer_x,
            activate: self.activate,
            move_left: self.left_held,
            move_right: self.right_held,
            restart_answer: self.restart_answer,
            quit: self.quit,
        }
    }

    /// Clear one-shot inputs after processing
    pub fn clear_one_shots(&mut self) {
        self.pointer_x = None;
        self.activate = false;
        self.restart_answer = None;
        self.quit = false;
    }
}
