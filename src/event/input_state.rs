//! Last-known input state, accumulated from events.

use std::collections::HashMap;

use crate::event::{Action, Key, Modifiers, MouseButton, WindowEvent};

/// The input state a real window would let us query directly.
///
/// Since the component only sees an event stream, this tracks the
/// last-known state of keys, buttons, the cursor and the framebuffer
/// size. Controllers take it alongside each event so they can ask
/// "where is the cursor right now?" the same way they would ask a
/// window.
#[derive(Clone, Debug)]
pub struct InputState {
    keys: HashMap<Key, Action>,
    buttons: HashMap<MouseButton, Action>,
    cursor: Option<(f64, f64)>,
    framebuffer_size: (u32, u32),
    modifiers: Modifiers,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Creates a state with nothing pressed, an unknown cursor
    /// position and an 800x600 framebuffer.
    pub fn new() -> InputState {
        InputState {
            keys: HashMap::new(),
            buttons: HashMap::new(),
            cursor: None,
            framebuffer_size: (800, 600),
            modifiers: Modifiers::empty(),
        }
    }

    /// Folds one event into the tracked state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match *event {
            WindowEvent::CursorPos(x, y, modifiers) => {
                self.cursor = Some((x, y));
                self.modifiers = modifiers;
            }
            WindowEvent::MouseButton(button, action, modifiers) => {
                let _ = self.buttons.insert(button, action);
                self.modifiers = modifiers;
            }
            WindowEvent::Key(key, action, modifiers) => {
                let _ = self.keys.insert(key, action);
                self.modifiers = modifiers;
            }
            WindowEvent::FramebufferSize(w, h) => {
                self.framebuffer_size = (w, h);
            }
            _ => {}
        }
    }

    /// The state of a key.
    pub fn get_key(&self, key: Key) -> Action {
        self.keys.get(&key).copied().unwrap_or(Action::Release)
    }

    /// The state of a mouse button.
    pub fn get_mouse_button(&self, button: MouseButton) -> Action {
        self.buttons.get(&button).copied().unwrap_or(Action::Release)
    }

    /// The last-known cursor position, if the cursor has moved at
    /// least once.
    pub fn cursor_pos(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    /// The last-known framebuffer size, in pixels.
    pub fn framebuffer_size(&self) -> (u32, u32) {
        self.framebuffer_size
    }

    /// The framebuffer width as the float the drag math wants.
    pub fn viewport_width(&self) -> f32 {
        self.framebuffer_size.0 as f32
    }

    /// The last-known modifier state.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}
