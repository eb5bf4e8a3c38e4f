//! Platform-agnostic window events.
//!
//! The host owns the real windowing layer (winit, a browser canvas,
//! a test harness) and translates whatever it receives into these
//! types. The component never talks to a window directly.

bitflags! {
    /// Keyboard modifier state attached to pointer and key events.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u32 {
        /// A shift key is held.
        const SHIFT = 0b0001;
        /// A control key is held.
        const CONTROL = 0b0010;
        /// An alt key is held.
        const ALT = 0b0100;
        /// A logo/super key is held.
        const SUPER = 0b1000;
    }
}

/// The transition state of a key or mouse button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// The key or button was pressed, or is held.
    Press,
    /// The key or button was released, or is up.
    Release,
}

/// The phase of a touch contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchAction {
    /// A finger touched the surface.
    Start,
    /// A tracked finger moved.
    Move,
    /// A tracked finger left the surface.
    End,
    /// Tracking of a finger was aborted by the platform.
    Cancel,
}

/// A mouse button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseButton {
    /// The left/primary button.
    Button1,
    /// The right/secondary button.
    Button2,
    /// The middle button.
    Button3,
    /// An extra button.
    Button4,
    /// An extra button.
    Button5,
}

/// The keys the component vocabulary distinguishes.
///
/// Hosts with richer keyboards map everything else to [`Key::Unknown`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// The left arrow key.
    Left,
    /// The right arrow key.
    Right,
    /// The up arrow key.
    Up,
    /// The down arrow key.
    Down,
    /// The space bar.
    Space,
    /// The return/enter key.
    Return,
    /// The escape key.
    Escape,
    /// Any key the host does not map.
    Unknown,
}

/// An event produced by the host windowing layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WindowEvent {
    /// The cursor moved to the given position, in pixels from the
    /// top-left corner of the viewport.
    CursorPos(f64, f64, Modifiers),
    /// A mouse button changed state.
    MouseButton(MouseButton, Action, Modifiers),
    /// A touch contact changed state: contact id, position in pixels,
    /// phase.
    Touch(u64, f64, f64, TouchAction, Modifiers),
    /// A scroll wheel or trackpad scroll, in scroll units.
    Scroll(f64, f64, Modifiers),
    /// A keyboard key changed state.
    Key(Key, Action, Modifiers),
    /// The framebuffer was resized, in pixels.
    FramebufferSize(u32, u32),
    /// The host asked the component to shut down.
    Close,
}

impl WindowEvent {
    /// Whether this event comes from the mouse.
    pub fn is_mouse_event(&self) -> bool {
        matches!(
            self,
            WindowEvent::CursorPos(..) | WindowEvent::MouseButton(..) | WindowEvent::Scroll(..)
        )
    }

    /// Whether this event comes from the keyboard.
    pub fn is_keyboard_event(&self) -> bool {
        matches!(self, WindowEvent::Key(..))
    }

    /// Whether this event comes from a touch surface.
    pub fn is_touch_event(&self) -> bool {
        matches!(self, WindowEvent::Touch(..))
    }
}
