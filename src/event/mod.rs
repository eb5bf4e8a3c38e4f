//! Window-event vocabulary and the delivery seam hosts adapt into.

pub use self::event_hub::{EventHub, Subscription};
pub use self::input_state::InputState;
pub use self::window_event::{Action, Key, Modifiers, MouseButton, TouchAction, WindowEvent};

mod event_hub;
mod input_state;
mod window_event;
