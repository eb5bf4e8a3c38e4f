use crate::event::{InputState, Key, WindowEvent};
use crate::stage::Stage;

/// Trait that orientation controller implementations must implement.
///
/// An orientation controller turns raw user input into a continuous
/// rotation angle for a displayed object, and derives a discrete
/// [`Stage`] from that angle while the user is actively rotating.
///
/// The capability surface is split in two layers:
///
/// * the *normalized* callbacks (`on_drag_start`, `on_drag_move`,
///   `on_drag_end`, `on_key_down`, `on_key_up`, `tick`), which any
///   host event system can adapt into directly;
/// * [`handle_event`](Self::handle_event), which performs that
///   adaptation for [`WindowEvent`] streams, including folding mouse
///   and touch input into one drag session.
pub trait OrientationController {
    // ==================
    // Normalized input callbacks
    // ==================

    /// A pointer (mouse or touch) went down at horizontal position
    /// `pointer_x`, starting a drag session.
    fn on_drag_start(&mut self, pointer_x: f32);

    /// The dragging pointer moved to `pointer_x`. `viewport_width`
    /// scales the movement so a full-viewport drag always produces the
    /// same rotation regardless of window size. No-op outside a drag
    /// session.
    fn on_drag_move(&mut self, pointer_x: f32, viewport_width: f32);

    /// The dragging pointer went up. Momentum is retained so the
    /// rotation keeps coasting.
    fn on_drag_end(&mut self);

    /// A key was pressed.
    fn on_key_down(&mut self, key: Key);

    /// A key was released.
    fn on_key_up(&mut self, key: Key);

    // ==================
    // Per-frame update
    // ==================

    /// Advances the controller by one frame.
    ///
    /// Called once per render frame whether or not any input arrived.
    fn tick(&mut self);

    // ==================
    // Event adaptation
    // ==================

    /// Routes a raw window event into the normalized callbacks above.
    ///
    /// # Arguments
    /// * `input` - last-known input state (cursor position, viewport size)
    /// * `event` - the window event to handle
    fn handle_event(&mut self, input: &InputState, event: &WindowEvent);

    // ==================
    // Outputs
    // ==================

    /// The accumulated rotation angle, in radians. Unbounded: it grows
    /// across full turns and is only normalized internally for stage
    /// classification.
    fn angle(&self) -> f32;

    /// Whether the user is actively rotating (dragging, or holding a
    /// rotation key). Coasting on momentum does not count.
    fn is_rotating(&self) -> bool;

    /// The stage computed by the most recent actively-rotating frame.
    ///
    /// While the rotation coasts or rests, this keeps returning the
    /// last value rather than reclassifying.
    fn stage(&self) -> Option<Stage>;
}
