use std::f32::consts::PI;

use crate::controller::OrientationController;
use crate::event::{Action, InputState, Key, MouseButton, TouchAction, WindowEvent};
use crate::stage::{self, Stage};

/// Tuning constants for [`TurntableController`].
///
/// The defaults reproduce the reference feel of the island showcase:
/// a full-viewport drag turns the model by `0.01π` per pointer move,
/// an arrow-key press steps it by `0.005π`, and released rotations
/// coast with exponential damping until the momentum drops below the
/// floor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurntableTuning {
    /// Radians applied per unit of viewport-relative drag movement.
    pub drag_step: f32,
    /// Radians applied per rotation-key press.
    pub key_step: f32,
    /// Momentum (radians/frame) imparted by a rotation-key press.
    pub key_momentum: f32,
    /// Momentum decay factor applied each coasting frame.
    pub damping: f32,
    /// Momentum magnitude below which coasting snaps to a stop.
    pub momentum_floor: f32,
}

impl Default for TurntableTuning {
    fn default() -> Self {
        TurntableTuning {
            drag_step: 0.01 * PI,
            key_step: 0.005 * PI,
            key_momentum: 0.007,
            damping: 0.95,
            momentum_floor: 0.001,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct DragSession {
    last_x: f32,
}

/// Turntable-style orientation controller.
///
/// Owns a single unbounded rotation angle around the vertical axis and
/// a momentum value. Pointer drags and arrow keys feed the angle;
/// releasing input leaves the momentum to decay over subsequent frames.
/// While the user is actively rotating, each [`tick`] classifies the
/// normalized angle into a [`Stage`]; once input stops, the last
/// computed stage is frozen until rotation becomes active again.
///
/// # Default Controls
/// - **Primary button + drag** or **single touch + drag**: rotate
/// - **Left arrow**: step counter-clockwise
/// - **Right arrow**: step clockwise
///
/// All bindings can be changed with the rebind methods.
///
/// [`tick`]: OrientationController::tick
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurntableController {
    angle: f32,
    momentum: f32,
    rotating: bool,
    drag: Option<DragSession>,
    active_touch: Option<u64>,
    stage: Option<Stage>,

    tuning: TurntableTuning,
    drag_button: Option<MouseButton>,
    left_key: Option<Key>,
    right_key: Option<Key>,
}

impl Default for TurntableController {
    fn default() -> Self {
        Self::new(TurntableTuning::default())
    }
}

impl TurntableController {
    /// Creates a controller at angle zero with the given tuning.
    pub fn new(tuning: TurntableTuning) -> TurntableController {
        TurntableController {
            angle: 0.0,
            momentum: 0.0,
            rotating: false,
            drag: None,
            active_touch: None,
            stage: None,
            tuning,
            drag_button: Some(MouseButton::Button1),
            left_key: Some(Key::Left),
            right_key: Some(Key::Right),
        }
    }

    /// The current tuning.
    #[inline]
    pub fn tuning(&self) -> TurntableTuning {
        self.tuning
    }

    /// Replaces the tuning. Takes effect from the next input or tick.
    #[inline]
    pub fn set_tuning(&mut self, tuning: TurntableTuning) {
        self.tuning = tuning;
    }

    /// The current momentum, in radians per frame.
    #[inline]
    pub fn momentum(&self) -> f32 {
        self.momentum
    }

    /// Overrides the accumulated angle. The stored momentum and stage
    /// are untouched.
    #[inline]
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// The button used to start a drag.
    pub fn drag_button(&self) -> Option<MouseButton> {
        self.drag_button
    }

    /// Set the button used to start a drag.
    /// Use None to disable mouse rotation.
    pub fn rebind_drag_button(&mut self, new_button: Option<MouseButton>) {
        self.drag_button = new_button;
    }

    /// The key rotating counter-clockwise.
    pub fn left_key(&self) -> Option<Key> {
        self.left_key
    }

    /// The key rotating clockwise.
    pub fn right_key(&self) -> Option<Key> {
        self.right_key
    }

    /// Set the key rotating counter-clockwise.
    /// Use None to disable it.
    pub fn rebind_left_key(&mut self, new_key: Option<Key>) {
        self.left_key = new_key;
    }

    /// Set the key rotating clockwise.
    /// Use None to disable it.
    pub fn rebind_right_key(&mut self, new_key: Option<Key>) {
        self.right_key = new_key;
    }

    /// Disable both rotation keys.
    pub fn unbind_rotation_keys(&mut self) {
        self.left_key = None;
        self.right_key = None;
    }

    fn stop_rotating(&mut self) {
        self.rotating = false;
        self.drag = None;
        self.active_touch = None;
    }
}

impl OrientationController for TurntableController {
    fn on_drag_start(&mut self, pointer_x: f32) {
        self.rotating = true;
        self.drag = Some(DragSession { last_x: pointer_x });
        log::debug!("drag started at x = {}", pointer_x);
    }

    fn on_drag_move(&mut self, pointer_x: f32, viewport_width: f32) {
        let session = match self.drag.as_mut() {
            Some(session) if self.rotating => session,
            _ => return,
        };

        if viewport_width <= 0.0 {
            log::warn!("ignoring drag move with viewport width {}", viewport_width);
            return;
        }

        let delta = (pointer_x - session.last_x) / viewport_width;
        session.last_x = pointer_x;

        self.angle += delta * self.tuning.drag_step;
        self.momentum = delta * self.tuning.drag_step;
    }

    fn on_drag_end(&mut self) {
        // Momentum is kept: the rotation coasts from here.
        self.stop_rotating();
        log::debug!("drag ended with momentum {}", self.momentum);
    }

    fn on_key_down(&mut self, key: Key) {
        if self.left_key == Some(key) {
            self.angle += self.tuning.key_step;
            self.momentum = self.tuning.key_momentum;
            self.rotating = true;
        } else if self.right_key == Some(key) {
            self.angle -= self.tuning.key_step;
            self.momentum = -self.tuning.key_momentum;
            self.rotating = true;
        }
    }

    fn on_key_up(&mut self, key: Key) {
        if self.left_key == Some(key) || self.right_key == Some(key) {
            self.stop_rotating();
        }
    }

    fn tick(&mut self) {
        if !self.rotating {
            self.momentum *= self.tuning.damping;

            if self.momentum.abs() < self.tuning.momentum_floor {
                self.momentum = 0.0;
            }

            self.angle += self.momentum;
            // The stage is intentionally not reclassified here: a
            // released rotation freezes the last active stage.
        } else {
            let stage = stage::classify(stage::normalize(self.angle));

            if stage != self.stage {
                log::debug!("stage changed: {:?} -> {:?}", self.stage, stage);
                self.stage = stage;
            }
        }
    }

    fn handle_event(&mut self, input: &InputState, event: &WindowEvent) {
        match *event {
            WindowEvent::MouseButton(button, Action::Press, _)
                if self.drag_button == Some(button) && self.drag.is_none() =>
            {
                // The press event carries no position; the tracked
                // cursor position stands in for it. Without one there
                // is no reference point, so the press is ignored.
                match input.cursor_pos() {
                    Some((x, _)) => self.on_drag_start(x as f32),
                    None => log::debug!("drag press ignored: cursor position unknown"),
                }
            }
            WindowEvent::MouseButton(button, Action::Release, _)
                if self.drag_button == Some(button)
                    && self.drag.is_some()
                    && self.active_touch.is_none() =>
            {
                self.on_drag_end();
            }
            WindowEvent::CursorPos(x, _, _) => {
                if self.drag.is_some() && self.active_touch.is_none() {
                    self.on_drag_move(x as f32, input.viewport_width());
                }
            }
            WindowEvent::Touch(id, x, _, TouchAction::Start, _) => {
                if self.drag.is_none() {
                    self.active_touch = Some(id);
                    self.on_drag_start(x as f32);
                }
            }
            WindowEvent::Touch(id, x, _, TouchAction::Move, _) => {
                if self.active_touch == Some(id) {
                    self.on_drag_move(x as f32, input.viewport_width());
                }
            }
            WindowEvent::Touch(id, _, _, TouchAction::End, _)
            | WindowEvent::Touch(id, _, _, TouchAction::Cancel, _) => {
                if self.active_touch == Some(id) {
                    self.on_drag_end();
                }
            }
            WindowEvent::Key(key, Action::Press, _) => self.on_key_down(key),
            WindowEvent::Key(key, Action::Release, _) => self.on_key_up(key),
            _ => {}
        }
    }

    #[inline]
    fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    fn is_rotating(&self) -> bool {
        self.rotating
    }

    #[inline]
    fn stage(&self) -> Option<Stage> {
        self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Modifiers;

    const EPS: f32 = 1.0e-6;

    fn controller() -> TurntableController {
        TurntableController::default()
    }

    #[test]
    fn drag_moves_accumulate_scaled_deltas() {
        let mut c = controller();
        let width = 1000.0;
        let tuning = c.tuning();

        c.on_drag_start(100.0);
        let xs = [140.0, 90.0, 300.0, 299.0];

        let mut expected = 0.0;
        let mut last = 100.0f32;
        for &x in &xs {
            expected += (x - last) / width * tuning.drag_step;
            last = x;
            c.on_drag_move(x, width);
        }

        assert!((c.angle() - expected).abs() < EPS);
        // Momentum holds the last applied delta.
        assert!((c.momentum() - (299.0 - 300.0) / width * tuning.drag_step).abs() < EPS);
    }

    #[test]
    fn drag_move_without_session_is_a_noop() {
        let mut c = controller();
        c.on_drag_move(500.0, 1000.0);
        assert_eq!(c.angle(), 0.0);
        assert_eq!(c.momentum(), 0.0);
    }

    #[test]
    fn resting_ticks_leave_angle_unchanged() {
        let mut c = controller();
        c.set_angle(1.25);

        for _ in 0..100 {
            c.tick();
        }

        assert_eq!(c.angle(), 1.25);
        assert_eq!(c.momentum(), 0.0);
    }

    #[test]
    fn released_drag_coasts_to_a_stop() {
        let mut c = controller();
        c.on_drag_start(0.0);
        c.on_drag_move(80.0, 800.0);
        c.on_drag_end();

        assert!(!c.is_rotating());
        assert!(c.momentum().abs() > 0.0);

        let mut steps = 0;
        while c.momentum() != 0.0 {
            c.tick();
            steps += 1;
            assert!(steps < 1000, "momentum never converged");
        }

        // Once stopped, further ticks change nothing.
        let angle = c.angle();
        c.tick();
        assert_eq!(c.angle(), angle);
    }

    #[test]
    fn arrow_press_release_steps_once() {
        let mut c = controller();
        let step = c.tuning().key_step;

        c.on_key_down(Key::Right);
        c.on_key_up(Key::Right);

        assert!(!c.is_rotating());
        assert!((c.angle() + step).abs() < EPS);

        c.on_key_down(Key::Left);
        assert!(c.is_rotating());
        assert!((c.angle() - (-step + step)).abs() < EPS);
        assert!((c.momentum() - c.tuning().key_momentum).abs() < EPS);
    }

    #[test]
    fn stage_tracks_angle_only_while_rotating() {
        let mut c = controller();

        // Start a drag with the angle inside the stage-2 band.
        c.set_angle(2.5);
        c.on_drag_start(0.0);
        c.tick();
        assert_eq!(c.stage(), Some(Stage::Two));

        // Releasing freezes the stage even though the angle leaves the
        // band while coasting.
        c.on_drag_end();
        c.set_angle(3.1);
        c.tick();
        assert_eq!(c.stage(), Some(Stage::Two));

        // Rotating again reclassifies.
        c.on_drag_start(0.0);
        c.tick();
        assert_eq!(c.stage(), None);
    }

    #[test]
    fn routes_mouse_events_into_a_drag() {
        let mut c = controller();
        let mut input = InputState::new();
        let m = Modifiers::empty();

        // Cursor must be known before a press can anchor a drag.
        let press = WindowEvent::MouseButton(MouseButton::Button1, Action::Press, m);
        c.handle_event(&input, &press);
        assert!(!c.is_rotating());

        input.handle_event(&WindowEvent::CursorPos(100.0, 50.0, m));
        c.handle_event(&input, &press);
        assert!(c.is_rotating());

        let mv = WindowEvent::CursorPos(180.0, 50.0, m);
        input.handle_event(&mv);
        c.handle_event(&input, &mv);
        let expected = 80.0 / input.viewport_width() * c.tuning().drag_step;
        assert!((c.angle() - expected).abs() < EPS);

        c.handle_event(
            &input,
            &WindowEvent::MouseButton(MouseButton::Button1, Action::Release, m),
        );
        assert!(!c.is_rotating());
    }

    #[test]
    fn routes_touch_events_and_ignores_other_fingers() {
        let mut c = controller();
        let input = InputState::new();
        let m = Modifiers::empty();

        c.handle_event(&input, &WindowEvent::Touch(7, 100.0, 0.0, TouchAction::Start, m));
        assert!(c.is_rotating());

        // A second finger neither restarts nor moves the drag.
        c.handle_event(&input, &WindowEvent::Touch(8, 400.0, 0.0, TouchAction::Start, m));
        c.handle_event(&input, &WindowEvent::Touch(8, 500.0, 0.0, TouchAction::Move, m));
        assert_eq!(c.angle(), 0.0);

        c.handle_event(&input, &WindowEvent::Touch(7, 180.0, 0.0, TouchAction::Move, m));
        let expected = 80.0 / input.viewport_width() * c.tuning().drag_step;
        assert!((c.angle() - expected).abs() < EPS);

        // Ending the untracked finger changes nothing; ending the
        // tracked one ends the drag.
        c.handle_event(&input, &WindowEvent::Touch(8, 500.0, 0.0, TouchAction::End, m));
        assert!(c.is_rotating());
        c.handle_event(&input, &WindowEvent::Touch(7, 180.0, 0.0, TouchAction::End, m));
        assert!(!c.is_rotating());
    }

    #[test]
    fn rebound_keys_are_honored() {
        let mut c = controller();
        c.rebind_left_key(Some(Key::Up));
        c.rebind_right_key(None);

        c.on_key_down(Key::Left);
        assert_eq!(c.angle(), 0.0);

        c.on_key_down(Key::Up);
        assert!(c.angle() > 0.0);
        assert!(c.is_rotating());

        // Right is unbound: no step applied.
        let angle = c.angle();
        c.on_key_down(Key::Right);
        assert_eq!(c.angle(), angle);
    }

    #[test]
    fn zero_viewport_width_is_rejected() {
        let mut c = controller();
        c.on_drag_start(10.0);
        c.on_drag_move(400.0, 0.0);
        assert_eq!(c.angle(), 0.0);
    }
}
