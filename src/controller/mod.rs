//! Orientation controller trait and the turntable implementation.

pub use self::controller::OrientationController;
pub use self::turntable::{TurntableController, TurntableTuning};

mod controller;
mod turntable;
