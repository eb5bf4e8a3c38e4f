/*!
# Turnstage

A single interactive 3D scene component: a model on a turntable.

The user spins the model with pointer drags (mouse or touch) or the
left/right arrow keys. Released drags keep spinning with exponentially
damped momentum. While the user is actively rotating, the orientation is
quantized into a small set of discrete *stages* that the host
application reacts to (switching copy, focusing a point of interest,
whatever it likes).

**turnstage** is deliberately not an engine. It owns three things and
nothing else:

* the rotation/stage state machine ([`TurntableController`]);
* a retained node hierarchy describing one bespoke model, bound to
  named geometries and materials supplied by an external asset loader
  ([`Island`]);
* the glue that routes window events into the state machine and pushes
  `is_rotating` / current stage back to the host ([`IslandShowcase`]).

Rendering, window management and asset decoding are someone else's job:
the host adapts its event system into [`WindowEvent`]s, hands over an
[`AssetLibrary`] of named handles, reads back one yaw transform per
frame, and draws.

Driving the component looks like this:

```
use turnstage::prelude::*;

let library = placeholder_library();
let mut showcase = IslandShowcase::new(TurntableTuning::default());
showcase.attach_island(Island::build(&library).unwrap());

let mut input = InputState::new();
let event = WindowEvent::Key(Key::Left, Action::Press, Modifiers::empty());
input.handle_event(&event);
showcase.handle_event(&input, &event, &mut ());

// once per render frame:
showcase.tick(&mut ());
let yaw = showcase.angle();
assert!(yaw > 0.0);
```

[`WindowEvent`]: crate::event::WindowEvent
[`AssetLibrary`]: crate::resource::AssetLibrary
[`TurntableController`]: crate::controller::TurntableController
[`Island`]: crate::island::Island
[`IslandShowcase`]: crate::showcase::IslandShowcase
*/
#![allow(clippy::module_inception)]

#[macro_use]
extern crate bitflags;

pub use glamx;

pub mod controller;
pub mod error;
pub mod event;
pub mod island;
pub mod resource;
pub mod scene;
pub mod showcase;
pub mod stage;

pub mod prelude {
    //! Convenience re-export of the whole public surface.
    pub use crate::controller::*;
    pub use crate::error::*;
    pub use crate::event::*;
    pub use crate::island::*;
    pub use crate::resource::*;
    pub use crate::scene::*;
    pub use crate::showcase::*;
    pub use crate::stage::*;
    pub use glamx::{Quat, Vec2, Vec3};
    pub use std::cell::RefCell;
    pub use std::rc::Rc;
}
