//! Drives the island showcase with a synthetic input script and prints
//! the stage transitions a real host would react to.
//!
//! Run with `RUST_LOG=debug` to also see the controller's internal
//! transitions.

use turnstage::prelude::*;

struct PrintingHost;

impl ShowcaseHost for PrintingHost {
    fn rotation_started(&mut self) {
        println!("rotation started");
    }

    fn rotation_stopped(&mut self) {
        println!("rotation stopped");
    }

    fn stage_changed(&mut self, stage: Option<Stage>) {
        match stage {
            Some(stage) => println!("facing stage {}", stage.number()),
            None => println!("between stages"),
        }
    }
}

fn main() {
    env_logger::init();

    let library = placeholder_library();
    let mut showcase = IslandShowcase::new(TurntableTuning::default());
    showcase.attach_island(Island::build(&library).expect("placeholder library is complete"));

    let mut hub = EventHub::new();
    showcase.mount(&mut hub);

    let mut input = InputState::new();
    let mut host = PrintingHost;
    let m = Modifiers::empty();

    hub.push(WindowEvent::FramebufferSize(1280, 720));

    // A fast leftward drag: press, sweep the cursor across the
    // viewport, release.
    hub.push(WindowEvent::CursorPos(1250.0, 360.0, m));
    hub.push(WindowEvent::MouseButton(MouseButton::Button1, Action::Press, m));
    for frame in 0..12 {
        hub.push(WindowEvent::CursorPos(1250.0 - 100.0 * (frame + 1) as f64, 360.0, m));
        showcase.pump(&mut input, &mut host);
        showcase.tick(&mut host);
    }
    hub.push(WindowEvent::MouseButton(MouseButton::Button1, Action::Release, m));

    // Let the released rotation coast to a stop.
    let mut coasting_frames = 0;
    loop {
        showcase.pump(&mut input, &mut host);
        showcase.tick(&mut host);
        coasting_frames += 1;
        if showcase.controller().momentum() == 0.0 {
            break;
        }
    }
    println!(
        "coasted for {} frames, resting at {:.3} rad",
        coasting_frames,
        showcase.angle()
    );

    // Hold the left arrow for a full turn; the platform would deliver
    // auto-repeated presses just like this.
    for _ in 0..400 {
        hub.push(WindowEvent::Key(Key::Left, Action::Press, m));
        showcase.pump(&mut input, &mut host);
        showcase.tick(&mut host);
    }
    hub.push(WindowEvent::Key(Key::Left, Action::Release, m));
    showcase.pump(&mut input, &mut host);
    showcase.tick(&mut host);

    println!(
        "final angle {:.3} rad, last stage {:?}",
        showcase.angle(),
        showcase.stage()
    );
}
