//! The interactive component: island + controller + host glue.

use crate::controller::{OrientationController, TurntableController, TurntableTuning};
use crate::event::{EventHub, InputState, Subscription, WindowEvent};
use crate::island::Island;
use crate::stage::Stage;

/// What the host lets the component push into its own state.
///
/// Mirrors the two values the surrounding application cares about:
/// whether the user is actively rotating, and which stage the model
/// currently faces. All methods default to no-ops so hosts implement
/// only what they react to.
pub trait ShowcaseHost {
    /// The user started rotating (drag began or a rotation key went
    /// down).
    fn rotation_started(&mut self) {}

    /// The user stopped rotating. The model may still be coasting.
    fn rotation_stopped(&mut self) {}

    /// The active rotation moved the model into a different stage
    /// (or out of every stage, as `None`).
    fn stage_changed(&mut self, stage: Option<Stage>) {}
}

/// A host that ignores every notification.
impl ShowcaseHost for () {}

/// The interactive island showcase.
///
/// Owns the orientation controller and, once attached, the island
/// hierarchy. Events and ticks arriving before the island is attached
/// are ignored; the asset may still be loading and there is nothing to
/// rotate yet.
pub struct IslandShowcase {
    controller: TurntableController,
    island: Option<Island>,
    subscription: Option<Subscription>,
    hosted_rotating: bool,
    hosted_stage: Option<Stage>,
}

impl Default for IslandShowcase {
    fn default() -> Self {
        Self::new(TurntableTuning::default())
    }
}

impl IslandShowcase {
    /// Creates a showcase with a fresh controller using `tuning`.
    ///
    /// The result is not ready until [`attach_island`] is called.
    ///
    /// [`attach_island`]: IslandShowcase::attach_island
    pub fn new(tuning: TurntableTuning) -> IslandShowcase {
        Self::with_controller(TurntableController::new(tuning))
    }

    /// Creates a showcase around an already-configured controller.
    pub fn with_controller(controller: TurntableController) -> IslandShowcase {
        IslandShowcase {
            controller,
            island: None,
            subscription: None,
            hosted_rotating: false,
            hosted_stage: None,
        }
    }

    /// Hands the loaded island over. The component is ready from here
    /// on.
    pub fn attach_island(&mut self, island: Island) {
        log::info!("island attached, showcase ready");
        self.island = Some(island);
    }

    /// Whether the island is attached and input is being processed.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.island.is_some()
    }

    /// The attached island, if any.
    pub fn island(&self) -> Option<&Island> {
        self.island.as_ref()
    }

    /// The controller, for rebinding keys or inspecting state.
    pub fn controller(&self) -> &TurntableController {
        &self.controller
    }

    /// Mutable access to the controller.
    pub fn controller_mut(&mut self) -> &mut TurntableController {
        &mut self.controller
    }

    /// The accumulated rotation angle, in radians.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.controller.angle()
    }

    /// Whether the user is actively rotating.
    #[inline]
    pub fn is_rotating(&self) -> bool {
        self.controller.is_rotating()
    }

    /// The stage of the most recent actively-rotating frame.
    #[inline]
    pub fn stage(&self) -> Option<Stage> {
        self.controller.stage()
    }

    /// Subscribes this component to `hub`.
    ///
    /// The registration lives exactly as long as the showcase (or
    /// until [`unmount`]): dropping either releases it.
    ///
    /// [`unmount`]: IslandShowcase::unmount
    pub fn mount(&mut self, hub: &mut EventHub) {
        self.subscription = Some(hub.subscribe());
    }

    /// Drops the hub registration, if any. Queued events are
    /// discarded.
    pub fn unmount(&mut self) {
        self.subscription = None;
    }

    /// Drains events queued on the mounted subscription into the
    /// controller, updating `input` along the way.
    ///
    /// No-op when unmounted or not ready.
    pub fn pump<H: ShowcaseHost>(&mut self, input: &mut InputState, host: &mut H) {
        let events = match self.subscription.as_ref() {
            Some(subscription) => subscription.drain(),
            None => return,
        };

        for event in events {
            input.handle_event(&event);
            self.handle_event(input, &event, host);
        }
    }

    /// Routes one event into the controller and reports rotation
    /// transitions to the host.
    ///
    /// No-op until the island is attached.
    pub fn handle_event<H: ShowcaseHost>(
        &mut self,
        input: &InputState,
        event: &WindowEvent,
        host: &mut H,
    ) {
        if !self.is_ready() {
            return;
        }

        self.controller.handle_event(input, event);
        self.sync_rotation_flag(host);
    }

    /// Advances the component by one frame: runs the controller tick,
    /// applies the angle to the island root, and pushes stage changes
    /// to the host.
    ///
    /// Called once per render frame. No-op until the island is
    /// attached.
    pub fn tick<H: ShowcaseHost>(&mut self, host: &mut H) {
        let island = match self.island.as_mut() {
            Some(island) => island,
            None => return,
        };

        self.controller.tick();
        island.set_yaw(self.controller.angle());

        self.sync_rotation_flag(host);

        // Stage updates are only pushed while actively rotating, and
        // only on change, so the host is not spammed every frame.
        if self.controller.is_rotating() {
            let stage = self.controller.stage();
            if stage != self.hosted_stage {
                self.hosted_stage = stage;
                host.stage_changed(stage);
            }
        }
    }

    fn sync_rotation_flag<H: ShowcaseHost>(&mut self, host: &mut H) {
        let rotating = self.controller.is_rotating();
        if rotating != self.hosted_rotating {
            self.hosted_rotating = rotating;
            if rotating {
                host.rotation_started();
            } else {
                host.rotation_stopped();
            }
        }
    }
}
