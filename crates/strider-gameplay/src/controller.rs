//! Point-and-click navigation controller.
//!
//! Consumes pointer clicks, drives a path-following agent toward the
//! clicked destination, blends locomotion animation speed from the path
//! velocity, and arbitrates a brief interaction hold when the destination
//! is an interactable object rather than bare ground.
//!
//! The controller owns the agent body's pose; the host engine reads it
//! back. All external collaborators (path agent, animation runtime,
//! navigable surface, scene interactables) are passed in at the call
//! sites rather than stored, so the controller holds no references into
//! the host scene.

use glam::{Quat, Vec3};
use tracing::{debug, trace};

use strider_common::{look_rotation, move_towards, InteractableId, Transform};

use crate::agent::PathAgent;
use crate::animation::AnimationDriver;
use crate::config::NavigationConfig;
use crate::events::{ClickEvent, ClickQueue};
use crate::interactable::InteractableRegistry;
use crate::locomotion::{self, LocomotionState};
use crate::settle::SettleState;
use crate::surface::{resolve_point, NavigableSurface};

/// Single-agent point-and-click navigation controller.
#[derive(Debug)]
pub struct NavigationController {
    /// Fixed tuning parameters
    config: NavigationConfig,
    /// Pose of the agent body, owned by the controller
    body: Transform,
    /// Current movement target; single-valued, no history
    destination: Vec3,
    /// Handle of the targeted interactable, between click and interaction
    current_interactable: Option<InteractableId>,
    /// Whether click input is accepted
    handle_input: bool,
    /// Post-interaction input hold progress
    settle: SettleState,
    /// Locomotion state selected on the last tick
    state: LocomotionState,
    /// Facing blended during the last Slowing tick. Computed but never
    /// applied: the body's facing stays frozen while slowing.
    last_slowing_facing: Option<Quat>,
}

impl NavigationController {
    /// Creates a controller for a body at `pose`.
    ///
    /// The destination starts at the body position, so the state machine
    /// reports arrival until the first click.
    #[must_use]
    pub fn new(pose: Transform, config: NavigationConfig) -> Self {
        Self {
            config,
            body: pose,
            destination: pose.position,
            current_interactable: None,
            handle_input: true,
            settle: SettleState::Idle,
            state: LocomotionState::Coasting,
            last_slowing_facing: None,
        }
    }

    /// Binds the controller to its agent: the controller owns facing, so
    /// the agent's own rotation updates are switched off.
    pub fn attach<A: PathAgent + ?Sized>(&mut self, agent: &mut A) {
        agent.set_updates_rotation(false);
    }

    /// Returns the tuning parameters.
    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Returns the body pose.
    #[must_use]
    pub fn body(&self) -> Transform {
        self.body
    }

    /// Returns the body position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    /// Returns the body facing.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.body.rotation
    }

    /// Returns the current movement target.
    #[must_use]
    pub fn destination(&self) -> Vec3 {
        self.destination
    }

    /// Returns the targeted interactable, if any.
    #[must_use]
    pub fn current_interactable(&self) -> Option<InteractableId> {
        self.current_interactable
    }

    /// Whether click input is currently accepted.
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.handle_input
    }

    /// Returns the locomotion state selected on the last tick.
    #[must_use]
    pub fn state(&self) -> LocomotionState {
        self.state
    }

    /// Returns the settle sequence progress.
    #[must_use]
    pub fn settle(&self) -> SettleState {
        self.settle
    }

    /// Facing blended during the last Slowing tick; never applied to the
    /// body.
    #[must_use]
    pub fn last_slowing_facing(&self) -> Option<Quat> {
        self.last_slowing_facing
    }

    /// Handles a click on bare ground.
    ///
    /// Rejected while input is held. Clears the targeted interactable,
    /// resolves the point against the navigable surface (raw-point
    /// fallback), and paths the agent to the result.
    pub fn on_ground_click<S, A>(&mut self, point: Vec3, surface: &S, agent: &mut A)
    where
        S: NavigableSurface + ?Sized,
        A: PathAgent + ?Sized,
    {
        if !self.handle_input {
            trace!("ground click ignored, input held");
            return;
        }

        self.current_interactable = None;
        self.destination = resolve_point(surface, point, self.config.surface_sample_radius);
        debug!("ground click, destination {:?}", self.destination);

        agent.set_destination(self.destination);
        agent.resume();
    }

    /// Handles a click on an interactable object.
    ///
    /// Rejected while input is held. A handle with no registry entry is
    /// treated as "no interactable" and the click is ignored.
    pub fn on_interactable_clicked<A>(
        &mut self,
        id: InteractableId,
        interactables: &InteractableRegistry,
        agent: &mut A,
    ) where
        A: PathAgent + ?Sized,
    {
        if !self.handle_input {
            trace!("interactable click ignored, input held");
            return;
        }

        let Some(anchor) = interactables.anchor(id) else {
            debug!("click on unknown interactable {:?}, ignored", id);
            return;
        };

        self.current_interactable = Some(id);
        self.destination = anchor.position;
        debug!("interactable {:?} clicked, destination {:?}", id, self.destination);

        agent.set_destination(self.destination);
        agent.resume();
    }

    /// Dispatches one click event to the matching entry point.
    pub fn handle_click<S, A>(
        &mut self,
        event: ClickEvent,
        surface: &S,
        interactables: &InteractableRegistry,
        agent: &mut A,
    ) where
        S: NavigableSurface + ?Sized,
        A: PathAgent + ?Sized,
    {
        match event {
            ClickEvent::Ground { point } => self.on_ground_click(point, surface, agent),
            ClickEvent::Interactable { id } => {
                self.on_interactable_clicked(id, interactables, agent);
            },
        }
    }

    /// Applies a queue's backlog of clicks in arrival order.
    pub fn drain_clicks<S, A>(
        &mut self,
        queue: &ClickQueue,
        surface: &S,
        interactables: &InteractableRegistry,
        agent: &mut A,
    ) where
        S: NavigableSurface + ?Sized,
        A: PathAgent + ?Sized,
    {
        for event in queue.drain() {
            self.handle_click(event, surface, interactables, agent);
        }
    }

    /// Runs one simulation tick.
    ///
    /// Advances the settle sequence, feeds the animation's root motion
    /// back into the agent's velocity, selects the locomotion state, and
    /// reports the blended speed to the animation runtime.
    pub fn update<A, D>(
        &mut self,
        dt: f32,
        agent: &mut A,
        animator: &mut D,
        interactables: &mut InteractableRegistry,
    ) where
        A: PathAgent + ?Sized,
        D: AnimationDriver + ?Sized,
    {
        if dt <= 0.0 {
            return;
        }

        if self.settle.holds_input() {
            self.settle = self.settle.advance(dt, animator);
            if self.settle.is_idle() {
                self.handle_input = true;
                debug!("settle complete, input handling restored");
            }
        }

        // The agent moves at the speed the animation actually played back,
        // not at its own path-following speed.
        agent.set_velocity(animator.root_motion() / dt);

        let pending = agent.has_pending_path();
        let remaining = agent.remaining_distance();
        let stopping_distance = agent.stopping_distance();
        let desired = agent.desired_velocity();
        let mut speed = desired.length();

        let state = locomotion::select_state(pending, remaining, stopping_distance, speed, &self.config);
        if state != self.state {
            trace!("locomotion {:?} -> {:?}", self.state, state);
        }
        self.state = state;

        match state {
            LocomotionState::PathPending => return,
            LocomotionState::Stopping => speed = self.stopping(agent, interactables),
            LocomotionState::Slowing => {
                speed = self.slowing(dt, remaining, stopping_distance, agent, interactables);
            },
            LocomotionState::Moving => self.moving(dt, desired),
            LocomotionState::Coasting => {},
        }

        animator.set_speed(speed, self.config.speed_damp_time, dt);
    }

    /// Arrival: halt, snap to the destination, fire the interaction.
    fn stopping<A: PathAgent + ?Sized>(
        &mut self,
        agent: &mut A,
        interactables: &mut InteractableRegistry,
    ) -> f32 {
        agent.stop();
        self.body.position = self.destination;

        if let Some(id) = self.current_interactable.take() {
            if let Some(anchor) = interactables.anchor(id) {
                self.body.rotation = anchor.rotation;
                interactables.interact(id);
                debug!("arrived at interactable {:?}, holding input", id);
                self.handle_input = false;
                self.settle = SettleState::begin(self.config.input_hold_delay);
            } else {
                debug!("interactable {:?} vanished before arrival", id);
            }
        }

        0.0
    }

    /// Final approach: steer manually toward the destination and taper the
    /// blend speed down.
    fn slowing<A: PathAgent + ?Sized>(
        &mut self,
        dt: f32,
        remaining: f32,
        stopping_distance: f32,
        agent: &mut A,
        interactables: &InteractableRegistry,
    ) -> f32 {
        agent.stop();
        self.body.position = move_towards(
            self.body.position,
            self.destination,
            self.config.slowing_speed * dt,
        );

        let proportion = (1.0 - remaining / stopping_distance).clamp(0.0, 1.0);
        let target = self
            .current_interactable
            .and_then(|id| interactables.anchor(id))
            .map_or(self.body.rotation, |anchor| anchor.rotation);
        // TODO: decide whether this blended facing should be applied to the
        // body while slowing. Today it is computed and discarded, so facing
        // stays frozen until the arrival snap.
        self.last_slowing_facing = Some(self.body.rotation.slerp(target, proportion));

        locomotion::slowing_speed_at(remaining, stopping_distance, self.config.slowing_speed)
    }

    /// En route: turn toward the direction of travel.
    fn moving(&mut self, dt: f32, desired_velocity: Vec3) {
        if let Some(target) = look_rotation(desired_velocity) {
            // Exponential-style smoothing with a per-tick factor; same
            // shape as a per-frame lerp, not an exact framerate-independent
            // slerp.
            let t = (self.config.turn_smoothing * dt).min(1.0);
            self.body.rotation = self.body.rotation.slerp(target, t);
        }
    }
}
