//! Animation state machine and playback.
//!
//! Handles animation states (idle, run, jump, fall) and frame progression,
//! driven by the parameters character controllers publish.

use bevy::prelude::*;

use crate::movement::{AnimationParam, AnimationSignal, AnimationTrigger};

/// Animation states for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
}

/// Component for animation playback on a character sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
    /// Whether the animation has finished (for non-looping).
    pub finished: bool,
    /// "run" parameter.
    pub run: bool,
    /// "grounded" parameter.
    pub grounded: bool,
    /// Pending one-shot "jump" trigger.
    pub jump_triggered: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15, // ~6-7 FPS for retro feel
            looping: true,
            finished: false,
            run: false,
            grounded: true,
            jump_triggered: false,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting frame if state changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.state = state;
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.finished = false;

            self.looping = matches!(
                state,
                AnimationState::Idle | AnimationState::Run | AnimationState::Fall
            );

            self.total_frames = match state {
                AnimationState::Idle => 4,
                AnimationState::Run => 6,
                AnimationState::Jump => 2,
                AnimationState::Fall => 2,
            };
        }
    }

    /// Apply one parameter change from a character controller.
    pub fn apply(&mut self, signal: &AnimationSignal) {
        match *signal {
            AnimationSignal::SetBool { param, value, .. } => match param {
                AnimationParam::Run => self.run = value,
                AnimationParam::Grounded => self.grounded = value,
            },
            AnimationSignal::Trigger { trigger, .. } => match trigger {
                AnimationTrigger::Jump => self.jump_triggered = true,
            },
        }
    }

    /// Pick the state the current parameters call for, consuming any trigger.
    pub fn next_state(&mut self) -> AnimationState {
        if std::mem::take(&mut self.jump_triggered) {
            return AnimationState::Jump;
        }
        // Let the jump take-off play out before falling or landing
        if self.state == AnimationState::Jump && !self.finished {
            return AnimationState::Jump;
        }

        match (self.grounded, self.run) {
            (false, _) => AnimationState::Fall,
            (true, true) => AnimationState::Run,
            (true, false) => AnimationState::Idle,
        }
    }

    /// Step playback by `dt` seconds. Returns true on the step a one-shot
    /// animation reaches its last frame.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        self.frame_timer += dt;
        if self.frame_timer < self.frame_duration {
            return false;
        }

        self.frame_timer -= self.frame_duration;
        self.current_frame += 1;
        if self.current_frame < self.total_frames {
            return false;
        }

        if self.looping {
            self.current_frame = 0;
            false
        } else {
            self.current_frame = self.total_frames - 1;
            self.finished = true;
            true
        }
    }

    /// Get the current animation name suffix (e.g., "idle", "run").
    pub fn animation_suffix(&self) -> &'static str {
        match self.state {
            AnimationState::Idle => "idle",
            AnimationState::Run => "run",
            AnimationState::Jump => "jump",
            AnimationState::Fall => "fall",
        }
    }
}

/// System that routes controller signals to the matching animation component.
pub fn apply_animation_signals(
    mut signals: MessageReader<AnimationSignal>,
    mut query: Query<&mut AnimationController>,
) {
    for signal in signals.read() {
        if let Ok(mut controller) = query.get_mut(signal.entity()) {
            controller.apply(signal);
        }
    }
}

/// System that picks the animation state from the controller parameters.
pub fn animation_state_machine(mut query: Query<(Entity, &mut AnimationController)>) {
    for (entity, mut controller) in &mut query {
        let to = controller.next_state();
        if controller.state != to {
            controller.set_state(to);
            debug!("Animation {:?}: {}", entity, controller.animation_suffix());
        }
    }
}

/// System that updates animation frames based on time.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
) {
    for (entity, mut controller) in &mut query {
        if controller.advance(time.delta_secs()) {
            debug!(
                "Animation {:?}: {} finished",
                entity,
                controller.animation_suffix()
            );
        }
    }
}
