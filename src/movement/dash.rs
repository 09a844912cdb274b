//! Movement domain: timed, direction-locked dash.

use crate::movement::Facing;

/// Cooldown value once a dash is ready; keeps the timer from drifting further negative.
pub const DASH_READY: f32 = -1.0;

/// Dash cooldown plus the in-flight dash, if any.
///
/// A dash is a multi-tick task: it is started on one tick and advanced by
/// [`DashState::advance`] on every following tick until its elapsed time
/// reaches the configured duration. Dropping the state abandons it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashState {
    pub cooldown_remaining: f32,
    pub active: bool,
    pub elapsed: f32,
    pub start_facing: Facing,
    /// Set on the trigger tick; the first translation happens on the next one.
    pub(crate) pending_first_step: bool,
}

impl DashState {
    pub fn is_ready(&self) -> bool {
        !self.active && self.cooldown_remaining <= 0.0
    }

    /// Count the cooldown down by one tick.
    pub fn decay(&mut self, dt: f32) {
        self.cooldown_remaining -= dt;
        if self.cooldown_remaining < 0.0 {
            self.cooldown_remaining = DASH_READY;
        }
    }

    /// Begin a dash facing `facing` if the cooldown allows it.
    pub fn try_start(&mut self, facing: Facing, cooldown: f32) -> bool {
        if !self.is_ready() {
            return false;
        }

        self.active = true;
        self.elapsed = 0.0;
        self.start_facing = facing;
        self.pending_first_step = true;
        self.cooldown_remaining = cooldown;
        true
    }

    /// Advance an active dash by one tick and return the horizontal offset to apply.
    ///
    /// The cooldown is re-armed on every step so it only starts counting down
    /// once the dash is over.
    pub fn advance(&mut self, dt: f32, speed: f32, duration: f32, cooldown: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        if self.pending_first_step {
            self.pending_first_step = false;
            return None;
        }
        if self.elapsed >= duration {
            self.active = false;
            return None;
        }

        self.cooldown_remaining = cooldown;
        self.elapsed += dt;
        if self.elapsed >= duration {
            self.active = false;
        }

        Some(speed * dt * self.start_facing.sign())
    }
}
