//! Movement domain: per-tick character state resolution.
//!
//! One tick runs, in order: read input, update facing, publish run/grounded
//! animation flags, resolve movement (ground run, wall-cling or air) and jumps,
//! decay the dash cooldown and start a dash if requested, then advance any dash
//! already in flight.

use bevy::prelude::*;

use crate::movement::dash::DashState;
use crate::movement::sinks::{
    AnimationParam, AnimationSink, AnimationTrigger, CharacterBody, ControlInput,
    EnvironmentProbe, SoundSink,
};
use crate::movement::{Facing, MovementTuning, TuningError};

/// Mutable state owned by a controller. All timers start at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterState {
    pub horizontal_input: f32,
    pub facing: Facing,
    /// Seconds since the last wall jump. Control is locked until this passes
    /// `wall_jump_lock_time`, after which it stops advancing.
    pub wall_jump_lock: f32,
    pub wall_clinging: bool,
    pub dash: DashState,
}

#[derive(Component, Debug, Clone)]
pub struct CharacterController {
    tuning: MovementTuning,
    pub(crate) state: CharacterState,
}

impl CharacterController {
    pub fn new(tuning: MovementTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            state: CharacterState::default(),
        })
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    pub fn is_dashing(&self) -> bool {
        self.state.dash.active
    }

    pub fn is_wall_clinging(&self) -> bool {
        self.state.wall_clinging
    }

    pub fn wall_jump_unlocked(&self) -> bool {
        self.state.wall_jump_lock > self.tuning.wall_jump_lock_time
    }

    /// Standing still on open ground, the precondition for attacking.
    pub fn can_attack(&self, probe: &impl EnvironmentProbe) -> bool {
        self.state.horizontal_input == 0.0
            && probe.probe_ground()
            && !probe.probe_wall(self.state.facing)
    }

    /// Run one fixed tick.
    pub fn tick(
        &mut self,
        input: ControlInput,
        dt: f32,
        probe: &impl EnvironmentProbe,
        body: &mut impl CharacterBody,
        animation: &mut impl AnimationSink,
        sound: &mut impl SoundSink,
    ) {
        self.state.horizontal_input = input.horizontal;
        self.update_facing();

        let grounded = probe.probe_ground();
        animation.set_bool(AnimationParam::Run, input.horizontal != 0.0);
        animation.set_bool(AnimationParam::Grounded, grounded);

        self.resolve_movement(input, dt, grounded, probe, body, animation, sound);
        self.update_dash(input, dt, body);
    }

    fn update_facing(&mut self) {
        let dead_zone = self.tuning.facing_dead_zone;
        if self.state.horizontal_input > dead_zone {
            self.state.facing = Facing::Right;
        } else if self.state.horizontal_input < -dead_zone {
            self.state.facing = Facing::Left;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve_movement(
        &mut self,
        input: ControlInput,
        dt: f32,
        grounded: bool,
        probe: &impl EnvironmentProbe,
        body: &mut impl CharacterBody,
        animation: &mut impl AnimationSink,
        sound: &mut impl SoundSink,
    ) {
        if !self.wall_jump_unlocked() {
            self.state.wall_jump_lock += dt;
            return;
        }

        // The dash owns horizontal motion; gravity keeps its fall scale
        if self.tuning.exclusive_dash && self.state.dash.active {
            let velocity = body.velocity();
            body.set_velocity(Vec2::new(0.0, velocity.y));
            return;
        }

        let velocity = body.velocity();
        body.set_velocity(Vec2::new(
            self.state.horizontal_input * self.tuning.move_speed,
            velocity.y,
        ));

        let on_wall = probe.probe_wall(self.state.facing);
        let clinging = on_wall && !grounded;
        if clinging {
            body.set_gravity_scale(0.0);
            body.set_velocity(Vec2::ZERO);
        } else {
            body.set_gravity_scale(self.tuning.fall_gravity_scale);
        }

        if clinging != self.state.wall_clinging {
            debug!(
                "Wall cling {}: facing={:?}",
                if clinging { "entered" } else { "left" },
                self.state.facing
            );
            self.state.wall_clinging = clinging;
        }

        if input.jump {
            self.jump(grounded, on_wall, body, animation, sound);
        }
    }

    fn jump(
        &mut self,
        grounded: bool,
        on_wall: bool,
        body: &mut impl CharacterBody,
        animation: &mut impl AnimationSink,
        sound: &mut impl SoundSink,
    ) {
        if grounded {
            sound.play_sound(&self.tuning.jump_sound);
            let velocity = body.velocity();
            body.set_velocity(Vec2::new(velocity.x, self.tuning.jump_power));
            animation.fire(AnimationTrigger::Jump);
            debug!("Ground jump: velocity.y={}", self.tuning.jump_power);
        } else if on_wall {
            let away = -self.state.facing.sign();
            if self.state.horizontal_input == 0.0 {
                body.set_velocity(Vec2::new(away * self.tuning.wall_kick_speed, 0.0));
                self.state.facing = self.state.facing.flipped();
                debug!("Wall kick: now facing {:?}", self.state.facing);
            } else {
                body.set_velocity(Vec2::new(
                    away * self.tuning.wall_hop_speed,
                    self.tuning.wall_hop_lift,
                ));
                debug!("Wall hop: away={}", away);
            }

            self.state.wall_jump_lock = 0.0;
            self.state.wall_clinging = false;
        }
    }

    fn update_dash(&mut self, input: ControlInput, dt: f32, body: &mut impl CharacterBody) {
        let dash = &mut self.state.dash;
        dash.decay(dt);

        if input.dash && dash.try_start(self.state.facing, self.tuning.dash_cooldown) {
            debug!("Dash started: facing={:?}", dash.start_facing);
            if self.tuning.exclusive_dash {
                let velocity = body.velocity();
                body.set_velocity(Vec2::new(0.0, velocity.y));
                body.set_gravity_scale(self.tuning.fall_gravity_scale);
                if self.state.wall_clinging {
                    debug!("Wall cling left: dash");
                    self.state.wall_clinging = false;
                }
            }
        }

        let was_active = dash.active;
        if let Some(offset) = dash.advance(
            dt,
            self.tuning.dash_speed,
            self.tuning.dash_duration,
            self.tuning.dash_cooldown,
        ) {
            body.translate(Vec2::new(offset, 0.0));
        }
        if was_active && !dash.active {
            debug!(
                "Dash finished after {:.3}s, cooldown={}",
                dash.elapsed, dash.cooldown_remaining
            );
        }
    }
}
