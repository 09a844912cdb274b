//! Sprites domain: tests for the animation state machine.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::{AnimationController, AnimationState, SpritesPlugin};
use crate::movement::{AnimationParam, AnimationSignal, AnimationTrigger};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<AnimationSignal>()
        .add_plugins(SpritesPlugin);
    app
}

fn send(app: &mut App, signal: AnimationSignal) {
    app.world_mut()
        .resource_mut::<Messages<AnimationSignal>>()
        .write(signal);
}

fn set(entity: Entity, param: AnimationParam, value: bool) -> AnimationSignal {
    AnimationSignal::SetBool {
        entity,
        param,
        value,
    }
}

// -----------------------------------------------------------------------------
// AnimationController
// -----------------------------------------------------------------------------

#[test]
fn test_parameters_select_state() {
    let mut controller = AnimationController::default();
    assert_eq!(controller.next_state(), AnimationState::Idle);

    controller.run = true;
    assert_eq!(controller.next_state(), AnimationState::Run);

    controller.grounded = false;
    assert_eq!(controller.next_state(), AnimationState::Fall);
}

#[test]
fn test_jump_trigger_is_consumed_once() {
    let mut controller = AnimationController {
        jump_triggered: true,
        ..default()
    };

    assert_eq!(controller.next_state(), AnimationState::Jump);
    assert!(!controller.jump_triggered);
}

#[test]
fn test_jump_plays_out_before_falling() {
    let mut controller = AnimationController::default();
    controller.set_state(AnimationState::Jump);
    controller.grounded = false;

    assert!(!controller.looping);
    assert_eq!(controller.next_state(), AnimationState::Jump);

    controller.finished = true;
    assert_eq!(controller.next_state(), AnimationState::Fall);
}

#[test]
fn test_set_state_resets_playback() {
    let mut controller = AnimationController::default();
    controller.current_frame = 3;
    controller.frame_timer = 0.1;

    controller.set_state(AnimationState::Run);

    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.frame_timer, 0.0);
    assert_eq!(controller.total_frames, 6);
    assert_eq!(controller.animation_suffix(), "run");
}

#[test]
fn test_jump_finishes_after_its_frames() {
    let mut controller = AnimationController::default();
    controller.set_state(AnimationState::Jump);
    controller.grounded = false;

    // Two frames at 0.15 s each
    assert!(!controller.advance(0.1));
    assert!(!controller.advance(0.1));
    assert_eq!(controller.current_frame, 1);
    assert!(controller.advance(0.15));
    assert!(controller.finished);
    assert_eq!(controller.current_frame, 1);

    assert!(!controller.advance(1.0));
    assert_eq!(controller.next_state(), AnimationState::Fall);
}

#[test]
fn test_looping_state_wraps_to_first_frame() {
    let mut controller = AnimationController::default();
    controller.set_state(AnimationState::Fall);

    assert!(!controller.advance(0.15));
    assert_eq!(controller.current_frame, 1);
    assert!(!controller.advance(0.15));
    assert_eq!(controller.current_frame, 0);
    assert!(!controller.finished);
}

// -----------------------------------------------------------------------------
// Signal routing
// -----------------------------------------------------------------------------

#[test]
fn test_signals_drive_only_their_entity() {
    let mut app = test_app();
    let runner = app.world_mut().spawn(AnimationController::default()).id();
    let bystander = app.world_mut().spawn(AnimationController::default()).id();

    send(&mut app, set(runner, AnimationParam::Run, true));
    send(&mut app, set(runner, AnimationParam::Grounded, true));
    app.update();

    let runner_state = app.world().get::<AnimationController>(runner).unwrap().state;
    let bystander_state = app
        .world()
        .get::<AnimationController>(bystander)
        .unwrap()
        .state;
    assert_eq!(runner_state, AnimationState::Run);
    assert_eq!(bystander_state, AnimationState::Idle);
}

#[test]
fn test_jump_trigger_signal_starts_jump() {
    let mut app = test_app();
    let entity = app.world_mut().spawn(AnimationController::default()).id();

    send(
        &mut app,
        AnimationSignal::Trigger {
            entity,
            trigger: AnimationTrigger::Jump,
        },
    );
    app.update();

    let controller = app.world().get::<AnimationController>(entity).unwrap();
    assert_eq!(controller.state, AnimationState::Jump);
    assert!(!controller.jump_triggered);
}

#[test]
fn test_signal_for_despawned_entity_is_ignored() {
    let mut app = test_app();
    let entity = app.world_mut().spawn(AnimationController::default()).id();
    app.world_mut().despawn(entity);

    send(&mut app, set(entity, AnimationParam::Grounded, false));
    app.update();
}
