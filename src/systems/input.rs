//! Input polling.
//!
//! [`update_input_state`] reads hardware input from raylib once per tick
//! and writes the results into
//! [`crate::resources::input::InputState`], so every system in the update
//! schedule sees the same snapshot.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::input::InputState;

/// Gamepad slot polled for the back button.
const GAMEPAD_ID: i32 = 0;

/// Poll raylib for keyboard and gamepad state and update `InputState`.
///
/// Runs outside the update schedule, before it, because it needs the
/// raylib handle the driver owns.
pub fn update_input_state(world: &mut World, rl: &RaylibHandle) {
    let mut input = world.resource_mut::<InputState>();

    input.up.active = rl.is_key_down(input.up.key_binding);
    input.down.active = rl.is_key_down(input.down.key_binding);
    input.left.active = rl.is_key_down(input.left.key_binding);
    input.right.active = rl.is_key_down(input.right.key_binding);
    input.fire.active = rl.is_key_down(input.fire.key_binding);
    input.quit.active = rl.is_key_down(input.quit.key_binding);

    input.up.just_pressed = rl.is_key_pressed(input.up.key_binding);
    input.down.just_pressed = rl.is_key_pressed(input.down.key_binding);
    input.left.just_pressed = rl.is_key_pressed(input.left.key_binding);
    input.right.just_pressed = rl.is_key_pressed(input.right.key_binding);
    input.fire.just_pressed = rl.is_key_pressed(input.fire.key_binding);
    input.quit.just_pressed = rl.is_key_pressed(input.quit.key_binding);

    // The gamepad back button shares the quit action with the keyboard.
    if rl.is_gamepad_available(GAMEPAD_ID)
        && rl.is_gamepad_button_down(GAMEPAD_ID, GamepadButton::GAMEPAD_BUTTON_MIDDLE_LEFT)
    {
        input.quit.active = true;
    }
}
