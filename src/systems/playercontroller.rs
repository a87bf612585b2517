//! Keyboard-driven player movement.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! steps entities carrying an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component, keeping them inside the world bounds.

use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::input::InputState;
use crate::resources::worldbounds::WorldBounds;

/// Step each player-controlled entity along the held directions.
///
/// Opposing keys are exclusive: up wins over down and left wins over right.
/// Both axes contribute to a single candidate position, which is committed
/// only when it lies inside the world bounds; otherwise the entity does not
/// move this tick. There is no per-axis clamping or wall sliding.
pub fn player_controller(
    mut query: Query<(&InputControlled, &mut MapPosition), With<Player>>,
    input: Res<InputState>,
    bounds: Res<WorldBounds>,
) {
    for (controlled, mut position) in query.iter_mut() {
        let mut candidate = position.pos;
        if input.up.active {
            candidate.y -= controlled.step;
        } else if input.down.active {
            candidate.y += controlled.step;
        }
        if input.left.active {
            candidate.x -= controlled.step;
        } else if input.right.active {
            candidate.x += controlled.step;
        }

        if bounds.contains(candidate) {
            position.pos = candidate;
        }
    }
}
