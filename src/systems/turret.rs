//! Turret aiming and fire control.
//!
//! Two systems drive the turret each tick: [`turret_aim`] re-points it at
//! the player, and [`turret_fire`] either spawns a bullet or runs the
//! cooldown countdown. Bullet advancement lives in
//! [`crate::systems::bullet`].

use bevy_ecs::prelude::*;

use crate::components::bullet::Bullet;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::turret::Turret;
use crate::components::zindex::ZIndex;
use crate::resources::input::InputState;
use crate::resources::spriteatlas::{SpriteAtlas, SpriteKind};

/// Painter layer bullets draw on, above the player and turret sprites.
pub const BULLET_LAYER: i32 = 2;

/// Swivel every turret, re-aiming at the player each tick.
///
/// The stored angle is measured from the player toward the turret, so the
/// sprite faces away from its target; bullet velocities negate the speed
/// and travel back along the same line.
pub fn turret_aim(
    mut turrets: Query<(&MapPosition, &mut Rotation), With<Turret>>,
    players: Query<&MapPosition, With<Player>>,
) {
    let Ok(target) = players.single() else {
        return;
    };
    for (position, mut rotation) in turrets.iter_mut() {
        rotation.radians = (position.pos.y - target.pos.y).atan2(position.pos.x - target.pos.x);
    }
}

/// Spawn one bullet when the trigger is held and the cooldown has elapsed,
/// otherwise count the cooldown down.
///
/// The two branches are exclusive, so at most one bullet spawns per tick.
/// Spawns go through [`Commands`] and join the world at the end of the
/// schedule run; a bullet fired this tick is first advanced on the next.
pub fn turret_fire(
    mut commands: Commands,
    mut turrets: Query<(&MapPosition, &Rotation, &mut Turret)>,
    input: Res<InputState>,
    atlas: Res<SpriteAtlas>,
) {
    for (position, rotation, mut turret) in turrets.iter_mut() {
        if input.fire.active && turret.ready() {
            commands.spawn((
                Bullet::from_angle(rotation.radians),
                MapPosition { pos: position.pos },
                Rotation {
                    radians: rotation.radians,
                },
                Scale::default(),
                ZIndex(BULLET_LAYER),
                atlas.sprite_for(SpriteKind::Bullet),
            ));
            turret.rearm();
        } else if turret.cooldown > 0 {
            turret.cooldown -= 1;
        }
    }
}
