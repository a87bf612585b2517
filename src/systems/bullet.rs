//! Bullet advancement and expiry.

use bevy_ecs::prelude::*;

use crate::components::bullet::Bullet;
use crate::components::mapposition::MapPosition;

/// Advance every bullet by its fixed velocity and age it one tick,
/// despawning it once its age exceeds
/// [`BULLET_MAX_AGE`](crate::components::bullet::BULLET_MAX_AGE).
///
/// The step is per tick, not time-scaled.
pub fn bullet_update(
    mut query: Query<(Entity, &mut MapPosition, &mut Bullet)>,
    mut commands: Commands,
) {
    for (entity, mut position, mut bullet) in query.iter_mut() {
        position.pos += bullet.velocity;
        bullet.age += 1;
        if bullet.expired() {
            commands.entity(entity).try_despawn();
        }
    }
}
