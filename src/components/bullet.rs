//! Projectile state.
//!
//! A bullet carries a velocity fixed at spawn time and an update counter.
//! The [`bullet_update`](crate::systems::bullet::bullet_update) system
//! advances the position by the velocity once per tick and despawns the
//! bullet once its age exceeds [`BULLET_MAX_AGE`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World units a bullet travels per tick.
pub const BULLET_SPEED: f32 = 2.0;

/// Updates a bullet survives. It is removed once its age exceeds this.
pub const BULLET_MAX_AGE: u32 = 200;

/// A projectile fired by a turret.
#[derive(Component, Clone, Copy, Debug)]
pub struct Bullet {
    /// Displacement applied per tick, fixed at spawn.
    pub velocity: Vector2,
    /// Update calls survived so far.
    pub age: u32,
}

impl Bullet {
    /// Build a bullet from the firing angle in radians.
    ///
    /// The firing angle is measured from the target toward the shooter;
    /// the negated speed sends the bullet back along that line, toward
    /// the target.
    pub fn from_angle(radians: f32) -> Self {
        Self {
            velocity: Vector2 {
                x: radians.cos() * -BULLET_SPEED,
                y: radians.sin() * -BULLET_SPEED,
            },
            age: 0,
        }
    }

    /// Whether the bullet has outlived [`BULLET_MAX_AGE`].
    pub fn expired(&self) -> bool {
        self.age > BULLET_MAX_AGE
    }
}
