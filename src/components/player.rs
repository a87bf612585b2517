use bevy_ecs::prelude::Component;

/// Marker for the player entity. Turrets aim at the entity carrying this.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;
