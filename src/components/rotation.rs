use bevy_ecs::prelude::Component;

/// Rotation angle in radians. Converted to degrees only at the draw call.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub radians: f32,
}
