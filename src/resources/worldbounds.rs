//! World bounds resource.
//!
//! The axis-aligned rectangle the player may move within, in world units.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

/// Rectangle constraining player movement.
///
/// Containment is inclusive on all four edges: a point exactly on the
/// boundary is inside.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldBounds {
    pub rect: Rectangle,
}

impl WorldBounds {
    /// Bounds anchored at the origin with the given extent.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            rect: Rectangle::new(0.0, 0.0, width, height),
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.rect.x
            && point.x <= self.rect.x + self.rect.width
            && point.y >= self.rect.y
            && point.y <= self.rect.y + self.rect.height
    }
}
