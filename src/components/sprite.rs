use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// A tile sprite cut from a shared tileset: the texture key into the store,
/// the source region size, the pixel offset of the region within the
/// texture, and the pivot origin relative to the region's top-left used for
/// placement, rotation, and scaling.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: &'static str,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
}
