//! World rendering.
//!
//! We render inside raylib's drawing scopes and query the ECS World.
//! Entities are collected and stable-sorted by
//! [`ZIndex`](crate::components::zindex::ZIndex), so layers draw back to
//! front and entities sharing a layer keep their query order.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::texturestore::TextureStore;

/// Resolved parameters for one `draw_texture_pro` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDrawParams {
    pub source: Rectangle,
    pub dest: Rectangle,
    pub origin: Vector2,
    pub rotation_degrees: f32,
}

/// Compute the draw parameters for a sprite at a transform.
///
/// This is a pure function of the entity's components: identical state
/// always yields the identical draw call. The destination rectangle places
/// the sprite so that the map position is the pivot; the sprite's own
/// origin is scaled alongside the destination, so rotation and scale keep
/// turning around the tile center.
pub fn sprite_draw_params(
    sprite: &Sprite,
    position: &MapPosition,
    rotation: Option<&Rotation>,
    scale: Option<&Scale>,
) -> SpriteDrawParams {
    let scale = scale.map(|s| s.scale).unwrap_or(Vector2::one());
    SpriteDrawParams {
        source: Rectangle {
            x: sprite.offset.x,
            y: sprite.offset.y,
            width: sprite.width,
            height: sprite.height,
        },
        dest: Rectangle {
            x: position.pos.x,
            y: position.pos.y,
            width: sprite.width * scale.x,
            height: sprite.height * scale.y,
        },
        origin: Vector2 {
            x: sprite.origin.x * scale.x,
            y: sprite.origin.y * scale.y,
        },
        rotation_degrees: rotation.map(|r| r.radians.to_degrees()).unwrap_or(0.0),
    }
}

/// Draw every sprite entity inside raylib's 2D camera scope.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    // Query: (Sprite, MapPosition, Rotation?, Scale?, ZIndex)
    // We collect, sort by z, then draw.
    let mut to_draw: Vec<(Sprite, MapPosition, Option<Rotation>, Option<Scale>, ZIndex)> = {
        let mut query = world
            .query::<(&Sprite, &MapPosition, Option<&Rotation>, Option<&Scale>, &ZIndex)>();
        query
            .iter(world)
            .map(|(sprite, pos, rot, scale, z)| {
                (sprite.clone(), *pos, rot.copied(), scale.copied(), *z)
            })
            .collect()
    };

    to_draw.sort_by_key(|(_, _, _, _, z)| *z);

    let textures = world.non_send_resource::<TextureStore>();

    for (sprite, position, rotation, scale, _z) in to_draw.iter() {
        if let Some(tex) = textures.get(sprite.tex_key) {
            let params = sprite_draw_params(sprite, position, rotation.as_ref(), scale.as_ref());
            d2.draw_texture_pro(
                tex,
                params.source,
                params.dest,
                params.origin,
                params.rotation_degrees,
                Color::WHITE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::spriteatlas::{SpriteAtlas, SpriteKind};

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_identical_state_yields_identical_params() {
        let atlas = SpriteAtlas::tileset();
        let sprite = atlas.sprite_for(SpriteKind::Turret);
        let position = MapPosition::new(80.0, 80.0);
        let rotation = Rotation { radians: 1.25 };
        let scale = Scale::default();

        let a = sprite_draw_params(&sprite, &position, Some(&rotation), Some(&scale));
        let b = sprite_draw_params(&sprite, &position, Some(&rotation), Some(&scale));
        assert_eq!(a, b);
    }

    #[test]
    fn test_defaults_draw_unscaled_and_unrotated() {
        let atlas = SpriteAtlas::tileset();
        let sprite = atlas.sprite_for(SpriteKind::Player);
        let position = MapPosition::new(10.0, 20.0);

        let params = sprite_draw_params(&sprite, &position, None, None);
        assert!(approx_eq(params.dest.x, 10.0));
        assert!(approx_eq(params.dest.y, 20.0));
        assert!(approx_eq(params.dest.width, 16.0));
        assert!(approx_eq(params.dest.height, 16.0));
        assert!(approx_eq(params.origin.x, 8.0));
        assert!(approx_eq(params.origin.y, 8.0));
        assert!(approx_eq(params.rotation_degrees, 0.0));
    }

    #[test]
    fn test_source_selects_tile_region() {
        let atlas = SpriteAtlas::tileset();
        let sprite = atlas.sprite_for(SpriteKind::Bullet);
        let position = MapPosition::new(0.0, 0.0);

        let params = sprite_draw_params(&sprite, &position, None, None);
        assert!(approx_eq(params.source.x, 0.0));
        assert!(approx_eq(params.source.y, 16.0));
        assert!(approx_eq(params.source.width, 16.0));
        assert!(approx_eq(params.source.height, 16.0));
    }

    #[test]
    fn test_scale_grows_dest_and_origin_together() {
        let atlas = SpriteAtlas::tileset();
        let sprite = atlas.sprite_for(SpriteKind::Player);
        let position = MapPosition::new(0.0, 0.0);
        let scale = Scale::new(2.0, 3.0);

        let params = sprite_draw_params(&sprite, &position, None, Some(&scale));
        assert!(approx_eq(params.dest.width, 32.0));
        assert!(approx_eq(params.dest.height, 48.0));
        assert!(approx_eq(params.origin.x, 16.0));
        assert!(approx_eq(params.origin.y, 24.0));
    }

    #[test]
    fn test_rotation_is_converted_to_degrees() {
        let atlas = SpriteAtlas::tileset();
        let sprite = atlas.sprite_for(SpriteKind::Turret);
        let position = MapPosition::new(0.0, 0.0);
        let rotation = Rotation {
            radians: std::f32::consts::PI,
        };

        let params = sprite_draw_params(&sprite, &position, Some(&rotation), None);
        assert!(approx_eq(params.rotation_degrees, 180.0));
    }
}
