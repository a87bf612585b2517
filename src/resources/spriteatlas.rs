//! Sprite atlas over the shared tileset.
//!
//! Maps each entity kind to the grid coordinate of its tile within one
//! shared tileset image, and builds the matching
//! [`Sprite`](crate::components::sprite::Sprite) components. The atlas is
//! populated in its constructor, before any entity is spawned; asking for a
//! kind it does not carry is a setup bug, not a runtime condition.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

use crate::components::sprite::Sprite;

/// Edge length in pixels of one tile in the tileset grid.
pub const TILE_SIZE: f32 = 16.0;

/// Texture store key under which the shared tileset is registered.
pub const TILESET_TEX_KEY: &str = "tileset";

/// The kinds of entity the tileset provides a tile for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Turret,
    Player,
    Bullet,
}

/// Maps [`SpriteKind`]s to tile grid coordinates within the shared tileset.
#[derive(Resource, Debug, Clone)]
pub struct SpriteAtlas {
    tex_key: &'static str,
    tiles: FxHashMap<SpriteKind, (u32, u32)>,
}

impl SpriteAtlas {
    /// Atlas over the standard tileset layout.
    pub fn tileset() -> Self {
        let mut tiles = FxHashMap::default();
        tiles.insert(SpriteKind::Turret, (2, 0));
        tiles.insert(SpriteKind::Player, (1, 0));
        tiles.insert(SpriteKind::Bullet, (0, 1));
        Self {
            tex_key: TILESET_TEX_KEY,
            tiles,
        }
    }

    /// Pixel offset of the kind's tile within the tileset, if registered.
    pub fn region_for(&self, kind: SpriteKind) -> Option<Vector2> {
        self.tiles.get(&kind).map(|&(col, row)| Vector2 {
            x: col as f32 * TILE_SIZE,
            y: row as f32 * TILE_SIZE,
        })
    }

    /// Build the sprite component for a kind, pivoted on the tile center.
    ///
    /// # Panics
    ///
    /// Panics if the atlas carries no tile for `kind`.
    pub fn sprite_for(&self, kind: SpriteKind) -> Sprite {
        let offset = self
            .region_for(kind)
            .expect("sprite atlas carries no tile for this kind");
        Sprite {
            tex_key: self.tex_key,
            width: TILE_SIZE,
            height: TILE_SIZE,
            offset,
            origin: Vector2 {
                x: TILE_SIZE * 0.5,
                y: TILE_SIZE * 0.5,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_tileset_regions() {
        let atlas = SpriteAtlas::tileset();
        let turret = atlas.region_for(SpriteKind::Turret).unwrap();
        assert!(approx_eq(turret.x, 32.0));
        assert!(approx_eq(turret.y, 0.0));

        let player = atlas.region_for(SpriteKind::Player).unwrap();
        assert!(approx_eq(player.x, 16.0));
        assert!(approx_eq(player.y, 0.0));

        let bullet = atlas.region_for(SpriteKind::Bullet).unwrap();
        assert!(approx_eq(bullet.x, 0.0));
        assert!(approx_eq(bullet.y, 16.0));
    }

    #[test]
    fn test_sprite_for_pivots_on_tile_center() {
        let atlas = SpriteAtlas::tileset();
        let sprite = atlas.sprite_for(SpriteKind::Player);
        assert_eq!(sprite.tex_key, TILESET_TEX_KEY);
        assert!(approx_eq(sprite.width, TILE_SIZE));
        assert!(approx_eq(sprite.height, TILE_SIZE));
        assert!(approx_eq(sprite.origin.x, 8.0));
        assert!(approx_eq(sprite.origin.y, 8.0));
    }
}
