//! Game setup.
//!
//! Builds the world the driver loops over: camera and bounds derived from
//! the configuration, the tileset texture and its atlas, and the two
//! permanent entities (player and turret).

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::turret::Turret;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::spriteatlas::{SpriteAtlas, SpriteKind, TILE_SIZE, TILESET_TEX_KEY};
use crate::resources::texturestore::TextureStore;
use crate::resources::worldbounds::WorldBounds;

/// Tileset image loaded at startup.
const TILESET_PATH: &str = "assets/tileset.png";

/// Tile grid coordinate the turret sits on.
const TURRET_TILE: (f32, f32) = (5.0, 5.0);

/// Painter layers, back to front. Bullets draw above both, see
/// [`crate::systems::turret::BULLET_LAYER`].
const PLAYER_LAYER: i32 = 0;
const TURRET_LAYER: i32 = 1;

/// Load assets, derive camera and world bounds from the configuration, and
/// spawn the player and the turret.
///
/// The sprite atlas is populated before any entity is constructed. A
/// missing or unreadable tileset aborts startup.
pub fn setup(world: &mut World, rl: &mut RaylibHandle, thread: &RaylibThread) {
    let config = world.resource::<GameConfig>().clone();
    let zoom = config.zoom as f32;

    // The logical world is the window scaled down by the camera zoom.
    let world_width = config.window_width as f32 / zoom;
    let world_height = config.window_height as f32 / zoom;
    world.insert_resource(WorldBounds::new(world_width, world_height));
    world.insert_resource(Camera2DRes(Camera2D {
        target: Vector2::zero(),
        offset: Vector2::zero(),
        rotation: 0.0,
        zoom,
    }));

    let mut texture = rl
        .load_texture(thread, TILESET_PATH)
        .expect("Failed to load tileset texture");
    // Nearest-neighbor keeps the pixel art crisp under the camera zoom.
    texture.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_POINT);
    let mut textures = TextureStore::new();
    textures.add(TILESET_TEX_KEY, texture);
    world.insert_non_send_resource(textures);

    let atlas = SpriteAtlas::tileset();

    world.spawn((
        Player,
        InputControlled::default(),
        MapPosition::new(0.0, 0.0),
        Rotation::default(),
        Scale::default(),
        ZIndex(PLAYER_LAYER),
        atlas.sprite_for(SpriteKind::Player),
    ));
    world.spawn((
        Turret::new(),
        MapPosition::new(TURRET_TILE.0 * TILE_SIZE, TURRET_TILE.1 * TILE_SIZE),
        Rotation::default(),
        Scale::default(),
        ZIndex(TURRET_LAYER),
        atlas.sprite_for(SpriteKind::Turret),
    ));

    world.insert_resource(atlas);

    log::info!(
        "World ready: {}x{} units, turret at ({}, {})",
        world_width,
        world_height,
        TURRET_TILE.0 * TILE_SIZE,
        TURRET_TILE.1 * TILE_SIZE
    );
}
