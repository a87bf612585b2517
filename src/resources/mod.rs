//! ECS resources.
//!
//! This module groups the shared state systems read and write: input,
//! configuration, the camera, the world bounds, and the asset stores.
//!
//! Submodules overview:
//! - [`camera2d`] – the shared world/screen transform (fixed zoom)
//! - [`gameconfig`] – INI-backed window/zoom/fps configuration
//! - [`input`] – per-tick keyboard and gamepad state
//! - [`spriteatlas`] – entity kind → tile region mapping for the tileset
//! - [`texturestore`] – loaded textures keyed by ID (main thread only)
//! - [`worldbounds`] – rectangle constraining player movement

pub mod camera2d;
pub mod gameconfig;
pub mod input;
pub mod spriteatlas;
pub mod texturestore;
pub mod worldbounds;
