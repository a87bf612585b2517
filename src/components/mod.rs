//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the game world.
//!
//! Submodules overview:
//! - [`bullet`] – projectile velocity and age counter
//! - [`inputcontrolled`] – fixed per-tick movement step driven by input
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – marker for the entity turrets aim at
//! - [`rotation`] – rotation angle in radians
//! - [`scale`] – 2D scale factor for sprites
//! - [`sprite`] – tile sprite cut from the shared tileset
//! - [`turret`] – fire-control cooldown counter
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod bullet;
pub mod inputcontrolled;
pub mod mapposition;
pub mod player;
pub mod rotation;
pub mod scale;
pub mod sprite;
pub mod turret;
pub mod zindex;
