//! Game systems.
//!
//! This module groups the systems that advance the simulation and draw it.
//!
//! Submodules overview
//! - [`bullet`] – advance bullets and despawn the expired ones
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`playercontroller`] – step the player inside the world bounds
//! - [`render`] – draw the world using raylib
//! - [`turret`] – aim at the player and run fire control

pub mod bullet;
pub mod input;
pub mod playercontroller;
pub mod render;
pub mod turret;
