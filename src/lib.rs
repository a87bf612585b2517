//! Turret demo library.
//!
//! This module exposes the game's ECS components, resources, and systems
//! for use in integration tests.

pub mod components;
pub mod game;
pub mod resources;
pub mod systems;
