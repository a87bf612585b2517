//! Input-driven movement intent.
//!
//! The [`InputControlled`] component describes how an entity responds to the
//! directional keys. The
//! [`player_controller`](crate::systems::playercontroller::player_controller)
//! system reads it together with the current input state to step the
//! entity's position.

use bevy_ecs::prelude::Component;

/// Fixed movement step applied per tick along each held direction.
///
/// The step is in world units and independent of frame time. Opposing
/// directions are exclusive: up wins over down, left wins over right.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// World units moved per tick on a held axis.
    pub step: f32,
}

impl InputControlled {
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}

impl Default for InputControlled {
    fn default() -> Self {
        Self::new(1.0)
    }
}
