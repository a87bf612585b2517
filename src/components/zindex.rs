use bevy_ecs::prelude::Component;

/// Rendering order hint. Higher values draw later, so they end up on top.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
