//! Per-tick keyboard input resource.
//!
//! Captures the subset of input the game cares about and exposes it to
//! systems via the [`InputState`] resource. Directions use the arrow keys,
//! space fires, and escape quits. The gamepad back button also raises the
//! quit action.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is held this tick.
    pub active: bool,
    /// Whether the key went down this tick.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: key,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-tick input relevant to gameplay: the four
/// cardinal directions, the fire trigger, and the quit action.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub fire: BoolState,
    pub quit: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            up: BoolState::bound(KeyboardKey::KEY_UP),
            down: BoolState::bound(KeyboardKey::KEY_DOWN),
            left: BoolState::bound(KeyboardKey::KEY_LEFT),
            right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            fire: BoolState::bound(KeyboardKey::KEY_SPACE),
            quit: BoolState::bound(KeyboardKey::KEY_ESCAPE),
        }
    }
}

impl InputState {
    /// Whether the player asked to leave the game this tick.
    pub fn quit_requested(&self) -> bool {
        self.quit.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.up.active);
        assert!(!input.down.active);
        assert!(!input.left.active);
        assert!(!input.right.active);
        assert!(!input.fire.active);
        assert!(!input.quit.active);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.down.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.fire.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.quit.key_binding, KeyboardKey::KEY_ESCAPE);
    }

    #[test]
    fn test_quit_requested_follows_quit_state() {
        let mut input = InputState::default();
        assert!(!input.quit_requested());
        input.quit.active = true;
        assert!(input.quit_requested());
    }
}
