//! Stationary turret state.
//!
//! A turret is a single cooldown counter. Each tick the
//! [`turret_fire`](crate::systems::turret::turret_fire) system either fires
//! (trigger held, counter at zero) and restarts the countdown, or counts
//! down by one. The counter never leaves `[0, COOLDOWN_TICKS]`.

use bevy_ecs::prelude::Component;

/// Ticks a turret waits between shots.
pub const COOLDOWN_TICKS: u32 = 30;

/// Fire-control state for a stationary turret.
///
/// A freshly placed turret starts at the full cooldown, so it cannot fire
/// during its first [`COOLDOWN_TICKS`] ticks even with the trigger held.
#[derive(Component, Clone, Copy, Debug)]
pub struct Turret {
    /// Ticks remaining before the turret may fire again.
    pub cooldown: u32,
}

impl Turret {
    pub fn new() -> Self {
        Self {
            cooldown: COOLDOWN_TICKS,
        }
    }

    /// Whether the cooldown has fully elapsed.
    pub fn ready(&self) -> bool {
        self.cooldown == 0
    }

    /// Restart the countdown after a shot.
    pub fn rearm(&mut self) {
        self.cooldown = COOLDOWN_TICKS;
    }
}

impl Default for Turret {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_turret_starts_fully_cooling() {
        let turret = Turret::new();
        assert_eq!(turret.cooldown, COOLDOWN_TICKS);
        assert!(!turret.ready());
    }

    #[test]
    fn test_ready_only_at_zero() {
        let mut turret = Turret::new();
        turret.cooldown = 1;
        assert!(!turret.ready());
        turret.cooldown = 0;
        assert!(turret.ready());
    }

    #[test]
    fn test_rearm_restarts_countdown() {
        let mut turret = Turret::new();
        turret.cooldown = 0;
        turret.rearm();
        assert_eq!(turret.cooldown, COOLDOWN_TICKS);
    }
}
