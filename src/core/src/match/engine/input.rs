use crate::r#match::VectorExtensions;
use nalgebra::Vector2;
use serde::Serialize;

/// One frame of merged device input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerInput {
    /// Desired movement, magnitude at most 1
    pub movement: Vector2<f32>,
    pub sprint: bool,
    pub shoot: bool,
    pub pass: bool,
    pub switch_player: bool,
    pub pause: bool,
}

impl Default for PlayerInput {
    fn default() -> Self {
        Self::idle()
    }
}

impl PlayerInput {
    pub fn idle() -> Self {
        PlayerInput {
            movement: Vector2::zeros(),
            sprint: false,
            shoot: false,
            pass: false,
            switch_player: false,
            pause: false,
        }
    }

    /// Input moving along `movement`, scaled down to unit length when longer.
    pub fn with_movement(movement: Vector2<f32>) -> Self {
        let movement = if movement.length() > 1.0 {
            movement.normalize_or_zero()
        } else {
            movement
        };

        PlayerInput {
            movement,
            ..Self::idle()
        }
    }

    pub fn is_moving(&self) -> bool {
        self.movement.length() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let input = PlayerInput::default();
        assert!(!input.is_moving());
        assert!(!input.sprint && !input.shoot && !input.pass);
        assert!(!input.switch_player && !input.pause);
    }

    #[test]
    fn test_movement_is_clamped_to_unit_length() {
        let input = PlayerInput::with_movement(Vector2::new(1.0, 1.0));
        assert!((input.movement.length() - 1.0).abs() < 1e-6);

        let input = PlayerInput::with_movement(Vector2::new(0.5, 0.0));
        assert_eq!(input.movement, Vector2::new(0.5, 0.0));
    }
}
