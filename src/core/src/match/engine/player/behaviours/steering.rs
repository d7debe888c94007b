use crate::r#match::{MatchPlayer, VectorExtensions};
use nalgebra::Vector2;

pub enum SteeringBehavior {
    /// Straight at the target at a fixed speed
    Pursuit { target: Vector2<f32>, speed: f32 },
    /// Like pursuit, but once inside the deadzone the current velocity is braked instead
    Arrive {
        target: Vector2<f32>,
        speed: f32,
        deadzone: f32,
        braking: f32,
    },
}

impl SteeringBehavior {
    pub fn calculate(&self, player: &MatchPlayer) -> SteeringOutput {
        match self {
            SteeringBehavior::Pursuit { target, speed } => {
                let direction = (*target - player.position).normalize_or_zero();

                SteeringOutput {
                    velocity: direction * *speed,
                    facing: Some(direction),
                }
            }
            SteeringBehavior::Arrive {
                target,
                speed,
                deadzone,
                braking,
            } => {
                let to_target = *target - player.position;

                if to_target.length() <= *deadzone {
                    return SteeringOutput {
                        velocity: player.velocity * *braking,
                        facing: None,
                    };
                }

                let direction = to_target.normalize_or_zero();

                SteeringOutput {
                    velocity: direction * *speed,
                    facing: Some(direction),
                }
            }
        }
    }
}

pub struct SteeringOutput {
    pub velocity: Vector2<f32>,

    /// New facing, when the behaviour turns the player
    pub facing: Option<Vector2<f32>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::{MatchFieldSize, TeamColor, TeamSide};

    fn player_at(position: Vector2<f32>) -> MatchPlayer {
        let mut player = MatchPlayer::new(
            TeamSide::Home,
            0,
            Vector2::new(0.5, 0.5),
            TeamColor::HOME,
            &MatchFieldSize::default(),
        );
        player.position = position;
        player
    }

    #[test]
    fn test_pursuit_heads_to_target() {
        let player = player_at(Vector2::new(100.0, 100.0));
        let output = SteeringBehavior::Pursuit {
            target: Vector2::new(200.0, 100.0),
            speed: 150.0,
        }
        .calculate(&player);

        assert_eq!(output.velocity, Vector2::new(150.0, 0.0));
        assert_eq!(output.facing, Some(Vector2::new(1.0, 0.0)));
    }

    #[test]
    fn test_pursuit_on_target_stops() {
        let player = player_at(Vector2::new(100.0, 100.0));
        let output = SteeringBehavior::Pursuit {
            target: Vector2::new(100.0, 100.0),
            speed: 150.0,
        }
        .calculate(&player);

        assert_eq!(output.velocity, Vector2::zeros());
    }

    #[test]
    fn test_arrive_brakes_inside_deadzone() {
        let mut player = player_at(Vector2::new(100.0, 100.0));
        player.velocity = Vector2::new(10.0, -20.0);

        let output = SteeringBehavior::Arrive {
            target: Vector2::new(102.0, 101.0),
            speed: 150.0,
            deadzone: 4.0,
            braking: 0.8,
        }
        .calculate(&player);

        assert_eq!(output.velocity, Vector2::new(8.0, -16.0));
        assert!(output.facing.is_none());
    }

    #[test]
    fn test_arrive_moves_outside_deadzone() {
        let player = player_at(Vector2::new(100.0, 100.0));

        let output = SteeringBehavior::Arrive {
            target: Vector2::new(100.0, 0.0),
            speed: 82.5,
            deadzone: 2.0,
            braking: 0.7,
        }
        .calculate(&player);

        assert!((output.velocity - Vector2::new(0.0, -82.5)).length() < 1e-3);
        assert_eq!(output.facing, Some(Vector2::new(0.0, -1.0)));
    }
}
