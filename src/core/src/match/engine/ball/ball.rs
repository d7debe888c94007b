use crate::r#match::ball::events::{BallEvent, BoundaryCrossing, GoalLineSide, SidelineEdge};
use crate::r#match::constants::*;
use crate::r#match::events::EventCollection;
use crate::r#match::{MatchFieldSize, PlayerHandle, TeamSide, VectorExtensions};
use nalgebra::Vector2;

pub struct Ball {
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,

    pub last_touch_team: Option<TeamSide>,
    pub last_touch_player: Option<PlayerHandle>,

    field_size: MatchFieldSize,
}

impl Ball {
    pub fn with_field(field_size: MatchFieldSize) -> Self {
        Ball {
            position: field_size.center(),
            velocity: Vector2::zeros(),
            last_touch_team: None,
            last_touch_player: None,
            field_size,
        }
    }

    /// Recentres the ball for a kickoff rolling towards `direction` (+1 right, -1 left).
    pub fn reset(&mut self, direction: f32) {
        self.position = self.field_size.center();
        self.velocity = Vector2::new(direction * KICKOFF_SPEED, 0.0);
        self.clear_touch();
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn record_touch(&mut self, player: PlayerHandle) {
        self.last_touch_team = Some(player.side);
        self.last_touch_player = Some(player);
    }

    pub fn clear_touch(&mut self) {
        self.last_touch_team = None;
        self.last_touch_player = None;
    }

    pub fn update(&mut self, dt: f32, events: &mut EventCollection) {
        self.move_to(dt);

        if self.check_sidelines(events) {
            return;
        }

        self.check_goal_lines(events);
    }

    fn move_to(&mut self, dt: f32) {
        self.position += self.velocity * dt;

        self.velocity *= BALL_FRICTION.powf(dt * 60.0);

        if self.velocity.length() > BALL_MAX_SPEED {
            self.velocity = self.velocity.normalize_or_zero() * BALL_MAX_SPEED;
        }
    }

    /// Returns true when the ball left the pitch over a sideline.
    fn check_sidelines(&mut self, events: &mut EventCollection) -> bool {
        let size = self.field_size;

        if self.position.y <= size.top() {
            events.add_ball_event(BallEvent::OutOfPlay(BoundaryCrossing::Sideline(
                SidelineEdge::Top,
            )));
            return true;
        }

        if self.position.y >= size.bottom() {
            events.add_ball_event(BallEvent::OutOfPlay(BoundaryCrossing::Sideline(
                SidelineEdge::Bottom,
            )));
            return true;
        }

        let upper = size.top() + BALL_RADIUS;
        let lower = size.bottom() - BALL_RADIUS;

        if self.position.y < upper {
            self.position.y = upper;
            if self.velocity.y < 0.0 {
                self.velocity.y *= -SIDELINE_RESTITUTION;
            }
        } else if self.position.y > lower {
            self.position.y = lower;
            if self.velocity.y > 0.0 {
                self.velocity.y *= -SIDELINE_RESTITUTION;
            }
        }

        false
    }

    fn check_goal_lines(&mut self, events: &mut EventCollection) {
        let size = self.field_size;
        let in_goal_mouth = size.is_in_goal_mouth(self.position.y);

        if self.position.x <= size.left() {
            let event = if in_goal_mouth {
                BallEvent::Goal(TeamSide::Away)
            } else {
                BallEvent::OutOfPlay(BoundaryCrossing::GoalLine(GoalLineSide::Left))
            };

            events.add_ball_event(event);
            return;
        }

        if self.position.x >= size.right() {
            let event = if in_goal_mouth {
                BallEvent::Goal(TeamSide::Home)
            } else {
                BallEvent::OutOfPlay(BoundaryCrossing::GoalLine(GoalLineSide::Right))
            };

            events.add_ball_event(event);
            return;
        }

        let left_wall = size.left() + BALL_RADIUS;
        let right_wall = size.right() - BALL_RADIUS;

        if self.position.x < left_wall {
            self.position.x = left_wall;
            if self.velocity.x < 0.0 {
                self.velocity.x *= -END_WALL_RESTITUTION;
            }
        } else if self.position.x > right_wall {
            self.position.x = right_wall;
            if self.velocity.x > 0.0 {
                self.velocity.x *= -END_WALL_RESTITUTION;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball() -> Ball {
        Ball::with_field(MatchFieldSize::default())
    }

    #[test]
    fn test_reset_recentres_with_kickoff_velocity() {
        let mut ball = ball();
        ball.position = Vector2::new(100.0, 100.0);
        ball.record_touch(PlayerHandle::new(TeamSide::Home, 4));

        ball.reset(-1.0);

        assert_eq!(ball.position, Vector2::new(480.0, 300.0));
        assert_eq!(ball.velocity, Vector2::new(-90.0, 0.0));
        assert_eq!(ball.last_touch_team, None);
        assert_eq!(ball.last_touch_player, None);
    }

    #[test]
    fn test_speed_never_exceeds_max() {
        let mut events = EventCollection::new();

        for dt in [0.0, 0.001, 0.016, 0.033] {
            let mut ball = ball();
            ball.velocity = Vector2::new(2000.0, 1500.0);
            ball.update(dt, &mut events);
            assert!(ball.speed() <= BALL_MAX_SPEED + 1e-3);
        }
    }

    #[test]
    fn test_friction_slows_ball() {
        let mut ball = ball();
        let mut events = EventCollection::new();
        ball.velocity = Vector2::new(100.0, 0.0);

        ball.update(1.0 / 60.0, &mut events);

        assert!((ball.velocity.x - 98.3).abs() < 1e-3);
        assert!(events.is_empty());
    }

    #[test]
    fn test_record_touch() {
        let mut ball = ball();
        let handle = PlayerHandle::new(TeamSide::Away, 2);

        ball.record_touch(handle);

        assert_eq!(ball.last_touch_team, Some(TeamSide::Away));
        assert_eq!(ball.last_touch_player, Some(handle));
    }

    #[test]
    fn test_crossing_top_sideline_is_out_of_play() {
        let mut ball = ball();
        let mut events = EventCollection::new();
        ball.position = Vector2::new(300.0, 41.0);
        ball.velocity = Vector2::new(0.0, -120.0);

        ball.update(0.016, &mut events);

        assert_eq!(
            events.ball_events(),
            &[BallEvent::OutOfPlay(BoundaryCrossing::Sideline(SidelineEdge::Top))]
        );
    }

    #[test]
    fn test_bounces_inside_sideline_band() {
        let mut ball = ball();
        let mut events = EventCollection::new();
        ball.position = Vector2::new(300.0, 555.0);
        ball.velocity = Vector2::new(0.0, 60.0);

        ball.update(0.0, &mut events);

        assert!(events.is_empty());
        assert_eq!(ball.position.y, 552.0);
        assert!((ball.velocity.y + 42.0).abs() < 1e-3);
    }

    #[test]
    fn test_goal_in_left_mouth_scores_for_away() {
        let mut ball = ball();
        let mut events = EventCollection::new();
        ball.position = Vector2::new(42.0, 300.0);
        ball.velocity = Vector2::new(-300.0, 0.0);

        ball.update(0.016, &mut events);

        assert_eq!(events.ball_events(), &[BallEvent::Goal(TeamSide::Away)]);
    }

    #[test]
    fn test_goal_in_right_mouth_scores_for_home() {
        let mut ball = ball();
        let mut events = EventCollection::new();
        ball.position = Vector2::new(918.0, 250.0);
        ball.velocity = Vector2::new(300.0, 0.0);

        ball.update(0.016, &mut events);

        assert_eq!(events.ball_events(), &[BallEvent::Goal(TeamSide::Home)]);
    }

    #[test]
    fn test_goal_line_outside_mouth_is_out_of_play() {
        let mut ball = ball();
        let mut events = EventCollection::new();
        ball.position = Vector2::new(918.0, 100.0);
        ball.velocity = Vector2::new(300.0, 0.0);

        ball.update(0.016, &mut events);

        assert_eq!(
            events.ball_events(),
            &[BallEvent::OutOfPlay(BoundaryCrossing::GoalLine(GoalLineSide::Right))]
        );
    }

    #[test]
    fn test_ball_leaving_band_keeps_speed() {
        let mut ball = ball();
        let mut events = EventCollection::new();
        ball.position = Vector2::new(300.0, 45.0);
        ball.velocity = Vector2::new(0.0, 50.0);

        ball.update(0.0, &mut events);

        assert_eq!(ball.position.y, 48.0);
        assert_eq!(ball.velocity.y, 50.0);
    }

    #[test]
    fn test_bounces_off_end_wall_band() {
        let mut ball = ball();
        let mut events = EventCollection::new();
        ball.position = Vector2::new(45.0, 100.0);
        ball.velocity = Vector2::new(-40.0, 0.0);

        ball.update(0.0, &mut events);

        assert!(events.is_empty());
        assert_eq!(ball.position.x, 48.0);
        assert!((ball.velocity.x - 30.0).abs() < 1e-3);
    }
}
