use crate::r#match::ball::Ball;
use crate::r#match::behaviours::SteeringBehavior;
use crate::r#match::constants::*;
use crate::r#match::{
    MatchFieldSize, MatchPlayer, PlayerTickContext, RandomSource, RestartView, VectorExtensions,
};
use nalgebra::Vector2;

// Formation shape, in normalized pitch units
const BALL_INFLUENCE_X: f32 = 0.35;
const BALL_INFLUENCE_Y: f32 = 0.15;
const ATTACK_PUSH: f32 = 0.06;
const ATTACK_INFLUENCE_Y: f32 = 0.12;
const CHASING_GAME_PUSH: f32 = 0.08;
const CHASING_GAME_INFLUENCE_Y: f32 = 0.18;
const CHASING_GAME_AFTER: f32 = 0.45;
const PROTECT_LEAD_RETREAT: f32 = 0.05;
const PROTECT_LEAD_AFTER: f32 = 0.75;

const FORMATION_DEADZONE: f32 = 4.0;
const FORMATION_BRAKING: f32 = 0.8;

const RESTART_RETREAT_SPEED: f32 = 0.55;
const RESTART_RETREAT_DEADZONE: f32 = 2.0;
const RESTART_RETREAT_BRAKING: f32 = 0.7;

const CLOSE_CHASE_DISTANCE: f32 = PLAYER_RADIUS * 3.0;
const PRESSING_DISTANCE: f32 = 260.0;
const TACKLE_REACH: f32 = PLAYER_RADIUS + BALL_RADIUS + 2.0;
const CLEARANCE_POWER: f32 = 0.82;
const CLEARANCE_AIM_Y: f32 = 0.2;

impl MatchPlayer {
    pub(crate) fn handle_ai(
        &mut self,
        ball: &mut Ball,
        context: &PlayerTickContext,
        random: &mut dyn RandomSource,
    ) {
        if self.pending_restart {
            self.velocity = Vector2::zeros();
            return;
        }

        if let Some(restart) = &context.tick.restart {
            self.hold_for_restart(restart, &context.tick.field_size);
            return;
        }

        let target = self.formation_target(ball.position, context);
        let jitter = 0.8 + random.next_f32() * 0.2;

        let steering = SteeringBehavior::Arrive {
            target,
            speed: self.max_speed() * jitter,
            deadzone: FORMATION_DEADZONE,
            braking: FORMATION_BRAKING,
        }
        .calculate(self);

        self.velocity = steering.velocity;
        if let Some(facing) = steering.facing {
            self.last_direction = facing;
        }

        self.chase_ball(ball, context);
    }

    /// The awarding team stands still; everyone else jogs back to shape.
    fn hold_for_restart(&mut self, restart: &RestartView, size: &MatchFieldSize) {
        if restart.side == self.side {
            self.velocity = Vector2::zeros();
            return;
        }

        let steering = SteeringBehavior::Arrive {
            target: self.formation_spot(size),
            speed: self.max_speed() * RESTART_RETREAT_SPEED,
            deadzone: RESTART_RETREAT_DEADZONE,
            braking: RESTART_RETREAT_BRAKING,
        }
        .calculate(self);

        self.velocity = steering.velocity;
    }

    /// Formation slot shifted with the ball and the state of the game, in pitch pixels.
    /// Works in the team's own normalized frame, where +x is always towards the
    /// opponent goal, so every push reads the same for both sides.
    fn formation_target(&self, ball_position: Vector2<f32>, context: &PlayerTickContext) -> Vector2<f32> {
        let tick = context.tick;
        let size = &tick.field_size;

        // Ball offset from the centre, seen from this team's frame
        let ball_x = (ball_position.x / size.width - 0.5) * self.side.attack_direction();
        let ball_y = ball_position.y / size.height - 0.5;

        let mut target = Vector2::new(
            self.base_position.x + ball_x * BALL_INFLUENCE_X,
            self.base_position.y + ball_y * BALL_INFLUENCE_Y,
        );

        if context.is_attacker && context.team_in_possession {
            target.x += ATTACK_PUSH;
            target.y += ball_y * ATTACK_INFLUENCE_Y;
        }

        if tick.is_losing(self.side) && tick.match_progress > CHASING_GAME_AFTER {
            target.x += CHASING_GAME_PUSH;
            target.y += ball_y * CHASING_GAME_INFLUENCE_Y;
        } else if tick.is_winning(self.side) && tick.match_progress > PROTECT_LEAD_AFTER {
            target.x -= PROTECT_LEAD_RETREAT;
        }

        target.x = target.x.clamp(0.04, 0.96);
        target.y = target.y.clamp(0.08, 0.92);

        size.from_normalized(target, self.side)
    }

    fn chase_ball(&mut self, ball: &mut Ball, context: &PlayerTickContext) {
        let distance = self.position.distance_to(&ball.position);

        let should_chase = distance < CLOSE_CHASE_DISTANCE
            || (context.is_chaser && distance < PRESSING_DISTANCE);

        if !should_chase {
            return;
        }

        let steering = SteeringBehavior::Pursuit {
            target: ball.position,
            speed: self.max_speed(),
        }
        .calculate(self);

        self.velocity = steering.velocity;
        self.last_direction = self.velocity.normalize_or_zero();

        if distance < TACKLE_REACH {
            let aim_y = if ball.position.y < context.tick.field_size.height / 2.0 {
                -CLEARANCE_AIM_Y
            } else {
                CLEARANCE_AIM_Y
            };
            let aim = Vector2::new(self.side.attack_direction(), aim_y);

            if self.try_kick(ball, CLEARANCE_POWER, Some(aim)) {
                self.control_cooldown = self.control_cooldown.max(PASS_RELEASE_TIME * 0.6);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::r#match::ball::Ball;
    use crate::r#match::constants::*;
    use crate::r#match::{
        GameTickContext, MatchFieldSize, MatchPlayer, PlayerHandle, PlayerTickContext,
        RestartView, SequenceRandom, TeamColor, TeamSide, VectorExtensions,
    };
    use nalgebra::Vector2;

    fn player(side: TeamSide, slot: Vector2<f32>) -> MatchPlayer {
        MatchPlayer::new(side, 9, slot, TeamColor::AWAY, &MatchFieldSize::default())
    }

    fn tick(restart: Option<RestartView>, progress: f32, score_difference: i32) -> GameTickContext {
        GameTickContext {
            field_size: MatchFieldSize::default(),
            restart,
            match_progress: progress,
            score_difference,
        }
    }

    fn context<'a>(tick: &'a GameTickContext, is_chaser: bool) -> PlayerTickContext<'a> {
        PlayerTickContext {
            tick,
            team_positions: &[],
            team_in_possession: false,
            is_attacker: false,
            is_chaser,
        }
    }

    fn ball_at(position: Vector2<f32>) -> Ball {
        let mut ball = Ball::with_field(MatchFieldSize::default());
        ball.position = position;
        ball
    }

    #[test]
    fn test_pending_restart_stands_still() {
        let mut player = player(TeamSide::Away, Vector2::new(0.5, 0.5));
        player.pending_restart = true;
        player.velocity = Vector2::new(30.0, 30.0);
        let mut ball = ball_at(player.position + Vector2::new(5.0, 0.0));
        let mut random = SequenceRandom::constant(0.5);
        let tick = tick(None, 0.0, 0);

        player.handle_ai(&mut ball, &context(&tick, true), &mut random);

        assert_eq!(player.velocity, Vector2::zeros());
        assert_eq!(ball.velocity, Vector2::zeros());
    }

    #[test]
    fn test_awarding_team_waits_during_restart() {
        let mut player = player(TeamSide::Away, Vector2::new(0.5, 0.5));
        player.position = Vector2::new(100.0, 100.0);
        player.velocity = Vector2::new(30.0, 0.0);
        let mut ball = ball_at(Vector2::new(800.0, 40.0));
        let mut random = SequenceRandom::constant(0.5);
        let restart = RestartView {
            side: TeamSide::Away,
            taker: Some(PlayerHandle::new(TeamSide::Away, 2)),
        };
        let tick = tick(Some(restart), 0.0, 0);

        player.handle_ai(&mut ball, &context(&tick, false), &mut random);

        assert_eq!(player.velocity, Vector2::zeros());
    }

    #[test]
    fn test_defending_team_retreats_during_restart() {
        let mut player = player(TeamSide::Home, Vector2::new(0.5, 0.5));
        player.position = Vector2::new(480.0, 500.0);
        let mut ball = ball_at(Vector2::new(480.0, 48.0));
        let mut random = SequenceRandom::constant(0.5);
        let restart = RestartView {
            side: TeamSide::Away,
            taker: None,
        };
        let tick = tick(Some(restart), 0.0, 0);

        player.handle_ai(&mut ball, &context(&tick, true), &mut random);

        let expected = Vector2::new(0.0, -PLAYER_SPEED * 0.55);
        assert!((player.velocity - expected).length() < 1e-3);
    }

    #[test]
    fn test_drifts_towards_formation_target() {
        let mut player = player(TeamSide::Home, Vector2::new(0.18, 0.4));
        player.position = Vector2::new(100.0, 240.0);
        let mut ball = ball_at(Vector2::new(480.0, 300.0));
        let mut random = SequenceRandom::constant(0.0);
        let tick = tick(None, 0.0, 0);

        player.handle_ai(&mut ball, &context(&tick, false), &mut random);

        // Ball in the centre: the target is the slot itself, (172.8, 240)
        assert!((player.velocity - Vector2::new(PLAYER_SPEED * 0.8, 0.0)).length() < 1e-3);
        assert_eq!(player.last_direction, Vector2::new(1.0, 0.0));
    }

    #[test]
    fn test_brakes_on_formation_target() {
        let mut player = player(TeamSide::Home, Vector2::new(0.18, 0.4));
        player.velocity = Vector2::new(10.0, 0.0);
        let mut ball = ball_at(Vector2::new(480.0, 300.0));
        let mut random = SequenceRandom::constant(0.5);
        let tick = tick(None, 0.0, 0);

        player.handle_ai(&mut ball, &context(&tick, false), &mut random);

        assert!((player.velocity.x - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_chaser_presses_ball() {
        let mut player = player(TeamSide::Away, Vector2::new(0.5, 0.5));
        let start = player.position;
        let mut ball = ball_at(start + Vector2::new(0.0, 200.0));
        let mut random = SequenceRandom::constant(0.5);
        let tick = tick(None, 0.0, 0);

        player.handle_ai(&mut ball, &context(&tick, true), &mut random);

        assert!((player.velocity - Vector2::new(0.0, PLAYER_SPEED)).length() < 1e-3);
        assert_eq!(player.last_direction, Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_non_chaser_ignores_distant_ball() {
        let mut player = player(TeamSide::Away, Vector2::new(0.5, 0.5));
        let start = player.position;
        let mut ball = ball_at(start + Vector2::new(0.0, 200.0));
        let mut random = SequenceRandom::constant(0.5);
        let tick = tick(None, 0.0, 0);

        player.handle_ai(&mut ball, &context(&tick, false), &mut random);

        assert!(player.velocity.y < PLAYER_SPEED);
    }

    #[test]
    fn test_kicks_towards_opponent_goal_when_close() {
        let mut player = player(TeamSide::Away, Vector2::new(0.5, 0.5));
        let mut ball = ball_at(player.position + Vector2::new(0.0, -10.0));
        let mut random = SequenceRandom::constant(0.5);
        let tick = tick(None, 0.0, 0);

        player.handle_ai(&mut ball, &context(&tick, false), &mut random);

        assert!(ball.velocity.x < 0.0);
        assert!(ball.velocity.y < 0.0);
        assert!((ball.speed() - KICK_STRENGTH * 0.82).abs() < 1e-2);
        assert_eq!(ball.last_touch_team, Some(TeamSide::Away));
        assert!(player.control_cooldown >= PASS_RELEASE_TIME * 0.6);
    }

    #[test]
    fn test_losing_team_pushes_late() {
        let early_tick = tick(None, 0.2, 1);
        let late_tick = tick(None, 0.6, 1);

        let player = player(TeamSide::Away, Vector2::new(0.34, 0.35));
        let ball = Vector2::new(480.0, 300.0);

        let early = player.formation_target(ball, &context(&early_tick, false));
        let late = player.formation_target(ball, &context(&late_tick, false));

        // Away attacks to the left
        assert!((early.x - late.x - CHASING_PUSH_PIXELS).abs() < 1e-2);
    }

    #[test]
    fn test_both_sides_are_pulled_towards_the_ball() {
        let tick = tick(None, 0.0, 0);
        let centre = Vector2::new(480.0, 300.0);
        let right = Vector2::new(880.0, 300.0);

        for side in [TeamSide::Home, TeamSide::Away] {
            let player = player(side, Vector2::new(0.5, 0.35));

            let at_centre = player.formation_target(centre, &context(&tick, false));
            let towards_right = player.formation_target(right, &context(&tick, false));

            assert!((at_centre.x - 480.0).abs() < 1e-2);
            assert!(towards_right.x > at_centre.x, "{:?} moved away from the ball", side);
        }
    }

    #[test]
    fn test_away_ball_influence_mirrors_home() {
        let tick = tick(None, 0.0, 0);
        let ball = Vector2::new(880.0, 300.0);

        let home = player(TeamSide::Home, Vector2::new(0.5, 0.35));
        let away = player(TeamSide::Away, Vector2::new(0.5, 0.35));

        let home_target = home.formation_target(ball, &context(&tick, false));
        let away_target = away.formation_target(ball, &context(&tick, false));

        // (880 / 960 - 0.5) * 0.35 * 960 = 140 px towards the ball for both
        assert!((home_target.x - 620.0).abs() < 1e-2);
        assert!((away_target.x - 620.0).abs() < 1e-2);
    }

    #[test]
    fn test_away_attackers_push_towards_left_goal() {
        let tick = tick(None, 0.0, 0);
        let ball = Vector2::new(480.0, 300.0);
        let player = player(TeamSide::Away, Vector2::new(0.5, 0.35));

        let mut attacking = context(&tick, false);
        attacking.is_attacker = true;
        attacking.team_in_possession = true;

        let target = player.formation_target(ball, &attacking);

        assert!((target.x - (480.0 - 0.06 * FIELD_WIDTH)).abs() < 1e-2);
    }

    #[test]
    fn test_winning_team_retreats_late() {
        let late_tick = tick(None, 0.8, 1);
        let ball = Vector2::new(480.0, 300.0);

        let home = player(TeamSide::Home, Vector2::new(0.5, 0.35));
        let away = player(TeamSide::Away, Vector2::new(0.5, 0.35));

        let home_target = home.formation_target(ball, &context(&late_tick, false));
        let away_tick = tick(None, 0.8, -1);
        let away_target = away.formation_target(ball, &context(&away_tick, false));

        // Each side drops back towards its own goal
        assert!((home_target.x - (480.0 - 0.05 * FIELD_WIDTH)).abs() < 1e-2);
        assert!((away_target.x - (480.0 + 0.05 * FIELD_WIDTH)).abs() < 1e-2);
    }

    const CHASING_PUSH_PIXELS: f32 = 0.08 * FIELD_WIDTH;
}
