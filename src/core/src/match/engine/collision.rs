use crate::r#match::ball::Ball;
use crate::r#match::constants::*;
use crate::r#match::{MatchField, MatchPlayer, RandomSource, VectorExtensions};
use nalgebra::Vector2;

/// Extra separation added when pushing the ball out of a player
const SEPARATION_BUFFER: f32 = 0.6;

/// Below this player speed a carried ball is left at rest
const CARRY_STILL_SPEED: f32 = 15.0;
const CARRY_SPEED_FACTOR: f32 = 0.9;

const DEFLECT_MIN_SPEED: f32 = 160.0;
const DEFLECT_SPEED_FACTOR: f32 = 1.55;
const DEFLECT_GAP: f32 = 0.5;

pub struct CollisionResolver;

impl CollisionResolver {
    /// Resolves ball contact for every player, home team first.
    pub fn resolve(field: &mut MatchField, random: &mut dyn RandomSource) {
        let controlled = field.controlled;
        let MatchField {
            home, away, ball, ..
        } = field;

        for player in home.players.iter_mut().chain(away.players.iter_mut()) {
            let is_controlled = player.handle() == controlled;
            Self::resolve_player(player, ball, is_controlled, random);
        }
    }

    /// Returns true when the player touched the ball.
    pub fn resolve_player(
        player: &mut MatchPlayer,
        ball: &mut Ball,
        is_controlled: bool,
        random: &mut dyn RandomSource,
    ) -> bool {
        let delta = ball.position - player.position;
        let distance = delta.length();
        let min_distance = PLAYER_RADIUS + BALL_RADIUS;

        if distance >= min_distance {
            return false;
        }

        let overlap = min_distance - distance;
        let normal = if distance == 0.0 {
            Vector2::new(random.next_f32() - 0.5, random.next_f32() - 0.5).normalize_or_zero()
        } else {
            delta.normalize_or_zero()
        };

        ball.position += normal * (overlap + SEPARATION_BUFFER);

        if is_controlled && player.control_cooldown <= 0.0 {
            Self::carry(player, ball, normal);
        } else {
            Self::deflect(player, ball, normal, is_controlled);
        }

        if ball.velocity.length() > 0.01 {
            player.last_direction = ball.velocity.normalize_or_zero();
        }

        ball.record_touch(player.handle());

        true
    }

    /// Dribble: the ball sticks in front of the player along the facing.
    fn carry(player: &MatchPlayer, ball: &mut Ball, normal: Vector2<f32>) {
        let direction = if player.last_direction.length() >= 0.1 {
            player.last_direction
        } else {
            normal
        }
        .normalize_or_zero();

        ball.position = player.position + direction * DRIBBLE_LOCK_DISTANCE;

        let player_speed = player.velocity.length();
        let ball_speed = if player_speed < CARRY_STILL_SPEED {
            0.0
        } else {
            DRIBBLE_MIN_SPEED.max(player_speed * CARRY_SPEED_FACTOR)
        };

        ball.velocity = direction * ball_speed;
    }

    fn deflect(player: &mut MatchPlayer, ball: &mut Ball, normal: Vector2<f32>, is_controlled: bool) {
        let direction = if player.last_direction.length() > 0.1 {
            player.last_direction.normalize_or_zero()
        } else {
            normal
        };

        ball.position = player.position + direction * (PLAYER_RADIUS + BALL_RADIUS + DEFLECT_GAP);

        let approach_speed = player.velocity.length();
        let speed = BALL_MAX_SPEED.min(DEFLECT_MIN_SPEED.max(approach_speed * DEFLECT_SPEED_FACTOR));
        ball.velocity = direction * speed;

        if is_controlled {
            player.control_cooldown = player.control_cooldown.max(DRIBBLE_RELEASE_TIME * 1.5);
        }
    }
}
