use crate::r#match::ball::events::{BoundaryCrossing, GoalLineSide, SidelineEdge};
use crate::r#match::constants::*;
use crate::r#match::{
    MatchContext, MatchEvent, MatchField, MatchFieldSize, PlayerHandle, RestartKind, RestartState,
    TeamSide, VectorExtensions,
};
use log::debug;
use nalgebra::Vector2;

/// How far in from the goal line a goal kick is taken
const GOAL_KICK_DISTANCE: f32 = 80.0;

/// Extra vertical inset of the goal kick spot
const GOAL_KICK_INSET: f32 = 40.0;

/// Distance behind the spot where the taker stands, in player radii
const TAKER_OFFSET: f32 = 1.6;

pub struct RestartHandler;

impl RestartHandler {
    /// Turns an out-of-play ball into a throw-in, corner or goal kick.
    /// Always claims the event; while a restart is active it is ignored.
    pub fn handle_ball_out_of_play(
        field: &mut MatchField,
        context: &mut MatchContext,
        crossing: BoundaryCrossing,
    ) -> bool {
        if context.restart.is_some() {
            return true;
        }

        let size = field.size;
        let ball_position = field.ball.position;
        let last_touch = field.ball.last_touch_team;

        match crossing {
            BoundaryCrossing::Sideline(edge) => {
                let fallback = if ball_position.x < size.width / 2.0 {
                    TeamSide::Away
                } else {
                    TeamSide::Home
                };
                let side = last_touch.map(TeamSide::opposite).unwrap_or(fallback);

                let y = match edge {
                    SidelineEdge::Top => size.top() + BALL_RADIUS,
                    SidelineEdge::Bottom => size.bottom() - BALL_RADIUS,
                };
                let x = ball_position
                    .x
                    .clamp(size.left() + BALL_RADIUS, size.right() - BALL_RADIUS);

                Self::schedule(field, context, RestartKind::ThrowIn, side, Vector2::new(x, y));
            }
            BoundaryCrossing::GoalLine(line) => {
                let defending = line.defending_side();
                let attacking = defending.opposite();

                let y = ball_position
                    .y
                    .clamp(size.top() + BALL_RADIUS, size.bottom() - BALL_RADIUS);

                if last_touch == Some(attacking) {
                    let x = match line {
                        GoalLineSide::Left => size.left() + GOAL_KICK_DISTANCE,
                        GoalLineSide::Right => size.right() - GOAL_KICK_DISTANCE,
                    };
                    let y = y.clamp(
                        size.top() + BALL_RADIUS + GOAL_KICK_INSET,
                        size.bottom() - BALL_RADIUS - GOAL_KICK_INSET,
                    );

                    Self::schedule(field, context, RestartKind::GoalKick, defending, Vector2::new(x, y));
                } else {
                    let x = match line {
                        GoalLineSide::Left => size.left() + BALL_RADIUS,
                        GoalLineSide::Right => size.right() - BALL_RADIUS,
                    };
                    let y = if y < size.height / 2.0 {
                        size.top() + BALL_RADIUS
                    } else {
                        size.bottom() - BALL_RADIUS
                    };

                    Self::schedule(field, context, RestartKind::Corner, attacking, Vector2::new(x, y));
                }
            }
        }

        true
    }

    /// Awards a restart with the default direction and power for its kind.
    pub fn schedule(
        field: &mut MatchField,
        context: &mut MatchContext,
        kind: RestartKind,
        side: TeamSide,
        spot: Vector2<f32>,
    ) {
        let direction = Self::default_direction(side, spot, kind.curve(), &field.size);
        let power = KICK_STRENGTH * kind.power_factor();

        Self::schedule_with(field, context, kind, side, spot, direction, power);
    }

    pub fn schedule_with(
        field: &mut MatchField,
        context: &mut MatchContext,
        kind: RestartKind,
        side: TeamSide,
        spot: Vector2<f32>,
        direction: Vector2<f32>,
        power: f32,
    ) {
        let team = field.team_mut(side);
        team.players
            .iter_mut()
            .for_each(|player| player.pending_restart = false);

        let taker = team.nearest_player(spot);
        if let Some(player) = taker.and_then(|index| team.players.get_mut(index)) {
            player.pending_restart = true;
            player.velocity = Vector2::zeros();
            player.last_direction = direction.normalize_or_zero();
        }

        let taker = taker.map(|index| PlayerHandle::new(side, index));

        field.ball.velocity = Vector2::zeros();
        field.ball.position = spot;

        debug!("Restart awarded: {:?} to {:?} at ({:.1}, {:.1})", kind, side, spot.x, spot.y);

        context.restart = Some(RestartState::new(kind, side, spot, direction, power, taker));
        context.notify(MatchEvent::RestartAwarded { kind, side });
    }

    /// Kick direction towards the opponent goal, curving back towards the
    /// horizontal centre line.
    pub fn default_direction(
        side: TeamSide,
        spot: Vector2<f32>,
        curve: f32,
        size: &MatchFieldSize,
    ) -> Vector2<f32> {
        Vector2::new(side.attack_direction(), (size.height / 2.0 - spot.y) * curve)
    }

    /// Runs one frame of the active restart: pins the ball, places the taker
    /// and launches the ball when the countdown ends.
    pub fn advance(field: &mut MatchField, context: &mut MatchContext, dt: f32) {
        let Some(restart) = context.restart.as_mut() else {
            return;
        };

        field.ball.position = restart.spot;
        field.ball.velocity = Vector2::zeros();

        if restart.direction.length() < 0.01 {
            restart.direction = Vector2::new(restart.side.attack_direction(), 0.0);
        }
        let kick_direction = restart.direction.normalize_or_zero();

        let taker_is_valid = restart
            .taker
            .is_some_and(|taker| taker.side == restart.side && field.player(taker).is_some());

        if !taker_is_valid {
            restart.taker = field
                .team(restart.side)
                .nearest_player(restart.spot)
                .map(|index| PlayerHandle::new(restart.side, index));

            if let Some(player) = restart.taker.and_then(|taker| field.player_mut(taker)) {
                player.pending_restart = true;
            }
        }

        if let Some(taker) = restart.taker {
            if let Some(player) = field.player_mut(taker) {
                player.position = restart.spot - kick_direction * (PLAYER_RADIUS * TAKER_OFFSET);
                player.velocity = Vector2::zeros();
                player.last_direction = kick_direction;
            }

            if restart.side == TeamSide::Home {
                field.set_controlled_player(taker);
            }
        }

        if restart.settle > 0.0 {
            restart.settle = (restart.settle - dt).max(0.0);
            return;
        }

        restart.timer -= dt;
        if restart.timer > 0.0 {
            return;
        }

        match restart.taker {
            Some(taker) => {
                if let Some(player) = field.player_mut(taker) {
                    player.pending_restart = false;
                }
                field.ball.record_touch(taker);
            }
            None => {
                field.ball.last_touch_team = Some(restart.side);
                field.ball.last_touch_player = None;
            }
        }

        let launch_direction = if kick_direction.length() > 0.0 {
            kick_direction
        } else {
            Self::default_direction(restart.side, restart.spot, restart.kind.curve(), &field.size)
                .normalize_or_zero()
        };

        field.ball.velocity = launch_direction * restart.power;

        debug!("Restart taken: {:?} by {:?}", restart.kind, restart.taker);

        context.restart = None;
    }
}
