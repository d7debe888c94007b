use crate::r#match::ball::Ball;
use crate::r#match::constants::{PLAYER_RADIUS, POSSESSION_RADIUS_FACTOR};
use crate::r#match::{
    Formation, GameTickContext, MatchFieldSize, MatchPlayer, PlayerInput, PlayerTickContext,
    RandomSource, VectorExtensions,
};
use itertools::Itertools;
use nalgebra::Vector2;
use serde::Serialize;

/// Number of players per team sent after a loose ball.
const CHASER_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TeamSide {
    /// Defends the left goal, attacks to the right
    Home,
    /// Defends the right goal, attacks to the left
    Away,
}

impl TeamSide {
    pub fn opposite(self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    /// +1 when attacking to the right, -1 when attacking to the left
    pub fn attack_direction(self) -> f32 {
        match self {
            TeamSide::Home => 1.0,
            TeamSide::Away => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl TeamColor {
    pub const HOME: TeamColor = TeamColor::new(0x1e, 0x88, 0xe5);
    pub const AWAY: TeamColor = TeamColor::new(0xe5, 0x39, 0x35);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        TeamColor { red, green, blue }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

pub struct MatchTeam {
    pub side: TeamSide,
    pub color: TeamColor,
    pub players: Vec<MatchPlayer>,

    /// Indices of the forward slots
    pub attacking_players: Vec<usize>,

    /// Indices of the players sent after the ball this frame
    pub current_chasers: Vec<usize>,
}

impl MatchTeam {
    pub fn new(side: TeamSide, color: TeamColor) -> Self {
        MatchTeam {
            side,
            color,
            players: Vec::new(),
            attacking_players: Vec::new(),
            current_chasers: Vec::new(),
        }
    }

    /// Builds the roster from the formation slots. With `with_user` the last
    /// slot starts as the user-controlled player.
    pub fn init(&mut self, formation: &Formation, size: &MatchFieldSize, with_user: bool) {
        self.players = formation
            .slots()
            .iter()
            .enumerate()
            .map(|(index, slot)| MatchPlayer::new(self.side, index, *slot, self.color, size))
            .collect();

        if with_user {
            if let Some(player) = self.players.last_mut() {
                player.is_user = true;
            }
        }

        self.attacking_players = formation.attacking_slots().collect();
        self.current_chasers.clear();
    }

    /// Any player within the possession radius. Both teams may hold this at once.
    pub fn has_possession(&self, ball: &Ball) -> bool {
        let radius = PLAYER_RADIUS * POSSESSION_RADIUS_FACTOR;

        self.players
            .iter()
            .any(|player| player.position.distance_to(&ball.position) < radius)
    }

    pub fn assign_chasers(&mut self, ball: &Ball) {
        self.current_chasers = self
            .players
            .iter()
            .enumerate()
            .map(|(index, player)| (index, player.position.distance_to(&ball.position)))
            .sorted_by(|(_, a), (_, b)| a.total_cmp(b))
            .take(CHASER_COUNT)
            .map(|(index, _)| index)
            .collect();
    }

    pub fn nearest_player(&self, spot: Vector2<f32>) -> Option<usize> {
        self.players.iter().position_min_by(|a, b| {
            a.position
                .distance_to(&spot)
                .total_cmp(&b.position.distance_to(&spot))
        })
    }

    pub fn is_attacker(&self, index: usize) -> bool {
        self.attacking_players.contains(&index)
    }

    pub fn is_chaser(&self, index: usize) -> bool {
        self.current_chasers.contains(&index)
    }

    /// Advances every player in roster order. Only the user-controlled player
    /// receives `input`, and only while no restart is awarded to the other team.
    pub fn update(
        &mut self,
        dt: f32,
        ball: &mut Ball,
        tick_context: &GameTickContext,
        input: &PlayerInput,
        random: &mut dyn RandomSource,
    ) {
        match &tick_context.restart {
            Some(_) => self.current_chasers.clear(),
            None => self.assign_chasers(ball),
        }

        let accepts_input = tick_context
            .restart
            .as_ref()
            .is_none_or(|restart| restart.side == self.side);

        let idle = PlayerInput::idle();

        let mut positions = self.players.iter().map(|player| player.position).collect_vec();

        for index in 0..self.players.len() {
            let player_context = PlayerTickContext {
                tick: tick_context,
                team_positions: &positions,
                team_in_possession: self.has_possession(ball),
                is_attacker: self.is_attacker(index),
                is_chaser: self.is_chaser(index),
            };

            let player = &mut self.players[index];
            let player_input = if player.is_user && accepts_input {
                input
            } else {
                &idle
            };

            player.update(dt, ball, player_input, &player_context, random);
            positions[index] = player.position;
        }
    }

    pub fn reset_positions(&mut self, size: &MatchFieldSize) {
        self.players.iter_mut().for_each(|player| player.reset(size));
    }
}
