use crate::r#match::{
    MatchContext, MatchField, MatchState, PlayerHandle, PossessionShare, RestartKind, TeamColor,
    TeamSide,
};
use nalgebra::Vector2;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GoalDetail {
    pub side: TeamSide,
    pub second: f32,
    /// Last player to touch the ball before it went in
    pub scorer: Option<PlayerHandle>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
    pub details: Vec<GoalDetail>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl Score {
    pub fn new() -> Self {
        Score {
            home: 0,
            away: 0,
            details: Vec::new(),
        }
    }

    pub fn increment(&mut self, side: TeamSide, second: f32, scorer: Option<PlayerHandle>) {
        match side {
            TeamSide::Home => self.home = self.home.saturating_add(1),
            TeamSide::Away => self.away = self.away.saturating_add(1),
        }

        self.details.push(GoalDetail {
            side,
            second,
            scorer,
        });
    }

    pub fn get(&self, side: TeamSide) -> u8 {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }

    /// Home goals minus away goals
    pub fn difference(&self) -> i32 {
        self.home as i32 - self.away as i32
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.difference() {
            d if d > 0 => MatchOutcome::HomeWin,
            d if d < 0 => MatchOutcome::AwayWin,
            _ => MatchOutcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub handle: PlayerHandle,
    pub position: Vector2<f32>,
    pub facing: Vector2<f32>,
    pub color: TeamColor,
    pub is_user: bool,
    pub is_chaser: bool,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub field_width: f32,
    pub field_height: f32,
    pub ball: Vector2<f32>,
    pub players: Vec<PlayerSnapshot>,
    pub restart: Option<RestartKind>,
    pub state: MatchState,
    pub paused: bool,
    pub full_time: bool,
    pub clock_remaining: f32,
    pub clock_label: String,
    pub home_score: u8,
    pub away_score: u8,
    pub possession: PossessionShare,
    /// Stamina of the controlled player, 0..=1
    pub stamina: f32,
}

impl MatchSnapshot {
    pub fn capture(field: &MatchField, context: &MatchContext) -> Self {
        let chasers = field.chaser_handles();

        let players = field
            .players()
            .map(|player| PlayerSnapshot {
                handle: player.handle(),
                position: player.position,
                facing: player.last_direction,
                color: player.color,
                is_user: player.is_user,
                is_chaser: chasers.contains(&player.handle()),
            })
            .collect();

        MatchSnapshot {
            field_width: field.size.width,
            field_height: field.size.height,
            ball: field.ball.position,
            players,
            restart: context.restart.as_ref().map(|restart| restart.kind),
            state: context.state,
            paused: context.state == MatchState::Paused,
            full_time: context.state == MatchState::FullTime,
            clock_remaining: context.time.remaining(),
            clock_label: context.time.clock_label(),
            home_score: context.score.home,
            away_score: context.score.away,
            possession: context.possession.percentages(),
            stamina: field
                .controlled_player()
                .map(|player| player.stamina_fraction())
                .unwrap_or(1.0),
        }
    }

    pub fn user(&self) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|player| player.is_user)
    }
}

/// Summary of a finished (or abandoned) match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub home_goals: u8,
    pub away_goals: u8,
    pub outcome: MatchOutcome,
    pub goals: Vec<GoalDetail>,
    pub possession: PossessionShare,
    pub match_seconds: f32,
    pub completed: bool,
}

impl MatchResult {
    pub fn from_context(context: &MatchContext) -> Self {
        MatchResult {
            home_goals: context.score.home,
            away_goals: context.score.away,
            outcome: context.score.outcome(),
            goals: context.score.details.clone(),
            possession: context.possession.percentages(),
            match_seconds: context.time.elapsed,
            completed: context.state == MatchState::FullTime,
        }
    }
}
