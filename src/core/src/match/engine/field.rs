use crate::r#match::ball::Ball;
use crate::r#match::constants::*;
use crate::r#match::{Formation, MatchPlayer, MatchTeam, PlayerHandle, TeamColor, TeamSide};
use itertools::Itertools;
use nalgebra::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchFieldSize {
    pub width: f32,
    pub height: f32,
    pub margin_x: f32,
    pub margin_y: f32,
}

impl Default for MatchFieldSize {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

impl MatchFieldSize {
    pub fn new(width: f32, height: f32) -> Self {
        MatchFieldSize {
            width,
            height,
            margin_x: PITCH_MARGIN_X,
            margin_y: PITCH_MARGIN_Y,
        }
    }

    /// Left goal line
    pub fn left(&self) -> f32 {
        self.margin_x
    }

    /// Right goal line
    pub fn right(&self) -> f32 {
        self.width - self.margin_x
    }

    /// Top sideline
    pub fn top(&self) -> f32 {
        self.margin_y
    }

    /// Bottom sideline
    pub fn bottom(&self) -> f32 {
        self.height - self.margin_y
    }

    pub fn center(&self) -> Vector2<f32> {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn goal_top(&self) -> f32 {
        self.height / 2.0 - GOAL_WIDTH / 2.0
    }

    pub fn goal_bottom(&self) -> f32 {
        self.height / 2.0 + GOAL_WIDTH / 2.0
    }

    pub fn is_in_goal_mouth(&self, y: f32) -> bool {
        y >= self.goal_top() && y <= self.goal_bottom()
    }

    /// Converts a normalized formation coordinate into pitch pixels.
    /// The away side is mirrored horizontally so both teams read their slots
    /// as if attacking to the right.
    pub fn from_normalized(&self, normalized: Vector2<f32>, side: TeamSide) -> Vector2<f32> {
        let x = normalized.x.clamp(0.05, 0.95) * self.width;
        let y = normalized.y.clamp(0.1, 0.9) * self.height;

        match side {
            TeamSide::Home => Vector2::new(x, y),
            TeamSide::Away => Vector2::new(self.width - x, y),
        }
    }
}

/// Everything that lives on the pitch: the ball and both teams.
pub struct MatchField {
    pub size: MatchFieldSize,
    pub ball: Ball,
    pub home: MatchTeam,
    pub away: MatchTeam,

    /// The single user-controlled player
    pub controlled: PlayerHandle,
}

impl Default for MatchField {
    fn default() -> Self {
        Self::new(MatchFieldSize::default())
    }
}

impl MatchField {
    pub fn new(size: MatchFieldSize) -> Self {
        let formation = Formation::four_four_two();

        let mut home = MatchTeam::new(TeamSide::Home, TeamColor::HOME);
        home.init(&formation, &size, true);

        let mut away = MatchTeam::new(TeamSide::Away, TeamColor::AWAY);
        away.init(&formation, &size, false);

        let controlled = PlayerHandle::new(TeamSide::Home, home.players.len().saturating_sub(1));

        MatchField {
            size,
            ball: Ball::with_field(size),
            home,
            away,
            controlled,
        }
    }

    pub fn team(&self, side: TeamSide) -> &MatchTeam {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut MatchTeam {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    pub fn player(&self, handle: PlayerHandle) -> Option<&MatchPlayer> {
        self.team(handle.side).players.get(handle.index)
    }

    pub fn player_mut(&mut self, handle: PlayerHandle) -> Option<&mut MatchPlayer> {
        self.team_mut(handle.side).players.get_mut(handle.index)
    }

    /// Home players followed by away players.
    pub fn players(&self) -> impl Iterator<Item = &MatchPlayer> {
        self.home.players.iter().chain(self.away.players.iter())
    }

    pub fn controlled_player(&self) -> Option<&MatchPlayer> {
        self.player(self.controlled)
    }

    /// Moves the user flag to `handle`. Unknown handles leave control unchanged.
    pub fn set_controlled_player(&mut self, handle: PlayerHandle) {
        if handle == self.controlled || self.player(handle).is_none() {
            return;
        }

        let previous = self.controlled;
        if let Some(player) = self.player_mut(previous) {
            player.is_user = false;
        }

        if let Some(player) = self.player_mut(handle) {
            player.is_user = true;
        }

        self.controlled = handle;
    }

    /// Home player closest to the ball, other than the one currently controlled.
    pub fn closest_home_player_to_ball(&self) -> Option<PlayerHandle> {
        let ball_position = self.ball.position;

        self.home
            .players
            .iter()
            .filter(|player| player.handle() != self.controlled)
            .map(|player| (player.handle(), (player.position - ball_position).norm_squared()))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(handle, _)| handle)
    }

    pub fn reset_players_positions(&mut self) {
        let size = self.size;

        self.home.reset_positions(&size);
        self.away.reset_positions(&size);
    }

    /// Number of players flagged as user-controlled across both teams.
    pub fn user_count(&self) -> usize {
        self.players().filter(|player| player.is_user).count()
    }

    pub fn chaser_handles(&self) -> Vec<PlayerHandle> {
        [&self.home, &self.away]
            .iter()
            .flat_map(|team| {
                team.current_chasers
                    .iter()
                    .map(|index| PlayerHandle::new(team.side, *index))
            })
            .collect_vec()
    }
}
