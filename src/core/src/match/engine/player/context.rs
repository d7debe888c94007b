use crate::r#match::{MatchContext, MatchField, MatchFieldSize, PlayerHandle, TeamSide};
use nalgebra::Vector2;

/// Read-only view of an active restart, as seen by players.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestartView {
    pub side: TeamSide,
    pub taker: Option<PlayerHandle>,
}

/// Match-wide facts captured once at the start of a frame.
#[derive(Debug, Clone)]
pub struct GameTickContext {
    pub field_size: MatchFieldSize,
    pub restart: Option<RestartView>,

    /// Elapsed share of the match, 0..=1
    pub match_progress: f32,

    /// Home goals minus away goals
    pub score_difference: i32,
}

impl GameTickContext {
    pub fn new(field: &MatchField, context: &MatchContext) -> Self {
        GameTickContext {
            field_size: field.size,
            restart: context.restart.as_ref().map(|restart| RestartView {
                side: restart.side,
                taker: restart.taker,
            }),
            match_progress: context.time.progress(),
            score_difference: context.score.difference(),
        }
    }

    pub fn is_losing(&self, side: TeamSide) -> bool {
        match side {
            TeamSide::Home => self.score_difference < 0,
            TeamSide::Away => self.score_difference > 0,
        }
    }

    pub fn is_winning(&self, side: TeamSide) -> bool {
        match side {
            TeamSide::Home => self.score_difference > 0,
            TeamSide::Away => self.score_difference < 0,
        }
    }
}

/// Per-player view for one update.
pub struct PlayerTickContext<'a> {
    pub tick: &'a GameTickContext,
    /// Positions of the whole roster, indexed like the team's players
    pub team_positions: &'a [Vector2<f32>],
    pub team_in_possession: bool,
    pub is_attacker: bool,
    pub is_chaser: bool,
}

impl PlayerTickContext<'_> {
    /// Roster positions without the player at `index`.
    pub fn teammates(&self, index: usize) -> impl Iterator<Item = Vector2<f32>> + '_ {
        self.team_positions
            .iter()
            .enumerate()
            .filter(move |(other, _)| *other != index)
            .map(|(_, position)| *position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(score_difference: i32) -> GameTickContext {
        GameTickContext {
            field_size: MatchFieldSize::default(),
            restart: None,
            match_progress: 0.5,
            score_difference,
        }
    }

    #[test]
    fn test_losing_and_winning() {
        let tick = tick(-1);
        assert!(tick.is_losing(TeamSide::Home));
        assert!(tick.is_winning(TeamSide::Away));
        assert!(!tick.is_losing(TeamSide::Away));
    }

    #[test]
    fn test_level_score_is_neither() {
        let tick = tick(0);
        assert!(!tick.is_losing(TeamSide::Home) && !tick.is_winning(TeamSide::Home));
        assert!(!tick.is_losing(TeamSide::Away) && !tick.is_winning(TeamSide::Away));
    }

    #[test]
    fn test_new_captures_restart() {
        let field = MatchField::default();
        let mut context = MatchContext::new();
        assert!(GameTickContext::new(&field, &context).restart.is_none());

        context.restart = Some(crate::r#match::RestartState::new(
            crate::r#match::RestartKind::Corner,
            TeamSide::Away,
            Vector2::new(48.0, 48.0),
            Vector2::new(-1.0, 0.0),
            100.0,
            Some(PlayerHandle::new(TeamSide::Away, 9)),
        ));

        let tick = GameTickContext::new(&field, &context);
        assert_eq!(
            tick.restart,
            Some(RestartView {
                side: TeamSide::Away,
                taker: Some(PlayerHandle::new(TeamSide::Away, 9)),
            })
        );
    }

    #[test]
    fn test_teammates_skip_own_index() {
        let tick = tick(0);
        let positions = [
            Vector2::new(10.0, 10.0),
            Vector2::new(20.0, 20.0),
            Vector2::new(30.0, 30.0),
        ];
        let context = PlayerTickContext {
            tick: &tick,
            team_positions: &positions,
            team_in_possession: false,
            is_attacker: false,
            is_chaser: false,
        };

        let teammates: Vec<_> = context.teammates(1).collect();

        assert_eq!(teammates, vec![Vector2::new(10.0, 10.0), Vector2::new(30.0, 30.0)]);
    }
}
