use crate::r#match::{FootballEngine, MatchContext, MatchField, RestartHandler, TeamSide};
use log::debug;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BallEvent {
    /// Ball crossed a goal line inside the mouth; carries the scoring side
    Goal(TeamSide),
    OutOfPlay(BoundaryCrossing),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundaryCrossing {
    Sideline(SidelineEdge),
    GoalLine(GoalLineSide),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SidelineEdge {
    Top,
    Bottom,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GoalLineSide {
    Left,
    Right,
}

impl GoalLineSide {
    /// Team whose goal sits on this line.
    pub fn defending_side(self) -> TeamSide {
        match self {
            GoalLineSide::Left => TeamSide::Home,
            GoalLineSide::Right => TeamSide::Away,
        }
    }
}

pub struct BallEventDispatcher;

impl BallEventDispatcher {
    pub fn dispatch(event: BallEvent, field: &mut MatchField, context: &mut MatchContext) {
        debug!("Ball event: {:?}", event);

        match event {
            BallEvent::Goal(scoring_side) => {
                FootballEngine::score_goal(field, context, scoring_side);
            }
            BallEvent::OutOfPlay(crossing) => {
                RestartHandler::handle_ball_out_of_play(field, context, crossing);
            }
        }
    }
}
