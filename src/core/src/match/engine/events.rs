use crate::r#match::ball::events::{BallEvent, BallEventDispatcher};
use crate::r#match::{MatchContext, MatchField, PlayerHandle, RestartKind, TeamSide};
use serde::Serialize;

#[derive(Debug, Default)]
pub struct EventCollection {
    ball_events: Vec<BallEvent>,
}

impl EventCollection {
    pub fn new() -> Self {
        EventCollection {
            ball_events: Vec::with_capacity(2),
        }
    }

    pub fn add_ball_event(&mut self, event: BallEvent) {
        self.ball_events.push(event);
    }

    pub fn ball_events(&self) -> &[BallEvent] {
        &self.ball_events
    }

    pub fn is_empty(&self) -> bool {
        self.ball_events.is_empty()
    }
}

pub struct EventDispatcher;

impl EventDispatcher {
    pub fn dispatch(events: EventCollection, field: &mut MatchField, context: &mut MatchContext) {
        for event in events.ball_events {
            BallEventDispatcher::dispatch(event, field, context);
        }
    }
}

/// Notifications for the scoreboard and other listeners. Nothing in the
/// simulation waits for them to be read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MatchEvent {
    Goal {
        side: TeamSide,
        scorer: Option<PlayerHandle>,
        home: u8,
        away: u8,
        second: f32,
    },
    RestartAwarded {
        kind: RestartKind,
        side: TeamSide,
    },
    FullTime {
        home: u8,
        away: u8,
    },
}
