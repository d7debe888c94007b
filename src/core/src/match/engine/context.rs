use crate::r#match::constants::MATCH_LENGTH;
use crate::r#match::{MatchEvent, MatchState, PlayerInput, RestartState, Score};
use serde::Serialize;

pub struct MatchContext {
    pub state: MatchState,
    pub time: MatchTime,
    pub score: Score,
    pub possession: PossessionTotals,
    pub restart: Option<RestartState>,

    /// Input of the previous frame, for edge detection
    pub previous_input: Option<PlayerInput>,

    events: Vec<MatchEvent>,
}

impl Default for MatchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchContext {
    pub fn new() -> Self {
        MatchContext {
            state: MatchState::Intro,
            time: MatchTime::new(),
            score: Score::new(),
            possession: PossessionTotals::default(),
            restart: None,
            previous_input: None,
            events: Vec::new(),
        }
    }

    /// Clears everything a new match starts without. The state is left to the caller.
    pub fn reset(&mut self) {
        self.time = MatchTime::new();
        self.score = Score::new();
        self.possession = PossessionTotals::default();
        self.restart = None;
        self.previous_input = None;
    }

    pub fn notify(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchTime {
    pub elapsed: f32,
    pub length: f32,
}

impl Default for MatchTime {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchTime {
    pub fn new() -> Self {
        MatchTime {
            elapsed: 0.0,
            length: MATCH_LENGTH,
        }
    }

    /// Advances the clock, never past the match length, and returns the elapsed time.
    pub fn increment(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.length);
        self.elapsed
    }

    pub fn is_over(&self) -> bool {
        self.elapsed >= self.length
    }

    pub fn remaining(&self) -> f32 {
        (self.length - self.elapsed).max(0.0)
    }

    pub fn progress(&self) -> f32 {
        (self.elapsed / self.length).min(1.0)
    }

    /// Remaining time as `MM:SS`, partial seconds dropped.
    pub fn clock_label(&self) -> String {
        let seconds = self.remaining().floor() as u32;
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}

/// Seconds during which exactly one team had the ball.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PossessionTotals {
    pub home: f32,
    pub away: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PossessionShare {
    pub home: u8,
    pub away: u8,
}

impl PossessionTotals {
    /// Credits `dt` when exactly one side holds the ball; contested or loose
    /// balls count for nobody.
    pub fn track(&mut self, home_has_ball: bool, away_has_ball: bool, dt: f32) {
        match (home_has_ball, away_has_ball) {
            (true, false) => self.home += dt,
            (false, true) => self.away += dt,
            _ => {}
        }
    }

    pub fn percentages(&self) -> PossessionShare {
        let total = self.home + self.away;
        if total <= 0.0 {
            return PossessionShare { home: 50, away: 50 };
        }

        let home = ((self.home / total) * 100.0).round().clamp(0.0, 100.0) as u8;

        PossessionShare {
            home,
            away: 100 - home,
        }
    }
}
