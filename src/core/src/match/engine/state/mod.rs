mod manager;

pub use manager::*;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchState {
    /// No match started yet
    Intro,
    Playing,
    Paused,
    FullTime,
}

impl MatchState {
    pub fn is_playing(self) -> bool {
        self == MatchState::Playing
    }

    pub fn has_started(self) -> bool {
        self != MatchState::Intro
    }
}
