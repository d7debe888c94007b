use crate::r#match::{PlayerHandle, TeamSide};
use nalgebra::Vector2;
use serde::Serialize;

/// Pause before the countdown starts, so the taker can be placed.
pub const RESTART_SETTLE_TIME: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RestartKind {
    ThrowIn,
    Corner,
    GoalKick,
}

impl RestartKind {
    /// Countdown after settling, in seconds
    pub fn timer(self) -> f32 {
        match self {
            RestartKind::ThrowIn => 0.6,
            RestartKind::Corner => 0.75,
            RestartKind::GoalKick => 0.85,
        }
    }

    /// Vertical curve towards the centre line, per pixel of offset
    pub fn curve(self) -> f32 {
        match self {
            RestartKind::ThrowIn => 0.008,
            RestartKind::Corner => 0.014,
            RestartKind::GoalKick => 0.006,
        }
    }

    /// Share of the full kick strength used to launch the ball
    pub fn power_factor(self) -> f32 {
        match self {
            RestartKind::ThrowIn => 0.35,
            RestartKind::Corner => 0.42,
            RestartKind::GoalKick => 0.55,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartPhase {
    /// Taker is being placed
    Pending,
    Countdown,
}

#[derive(Debug, Clone)]
pub struct RestartState {
    pub kind: RestartKind,
    pub side: TeamSide,
    pub spot: Vector2<f32>,
    pub direction: Vector2<f32>,
    pub power: f32,
    pub timer: f32,
    pub taker: Option<PlayerHandle>,
    pub settle: f32,
}

impl RestartState {
    pub fn new(
        kind: RestartKind,
        side: TeamSide,
        spot: Vector2<f32>,
        direction: Vector2<f32>,
        power: f32,
        taker: Option<PlayerHandle>,
    ) -> Self {
        RestartState {
            kind,
            side,
            spot,
            direction,
            power,
            timer: kind.timer(),
            taker,
            settle: RESTART_SETTLE_TIME,
        }
    }

    pub fn phase(&self) -> RestartPhase {
        if self.settle > 0.0 {
            RestartPhase::Pending
        } else {
            RestartPhase::Countdown
        }
    }
}
