mod ai;
pub mod behaviours;
mod context;
mod control;
mod player;

pub use behaviours::*;
pub use context::*;
pub use player::*;
