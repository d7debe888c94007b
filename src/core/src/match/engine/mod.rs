pub mod ball;
pub mod collision;
pub mod constants;
pub mod context;
pub mod engine;
pub mod events;
pub mod field;
pub mod input;
pub mod player;
pub mod random;
pub mod restart;
pub mod state;
pub mod tactics;
pub mod team;
pub mod vector;

pub use ball::*;
pub use collision::*;
pub use context::*;
pub use engine::*;
pub use events::*;
pub use field::*;
pub use input::*;
pub use player::*;
pub use random::*;
pub use restart::*;
pub use state::*;
pub use tactics::*;
pub use team::*;
pub use vector::*;
