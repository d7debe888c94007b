mod handler;
mod state;

pub use handler::*;
pub use state::*;
