//! Match engine: clock, state, ball physics, actions, decisions and the tick loop.

pub mod actions;
pub mod ball;
pub mod clock;
pub mod config;
pub mod decision;
pub mod physics_constants;
pub mod simulation;
pub mod state;

pub use actions::Action;
pub use ball::Ball;
pub use clock::{MatchClock, MatchPhase};
pub use config::{LooseBallPolicy, SimConfig};
pub use simulation::{simulate, simulate_with_config, MatchSimulation};
pub use state::MatchState;
