pub mod events;
pub mod match_result;
pub mod player;
pub mod team;

pub use events::{EventTime, MatchEvent};
pub use match_result::{MatchResult, MatchStats};
pub use player::{Player, PlayerHandle, PlayerStats, Position, PositionCategory, Side};
pub use team::{Team, TeamBuilder, TeamId, SQUAD_SIZE};
