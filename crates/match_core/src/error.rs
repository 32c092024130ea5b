use thiserror::Error;

/// Precondition and configuration failures.
///
/// Every variant is fatal for the match that raised it: nothing here is
/// retried, and a running simulation never produces one.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid team size for {team}: expected {expected}, found {found}")]
    InvalidTeamSize { team: String, expected: usize, found: usize },

    #[error("Team {team} must have exactly 1 goalkeeper, found {found}")]
    GoalkeeperCount { team: String, found: usize },

    #[error("Team {team} is not part of this match")]
    NotParticipant { team: String },

    #[error("Home and away teams share the id {team}")]
    DuplicateTeamId { team: String },

    #[error("No player in {side} slot {slot}")]
    UnknownPlayer { side: &'static str, slot: usize },

    #[error("Team {field} is required")]
    IncompleteTeam { field: &'static str },

    #[error("Player {player} is listed in {team} but registered to {registered}")]
    ForeignPlayer { player: String, team: String, registered: String },

    #[error("{name} must be {min}-{max}, got: {found}")]
    InvalidAttribute { name: &'static str, min: u8, max: u8, found: u8 },

    #[error("Invalid formation: {0}")]
    Formation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MatchError {
    /// Roster problems can be fixed by the caller and the match retried;
    /// everything else points at a programming error.
    pub fn is_roster_error(&self) -> bool {
        matches!(
            self,
            MatchError::InvalidTeamSize { .. }
                | MatchError::GoalkeeperCount { .. }
                | MatchError::DuplicateTeamId { .. }
                | MatchError::ForeignPlayer { .. }
                | MatchError::Formation(_)
        )
    }
}

/// Arithmetic failure raised by the vector kernel.
///
/// Only explicit scalar division fails; every other vector and geometry
/// routine resolves degenerate input with a defined fallback.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    #[error("Cannot divide by zero or near-zero value ({divisor})")]
    DivisionByZero { divisor: f64 },
}

pub type Result<T> = std::result::Result<T, MatchError>;
