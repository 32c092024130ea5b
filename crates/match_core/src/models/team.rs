use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use super::player::{Player, Position};
use crate::error::{MatchError, Result};

/// Players on the pitch per side.
pub const SQUAD_SIZE: usize = 11;

/// Stable team identifier. Equality of teams is equality of ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A side: owns its players in roster order.
///
/// Composition is not checked on construction so squads can be assembled
/// incrementally; call [`Team::validate_for_match`] before kickoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, players: Vec<Player>) -> Self {
        Self { id, name: name.into(), players }
    }

    pub fn builder() -> TeamBuilder {
        TeamBuilder::default()
    }

    /// 11 players, exactly one goalkeeper, and every player registered to this team.
    pub fn validate_for_match(&self) -> Result<()> {
        if self.players.len() != SQUAD_SIZE {
            warn!(team = %self.id, found = self.players.len(), "invalid squad size");
            return Err(MatchError::InvalidTeamSize {
                team: self.id.to_string(),
                expected: SQUAD_SIZE,
                found: self.players.len(),
            });
        }

        let goalkeepers = self.players.iter().filter(|p| p.is_goalkeeper()).count();
        if goalkeepers != 1 {
            warn!(team = %self.id, found = goalkeepers, "invalid goalkeeper count");
            return Err(MatchError::GoalkeeperCount { team: self.id.to_string(), found: goalkeepers });
        }

        if let Some(stray) = self.players.iter().find(|p| p.team_id != self.id) {
            warn!(team = %self.id, player = %stray.id, "player registered to another team");
            return Err(MatchError::ForeignPlayer {
                player: stray.id.clone(),
                team: self.id.to_string(),
                registered: stray.team_id.to_string(),
            });
        }

        Ok(())
    }

    pub fn player(&self, slot: usize) -> Option<&Player> {
        self.players.get(slot)
    }

    pub fn player_by_id(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Roster slot of a player id.
    pub fn slot_of(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }

    pub fn goalkeeper(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_goalkeeper())
    }

    pub fn outfield_players(&self) -> Vec<&Player> {
        self.players_where(|pos| !pos.is_goalkeeper())
    }

    pub fn defenders(&self) -> Vec<&Player> {
        self.players_where(Position::is_defender)
    }

    pub fn midfielders(&self) -> Vec<&Player> {
        self.players_where(Position::is_midfielder)
    }

    pub fn attackers(&self) -> Vec<&Player> {
        self.players_where(Position::is_attacker)
    }

    /// Players whose role matches `filter`, in roster order.
    pub fn players_where(&self, filter: impl Fn(Position) -> bool) -> Vec<&Player> {
        self.players.iter().filter(|p| filter(p.position)).collect()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team{{id='{}', name='{}', players={}}}", self.id, self.name, self.players.len())
    }
}

/// Incremental team assembly. All three fields are required.
#[derive(Debug, Default)]
pub struct TeamBuilder {
    id: Option<TeamId>,
    name: Option<String>,
    players: Option<Vec<Player>>,
}

impl TeamBuilder {
    pub fn id(mut self, id: TeamId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = Some(players);
        self
    }

    pub fn build(self) -> Result<Team> {
        let id = self.id.ok_or(MatchError::IncompleteTeam { field: "id" })?;
        let name = self.name.ok_or(MatchError::IncompleteTeam { field: "name" })?;
        let players = self.players.ok_or(MatchError::IncompleteTeam { field: "players" })?;
        Ok(Team::new(id, name, players))
    }
}
