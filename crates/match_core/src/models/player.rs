use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MatchError, Result};
use crate::spatial::Vector2D;

use super::team::TeamId;

// ============================================================
// Identity
// ============================================================

/// Which end of the match a team plays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn is_home(self) -> bool {
        self == Side::Home
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

/// Opaque in-match reference to a player: the team side plus the roster slot.
///
/// Used as the ball's possessor and as the spatial grid's entity id, so both
/// stay `Copy` and never borrow the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerHandle {
    pub side: Side,
    pub slot: usize,
}

impl PlayerHandle {
    pub const fn new(side: Side, slot: usize) -> Self {
        Self { side, slot }
    }
}

// ============================================================
// Position
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    GK,
    CB,
    LB,
    RB,
    CDM,
    CM,
    CAM,
    LW,
    RW,
    ST,
}

/// Role group a position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionCategory {
    Goalkeeper,
    Defense,
    Midfield,
    Attack,
}

impl Position {
    pub const ALL: [Position; 10] = [
        Position::GK,
        Position::CB,
        Position::LB,
        Position::RB,
        Position::CDM,
        Position::CM,
        Position::CAM,
        Position::LW,
        Position::RW,
        Position::ST,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Position::GK => "Goalkeeper",
            Position::CB => "Center Back",
            Position::LB => "Left Back",
            Position::RB => "Right Back",
            Position::CDM => "Defensive Midfielder",
            Position::CM => "Central Midfielder",
            Position::CAM => "Attacking Midfielder",
            Position::LW => "Left Winger",
            Position::RW => "Right Winger",
            Position::ST => "Striker",
        }
    }

    pub fn category(self) -> PositionCategory {
        match self {
            Position::GK => PositionCategory::Goalkeeper,
            Position::CB | Position::LB | Position::RB => PositionCategory::Defense,
            Position::CDM | Position::CM | Position::CAM => PositionCategory::Midfield,
            Position::LW | Position::RW | Position::ST => PositionCategory::Attack,
        }
    }

    pub fn is_goalkeeper(self) -> bool {
        self.category() == PositionCategory::Goalkeeper
    }

    pub fn is_defender(self) -> bool {
        self.category() == PositionCategory::Defense
    }

    pub fn is_midfielder(self) -> bool {
        self.category() == PositionCategory::Midfield
    }

    pub fn is_attacker(self) -> bool {
        self.category() == PositionCategory::Attack
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PositionCategory::Goalkeeper => "Goalkeeper",
            PositionCategory::Defense => "Defense",
            PositionCategory::Midfield => "Midfield",
            PositionCategory::Attack => "Attack",
        };
        f.write_str(label)
    }
}

// ============================================================
// PlayerStats
// ============================================================

pub const ATTRIBUTE_MIN: u8 = 1;
pub const ATTRIBUTE_MAX: u8 = 20;
/// Outfield players carry goalkeeping 0.
pub const GOALKEEPING_MIN: u8 = 0;

/// Base attributes on the 1-20 scale. Fixed for the duration of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStats")]
pub struct PlayerStats {
    pace: u8,
    stamina: u8,
    shooting: u8,
    passing: u8,
    tackling: u8,
    positioning: u8,
    goalkeeping: u8,
}

#[derive(Deserialize)]
struct RawStats {
    pace: u8,
    stamina: u8,
    shooting: u8,
    passing: u8,
    tackling: u8,
    positioning: u8,
    goalkeeping: u8,
}

impl TryFrom<RawStats> for PlayerStats {
    type Error = MatchError;

    fn try_from(raw: RawStats) -> Result<Self> {
        PlayerStats::new(
            raw.pace,
            raw.stamina,
            raw.shooting,
            raw.passing,
            raw.tackling,
            raw.positioning,
            raw.goalkeeping,
        )
    }
}

fn check(value: u8, name: &'static str, min: u8, max: u8) -> Result<u8> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(MatchError::InvalidAttribute { name, min, max, found: value })
    }
}

fn bump(value: u8, increment: i32, min: u8) -> u8 {
    (value as i32).saturating_add(increment).clamp(min as i32, ATTRIBUTE_MAX as i32) as u8
}

impl PlayerStats {
    pub fn new(
        pace: u8,
        stamina: u8,
        shooting: u8,
        passing: u8,
        tackling: u8,
        positioning: u8,
        goalkeeping: u8,
    ) -> Result<Self> {
        Ok(Self {
            pace: check(pace, "Pace", ATTRIBUTE_MIN, ATTRIBUTE_MAX)?,
            stamina: check(stamina, "Stamina", ATTRIBUTE_MIN, ATTRIBUTE_MAX)?,
            shooting: check(shooting, "Shooting", ATTRIBUTE_MIN, ATTRIBUTE_MAX)?,
            passing: check(passing, "Passing", ATTRIBUTE_MIN, ATTRIBUTE_MAX)?,
            tackling: check(tackling, "Tackling", ATTRIBUTE_MIN, ATTRIBUTE_MAX)?,
            positioning: check(positioning, "Positioning", ATTRIBUTE_MIN, ATTRIBUTE_MAX)?,
            goalkeeping: check(goalkeeping, "Goalkeeping", GOALKEEPING_MIN, ATTRIBUTE_MAX)?,
        })
    }

    pub fn pace(&self) -> u8 {
        self.pace
    }
    pub fn stamina(&self) -> u8 {
        self.stamina
    }
    pub fn shooting(&self) -> u8 {
        self.shooting
    }
    pub fn passing(&self) -> u8 {
        self.passing
    }
    pub fn tackling(&self) -> u8 {
        self.tackling
    }
    pub fn positioning(&self) -> u8 {
        self.positioning
    }
    pub fn goalkeeping(&self) -> u8 {
        self.goalkeeping
    }

    /// Top running speed in m/s: 5.25 at pace 1, 10.0 at pace 20.
    pub fn max_speed(&self) -> f64 {
        5.0 + (self.pace as f64 / 20.0) * 5.0
    }

    // Training helpers: results are clamped into the valid range.

    pub fn with_improved_pace(self, increment: i32) -> Self {
        Self { pace: bump(self.pace, increment, ATTRIBUTE_MIN), ..self }
    }
    pub fn with_improved_stamina(self, increment: i32) -> Self {
        Self { stamina: bump(self.stamina, increment, ATTRIBUTE_MIN), ..self }
    }
    pub fn with_improved_shooting(self, increment: i32) -> Self {
        Self { shooting: bump(self.shooting, increment, ATTRIBUTE_MIN), ..self }
    }
    pub fn with_improved_passing(self, increment: i32) -> Self {
        Self { passing: bump(self.passing, increment, ATTRIBUTE_MIN), ..self }
    }
    pub fn with_improved_tackling(self, increment: i32) -> Self {
        Self { tackling: bump(self.tackling, increment, ATTRIBUTE_MIN), ..self }
    }
    pub fn with_improved_positioning(self, increment: i32) -> Self {
        Self { positioning: bump(self.positioning, increment, ATTRIBUTE_MIN), ..self }
    }
    pub fn with_improved_goalkeeping(self, increment: i32) -> Self {
        Self { goalkeeping: bump(self.goalkeeping, increment, GOALKEEPING_MIN), ..self }
    }
}

// ============================================================
// Player
// ============================================================

/// A player on the pitch.
///
/// Identity, role and stats are fixed; `field_position` and `velocity` are
/// match state. The owning team is referenced by id only, the team itself
/// owns the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub stats: PlayerStats,
    pub position: Position,
    pub field_position: Vector2D,
    pub velocity: Vector2D,
    pub team_id: TeamId,
}

impl Player {
    /// Player standing still at the centre spot; formation layout moves it.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stats: PlayerStats,
        position: Position,
        team_id: TeamId,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stats,
            position,
            field_position: Vector2D::new(52.5, 34.0),
            velocity: Vector2D::ZERO,
            team_id,
        }
    }

    pub fn with_field_position(mut self, field_position: Vector2D) -> Self {
        self.field_position = field_position;
        self
    }

    pub fn max_speed(&self) -> f64 {
        self.stats.max_speed()
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }

    pub fn distance_to(&self, point: Vector2D) -> f64 {
        self.field_position.distance_to(point)
    }

    pub fn distance_to_player(&self, other: &Player) -> f64 {
        self.field_position.distance_to(other.field_position)
    }

    /// `position += velocity * dt`. No boundary handling.
    pub fn update_physics(&mut self, dt: f64) {
        self.field_position = self.field_position + self.velocity * dt;
    }
}
