//! Squad assembly: attribute generation and formation layout.
//!
//! None of this runs inside a match. A caller builds two teams here (or
//! anywhere else), lays them out, and hands them to [`crate::simulate`].

pub mod formation;
pub mod stats_generator;

pub use formation::{formation_by_name, mirror, Formation, FourFourTwo};
pub use stats_generator::{StatTemplate, StatsGenerator};

use rand::Rng;

use crate::error::Result;
use crate::models::{Player, Position, Side, Team, TeamId};

/// Roster order of a generated squad. Slot 5 (CDM) takes the home kickoff.
pub const DEMO_ROSTER: [Position; 11] = [
    Position::GK,
    Position::CB,
    Position::CB,
    Position::LB,
    Position::RB,
    Position::CDM,
    Position::CM,
    Position::CM,
    Position::CAM,
    Position::LW,
    Position::ST,
];

/// Build an 11-player squad with generated attributes, laid out 4-4-2 for `side`.
///
/// Team id is `{prefix}_TEAM`, player ids `{prefix}1` ..= `{prefix}11`.
pub fn generate_squad<R: Rng>(prefix: &str, name: &str, side: Side, rng: &mut R) -> Result<Team> {
    let team_id = TeamId::new(format!("{prefix}_TEAM"));
    let mut generator = StatsGenerator::new(rng);

    let players = DEMO_ROSTER
        .iter()
        .enumerate()
        .map(|(i, &position)| -> Result<Player> {
            let stats = generator.for_position(position)?;
            Ok(Player::new(
                format!("{prefix}{}", i + 1),
                format!("{name} {} {}", position, i + 1),
                stats,
                position,
                team_id.clone(),
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut team = Team::builder().id(team_id).name(name).players(players).build()?;
    FourFourTwo.apply(&mut team, side)?;
    Ok(team)
}
