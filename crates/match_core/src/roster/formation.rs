//! Formation layout: places a squad at its kickoff coordinates.
//!
//! Layouts are written for a team attacking towards x = 105 (home).
//! The away side gets the same shape reflected through the centre spot,
//! so both goalkeepers stand in front of their own goal.

use tracing::warn;

use crate::engine::physics_constants::field;
use crate::error::{MatchError, Result};
use crate::models::{Position, Side, Team};
use crate::spatial::Vector2D;

pub trait Formation {
    /// Short label, e.g. "4-4-2".
    fn name(&self) -> &'static str;

    /// Assign a field position to every player of `team` playing on `side`.
    fn apply(&self, team: &mut Team, side: Side) -> Result<()>;
}

/// Look up a layout by its label.
pub fn formation_by_name(name: &str) -> Result<Box<dyn Formation>> {
    match name {
        "4-4-2" | "442" => Ok(Box::new(FourFourTwo)),
        other => Err(MatchError::Formation(format!("unsupported formation '{other}'"))),
    }
}

/// Reflect a home-side coordinate for the away side.
pub fn mirror(point: Vector2D) -> Vector2D {
    Vector2D::new(field::LENGTH_M - point.x, field::WIDTH_M - point.y)
}

// ============================================================================
// 4-4-2
// ============================================================================

const GK_442: Vector2D = Vector2D::new(5.0, 34.0);

// LB, CB, CB, RB
const BACK_FOUR: [Vector2D; 4] = [
    Vector2D::new(15.0, 15.0),
    Vector2D::new(15.0, 27.0),
    Vector2D::new(15.0, 41.0),
    Vector2D::new(15.0, 53.0),
];

// LM, CM, CM, RM
const MIDFIELD_FOUR: [Vector2D; 4] = [
    Vector2D::new(35.0, 12.0),
    Vector2D::new(40.0, 27.0),
    Vector2D::new(40.0, 41.0),
    Vector2D::new(35.0, 56.0),
];

// Strikers sit about 25m from goal, inside shooting range.
const FRONT_TWO: [Vector2D; 2] = [Vector2D::new(80.0, 24.0), Vector2D::new(80.0, 44.0)];

/// Classic 4-4-2. Role groups are filled in roster order; players beyond the
/// four defenders, four midfielders and two attackers keep their position.
#[derive(Debug, Clone, Copy, Default)]
pub struct FourFourTwo;

impl Formation for FourFourTwo {
    fn name(&self) -> &'static str {
        "4-4-2"
    }

    fn apply(&self, team: &mut Team, side: Side) -> Result<()> {
        if team.players.len() != 11 {
            return Err(reject(team, format!("formation requires exactly 11 players, found {}", team.players.len())));
        }

        let gk = slots(team, Position::is_goalkeeper);
        let defenders = slots(team, Position::is_defender);
        let midfielders = slots(team, Position::is_midfielder);
        let attackers = slots(team, Position::is_attacker);

        let Some(&gk) = gk.first() else {
            return Err(reject(team, "4-4-2 requires a goalkeeper".to_string()));
        };
        if defenders.len() < 4 {
            return Err(reject(team, "4-4-2 requires at least 4 defenders".to_string()));
        }
        if midfielders.len() < 4 {
            return Err(reject(team, "4-4-2 requires at least 4 midfielders".to_string()));
        }
        if attackers.len() < 2 {
            return Err(reject(team, "4-4-2 requires at least 2 attackers".to_string()));
        }

        let place = |point: Vector2D| match side {
            Side::Home => point,
            Side::Away => mirror(point),
        };

        let assignments = std::iter::once((gk, GK_442))
            .chain(defenders.into_iter().zip(BACK_FOUR))
            .chain(midfielders.into_iter().zip(MIDFIELD_FOUR))
            .chain(attackers.into_iter().zip(FRONT_TWO));
        for (slot, point) in assignments {
            team.players[slot].field_position = place(point);
        }
        Ok(())
    }
}

fn slots(team: &Team, filter: impl Fn(Position) -> bool) -> Vec<usize> {
    team.players
        .iter()
        .enumerate()
        .filter(|(_, p)| filter(p.position))
        .map(|(slot, _)| slot)
        .collect()
}

fn reject(team: &Team, reason: String) -> MatchError {
    warn!(team = %team.id, %reason, "formation rejected");
    MatchError::Formation(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, PlayerStats, TeamId};

    fn team(positions: &[Position]) -> Team {
        let id = TeamId::new("T");
        let stats = PlayerStats::new(10, 10, 10, 10, 10, 10, 10).unwrap();
        let players = positions
            .iter()
            .enumerate()
            .map(|(i, pos)| Player::new(format!("p{i}"), format!("P {i}"), stats, *pos, id.clone()))
            .collect();
        Team::new(id, "Test", players)
    }

    fn standard() -> Team {
        use Position::*;
        team(&[GK, CB, CB, LB, RB, CDM, CM, CM, CAM, LW, ST])
    }

    #[test]
    fn test_home_layout() {
        let mut t = standard();
        FourFourTwo.apply(&mut t, Side::Home).unwrap();

        assert_eq!(t.players[0].field_position, Vector2D::new(5.0, 34.0));
        assert_eq!(t.players[1].field_position, Vector2D::new(15.0, 15.0));
        assert_eq!(t.players[4].field_position, Vector2D::new(15.0, 53.0));
        assert_eq!(t.players[5].field_position, Vector2D::new(35.0, 12.0));
        assert_eq!(t.players[9].field_position, Vector2D::new(80.0, 24.0));
        assert_eq!(t.players[10].field_position, Vector2D::new(80.0, 44.0));
    }

    #[test]
    fn test_away_layout_is_mirrored() {
        let mut home = standard();
        let mut away = standard();
        FourFourTwo.apply(&mut home, Side::Home).unwrap();
        FourFourTwo.apply(&mut away, Side::Away).unwrap();

        assert_eq!(away.players[0].field_position, Vector2D::new(100.0, 34.0));
        assert_eq!(away.players[1].field_position, Vector2D::new(90.0, 53.0));
        assert_eq!(away.players[10].field_position, Vector2D::new(25.0, 24.0));
        for (h, a) in home.players.iter().zip(&away.players) {
            assert_eq!(mirror(h.field_position), a.field_position);
        }
    }

    #[test]
    fn test_strikers_within_shooting_range() {
        let mut t = standard();
        FourFourTwo.apply(&mut t, Side::Home).unwrap();
        for p in t.attackers() {
            assert!(p.distance_to(field::AWAY_GOAL_CENTER) < 30.0);
        }
    }

    #[test]
    fn test_rejects_wrong_squad_size() {
        let mut t = standard();
        t.players.pop();
        assert!(matches!(FourFourTwo.apply(&mut t, Side::Home), Err(MatchError::Formation(_))));
    }

    #[test]
    fn test_rejects_short_role_groups() {
        use Position::*;
        let mut t = team(&[GK, CB, CB, LB, CM, CDM, CM, CM, CAM, LW, ST]);
        let err = FourFourTwo.apply(&mut t, Side::Home).unwrap_err();
        assert!(err.to_string().contains("defenders"));

        let mut t = team(&[GK, CB, CB, LB, RB, CB, CM, CM, CAM, LW, ST]);
        let err = FourFourTwo.apply(&mut t, Side::Home).unwrap_err();
        assert!(err.to_string().contains("midfielders"));

        let mut t = team(&[GK, CB, CB, LB, RB, CDM, CM, CM, CAM, CM, ST]);
        let err = FourFourTwo.apply(&mut t, Side::Home).unwrap_err();
        assert!(err.to_string().contains("attackers"));
    }

    #[test]
    fn test_formation_by_name() {
        assert_eq!(formation_by_name("442").unwrap().name(), "4-4-2");
        assert!(formation_by_name("4-3-3").is_err());
    }
}
