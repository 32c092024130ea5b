//! Mutable state of one match: both squads, the ball, the clock and the score.

use tracing::warn;

use super::ball::Ball;
use super::clock::MatchClock;
use super::physics_constants::field;
use crate::error::{MatchError, Result};
use crate::models::{Player, PlayerHandle, Side, Team, TeamId};
use crate::spatial::Vector2D;

#[derive(Debug, Clone)]
pub struct MatchState {
    pub home: Team,
    pub away: Team,
    pub ball: Ball,
    pub clock: MatchClock,
    home_score: u32,
    away_score: u32,
}

impl MatchState {
    /// Kickoff state: ball at the centre spot, clock at tick 0, 0-0.
    pub fn new(home: Team, away: Team) -> Self {
        Self {
            home,
            away,
            ball: Ball::new(field::CENTER),
            clock: MatchClock::new(),
            home_score: 0,
            away_score: 0,
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn side_of(&self, team: &TeamId) -> Option<Side> {
        if *team == self.home.id {
            Some(Side::Home)
        } else if *team == self.away.id {
            Some(Side::Away)
        } else {
            None
        }
    }

    pub fn player(&self, handle: PlayerHandle) -> Option<&Player> {
        self.team(handle.side).player(handle.slot)
    }

    pub fn require_player(&self, handle: PlayerHandle) -> Result<&Player> {
        self.player(handle).ok_or(MatchError::UnknownPlayer {
            side: handle.side.as_str(),
            slot: handle.slot,
        })
    }

    /// Every player with its handle, home roster first.
    pub fn players(&self) -> impl Iterator<Item = (PlayerHandle, &Player)> {
        [Side::Home, Side::Away].into_iter().flat_map(move |side| {
            self.team(side)
                .players
                .iter()
                .enumerate()
                .map(move |(slot, p)| (PlayerHandle::new(side, slot), p))
        })
    }

    /// Current ball carrier, if the handle resolves to a player.
    pub fn possessor(&self) -> Option<(PlayerHandle, &Player)> {
        let handle = self.ball.possessor?;
        self.player(handle).map(|p| (handle, p))
    }

    /// Goal centre `side` is attacking.
    pub fn attacking_goal(side: Side) -> Vector2D {
        match side {
            Side::Home => field::AWAY_GOAL_CENTER,
            Side::Away => field::HOME_GOAL_CENTER,
        }
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    /// Credit a goal to `team`, which must be one of the two participants.
    pub fn increment_score(&mut self, team: &TeamId) -> Result<Side> {
        match self.side_of(team) {
            Some(Side::Home) => {
                self.home_score += 1;
                Ok(Side::Home)
            }
            Some(Side::Away) => {
                self.away_score += 1;
                Ok(Side::Away)
            }
            None => {
                warn!(team = %team, "score credited to a team outside this match");
                Err(MatchError::NotParticipant { team: team.to_string() })
            }
        }
    }

    /// Integrate every player's velocity, home first. Draws nothing.
    pub fn update_players(&mut self, dt: f64) {
        for player in self.home.players.iter_mut().chain(self.away.players.iter_mut()) {
            player.update_physics(dt);
        }
    }

    /// Move the ball one physics step.
    pub fn update_ball(&mut self, dt: f64) {
        let carrier = self.ball.possessor.and_then(|h| match h.side {
            Side::Home => self.home.players.get(h.slot),
            Side::Away => self.away.players.get(h.slot),
        });
        self.ball.update_physics(dt, carrier);
    }
}
