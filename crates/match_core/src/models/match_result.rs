//! Output of a simulated match.
//!
//! `MatchResult` is the sink of the simulation: final score, both squads as
//! they stood at full time, and the ordered event log. Text rendering lives
//! here too so consumers never need to resolve handles themselves.

use serde::{Deserialize, Serialize};

use super::events::MatchEvent;
use super::player::{Player, PlayerHandle, Side};
use super::team::{Team, TeamId};

/// Per-match counters gathered while the loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchStats {
    /// Ticks on which physics and decisions ran (half-time excluded).
    pub played_ticks: u32,
    pub home_possession_ticks: u32,
    pub away_possession_ticks: u32,
    pub home_shots: u32,
    pub away_shots: u32,
}

impl MatchStats {
    pub fn possession_ticks(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_possession_ticks,
            Side::Away => self.away_possession_ticks,
        }
    }

    pub fn shots(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_shots,
            Side::Away => self.away_shots,
        }
    }

    /// Share of played ticks in possession, 0-100.
    pub fn possession_pct(&self, side: Side) -> f64 {
        if self.played_ticks == 0 {
            return 0.0;
        }
        self.possession_ticks(side) as f64 * 100.0 / self.played_ticks as f64
    }

    /// Goals per shot attempt, 0-100. A side without shots converts 0%.
    pub fn conversion_pct(&self, side: Side, goals: u32) -> f64 {
        goals as f64 * 100.0 / self.shots(side).max(1) as f64
    }

    pub(crate) fn record_possession(&mut self, side: Side) {
        match side {
            Side::Home => self.home_possession_ticks += 1,
            Side::Away => self.away_possession_ticks += 1,
        }
    }

    pub(crate) fn record_shot(&mut self, side: Side) {
        match side {
            Side::Home => self.home_shots += 1,
            Side::Away => self.away_shots += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub seed: u64,
    pub home: Team,
    pub away: Team,
    pub home_score: u32,
    pub away_score: u32,
    pub events: Vec<MatchEvent>,
    pub stats: MatchStats,
}

impl MatchResult {
    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    pub fn player(&self, handle: PlayerHandle) -> Option<&Player> {
        self.team(handle.side).player(handle.slot)
    }

    pub fn player_name(&self, handle: PlayerHandle) -> &str {
        self.player(handle).map_or("Unknown", |p| p.name.as_str())
    }

    pub fn team_name<'a>(&'a self, id: &'a TeamId) -> &'a str {
        if *id == self.home.id {
            &self.home.name
        } else if *id == self.away.id {
            &self.away.name
        } else {
            id.as_str()
        }
    }

    pub fn goals(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter().filter(|e| e.is_goal())
    }

    /// Scoreline block.
    pub fn to_text(&self) -> String {
        format!(
            "=== MATCH RESULT ===\n{} {} - {} {}\n\n",
            self.home.name, self.home_score, self.away_score, self.away.name
        )
    }

    /// Every event as commentary, in log order.
    pub fn event_report(&self) -> String {
        let mut out = String::from("=== MATCH EVENTS ===\n\n");
        for event in &self.events {
            out.push_str(&event.to_text(self));
            out.push('\n');
        }
        out
    }
}
