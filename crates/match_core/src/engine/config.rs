//! # Simulation Configuration
//!
//! Every tunable decision constant of the match loop, in one place.
//!
//! ## Usage
//! ```rust
//! use match_core::engine::config::{LooseBallPolicy, SimConfig};
//!
//! let config = SimConfig::default();
//! let scripted = SimConfig {
//!     loose_ball_policy: LooseBallPolicy::NearestPlayer,
//!     ..SimConfig::default()
//! };
//! assert!(scripted.validate().is_ok());
//! ```
//!
//! Clock thresholds and ball physics are fixed contract values and live in
//! [`physics_constants`](super::physics_constants) instead.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::models::SQUAD_SIZE;

/// How a loose ball is handed to a player at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LooseBallPolicy {
    /// Fair coin for the team, then a uniformly random player of that team.
    /// Consumes two draws.
    #[default]
    CoinFlip,
    /// Player closest to the ball, home side first on ties. Consumes no draws.
    NearestPlayer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Max distance (m) from the opposing goal centre an attacker may shoot from
    pub shooting_range_m: f64,
    /// Chance per tick an in-range attacker shoots instead of passing
    pub shot_decision_chance: f64,
    /// Teammates farther than this (m) are never pass candidates
    pub pass_search_radius_m: f64,
    /// Opponents this close (m) to a candidate mark it
    pub marking_radius_m: f64,
    /// Bonus for a candidate closer to goal than the passer
    pub progress_bonus: f64,
    /// Bonus for a candidate with no marker
    pub unmarked_bonus: f64,
    pub grid_cell_size_m: f64,
    /// Simulated seconds per tick
    pub tick_dt_s: f64,
    /// Goal probability = shooting/20 × this
    pub goal_chance_scale: f64,
    /// On-target probability (second draw) = shooting/20 × this
    pub on_target_chance_scale: f64,
    pub loose_ball_policy: LooseBallPolicy,
    /// Marking check re-filters grid hits by exact distance.
    /// Off: any opponent in the neighbouring cells marks the candidate.
    pub refine_marking_by_distance: bool,
    /// Home roster slot that starts with the ball
    pub kickoff_slot: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            shooting_range_m: 30.0,
            shot_decision_chance: 0.05,
            pass_search_radius_m: 30.0,
            marking_radius_m: 3.0,
            progress_bonus: 0.8,
            unmarked_bonus: 1.0,
            grid_cell_size_m: 5.0,
            tick_dt_s: 0.5,
            goal_chance_scale: 0.5,
            on_target_chance_scale: 0.8,
            loose_ball_policy: LooseBallPolicy::CoinFlip,
            refine_marking_by_distance: false,
            kickoff_slot: 5,
        }
    }
}

impl SimConfig {
    /// Parse overrides from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Marking measured by true distance, loose balls to the nearest player.
    pub fn strict() -> Self {
        Self {
            loose_ball_policy: LooseBallPolicy::NearestPlayer,
            refine_marking_by_distance: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("shooting_range_m", self.shooting_range_m),
            ("pass_search_radius_m", self.pass_search_radius_m),
            ("marking_radius_m", self.marking_radius_m),
            ("grid_cell_size_m", self.grid_cell_size_m),
            ("tick_dt_s", self.tick_dt_s),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 || value.is_infinite() {
                return Err(MatchError::Config(format!("{name} must be positive, got {value}")));
            }
        }

        let probabilities = [
            ("shot_decision_chance", self.shot_decision_chance),
            ("goal_chance_scale", self.goal_chance_scale),
            ("on_target_chance_scale", self.on_target_chance_scale),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatchError::Config(format!("{name} must be within [0, 1], got {value}")));
            }
        }

        for (name, value) in [("progress_bonus", self.progress_bonus), ("unmarked_bonus", self.unmarked_bonus)] {
            if !value.is_finite() {
                return Err(MatchError::Config(format!("{name} must be finite, got {value}")));
            }
        }

        if self.kickoff_slot >= SQUAD_SIZE {
            return Err(MatchError::Config(format!(
                "kickoff_slot must be below {SQUAD_SIZE}, got {}",
                self.kickoff_slot
            )));
        }

        Ok(())
    }
}

// ========== Tests ==========
