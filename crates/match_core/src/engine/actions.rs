//! Player-initiated actions.
//!
//! An [`Action`] is single-use: `execute` mutates the match state exactly
//! once and returns exactly one [`MatchEvent`], stamped with the clock at the
//! moment of execution.
//!
//! Random draws per action (part of the reproducibility contract):
//! - `Pass`: one `f64`
//! - `Shoot`: one `f64` for the goal roll, a second only if it did not score

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::SimConfig;
use super::state::MatchState;
use crate::error::Result;
use crate::models::{MatchEvent, PlayerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Pass { passer: PlayerHandle, receiver: PlayerHandle },
    Shoot { shooter: PlayerHandle },
}

impl Action {
    pub fn actor(&self) -> PlayerHandle {
        match self {
            Action::Pass { passer, .. } => *passer,
            Action::Shoot { shooter } => *shooter,
        }
    }

    pub fn execute<R: Rng + ?Sized>(
        &self,
        state: &mut MatchState,
        config: &SimConfig,
        rng: &mut R,
    ) -> Result<MatchEvent> {
        match *self {
            Action::Pass { passer, receiver } => execute_pass(state, passer, receiver, rng),
            Action::Shoot { shooter } => execute_shot(state, shooter, config, rng),
        }
    }
}

/// Completion chance is passing/20. No distance or pressure modifiers.
fn execute_pass<R: Rng + ?Sized>(
    state: &mut MatchState,
    passer: PlayerHandle,
    receiver: PlayerHandle,
    rng: &mut R,
) -> Result<MatchEvent> {
    let time = state.clock.timestamp();
    let chance = state.require_player(passer)?.stats.passing() as f64 / 20.0;
    state.require_player(receiver)?;

    let success = rng.gen::<f64>() < chance;
    if success {
        state.ball.give_to(receiver);
    } else {
        // Loose where the passer stood
        state.ball.release();
    }

    Ok(MatchEvent::Pass { time, passer, receiver, success })
}

fn execute_shot<R: Rng + ?Sized>(
    state: &mut MatchState,
    shooter: PlayerHandle,
    config: &SimConfig,
    rng: &mut R,
) -> Result<MatchEvent> {
    let time = state.clock.timestamp();
    let player = state.require_player(shooter)?;
    let base = player.stats.shooting() as f64 / 20.0;
    let team = player.team_id.clone();

    let goal = rng.gen::<f64>() < base * config.goal_chance_scale;
    let on_target = goal || rng.gen::<f64>() < base * config.on_target_chance_scale;

    state.ball.release();

    if goal {
        state.increment_score(&team)?;
        debug!(
            tick = time.tick,
            team = %team,
            score = %format!("{}-{}", state.home_score(), state.away_score()),
            "goal"
        );
        return Ok(MatchEvent::Goal {
            time,
            scorer: shooter,
            team,
            home_score: state.home_score(),
            away_score: state.away_score(),
        });
    }

    Ok(MatchEvent::Shot { time, shooter, on_target, goal: false })
}
