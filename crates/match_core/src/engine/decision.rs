//! Single-step greedy decisions for the ball carrier.
//!
//! Draw order inside one tick is fixed:
//! 1. loose ball (coin-flip policy): `gen_bool(0.5)` then `gen_range(0..n)`
//! 2. shot decision: one `f64`, only for an attacker within range
//! 3. pass fallback: one `gen_range`, only when no teammate is in range
//!
//! Changing how many values any step consumes changes every later outcome
//! for the same seed.

use rand::Rng;
use tracing::trace;

use super::actions::Action;
use super::config::{LooseBallPolicy, SimConfig};
use super::state::MatchState;
use crate::models::{Player, PlayerHandle, Side};
use crate::spatial::SpatialGrid;

/// Give a loose ball to someone. No-op while the ball is possessed.
pub fn resolve_loose_ball<R: Rng + ?Sized>(state: &mut MatchState, config: &SimConfig, rng: &mut R) {
    if state.ball.is_possessed() {
        return;
    }

    let winner = match config.loose_ball_policy {
        LooseBallPolicy::CoinFlip => {
            let side = if rng.gen_bool(0.5) { Side::Home } else { Side::Away };
            let squad = state.team(side).players.len();
            if squad == 0 {
                return;
            }
            Some(PlayerHandle::new(side, rng.gen_range(0..squad)))
        }
        LooseBallPolicy::NearestPlayer => nearest_to_ball(state),
    };

    if let Some(handle) = winner {
        trace!(tick = state.clock.tick(), side = handle.side.as_str(), slot = handle.slot, "loose ball won");
        state.ball.give_to(handle);
    }
}

/// Closest player to the ball; home roster is scanned first so it wins ties.
fn nearest_to_ball(state: &MatchState) -> Option<PlayerHandle> {
    let ball = state.ball.position;
    let mut best: Option<(PlayerHandle, f64)> = None;
    for (handle, player) in state.players() {
        let d = player.field_position.distance_squared_to(ball);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((handle, d));
        }
    }
    best.map(|(handle, _)| handle)
}

/// Attackers within shooting range of the goal they attack roll to shoot.
/// Anyone else passes without consuming a draw.
pub fn should_shoot<R: Rng + ?Sized>(
    shooter: &Player,
    side: Side,
    config: &SimConfig,
    rng: &mut R,
) -> bool {
    if !shooter.position.is_attacker() {
        return false;
    }
    if shooter.distance_to(MatchState::attacking_goal(side)) > config.shooting_range_m {
        return false;
    }
    rng.gen::<f64>() < config.shot_decision_chance
}

/// Pick the teammate to pass to.
///
/// Candidates come from a grid query around the passer, re-filtered by exact
/// distance, and are scanned in roster order; the first strictly best score
/// wins. Without any candidate in range a random teammate is chosen.
pub fn find_pass_target<R: Rng + ?Sized>(
    state: &MatchState,
    grid: &SpatialGrid<PlayerHandle>,
    passer: PlayerHandle,
    config: &SimConfig,
    rng: &mut R,
) -> Option<PlayerHandle> {
    let passer_player = state.player(passer)?;
    let origin = passer_player.field_position;

    let teammates: Vec<(PlayerHandle, &Player)> = state
        .team(passer.side)
        .players
        .iter()
        .enumerate()
        .filter(|(slot, _)| *slot != passer.slot)
        .map(|(slot, p)| (PlayerHandle::new(passer.side, slot), p))
        .collect();
    if teammates.is_empty() {
        return None;
    }

    let nearby = grid.query_near(origin, config.pass_search_radius_m);
    let radius_sq = config.pass_search_radius_m * config.pass_search_radius_m;
    let viable: Vec<&(PlayerHandle, &Player)> = teammates
        .iter()
        .filter(|(handle, _)| nearby.contains(handle))
        .filter(|(_, p)| p.field_position.distance_squared_to(origin) <= radius_sq)
        .collect();

    if viable.is_empty() {
        let (handle, _) = teammates[rng.gen_range(0..teammates.len())];
        trace!(side = passer.side.as_str(), slot = handle.slot, "no teammate in range, random pass");
        return Some(handle);
    }

    let mut best = viable[0].0;
    let mut best_score = f64::NEG_INFINITY;
    for (handle, target) in viable {
        let score = evaluate_pass_target(state, grid, passer_player, passer.side, target, config);
        if score > best_score {
            best_score = score;
            best = *handle;
        }
    }
    Some(best)
}

/// Weighted pass score:
/// - proximity: `(radius - d) / radius`, floored at 0
/// - `progress_bonus` if the target is closer to goal than the passer
/// - `unmarked_bonus` if no opponent is found near the target
pub fn evaluate_pass_target(
    state: &MatchState,
    grid: &SpatialGrid<PlayerHandle>,
    passer: &Player,
    side: Side,
    target: &Player,
    config: &SimConfig,
) -> f64 {
    let radius = config.pass_search_radius_m;
    let distance = target.distance_to_player(passer);
    let mut score = ((radius - distance) / radius).max(0.0);

    let goal = MatchState::attacking_goal(side);
    if target.distance_to(goal) < passer.distance_to(goal) {
        score += config.progress_bonus;
    }

    if !is_marked(state, grid, target, side.opponent(), config) {
        score += config.unmarked_bonus;
    }

    score
}

/// Any opponent in the grid neighbourhood of `target` marks it.
///
/// The grid query is a square over-approximation of the marking radius.
/// With `refine_marking_by_distance` each hit must also lie within
/// `marking_radius_m` of the target.
fn is_marked(
    state: &MatchState,
    grid: &SpatialGrid<PlayerHandle>,
    target: &Player,
    opponents: Side,
    config: &SimConfig,
) -> bool {
    let near = grid.query_near(target.field_position, config.marking_radius_m);
    let radius_sq = config.marking_radius_m * config.marking_radius_m;

    near.iter().filter(|h| h.side == opponents).any(|h| {
        !config.refine_marking_by_distance
            || state
                .player(*h)
                .is_some_and(|p| p.field_position.distance_squared_to(target.field_position) <= radius_sq)
    })
}

/// The action the current ball carrier takes this tick, if anyone has the ball.
pub fn decide<R: Rng + ?Sized>(
    state: &MatchState,
    grid: &SpatialGrid<PlayerHandle>,
    config: &SimConfig,
    rng: &mut R,
) -> Option<Action> {
    let (handle, player) = state.possessor()?;

    if should_shoot(player, handle.side, config, rng) {
        trace!(tick = state.clock.tick(), side = handle.side.as_str(), slot = handle.slot, "shoot");
        return Some(Action::Shoot { shooter: handle });
    }

    let receiver = find_pass_target(state, grid, handle, config, rng)?;
    trace!(
        tick = state.clock.tick(),
        side = handle.side.as_str(),
        from = handle.slot,
        to = receiver.slot,
        "pass"
    );
    Some(Action::Pass { passer: handle, receiver })
}
