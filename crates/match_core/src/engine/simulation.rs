//! The tick loop.
//!
//! Per playing tick, in order:
//! 1. player then ball physics
//! 2. grid rebuild from every player's position
//! 3. loose-ball resolution
//! 4. possessor lookup (no possessor: skip 5-6)
//! 5. shoot-or-pass decision
//! 6. action execution, event appended to the log
//! 7. clock advance
//!
//! Half-time ticks only advance the clock. The loop ends at full time.
//!
//! Same rosters + same seed + same config = identical event log and score.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use super::actions::Action;
use super::config::SimConfig;
use super::decision::{decide, resolve_loose_ball};
use super::physics_constants::field;
use super::state::MatchState;
use crate::error::{MatchError, Result};
use crate::models::{MatchEvent, MatchResult, MatchStats, PlayerHandle, Side, Team};
use crate::spatial::SpatialGrid;

/// Play a full match with the default configuration.
///
/// Both teams must be valid for a match and already laid out on the pitch
/// (see [`crate::roster::formation`]). The home player in roster slot 5 kicks off.
pub fn simulate(home: Team, away: Team, seed: u64) -> Result<MatchResult> {
    simulate_with_config(home, away, seed, &SimConfig::default())
}

pub fn simulate_with_config(home: Team, away: Team, seed: u64, config: &SimConfig) -> Result<MatchResult> {
    MatchSimulation::new(home, away, seed, config.clone())?.run()
}

/// A match in progress. Owns its state, grid and random stream exclusively.
pub struct MatchSimulation {
    seed: u64,
    config: SimConfig,
    state: MatchState,
    grid: SpatialGrid<PlayerHandle>,
    rng: ChaCha8Rng,
    events: Vec<MatchEvent>,
    stats: MatchStats,
}

impl MatchSimulation {
    /// Validate both rosters and the config, then set up kickoff.
    pub fn new(home: Team, away: Team, seed: u64, config: SimConfig) -> Result<Self> {
        config.validate()?;
        home.validate_for_match()?;
        away.validate_for_match()?;
        if home.id == away.id {
            warn!(team = %home.id, "home and away share a team id");
            return Err(MatchError::DuplicateTeamId { team: home.id.to_string() });
        }

        let grid = SpatialGrid::new(field::LENGTH_M, field::WIDTH_M, config.grid_cell_size_m)?;

        info!(home = %home.name, away = %away.name, seed, "kickoff");

        let mut state = MatchState::new(home, away);
        state.ball.give_to(PlayerHandle::new(Side::Home, config.kickoff_slot));

        Ok(Self {
            seed,
            config,
            state,
            grid,
            rng: ChaCha8Rng::seed_from_u64(seed),
            events: Vec::new(),
            stats: MatchStats::default(),
        })
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn is_finished(&self) -> bool {
        self.state.clock.is_over()
    }

    /// Run one tick. Does nothing once the match is over.
    pub fn step(&mut self) -> Result<()> {
        if self.is_finished() {
            return Ok(());
        }
        if !self.state.clock.phase().is_playing() {
            self.advance_clock();
            return Ok(());
        }

        self.stats.played_ticks += 1;

        self.state.update_players(self.config.tick_dt_s);
        self.state.update_ball(self.config.tick_dt_s);
        self.rebuild_grid();
        resolve_loose_ball(&mut self.state, &self.config, &mut self.rng);

        if let Some((handle, _)) = self.state.possessor() {
            self.stats.record_possession(handle.side);
        }

        if let Some(action) = decide(&self.state, &self.grid, &self.config, &mut self.rng) {
            if let Action::Shoot { shooter } = action {
                self.stats.record_shot(shooter.side);
            }
            let event = action.execute(&mut self.state, &self.config, &mut self.rng)?;
            self.events.push(event);
        }

        self.advance_clock();
        Ok(())
    }

    /// Play to full time and hand over the result.
    pub fn run(mut self) -> Result<MatchResult> {
        while !self.is_finished() {
            self.step()?;
        }
        Ok(self.finish())
    }

    fn finish(self) -> MatchResult {
        let (home_score, away_score) = (self.state.home_score(), self.state.away_score());
        info!(
            home = %self.state.home.name,
            away = %self.state.away.name,
            score = %format!("{home_score}-{away_score}"),
            events = self.events.len(),
            "full time"
        );
        debug!(
            home_possession_pct = self.stats.possession_pct(Side::Home),
            away_possession_pct = self.stats.possession_pct(Side::Away),
            home_shots = self.stats.home_shots,
            away_shots = self.stats.away_shots,
            home_conversion_pct = self.stats.conversion_pct(Side::Home, home_score),
            away_conversion_pct = self.stats.conversion_pct(Side::Away, away_score),
            "match stats"
        );

        let MatchState { home, away, .. } = self.state;
        MatchResult {
            seed: self.seed,
            home,
            away,
            home_score,
            away_score,
            events: self.events,
            stats: self.stats,
        }
    }

    /// Full rebuild: clear, then insert all 22 players.
    fn rebuild_grid(&mut self) {
        self.grid.clear();
        for (handle, player) in self.state.players() {
            self.grid.insert(handle, player.field_position);
        }
    }

    fn advance_clock(&mut self) {
        let before = self.state.clock.phase();
        let after = self.state.clock.advance();
        if before != after {
            debug!(tick = self.state.clock.tick(), phase = %after, "phase change");
        }
    }
}
