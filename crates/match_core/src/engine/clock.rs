//! Match clock and phase state machine.
//!
//! Phase is a pure function of the tick:
//!
//! ```text
//! tick:   0 ..= 2700   2701 ..= 2820   2821 ..= 5400   5401 ..
//! phase:  FirstHalf    HalfTime        SecondHalf      FullTime
//! ```
//!
//! FullTime is absorbing: once reached, advancing never leaves it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::physics_constants::clock::{
    FIRST_HALF_END_TICK, HALF_TIME_END_TICK, SECOND_HALF_END_TICK, TICKS_PER_MINUTE,
    TICKS_PER_SECOND,
};
use crate::models::EventTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    FirstHalf,
    HalfTime,
    SecondHalf,
    FullTime,
}

impl MatchPhase {
    pub fn from_tick(tick: u32) -> Self {
        if tick <= FIRST_HALF_END_TICK {
            MatchPhase::FirstHalf
        } else if tick <= HALF_TIME_END_TICK {
            MatchPhase::HalfTime
        } else if tick <= SECOND_HALF_END_TICK {
            MatchPhase::SecondHalf
        } else {
            MatchPhase::FullTime
        }
    }

    /// Ball in play: physics and decisions run.
    pub fn is_playing(self) -> bool {
        matches!(self, MatchPhase::FirstHalf | MatchPhase::SecondHalf)
    }
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchPhase::FirstHalf => "First Half",
            MatchPhase::HalfTime => "Half Time",
            MatchPhase::SecondHalf => "Second Half",
            MatchPhase::FullTime => "Full Time",
        };
        f.write_str(label)
    }
}

/// Monotonic tick counter, 2 ticks per simulated second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchClock {
    tick: u32,
    phase: MatchPhase,
}

impl Default for MatchClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchClock {
    pub fn new() -> Self {
        Self::at_tick(0)
    }

    pub fn at_tick(tick: u32) -> Self {
        Self { tick, phase: MatchPhase::from_tick(tick) }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn minute(&self) -> u32 {
        self.tick / TICKS_PER_MINUTE
    }

    pub fn second(&self) -> u32 {
        (self.tick / TICKS_PER_SECOND) % 60
    }

    pub fn timestamp(&self) -> EventTime {
        EventTime::at_tick(self.tick)
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::FullTime
    }

    /// Step one tick and recompute the phase. Returns the new phase.
    pub fn advance(&mut self) -> MatchPhase {
        self.tick = self.tick.saturating_add(1);
        if self.phase != MatchPhase::FullTime {
            self.phase = MatchPhase::from_tick(self.tick);
        }
        self.phase
    }
}
