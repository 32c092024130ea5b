//! Physics and timing constants for match simulation.
//!
//! Coordinates are meters with the origin at a corner flag:
//! x runs 0..105 along the pitch, y runs 0..68 across it.

use crate::spatial::Vector2D;

// ============================================================
// Field geometry
// ============================================================
pub mod field {
    use super::Vector2D;

    pub const LENGTH_M: f64 = 105.0;
    pub const WIDTH_M: f64 = 68.0;
    pub const CENTER: Vector2D = Vector2D::new(LENGTH_M / 2.0, WIDTH_M / 2.0);

    pub const GOAL_WIDTH_M: f64 = 7.32;
    pub const GOAL_Y_CENTER: f64 = WIDTH_M / 2.0;
    pub const GOAL_Y_MIN: f64 = GOAL_Y_CENTER - GOAL_WIDTH_M / 2.0;
    pub const GOAL_Y_MAX: f64 = GOAL_Y_CENTER + GOAL_WIDTH_M / 2.0;

    /// Goal the home side defends (x = 0). Away attacks it.
    pub const HOME_GOAL_CENTER: Vector2D = Vector2D::new(0.0, GOAL_Y_CENTER);
    /// Goal the away side defends (x = 105). Home attacks it.
    pub const AWAY_GOAL_CENTER: Vector2D = Vector2D::new(LENGTH_M, GOAL_Y_CENTER);

    pub const PENALTY_AREA_LENGTH_M: f64 = 16.5;
    pub const PENALTY_AREA_WIDTH_M: f64 = 40.32;

    pub const MIN: Vector2D = Vector2D::new(0.0, 0.0);
    pub const MAX: Vector2D = Vector2D::new(LENGTH_M, WIDTH_M);
}

// ============================================================
// Ball
// ============================================================
pub mod ball {
    /// Hard cap on ball speed (m/s)
    pub const MAX_SPEED: f64 = 30.0;

    /// Rolling friction: speed multiplier per second of loose-ball travel
    pub const FRICTION: f64 = 0.9;

    /// Below this speed (m/s) a loose ball stops dead
    pub const MIN_VELOCITY: f64 = 0.1;
}

// ============================================================
// Match clock
// ============================================================
pub mod clock {
    pub const TICKS_PER_SECOND: u32 = 2;
    pub const TICKS_PER_MINUTE: u32 = 60 * TICKS_PER_SECOND;

    /// Last first-half tick (22:30 on the match clock)
    pub const FIRST_HALF_END_TICK: u32 = 2700;
    /// Last half-time tick: 60 s break, 120 ticks
    pub const HALF_TIME_END_TICK: u32 = 2820;
    /// Last second-half tick (45:00 on the match clock)
    pub const SECOND_HALF_END_TICK: u32 = 5400;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_mouth() {
        assert!((field::GOAL_Y_MIN - 30.34).abs() < 1e-9);
        assert!((field::GOAL_Y_MAX - 37.66).abs() < 1e-9);
        assert_eq!(field::CENTER, Vector2D::new(52.5, 34.0));
        assert_eq!(field::AWAY_GOAL_CENTER, Vector2D::new(105.0, 34.0));
    }

    #[test]
    fn test_clock_thresholds_are_ordered() {
        // 22:30 and 45:00
        assert_eq!(clock::FIRST_HALF_END_TICK, 22 * clock::TICKS_PER_MINUTE + 30 * clock::TICKS_PER_SECOND);
        assert_eq!(clock::FIRST_HALF_END_TICK * 2, 45 * clock::TICKS_PER_MINUTE);
        assert_eq!(clock::SECOND_HALF_END_TICK, 45 * clock::TICKS_PER_MINUTE);
        assert_eq!(clock::HALF_TIME_END_TICK - clock::FIRST_HALF_END_TICK, 60 * clock::TICKS_PER_SECOND);
        assert!(clock::FIRST_HALF_END_TICK < clock::HALF_TIME_END_TICK);
        assert!(clock::HALF_TIME_END_TICK < clock::SECOND_HALF_END_TICK);
    }
}
