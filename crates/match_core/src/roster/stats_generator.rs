//! Random attribute generation by role.
//!
//! Each role has a [`StatTemplate`] of inclusive ranges. Generation is
//! deterministic for a seeded RNG: attributes are drawn in declaration
//! order (pace, stamina, shooting, passing, tackling, positioning,
//! goalkeeping), and a fixed range (min == max) draws nothing.

use rand::Rng;

use crate::error::Result;
use crate::models::{PlayerStats, Position};

/// Inclusive `(min, max)` range per attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTemplate {
    pub pace: (u8, u8),
    pub stamina: (u8, u8),
    pub shooting: (u8, u8),
    pub passing: (u8, u8),
    pub tackling: (u8, u8),
    pub positioning: (u8, u8),
    pub goalkeeping: (u8, u8),
}

// ============================================================================
// Role templates
// ============================================================================

pub const STRIKER: StatTemplate = StatTemplate {
    pace: (15, 20),
    stamina: (12, 18),
    shooting: (15, 20),
    passing: (10, 15),
    tackling: (1, 8),
    positioning: (12, 18),
    goalkeeping: (0, 0),
};

pub const WINGER: StatTemplate = StatTemplate {
    pace: (17, 20),
    stamina: (15, 19),
    shooting: (12, 17),
    passing: (11, 16),
    tackling: (1, 10),
    positioning: (10, 15),
    goalkeeping: (0, 0),
};

pub const MIDFIELDER: StatTemplate = StatTemplate {
    pace: (10, 16),
    stamina: (16, 20),
    shooting: (10, 16),
    passing: (14, 19),
    tackling: (11, 17),
    positioning: (12, 18),
    goalkeeping: (0, 0),
};

pub const DEFENSIVE_MIDFIELDER: StatTemplate = StatTemplate {
    pace: (8, 13),
    stamina: (15, 19),
    shooting: (5, 12),
    passing: (12, 17),
    tackling: (15, 19),
    positioning: (14, 19),
    goalkeeping: (0, 0),
};

pub const ATTACKING_MIDFIELDER: StatTemplate = StatTemplate {
    pace: (11, 16),
    stamina: (13, 18),
    shooting: (13, 18),
    passing: (15, 20),
    tackling: (5, 12),
    positioning: (14, 19),
    goalkeeping: (0, 0),
};

pub const CENTRE_BACK: StatTemplate = StatTemplate {
    pace: (6, 12),
    stamina: (14, 18),
    shooting: (1, 8),
    passing: (8, 14),
    tackling: (16, 20),
    positioning: (15, 20),
    goalkeeping: (0, 0),
};

pub const FULLBACK: StatTemplate = StatTemplate {
    pace: (14, 19),
    stamina: (15, 20),
    shooting: (1, 10),
    passing: (9, 15),
    tackling: (13, 18),
    positioning: (12, 17),
    goalkeeping: (0, 0),
};

pub const GOALKEEPER: StatTemplate = StatTemplate {
    pace: (5, 10),
    stamina: (10, 15),
    shooting: (1, 5),
    passing: (8, 13),
    tackling: (10, 15),
    positioning: (14, 19),
    goalkeeping: (14, 20),
};

impl StatTemplate {
    /// Template used for a roster position.
    pub fn for_position(position: Position) -> &'static StatTemplate {
        match position {
            Position::GK => &GOALKEEPER,
            Position::CB => &CENTRE_BACK,
            Position::LB | Position::RB => &FULLBACK,
            Position::CDM => &DEFENSIVE_MIDFIELDER,
            Position::CM => &MIDFIELDER,
            Position::CAM => &ATTACKING_MIDFIELDER,
            Position::LW | Position::RW => &WINGER,
            Position::ST => &STRIKER,
        }
    }
}

// ============================================================================
// Generator
// ============================================================================

pub struct StatsGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> StatsGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Hand the RNG back, e.g. to keep drawing from the same stream.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Draw one set of attributes from `template`.
    ///
    /// Fails only if the template itself lies outside the attribute range.
    pub fn generate(&mut self, template: &StatTemplate) -> Result<PlayerStats> {
        let pace = self.roll(template.pace);
        let stamina = self.roll(template.stamina);
        let shooting = self.roll(template.shooting);
        let passing = self.roll(template.passing);
        let tackling = self.roll(template.tackling);
        let positioning = self.roll(template.positioning);
        let goalkeeping = self.roll(template.goalkeeping);
        PlayerStats::new(pace, stamina, shooting, passing, tackling, positioning, goalkeeping)
    }

    pub fn for_position(&mut self, position: Position) -> Result<PlayerStats> {
        self.generate(StatTemplate::for_position(position))
    }

    pub fn striker(&mut self) -> Result<PlayerStats> {
        self.generate(&STRIKER)
    }

    pub fn winger(&mut self) -> Result<PlayerStats> {
        self.generate(&WINGER)
    }

    pub fn midfielder(&mut self) -> Result<PlayerStats> {
        self.generate(&MIDFIELDER)
    }

    pub fn defensive_midfielder(&mut self) -> Result<PlayerStats> {
        self.generate(&DEFENSIVE_MIDFIELDER)
    }

    pub fn attacking_midfielder(&mut self) -> Result<PlayerStats> {
        self.generate(&ATTACKING_MIDFIELDER)
    }

    pub fn centre_back(&mut self) -> Result<PlayerStats> {
        self.generate(&CENTRE_BACK)
    }

    pub fn fullback(&mut self) -> Result<PlayerStats> {
        self.generate(&FULLBACK)
    }

    pub fn goalkeeper(&mut self) -> Result<PlayerStats> {
        self.generate(&GOALKEEPER)
    }

    fn roll(&mut self, (min, max): (u8, u8)) -> u8 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn within(value: u8, (min, max): (u8, u8)) -> bool {
        (min..=max).contains(&value)
    }

    fn assert_matches_template(stats: &PlayerStats, t: &StatTemplate) {
        assert!(within(stats.pace(), t.pace));
        assert!(within(stats.stamina(), t.stamina));
        assert!(within(stats.shooting(), t.shooting));
        assert!(within(stats.passing(), t.passing));
        assert!(within(stats.tackling(), t.tackling));
        assert!(within(stats.positioning(), t.positioning));
        assert!(within(stats.goalkeeping(), t.goalkeeping));
    }

    #[test]
    fn test_same_seed_same_stats() {
        let mut a = StatsGenerator::new(ChaCha8Rng::seed_from_u64(12345));
        let mut b = StatsGenerator::new(ChaCha8Rng::seed_from_u64(12345));
        for _ in 0..20 {
            assert_eq!(a.striker().unwrap(), b.striker().unwrap());
            assert_eq!(a.goalkeeper().unwrap(), b.goalkeeper().unwrap());
        }
    }

    #[test]
    fn test_outfield_roles_have_no_goalkeeping() {
        let mut g = StatsGenerator::new(ChaCha8Rng::seed_from_u64(1));
        for pos in Position::ALL.iter().filter(|p| !p.is_goalkeeper()) {
            assert_eq!(g.for_position(*pos).unwrap().goalkeeping(), 0);
        }
        assert!(g.goalkeeper().unwrap().goalkeeping() >= 14);
    }

    #[test]
    fn test_fixed_range_draws_nothing() {
        let template = StatTemplate {
            pace: (10, 10),
            stamina: (10, 10),
            shooting: (10, 10),
            passing: (10, 10),
            tackling: (10, 10),
            positioning: (10, 10),
            goalkeeping: (0, 0),
        };
        let mut g = StatsGenerator::new(ChaCha8Rng::seed_from_u64(5));
        g.generate(&template).unwrap();
        let mut untouched = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(g.into_inner().gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_bad_template_is_rejected() {
        let template = StatTemplate { pace: (21, 25), ..STRIKER };
        let mut g = StatsGenerator::new(ChaCha8Rng::seed_from_u64(5));
        assert!(matches!(g.generate(&template), Err(MatchError::InvalidAttribute { name: "Pace", .. })));
    }

    proptest! {
        #[test]
        fn prop_stats_stay_in_role_ranges(seed in any::<u64>(), idx in 0usize..10) {
            let pos = Position::ALL[idx];
            let mut g = StatsGenerator::new(ChaCha8Rng::seed_from_u64(seed));
            let stats = g.for_position(pos).unwrap();
            assert_matches_template(&stats, StatTemplate::for_position(pos));
        }
    }
}
