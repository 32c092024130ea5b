//! Shared squads for the integration tests.

use match_core::models::{Side, Team};
use match_core::roster::generate_squad;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const SQUAD_SEED: u64 = 12345;

/// Two generated, laid-out squads. Same output on every call.
pub fn squads() -> (Team, Team) {
    let mut rng = ChaCha8Rng::seed_from_u64(SQUAD_SEED);
    let home = generate_squad("H", "Home FC", Side::Home, &mut rng).expect("home squad");
    let away = generate_squad("A", "Away United", Side::Away, &mut rng).expect("away squad");
    (home, away)
}
