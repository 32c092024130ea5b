//! # match_core - Deterministic Football Match Kernel
//!
//! Plays a full two-team match tick by tick and returns the event log and
//! final score. Same rosters + same seed = same result.
//!
//! ## Layers
//! - [`spatial`]: vectors, geometry, uniform-grid proximity index
//! - [`engine`]: clock, ball, actions, decision rules, the tick loop
//! - [`models`]: players, teams, events, match result
//! - [`roster`]: attribute generation and formation layout for building squads
//!
//! ```no_run
//! use match_core::models::Side;
//! use match_core::roster::generate_squad;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let home = generate_squad("H", "Reds", Side::Home, &mut rng)?;
//! let away = generate_squad("A", "Blues", Side::Away, &mut rng)?;
//! let result = match_core::simulate(home, away, 42)?;
//! println!("{}", result.to_text());
//! # Ok::<(), match_core::MatchError>(())
//! ```

// Game engine APIs often require many parameters for physics, state, etc.
#![allow(clippy::too_many_arguments)]
// Method naming conventions - would require API changes
#![allow(clippy::should_implement_trait)]

pub mod engine;
pub mod error;
pub mod models;
pub mod roster;
pub mod spatial;

pub use engine::{simulate, simulate_with_config, MatchSimulation, SimConfig};
pub use error::{MatchError, Result};
pub use models::{MatchEvent, MatchResult, Team};
