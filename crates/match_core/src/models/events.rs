use serde::{Deserialize, Serialize};

use super::match_result::MatchResult;
use super::player::PlayerHandle;
use super::team::TeamId;
use crate::engine::physics_constants::clock::{TICKS_PER_MINUTE, TICKS_PER_SECOND};

/// Match time an event happened at. Minute and second are derived from the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventTime {
    pub tick: u32,
    pub minute: u32,
    pub second: u32,
}

impl EventTime {
    pub fn at_tick(tick: u32) -> Self {
        Self {
            tick,
            minute: tick / TICKS_PER_MINUTE,
            second: (tick / TICKS_PER_SECOND) % 60,
        }
    }
}

/// One entry of the append-only match log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    Pass {
        time: EventTime,
        passer: PlayerHandle,
        receiver: PlayerHandle,
        success: bool,
    },
    /// A shot that did not score.
    Shot {
        time: EventTime,
        shooter: PlayerHandle,
        on_target: bool,
        goal: bool,
    },
    Goal {
        time: EventTime,
        scorer: PlayerHandle,
        team: TeamId,
        /// Score after this goal.
        home_score: u32,
        away_score: u32,
    },
}

impl MatchEvent {
    pub fn time(&self) -> EventTime {
        match self {
            MatchEvent::Pass { time, .. }
            | MatchEvent::Shot { time, .. }
            | MatchEvent::Goal { time, .. } => *time,
        }
    }

    pub fn tick(&self) -> u32 {
        self.time().tick
    }

    /// Player who initiated the event.
    pub fn actor(&self) -> PlayerHandle {
        match self {
            MatchEvent::Pass { passer, .. } => *passer,
            MatchEvent::Shot { shooter, .. } => *shooter,
            MatchEvent::Goal { scorer, .. } => *scorer,
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, MatchEvent::Goal { .. })
    }

    /// Shot attempts, scoring or not.
    pub fn is_shot(&self) -> bool {
        matches!(self, MatchEvent::Shot { .. } | MatchEvent::Goal { .. })
    }

    /// One-line commentary, resolving player and team names from `result`.
    pub fn to_text(&self, result: &MatchResult) -> String {
        match self {
            MatchEvent::Pass { time, passer, receiver, success: true } => format!(
                "Min {}: {} passes to {}... COMPLETED",
                time.minute,
                result.player_name(*passer),
                result.player_name(*receiver)
            ),
            MatchEvent::Pass { time, passer, receiver, success: false } => format!(
                "Min {}: {} attempts pass to {}... INTERCEPTED",
                time.minute,
                result.player_name(*passer),
                result.player_name(*receiver)
            ),
            MatchEvent::Shot { time, shooter, on_target, goal } => {
                let outcome = if *goal {
                    "GOAL!"
                } else if *on_target {
                    "SAVED!"
                } else {
                    "WIDE!"
                };
                format!("Min {}: {} shoots... {}", time.minute, result.player_name(*shooter), outcome)
            }
            MatchEvent::Goal { time, scorer, team, home_score, away_score } => format!(
                "Min {}: {} scores! {} {}-{}",
                time.minute,
                result.player_name(*scorer),
                result.team_name(team),
                home_score,
                away_score
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::Side;

    #[test]
    fn test_event_time() {
        assert_eq!(EventTime::at_tick(0), EventTime { tick: 0, minute: 0, second: 0 });
        assert_eq!(EventTime::at_tick(2).second, 1);
        assert_eq!(EventTime::at_tick(120), EventTime { tick: 120, minute: 1, second: 0 });
        assert_eq!(EventTime::at_tick(5399), EventTime { tick: 5399, minute: 44, second: 59 });
    }

    #[test]
    fn test_classification() {
        let shooter = PlayerHandle::new(Side::Home, 10);
        let shot = MatchEvent::Shot { time: EventTime::at_tick(10), shooter, on_target: true, goal: false };
        let goal = MatchEvent::Goal {
            time: EventTime::at_tick(12),
            scorer: shooter,
            team: TeamId::new("HOME_TEAM"),
            home_score: 1,
            away_score: 0,
        };
        assert!(shot.is_shot() && !shot.is_goal());
        assert!(goal.is_shot() && goal.is_goal());
        assert_eq!(goal.actor(), shooter);
        assert_eq!(goal.tick(), 12);
    }

    #[test]
    fn test_serialized_tag() {
        let pass = MatchEvent::Pass {
            time: EventTime::at_tick(4),
            passer: PlayerHandle::new(Side::Away, 5),
            receiver: PlayerHandle::new(Side::Away, 6),
            success: true,
        };
        let json = serde_json::to_value(&pass).unwrap();
        assert_eq!(json["type"], "pass");
        assert_eq!(json["passer"]["side"], "away");

        let back: MatchEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, pass);
    }
}
