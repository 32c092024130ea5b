//! Full-match runs through the public entry points.

mod common;

use std::collections::HashSet;

use match_core::engine::{LooseBallPolicy, MatchPhase, MatchSimulation};
use match_core::models::{MatchEvent, Side};
use match_core::{simulate, simulate_with_config, SimConfig};

#[test]
fn same_seed_same_match() {
    let (home, away) = common::squads();
    let first = simulate(home.clone(), away.clone(), 42).expect("first run");
    let second = simulate(home, away, 42).expect("second run");

    assert_eq!(first.events, second.events);
    assert_eq!(
        (first.home_score, first.away_score),
        (second.home_score, second.away_score)
    );
    assert_eq!(first.stats, second.stats);
}

#[test]
fn different_seeds_vary() {
    let (home, away) = common::squads();
    let outcomes: HashSet<String> = (0..10u64)
        .map(|seed| {
            let result = simulate(home.clone(), away.clone(), seed).expect("match");
            serde_json::to_string(&result.events).expect("events to json")
        })
        .collect();
    assert!(outcomes.len() > 1, "10 seeds produced one outcome");
}

#[test]
fn events_respect_the_clock() {
    let (home, away) = common::squads();
    let result = simulate(home, away, 7).expect("match");

    assert!(!result.events.is_empty());
    for pair in result.events.windows(2) {
        assert!(pair[0].tick() <= pair[1].tick());
    }
    for event in &result.events {
        let time = event.time();
        assert!(MatchPhase::from_tick(time.tick).is_playing(), "event at tick {}", time.tick);
        assert_eq!(time.minute, time.tick / 120);
        assert_eq!(time.second, (time.tick / 2) % 60);
    }
    // at most one action per playing tick
    assert!(result.events.len() as u32 <= result.stats.played_ticks);
}

#[test]
fn score_matches_goal_events() {
    let (home, away) = common::squads();
    let result = simulate(home, away, 2024).expect("match");

    let mut running = (0, 0);
    for event in &result.events {
        if let MatchEvent::Goal { scorer, home_score, away_score, team, .. } = event {
            match scorer.side {
                Side::Home => running.0 += 1,
                Side::Away => running.1 += 1,
            }
            assert_eq!((*home_score, *away_score), running);
            assert_eq!(*team, result.team(scorer.side).id);
        }
    }
    assert_eq!(running, (result.home_score, result.away_score));
}

#[test]
fn shots_only_from_attackers() {
    let (home, away) = common::squads();
    let result = simulate(home, away, 99).expect("match");

    let mut shots = 0;
    for event in result.events.iter().filter(|e| e.is_shot()) {
        let shooter = result.player(event.actor()).expect("shooter exists");
        assert!(shooter.position.is_attacker());
        shots += 1;
    }
    assert_eq!(shots, result.stats.home_shots + result.stats.away_shots);
}

#[test]
fn passes_stay_within_team() {
    let (home, away) = common::squads();
    let result = simulate(home, away, 5).expect("match");

    for event in &result.events {
        if let MatchEvent::Pass { passer, receiver, .. } = event {
            assert_eq!(passer.side, receiver.side);
            assert_ne!(passer.slot, receiver.slot);
        }
    }
}

#[test]
fn nearest_player_policy_is_deterministic() {
    let (home, away) = common::squads();
    let config = SimConfig {
        loose_ball_policy: LooseBallPolicy::NearestPlayer,
        ..SimConfig::default()
    };
    let a = simulate_with_config(home.clone(), away.clone(), 11, &config).expect("a");
    let b = simulate_with_config(home, away, 11, &config).expect("b");
    assert_eq!(a.events, b.events);
}

#[test]
fn stepping_matches_run() {
    let (home, away) = common::squads();
    let mut sim = MatchSimulation::new(home.clone(), away.clone(), 3, SimConfig::default()).expect("sim");
    let mut steps = 0u32;
    while !sim.is_finished() {
        sim.step().expect("step");
        steps += 1;
    }
    assert_eq!(steps, 5401);
    assert_eq!(sim.state().clock.phase(), MatchPhase::FullTime);

    let stepped = sim.events().to_vec();
    let run = simulate(home, away, 3).expect("run");
    assert_eq!(stepped, run.events);
}

#[test]
fn result_serializes_to_json() {
    let (home, away) = common::squads();
    let result = simulate(home, away, 1).expect("match");
    let json = serde_json::to_value(&result).expect("to json");

    assert_eq!(json["seed"], 1);
    assert_eq!(json["home"]["id"], "H_TEAM");
    assert!(json["events"].as_array().is_some_and(|e| !e.is_empty()));

    let report = result.event_report();
    assert!(report.starts_with("=== MATCH EVENTS ==="));
    assert!(result.to_text().contains("Home FC"));
}
