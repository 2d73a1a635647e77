use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use space_garbage::config::*;
use space_garbage::difficulty::*;
use space_garbage::GameError;

// ── Spawn cadence ─────────────────────────────────────────────────────────────

#[test]
fn first_year_spawns_slowly() {
    assert_eq!(garbage_delay_ticks(START_YEAR), Some(20));
    assert_eq!(garbage_delay_ticks(1960), Some(20));
}

#[test]
fn highest_threshold_not_above_year_wins() {
    assert_eq!(garbage_delay_ticks(1961), Some(16));
    assert_eq!(garbage_delay_ticks(1994), Some(10));
    assert_eq!(garbage_delay_ticks(1995), Some(8));
    assert_eq!(garbage_delay_ticks(2020), Some(2));
    assert_eq!(garbage_delay_ticks(3000), Some(2));
}

#[test]
fn no_delay_before_space_age() {
    assert_eq!(garbage_delay_ticks(1956), None);
}

proptest! {
    #[test]
    fn delay_never_grows_with_year(year in 1957i32..2100, later in 0i32..150) {
        let now = garbage_delay_ticks(year).unwrap();
        let then = garbage_delay_ticks(year + later).unwrap();
        prop_assert!(then <= now);
    }
}

// ── Phrases & unlocks ─────────────────────────────────────────────────────────

#[test]
fn phrases_match_exact_years() {
    assert_eq!(phrase_for(1961), Some("Gagarin flew!"));
    assert_eq!(phrase_for(1962), None);
}

#[test]
fn plasma_gun_unlocks_in_2020() {
    assert!(!weapon_unlocked(2019));
    assert!(weapon_unlocked(PLASMA_GUN_YEAR));
    assert!(weapon_unlocked(2050));
}

// ── Difficulty clock ──────────────────────────────────────────────────────────

#[test]
fn year_advances_on_cadence() {
    let mut clock = Difficulty::new(1957, 3);
    assert!(!clock.advance());
    assert!(!clock.advance());
    assert!(clock.advance());
    assert_eq!(clock.year, 1958);
    for _ in 0..3 {
        clock.advance();
    }
    assert_eq!(clock.year, 1959);
}

#[test]
fn zero_cadence_counts_every_tick() {
    let mut clock = Difficulty::new(2000, 0);
    assert_eq!(clock.ticks_per_year(), 1);
    assert!(clock.advance());
    assert_eq!(clock.year, 2001);
}

#[test]
fn clock_exposes_year_derived_values() {
    let mut clock = Difficulty::new(2019, 1);
    assert!(!clock.weapon_unlocked());
    clock.advance();
    assert!(clock.weapon_unlocked());
    assert_eq!(clock.spawn_delay(), Some(2));
    assert_eq!(
        clock.phrase(),
        Some("Take the plasma gun! Shoot the garbage!")
    );
}

#[test]
fn points_accumulate() {
    let mut clock = Difficulty::default();
    clock.add_point();
    clock.add_point();
    assert_eq!(clock.score, 2);
    assert_eq!(clock.year, START_YEAR);
}

#[test]
fn advance_stops_at_last_representable_year() {
    let mut clock = Difficulty::new(i32::MAX, 1);
    assert!(clock.advance());
    assert_eq!(clock.year, i32::MAX);
}

// ── Settings ──────────────────────────────────────────────────────────────────

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn settings_default_without_overrides() {
    let settings = Settings::from_lookup(lookup(&[])).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.tic_timeout, Duration::from_millis(DEFAULT_TIC_MS));
}

#[test]
fn settings_read_overrides() {
    let settings = Settings::from_lookup(lookup(&[
        (ENV_TIC_MS, "50"),
        (ENV_STARS, " 7 "),
        (ENV_TICKS_PER_YEAR, "10"),
        (ENV_START_YEAR, "2019"),
    ]))
    .unwrap();
    assert_eq!(settings.tic_timeout, Duration::from_millis(50));
    assert_eq!(settings.stars, 7);
    assert_eq!(settings.ticks_per_year, 10);
    assert_eq!(settings.start_year, 2019);
}

#[test]
fn settings_reject_garbage_values() {
    let err = Settings::from_lookup(lookup(&[(ENV_STARS, "lots")])).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidSetting {
            name: ENV_STARS,
            value: "lots".to_string()
        }
    );
    assert!(Settings::from_lookup(lookup(&[(ENV_TICKS_PER_YEAR, "0")])).is_err());
}

#[test]
fn settings_reject_out_of_range_start_year() {
    let max = i32::MAX.to_string();
    let err = Settings::from_lookup(lookup(&[(ENV_START_YEAR, &max)])).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidSetting {
            name: ENV_START_YEAR,
            value: max.clone()
        }
    );
    assert!(Settings::from_lookup(lookup(&[(ENV_START_YEAR, "10000")])).is_err());
    assert!(Settings::from_lookup(lookup(&[(ENV_START_YEAR, "0")])).is_err());

    let last = Settings::from_lookup(lookup(&[(ENV_START_YEAR, "9999")])).unwrap();
    assert_eq!(last.start_year, LAST_START_YEAR);
}
