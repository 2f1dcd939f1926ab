mod common;

use std::collections::HashSet;

use common::*;
use league_core::{generate_knockout, generate_knockout_with_rng};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn pairs_every_team_once_in_round_one() {
    let teams = numbered_teams(8);
    let fixtures = generate_knockout(&teams, date(2024, 5, 4));

    assert_eq!(fixtures.len(), 4);
    let mut seen = HashSet::new();
    for fixture in &fixtures {
        assert_eq!(fixture.round, 1);
        assert_eq!(fixture.scheduled_date, date(2024, 5, 4));
        assert!(seen.insert(fixture.home.id));
        assert!(seen.insert(fixture.away.id));
    }
    assert_eq!(seen.len(), 8);
}

#[test]
fn odd_field_drops_one_team() {
    let teams = numbered_teams(7);
    let fixtures = generate_knockout(&teams, date(2024, 5, 4));
    assert_eq!(fixtures.len(), 3);
}

#[test]
fn does_not_reorder_the_callers_teams() {
    let teams = numbered_teams(6);
    let before = teams.clone();
    let _ = generate_knockout(&teams, date(2024, 5, 4));
    assert_eq!(teams, before);
}

#[test]
fn seeded_rng_is_reproducible() {
    let teams = numbered_teams(16);
    let a = generate_knockout_with_rng(&teams, date(2024, 5, 4), &mut StdRng::seed_from_u64(7));
    let b = generate_knockout_with_rng(&teams, date(2024, 5, 4), &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn single_team_has_no_fixture() {
    assert!(generate_knockout(&numbered_teams(1), date(2024, 5, 4)).is_empty());
}
