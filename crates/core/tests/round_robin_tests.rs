mod common;

use std::collections::{HashMap, HashSet};

use common::*;
use league_core::{
    generate_multi_leg_round_robin, generate_round_robin, round_robin_rounds, Fixture,
    DEFAULT_INTERVAL_DAYS, VENUE_TBD,
};
use uuid::Uuid;

fn names(fixture: &Fixture) -> (&str, &str) {
    (fixture.home.name.as_str(), fixture.away.name.as_str())
}

fn unordered(fixture: &Fixture) -> (Uuid, Uuid) {
    let (a, b) = (fixture.home.id, fixture.away.id);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[test]
fn fewer_than_two_teams_yields_no_fixtures() {
    let start = date(2024, 1, 1);
    assert!(generate_round_robin(&[], start, DEFAULT_INTERVAL_DAYS).is_empty());
    assert!(generate_round_robin(&teams(&["A"]), start, DEFAULT_INTERVAL_DAYS).is_empty());
}

#[test]
fn four_teams_follow_the_circle_method() {
    let teams = teams(&["A", "B", "C", "D"]);
    let fixtures = generate_round_robin(&teams, date(2024, 1, 1), 7);

    let by_round: Vec<(u32, (&str, &str))> =
        fixtures.iter().map(|f| (f.round, names(f))).collect();
    assert_eq!(
        by_round,
        vec![
            (1, ("A", "D")),
            (1, ("B", "C")),
            (2, ("A", "C")),
            (2, ("D", "B")),
            (3, ("A", "B")),
            (3, ("C", "D")),
        ]
    );
}

#[test]
fn rounds_are_dated_from_the_start_date() {
    let teams = teams(&["A", "B", "C", "D"]);
    let fixtures = generate_round_robin(&teams, date(2024, 1, 1), DEFAULT_INTERVAL_DAYS);

    for fixture in &fixtures {
        let expected = match fixture.round {
            1 => date(2024, 1, 1),
            2 => date(2024, 1, 8),
            3 => date(2024, 1, 15),
            other => panic!("unexpected round {other}"),
        };
        assert_eq!(fixture.scheduled_date, expected);
        assert_eq!(fixture.venue, VENUE_TBD);
    }
}

#[test]
fn custom_interval_spaces_rounds() {
    let teams = teams(&["A", "B", "C", "D"]);
    let fixtures = generate_round_robin(&teams, date(2024, 2, 27), 3);
    let last = fixtures.last().unwrap();
    assert_eq!(last.round, 3);
    assert_eq!(last.scheduled_date, date(2024, 3, 4));
}

#[test]
fn every_pair_meets_exactly_once() {
    for n in 2..=12 {
        let teams = numbered_teams(n);
        let fixtures = generate_round_robin(&teams, date(2024, 1, 1), 7);

        assert_eq!(fixtures.len(), n * (n - 1) / 2, "fixture count for {n} teams");

        let mut pairs = HashSet::new();
        for fixture in &fixtures {
            assert_ne!(fixture.home.id, fixture.away.id);
            assert!(pairs.insert(unordered(fixture)), "pair repeated for {n} teams");
        }
    }
}

#[test]
fn no_team_plays_twice_in_a_round() {
    for n in 2..=11 {
        let teams = numbered_teams(n);
        for round in round_robin_rounds(&teams, date(2024, 1, 1), 7, 1) {
            let mut seen = HashSet::new();
            for fixture in &round.fixtures {
                assert!(seen.insert(fixture.home.id));
                assert!(seen.insert(fixture.away.id));
            }
        }
    }
}

#[test]
fn five_teams_each_rest_exactly_once() {
    let teams = numbered_teams(5);
    let rounds = round_robin_rounds(&teams, date(2024, 1, 1), 7, 1);

    assert_eq!(rounds.len(), 5);
    assert_eq!(rounds.iter().map(|r| r.fixtures.len()).sum::<usize>(), 10);

    let mut rests: HashMap<Uuid, usize> = HashMap::new();
    for round in &rounds {
        let resting = round.resting.as_ref().expect("odd count rests a team");
        assert!(round.fixtures.iter().all(|f| !f.involves(resting.id)));
        *rests.entry(resting.id).or_default() += 1;
    }
    assert_eq!(rests.len(), 5);
    assert!(rests.values().all(|&count| count == 1));
}

#[test]
fn even_count_has_no_resting_team() {
    let rounds = round_robin_rounds(&numbered_teams(6), date(2024, 1, 1), 7, 1);
    assert!(rounds.iter().all(|r| r.resting.is_none()));
}

#[test]
fn same_order_gives_same_schedule() {
    let teams = numbered_teams(7);
    let first = generate_round_robin(&teams, date(2024, 1, 1), 7);
    let second = generate_round_robin(&teams, date(2024, 1, 1), 7);
    assert_eq!(first, second);
}

#[test]
fn second_leg_swaps_home_and_away() {
    let teams = teams(&["A", "B", "C", "D"]);
    let fixtures = generate_multi_leg_round_robin(&teams, date(2024, 1, 1), 7, 2);

    assert_eq!(fixtures.len(), 12);
    let (first_leg, second_leg) = fixtures.split_at(6);
    for (a, b) in first_leg.iter().zip(second_leg) {
        assert_eq!(a.home, b.away);
        assert_eq!(a.away, b.home);
        assert_eq!(b.round, a.round + 3);
    }
    assert_eq!(second_leg[0].scheduled_date, date(2024, 1, 22));
}

#[test]
fn zero_legs_is_empty() {
    let teams = numbered_teams(4);
    assert!(generate_multi_leg_round_robin(&teams, date(2024, 1, 1), 7, 0).is_empty());
}
