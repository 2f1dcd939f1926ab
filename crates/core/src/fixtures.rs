//! Fixture generation: round-robin schedules (circle method) and the first
//! round of a randomly paired knockout.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{Fixture, Round, Slot, Team};

pub const DEFAULT_INTERVAL_DAYS: u32 = 7;

/// Longest gap allowed between two rounds.
pub const MAX_INTERVAL_DAYS: u32 = 365;

/// Placeholder venue stamped on generated fixtures; callers overwrite it.
pub const VENUE_TBD: &str = "TBD";

/// Generate a single round-robin where every pair of teams meets exactly once.
///
/// Fewer than two teams yields an empty schedule. The output only depends on
/// the order of `teams`; shuffle beforehand for a randomised pairing.
pub fn generate_round_robin(
    teams: &[Team],
    start_date: NaiveDate,
    interval_days: u32,
) -> Vec<Fixture> {
    generate_multi_leg_round_robin(teams, start_date, interval_days, 1)
}

/// Generate `legs` consecutive round-robins. Legs alternate orientation: the
/// second leg replays the first with home and away swapped, the third matches
/// the first again, and so on. Round numbers and dates keep counting across
/// legs.
pub fn generate_multi_leg_round_robin(
    teams: &[Team],
    start_date: NaiveDate,
    interval_days: u32,
    legs: u32,
) -> Vec<Fixture> {
    round_robin_rounds(teams, start_date, interval_days, legs)
        .into_iter()
        .flat_map(|round| round.fixtures)
        .collect()
}

/// Same schedule as [`generate_multi_leg_round_robin`], grouped per round.
pub fn round_robin_rounds(
    teams: &[Team],
    start_date: NaiveDate,
    interval_days: u32,
    legs: u32,
) -> Vec<Round> {
    if teams.len() < 2 || legs == 0 {
        return Vec::new();
    }

    let single_leg = circle_method(teams);
    let rounds_per_leg = single_leg.len() as u32;
    let mut rounds = Vec::with_capacity((rounds_per_leg * legs) as usize);

    for leg in 0..legs {
        let reversed = leg % 2 == 1;
        for (index, pairing) in single_leg.iter().enumerate() {
            let number = leg * rounds_per_leg + index as u32 + 1;
            let date = round_date(start_date, number, interval_days);
            let fixtures = pairing
                .matches
                .iter()
                .map(|(home, away)| {
                    let (home, away) = if reversed { (away, home) } else { (home, away) };
                    Fixture {
                        home: home.clone(),
                        away: away.clone(),
                        round: number,
                        scheduled_date: date,
                        venue: VENUE_TBD.to_string(),
                    }
                })
                .collect();

            rounds.push(Round {
                number,
                date,
                fixtures,
                resting: pairing.resting.clone(),
            });
        }
    }

    tracing::debug!(
        teams = teams.len(),
        legs,
        rounds = rounds.len(),
        "generated round-robin schedule"
    );

    rounds
}

struct Pairing {
    matches: Vec<(Team, Team)>,
    resting: Option<Team>,
}

/// Circle method over an even number of slots: slot 0 stays fixed, slot `m`
/// plays slot `n - 1 - m`, then the rotating part shifts one place so that
/// its last element moves to the front.
fn circle_method(teams: &[Team]) -> Vec<Pairing> {
    let mut slots: Vec<Slot> = teams.iter().cloned().map(Slot::Team).collect();
    if slots.len() % 2 != 0 {
        slots.push(Slot::Bye);
    }

    let n = slots.len();
    let mut pairings = Vec::with_capacity(n - 1);

    for _ in 0..n - 1 {
        let mut matches = Vec::with_capacity(n / 2);
        let mut resting = None;

        for m in 0..n / 2 {
            match (&slots[m], &slots[n - 1 - m]) {
                (Slot::Team(home), Slot::Team(away)) => {
                    matches.push((home.clone(), away.clone()));
                }
                (Slot::Team(team), Slot::Bye) | (Slot::Bye, Slot::Team(team)) => {
                    resting = Some(team.clone());
                }
                (Slot::Bye, Slot::Bye) => {}
            }
        }

        pairings.push(Pairing { matches, resting });
        slots[1..].rotate_right(1);
    }

    pairings
}

fn round_date(start_date: NaiveDate, round: u32, interval_days: u32) -> NaiveDate {
    let offset = i64::from(round - 1) * i64::from(interval_days);
    start_date + Duration::days(offset)
}

/// Shuffle the teams and pair neighbours (0 v 1, 2 v 3, ...) for the first
/// round of a knockout. With an odd count the last shuffled team gets no
/// fixture; pad the field with a bye upstream to avoid that.
pub fn generate_knockout(teams: &[Team], start_date: NaiveDate) -> Vec<Fixture> {
    generate_knockout_with_rng(teams, start_date, &mut rand::rng())
}

pub fn generate_knockout_with_rng<R: Rng + ?Sized>(
    teams: &[Team],
    start_date: NaiveDate,
    rng: &mut R,
) -> Vec<Fixture> {
    let mut shuffled = teams.to_vec();
    shuffled.shuffle(rng);

    if shuffled.len() % 2 != 0 {
        tracing::warn!(
            teams = shuffled.len(),
            "odd knockout field, last drawn team has no first-round fixture"
        );
    }

    shuffled
        .chunks_exact(2)
        .map(|pair| Fixture {
            home: pair[0].clone(),
            away: pair[1].clone(),
            round: 1,
            scheduled_date: start_date,
            venue: VENUE_TBD.to_string(),
        })
        .collect()
}
