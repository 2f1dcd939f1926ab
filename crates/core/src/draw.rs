//! Group draws: random dealing across groups, or validation of a manual
//! seeding supplied by an organizer.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LeagueError;
use crate::types::{GroupAssignment, Team};

/// Shuffle `teams` and deal them across `group_count` groups.
///
/// Team `i` of the shuffled order lands in group `i % group_count` with seed
/// `i / group_count + 1`, so group sizes never differ by more than one. A
/// zero group count yields no assignments.
pub fn random_draw(teams: &[Team], group_count: usize) -> Vec<GroupAssignment> {
    random_draw_with_rng(teams, group_count, &mut rand::rng())
}

pub fn random_draw_with_rng<R: Rng + ?Sized>(
    teams: &[Team],
    group_count: usize,
    rng: &mut R,
) -> Vec<GroupAssignment> {
    if group_count == 0 {
        return Vec::new();
    }

    // Fisher-Yates over a private copy; the caller's order is untouched.
    let mut shuffled: Vec<Uuid> = teams.iter().map(|team| team.id).collect();
    shuffled.shuffle(rng);

    shuffled
        .into_iter()
        .enumerate()
        .map(|(index, team_id)| GroupAssignment {
            team_id,
            group_index: index % group_count,
            seed: (index / group_count) as u32 + 1,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualSeed {
    pub team_id: Uuid,
    pub group_index: usize,
    pub seed: u32,
}

/// Check an organizer-supplied seeding against the competition's teams and
/// groups. Teams may be left out of a manual draw, but none may appear twice.
pub fn manual_draw(
    teams: &[Team],
    group_count: usize,
    seeds: &[ManualSeed],
) -> Result<Vec<GroupAssignment>, LeagueError> {
    if seeds.is_empty() {
        return Err(LeagueError::EmptySeeds);
    }

    let known: HashSet<Uuid> = teams.iter().map(|team| team.id).collect();
    let mut seen = HashSet::with_capacity(seeds.len());

    for seed in seeds {
        if !known.contains(&seed.team_id) {
            return Err(LeagueError::UnknownTeam(seed.team_id));
        }
        if !seen.insert(seed.team_id) {
            return Err(LeagueError::DuplicateTeam(seed.team_id));
        }
        if seed.group_index >= group_count {
            return Err(LeagueError::GroupOutOfRange {
                index: seed.group_index,
                group_count,
            });
        }
        if seed.seed == 0 {
            return Err(LeagueError::InvalidSeed);
        }
    }

    Ok(seeds
        .iter()
        .map(|seed| GroupAssignment {
            team_id: seed.team_id,
            group_index: seed.group_index,
            seed: seed.seed,
        })
        .collect())
}
