//! Seeded single-elimination brackets with every round laid out up front.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LeagueError;
use crate::types::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchupStatus {
    Upcoming,
    Completed,
    /// One side is empty; the other side advanced without playing.
    Bye,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketMatchup {
    pub round: u32,
    /// 0-indexed within the round.
    pub position: u32,
    pub home: Option<Team>,
    pub away: Option<Team>,
    pub winner: Option<Uuid>,
    pub status: MatchupStatus,
}

impl BracketMatchup {
    fn placeholder(round: u32, position: u32) -> Self {
        Self {
            round,
            position,
            home: None,
            away: None,
            winner: None,
            status: MatchupStatus::Upcoming,
        }
    }

    fn team(&self, team_id: Uuid) -> Option<&Team> {
        [self.home.as_ref(), self.away.as_ref()]
            .into_iter()
            .flatten()
            .find(|team| team.id == team_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketRound {
    pub round: u32,
    pub name: String,
    pub matchups: Vec<BracketMatchup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub total_rounds: u32,
    pub rounds: Vec<BracketRound>,
}

impl Bracket {
    /// Lay out a bracket for `teams`, which must be ordered by seed (best
    /// first). The field is padded to the next power of two; top seeds take
    /// the byes and are moved straight into round two.
    pub fn generate(teams: &[Team]) -> Self {
        if teams.len() < 2 {
            return Self {
                total_rounds: 0,
                rounds: Vec::new(),
            };
        }

        let size = teams.len().next_power_of_two();
        let total_rounds = size.trailing_zeros();
        let order = seeded_order(size);

        let first_round = order
            .chunks_exact(2)
            .enumerate()
            .map(|(position, seeds)| {
                let home = teams.get(seeds[0]).cloned();
                let away = teams.get(seeds[1]).cloned();
                let (winner, status) = match (&home, &away) {
                    (Some(_), Some(_)) => (None, MatchupStatus::Upcoming),
                    (Some(team), None) | (None, Some(team)) => {
                        (Some(team.id), MatchupStatus::Bye)
                    }
                    (None, None) => (None, MatchupStatus::Bye),
                };
                BracketMatchup {
                    round: 1,
                    position: position as u32,
                    home,
                    away,
                    winner,
                    status,
                }
            })
            .collect();

        let mut rounds = vec![BracketRound {
            round: 1,
            name: round_name(total_rounds, 1),
            matchups: first_round,
        }];
        for round in 2..=total_rounds {
            let count = (size >> round) as u32;
            rounds.push(BracketRound {
                round,
                name: round_name(total_rounds, round),
                matchups: (0..count)
                    .map(|position| BracketMatchup::placeholder(round, position))
                    .collect(),
            });
        }

        let mut bracket = Self {
            total_rounds,
            rounds,
        };

        let byes: Vec<(u32, Team)> = bracket.rounds[0]
            .matchups
            .iter()
            .filter(|m| m.status == MatchupStatus::Bye)
            .filter_map(|m| {
                let team = m.home.clone().or_else(|| m.away.clone())?;
                Some((m.position, team))
            })
            .collect();
        for (position, team) in byes {
            bracket.place_winner(1, position, team);
        }

        tracing::debug!(
            teams = teams.len(),
            bracket_size = size,
            total_rounds,
            "generated knockout bracket"
        );

        bracket
    }

    pub fn matchup(&self, round: u32, position: u32) -> Option<&BracketMatchup> {
        self.rounds
            .get(round.checked_sub(1)? as usize)?
            .matchups
            .get(position as usize)
    }

    fn matchup_mut(&mut self, round: u32, position: u32) -> Option<&mut BracketMatchup> {
        self.rounds
            .get_mut(round.checked_sub(1)? as usize)?
            .matchups
            .get_mut(position as usize)
    }

    /// Record `winner_id` as the winner of a matchup and move them into the
    /// next round. Re-recording a result with a different winner replaces the
    /// earlier one and voids every later result that depended on it.
    pub fn advance_winner(
        &mut self,
        round: u32,
        position: u32,
        winner_id: Uuid,
    ) -> Result<(), LeagueError> {
        let matchup = self
            .matchup_mut(round, position)
            .ok_or(LeagueError::MatchNotFound { round, position })?;

        let winner = matchup
            .team(winner_id)
            .cloned()
            .ok_or(LeagueError::InvalidWinner(winner_id))?;
        if matchup.home.is_none() || matchup.away.is_none() {
            return Err(LeagueError::InvalidWinner(winner_id));
        }

        let previous = matchup.winner.replace(winner_id);
        matchup.status = MatchupStatus::Completed;

        if previous.is_some_and(|previous| previous != winner_id) {
            self.reset_downstream(round, position);
        }
        self.place_winner(round, position, winner);
        Ok(())
    }

    /// Winner of the final, once it has been played.
    pub fn champion(&self) -> Option<Uuid> {
        self.rounds.last()?.matchups.first()?.winner
    }

    /// Walk the path out of `(round, position)`, reopening each played matchup
    /// and emptying the slot its winner had taken in the round after.
    fn reset_downstream(&mut self, mut round: u32, mut position: u32) {
        while round < self.total_rounds {
            round += 1;
            position /= 2;

            let Some(next) = self.matchup_mut(round, position) else {
                return;
            };
            if next.winner.take().is_none() {
                return;
            }
            next.status = MatchupStatus::Upcoming;

            if let Some(after) = self.matchup_mut(round + 1, position / 2) {
                if position % 2 == 0 {
                    after.home = None;
                } else {
                    after.away = None;
                }
            }
        }
    }

    fn place_winner(&mut self, round: u32, position: u32, winner: Team) {
        if round >= self.total_rounds {
            return;
        }
        if let Some(next) = self.matchup_mut(round + 1, position / 2) {
            if position % 2 == 0 {
                next.home = Some(winner);
            } else {
                next.away = Some(winner);
            }
        }
    }
}

/// Seed indices in bracket order: 1 v 16, 8 v 9, 5 v 12, 4 v 13, ...
fn seeded_order(size: usize) -> Vec<usize> {
    if size <= 1 {
        return vec![0];
    }
    seeded_order(size / 2)
        .into_iter()
        .flat_map(|seed| [seed, size - 1 - seed])
        .collect()
}

fn round_name(total_rounds: u32, round: u32) -> String {
    match total_rounds - round {
        0 => "Final".to_string(),
        1 => "Semi-Finals".to_string(),
        2 => "Quarter-Finals".to_string(),
        remaining => format!("Round of {}", 1u64 << (remaining + 1)),
    }
}
