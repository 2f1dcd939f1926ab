use thiserror::Error;
use uuid::Uuid;

use crate::match_status::MatchStatus;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeagueError {
    #[error("seeds are required for a manual draw")]
    EmptySeeds,

    #[error("team {0} is not part of this competition")]
    UnknownTeam(Uuid),

    #[error("team {0} is assigned more than once")]
    DuplicateTeam(Uuid),

    #[error("group index {index} is out of range for {group_count} groups")]
    GroupOutOfRange { index: usize, group_count: usize },

    #[error("seed must be at least 1")]
    InvalidSeed,

    #[error("no bracket match at round {round}, position {position}")]
    MatchNotFound { round: u32, position: u32 },

    #[error("team {0} is not playing in this match")]
    InvalidWinner(Uuid),

    #[error("invalid match status transition from \"{from}\" to \"{to}\"")]
    InvalidTransition { from: MatchStatus, to: MatchStatus },
}
