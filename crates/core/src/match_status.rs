use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LeagueError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
    Postponed,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
            MatchStatus::Postponed => "postponed",
            MatchStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses reachable from `self` in one step.
    pub fn next_statuses(&self) -> &'static [MatchStatus] {
        match self {
            MatchStatus::Upcoming => &[
                MatchStatus::Live,
                MatchStatus::Postponed,
                MatchStatus::Cancelled,
            ],
            MatchStatus::Live => &[MatchStatus::Completed, MatchStatus::Postponed],
            MatchStatus::Postponed => &[MatchStatus::Upcoming, MatchStatus::Cancelled],
            MatchStatus::Completed | MatchStatus::Cancelled => &[],
        }
    }

    pub fn can_transition(&self, to: MatchStatus) -> bool {
        self.next_statuses().contains(&to)
    }

    pub fn transition(self, to: MatchStatus) -> Result<MatchStatus, LeagueError> {
        if self.can_transition(to) {
            Ok(to)
        } else {
            Err(LeagueError::InvalidTransition { from: self, to })
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next_statuses().is_empty()
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(MatchStatus::Upcoming),
            "live" => Ok(MatchStatus::Live),
            "completed" => Ok(MatchStatus::Completed),
            "postponed" => Ok(MatchStatus::Postponed),
            "cancelled" => Ok(MatchStatus::Cancelled),
            _ => Err(format!("Unknown match status: {}", s)),
        }
    }
}
