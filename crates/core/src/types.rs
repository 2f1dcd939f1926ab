use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A competing entity. The scheduler only ever looks at `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
}

impl Team {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A position in the rotation used by the circle method.
///
/// Odd team counts are padded with `Bye`; a team drawn against the bye simply
/// rests that round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Team(Team),
    Bye,
}

impl Slot {
    pub fn team(&self) -> Option<&Team> {
        match self {
            Slot::Team(team) => Some(team),
            Slot::Bye => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: Team,
    pub away: Team,
    /// 1-indexed.
    pub round: u32,
    pub scheduled_date: NaiveDate,
    pub venue: String,
}

impl Fixture {
    pub fn involves(&self, team_id: Uuid) -> bool {
        self.home.id == team_id || self.away.id == team_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub date: NaiveDate,
    pub fixtures: Vec<Fixture>,
    /// The team paired with the bye slot, if the team count is odd.
    pub resting: Option<Team>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAssignment {
    pub team_id: Uuid,
    /// 0-indexed group.
    pub group_index: usize,
    /// Pot number within the group, starting at 1.
    pub seed: u32,
}
