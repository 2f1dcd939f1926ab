//! Player statistics rebuilt from the match-event log.

use std::collections::HashMap;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Goal,
    OwnGoal,
    Penalty,
    Assist,
    YellowCard,
    RedCard,
    Substitution,
    Injury,
    VarReview,
    /// Any type this version does not know about. Never affects stats.
    #[serde(other)]
    Unknown,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goal => "goal",
            Self::OwnGoal => "own_goal",
            Self::Penalty => "penalty",
            Self::Assist => "assist",
            Self::YellowCard => "yellow_card",
            Self::RedCard => "red_card",
            Self::Substitution => "substitution",
            Self::Injury => "injury",
            Self::VarReview => "var_review",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&str> for EventKind {
    fn from(s: &str) -> Self {
        match s {
            "goal" => Self::Goal,
            "own_goal" => Self::OwnGoal,
            "penalty" => Self::Penalty,
            "assist" => Self::Assist,
            "yellow_card" => Self::YellowCard,
            "red_card" => Self::RedCard,
            "substitution" => Self::Substitution,
            "injury" => Self::Injury,
            "var_review" => Self::VarReview,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub kind: EventKind,
    pub player_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    /// Incoming player of a substitution.
    pub sub_in_player_id: Option<Uuid>,
}

impl MatchEvent {
    pub fn new(kind: EventKind, player_id: Uuid) -> Self {
        Self {
            kind,
            player_id: Some(player_id),
            team_id: None,
            sub_in_player_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatLine {
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub appearances: u32,
}

impl Add for PlayerStatLine {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            goals: self.goals + rhs.goals,
            assists: self.assists + rhs.assists,
            yellow_cards: self.yellow_cards + rhs.yellow_cards,
            red_cards: self.red_cards + rhs.red_cards,
            appearances: self.appearances + rhs.appearances,
        }
    }
}

impl AddAssign for PlayerStatLine {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for PlayerStatLine {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl PlayerStatLine {
    fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::Goal | EventKind::Penalty => self.goals += 1,
            EventKind::Assist => self.assists += 1,
            EventKind::YellowCard => self.yellow_cards += 1,
            EventKind::RedCard => self.red_cards += 1,
            _ => {}
        }
    }
}

/// Count one player's goals, assists and cards in a single pass.
///
/// Penalties count as goals. Own goals are not credited. A substitution
/// counts an appearance for its incoming player.
pub fn aggregate_player_stats(events: &[MatchEvent], player_id: Uuid) -> PlayerStatLine {
    let mut line = PlayerStatLine::default();

    for event in events {
        if event.player_id == Some(player_id) {
            line.record(event.kind);
        }
        if event.kind == EventKind::Substitution && event.sub_in_player_id == Some(player_id) {
            line.appearances += 1;
        }
    }

    line
}

/// Stat lines for every player mentioned in `events`.
pub fn aggregate_all(events: &[MatchEvent]) -> HashMap<Uuid, PlayerStatLine> {
    let mut lines: HashMap<Uuid, PlayerStatLine> = HashMap::new();

    for event in events {
        if let Some(player_id) = event.player_id {
            lines.entry(player_id).or_default().record(event.kind);
        }
        if event.kind == EventKind::Substitution {
            if let Some(sub_in) = event.sub_in_player_id {
                lines.entry(sub_in).or_default().appearances += 1;
            }
        }
    }

    lines
}

/// Players ordered by goals, then assists, best first. Ties fall back to the
/// player id so the order is stable.
pub fn top_scorers(events: &[MatchEvent], limit: usize) -> Vec<(Uuid, PlayerStatLine)> {
    let mut lines: Vec<_> = aggregate_all(events)
        .into_iter()
        .filter(|(_, line)| line.goals > 0 || line.assists > 0)
        .collect();

    lines.sort_by(|(a_id, a), (b_id, b)| {
        b.goals
            .cmp(&a.goals)
            .then(b.assists.cmp(&a.assists))
            .then(a_id.cmp(b_id))
    });
    lines.truncate(limit);
    lines
}
