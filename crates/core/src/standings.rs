//! League table built from completed match results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: u32,
    pub away_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsRule {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for PointsRule {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub team: Team,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl StandingRow {
    fn empty(team: Team) -> Self {
        Self {
            team,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    fn record(&mut self, scored: u32, conceded: u32, rule: PointsRule) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        if scored > conceded {
            self.won += 1;
            self.points += rule.win;
        } else if scored == conceded {
            self.drawn += 1;
            self.points += rule.draw;
        } else {
            self.lost += 1;
            self.points += rule.loss;
        }
    }
}

/// Build the table for `teams` from `results`.
///
/// Every team gets a row even without a result. Results naming a team outside
/// `teams` are skipped. Rows are ordered by points, goal difference and goals
/// scored, best first, then by name and finally by team id.
pub fn compute_standings(
    teams: &[Team],
    results: &[MatchResult],
    rule: PointsRule,
) -> Vec<StandingRow> {
    let mut rows: HashMap<Uuid, StandingRow> = teams
        .iter()
        .map(|team| (team.id, StandingRow::empty(team.clone())))
        .collect();

    for result in results {
        if !rows.contains_key(&result.home_team_id) || !rows.contains_key(&result.away_team_id) {
            tracing::debug!(
                home = %result.home_team_id,
                away = %result.away_team_id,
                "skipping result for team outside the table"
            );
            continue;
        }
        if let Some(home) = rows.get_mut(&result.home_team_id) {
            home.record(result.home_score, result.away_score, rule);
        }
        if let Some(away) = rows.get_mut(&result.away_team_id) {
            away.record(result.away_score, result.home_score, rule);
        }
    }

    let mut table: Vec<StandingRow> = rows.into_values().collect();
    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference().cmp(&a.goal_difference()))
            .then(b.goals_for.cmp(&a.goals_for))
            .then(a.team.name.cmp(&b.team.name))
            .then(a.team.id.cmp(&b.team.id))
    });
    table
}
