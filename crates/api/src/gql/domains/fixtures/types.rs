use async_graphql::{Enum, InputObject, SimpleObject, ID};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::gql::domains::matches::types::Match;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum FixtureFormat {
    /// Circle-method round robin, optionally over several legs
    RoundRobin,
    /// Random first-round knockout pairings
    Knockout,
}

#[derive(SimpleObject, Clone)]
pub struct Fixture {
    pub round: i32,
    pub scheduled_date: NaiveDate,
    pub venue: String,
    pub home_team_id: ID,
    pub home_team_name: String,
    pub away_team_id: ID,
    pub away_team_name: String,
}

impl From<league_core::Fixture> for Fixture {
    fn from(fixture: league_core::Fixture) -> Self {
        Self {
            round: fixture.round as i32,
            scheduled_date: fixture.scheduled_date,
            venue: fixture.venue,
            home_team_id: fixture.home.id.into(),
            home_team_name: fixture.home.name,
            away_team_id: fixture.away.id.into(),
            away_team_name: fixture.away.name,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct FixtureRound {
    pub number: i32,
    pub date: NaiveDate,
    pub fixtures: Vec<Fixture>,
    /// Team sitting the round out, when the field is odd
    pub resting_team_id: Option<ID>,
    pub resting_team_name: Option<String>,
}

impl From<league_core::Round> for FixtureRound {
    fn from(round: league_core::Round) -> Self {
        let (resting_team_id, resting_team_name) = match round.resting {
            Some(team) => (Some(team.id.into()), Some(team.name)),
            None => (None, None),
        };

        Self {
            number: round.number as i32,
            date: round.date,
            fixtures: round.fixtures.into_iter().map(Fixture::from).collect(),
            resting_team_id,
            resting_team_name,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum MatchupStatus {
    Upcoming,
    Completed,
    Bye,
}

impl From<league_core::MatchupStatus> for MatchupStatus {
    fn from(status: league_core::MatchupStatus) -> Self {
        match status {
            league_core::MatchupStatus::Upcoming => MatchupStatus::Upcoming,
            league_core::MatchupStatus::Completed => MatchupStatus::Completed,
            league_core::MatchupStatus::Bye => MatchupStatus::Bye,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct BracketMatchup {
    pub round: i32,
    pub position: i32,
    pub home_team_id: Option<ID>,
    pub home_team_name: Option<String>,
    pub away_team_id: Option<ID>,
    pub away_team_name: Option<String>,
    pub winner_id: Option<ID>,
    pub status: MatchupStatus,
}

impl From<league_core::BracketMatchup> for BracketMatchup {
    fn from(matchup: league_core::BracketMatchup) -> Self {
        let (home_team_id, home_team_name) = split_team(matchup.home);
        let (away_team_id, away_team_name) = split_team(matchup.away);

        Self {
            round: matchup.round as i32,
            position: matchup.position as i32,
            home_team_id,
            home_team_name,
            away_team_id,
            away_team_name,
            winner_id: matchup.winner.map(ID::from),
            status: matchup.status.into(),
        }
    }
}

fn split_team(team: Option<league_core::Team>) -> (Option<ID>, Option<String>) {
    match team {
        Some(team) => (Some(team.id.into()), Some(team.name)),
        None => (None, None),
    }
}

#[derive(SimpleObject, Clone)]
pub struct BracketRound {
    pub round: i32,
    /// "Final", "Semi-Finals", "Quarter-Finals" or "Round of N"
    pub name: String,
    pub matchups: Vec<BracketMatchup>,
}

#[derive(SimpleObject, Clone)]
pub struct Bracket {
    pub total_rounds: i32,
    pub rounds: Vec<BracketRound>,
}

impl From<league_core::Bracket> for Bracket {
    fn from(bracket: league_core::Bracket) -> Self {
        Self {
            total_rounds: bracket.total_rounds as i32,
            rounds: bracket
                .rounds
                .into_iter()
                .map(|round| BracketRound {
                    round: round.round as i32,
                    name: round.name,
                    matchups: round.matchups.into_iter().map(BracketMatchup::from).collect(),
                })
                .collect(),
        }
    }
}

#[derive(InputObject)]
pub struct FixturesInput {
    pub competition_id: Uuid,
    /// Restrict to the teams drawn into one group
    pub group_id: Option<Uuid>,
    pub format: FixtureFormat,
    /// Falls back to the competition start date, then today
    pub start_date: Option<NaiveDate>,
    pub interval_days: Option<i32>,
    /// Round robin only; defaults to 1
    pub legs: Option<i32>,
}

#[derive(InputObject)]
pub struct GenerateFixturesInput {
    pub fixtures: FixturesInput,
    /// Delete this competition's (or group's) existing fixtures first.
    /// Refused once any of them has kicked off.
    #[graphql(default)]
    pub replace_existing: bool,
}

#[derive(SimpleObject, Clone)]
pub struct GenerateFixturesPayload {
    pub matches: Vec<Match>,
    /// How many previously scheduled matches were deleted
    pub replaced: i32,
}
