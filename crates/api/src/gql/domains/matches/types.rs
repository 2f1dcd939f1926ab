use async_graphql::{ComplexObject, Context, Enum, InputObject, SimpleObject, ID};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use league_infra::models::{MatchEventRow, MatchRow};
use league_infra::repos::{match_events, teams};

use crate::gql::domains::teams::types::Team;
use crate::gql::error::ResultExt;
use crate::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
    Postponed,
    Cancelled,
}

impl From<league_core::MatchStatus> for MatchStatus {
    fn from(status: league_core::MatchStatus) -> Self {
        match status {
            league_core::MatchStatus::Upcoming => MatchStatus::Upcoming,
            league_core::MatchStatus::Live => MatchStatus::Live,
            league_core::MatchStatus::Completed => MatchStatus::Completed,
            league_core::MatchStatus::Postponed => MatchStatus::Postponed,
            league_core::MatchStatus::Cancelled => MatchStatus::Cancelled,
        }
    }
}

impl From<MatchStatus> for league_core::MatchStatus {
    fn from(status: MatchStatus) -> Self {
        match status {
            MatchStatus::Upcoming => league_core::MatchStatus::Upcoming,
            MatchStatus::Live => league_core::MatchStatus::Live,
            MatchStatus::Completed => league_core::MatchStatus::Completed,
            MatchStatus::Postponed => league_core::MatchStatus::Postponed,
            MatchStatus::Cancelled => league_core::MatchStatus::Cancelled,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
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
    /// Stored with a type this server does not recognise; never counted
    Unknown,
}

impl From<league_core::EventKind> for EventKind {
    fn from(kind: league_core::EventKind) -> Self {
        use league_core::EventKind as Core;
        match kind {
            Core::Goal => EventKind::Goal,
            Core::OwnGoal => EventKind::OwnGoal,
            Core::Penalty => EventKind::Penalty,
            Core::Assist => EventKind::Assist,
            Core::YellowCard => EventKind::YellowCard,
            Core::RedCard => EventKind::RedCard,
            Core::Substitution => EventKind::Substitution,
            Core::Injury => EventKind::Injury,
            Core::VarReview => EventKind::VarReview,
            Core::Unknown => EventKind::Unknown,
        }
    }
}

impl From<EventKind> for league_core::EventKind {
    fn from(kind: EventKind) -> Self {
        use league_core::EventKind as Core;
        match kind {
            EventKind::Goal => Core::Goal,
            EventKind::OwnGoal => Core::OwnGoal,
            EventKind::Penalty => Core::Penalty,
            EventKind::Assist => Core::Assist,
            EventKind::YellowCard => Core::YellowCard,
            EventKind::RedCard => Core::RedCard,
            EventKind::Substitution => Core::Substitution,
            EventKind::Injury => Core::Injury,
            EventKind::VarReview => Core::VarReview,
            EventKind::Unknown => Core::Unknown,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Match {
    pub id: ID,
    pub competition_id: ID,
    pub group_id: Option<ID>,
    pub home_team_id: ID,
    pub away_team_id: ID,
    pub round: i32,
    pub scheduled_date: Option<NaiveDate>,
    pub venue: Option<String>,
    pub status: MatchStatus,
    pub home_score: i32,
    pub away_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MatchRow> for Match {
    fn from(row: MatchRow) -> Self {
        Self {
            id: row.id.into(),
            competition_id: row.competition_id.into(),
            group_id: row.group_id.map(ID::from),
            home_team_id: row.home_team_id.into(),
            away_team_id: row.away_team_id.into(),
            round: row.round as i32,
            scheduled_date: row.scheduled_date,
            venue: row.venue,
            status: row.status.into(),
            home_score: row.home_score as i32,
            away_score: row.away_score as i32,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[ComplexObject]
impl Match {
    async fn home_team(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Team>> {
        let state = ctx.data::<AppState>()?;
        let team_id = Uuid::parse_str(self.home_team_id.as_str()).gql_err("Invalid team ID")?;
        Ok(teams::get_by_id(&state.db, team_id).await?.map(Team::from))
    }

    async fn away_team(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Team>> {
        let state = ctx.data::<AppState>()?;
        let team_id = Uuid::parse_str(self.away_team_id.as_str()).gql_err("Invalid team ID")?;
        Ok(teams::get_by_id(&state.db, team_id).await?.map(Team::from))
    }

    async fn events(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<MatchEvent>> {
        let state = ctx.data::<AppState>()?;
        let match_id = Uuid::parse_str(self.id.as_str()).gql_err("Invalid match ID")?;
        Ok(match_events::list_by_match(&state.db, match_id)
            .await?
            .into_iter()
            .map(MatchEvent::from)
            .collect())
    }
}

#[derive(SimpleObject, Clone)]
pub struct MatchEvent {
    pub id: ID,
    pub match_id: ID,
    pub kind: EventKind,
    pub team_id: Option<ID>,
    pub player_id: Option<ID>,
    pub sub_in_player_id: Option<ID>,
    pub minute: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<MatchEventRow> for MatchEvent {
    fn from(row: MatchEventRow) -> Self {
        Self {
            id: row.id.into(),
            match_id: row.match_id.into(),
            kind: row.kind.into(),
            team_id: row.team_id.map(ID::from),
            player_id: row.player_id.map(ID::from),
            sub_in_player_id: row.sub_in_player_id.map(ID::from),
            minute: row.minute.map(|m| m as i32),
            created_at: row.created_at,
        }
    }
}

#[derive(InputObject, Default)]
pub struct MatchFilterInput {
    pub group_id: Option<Uuid>,
    pub round: Option<i32>,
    pub status: Option<MatchStatus>,
    /// Matches where this team plays home or away
    pub team_id: Option<Uuid>,
}

#[derive(InputObject)]
pub struct RecordMatchEventInput {
    pub match_id: Uuid,
    pub kind: EventKind,
    /// Must be the home or away team of the match
    pub team_id: Option<Uuid>,
    pub player_id: Option<Uuid>,
    /// Incoming player, substitutions only
    pub sub_in_player_id: Option<Uuid>,
    /// 0 to 200
    pub minute: Option<i32>,
}

#[derive(InputObject)]
pub struct UpdateMatchStatusInput {
    pub match_id: Uuid,
    pub status: MatchStatus,
}

#[derive(InputObject)]
pub struct UpdateMatchScoreInput {
    pub match_id: Uuid,
    /// 0 to 99
    pub home_score: i32,
    /// 0 to 99
    pub away_score: i32,
}
