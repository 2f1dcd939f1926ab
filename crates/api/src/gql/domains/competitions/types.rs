use async_graphql::{ComplexObject, Context, Enum, InputObject, SimpleObject, ID};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use league_infra::models::{self, CompetitionRow, GroupRow};
use league_infra::repos::{groups, teams};

use crate::gql::domains::draw::types::GroupAssignment;
use crate::gql::domains::teams::types::Team;
use crate::gql::error::ResultExt;
use crate::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum CompetitionFormat {
    /// Everyone plays everyone
    League,
    /// Single elimination
    Knockout,
    /// Group stage followed by a knockout phase
    GroupKnockout,
}

impl From<models::CompetitionFormat> for CompetitionFormat {
    fn from(format: models::CompetitionFormat) -> Self {
        match format {
            models::CompetitionFormat::League => CompetitionFormat::League,
            models::CompetitionFormat::Knockout => CompetitionFormat::Knockout,
            models::CompetitionFormat::GroupKnockout => CompetitionFormat::GroupKnockout,
        }
    }
}

impl From<CompetitionFormat> for models::CompetitionFormat {
    fn from(format: CompetitionFormat) -> Self {
        match format {
            CompetitionFormat::League => models::CompetitionFormat::League,
            CompetitionFormat::Knockout => models::CompetitionFormat::Knockout,
            CompetitionFormat::GroupKnockout => models::CompetitionFormat::GroupKnockout,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Competition {
    pub id: ID,
    pub organization_id: ID,
    pub name: String,
    pub description: Option<String>,
    pub format: CompetitionFormat,
    pub start_date: Option<NaiveDate>,
    pub points_win: i32,
    pub points_draw: i32,
    pub points_loss: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CompetitionRow> for Competition {
    fn from(row: CompetitionRow) -> Self {
        Self {
            id: row.id.into(),
            organization_id: row.organization_id.into(),
            name: row.name,
            description: row.description,
            format: row.format.into(),
            start_date: row.start_date,
            points_win: row.points_win as i32,
            points_draw: row.points_draw as i32,
            points_loss: row.points_loss as i32,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[ComplexObject]
impl Competition {
    async fn groups(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Group>> {
        let state = ctx.data::<AppState>()?;
        let competition_id =
            Uuid::parse_str(self.id.as_str()).gql_err("Invalid competition ID")?;

        Ok(groups::list_by_competition(&state.db, competition_id)
            .await?
            .into_iter()
            .map(Group::from)
            .collect())
    }

    async fn teams(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Team>> {
        let state = ctx.data::<AppState>()?;
        let competition_id =
            Uuid::parse_str(self.id.as_str()).gql_err("Invalid competition ID")?;

        Ok(teams::list_by_competition(&state.db, competition_id)
            .await?
            .into_iter()
            .map(Team::from)
            .collect())
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Group {
    pub id: ID,
    pub competition_id: ID,
    pub name: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Self {
            id: row.id.into(),
            competition_id: row.competition_id.into(),
            name: row.name,
            position: row.position,
            created_at: row.created_at,
        }
    }
}

#[ComplexObject]
impl Group {
    /// Teams drawn into this group, best seed first.
    async fn assignments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<GroupAssignment>> {
        let state = ctx.data::<AppState>()?;
        let group_id = Uuid::parse_str(self.id.as_str()).gql_err("Invalid group ID")?;
        let competition_id =
            Uuid::parse_str(self.competition_id.as_str()).gql_err("Invalid competition ID")?;

        Ok(groups::list_assignments(&state.db, competition_id)
            .await?
            .into_iter()
            .filter(|row| row.group_id == group_id)
            .map(GroupAssignment::from)
            .collect())
    }
}

#[derive(InputObject)]
pub struct CreateCompetitionInput {
    pub organization_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub format: CompetitionFormat,
    pub start_date: Option<NaiveDate>,
    /// Defaults to 3
    pub points_win: Option<i32>,
    /// Defaults to 1
    pub points_draw: Option<i32>,
    /// Defaults to 0
    pub points_loss: Option<i32>,
}

#[derive(InputObject)]
pub struct CreateGroupInput {
    pub competition_id: Uuid,
    pub name: String,
}
