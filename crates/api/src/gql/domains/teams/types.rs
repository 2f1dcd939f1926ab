use async_graphql::{ComplexObject, Context, InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use league_infra::models::{PlayerRow, TeamRow};
use league_infra::repos::players;

use crate::gql::error::ResultExt;
use crate::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Team {
    pub id: ID,
    pub competition_id: ID,
    pub name: String,
    pub short_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Self {
            id: row.id.into(),
            competition_id: row.competition_id.into(),
            name: row.name,
            short_name: row.short_name,
            created_at: row.created_at,
        }
    }
}

#[ComplexObject]
impl Team {
    async fn players(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Player>> {
        let state = ctx.data::<AppState>()?;
        let team_id = Uuid::parse_str(self.id.as_str()).gql_err("Invalid team ID")?;

        Ok(players::list_by_team(&state.db, team_id)
            .await?
            .into_iter()
            .map(Player::from)
            .collect())
    }
}

#[derive(SimpleObject, Clone)]
pub struct Player {
    pub id: ID,
    pub team_id: ID,
    pub name: String,
    pub shirt_number: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Self {
            id: row.id.into(),
            team_id: row.team_id.into(),
            name: row.name,
            shirt_number: row.shirt_number,
            created_at: row.created_at,
        }
    }
}

#[derive(InputObject)]
pub struct CreateTeamInput {
    pub competition_id: Uuid,
    pub name: String,
    pub short_name: Option<String>,
}

#[derive(InputObject)]
pub struct CreatePlayerInput {
    pub team_id: Uuid,
    pub name: String,
    /// 1 to 99
    pub shirt_number: Option<i32>,
}
