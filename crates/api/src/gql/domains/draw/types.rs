use async_graphql::{ComplexObject, Context, Enum, InputObject, SimpleObject, ID};
use uuid::Uuid;

use league_infra::models::GroupTeamRow;
use league_infra::repos::teams;

use crate::gql::domains::teams::types::Team;
use crate::gql::error::ResultExt;
use crate::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum DrawMethod {
    /// Shuffle the teams and deal them across the groups
    Random,
    /// Use the organizer's seeding as given
    Manual,
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct GroupAssignment {
    pub group_id: ID,
    pub team_id: ID,
    pub seed: i32,
}

impl From<GroupTeamRow> for GroupAssignment {
    fn from(row: GroupTeamRow) -> Self {
        Self {
            group_id: row.group_id.into(),
            team_id: row.team_id.into(),
            seed: row.seed as i32,
        }
    }
}

#[ComplexObject]
impl GroupAssignment {
    async fn team(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Team>> {
        let state = ctx.data::<AppState>()?;
        let team_id = Uuid::parse_str(self.team_id.as_str()).gql_err("Invalid team ID")?;
        Ok(teams::get_by_id(&state.db, team_id).await?.map(Team::from))
    }
}

#[derive(InputObject)]
pub struct ManualSeedInput {
    pub team_id: Uuid,
    pub group_id: Uuid,
    /// 1 is the top seed
    pub seed: i32,
}

#[derive(InputObject)]
pub struct ExecuteDrawInput {
    pub competition_id: Uuid,
    pub method: DrawMethod,
    /// Required for a manual draw, ignored otherwise
    pub seeds: Option<Vec<ManualSeedInput>>,
}

#[derive(SimpleObject, Clone)]
pub struct DrawResult {
    pub method: DrawMethod,
    pub assignments: Vec<GroupAssignment>,
    pub count: i32,
}
