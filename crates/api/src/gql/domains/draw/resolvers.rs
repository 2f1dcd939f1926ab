use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use league_infra::repos::groups;

use super::service::{self, DrawParams, SeedParams};
use crate::gql::common::helpers::get_competition;
use crate::gql::types::{DrawMethod, DrawResult, ExecuteDrawInput, GroupAssignment};
use crate::state::AppState;

#[derive(Default)]
pub struct DrawQuery;

#[Object]
impl DrawQuery {
    /// Current assignments, by group position then seed.
    async fn group_assignments(
        &self,
        ctx: &Context<'_>,
        competition_id: Uuid,
    ) -> Result<Vec<GroupAssignment>> {
        let state = ctx.data::<AppState>()?;
        get_competition(&state.db, competition_id).await?;

        Ok(groups::list_assignments(&state.db, competition_id)
            .await?
            .into_iter()
            .map(GroupAssignment::from)
            .collect())
    }
}

#[derive(Default)]
pub struct DrawMutation;

#[Object]
impl DrawMutation {
    /// Deal the competition's teams into its groups, replacing any earlier draw.
    async fn execute_draw(&self, ctx: &Context<'_>, input: ExecuteDrawInput) -> Result<DrawResult> {
        let state = ctx.data::<AppState>()?;
        get_competition(&state.db, input.competition_id).await?;

        let params = match input.method {
            DrawMethod::Random => DrawParams::Random,
            DrawMethod::Manual => DrawParams::Manual(
                input
                    .seeds
                    .unwrap_or_default()
                    .into_iter()
                    .map(|s| SeedParams {
                        team_id: s.team_id,
                        group_id: s.group_id,
                        seed: s.seed,
                    })
                    .collect(),
            ),
        };

        let rows = service::execute_draw(&state.db, input.competition_id, params).await?;

        Ok(DrawResult {
            method: input.method,
            count: rows.len() as i32,
            assignments: rows.into_iter().map(GroupAssignment::from).collect(),
        })
    }
}
