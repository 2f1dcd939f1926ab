use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use league_infra::repos::{competitions, groups, CreateCompetition, CreateGroup};

use crate::gql::common::helpers::{get_competition, require_name, require_range};
use crate::gql::types::{Competition, CreateCompetitionInput, CreateGroupInput, Group};
use crate::state::AppState;

#[derive(Default)]
pub struct CompetitionQuery;

#[Object]
impl CompetitionQuery {
    async fn competition(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Competition>> {
        let state = ctx.data::<AppState>()?;
        Ok(competitions::get_by_id(&state.db, id)
            .await?
            .map(Competition::from))
    }

    /// Competitions run by an organization, by name.
    async fn competitions(
        &self,
        ctx: &Context<'_>,
        organization_id: Uuid,
    ) -> Result<Vec<Competition>> {
        let state = ctx.data::<AppState>()?;
        Ok(competitions::list_by_organization(&state.db, organization_id)
            .await?
            .into_iter()
            .map(Competition::from)
            .collect())
    }

    async fn competition_groups(
        &self,
        ctx: &Context<'_>,
        competition_id: Uuid,
    ) -> Result<Vec<Group>> {
        let state = ctx.data::<AppState>()?;
        get_competition(&state.db, competition_id).await?;

        Ok(groups::list_by_competition(&state.db, competition_id)
            .await?
            .into_iter()
            .map(Group::from)
            .collect())
    }
}

#[derive(Default)]
pub struct CompetitionMutation;

#[Object]
impl CompetitionMutation {
    async fn create_competition(
        &self,
        ctx: &Context<'_>,
        input: CreateCompetitionInput,
    ) -> Result<Competition> {
        let state = ctx.data::<AppState>()?;

        let name = require_name("Competition name", &input.name)?;
        let points_win = require_range("pointsWin", input.points_win.unwrap_or(3), 0, 10)?;
        let points_draw = require_range("pointsDraw", input.points_draw.unwrap_or(1), 0, 10)?;
        let points_loss = require_range("pointsLoss", input.points_loss.unwrap_or(0), 0, 10)?;

        let row = competitions::create(
            &state.db,
            CreateCompetition {
                organization_id: input.organization_id,
                name,
                description: input.description,
                format: input.format.into(),
                start_date: input.start_date,
                points_win,
                points_draw,
                points_loss,
            },
        )
        .await?;

        tracing::info!(competition_id = %row.id, format = row.format.as_str(), "competition created");
        Ok(row.into())
    }

    async fn create_group(&self, ctx: &Context<'_>, input: CreateGroupInput) -> Result<Group> {
        let state = ctx.data::<AppState>()?;
        let name = require_name("Group name", &input.name)?;

        let row = groups::create(
            &state.db,
            CreateGroup {
                competition_id: input.competition_id,
                name,
            },
        )
        .await?;

        Ok(row.into())
    }
}
