use async_graphql::{Context, Object, Result};
use league_core::MAX_INTERVAL_DAYS;
use uuid::Uuid;

use super::service::{self, FixtureParams};
use crate::gql::common::helpers::require_range;
use crate::gql::types::{
    Bracket, FixtureRound, FixturesInput, GenerateFixturesInput, GenerateFixturesPayload, Match,
};
use crate::state::AppState;

fn fixture_params(state: &AppState, input: FixturesInput) -> Result<FixtureParams> {
    let interval_days = match input.interval_days {
        Some(days) => require_range("intervalDays", days, 1, MAX_INTERVAL_DAYS as i32)?,
        None => state.config().default_interval_days,
    };
    let legs = require_range("legs", input.legs.unwrap_or(1), 1, 4)?;

    Ok(FixtureParams {
        competition_id: input.competition_id,
        group_id: input.group_id,
        format: input.format,
        start_date: input.start_date,
        interval_days,
        legs,
    })
}

#[derive(Default)]
pub struct FixtureQuery;

#[Object]
impl FixtureQuery {
    /// Lay out a schedule without saving it.
    async fn preview_fixtures(
        &self,
        ctx: &Context<'_>,
        input: FixturesInput,
    ) -> Result<Vec<FixtureRound>> {
        let state = ctx.data::<AppState>()?;
        let params = fixture_params(state, input)?;

        let rounds = service::preview(&state.db, &params).await?;
        Ok(rounds.into_iter().map(FixtureRound::from).collect())
    }

    /// Seeded single-elimination bracket. Teams are seeded by group seed when
    /// a group is given, otherwise by registration order.
    async fn preview_knockout_bracket(
        &self,
        ctx: &Context<'_>,
        competition_id: Uuid,
        group_id: Option<Uuid>,
    ) -> Result<Bracket> {
        let state = ctx.data::<AppState>()?;
        let bracket = service::preview_bracket(&state.db, competition_id, group_id).await?;
        Ok(bracket.into())
    }
}

#[derive(Default)]
pub struct FixtureMutation;

#[Object]
impl FixtureMutation {
    async fn generate_fixtures(
        &self,
        ctx: &Context<'_>,
        input: GenerateFixturesInput,
    ) -> Result<GenerateFixturesPayload> {
        let state = ctx.data::<AppState>()?;
        let params = fixture_params(state, input.fixtures)?;

        let generated = service::generate(&state.db, &params, input.replace_existing).await?;

        Ok(GenerateFixturesPayload {
            matches: generated.created.into_iter().map(Match::from).collect(),
            replaced: generated.replaced as i32,
        })
    }
}
