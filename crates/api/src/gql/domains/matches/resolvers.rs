use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use league_infra::repos::{match_events, matches, MatchFilter};

use super::service::{self, EventParams};
use crate::gql::common::helpers::{get_competition, require_range};
use crate::gql::types::{
    Match, MatchEvent, MatchFilterInput, RecordMatchEventInput, UpdateMatchScoreInput,
    UpdateMatchStatusInput,
};
use crate::state::AppState;

#[derive(Default)]
pub struct MatchQuery;

#[Object]
impl MatchQuery {
    /// Matches of a competition ordered by round.
    async fn matches(
        &self,
        ctx: &Context<'_>,
        competition_id: Uuid,
        filter: Option<MatchFilterInput>,
    ) -> Result<Vec<Match>> {
        let state = ctx.data::<AppState>()?;
        get_competition(&state.db, competition_id).await?;

        let filter = filter.unwrap_or_default();
        let round = filter
            .round
            .map(|r| require_range("round", r, 1, i32::MAX))
            .transpose()?;

        let rows = matches::list_by_competition(
            &state.db,
            competition_id,
            MatchFilter {
                group_id: filter.group_id,
                round,
                status: filter.status.map(Into::into),
                team_id: filter.team_id,
            },
        )
        .await?;

        Ok(rows.into_iter().map(Match::from).collect())
    }

    #[graphql(name = "match")]
    async fn get_match(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Match>> {
        let state = ctx.data::<AppState>()?;
        Ok(matches::get_by_id(&state.db, id).await?.map(Match::from))
    }

    /// A match's event log ordered by minute.
    async fn match_events(&self, ctx: &Context<'_>, match_id: Uuid) -> Result<Vec<MatchEvent>> {
        let state = ctx.data::<AppState>()?;
        Ok(match_events::list_by_match(&state.db, match_id)
            .await?
            .into_iter()
            .map(MatchEvent::from)
            .collect())
    }
}

#[derive(Default)]
pub struct MatchMutation;

#[Object]
impl MatchMutation {
    async fn record_match_event(
        &self,
        ctx: &Context<'_>,
        input: RecordMatchEventInput,
    ) -> Result<MatchEvent> {
        let state = ctx.data::<AppState>()?;

        let minute = input
            .minute
            .map(|m| require_range("minute", m, 0, 200))
            .transpose()?;

        let row = service::record_event(
            &state.db,
            EventParams {
                match_id: input.match_id,
                kind: input.kind.into(),
                team_id: input.team_id,
                player_id: input.player_id,
                sub_in_player_id: input.sub_in_player_id,
                minute,
            },
        )
        .await?;

        let event = MatchEvent::from(row);
        state.feed().publish_event(input.match_id, event.clone());

        Ok(event)
    }

    async fn update_match_status(
        &self,
        ctx: &Context<'_>,
        input: UpdateMatchStatusInput,
    ) -> Result<Match> {
        let state = ctx.data::<AppState>()?;

        let row = service::transition_status(&state.db, input.match_id, input.status.into()).await?;
        let competition_id = row.competition_id;
        let finished = row.status.is_terminal();

        let updated = Match::from(row);
        state.feed().publish_match(competition_id, updated.clone());
        if finished {
            state.feed().close_match(input.match_id);
        }

        Ok(updated)
    }

    async fn update_match_score(
        &self,
        ctx: &Context<'_>,
        input: UpdateMatchScoreInput,
    ) -> Result<Match> {
        let state = ctx.data::<AppState>()?;

        let home_score = require_range("homeScore", input.home_score, 0, 99)?;
        let away_score = require_range("awayScore", input.away_score, 0, 99)?;

        let row = service::update_score(&state.db, input.match_id, home_score, away_score).await?;
        let competition_id = row.competition_id;

        let updated = Match::from(row);
        state.feed().publish_match(competition_id, updated.clone());

        Ok(updated)
    }
}
