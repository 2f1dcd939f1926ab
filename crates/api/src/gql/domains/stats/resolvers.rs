use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use league_core::MatchEvent;
use league_infra::repos::{match_events, matches, players, MatchFilter};

use crate::gql::common::helpers::{get_competition, require_range};
use crate::gql::types::PlayerStats;
use crate::state::AppState;

const DEFAULT_TOP_SCORERS: i32 = 10;

#[derive(Default)]
pub struct StatsQuery;

#[Object]
impl StatsQuery {
    /// A player's totals, optionally limited to one competition.
    async fn player_stats(
        &self,
        ctx: &Context<'_>,
        player_id: Uuid,
        competition_id: Option<Uuid>,
    ) -> Result<PlayerStats> {
        let state = ctx.data::<AppState>()?;
        players::get_by_id(&state.db, player_id)
            .await?
            .ok_or_else(|| async_graphql::Error::new("Player not found"))?;

        let mut rows = match_events::list_by_player(&state.db, player_id).await?;
        if let Some(competition_id) = competition_id {
            let match_ids: Vec<Uuid> =
                matches::list_by_competition(&state.db, competition_id, MatchFilter::default())
                    .await?
                    .into_iter()
                    .map(|m| m.id)
                    .collect();
            rows.retain(|row| match_ids.contains(&row.match_id));
        }

        let events: Vec<MatchEvent> = rows.iter().map(MatchEvent::from).collect();
        let line = league_core::aggregate_player_stats(&events, player_id);

        Ok(PlayerStats::new(player_id, line))
    }

    /// Leading scorers of a competition; assists break ties on goals.
    async fn top_scorers(
        &self,
        ctx: &Context<'_>,
        competition_id: Uuid,
        limit: Option<i32>,
    ) -> Result<Vec<PlayerStats>> {
        let state = ctx.data::<AppState>()?;
        get_competition(&state.db, competition_id).await?;
        let limit = require_range("limit", limit.unwrap_or(DEFAULT_TOP_SCORERS), 1, 100)?;

        let events: Vec<MatchEvent> = match_events::list_by_competition(&state.db, competition_id)
            .await?
            .iter()
            .map(MatchEvent::from)
            .collect();

        Ok(league_core::top_scorers(&events, limit as usize)
            .into_iter()
            .map(|(player_id, line)| PlayerStats::new(player_id, line))
            .collect())
    }
}
