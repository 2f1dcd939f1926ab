use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use league_core::{MatchResult, MatchStatus};
use league_infra::repos::{matches, MatchFilter};

use crate::gql::common::helpers::get_competition;
use crate::gql::domains::fixtures::service::load_teams;
use crate::gql::types::Standing;
use crate::state::AppState;

#[derive(Default)]
pub struct StandingsQuery;

#[Object]
impl StandingsQuery {
    /// League table from completed matches, scored with the competition's
    /// points rule. With a group, only that group's teams and matches count.
    async fn standings(
        &self,
        ctx: &Context<'_>,
        competition_id: Uuid,
        group_id: Option<Uuid>,
    ) -> Result<Vec<Standing>> {
        let state = ctx.data::<AppState>()?;
        let competition = get_competition(&state.db, competition_id).await?;

        let teams = load_teams(&state.db, competition_id, group_id).await?;
        let results: Vec<MatchResult> = matches::list_by_competition(
            &state.db,
            competition_id,
            MatchFilter {
                group_id,
                status: Some(MatchStatus::Completed),
                ..Default::default()
            },
        )
        .await?
        .into_iter()
        .map(|m| MatchResult {
            home_team_id: m.home_team_id,
            away_team_id: m.away_team_id,
            home_score: m.home_score,
            away_score: m.away_score,
        })
        .collect();

        Ok(
            league_core::compute_standings(&teams, &results, competition.points_rule())
                .into_iter()
                .enumerate()
                .map(|(index, row)| Standing::new(index + 1, row))
                .collect(),
        )
    }
}
