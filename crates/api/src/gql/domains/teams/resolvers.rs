use async_graphql::{Context, Object, Result};
use uuid::Uuid;

use league_infra::repos::{players, teams, CreatePlayer, CreateTeam};

use crate::gql::common::helpers::{get_competition, require_name, require_range};
use crate::gql::types::{CreatePlayerInput, CreateTeamInput, Player, Team};
use crate::state::AppState;

#[derive(Default)]
pub struct TeamQuery;

#[Object]
impl TeamQuery {
    /// Teams of a competition in registration order.
    async fn teams(&self, ctx: &Context<'_>, competition_id: Uuid) -> Result<Vec<Team>> {
        let state = ctx.data::<AppState>()?;
        get_competition(&state.db, competition_id).await?;

        Ok(teams::list_by_competition(&state.db, competition_id)
            .await?
            .into_iter()
            .map(Team::from)
            .collect())
    }

    async fn team(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Team>> {
        let state = ctx.data::<AppState>()?;
        Ok(teams::get_by_id(&state.db, id).await?.map(Team::from))
    }

    async fn player(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Player>> {
        let state = ctx.data::<AppState>()?;
        Ok(players::get_by_id(&state.db, id).await?.map(Player::from))
    }
}

#[derive(Default)]
pub struct TeamMutation;

#[Object]
impl TeamMutation {
    async fn create_team(&self, ctx: &Context<'_>, input: CreateTeamInput) -> Result<Team> {
        let state = ctx.data::<AppState>()?;
        let name = require_name("Team name", &input.name)?;

        let row = teams::create(
            &state.db,
            CreateTeam {
                competition_id: input.competition_id,
                name,
                short_name: input.short_name,
            },
        )
        .await?;

        Ok(row.into())
    }

    async fn create_player(&self, ctx: &Context<'_>, input: CreatePlayerInput) -> Result<Player> {
        let state = ctx.data::<AppState>()?;
        let name = require_name("Player name", &input.name)?;
        let shirt_number = input
            .shirt_number
            .map(|n| require_range("shirtNumber", n, 1, 99).map(|n| n as i32))
            .transpose()?;

        let row = players::create(
            &state.db,
            CreatePlayer {
                team_id: input.team_id,
                name,
                shirt_number,
            },
        )
        .await?;

        Ok(row.into())
    }
}
