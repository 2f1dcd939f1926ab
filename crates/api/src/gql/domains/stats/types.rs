use async_graphql::{ComplexObject, Context, SimpleObject, ID};
use uuid::Uuid;

use league_core::PlayerStatLine;
use league_infra::repos::players;

use crate::gql::domains::teams::types::Player;
use crate::gql::error::ResultExt;
use crate::state::AppState;

/// Totals rebuilt from the event log at query time.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct PlayerStats {
    pub player_id: ID,
    pub goals: i32,
    pub assists: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub appearances: i32,
}

impl PlayerStats {
    pub fn new(player_id: Uuid, line: PlayerStatLine) -> Self {
        Self {
            player_id: player_id.into(),
            goals: line.goals as i32,
            assists: line.assists as i32,
            yellow_cards: line.yellow_cards as i32,
            red_cards: line.red_cards as i32,
            appearances: line.appearances as i32,
        }
    }
}

#[ComplexObject]
impl PlayerStats {
    async fn player(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Player>> {
        let state = ctx.data::<AppState>()?;
        let player_id = Uuid::parse_str(self.player_id.as_str()).gql_err("Invalid player ID")?;
        Ok(players::get_by_id(&state.db, player_id)
            .await?
            .map(Player::from))
    }
}
