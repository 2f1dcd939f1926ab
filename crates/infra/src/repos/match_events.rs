use chrono::Utc;
use league_core::EventKind;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::MatchEventRow;

#[derive(Debug, Clone)]
pub struct CreateMatchEvent {
    pub match_id: Uuid,
    pub kind: EventKind,
    pub team_id: Option<Uuid>,
    pub player_id: Option<Uuid>,
    pub sub_in_player_id: Option<Uuid>,
    pub minute: Option<u32>,
}

/// Append an event to a match's log. Events are never updated in place.
pub async fn create<'e>(
    executor: impl SqliteExecutor<'e>,
    data: CreateMatchEvent,
) -> StoreResult<MatchEventRow> {
    let row = sqlx::query_as::<_, MatchEventRow>(
        r#"
        INSERT INTO match_events (
            id, match_id, kind, team_id, player_id, sub_in_player_id, minute, created_at
        )
        SELECT ?, m.id, ?, ?, ?, ?, ?, ?
        FROM matches m
        WHERE m.id = ?
        RETURNING id, match_id, kind, team_id, player_id, sub_in_player_id, minute, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(data.kind.as_str())
    .bind(data.team_id)
    .bind(data.player_id)
    .bind(data.sub_in_player_id)
    .bind(data.minute)
    .bind(Utc::now())
    .bind(data.match_id)
    .fetch_optional(executor)
    .await?;

    row.ok_or(StoreError::NotFound {
        entity: "match",
        id: data.match_id,
    })
}

/// Events of one match ordered by minute; events without a minute keep
/// their recording order at the end.
pub async fn list_by_match<'e>(
    executor: impl SqliteExecutor<'e>,
    match_id: Uuid,
) -> StoreResult<Vec<MatchEventRow>> {
    let rows = sqlx::query_as::<_, MatchEventRow>(
        r#"
        SELECT id, match_id, kind, team_id, player_id, sub_in_player_id, minute, created_at
        FROM match_events
        WHERE match_id = ?
        ORDER BY minute IS NULL, minute ASC, rowid ASC
        "#,
    )
    .bind(match_id)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

/// Every event logged for any match of a competition.
pub async fn list_by_competition<'e>(
    executor: impl SqliteExecutor<'e>,
    competition_id: Uuid,
) -> StoreResult<Vec<MatchEventRow>> {
    let rows = sqlx::query_as::<_, MatchEventRow>(
        r#"
        SELECT e.id, e.match_id, e.kind, e.team_id, e.player_id, e.sub_in_player_id,
               e.minute, e.created_at
        FROM match_events e
        JOIN matches m ON m.id = e.match_id
        WHERE m.competition_id = ?
        ORDER BY e.rowid ASC
        "#,
    )
    .bind(competition_id)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

/// Every event naming `player_id`, as scorer, booked player or substitute.
pub async fn list_by_player<'e>(
    executor: impl SqliteExecutor<'e>,
    player_id: Uuid,
) -> StoreResult<Vec<MatchEventRow>> {
    let rows = sqlx::query_as::<_, MatchEventRow>(
        r#"
        SELECT id, match_id, kind, team_id, player_id, sub_in_player_id, minute, created_at
        FROM match_events
        WHERE player_id = ? OR sub_in_player_id = ?
        ORDER BY rowid ASC
        "#,
    )
    .bind(player_id)
    .bind(player_id)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}
