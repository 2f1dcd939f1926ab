use chrono::Utc;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::PlayerRow;

#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub team_id: Uuid,
    pub name: String,
    pub shirt_number: Option<i32>,
}

pub async fn create<'e>(executor: impl SqliteExecutor<'e>, data: CreatePlayer) -> StoreResult<PlayerRow> {
    let row = sqlx::query_as::<_, PlayerRow>(
        r#"
        INSERT INTO players (id, team_id, name, shirt_number, created_at)
        SELECT ?, t.id, ?, ?, ?
        FROM teams t
        WHERE t.id = ?
        RETURNING id, team_id, name, shirt_number, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(data.name)
    .bind(data.shirt_number)
    .bind(Utc::now())
    .bind(data.team_id)
    .fetch_optional(executor)
    .await?;

    row.ok_or(StoreError::NotFound {
        entity: "team",
        id: data.team_id,
    })
}

pub async fn get_by_id<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> StoreResult<Option<PlayerRow>> {
    let row = sqlx::query_as::<_, PlayerRow>(
        "SELECT id, team_id, name, shirt_number, created_at FROM players WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

pub async fn list_by_team<'e>(executor: impl SqliteExecutor<'e>, team_id: Uuid) -> StoreResult<Vec<PlayerRow>> {
    let rows = sqlx::query_as::<_, PlayerRow>(
        r#"
        SELECT id, team_id, name, shirt_number, created_at
        FROM players
        WHERE team_id = ?
        ORDER BY rowid ASC
        "#,
    )
    .bind(team_id)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}
