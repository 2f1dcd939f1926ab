use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqliteExecutor};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::TeamRow;

#[derive(Debug, Clone)]
pub struct CreateTeam {
    pub competition_id: Uuid,
    pub name: String,
    pub short_name: Option<String>,
}

pub async fn create<'e>(executor: impl SqliteExecutor<'e>, data: CreateTeam) -> StoreResult<TeamRow> {
    let row = sqlx::query_as::<_, TeamRow>(
        r#"
        INSERT INTO teams (id, competition_id, name, short_name, created_at)
        SELECT ?, c.id, ?, ?, ?
        FROM competitions c
        WHERE c.id = ?
        RETURNING id, competition_id, name, short_name, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&data.name)
    .bind(data.short_name)
    .bind(Utc::now())
    .bind(data.competition_id)
    .fetch_optional(executor)
    .await
    .map_err(|e| match StoreError::from(e) {
        StoreError::Constraint(_) => StoreError::Constraint(format!(
            "a team named \"{}\" already exists in this competition",
            data.name
        )),
        other => other,
    })?;

    row.ok_or(StoreError::NotFound {
        entity: "competition",
        id: data.competition_id,
    })
}

pub async fn get_by_id<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> StoreResult<Option<TeamRow>> {
    let row = sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT id, competition_id, name, short_name, created_at
        FROM teams
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

pub async fn get_many<'e>(executor: impl SqliteExecutor<'e>, ids: &[Uuid]) -> StoreResult<Vec<TeamRow>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT id, competition_id, name, short_name, created_at FROM teams WHERE id IN (",
    );
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(") ORDER BY rowid ASC");

    let rows = query.build_query_as::<TeamRow>().fetch_all(executor).await?;
    Ok(rows)
}

/// Teams of a competition in registration order.
pub async fn list_by_competition<'e>(
    executor: impl SqliteExecutor<'e>,
    competition_id: Uuid,
) -> StoreResult<Vec<TeamRow>> {
    let rows = sqlx::query_as::<_, TeamRow>(
        r#"
        SELECT id, competition_id, name, short_name, created_at
        FROM teams
        WHERE competition_id = ?
        ORDER BY rowid ASC
        "#,
    )
    .bind(competition_id)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}
