use chrono::{NaiveDate, Utc};
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::{CompetitionFormat, CompetitionRow};

#[derive(Debug, Clone)]
pub struct CreateCompetition {
    pub organization_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub format: CompetitionFormat,
    pub start_date: Option<NaiveDate>,
    pub points_win: u32,
    pub points_draw: u32,
    pub points_loss: u32,
}

pub async fn create<'e>(
    executor: impl SqliteExecutor<'e>,
    data: CreateCompetition,
) -> StoreResult<CompetitionRow> {
    if data.name.trim().is_empty() {
        return Err(StoreError::Constraint(
            "competition name must not be empty".into(),
        ));
    }

    let now = Utc::now();
    let row = sqlx::query_as::<_, CompetitionRow>(
        r#"
        INSERT INTO competitions (
            id, organization_id, name, description, format, start_date,
            points_win, points_draw, points_loss, created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, organization_id, name, description, format, start_date,
                  points_win, points_draw, points_loss, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(data.organization_id)
    .bind(data.name)
    .bind(data.description)
    .bind(data.format.as_str())
    .bind(data.start_date)
    .bind(data.points_win)
    .bind(data.points_draw)
    .bind(data.points_loss)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(row)
}

pub async fn get_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
) -> StoreResult<Option<CompetitionRow>> {
    let row = sqlx::query_as::<_, CompetitionRow>(
        r#"
        SELECT id, organization_id, name, description, format, start_date,
               points_win, points_draw, points_loss, created_at, updated_at
        FROM competitions
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

/// Fetch a competition or fail with `NotFound`.
pub async fn require<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> StoreResult<CompetitionRow> {
    get_by_id(executor, id).await?.ok_or(StoreError::NotFound {
        entity: "competition",
        id,
    })
}

pub async fn list_by_organization<'e>(
    executor: impl SqliteExecutor<'e>,
    organization_id: Uuid,
) -> StoreResult<Vec<CompetitionRow>> {
    let rows = sqlx::query_as::<_, CompetitionRow>(
        r#"
        SELECT id, organization_id, name, description, format, start_date,
               points_win, points_draw, points_loss, created_at, updated_at
        FROM competitions
        WHERE organization_id = ?
        ORDER BY name ASC
        "#,
    )
    .bind(organization_id)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}
