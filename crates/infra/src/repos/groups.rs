use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqliteExecutor};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::{GroupRow, GroupTeamRow};

#[derive(Debug, Clone)]
pub struct CreateGroup {
    pub competition_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CreateGroupTeam {
    pub group_id: Uuid,
    pub team_id: Uuid,
    pub seed: u32,
}

/// Groups are numbered in creation order within their competition.
pub async fn create<'e>(executor: impl SqliteExecutor<'e>, data: CreateGroup) -> StoreResult<GroupRow> {
    let row = sqlx::query_as::<_, GroupRow>(
        r#"
        INSERT INTO competition_groups (id, competition_id, name, position, created_at)
        SELECT ?, c.id, ?,
               (SELECT COUNT(*) FROM competition_groups g WHERE g.competition_id = c.id),
               ?
        FROM competitions c
        WHERE c.id = ?
        RETURNING id, competition_id, name, position, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(data.name)
    .bind(Utc::now())
    .bind(data.competition_id)
    .fetch_optional(executor)
    .await?;

    row.ok_or(StoreError::NotFound {
        entity: "competition",
        id: data.competition_id,
    })
}

pub async fn list_by_competition<'e>(
    executor: impl SqliteExecutor<'e>,
    competition_id: Uuid,
) -> StoreResult<Vec<GroupRow>> {
    let rows = sqlx::query_as::<_, GroupRow>(
        r#"
        SELECT id, competition_id, name, position, created_at
        FROM competition_groups
        WHERE competition_id = ?
        ORDER BY position ASC
        "#,
    )
    .bind(competition_id)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

/// Team assignments for every group of a competition, ordered by group
/// position then seed.
pub async fn list_assignments<'e>(
    executor: impl SqliteExecutor<'e>,
    competition_id: Uuid,
) -> StoreResult<Vec<GroupTeamRow>> {
    let rows = sqlx::query_as::<_, GroupTeamRow>(
        r#"
        SELECT gt.group_id, gt.team_id, gt.seed, gt.created_at
        FROM group_teams gt
        JOIN competition_groups g ON g.id = gt.group_id
        WHERE g.competition_id = ?
        ORDER BY g.position ASC, gt.seed ASC
        "#,
    )
    .bind(competition_id)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}

/// Remove every team assignment from the given groups. Returns how many rows
/// were deleted.
pub async fn clear_assignments<'e>(
    executor: impl SqliteExecutor<'e>,
    group_ids: &[Uuid],
) -> StoreResult<u64> {
    if group_ids.is_empty() {
        return Ok(0);
    }

    let mut query = QueryBuilder::<Sqlite>::new("DELETE FROM group_teams WHERE group_id IN (");
    let mut ids = query.separated(", ");
    for id in group_ids {
        ids.push_bind(*id);
    }
    ids.push_unseparated(")");

    let result = query.build().execute(executor).await?;
    Ok(result.rows_affected())
}

/// Stops at the first invalid row; run inside a transaction to keep the batch
/// all-or-nothing.
pub async fn insert_assignments(
    conn: &mut SqliteConnection,
    rows: Vec<CreateGroupTeam>,
) -> StoreResult<Vec<GroupTeamRow>> {
    let now = Utc::now();
    let mut inserted = Vec::with_capacity(rows.len());

    for data in rows {
        let group: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM competition_groups WHERE id = ?")
            .bind(data.group_id)
            .fetch_optional(&mut *conn)
            .await?;
        if group.is_none() {
            return Err(StoreError::NotFound {
                entity: "group",
                id: data.group_id,
            });
        }

        let team: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM teams WHERE id = ?")
            .bind(data.team_id)
            .fetch_optional(&mut *conn)
            .await?;
        if team.is_none() {
            return Err(StoreError::NotFound {
                entity: "team",
                id: data.team_id,
            });
        }

        let row = sqlx::query_as::<_, GroupTeamRow>(
            r#"
            INSERT INTO group_teams (group_id, team_id, seed, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING group_id, team_id, seed, created_at
            "#,
        )
        .bind(data.group_id)
        .bind(data.team_id)
        .bind(data.seed)
        .bind(now)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| match StoreError::from(e) {
            StoreError::Constraint(_) => StoreError::Constraint(format!(
                "team {} is already in group {}",
                data.team_id, data.group_id
            )),
            other => other,
        })?;
        inserted.push(row);
    }

    Ok(inserted)
}
