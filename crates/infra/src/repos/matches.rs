use chrono::{NaiveDate, Utc};
use league_core::MatchStatus;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqliteExecutor};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::MatchRow;

const MATCH_COLUMNS: &str = "id, competition_id, group_id, home_team_id, away_team_id, round, \
     scheduled_date, venue, status, home_score, away_score, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct CreateMatch {
    pub competition_id: Uuid,
    pub group_id: Option<Uuid>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub round: u32,
    pub scheduled_date: Option<NaiveDate>,
    pub venue: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub group_id: Option<Uuid>,
    pub round: Option<u32>,
    pub status: Option<MatchStatus>,
    pub team_id: Option<Uuid>,
}

impl MatchFilter {
    fn push_conditions(&self, query: &mut QueryBuilder<'_, Sqlite>) {
        if let Some(group_id) = self.group_id {
            query.push(" AND group_id = ").push_bind(group_id);
        }
        if let Some(round) = self.round {
            query.push(" AND round = ").push_bind(round);
        }
        if let Some(status) = self.status {
            query.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(team_id) = self.team_id {
            query
                .push(" AND (home_team_id = ")
                .push_bind(team_id)
                .push(" OR away_team_id = ")
                .push_bind(team_id)
                .push(")");
        }
    }
}

async fn check_team(conn: &mut SqliteConnection, competition_id: Uuid, team_id: Uuid) -> StoreResult<()> {
    let owner: Option<(Uuid,)> = sqlx::query_as("SELECT competition_id FROM teams WHERE id = ?")
        .bind(team_id)
        .fetch_optional(conn)
        .await?;

    match owner {
        None => Err(StoreError::NotFound {
            entity: "team",
            id: team_id,
        }),
        Some((owner,)) if owner != competition_id => Err(StoreError::Constraint(format!(
            "team {team_id} does not belong to competition {competition_id}"
        ))),
        Some(_) => Ok(()),
    }
}

/// Insert a batch of upcoming matches. Every row is validated before any is
/// written.
pub async fn create_many(conn: &mut SqliteConnection, rows: Vec<CreateMatch>) -> StoreResult<Vec<MatchRow>> {
    for data in &rows {
        if data.home_team_id == data.away_team_id {
            return Err(StoreError::Constraint(
                "home and away teams must be different".into(),
            ));
        }
        check_team(&mut *conn, data.competition_id, data.home_team_id).await?;
        check_team(&mut *conn, data.competition_id, data.away_team_id).await?;
    }

    let now = Utc::now();
    let mut created = Vec::with_capacity(rows.len());
    for data in rows {
        let row = sqlx::query_as::<_, MatchRow>(&format!(
            r#"
            INSERT INTO matches (
                id, competition_id, group_id, home_team_id, away_team_id, round,
                scheduled_date, venue, status, home_score, away_score, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 0, 0, ?, ?)
            RETURNING {MATCH_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(data.competition_id)
        .bind(data.group_id)
        .bind(data.home_team_id)
        .bind(data.away_team_id)
        .bind(data.round)
        .bind(data.scheduled_date)
        .bind(data.venue)
        .bind(MatchStatus::Upcoming.as_str())
        .bind(now)
        .bind(now)
        .fetch_one(&mut *conn)
        .await?;
        created.push(row);
    }

    Ok(created)
}

pub async fn get_by_id<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> StoreResult<Option<MatchRow>> {
    let row = sqlx::query_as::<_, MatchRow>(&format!(
        "SELECT {MATCH_COLUMNS} FROM matches WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(row)
}

/// Matches of a competition ordered by round, then scheduling order.
pub async fn list_by_competition<'e>(
    executor: impl SqliteExecutor<'e>,
    competition_id: Uuid,
    filter: MatchFilter,
) -> StoreResult<Vec<MatchRow>> {
    let mut query = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {MATCH_COLUMNS} FROM matches WHERE competition_id = "
    ));
    query.push_bind(competition_id);
    filter.push_conditions(&mut query);
    query.push(" ORDER BY round ASC, rowid ASC");

    let rows = query.build_query_as::<MatchRow>().fetch_all(executor).await?;
    Ok(rows)
}

/// Delete matches; their event logs go with them. Returns how many matches
/// went away.
pub async fn delete_many<'e>(executor: impl SqliteExecutor<'e>, ids: &[Uuid]) -> StoreResult<u64> {
    if ids.is_empty() {
        return Ok(0);
    }

    let mut query = QueryBuilder::<Sqlite>::new("DELETE FROM matches WHERE id IN (");
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    let result = query.build().execute(executor).await?;
    Ok(result.rows_affected())
}

pub async fn update_status<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
    status: MatchStatus,
) -> StoreResult<MatchRow> {
    let row = sqlx::query_as::<_, MatchRow>(&format!(
        "UPDATE matches SET status = ?, updated_at = ? WHERE id = ? RETURNING {MATCH_COLUMNS}"
    ))
    .bind(status.as_str())
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(executor)
    .await?;

    row.ok_or(StoreError::NotFound { entity: "match", id })
}

pub async fn update_score<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
    home_score: u32,
    away_score: u32,
) -> StoreResult<MatchRow> {
    let row = sqlx::query_as::<_, MatchRow>(&format!(
        r#"
        UPDATE matches
        SET home_score = ?, away_score = ?, updated_at = ?
        WHERE id = ?
        RETURNING {MATCH_COLUMNS}
        "#
    ))
    .bind(home_score)
    .bind(away_score)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(executor)
    .await?;

    row.ok_or(StoreError::NotFound { entity: "match", id })
}
