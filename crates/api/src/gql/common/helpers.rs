use uuid::Uuid;

use league_infra::models::CompetitionRow;
use league_infra::repos::competitions;
use sqlx::SqlitePool;

const MAX_NAME_LEN: usize = 200;

pub async fn get_competition(
    db: &SqlitePool,
    competition_id: Uuid,
) -> async_graphql::Result<CompetitionRow> {
    competitions::get_by_id(db, competition_id)
        .await?
        .ok_or_else(|| async_graphql::Error::new("Competition not found"))
}

/// Trimmed, non-empty name of at most 200 characters.
pub fn require_name(label: &str, value: &str) -> async_graphql::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(async_graphql::Error::new(format!("{label} is required")));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(async_graphql::Error::new(format!(
            "{label} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

pub fn require_range(label: &str, value: i32, min: i32, max: i32) -> async_graphql::Result<u32> {
    if value < min || value > max {
        return Err(async_graphql::Error::new(format!(
            "{label} must be between {min} and {max}"
        )));
    }
    Ok(value as u32)
}
