use uuid::Uuid;

use league_core::{EventKind, MatchStatus};
use league_infra::models::{MatchEventRow, MatchRow};
use league_infra::repos::{match_events, matches, players, CreateMatchEvent};
use league_infra::StoreError;
use sqlx::{SqliteExecutor, SqlitePool};

use crate::gql::error::GqlError;

/// Parameters for recording an event (parsed and range-checked by the resolver).
pub struct EventParams {
    pub match_id: Uuid,
    pub kind: EventKind,
    pub team_id: Option<Uuid>,
    pub player_id: Option<Uuid>,
    pub sub_in_player_id: Option<Uuid>,
    pub minute: Option<u32>,
}

async fn get_match<'e>(
    executor: impl SqliteExecutor<'e>,
    match_id: Uuid,
) -> Result<MatchRow, GqlError> {
    matches::get_by_id(executor, match_id)
        .await?
        .ok_or(GqlError::Store(StoreError::NotFound {
            entity: "match",
            id: match_id,
        }))
}

/// A player referenced by an event must exist and, when the event names a
/// team, play for it.
async fn check_player(
    db: &SqlitePool,
    player_id: Uuid,
    team_id: Option<Uuid>,
) -> Result<(), GqlError> {
    let player = players::get_by_id(db, player_id)
        .await?
        .ok_or_else(|| GqlError::new("Player not found"))?;

    if team_id.is_some_and(|team_id| player.team_id != team_id) {
        return Err(GqlError::new(
            "Player does not belong to the specified team",
        ));
    }
    Ok(())
}

/// Validate an event against its match and append it to the log.
pub async fn record_event(db: &SqlitePool, params: EventParams) -> Result<MatchEventRow, GqlError> {
    if params.kind == EventKind::Unknown {
        return Err(GqlError::new("Unsupported event type"));
    }
    if params.sub_in_player_id.is_some() && params.kind != EventKind::Substitution {
        return Err(GqlError::new(
            "subInPlayerId is only valid for substitutions",
        ));
    }

    let fixture = get_match(db, params.match_id).await?;

    if let Some(team_id) = params.team_id {
        if team_id != fixture.home_team_id && team_id != fixture.away_team_id {
            return Err(GqlError::new(
                "teamId must be one of the match's home or away team",
            ));
        }
    }
    if let Some(player_id) = params.player_id {
        check_player(db, player_id, params.team_id).await?;
    }
    if let Some(sub_in) = params.sub_in_player_id {
        check_player(db, sub_in, params.team_id).await?;
    }

    let row = match_events::create(
        db,
        CreateMatchEvent {
            match_id: params.match_id,
            kind: params.kind,
            team_id: params.team_id,
            player_id: params.player_id,
            sub_in_player_id: params.sub_in_player_id,
            minute: params.minute,
        },
    )
    .await?;

    tracing::debug!(match_id = %row.match_id, kind = row.kind.as_str(), "match event recorded");
    Ok(row)
}

/// Move a match along its lifecycle.
pub async fn transition_status(
    db: &SqlitePool,
    match_id: Uuid,
    to: MatchStatus,
) -> Result<MatchRow, GqlError> {
    let mut tx = db.begin().await?;

    let current = get_match(&mut *tx, match_id).await?;
    let next = current.status.transition(to)?;
    let updated = matches::update_status(&mut *tx, match_id, next).await?;
    tx.commit().await?;

    tracing::info!(%match_id, from = %current.status, to = %next, "match status changed");
    Ok(updated)
}

/// Scores may only change while the match is being played.
pub async fn update_score(
    db: &SqlitePool,
    match_id: Uuid,
    home_score: u32,
    away_score: u32,
) -> Result<MatchRow, GqlError> {
    let mut tx = db.begin().await?;

    let current = get_match(&mut *tx, match_id).await?;
    if current.status != MatchStatus::Live {
        return Err(GqlError::new(format!(
            "Cannot update score for match with status \"{}\". Match must be live.",
            current.status
        )));
    }

    let updated = matches::update_score(&mut *tx, match_id, home_score, away_score).await?;
    tx.commit().await?;
    Ok(updated)
}
