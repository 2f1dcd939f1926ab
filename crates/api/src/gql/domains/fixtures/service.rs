use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use league_core::{Bracket, MatchStatus, Round, Team};
use league_infra::models::MatchRow;
use league_infra::repos::{competitions, groups, matches, teams, CreateMatch, MatchFilter};
use sqlx::SqlitePool;

use crate::gql::error::GqlError;
use crate::gql::types::FixtureFormat;

/// Parameters shared by fixture previews and generation (parsed by the resolver).
pub struct FixtureParams {
    pub competition_id: Uuid,
    pub group_id: Option<Uuid>,
    pub format: FixtureFormat,
    pub start_date: Option<NaiveDate>,
    pub interval_days: u32,
    pub legs: u32,
}

pub struct GeneratedFixtures {
    pub created: Vec<MatchRow>,
    pub replaced: usize,
}

/// The teams a schedule is built for: a group's teams by seed, or every
/// team of the competition in registration order.
pub async fn load_teams(
    db: &SqlitePool,
    competition_id: Uuid,
    group_id: Option<Uuid>,
) -> Result<Vec<Team>, GqlError> {
    let Some(group_id) = group_id else {
        return Ok(teams::list_by_competition(db, competition_id)
            .await?
            .iter()
            .map(Team::from)
            .collect());
    };

    if !groups::list_by_competition(db, competition_id)
        .await?
        .iter()
        .any(|g| g.id == group_id)
    {
        return Err(GqlError::new("Group not found in this competition"));
    }

    let team_ids: Vec<Uuid> = groups::list_assignments(db, competition_id)
        .await?
        .into_iter()
        .filter(|gt| gt.group_id == group_id)
        .map(|gt| gt.team_id)
        .collect();
    let rows = teams::get_many(db, &team_ids).await?;

    Ok(team_ids
        .iter()
        .filter_map(|id| rows.iter().find(|row| row.id == *id))
        .map(Team::from)
        .collect())
}

async fn start_date(db: &SqlitePool, params: &FixtureParams) -> Result<NaiveDate, GqlError> {
    let competition = competitions::require(db, params.competition_id).await?;
    Ok(params
        .start_date
        .or(competition.start_date)
        .unwrap_or_else(|| Utc::now().date_naive()))
}

/// Lay out the schedule without touching storage.
pub fn plan(teams: &[Team], params: &FixtureParams, start_date: NaiveDate) -> Vec<Round> {
    match params.format {
        FixtureFormat::RoundRobin => league_core::round_robin_rounds(
            teams,
            start_date,
            params.interval_days,
            params.legs,
        ),
        FixtureFormat::Knockout => {
            let fixtures = league_core::generate_knockout(teams, start_date);
            if fixtures.is_empty() {
                return Vec::new();
            }
            let resting = teams
                .iter()
                .find(|team| !fixtures.iter().any(|f| f.involves(team.id)))
                .cloned();
            vec![Round {
                number: 1,
                date: start_date,
                fixtures,
                resting,
            }]
        }
    }
}

pub async fn preview(db: &SqlitePool, params: &FixtureParams) -> Result<Vec<Round>, GqlError> {
    let start = start_date(db, params).await?;
    let teams = load_teams(db, params.competition_id, params.group_id).await?;
    Ok(plan(&teams, params, start))
}

pub async fn preview_bracket(
    db: &SqlitePool,
    competition_id: Uuid,
    group_id: Option<Uuid>,
) -> Result<Bracket, GqlError> {
    competitions::require(db, competition_id).await?;
    let teams = load_teams(db, competition_id, group_id).await?;
    Ok(Bracket::generate(&teams))
}

/// Build and persist the schedule inside a transaction. Dropping `tx` on an
/// early return rolls back the deletions.
///
/// Existing fixtures of the same scope are only replaced when asked, and
/// never once one of them has left the upcoming state.
pub async fn generate(
    db: &SqlitePool,
    params: &FixtureParams,
    replace_existing: bool,
) -> Result<GeneratedFixtures, GqlError> {
    let start = start_date(db, params).await?;
    let teams = load_teams(db, params.competition_id, params.group_id).await?;
    if teams.len() < 2 {
        return Err(GqlError::new(
            "At least 2 teams are required to generate fixtures",
        ));
    }

    let mut tx = db.begin().await?;

    let existing: Vec<MatchRow> = matches::list_by_competition(
        &mut *tx,
        params.competition_id,
        MatchFilter::default(),
    )
    .await?
    .into_iter()
    .filter(|m| m.group_id == params.group_id)
    .collect();

    let mut replaced = 0;
    if !existing.is_empty() {
        if !replace_existing {
            return Err(GqlError::new(
                "Fixtures already exist; set replaceExisting to regenerate them",
            ));
        }
        if existing.iter().any(|m| m.status != MatchStatus::Upcoming) {
            return Err(GqlError::new(
                "Cannot regenerate fixtures after a match has started",
            ));
        }
        let ids: Vec<Uuid> = existing.iter().map(|m| m.id).collect();
        replaced = matches::delete_many(&mut *tx, &ids).await? as usize;
    }

    let rows: Vec<CreateMatch> = plan(&teams, params, start)
        .into_iter()
        .flat_map(|round| round.fixtures)
        .map(|fixture| CreateMatch {
            competition_id: params.competition_id,
            group_id: params.group_id,
            home_team_id: fixture.home.id,
            away_team_id: fixture.away.id,
            round: fixture.round,
            scheduled_date: Some(fixture.scheduled_date),
            venue: Some(fixture.venue),
        })
        .collect();

    let created = matches::create_many(&mut tx, rows).await?;
    tx.commit().await?;

    tracing::info!(
        competition_id = %params.competition_id,
        created = created.len(),
        replaced,
        "fixtures generated"
    );

    Ok(GeneratedFixtures { created, replaced })
}
