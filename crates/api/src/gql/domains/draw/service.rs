use uuid::Uuid;

use league_core::{LeagueError, ManualSeed, Team};
use league_infra::models::GroupTeamRow;
use league_infra::repos::{groups, teams, CreateGroupTeam};
use sqlx::SqlitePool;

use crate::gql::error::GqlError;

/// A manual seed as entered, before group ids are resolved.
pub struct SeedParams {
    pub team_id: Uuid,
    pub group_id: Uuid,
    pub seed: i32,
}

pub enum DrawParams {
    Random,
    Manual(Vec<SeedParams>),
}

/// Replace the group assignments of a competition.
///
/// The previous assignments are cleared and the new ones written in the same
/// transaction, so a rejected draw leaves the old one in place.
pub async fn execute_draw(
    db: &SqlitePool,
    competition_id: Uuid,
    params: DrawParams,
) -> Result<Vec<GroupTeamRow>, GqlError> {
    let group_rows = groups::list_by_competition(db, competition_id).await?;
    if group_rows.is_empty() {
        return Err(GqlError::new(
            "No groups found for this competition. Create groups first.",
        ));
    }
    let group_ids: Vec<Uuid> = group_rows.iter().map(|g| g.id).collect();

    let team_rows = teams::list_by_competition(db, competition_id).await?;
    let teams: Vec<Team> = team_rows.iter().map(Team::from).collect();

    let assignments = match params {
        DrawParams::Random => {
            if teams.is_empty() {
                return Err(GqlError::new("No teams found for this competition"));
            }
            league_core::random_draw(&teams, group_ids.len())
        }
        DrawParams::Manual(seeds) => {
            if seeds.is_empty() {
                return Err(GqlError::new("Seeds array is required for manual draw"));
            }
            let seeds = seeds
                .into_iter()
                .map(|s| resolve_seed(&group_ids, s))
                .collect::<Result<Vec<_>, _>>()?;
            league_core::manual_draw(&teams, group_ids.len(), &seeds)?
        }
    };

    let rows: Vec<CreateGroupTeam> = assignments
        .into_iter()
        .map(|a| CreateGroupTeam {
            group_id: group_ids[a.group_index],
            team_id: a.team_id,
            seed: a.seed,
        })
        .collect();

    let mut tx = db.begin().await?;
    let cleared = groups::clear_assignments(&mut *tx, &group_ids).await?;
    let inserted = groups::insert_assignments(&mut tx, rows).await?;
    tx.commit().await?;

    tracing::info!(
        %competition_id,
        cleared,
        assigned = inserted.len(),
        "draw completed"
    );

    Ok(inserted)
}

fn resolve_seed(group_ids: &[Uuid], seed: SeedParams) -> Result<ManualSeed, GqlError> {
    let group_index = group_ids
        .iter()
        .position(|id| *id == seed.group_id)
        .ok_or_else(|| {
            GqlError::new(format!(
                "Group {} is not part of this competition",
                seed.group_id
            ))
        })?;
    let rank = u32::try_from(seed.seed).map_err(|_| LeagueError::InvalidSeed)?;

    Ok(ManualSeed {
        team_id: seed.team_id,
        group_index,
        seed: rank,
    })
}
