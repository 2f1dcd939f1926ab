use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use league_core::{EventKind, MatchStatus, PointsRule, Team};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use uuid::Uuid;

/// Decode a TEXT column into one of the string-backed enums.
fn text_column<T>(row: &SqliteRow, column: &str) -> sqlx::Result<T>
where
    T: FromStr<Err = String>,
{
    let raw: String = row.try_get(column)?;
    raw.parse().map_err(|e: String| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: e.into(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionFormat {
    League,
    Knockout,
    GroupKnockout,
}

impl CompetitionFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionFormat::League => "league",
            CompetitionFormat::Knockout => "knockout",
            CompetitionFormat::GroupKnockout => "group_knockout",
        }
    }
}

impl FromStr for CompetitionFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "league" => Ok(CompetitionFormat::League),
            "knockout" => Ok(CompetitionFormat::Knockout),
            "group_knockout" => Ok(CompetitionFormat::GroupKnockout),
            _ => Err(format!("Unknown competition format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub format: CompetitionFormat,
    pub start_date: Option<NaiveDate>,
    pub points_win: u32,
    pub points_draw: u32,
    pub points_loss: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, SqliteRow> for CompetitionRow {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            organization_id: row.try_get("organization_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            format: text_column(row, "format")?,
            start_date: row.try_get("start_date")?,
            points_win: row.try_get("points_win")?,
            points_draw: row.try_get("points_draw")?,
            points_loss: row.try_get("points_loss")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl CompetitionRow {
    pub fn points_rule(&self) -> PointsRule {
        PointsRule {
            win: self.points_win,
            draw: self.points_draw,
            loss: self.points_loss,
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GroupRow {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub name: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GroupTeamRow {
    pub group_id: Uuid,
    pub team_id: Uuid,
    pub seed: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TeamRow {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub name: String,
    pub short_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&TeamRow> for Team {
    fn from(row: &TeamRow) -> Self {
        Team::new(row.id, row.name.clone())
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub shirt_number: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub group_id: Option<Uuid>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub round: u32,
    pub scheduled_date: Option<NaiveDate>,
    pub venue: Option<String>,
    pub status: MatchStatus,
    pub home_score: u32,
    pub away_score: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, SqliteRow> for MatchRow {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            competition_id: row.try_get("competition_id")?,
            group_id: row.try_get("group_id")?,
            home_team_id: row.try_get("home_team_id")?,
            away_team_id: row.try_get("away_team_id")?,
            round: row.try_get("round")?,
            scheduled_date: row.try_get("scheduled_date")?,
            venue: row.try_get("venue")?,
            status: text_column(row, "status")?,
            home_score: row.try_get("home_score")?,
            away_score: row.try_get("away_score")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEventRow {
    pub id: Uuid,
    pub match_id: Uuid,
    pub kind: EventKind,
    pub team_id: Option<Uuid>,
    pub player_id: Option<Uuid>,
    pub sub_in_player_id: Option<Uuid>,
    pub minute: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, SqliteRow> for MatchEventRow {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let kind: String = row.try_get("kind")?;
        Ok(Self {
            id: row.try_get("id")?,
            match_id: row.try_get("match_id")?,
            kind: EventKind::from(kind.as_str()),
            team_id: row.try_get("team_id")?,
            player_id: row.try_get("player_id")?,
            sub_in_player_id: row.try_get("sub_in_player_id")?,
            minute: row.try_get("minute")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl From<&MatchEventRow> for league_core::MatchEvent {
    fn from(row: &MatchEventRow) -> Self {
        league_core::MatchEvent {
            kind: row.kind,
            player_id: row.player_id,
            team_id: row.team_id,
            sub_in_player_id: row.sub_in_player_id,
        }
    }
}
