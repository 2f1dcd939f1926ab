use async_graphql::{Request, Variables};
use chrono::NaiveDate;
use league_api::gql::schema::LeagueSchema;
use league_api::{AppState, ServerConfig};
use league_infra::models::{CompetitionFormat, MatchRow};
use league_infra::repos::{
    competitions, groups, matches, players, teams, CreateCompetition, CreateGroup, CreateMatch,
    CreatePlayer, CreateTeam,
};
use uuid::Uuid;

/// Fresh in-memory database per test; nothing is shared between tests.
pub async fn setup_state() -> AppState {
    let pool = league_infra::connect_in_memory()
        .await
        .expect("Failed to open test database");
    AppState::new(pool, ServerConfig::default())
}

/// Helper function to execute GraphQL queries and mutations
#[allow(dead_code)]
pub async fn execute_graphql(
    schema: &LeagueSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

#[allow(dead_code)]
pub fn season_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 4).unwrap()
}

/// Create a 3/1/0 league starting on [`season_start`] and return its ID
#[allow(dead_code)]
pub async fn create_test_competition(app_state: &AppState, name: &str) -> Uuid {
    competitions::create(
        &app_state.db,
        CreateCompetition {
            organization_id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            format: CompetitionFormat::League,
            start_date: Some(season_start()),
            points_win: 3,
            points_draw: 1,
            points_loss: 0,
        },
    )
    .await
    .expect("Failed to create test competition")
    .id
}

#[allow(dead_code)]
pub async fn create_test_team(app_state: &AppState, competition_id: Uuid, name: &str) -> Uuid {
    teams::create(
        &app_state.db,
        CreateTeam {
            competition_id,
            name: name.to_string(),
            short_name: None,
        },
    )
    .await
    .expect("Failed to create test team")
    .id
}

#[allow(dead_code)]
pub async fn create_test_teams(app_state: &AppState, competition_id: Uuid, names: &[&str]) -> Vec<Uuid> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        ids.push(create_test_team(app_state, competition_id, name).await);
    }
    ids
}

#[allow(dead_code)]
pub async fn create_test_group(app_state: &AppState, competition_id: Uuid, name: &str) -> Uuid {
    groups::create(
        &app_state.db,
        CreateGroup {
            competition_id,
            name: name.to_string(),
        },
    )
    .await
    .expect("Failed to create test group")
    .id
}

#[allow(dead_code)]
pub async fn create_test_player(app_state: &AppState, team_id: Uuid, name: &str) -> Uuid {
    players::create(
        &app_state.db,
        CreatePlayer {
            team_id,
            name: name.to_string(),
            shirt_number: None,
        },
    )
    .await
    .expect("Failed to create test player")
    .id
}

#[allow(dead_code)]
pub async fn create_test_matches(app_state: &AppState, rows: Vec<CreateMatch>) -> Vec<MatchRow> {
    let mut conn = app_state
        .db
        .acquire()
        .await
        .expect("Failed to acquire test connection");
    matches::create_many(&mut conn, rows)
        .await
        .expect("Failed to create test matches")
}
