mod common;

use std::collections::HashMap;

use async_graphql::Variables;
use league_api::gql::build_schema;
use league_infra::repos::groups;
use serde_json::json;
use uuid::Uuid;

use common::*;

const EXECUTE_DRAW: &str = r#"
    mutation Draw($input: ExecuteDrawInput!) {
        executeDraw(input: $input) {
            method
            count
            assignments { groupId teamId seed }
        }
    }
"#;

fn random_draw_vars(competition_id: Uuid) -> Variables {
    Variables::from_json(json!({
        "input": {
            "competitionId": competition_id.to_string(),
            "method": "RANDOM"
        }
    }))
}

#[tokio::test]
async fn test_random_draw_balances_groups() {
    let app_state = setup_state().await;
    let schema = build_schema(app_state.clone());
    let competition_id = create_test_competition(&app_state, "Group Stage").await;
    let group_a = create_test_group(&app_state, competition_id, "Group A").await;
    let group_b = create_test_group(&app_state, competition_id, "Group B").await;
    create_test_teams(
        &app_state,
        competition_id,
        &["A", "B", "C", "D", "E", "F", "G", "H"],
    ).await;

    let response = execute_graphql(&schema, EXECUTE_DRAW, Some(random_draw_vars(competition_id))).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(data["executeDraw"]["count"], 8);
    assert_eq!(data["executeDraw"]["method"], "RANDOM");

    let stored = groups::list_assignments(&app_state.db, competition_id).await.unwrap();
    let mut per_group: HashMap<Uuid, Vec<u32>> = HashMap::new();
    for row in &stored {
        per_group.entry(row.group_id).or_default().push(row.seed);
    }
    assert_eq!(per_group[&group_a], vec![1, 2, 3, 4]);
    assert_eq!(per_group[&group_b], vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_second_draw_replaces_first() {
    let app_state = setup_state().await;
    let schema = build_schema(app_state.clone());
    let competition_id = create_test_competition(&app_state, "Redraw").await;
    create_test_group(&app_state, competition_id, "Group A").await;
    create_test_group(&app_state, competition_id, "Group B").await;
    create_test_group(&app_state, competition_id, "Group C").await;
    create_test_teams(&app_state, competition_id, &["A", "B", "C", "D", "E", "F", "G"]).await;

    for _ in 0..2 {
        let response =
            execute_graphql(&schema, EXECUTE_DRAW, Some(random_draw_vars(competition_id))).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
    }

    let stored = groups::list_assignments(&app_state.db, competition_id).await.unwrap();
    assert_eq!(stored.len(), 7);
    let mut seeds: Vec<u32> = stored.iter().map(|row| row.seed).collect();
    seeds.sort();
    assert_eq!(seeds, vec![1, 1, 1, 2, 2, 2, 3]);
}

#[tokio::test]
async fn test_draw_without_groups_fails() {
    let app_state = setup_state().await;
    let schema = build_schema(app_state.clone());
    let competition_id = create_test_competition(&app_state, "No Groups").await;
    create_test_teams(&app_state, competition_id, &["A", "B"]).await;

    let response = execute_graphql(&schema, EXECUTE_DRAW, Some(random_draw_vars(competition_id))).await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(
        response.errors[0].message,
        "No groups found for this competition. Create groups first."
    );
}

#[tokio::test]
async fn test_random_draw_without_teams_fails() {
    let app_state = setup_state().await;
    let schema = build_schema(app_state.clone());
    let competition_id = create_test_competition(&app_state, "No Teams").await;
    create_test_group(&app_state, competition_id, "Group A").await;

    let response = execute_graphql(&schema, EXECUTE_DRAW, Some(random_draw_vars(competition_id))).await;
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "No teams found for this competition");
}

#[tokio::test]
async fn test_manual_draw_uses_given_seeds() {
    let app_state = setup_state().await;
    let schema = build_schema(app_state.clone());
    let competition_id = create_test_competition(&app_state, "Manual").await;
    let group_a = create_test_group(&app_state, competition_id, "Group A").await;
    let group_b = create_test_group(&app_state, competition_id, "Group B").await;
    let ids = create_test_teams(&app_state, competition_id, &["A", "B", "C"]).await;

    let variables = Variables::from_json(json!({
        "input": {
            "competitionId": competition_id.to_string(),
            "method": "MANUAL",
            "seeds": [
                { "teamId": ids[0].to_string(), "groupId": group_b.to_string(), "seed": 1 },
                { "teamId": ids[1].to_string(), "groupId": group_a.to_string(), "seed": 1 },
                { "teamId": ids[2].to_string(), "groupId": group_a.to_string(), "seed": 2 }
            ]
        }
    }));

    let response = execute_graphql(&schema, EXECUTE_DRAW, Some(variables)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let stored = groups::list_assignments(&app_state.db, competition_id).await.unwrap();
    let placed: Vec<(Uuid, Uuid, u32)> = stored
        .iter()
        .map(|row| (row.group_id, row.team_id, row.seed))
        .collect();
    assert_eq!(
        placed,
        vec![(group_a, ids[1], 1), (group_a, ids[2], 2), (group_b, ids[0], 1)]
    );
}

#[tokio::test]
async fn test_rejected_manual_draw_keeps_previous_assignments() {
    let app_state = setup_state().await;
    let schema = build_schema(app_state.clone());
    let competition_id = create_test_competition(&app_state, "Keep").await;
    let group_a = create_test_group(&app_state, competition_id, "Group A").await;
    let ids = create_test_teams(&app_state, competition_id, &["A", "B"]).await;

    let first = execute_graphql(&schema, EXECUTE_DRAW, Some(random_draw_vars(competition_id))).await;
    assert!(first.errors.is_empty(), "{:?}", first.errors);

    let variables = Variables::from_json(json!({
        "input": {
            "competitionId": competition_id.to_string(),
            "method": "MANUAL",
            "seeds": [
                { "teamId": ids[0].to_string(), "groupId": group_a.to_string(), "seed": 1 },
                { "teamId": ids[0].to_string(), "groupId": group_a.to_string(), "seed": 2 }
            ]
        }
    }));
    let response = execute_graphql(&schema, EXECUTE_DRAW, Some(variables)).await;
    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("more than once"));

    assert_eq!(groups::list_assignments(&app_state.db, competition_id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_manual_draw_validation() {
    let app_state = setup_state().await;
    let schema = build_schema(app_state.clone());
    let competition_id = create_test_competition(&app_state, "Validation").await;
    let group_a = create_test_group(&app_state, competition_id, "Group A").await;
    let ids = create_test_teams(&app_state, competition_id, &["A"]).await;

    let cases = [
        (json!([]), "Seeds array is required for manual draw"),
        (
            json!([{ "teamId": Uuid::new_v4().to_string(), "groupId": group_a.to_string(), "seed": 1 }]),
            "is not part of this competition",
        ),
        (
            json!([{ "teamId": ids[0].to_string(), "groupId": Uuid::new_v4().to_string(), "seed": 1 }]),
            "is not part of this competition",
        ),
        (
            json!([{ "teamId": ids[0].to_string(), "groupId": group_a.to_string(), "seed": 0 }]),
            "seed must be at least 1",
        ),
    ];

    for (seeds, expected) in cases {
        let variables = Variables::from_json(json!({
            "input": {
                "competitionId": competition_id.to_string(),
                "method": "MANUAL",
                "seeds": seeds
            }
        }));
        let response = execute_graphql(&schema, EXECUTE_DRAW, Some(variables)).await;
        assert_eq!(response.errors.len(), 1, "expected failure for {expected}");
        assert!(
            response.errors[0].message.contains(expected),
            "{} should contain {expected}",
            response.errors[0].message
        );
    }
}
