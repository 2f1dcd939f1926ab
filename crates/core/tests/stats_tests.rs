use league_core::{
    aggregate_all, aggregate_player_stats, top_scorers, EventKind, MatchEvent, PlayerStatLine,
};
use uuid::Uuid;

fn event(kind: EventKind, player: Uuid) -> MatchEvent {
    MatchEvent::new(kind, player)
}

#[test]
fn counts_only_the_requested_player() {
    let p1 = Uuid::new_v4();
    let p2 = Uuid::new_v4();
    let events = vec![
        event(EventKind::Goal, p1),
        event(EventKind::YellowCard, p1),
        event(EventKind::Goal, p2),
    ];

    assert_eq!(
        aggregate_player_stats(&events, p1),
        PlayerStatLine {
            goals: 1,
            assists: 0,
            yellow_cards: 1,
            red_cards: 0,
            appearances: 0,
        }
    );
}

#[test]
fn penalties_count_as_goals_and_own_goals_do_not() {
    let p = Uuid::new_v4();
    let events = vec![
        event(EventKind::Penalty, p),
        event(EventKind::Goal, p),
        event(EventKind::OwnGoal, p),
        event(EventKind::Assist, p),
        event(EventKind::RedCard, p),
    ];
    let line = aggregate_player_stats(&events, p);
    assert_eq!(line.goals, 2);
    assert_eq!(line.assists, 1);
    assert_eq!(line.red_cards, 1);
}

#[test]
fn unknown_event_types_are_ignored() {
    let p = Uuid::new_v4();
    let kind: EventKind = serde_json::from_str("\"drinks_break\"").unwrap();
    assert_eq!(kind, EventKind::Unknown);
    assert_eq!(EventKind::from("var_review"), EventKind::VarReview);

    let events = vec![event(kind, p), event(EventKind::Injury, p)];
    assert_eq!(aggregate_player_stats(&events, p), PlayerStatLine::default());
}

#[test]
fn events_without_a_player_are_skipped() {
    let p = Uuid::new_v4();
    let events = vec![MatchEvent {
        kind: EventKind::Goal,
        player_id: None,
        team_id: Some(Uuid::new_v4()),
        sub_in_player_id: None,
    }];
    assert_eq!(aggregate_player_stats(&events, p), PlayerStatLine::default());
}

#[test]
fn substitution_counts_an_appearance_for_the_incoming_player() {
    let off = Uuid::new_v4();
    let on = Uuid::new_v4();
    let events = vec![MatchEvent {
        kind: EventKind::Substitution,
        player_id: Some(off),
        team_id: None,
        sub_in_player_id: Some(on),
    }];
    assert_eq!(aggregate_player_stats(&events, on).appearances, 1);
    assert_eq!(aggregate_player_stats(&events, off).appearances, 0);
}

#[test]
fn aggregation_is_idempotent() {
    let p = Uuid::new_v4();
    let events = vec![event(EventKind::Goal, p), event(EventKind::Assist, p)];
    assert_eq!(
        aggregate_player_stats(&events, p),
        aggregate_player_stats(&events, p)
    );
}

#[test]
fn aggregation_is_additive_over_concatenation() {
    let p = Uuid::new_v4();
    let first = vec![event(EventKind::Goal, p), event(EventKind::YellowCard, p)];
    let second = vec![
        event(EventKind::Penalty, p),
        event(EventKind::Assist, p),
        event(EventKind::RedCard, p),
    ];
    let combined: Vec<MatchEvent> = first.iter().chain(&second).cloned().collect();

    assert_eq!(
        aggregate_player_stats(&combined, p),
        aggregate_player_stats(&first, p) + aggregate_player_stats(&second, p)
    );
}

#[test]
fn aggregate_all_matches_per_player_aggregation() {
    let p1 = Uuid::new_v4();
    let p2 = Uuid::new_v4();
    let events = vec![
        event(EventKind::Goal, p1),
        event(EventKind::Goal, p2),
        event(EventKind::Assist, p1),
        event(EventKind::RedCard, p2),
    ];
    let all = aggregate_all(&events);
    assert_eq!(all[&p1], aggregate_player_stats(&events, p1));
    assert_eq!(all[&p2], aggregate_player_stats(&events, p2));
    assert_eq!(all.values().copied().sum::<PlayerStatLine>().goals, 2);
}

#[test]
fn top_scorers_rank_by_goals_then_assists() {
    let striker = Uuid::new_v4();
    let winger = Uuid::new_v4();
    let keeper = Uuid::new_v4();
    let events = vec![
        event(EventKind::Goal, striker),
        event(EventKind::Goal, striker),
        event(EventKind::Goal, winger),
        event(EventKind::Assist, winger),
        event(EventKind::YellowCard, keeper),
    ];

    let ranking = top_scorers(&events, 10);
    let ids: Vec<Uuid> = ranking.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![striker, winger]);
    assert_eq!(top_scorers(&events, 1).len(), 1);
}
