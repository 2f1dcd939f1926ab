use league_core::{LeagueError, MatchStatus};

#[test]
fn allowed_transitions() {
    assert!(MatchStatus::Upcoming.can_transition(MatchStatus::Live));
    assert!(MatchStatus::Upcoming.can_transition(MatchStatus::Postponed));
    assert!(MatchStatus::Upcoming.can_transition(MatchStatus::Cancelled));
    assert!(MatchStatus::Live.can_transition(MatchStatus::Completed));
    assert!(MatchStatus::Live.can_transition(MatchStatus::Postponed));
    assert!(MatchStatus::Postponed.can_transition(MatchStatus::Upcoming));
    assert!(MatchStatus::Postponed.can_transition(MatchStatus::Cancelled));
}

#[test]
fn terminal_statuses_go_nowhere() {
    for status in [MatchStatus::Completed, MatchStatus::Cancelled] {
        assert!(status.is_terminal());
        assert!(!status.can_transition(MatchStatus::Live));
        assert!(!status.can_transition(MatchStatus::Upcoming));
    }
}

#[test]
fn rejected_transition_names_both_ends() {
    let err = MatchStatus::Upcoming
        .transition(MatchStatus::Completed)
        .unwrap_err();
    assert_eq!(
        err,
        LeagueError::InvalidTransition {
            from: MatchStatus::Upcoming,
            to: MatchStatus::Completed,
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid match status transition from \"upcoming\" to \"completed\""
    );
}

#[test]
fn status_round_trips_through_its_name() {
    for status in [
        MatchStatus::Upcoming,
        MatchStatus::Live,
        MatchStatus::Completed,
        MatchStatus::Postponed,
        MatchStatus::Cancelled,
    ] {
        assert_eq!(status.as_str().parse::<MatchStatus>(), Ok(status));
    }
    assert!("abandoned".parse::<MatchStatus>().is_err());
}
