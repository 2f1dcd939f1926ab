mod common;

use common::*;
use league_core::{Bracket, LeagueError, MatchupStatus};
use uuid::Uuid;

#[test]
fn eight_teams_use_standard_seeding() {
    let teams = numbered_teams(8);
    let bracket = Bracket::generate(&teams);

    assert_eq!(bracket.total_rounds, 3);
    let names: Vec<&str> = bracket.rounds.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Quarter-Finals", "Semi-Finals", "Final"]);

    let first: Vec<(&str, &str)> = bracket.rounds[0]
        .matchups
        .iter()
        .map(|m| {
            (
                m.home.as_ref().unwrap().name.as_str(),
                m.away.as_ref().unwrap().name.as_str(),
            )
        })
        .collect();
    assert_eq!(
        first,
        vec![("T1", "T8"), ("T4", "T5"), ("T2", "T7"), ("T3", "T6")]
    );
    assert_eq!(bracket.rounds[1].matchups.len(), 2);
    assert_eq!(bracket.rounds[2].matchups.len(), 1);
}

#[test]
fn top_seeds_receive_byes_and_advance() {
    let teams = numbered_teams(6);
    let bracket = Bracket::generate(&teams);

    assert_eq!(bracket.total_rounds, 3);
    let byes: Vec<_> = bracket.rounds[0]
        .matchups
        .iter()
        .filter(|m| m.status == MatchupStatus::Bye)
        .collect();
    assert_eq!(byes.len(), 2);
    assert_eq!(byes[0].winner, Some(teams[0].id));

    let semi = bracket.matchup(2, 0).unwrap();
    assert_eq!(semi.home.as_ref().map(|t| t.id), Some(teams[0].id));
    assert!(semi.away.is_none());
}

#[test]
fn advancing_fills_the_next_round_and_crowns_a_champion() {
    let teams = numbered_teams(4);
    let mut bracket = Bracket::generate(&teams);
    assert_eq!(bracket.rounds[0].name, "Semi-Finals");

    // Semi-finals: T1 v T4, T2 v T3.
    bracket.advance_winner(1, 0, teams[3].id).unwrap();
    bracket.advance_winner(1, 1, teams[1].id).unwrap();

    let final_match = bracket.matchup(2, 0).unwrap();
    assert_eq!(final_match.home.as_ref().unwrap().id, teams[3].id);
    assert_eq!(final_match.away.as_ref().unwrap().id, teams[1].id);
    assert_eq!(bracket.champion(), None);

    bracket.advance_winner(2, 0, teams[1].id).unwrap();
    assert_eq!(bracket.champion(), Some(teams[1].id));
    assert_eq!(
        bracket.matchup(2, 0).unwrap().status,
        MatchupStatus::Completed
    );
}

#[test]
fn correcting_a_result_reopens_the_rounds_it_fed() {
    let teams = numbered_teams(4);
    let mut bracket = Bracket::generate(&teams);

    bracket.advance_winner(1, 0, teams[0].id).unwrap();
    bracket.advance_winner(1, 1, teams[1].id).unwrap();
    bracket.advance_winner(2, 0, teams[0].id).unwrap();
    assert_eq!(bracket.champion(), Some(teams[0].id));

    // T4 actually beat T1 in the first semi-final.
    bracket.advance_winner(1, 0, teams[3].id).unwrap();

    let final_match = bracket.matchup(2, 0).unwrap();
    assert_eq!(final_match.home.as_ref().unwrap().id, teams[3].id);
    assert_eq!(final_match.away.as_ref().unwrap().id, teams[1].id);
    assert_eq!(final_match.winner, None);
    assert_eq!(final_match.status, MatchupStatus::Upcoming);
    assert_eq!(bracket.champion(), None);

    bracket.advance_winner(2, 0, teams[3].id).unwrap();
    assert_eq!(bracket.champion(), Some(teams[3].id));
}

#[test]
fn correction_clears_slots_won_by_a_later_opponent() {
    let teams = numbered_teams(8);
    let mut bracket = Bracket::generate(&teams);

    // Quarter-finals: T1 v T8, T4 v T5, T2 v T7, T3 v T6.
    for (position, winner) in [(0, 0), (1, 3), (2, 1), (3, 2)] {
        bracket.advance_winner(1, position, teams[winner].id).unwrap();
    }
    bracket.advance_winner(2, 0, teams[3].id).unwrap();
    bracket.advance_winner(2, 1, teams[1].id).unwrap();
    bracket.advance_winner(3, 0, teams[3].id).unwrap();

    // T8 beat T1, so the semi-final T4 won never happened as recorded.
    bracket.advance_winner(1, 0, teams[7].id).unwrap();

    let semi = bracket.matchup(2, 0).unwrap();
    assert_eq!(semi.home.as_ref().unwrap().id, teams[7].id);
    assert_eq!(semi.away.as_ref().unwrap().id, teams[3].id);
    assert_eq!(semi.winner, None);
    assert_eq!(semi.status, MatchupStatus::Upcoming);

    let final_match = bracket.matchup(3, 0).unwrap();
    assert!(final_match.home.is_none());
    assert_eq!(final_match.away.as_ref().unwrap().id, teams[1].id);
    assert_eq!(final_match.winner, None);
    assert_eq!(bracket.champion(), None);

    // The untouched half of the draw keeps its result.
    assert_eq!(bracket.matchup(2, 1).unwrap().winner, Some(teams[1].id));
}

#[test]
fn recording_the_same_winner_again_changes_nothing() {
    let teams = numbered_teams(4);
    let mut bracket = Bracket::generate(&teams);

    bracket.advance_winner(1, 0, teams[0].id).unwrap();
    bracket.advance_winner(1, 1, teams[1].id).unwrap();
    bracket.advance_winner(2, 0, teams[1].id).unwrap();
    let before = bracket.clone();

    bracket.advance_winner(1, 0, teams[0].id).unwrap();
    assert_eq!(bracket, before);
    assert_eq!(bracket.champion(), Some(teams[1].id));
}

#[test]
fn advance_rejects_unknown_matches_and_outsiders() {
    let teams = numbered_teams(4);
    let mut bracket = Bracket::generate(&teams);

    assert_eq!(
        bracket.advance_winner(3, 0, teams[0].id),
        Err(LeagueError::MatchNotFound {
            round: 3,
            position: 0
        })
    );

    let outsider = Uuid::new_v4();
    assert_eq!(
        bracket.advance_winner(1, 0, outsider),
        Err(LeagueError::InvalidWinner(outsider))
    );

    // Final has no teams yet.
    assert_eq!(
        bracket.advance_winner(2, 0, teams[0].id),
        Err(LeagueError::InvalidWinner(teams[0].id))
    );
}

#[test]
fn two_teams_play_a_single_final() {
    let bracket = Bracket::generate(&numbered_teams(2));
    assert_eq!(bracket.total_rounds, 1);
    assert_eq!(bracket.rounds[0].name, "Final");
}

#[test]
fn fewer_than_two_teams_is_empty() {
    let bracket = Bracket::generate(&numbered_teams(1));
    assert_eq!(bracket.total_rounds, 0);
    assert!(bracket.rounds.is_empty());
}
