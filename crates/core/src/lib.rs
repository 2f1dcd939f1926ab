//! Pure scheduling, draw and statistics logic for league competitions.
//!
//! Nothing in this crate performs I/O or holds state between calls; the
//! service layer loads rows, calls into these modules and persists whatever
//! comes back.

pub mod bracket;
pub mod draw;
pub mod error;
pub mod fixtures;
pub mod match_status;
pub mod standings;
pub mod stats;
pub mod types;

pub use bracket::{Bracket, BracketMatchup, BracketRound, MatchupStatus};
pub use draw::{manual_draw, random_draw, random_draw_with_rng, ManualSeed};
pub use error::LeagueError;
pub use fixtures::{
    generate_knockout, generate_knockout_with_rng, generate_multi_leg_round_robin,
    generate_round_robin, round_robin_rounds, DEFAULT_INTERVAL_DAYS, MAX_INTERVAL_DAYS,
    VENUE_TBD,
};
pub use match_status::MatchStatus;
pub use standings::{compute_standings, MatchResult, PointsRule, StandingRow};
pub use stats::{
    aggregate_all, aggregate_player_stats, top_scorers, EventKind, MatchEvent, PlayerStatLine,
};
pub use types::{Fixture, GroupAssignment, Round, Slot, Team};
