// Flat re-exports of every domain's GraphQL types.

pub use super::domains::competitions::types::{
    Competition, CompetitionFormat, CreateCompetitionInput, CreateGroupInput, Group,
};
pub use super::domains::draw::types::{
    DrawMethod, DrawResult, ExecuteDrawInput, GroupAssignment, ManualSeedInput,
};
pub use super::domains::fixtures::types::{
    Bracket, BracketMatchup, BracketRound, Fixture, FixtureFormat, FixtureRound, FixturesInput,
    GenerateFixturesInput, GenerateFixturesPayload, MatchupStatus,
};
pub use super::domains::matches::types::{
    EventKind, Match, MatchEvent, MatchFilterInput, MatchStatus, RecordMatchEventInput,
    UpdateMatchScoreInput, UpdateMatchStatusInput,
};
pub use super::domains::standings::types::Standing;
pub use super::domains::stats::types::PlayerStats;
pub use super::domains::teams::types::{CreatePlayerInput, CreateTeamInput, Player, Team};
