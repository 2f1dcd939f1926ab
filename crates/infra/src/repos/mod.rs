pub mod competitions;
pub mod groups;
pub mod match_events;
pub mod matches;
pub mod players;
pub mod teams;

pub use competitions::CreateCompetition;
pub use groups::{CreateGroup, CreateGroupTeam};
pub use match_events::CreateMatchEvent;
pub use matches::{CreateMatch, MatchFilter};
pub use players::CreatePlayer;
pub use teams::CreateTeam;
