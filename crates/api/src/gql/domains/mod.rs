// Each domain contains: mod.rs, resolvers.rs, types.rs and, where a
// mutation spans several repositories, service.rs.

pub mod competitions;
pub mod draw;
pub mod fixtures;
pub mod matches;
pub mod standings;
pub mod stats;
pub mod teams;
