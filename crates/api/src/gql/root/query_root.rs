use async_graphql::MergedObject;

use crate::gql::domains::competitions::CompetitionQuery;
use crate::gql::domains::draw::DrawQuery;
use crate::gql::domains::fixtures::FixtureQuery;
use crate::gql::domains::matches::MatchQuery;
use crate::gql::domains::standings::StandingsQuery;
use crate::gql::domains::stats::StatsQuery;
use crate::gql::domains::teams::TeamQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    CompetitionQuery,
    DrawQuery,
    FixtureQuery,
    MatchQuery,
    StandingsQuery,
    StatsQuery,
    TeamQuery,
);
