use async_graphql::MergedObject;

use crate::gql::domains::competitions::CompetitionMutation;
use crate::gql::domains::draw::DrawMutation;
use crate::gql::domains::fixtures::FixtureMutation;
use crate::gql::domains::matches::MatchMutation;
use crate::gql::domains::teams::TeamMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CompetitionMutation,
    DrawMutation,
    FixtureMutation,
    MatchMutation,
    TeamMutation,
);
