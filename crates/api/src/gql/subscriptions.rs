use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::{Context, Result, Subscription};
use futures_util::Stream;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use uuid::Uuid;

use league_infra::repos::matches;

use crate::gql::common::helpers::get_competition;
use crate::gql::types::{Match, MatchEvent};
use crate::state::AppState;

const CHANNEL_CAPACITY: usize = 100;

#[derive(Default)]
struct FeedChannels {
    /// Events recorded for one match, keyed by match id.
    events: HashMap<Uuid, broadcast::Sender<MatchEvent>>,
    /// Status and score changes, keyed by competition id.
    matches: HashMap<Uuid, broadcast::Sender<Match>>,
}

/// Live fan-out of match activity to GraphQL subscribers.
///
/// Channels are opened by subscribers. Publishing with nobody listening is not
/// an error; a channel whose subscribers have all gone is dropped the next time
/// it is published to or another subscription is opened.
#[derive(Clone, Default)]
pub struct MatchFeed {
    channels: Arc<Mutex<FeedChannels>>,
}

fn prune<T>(senders: &mut HashMap<Uuid, broadcast::Sender<T>>) {
    senders.retain(|_, sender| sender.receiver_count() > 0);
}

impl MatchFeed {
    pub fn subscribe_events(&self, match_id: Uuid) -> broadcast::Receiver<MatchEvent> {
        let mut channels = self.channels.lock();
        prune(&mut channels.events);
        channels
            .events
            .entry(match_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    pub fn subscribe_matches(&self, competition_id: Uuid) -> broadcast::Receiver<Match> {
        let mut channels = self.channels.lock();
        prune(&mut channels.matches);
        channels
            .matches
            .entry(competition_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    pub fn publish_event(&self, match_id: Uuid, event: MatchEvent) {
        let mut channels = self.channels.lock();
        if let Some(sender) = channels.events.get(&match_id) {
            if sender.send(event).is_err() {
                channels.events.remove(&match_id);
            }
        }
    }

    pub fn publish_match(&self, competition_id: Uuid, updated: Match) {
        let mut channels = self.channels.lock();
        if let Some(sender) = channels.matches.get(&competition_id) {
            if sender.send(updated).is_err() {
                channels.matches.remove(&competition_id);
            }
        }
    }

    /// Open channels as (per-match event channels, per-competition channels).
    pub fn channel_counts(&self) -> (usize, usize) {
        let channels = self.channels.lock();
        (channels.events.len(), channels.matches.len())
    }

    /// Drop the event channel of a match that can no longer change.
    pub fn close_match(&self, match_id: Uuid) {
        self.channels.lock().events.remove(&match_id);
    }
}

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Events as they are recorded for a specific match
    async fn match_events(
        &self,
        ctx: &Context<'_>,
        match_id: Uuid,
    ) -> Result<impl Stream<Item = Result<MatchEvent, BroadcastStreamRecvError>>> {
        let state = ctx.data::<AppState>()?;
        matches::get_by_id(&state.db, match_id)
            .await?
            .ok_or_else(|| async_graphql::Error::new("Match not found"))?;

        let receiver = state.feed().subscribe_events(match_id);
        Ok(BroadcastStream::new(receiver))
    }

    /// Status and score changes for every match of a competition
    async fn match_updates(
        &self,
        ctx: &Context<'_>,
        competition_id: Uuid,
    ) -> Result<impl Stream<Item = Result<Match, BroadcastStreamRecvError>>> {
        let state = ctx.data::<AppState>()?;
        get_competition(&state.db, competition_id).await?;

        let receiver = state.feed().subscribe_matches(competition_id);
        Ok(BroadcastStream::new(receiver))
    }
}
