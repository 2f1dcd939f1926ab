use sqlx::SqlitePool;

use crate::config::ServerConfig;
use crate::gql::subscriptions::MatchFeed;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    config: ServerConfig,
    feed: MatchFeed,
}

impl AppState {
    pub fn new(db: SqlitePool, config: ServerConfig) -> Self {
        Self {
            db,
            config,
            feed: MatchFeed::default(),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn feed(&self) -> &MatchFeed {
        &self.feed
    }
}
