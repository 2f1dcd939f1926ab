use league_core::LeagueError;
use league_infra::StoreError;

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so any type implementing `Display` auto-converts via `?`.
///
/// This enum gives us:
///   - `From<StoreError>` / `From<sqlx::Error>`: missing rows and broken constraints are
///     shown as-is, database failures as a generic message
///   - `From<LeagueError>`: draw, bracket and status validation failures
///   - `GqlError::new("…")`: custom one-off messages
#[derive(Debug)]
pub enum GqlError {
    Store(StoreError),
    League(LeagueError),
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Store(e) => {
                tracing::debug!("Store error: {e}");
                write!(f, "{e}")
            }
            GqlError::League(e) => write!(f, "{e}"),
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<StoreError> for GqlError {
    fn from(e: StoreError) -> Self {
        GqlError::Store(e)
    }
}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Store(e.into())
    }
}

impl From<LeagueError> for GqlError {
    fn from(e: LeagueError) -> Self {
        GqlError::League(e)
    }
}

/// Extension trait that converts any `Result<T, E>` where `E: Display`
/// into `async_graphql::Result<T>` with a contextual message prefix.
///
/// Usage: `fixtures::generate(&state, params).gql_err("Fixture generation failed")?`
pub trait ResultExt<T> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error> {
        self.map_err(|e| async_graphql::Error::new(format!("{context}: {e}")))
    }
}
