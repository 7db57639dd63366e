use std::sync::Arc;

use crate::auth::session::SessionStore;
use crate::auth::users::UserDirectory;
use crate::careers::catalog::CareerCatalog;
use crate::careers::recommender::{DelayedRecommender, Recommender};
use crate::careers::scoring::{JitterSource, MatchScorer, SeededJitter, ThreadRngJitter};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<CareerCatalog>,
    /// Pluggable recommendation backend. Default: DelayedRecommender.
    pub recommender: Arc<dyn Recommender>,
    pub users: Arc<UserDirectory>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let catalog = Arc::new(CareerCatalog::builtin());

        let jitter: Arc<dyn JitterSource> = match config.scoring_seed {
            Some(seed) => Arc::new(SeededJitter::new(seed)),
            None => Arc::new(ThreadRngJitter),
        };

        let recommender: Arc<dyn Recommender> = Arc::new(DelayedRecommender::new(
            catalog.clone(),
            MatchScorer::new(jitter),
            config.recommendation_delay(),
        ));

        let sessions = Arc::new(SessionStore::with_ttl(config.session_ttl()));

        Self {
            config,
            catalog,
            recommender,
            users: Arc::new(UserDirectory::with_demo_account()),
            sessions,
        }
    }
}
