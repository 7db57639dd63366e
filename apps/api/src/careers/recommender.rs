//! Recommendation delivery — the async boundary around the synchronous ranker.
//!
//! `AppState` holds an `Arc<dyn Recommender>`. The default backend waits a
//! configurable delay and only then ranks, so a request dropped during the
//! delay never runs the core.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::careers::catalog::CareerCatalog;
use crate::careers::ranking::{rank, ScoredCareer};
use crate::careers::scoring::MatchScorer;
use crate::errors::AppError;
use crate::questionnaire::models::QuestionnaireAnswers;

#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, answers: &QuestionnaireAnswers)
        -> Result<Vec<ScoredCareer>, AppError>;
}

/// Ranks the catalog after an artificial delay.
pub struct DelayedRecommender {
    catalog: Arc<CareerCatalog>,
    scorer: MatchScorer,
    delay: Duration,
}

impl DelayedRecommender {
    pub fn new(catalog: Arc<CareerCatalog>, scorer: MatchScorer, delay: Duration) -> Self {
        Self {
            catalog,
            scorer,
            delay,
        }
    }
}

#[async_trait]
impl Recommender for DelayedRecommender {
    async fn recommend(
        &self,
        answers: &QuestionnaireAnswers,
    ) -> Result<Vec<ScoredCareer>, AppError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let ranked = rank(&self.catalog, &self.scorer, answers);
        debug!(
            "Ranked {} careers (top: {:?})",
            ranked.len(),
            ranked.first().map(|s| (&s.career.title, s.match_score))
        );
        Ok(ranked)
    }
}
