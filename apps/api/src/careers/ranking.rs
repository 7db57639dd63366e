use serde::Serialize;

use crate::careers::catalog::{CareerCatalog, CareerRecord};
use crate::careers::scoring::MatchScorer;
use crate::questionnaire::models::QuestionnaireAnswers;

/// A catalog record paired with its match score for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCareer {
    #[serde(flatten)]
    pub career: CareerRecord,
    pub match_score: u32,
}

/// Scores every record in the catalog and orders them by descending score.
///
/// The sort is stable, so records with equal scores keep their catalog order.
/// The result always has exactly `catalog.len()` entries.
pub fn rank(
    catalog: &CareerCatalog,
    scorer: &MatchScorer,
    answers: &QuestionnaireAnswers,
) -> Vec<ScoredCareer> {
    let mut scored: Vec<ScoredCareer> = catalog
        .list_all()
        .iter()
        .map(|record| ScoredCareer {
            match_score: scorer.score(record, answers),
            career: record.clone(),
        })
        .collect();

    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored
}
