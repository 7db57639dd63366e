//! Match Scoring — keyword-overlap heuristic plus a small random jitter.
//!
//! Score = 70 + 5 per interest containing a career keyword
//!            + 5 per skill containing a career keyword
//!            + jitter in [0, 9]
//! capped at 100. The floor is 70 because every term is non-negative.
//!
//! The jitter source is a trait so tests can pin it; production draws from
//! the thread-local RNG.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::careers::catalog::CareerRecord;
use crate::questionnaire::models::QuestionnaireAnswers;

pub const BASE_SCORE: u32 = 70;
pub const KEYWORD_BONUS: u32 = 5;
pub const MAX_JITTER: u32 = 9;
pub const MAX_SCORE: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Jitter sources
// ────────────────────────────────────────────────────────────────────────────

/// Supplies the random perturbation added once per score. Must return a value in
/// `0..=MAX_JITTER`.
pub trait JitterSource: Send + Sync {
    fn draw(&self) -> u32;
}

/// Uniform draw from the thread-local RNG. The production default.
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn draw(&self) -> u32 {
        rand::rng().random_range(0..=MAX_JITTER)
    }
}

/// Reproducible draws from a seeded `StdRng`. Selected with `SCORING_SEED`.
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl JitterSource for SeededJitter {
    fn draw(&self) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.random_range(0..=MAX_JITTER)
    }
}

/// Always returns the same draw (clamped to `MAX_JITTER`).
#[allow(dead_code)]
pub struct FixedJitter(pub u32);

impl JitterSource for FixedJitter {
    fn draw(&self) -> u32 {
        self.0.min(MAX_JITTER)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

/// Scores one career record against one set of answers.
#[derive(Clone)]
pub struct MatchScorer {
    jitter: Arc<dyn JitterSource>,
}

impl MatchScorer {
    pub fn new(jitter: Arc<dyn JitterSource>) -> Self {
        Self { jitter }
    }

    /// Returns a score in `BASE_SCORE..=MAX_SCORE`. Consumes one jitter draw.
    pub fn score(&self, record: &CareerRecord, answers: &QuestionnaireAnswers) -> u32 {
        let jitter = self.jitter.draw().min(MAX_JITTER);
        combine(keyword_bonus(record, answers), jitter)
    }
}

fn combine(bonus: u32, jitter: u32) -> u32 {
    BASE_SCORE
        .saturating_add(bonus)
        .saturating_add(jitter)
        .min(MAX_SCORE)
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngJitter))
    }
}

/// Deterministic part of the score: 5 points for every interest and every skill
/// that contains at least one of the record's keywords.
pub fn keyword_bonus(record: &CareerRecord, answers: &QuestionnaireAnswers) -> u32 {
    let matching_interests = count_matching(&answers.interests, &record.match_keywords);
    let matching_skills = count_matching(&answers.skills, &record.match_keywords);
    (matching_interests + matching_skills).saturating_mul(KEYWORD_BONUS)
}

/// Number of entries in which any keyword occurs as a case-insensitive substring.
/// The keyword is searched inside the entry, never the other way round.
fn count_matching(entries: &[String], keywords: &[String]) -> u32 {
    let count = entries
        .iter()
        .filter(|entry| {
            let entry_lower = entry.to_lowercase();
            keywords
                .iter()
                .any(|kw| entry_lower.contains(kw.to_lowercase().as_str()))
        })
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::careers::catalog::{test_record, CareerCatalog};
    use crate::questionnaire::models::{EducationLevel, WorkEnvironment};

    fn answers(interests: &[&str], skills: &[&str]) -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            interests: interests.iter().map(|s| s.to_string()).collect(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            values: vec!["growth".to_string()],
            work_environment: WorkEnvironment::Remote,
            education_level: EducationLevel::Bachelor,
            experience_years: 2,
        }
    }

    fn pinned(draw: u32) -> MatchScorer {
        MatchScorer::new(Arc::new(FixedJitter(draw)))
    }

    #[test]
    fn test_no_answers_scores_base_plus_jitter() {
        let record = test_record("1", &["technology"]);
        let empty = answers(&[], &[]);
        assert_eq!(pinned(0).score(&record, &empty), 70);
        assert_eq!(pinned(9).score(&record, &empty), 79);
    }

    #[test]
    fn test_empty_answers_stay_within_70_to_79() {
        let scorer = MatchScorer::new(Arc::new(SeededJitter::new(7)));
        let empty = answers(&[], &[]);
        for record in CareerCatalog::builtin().list_all() {
            for _ in 0..200 {
                let score = scorer.score(record, &empty);
                assert!((70..=79).contains(&score), "score {score} out of range");
            }
        }
    }

    #[test]
    fn test_interest_match_adds_five() {
        let record = test_record("1", &["technology"]);
        let a = answers(&["technology"], &[]);
        assert!(pinned(0).score(&record, &a) >= 75);
        assert_eq!(pinned(0).score(&record, &a), 75);
    }

    #[test]
    fn test_skill_match_adds_five() {
        let record = test_record("1", &["programming"]);
        assert_eq!(pinned(0).score(&record, &answers(&[], &["programming"])), 75);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let record = test_record("1", &["technology"]);
        assert_eq!(pinned(0).score(&record, &answers(&["TECHNOLOGY"], &[])), 75);
    }

    #[test]
    fn test_keyword_found_inside_longer_entry() {
        let record = test_record("1", &["design"]);
        let a = answers(&["Graphic Design and illustration"], &[]);
        assert_eq!(pinned(0).score(&record, &a), 75);
    }

    #[test]
    fn test_containment_direction_is_keyword_in_entry() {
        // "tech" contains no keyword; the keyword "technology" contains "tech",
        // which must not count.
        let record = test_record("1", &["technology"]);
        assert_eq!(pinned(0).score(&record, &answers(&["tech"], &[])), 70);
    }

    #[test]
    fn test_entry_matching_several_keywords_counts_once() {
        let record = test_record("1", &["data", "analytics"]);
        let a = answers(&["data analytics"], &[]);
        assert_eq!(pinned(0).score(&record, &a), 75);
    }

    #[test]
    fn test_each_matching_entry_counts() {
        let record = test_record("1", &["finance"]);
        let a = answers(&["finance", "personal finance"], &["corporate finance"]);
        assert_eq!(pinned(0).score(&record, &a), 85);
    }

    #[test]
    fn test_score_capped_at_100() {
        let record = test_record("1", &["x"]);
        let many: Vec<&str> = vec!["x"; 10];
        let a = answers(&many, &many);
        assert_eq!(pinned(9).score(&record, &a), 100);
    }

    #[test]
    fn test_combine_saturates_instead_of_overflowing() {
        assert_eq!(combine(u32::MAX, MAX_JITTER), MAX_SCORE);
        assert_eq!(combine(u32::MAX - BASE_SCORE, u32::MAX), MAX_SCORE);
        assert_eq!(combine(0, 3), BASE_SCORE + 3);
    }

    #[test]
    fn test_fixed_jitter_is_clamped() {
        assert_eq!(FixedJitter(42).draw(), MAX_JITTER);
    }

    #[test]
    fn test_thread_rng_jitter_in_range() {
        let jitter = ThreadRngJitter;
        for _ in 0..1000 {
            assert!(jitter.draw() <= MAX_JITTER);
        }
    }

    #[test]
    fn test_seeded_jitter_reproducible() {
        let a = SeededJitter::new(42);
        let b = SeededJitter::new(42);
        let xs: Vec<u32> = (0..50).map(|_| a.draw()).collect();
        let ys: Vec<u32> = (0..50).map(|_| b.draw()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_scores_always_between_70_and_100() {
        let scorer = MatchScorer::new(Arc::new(SeededJitter::new(1)));
        let a = answers(
            &["technology", "design", "marketing", "finance"],
            &["programming", "communication", "analytics", "mathematics"],
        );
        for record in CareerCatalog::builtin().list_all() {
            for _ in 0..200 {
                let score = scorer.score(record, &a);
                assert!((70..=100).contains(&score));
            }
        }
    }

    #[test]
    fn test_software_developer_beats_financial_analyst_on_average() {
        let catalog = CareerCatalog::builtin();
        let developer = catalog.find("1").unwrap();
        let analyst = catalog.find("5").unwrap();
        let scorer = MatchScorer::new(Arc::new(SeededJitter::new(2024)));
        let a = answers(&["technology"], &["programming"]);

        let trials = 1000;
        let dev_total: u32 = (0..trials).map(|_| scorer.score(developer, &a)).sum();
        let fin_total: u32 = (0..trials).map(|_| scorer.score(analyst, &a)).sum();

        let dev_mean = dev_total as f64 / trials as f64;
        let fin_mean = fin_total as f64 / trials as f64;
        assert!(
            dev_mean > fin_mean,
            "developer mean {dev_mean} should exceed analyst mean {fin_mean}"
        );
    }

    #[test]
    fn test_keyword_bonus_for_builtin_records() {
        let catalog = CareerCatalog::builtin();
        let a = answers(&["technology"], &["programming"]);
        assert_eq!(keyword_bonus(catalog.find("1").unwrap(), &a), 10);
        assert_eq!(keyword_bonus(catalog.find("2").unwrap(), &a), 5);
        assert_eq!(keyword_bonus(catalog.find("5").unwrap(), &a), 0);
    }
}
