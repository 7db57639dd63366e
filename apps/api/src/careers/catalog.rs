#![allow(dead_code)]

//! Career Catalog — the fixed set of career paths eligible for recommendation.
//!
//! Built once at startup and shared read-only through `AppState`.

use serde::Serialize;

/// A single career path. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub average_salary: String,
    pub growth_rate: String,
    pub education_required: String,
    pub key_skills: Vec<String>,
    /// Lowercase scoring keywords. Never sent to clients.
    #[serde(skip)]
    pub match_keywords: Vec<String>,
}

impl CareerRecord {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: &str,
        title: &str,
        description: &str,
        average_salary: &str,
        growth_rate: &str,
        education_required: &str,
        key_skills: &[&str],
        match_keywords: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            average_salary: average_salary.to_string(),
            growth_rate: growth_rate.to_string(),
            education_required: education_required.to_string(),
            key_skills: key_skills.iter().map(|s| s.to_string()).collect(),
            match_keywords: match_keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

/// Ordered, read-only list of career records.
#[derive(Debug, Clone, Default)]
pub struct CareerCatalog {
    records: Vec<CareerRecord>,
}

impl CareerCatalog {
    pub fn new(records: Vec<CareerRecord>) -> Self {
        Self { records }
    }

    /// The built-in catalog served in production.
    pub fn builtin() -> Self {
        Self::new(vec![
            CareerRecord::new(
                "1",
                "Software Developer",
                "Develop and maintain software applications for various platforms.",
                "$105,000",
                "22% (Much faster than average)",
                "Bachelor's degree in Computer Science or related field",
                &["JavaScript", "Python", "Problem Solving", "Teamwork"],
                &["technology", "problem solving", "programming"],
            ),
            CareerRecord::new(
                "2",
                "UX/UI Designer",
                "Design user interfaces and experiences for digital products.",
                "$85,000",
                "13% (Faster than average)",
                "Bachelor's degree in Design or related field",
                &["User Research", "Wireframing", "Visual Design", "Prototyping"],
                &["design", "creativity", "technology"],
            ),
            CareerRecord::new(
                "3",
                "Data Scientist",
                "Analyze and interpret complex data to help organizations make better decisions.",
                "$122,000",
                "36% (Much faster than average)",
                "Master's degree in Statistics, Computer Science, or related field",
                &["Python", "R", "Machine Learning", "Statistics", "Big Data"],
                &["mathematics", "technology", "analytics"],
            ),
            CareerRecord::new(
                "4",
                "Marketing Manager",
                "Plan and oversee marketing campaigns to promote products or services.",
                "$93,000",
                "10% (Faster than average)",
                "Bachelor's degree in Marketing or related field",
                &["Communication", "Creativity", "Strategy", "Social Media"],
                &["communication", "marketing", "creativity"],
            ),
            CareerRecord::new(
                "5",
                "Financial Analyst",
                "Evaluate financial data and make recommendations for businesses.",
                "$83,000",
                "9% (As fast as average)",
                "Bachelor's degree in Finance or related field",
                &[
                    "Financial Modeling",
                    "Excel",
                    "Data Analysis",
                    "Attention to Detail",
                ],
                &["finance", "mathematics", "analytics"],
            ),
        ])
    }

    /// All records in catalog order. Safe to call repeatedly.
    pub fn list_all(&self) -> &[CareerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&CareerRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
pub(crate) fn test_record(id: &str, keywords: &[&str]) -> CareerRecord {
    CareerRecord::new(
        id,
        &format!("Career {id}"),
        "test record",
        "$1",
        "0%",
        "none",
        &[],
        keywords,
    )
}
