//! Boundary validation: turns a raw `QuestionnaireSubmission` into `QuestionnaireAnswers`.
//!
//! Every problem found is collected so the client sees all of them at once.

use crate::errors::AppError;
use crate::questionnaire::models::{
    EducationLevel, ExperienceInput, QuestionnaireAnswers, QuestionnaireSubmission,
    WorkEnvironment,
};

/// Validates a submission. `linked_skills` come from a connected LinkedIn profile
/// and are merged after the form's own skills.
pub fn validate_submission(
    submission: QuestionnaireSubmission,
    linked_skills: &[String],
) -> Result<QuestionnaireAnswers, AppError> {
    let mut problems = Vec::new();

    let interests = merge_entries(
        submission.interests,
        submission.other_interests.as_deref(),
        &[],
    );
    let skills = merge_entries(
        submission.skills,
        submission.other_skills.as_deref(),
        linked_skills,
    );
    let values = merge_entries(submission.values, None, &[]);

    if interests.is_empty() {
        problems.push("Please select at least one interest".to_string());
    }
    if skills.is_empty() {
        problems.push("Please select at least one skill".to_string());
    }
    if values.is_empty() {
        problems.push("Please select at least one value".to_string());
    }

    let work_environment = match submission.work_environment.as_deref().map(str::trim) {
        None | Some("") => {
            problems.push("Please select your preferred work environment".to_string());
            None
        }
        Some(raw) => match raw.parse::<WorkEnvironment>() {
            Ok(env) => Some(env),
            Err(e) => {
                problems.push(e);
                None
            }
        },
    };

    let education_level = match submission.education_level.as_deref().map(str::trim) {
        None | Some("") => {
            problems.push("Please select your education level".to_string());
            None
        }
        Some(raw) => match raw.parse::<EducationLevel>() {
            Ok(level) => Some(level),
            Err(e) => {
                problems.push(e);
                None
            }
        },
    };

    let experience_years = match parse_experience(&submission.experience_years) {
        Ok(years) => Some(years),
        Err(e) => {
            problems.push(e);
            None
        }
    };

    match (work_environment, education_level, experience_years) {
        (Some(work_environment), Some(education_level), Some(experience_years))
            if problems.is_empty() =>
        {
            Ok(QuestionnaireAnswers {
                interests,
                skills,
                values,
                work_environment,
                education_level,
                experience_years,
            })
        }
        _ => Err(AppError::Validation(problems.join("; "))),
    }
}

/// Picks, then optional free text, then extra entries. Blank entries are dropped and
/// duplicates (case-insensitive) keep their first occurrence.
fn merge_entries(picks: Vec<String>, other: Option<&str>, extra: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(picks.len() + extra.len() + 1);

    let candidates = picks
        .into_iter()
        .chain(other.map(str::to_string))
        .chain(extra.iter().cloned());

    for candidate in candidates {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lower = trimmed.to_lowercase();
        if merged.iter().any(|m| m.to_lowercase() == lower) {
            continue;
        }
        merged.push(trimmed.to_string());
    }

    merged
}

fn parse_experience(input: &ExperienceInput) -> Result<u32, String> {
    match input {
        ExperienceInput::Number(n) => u32::try_from(*n)
            .map_err(|_| format!("experience_years must be a non-negative integer, got {n}")),
        ExperienceInput::Text(text) => text.trim().parse::<u32>().map_err(|_| {
            format!("experience_years must be a non-negative integer, got '{text}'")
        }),
        ExperienceInput::Other(value) => Err(format!(
            "experience_years must be a non-negative integer, got {value}"
        )),
    }
}
