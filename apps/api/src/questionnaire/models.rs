use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WorkEnvironment {
    Office,
    Remote,
    Hybrid,
    Outdoors,
    Travel,
}

impl WorkEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkEnvironment::Office => "office",
            WorkEnvironment::Remote => "remote",
            WorkEnvironment::Hybrid => "hybrid",
            WorkEnvironment::Outdoors => "outdoors",
            WorkEnvironment::Travel => "travel",
        }
    }
}

impl FromStr for WorkEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "office" => Ok(WorkEnvironment::Office),
            "remote" => Ok(WorkEnvironment::Remote),
            "hybrid" => Ok(WorkEnvironment::Hybrid),
            "outdoors" => Ok(WorkEnvironment::Outdoors),
            "travel" => Ok(WorkEnvironment::Travel),
            other => Err(format!("unknown work environment '{other}'")),
        }
    }
}

impl fmt::Display for WorkEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctorate,
    Vocational,
    SelfTaught,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "high-school",
            EducationLevel::Associate => "associate",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::Master => "master",
            EducationLevel::Doctorate => "doctorate",
            EducationLevel::Vocational => "vocational",
            EducationLevel::SelfTaught => "self-taught",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high-school" => Ok(EducationLevel::HighSchool),
            "associate" => Ok(EducationLevel::Associate),
            "bachelor" => Ok(EducationLevel::Bachelor),
            "master" => Ok(EducationLevel::Master),
            "doctorate" => Ok(EducationLevel::Doctorate),
            "vocational" => Ok(EducationLevel::Vocational),
            "self-taught" => Ok(EducationLevel::SelfTaught),
            other => Err(format!("unknown education level '{other}'")),
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated questionnaire answers. The only input the scorer accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionnaireAnswers {
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    /// Not used by scoring yet.
    pub values: Vec<String>,
    pub work_environment: WorkEnvironment,
    pub education_level: EducationLevel,
    pub experience_years: u32,
}

/// `experience_years` arrives as either a number or a numeric string from the form.
/// Anything else lands in `Other` and is rejected during validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ExperienceInput {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for ExperienceInput {
    fn default() -> Self {
        ExperienceInput::Number(0)
    }
}

/// Raw questionnaire payload as posted by the form, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireSubmission {
    pub interests: Vec<String>,
    pub other_interests: Option<String>,
    pub skills: Vec<String>,
    pub other_skills: Option<String>,
    pub values: Vec<String>,
    pub work_environment: Option<String>,
    pub education_level: Option<String>,
    pub experience_years: ExperienceInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_environment_parse_and_display() {
        for s in ["office", "remote", "hybrid", "outdoors", "travel"] {
            let env: WorkEnvironment = s.parse().unwrap();
            assert_eq!(env.to_string(), s);
        }
        assert_eq!(" Remote ".parse::<WorkEnvironment>(), Ok(WorkEnvironment::Remote));
        assert!("moon".parse::<WorkEnvironment>().is_err());
    }

    #[test]
    fn test_education_level_parse_and_display() {
        for s in [
            "high-school",
            "associate",
            "bachelor",
            "master",
            "doctorate",
            "vocational",
            "self-taught",
        ] {
            let level: EducationLevel = s.parse().unwrap();
            assert_eq!(level.to_string(), s);
        }
        assert!("".parse::<EducationLevel>().is_err());
    }

    #[test]
    fn test_enums_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_value(EducationLevel::SelfTaught).unwrap(),
            "self-taught"
        );
        assert_eq!(
            serde_json::to_value(WorkEnvironment::Outdoors).unwrap(),
            "outdoors"
        );
    }

    #[test]
    fn test_submission_accepts_string_or_number_experience() {
        let a: QuestionnaireSubmission =
            serde_json::from_str(r#"{"experience_years": "5"}"#).unwrap();
        assert_eq!(a.experience_years, ExperienceInput::Text("5".to_string()));

        let b: QuestionnaireSubmission =
            serde_json::from_str(r#"{"experience_years": 10}"#).unwrap();
        assert_eq!(b.experience_years, ExperienceInput::Number(10));
    }

    #[test]
    fn test_submission_accepts_malformed_values_for_validation() {
        let s: QuestionnaireSubmission = serde_json::from_str(
            r#"{"experience_years": 2.5, "work_environment": null, "education_level": null}"#,
        )
        .unwrap();
        assert_eq!(s.experience_years, ExperienceInput::Other(serde_json::json!(2.5)));
        assert!(s.work_environment.is_none());
        assert!(s.education_level.is_none());
    }

    #[test]
    fn test_submission_missing_fields_default() {
        let s: QuestionnaireSubmission = serde_json::from_str("{}").unwrap();
        assert!(s.interests.is_empty());
        assert!(s.other_skills.is_none());
        assert_eq!(s.experience_years, ExperienceInput::Number(0));
    }
}
