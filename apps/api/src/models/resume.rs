use serde::{Deserialize, Serialize};

use crate::models::domain::Domain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    Intermediate,
    Senior,
}

impl ExperienceLevel {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "junior" => Some(Self::Junior),
            "intermediate" => Some(Self::Intermediate),
            "senior" => Some(Self::Senior),
            _ => None,
        }
    }
}

/// The analysis result returned to the client for one upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub score: u8,
    pub likely_field: Domain,
    pub match_confidence: u8,
    pub recommended_skills: Vec<String>,
}

/// Whatever a parser managed to extract. Every enrichable field is optional;
/// `skills` defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "ParsedResumePayload")]
pub struct PartialResume {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub score: Option<u8>,
    pub likely_field: Option<Domain>,
    pub match_confidence: Option<u8>,
    pub recommended_skills: Option<Vec<String>>,
}

/// Loosely typed wire shape emitted by external parsers and the LLM.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedResumePayload {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    skills: Option<Vec<String>>,
    experience_level: Option<String>,
    score: Option<f64>,
    #[serde(alias = "targetField")]
    likely_field: Option<String>,
    match_confidence: Option<f64>,
    recommended_skills: Option<Vec<String>>,
}

impl From<ParsedResumePayload> for PartialResume {
    fn from(raw: ParsedResumePayload) -> Self {
        let skills = raw
            .skills
            .unwrap_or_default()
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        PartialResume {
            name: non_blank(raw.name),
            email: non_blank(raw.email),
            phone: non_blank(raw.phone),
            skills,
            experience_level: raw
                .experience_level
                .as_deref()
                .and_then(ExperienceLevel::from_name),
            score: raw.score.map(percent),
            // A field name outside the domain table still counts as provided,
            // and resolves to the default domain.
            likely_field: non_blank(raw.likely_field)
                .map(|f| Domain::from_name_or_default(Some(&f))),
            match_confidence: raw.match_confidence.map(percent),
            recommended_skills: raw.recommended_skills,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_data_serializes_camel_case() {
        let data = ResumeData {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            skills: vec!["Rust".to_string()],
            experience_level: ExperienceLevel::Junior,
            score: 33,
            likely_field: Domain::SoftwareDevelopment,
            match_confidence: 85,
            recommended_skills: vec![],
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["experienceLevel"], "Junior");
        assert_eq!(json["likelyField"], "Software Development");
        assert_eq!(json["matchConfidence"], 85);
        assert!(json.get("recommendedSkills").is_some());
    }

    #[test]
    fn test_partial_resume_tolerates_loose_payloads() {
        let partial: PartialResume = serde_json::from_str(
            r#"{
                "name": "  ",
                "email": "a@b.io",
                "skills": ["Python", " ", "SQL"],
                "experienceLevel": "senior",
                "score": 130.4,
                "targetField": "Basket Weaving",
                "extra": true
            }"#,
        )
        .unwrap();

        assert_eq!(partial.name, None);
        assert_eq!(partial.email.as_deref(), Some("a@b.io"));
        assert_eq!(partial.skills, vec!["Python", "SQL"]);
        assert_eq!(partial.experience_level, Some(ExperienceLevel::Senior));
        assert_eq!(partial.score, Some(100));
        assert_eq!(partial.likely_field, Some(Domain::SoftwareDevelopment));
        assert_eq!(partial.match_confidence, None);
        assert_eq!(partial.recommended_skills, None);
    }

    #[test]
    fn test_unknown_experience_level_is_dropped() {
        let partial: PartialResume =
            serde_json::from_str(r#"{"experienceLevel": "Wizard"}"#).unwrap();
        assert_eq!(partial.experience_level, None);
        assert!(partial.skills.is_empty());
    }
}
