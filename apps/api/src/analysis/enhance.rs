//! Enhancement: turns whatever a parser produced into a complete `ResumeData`.
//!
//! A parser result is first classified as either complete or needing
//! enhancement; the builder then fills each missing field from the classifier,
//! recommender and scorer. The fallback path goes through the same builder.

use crate::analysis::{classifier, recommender, scorer};
use crate::models::resume::{PartialResume, ResumeData};

pub const PLACEHOLDER_NAME: &str = "Guest User";
pub const PLACEHOLDER_EMAIL: &str = "guest@example.com";
pub const PLACEHOLDER_PHONE: &str = "+1 (555) 123-4567";

/// A parser result, split by whether anything needs to be derived.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Complete(ResumeData),
    NeedsEnhancement(PartialResume),
}

impl From<PartialResume> for ParseOutcome {
    fn from(partial: PartialResume) -> Self {
        match partial {
            PartialResume {
                name: Some(name),
                email: Some(email),
                phone: Some(phone),
                skills,
                experience_level: Some(experience_level),
                score: Some(score),
                likely_field: Some(likely_field),
                match_confidence: Some(match_confidence),
                recommended_skills: Some(recommended_skills),
            } => {
                let recommended_skills = recommender::sanitize(recommended_skills, &skills);
                ParseOutcome::Complete(ResumeData {
                    name,
                    email,
                    phone,
                    skills,
                    experience_level,
                    score,
                    likely_field,
                    match_confidence,
                    recommended_skills,
                })
            }
            partial => ParseOutcome::NeedsEnhancement(partial),
        }
    }
}

impl ParseOutcome {
    /// Resolves the outcome to a full result, deriving whatever is missing.
    pub fn finish(self) -> ResumeData {
        match self {
            ParseOutcome::Complete(data) => data,
            ParseOutcome::NeedsEnhancement(partial) => ResumeBuilder::new(partial).build(),
        }
    }
}

/// Fills the optional fields of a [`PartialResume`] with derived defaults.
pub struct ResumeBuilder {
    partial: PartialResume,
}

impl ResumeBuilder {
    pub fn new(partial: PartialResume) -> Self {
        Self { partial }
    }

    pub fn build(self) -> ResumeData {
        let PartialResume {
            name,
            email,
            phone,
            skills,
            experience_level,
            score,
            likely_field,
            match_confidence,
            recommended_skills,
        } = self.partial;

        let skill_count = skills.len();
        let likely_field = likely_field.unwrap_or_else(|| classifier::classify(&skills));
        let recommended_skills = match recommended_skills {
            Some(list) => recommender::sanitize(list, &skills),
            None => recommender::recommend(likely_field, &skills),
        };
        let score = score.unwrap_or_else(|| scorer::score(skill_count));

        ResumeData {
            name: name.unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
            email: email.unwrap_or_else(|| PLACEHOLDER_EMAIL.to_string()),
            phone: phone.unwrap_or_else(|| PLACEHOLDER_PHONE.to_string()),
            experience_level: experience_level
                .unwrap_or_else(|| scorer::experience_level(skill_count)),
            score,
            likely_field,
            match_confidence: match_confidence.unwrap_or_else(|| scorer::match_confidence(score)),
            recommended_skills,
            skills,
        }
    }
}
