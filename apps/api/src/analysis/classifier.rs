//! Field Classifier: buckets a skill list into one professional domain.
//!
//! Scoring is keyword overlap: a keyword counts once if it appears as a
//! substring of at least one lower-cased skill. Deterministic and infallible.

use crate::models::domain::Domain;

/// Keyword substrings per domain. Table order is the tie-break order.
pub const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::WebDevelopment,
        &[
            "javascript", "react", "html", "css", "vue", "angular", "node", "frontend", "web",
        ],
    ),
    (
        Domain::DataScience,
        &[
            "python",
            "r",
            "pandas",
            "numpy",
            "tensorflow",
            "machine learning",
            "statistics",
            "data",
        ],
    ),
    (
        Domain::SoftwareDevelopment,
        &["java", "c#", ".net", "spring", "oop", "software", "c++"],
    ),
    (
        Domain::DevOps,
        &[
            "docker",
            "kubernetes",
            "aws",
            "azure",
            "cloud",
            "ci/cd",
            "jenkins",
            "terraform",
        ],
    ),
    (
        Domain::MobileDevelopment,
        &[
            "android",
            "ios",
            "swift",
            "kotlin",
            "react native",
            "flutter",
            "mobile",
        ],
    ),
];

/// Returns the domain whose keywords overlap the skills the most.
/// Ties go to the earliest domain in [`DOMAIN_KEYWORDS`]; no overlap at all
/// yields the default domain.
pub fn classify<S: AsRef<str>>(skills: &[S]) -> Domain {
    let lowered: Vec<String> = skills.iter().map(|s| s.as_ref().to_lowercase()).collect();

    let mut best = Domain::default();
    let mut best_count = 0;

    for (domain, keywords) in DOMAIN_KEYWORDS {
        let count = keyword_hits(&lowered, keywords);
        if count > best_count {
            best = *domain;
            best_count = count;
        }
    }

    best
}

/// Number of keywords contained in at least one of the (lower-cased) skills.
fn keyword_hits(lowered_skills: &[String], keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|kw| lowered_skills.iter().any(|s| s.contains(*kw)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overlap_returns_default_domain() {
        assert_eq!(classify(&["Cooking", "Sales"]), Domain::SoftwareDevelopment);
    }

    #[test]
    fn test_empty_skills_returns_default_domain() {
        let skills: [&str; 0] = [];
        assert_eq!(classify(&skills), Domain::SoftwareDevelopment);
    }

    #[test]
    fn test_mobile_skills_classify_as_mobile() {
        assert_eq!(classify(&["Swift", "Kotlin"]), Domain::MobileDevelopment);
    }

    #[test]
    fn test_infra_skills_classify_as_devops() {
        assert_eq!(
            classify(&["Docker", "Kubernetes", "Terraform"]),
            Domain::DevOps
        );
    }

    #[test]
    fn test_java_spring_classify_as_software_development() {
        // "spring" also contains the Data Science keyword "r", but scores 1 vs 2.
        assert_eq!(classify(&["Java", "Spring"]), Domain::SoftwareDevelopment);
    }

    #[test]
    fn test_matching_is_substring_based() {
        // "javascript" contains "java" (Software) but hits two Web keywords with "react".
        assert_eq!(classify(&["JavaScript", "React"]), Domain::WebDevelopment);
        assert_eq!(classify(&["Senior Frontend Engineer"]), Domain::WebDevelopment);
    }

    #[test]
    fn test_tie_goes_to_first_domain_in_table() {
        // Web, Data Science ("r" in "docker") and DevOps all score 1.
        assert_eq!(classify(&["HTML", "Docker"]), Domain::WebDevelopment);
    }

    #[test]
    fn test_keyword_counts_once_across_skills() {
        let lowered = vec!["python".to_string(), "python 3".to_string()];
        assert_eq!(keyword_hits(&lowered, &["python"]), 1);
    }
}
