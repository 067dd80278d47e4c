//! Skill Recommender: suggests skills a candidate does not list yet.

use crate::models::domain::Domain;

/// Maximum number of suggestions returned for one résumé.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Ordered candidate skills for a domain. Every [`Domain`] has an entry.
pub fn candidates(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::SoftwareDevelopment => &[
            "TypeScript",
            "React",
            "Docker",
            "Kubernetes",
            "NoSQL",
            "AWS",
            "CI/CD",
        ],
        Domain::WebDevelopment => &[
            "TypeScript",
            "Next.js",
            "Redux",
            "GraphQL",
            "AWS",
            "Docker",
            "Tailwind CSS",
        ],
        Domain::DataScience => &[
            "TensorFlow",
            "PyTorch",
            "Scikit-learn",
            "Big Data",
            "Data Visualization",
            "R",
            "Spark",
        ],
        Domain::CloudComputing => &[
            "Terraform",
            "Ansible",
            "Google Cloud",
            "Serverless",
            "Microservices",
            "Python",
            "Security",
        ],
        Domain::DevOps => &[
            "Ansible",
            "AWS",
            "Monitoring",
            "Security",
            "Python",
            "Microservices",
            "Cloud Architecture",
        ],
        Domain::MobileDevelopment => &[
            "Jetpack Compose",
            "SwiftUI",
            "Firebase",
            "GraphQL",
            "CI/CD",
            "App Security",
            "Redux",
        ],
        Domain::UiUxDesign => &[
            "Design Systems",
            "Accessibility",
            "Motion Design",
            "User Testing",
            "Sketch",
            "InVision",
            "Design Thinking",
        ],
        Domain::DigitalMarketing => &[
            "Google Ads",
            "Facebook Ads",
            "Marketing Automation",
            "Data Analysis",
            "Conversion Optimization",
            "Growth Hacking",
            "Content Strategy",
        ],
        Domain::ProductManagement => &[
            "Data Analytics",
            "A/B Testing",
            "Market Research",
            "Competitive Analysis",
            "Project Management",
            "Strategic Planning",
            "Technical Writing",
        ],
    }
}

/// First [`MAX_RECOMMENDATIONS`] candidates for `domain` that are not already
/// listed in `existing` (case-insensitive), in table order.
pub fn recommend<S: AsRef<str>>(domain: Domain, existing: &[S]) -> Vec<String> {
    candidates(domain)
        .iter()
        .filter(|candidate| is_new_skill(candidate, existing))
        .take(MAX_RECOMMENDATIONS)
        .map(|s| s.to_string())
        .collect()
}

/// Drops suggestions that duplicate an existing skill and caps the list.
/// Used on recommendation lists supplied by a parser.
pub fn sanitize<S: AsRef<str>>(suggested: Vec<String>, existing: &[S]) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for skill in suggested {
        let skill = skill.trim();
        if skill.is_empty() || !is_new_skill(skill, existing) || !is_new_skill(skill, &kept) {
            continue;
        }
        kept.push(skill.to_string());
        if kept.len() == MAX_RECOMMENDATIONS {
            break;
        }
    }
    kept
}

fn is_new_skill<S: AsRef<str>>(candidate: &str, existing: &[S]) -> bool {
    let candidate = candidate.to_lowercase();
    !existing
        .iter()
        .any(|s| s.as_ref().to_lowercase() == candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_domain_has_enough_candidates() {
        for domain in Domain::ALL {
            assert!(candidates(domain).len() >= MAX_RECOMMENDATIONS, "{domain}");
        }
    }

    #[test]
    fn test_existing_skills_are_filtered_case_insensitively() {
        let recs = recommend(Domain::WebDevelopment, &["typescript", "REDUX"]);
        assert_eq!(recs, vec!["Next.js", "GraphQL", "AWS", "Docker", "Tailwind CSS"]);
    }

    #[test]
    fn test_results_are_capped_and_disjoint_for_all_domains() {
        let existing = ["AWS", "python", "Docker", "Sketch", "GraphQL"];
        for domain in Domain::ALL {
            let recs = recommend(domain, &existing);
            assert!(recs.len() <= MAX_RECOMMENDATIONS);
            for rec in &recs {
                assert!(
                    !existing.iter().any(|e| e.eq_ignore_ascii_case(rec)),
                    "{rec} duplicated for {domain}"
                );
            }
        }
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let existing = ["React"];
        let first = recommend(Domain::SoftwareDevelopment, &existing);
        let second = recommend(Domain::SoftwareDevelopment, &existing);
        assert_eq!(first, second);
        assert_eq!(first, vec!["TypeScript", "Docker", "Kubernetes", "NoSQL", "AWS"]);
    }

    #[test]
    fn test_fewer_than_five_survivors() {
        let existing = ["Ansible", "AWS", "Monitoring", "Security"];
        let recs = recommend(Domain::DevOps, &existing);
        assert_eq!(recs, vec!["Python", "Microservices", "Cloud Architecture"]);
    }

    #[test]
    fn test_sanitize_removes_duplicates_and_caps() {
        let suggested = vec![
            "Rust".to_string(),
            "python".to_string(),
            "rust".to_string(),
            " ".to_string(),
            "Go".to_string(),
            "Kafka".to_string(),
            "gRPC".to_string(),
            "Zig".to_string(),
            "Nix".to_string(),
        ];
        let kept = sanitize(suggested, &["Python"]);
        assert_eq!(kept, vec!["Rust", "Go", "Kafka", "gRPC", "Zig"]);
    }
}
