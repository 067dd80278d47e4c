use crate::analysis::enhance::{ResumeBuilder, PLACEHOLDER_EMAIL, PLACEHOLDER_PHONE};
use crate::models::resume::{PartialResume, ResumeData};

/// Skills assumed when no parser result is available.
pub const FALLBACK_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "TypeScript",
    "HTML/CSS",
    "Git",
    "REST API",
    "SQL",
];

/// Builds a plausible result without any external input. Never fails.
pub fn synthesize(file_name: &str) -> ResumeData {
    let partial = PartialResume {
        name: name_from_file_name(file_name),
        email: Some(PLACEHOLDER_EMAIL.to_string()),
        phone: Some(PLACEHOLDER_PHONE.to_string()),
        skills: FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    };
    ResumeBuilder::new(partial).build()
}

/// `jane_doe-cv.final.pdf` → `Jane Doe Cv`. Returns `None` when nothing usable remains.
pub fn name_from_file_name(file_name: &str) -> Option<String> {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let stem = base.split('.').next().unwrap_or_default();

    let words: Vec<String> = stem
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
