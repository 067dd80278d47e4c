//! Résumé Analysis: orchestrates parse → enhance, with synthetic fallback.
//!
//! Flow: parser.parse → ParseOutcome (complete | needs enhancement) → builder.
//! Any parser failure is logged and replaced by `fallback::synthesize`, so the
//! caller always receives a usable `ResumeData`.

use std::sync::Arc;

use tracing::{info, warn};

use crate::analysis::enhance::ParseOutcome;
use crate::analysis::fallback;
use crate::analysis::parser::{ResumeParser, ResumeUpload};
use crate::models::resume::ResumeData;

/// How a result was produced, for logging and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    Parser(&'static str),
    Fallback,
}

impl AnalysisSource {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisSource::Parser(name) => *name,
            AnalysisSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub data: ResumeData,
    pub source: AnalysisSource,
}

pub struct ResumeAnalyzer {
    parser: Arc<dyn ResumeParser>,
}

impl ResumeAnalyzer {
    pub fn new(parser: Arc<dyn ResumeParser>) -> Self {
        Self { parser }
    }

    pub fn parser_name(&self) -> &'static str {
        self.parser.name()
    }

    pub async fn analyze(&self, upload: &ResumeUpload) -> Analysis {
        match self.parser.parse(upload).await {
            Ok(partial) => {
                let outcome = ParseOutcome::from(partial);
                if let ParseOutcome::NeedsEnhancement(_) = &outcome {
                    info!(
                        "Parser '{}' returned a partial result for {}; enhancing",
                        self.parser.name(),
                        upload.file_name
                    );
                }
                Analysis {
                    data: outcome.finish(),
                    source: AnalysisSource::Parser(self.parser.name()),
                }
            }
            Err(e) => {
                warn!(
                    "Parser '{}' failed for {}: {e}; using fallback analysis",
                    self.parser.name(),
                    upload.file_name
                );
                Analysis {
                    data: fallback::synthesize(&upload.file_name),
                    source: AnalysisSource::Fallback,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::analysis::parser::ParseError;
    use crate::models::domain::Domain;
    use crate::models::resume::PartialResume;

    struct FailingParser;

    #[async_trait]
    impl ResumeParser for FailingParser {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn parse(&self, _upload: &ResumeUpload) -> Result<PartialResume, ParseError> {
            Err(ParseError::Process {
                code: Some(1),
                stderr: "ModuleNotFoundError: No module named 'PyPDF2'".to_string(),
            })
        }
    }

    struct FixedParser(PartialResume);

    #[async_trait]
    impl ResumeParser for FixedParser {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn parse(&self, _upload: &ResumeUpload) -> Result<PartialResume, ParseError> {
            Ok(self.0.clone())
        }
    }

    fn upload() -> ResumeUpload {
        ResumeUpload::new("alex_kim.pdf", b"%PDF-1.4".to_vec())
    }

    #[tokio::test]
    async fn test_failing_parser_yields_well_formed_fallback() {
        let analyzer = ResumeAnalyzer::new(Arc::new(FailingParser));
        let analysis = analyzer.analyze(&upload()).await;

        assert_eq!(analysis.source, AnalysisSource::Fallback);
        let data = analysis.data;
        assert!(!data.skills.is_empty());
        assert!(data.score <= 100);
        assert_eq!(data.name, "Alex Kim");
        for rec in &data.recommended_skills {
            assert!(!data.skills.iter().any(|s| s.eq_ignore_ascii_case(rec)));
        }
    }

    #[tokio::test]
    async fn test_partial_parser_result_is_enhanced() {
        let partial = PartialResume {
            name: Some("Alex Kim".to_string()),
            skills: vec!["Pandas".to_string(), "NumPy".to_string(), "Statistics".to_string()],
            ..Default::default()
        };
        let analyzer = ResumeAnalyzer::new(Arc::new(FixedParser(partial)));
        let analysis = analyzer.analyze(&upload()).await;

        assert_eq!(analysis.source, AnalysisSource::Parser("fixed"));
        assert_eq!(analysis.source.label(), "fixed");
        assert_eq!(analysis.data.likely_field, Domain::DataScience);
        assert_eq!(analysis.data.score, 49);
        assert_eq!(
            analysis.data.recommended_skills,
            vec!["TensorFlow", "PyTorch", "Scikit-learn", "Big Data", "Data Visualization"]
        );
    }
}
