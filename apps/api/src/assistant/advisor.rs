use crate::assistant::prompts::{PROJECT_ADVISOR_SYSTEM, PROJECT_HELP_PROMPT, PROJECT_IDEAS_PROMPT};
use crate::llm_client::{LlmClient, LlmError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectRequest {
    ProjectIdeas,
    ProjectHelp,
}

impl ProjectRequest {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "project_ideas" => Some(Self::ProjectIdeas),
            "project_help" => Some(Self::ProjectHelp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectIdeas => "project_ideas",
            Self::ProjectHelp => "project_help",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Self::ProjectIdeas => PROJECT_IDEAS_PROMPT,
            Self::ProjectHelp => PROJECT_HELP_PROMPT,
        }
    }
}

pub fn build_prompt(request: ProjectRequest, skills: &[String], resume_text: &str) -> String {
    request
        .template()
        .replace("{skills}", &skills.join(", "))
        .replace("{resume_text}", resume_text)
}

/// Asks the model for project ideas or build guidance. No fallback.
pub async fn advise(
    llm: &LlmClient,
    request: ProjectRequest,
    skills: &[String],
    resume_text: &str,
) -> Result<String, LlmError> {
    let prompt = build_prompt(request, skills, resume_text);
    llm.call(&prompt, PROJECT_ADVISOR_SYSTEM).await
}
