use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

pub const RESUME_PARSE_SYSTEM: &str = JSON_ONLY_SYSTEM;

pub const RESUME_PARSE_PROMPT: &str = r#"
Extract structured data from the résumé text below.

Return a JSON object with exactly these keys:
{
  "name": string or null,
  "email": string or null,
  "phone": string or null,
  "skills": [string],
  "experienceLevel": "Junior" | "Intermediate" | "Senior" | null
}

Rules:
- "skills" lists concrete technologies, tools and methods named in the text, in the order they appear.
- Use the candidate's own wording for each skill; do not invent skills that are not mentioned.
- Use null for anything the text does not state.

Résumé:
"""
{resume_text}
"""
"#;
