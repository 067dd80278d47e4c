/// System prompt for the conversational career assistant.
pub const CAREER_ASSISTANT_SYSTEM: &str = "You are a helpful career assistant specializing in resume advice, job searching, \
and career development. Help users improve their resumes, find job opportunities, \
and develop skills for their career. Be concise, helpful, and professional. \
Provide specific, actionable advice when possible.";

pub const PROJECT_ADVISOR_SYSTEM: &str = "You are a helpful career advisor and technical mentor.";

/// Placeholders: {skills} (comma-separated), {resume_text}.
pub const PROJECT_IDEAS_PROMPT: &str = r#"Based on these skills: {skills} and this resume: "{resume_text}", suggest 3 project ideas that would showcase and improve these skills. For each project, provide a title, brief description, key technologies to use, and learning outcomes."#;

/// Placeholders: {skills} (comma-separated), {resume_text}.
pub const PROJECT_HELP_PROMPT: &str = r#"Based on these skills: {skills} and this resume: "{resume_text}", provide detailed guidance on how to build a project with these skills. Include steps, resources, and best practices."#;

// ── Canned replies used when the model is unreachable ──

pub const RESUME_REPLY: &str = "To improve your resume, focus on quantifiable achievements rather than just listing responsibilities. Use action verbs and include metrics where possible. Tailor your resume to each job application by matching keywords from the job description.";

pub const INTERVIEW_REPLY: &str = "Prepare for interviews by researching the company, practicing common questions, and preparing stories that demonstrate your skills. Use the STAR method (Situation, Task, Action, Result) to structure your answers about past experiences.";

pub const SKILLS_REPLY: &str = "To enhance your marketability, consider learning in-demand skills like data analysis, cloud computing, or UX design. Look for online courses on platforms like Coursera, Udemy, or LinkedIn Learning that offer certificates upon completion.";

pub const GENERIC_REPLY: &str = "I'm here to help with your career questions. You can ask about resume writing, job search strategies, interview preparation, skill development, or career transitions.";
