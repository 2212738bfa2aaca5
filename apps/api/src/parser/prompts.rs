// Prompt constants and prompt-building utilities for resume extraction.

use crate::parser::schema::target_schema;

/// Instructs the model to fill the target schema from raw resume text.
/// `{schema}` and `{resume_text}` are substituted at build time.
const RESUME_EXTRACT_PROMPT: &str = "\
You are an expert ATS (Applicant Tracking System) resume parser.
Extract structured resume data strictly in JSON format following this schema:
{schema}

Rules:
- Return only one JSON object, not multiple.
- Do not include explanations, text, or markdown.
- If data is missing, use null or empty lists.

Resume text:
{resume_text}";

pub fn build_extraction_prompt(resume_text: &str) -> String {
    let schema = serde_json::to_string_pretty(&target_schema())
        .expect("target schema serializes to JSON");
    RESUME_EXTRACT_PROMPT
        .replace("{schema}", &schema)
        .replace("{resume_text}", resume_text)
}
