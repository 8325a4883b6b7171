// LLM prompt constants for résumé parsing.

/// System prompt for résumé extraction; demands JSON-only output.
pub const RESUME_PARSE_SYSTEM: &str =
    "You are an expert at parsing resumes. Extract structured data and return \
    only valid JSON. Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Résumé extraction prompt template. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Extract the following information from this resume text and return ONLY a valid JSON object with no additional text:

{
  "name": "Full name",
  "email": "Email address",
  "phone": "Phone number (if available)",
  "skills": ["skill1", "skill2", ...],
  "experience": number (years of experience),
  "education": "Education details",
  "summary": "Brief professional summary"
}

Resume text:
{resume_text}

Return only the JSON object, no markdown, no code blocks, just the JSON."#;
