// LLM prompt constants for candidate scoring.

/// Recruiter-persona system prompt; demands JSON-only output.
pub const SCORING_SYSTEM: &str =
    "You are an expert HR recruiter. Analyze candidates objectively and provide \
    detailed scoring. You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Scoring prompt template. Replace `{candidate_name}`, `{candidate_skills}`,
/// `{candidate_experience}`, `{candidate_summary}`, `{job_title}`,
/// `{job_description}`, `{required_skills}` and `{experience_required}`
/// before sending.
pub const SCORING_PROMPT_TEMPLATE: &str = r#"Analyze this candidate against the job requirements and return ONLY a valid JSON object:

Candidate:
- Name: {candidate_name}
- Skills: {candidate_skills}
- Experience: {candidate_experience} years
- Summary: {candidate_summary}

Job Requirements:
- Title: {job_title}
- Description: {job_description}
- Required Skills: {required_skills}
- Experience Required: {experience_required} years

Return a JSON object with:
{
  "matchScore": number (0-100),
  "strengthAreas": ["strength1", "strength2", ...],
  "missingSkills": ["missing1", "missing2", ...],
  "recommendation": "shortlisted" | "review" | "rejected",
  "reasoning": "Brief explanation of the score"
}

Return only the JSON object, no markdown, no code blocks."#;
