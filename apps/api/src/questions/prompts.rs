// LLM prompt constants for interview question generation.

/// System prompt for question generation; demands JSON-only output.
pub const QUESTIONS_SYSTEM: &str =
    "You are an expert interviewer. Generate relevant, insightful interview \
    questions. You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Question generation prompt template. Replace `{job_title}`,
/// `{job_description}`, `{candidate_name}`, `{candidate_skills}`,
/// `{candidate_experience}` and `{missing_skills}` before sending.
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate personalized interview questions for this candidate applying for {job_title}.

Job Description: {job_description}

Candidate Profile:
- Name: {candidate_name}
- Skills: {candidate_skills}
- Experience: {candidate_experience} years
- Missing Skills: {missing_skills}

Generate:
1. 5 Technical questions specific to their skills and the job role
2. 3 Behavioral questions
3. 2 Scenario-based questions

Return ONLY a valid JSON object:
{
  "technical": ["question1", "question2", ...],
  "behavioral": ["question1", "question2", ...],
  "scenario": ["question1", "question2"],
  "personalized": "Personalized opening statement"
}

Return only the JSON object, no markdown, no code blocks."#;
