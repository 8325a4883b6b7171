// LLM prompt constants for email drafting and reply analysis.

/// System prompt for email drafting; demands JSON-only output.
pub const EMAIL_SYSTEM: &str =
    "You are a professional HR communication expert. Write clear, professional, \
    and respectful emails. You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Invitation prompt. Replace `{candidate_name}`, `{job_title}` and
/// `{interview_details}` before sending.
pub const INVITE_PROMPT_TEMPLATE: &str = r#"Generate a professional interview invitation email for {candidate_name} for the {job_title} position.

{interview_details}

Return ONLY a valid JSON object:
{
  "subject": "Email subject line",
  "body": "Professional email body (formatted nicely)"
}"#;

/// Rejection prompt. Replace `{candidate_name}`, `{job_title}` and `{reason}`.
pub const REJECTION_PROMPT_TEMPLATE: &str = r#"Generate a professional and respectful rejection email for {candidate_name} who applied for {job_title}.

{reason}

Return ONLY a valid JSON object:
{
  "subject": "Email subject line",
  "body": "Professional rejection email body"
}"#;

/// Follow-up prompt. Replace `{candidate_name}` and `{job_title}`.
pub const FOLLOWUP_PROMPT_TEMPLATE: &str = r#"Generate a professional follow-up email for {candidate_name} regarding their application for {job_title}.

Return ONLY a valid JSON object:
{
  "subject": "Email subject line",
  "body": "Professional follow-up email body"
}"#;

/// System prompt for reply analysis.
pub const SENTIMENT_SYSTEM: &str =
    "You are an expert at analyzing email sentiment and tone. Be objective and \
    accurate. You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Reply analysis prompt. Replace `{email_text}` before sending.
pub const SENTIMENT_PROMPT_TEMPLATE: &str = r#"Analyze this email reply and return ONLY a valid JSON object:

Email text:
{email_text}

Return:
{
  "sentiment": "positive" | "neutral" | "negative",
  "urgency": "high" | "medium" | "low",
  "tone": "professional" | "casual" | "formal",
  "summary": "Brief summary of the email content",
  "actionRequired": boolean
}

Return only the JSON object, no markdown, no code blocks."#;
