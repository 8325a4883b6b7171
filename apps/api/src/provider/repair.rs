//! JSON repair for free-text model output.
//!
//! Generative backends often wrap JSON in prose or markdown code fences.
//! `coerce_json` first tries a direct parse, then falls back to the substring
//! between the first `{` and the last `}`. Anything beyond that is a
//! `Malformed` error; there are no deeper heuristics.

use serde_json::Value;

use crate::provider::ProviderError;

/// Coerces raw model output into a JSON value, or fails with `Malformed`.
pub fn coerce_json(text: &str) -> Result<Value, ProviderError> {
    let trimmed = text.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Ok(value);
    }

    let start = trimmed.find('{');
    let end = trimmed.rfind('}');
    if let (Some(start), Some(end)) = (start, end) {
        if end > start {
            if let Ok(value) = serde_json::from_str::<Value>(&trimmed[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(ProviderError::Malformed(format!(
        "model output is not valid JSON: {}",
        truncate(trimmed, 120)
    )))
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_json_parses() {
        let value = coerce_json(r#"{"matchScore": 80}"#).unwrap();
        assert_eq!(value, json!({"matchScore": 80}));
    }

    #[test]
    fn test_repairs_json_wrapped_in_code_fence() {
        let raw = "Here is the result:\n```json\n{\"matchScore\":80}\n```";
        let value = coerce_json(raw).unwrap();
        assert_eq!(value, json!({"matchScore": 80}));
    }

    #[test]
    fn test_repairs_json_wrapped_in_prose() {
        let raw = "Sure! The candidate analysis is {\"recommendation\": \"review\"} — let me know.";
        let value = coerce_json(raw).unwrap();
        assert_eq!(value, json!({"recommendation": "review"}));
    }

    #[test]
    fn test_uses_last_closing_brace_for_nested_objects() {
        let raw = "Result: {\"outer\": {\"inner\": 1}}";
        let value = coerce_json(raw).unwrap();
        assert_eq!(value, json!({"outer": {"inner": 1}}));
    }

    #[test]
    fn test_unrepairable_text_is_malformed() {
        let err = coerce_json("I could not produce a score, sorry.").unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[test]
    fn test_broken_braces_are_malformed() {
        let err = coerce_json("{ this is not json }").unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[test]
    fn test_empty_input_is_malformed() {
        assert!(matches!(
            coerce_json("").unwrap_err(),
            ProviderError::Malformed(_)
        ));
    }
}
