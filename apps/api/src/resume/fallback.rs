//! Regex-based best-effort résumé extraction.
//!
//! A heuristic safety net for when the AI provider is down, not a
//! replacement extractor: it finds an email, a phone number and a probable
//! name line, and leaves everything else empty.

use std::sync::LazyLock;

use regex::Regex;

use crate::resume::parser::ParsedResume;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

/// Digit runs with common separators; validated by digit count afterwards.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\d[\d\s\-().]{6,}\d").expect("valid phone regex")
});

const MIN_PHONE_DIGITS: usize = 8;

/// Lines containing these are document artifacts or headings, not names.
const STRUCTURAL_KEYWORDS: [&str; 8] = [
    "resume", "curriculum", "vitae", "obj", "endobj", "stream", "xref", "<<",
];

/// Document-header markers that rule a line out immediately.
const HEADER_MARKERS: [&str; 3] = ["%PDF", "%%", "<?"];

/// Extracts whatever the regexes can find; all other fields stay empty/zero.
pub fn fallback_parse(resume_text: &str) -> ParsedResume {
    ParsedResume {
        name: find_name(resume_text).unwrap_or_else(|| "Unknown".to_string()),
        email: EMAIL_RE
            .find(resume_text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        phone: find_phone(resume_text).unwrap_or_default(),
        skills: Vec::new(),
        experience: 0,
        education: String::new(),
        summary: String::new(),
    }
}

fn find_phone(text: &str) -> Option<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .find(|candidate| candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS)
}

/// First line that plausibly holds a person's name: 1–4 whitespace-separated
/// tokens, more than 60% alphabetic by length, and not a structured-document
/// artifact.
fn find_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| looks_like_name(line))
        .map(str::to_string)
}

fn looks_like_name(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }
    if HEADER_MARKERS.iter().any(|m| line.starts_with(m)) {
        return false;
    }
    let lower = line.to_lowercase();
    if STRUCTURAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return false;
    }

    let tokens = line.split_whitespace().count();
    if !(1..=4).contains(&tokens) {
        return false;
    }

    let alphabetic = line.chars().filter(|c| c.is_alphabetic()).count();
    alphabetic as f64 / line.chars().count() as f64 > 0.6
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Jane Smith
Senior Backend Engineer with 7 years of experience
jane.smith@example.com | +1 (415) 555-0132
San Francisco, CA";

    #[test]
    fn test_extracts_email() {
        let parsed = fallback_parse(SAMPLE);
        assert_eq!(parsed.email, "jane.smith@example.com");
    }

    #[test]
    fn test_extracts_phone_with_separators() {
        let parsed = fallback_parse(SAMPLE);
        assert!(parsed.phone.chars().filter(char::is_ascii_digit).count() >= 8);
        assert!(parsed.phone.starts_with("+1"));
    }

    #[test]
    fn test_short_digit_runs_are_not_phones() {
        let parsed = fallback_parse("Call 555-0132 for details");
        assert_eq!(parsed.phone, "");
    }

    #[test]
    fn test_first_plausible_line_becomes_name() {
        let parsed = fallback_parse(SAMPLE);
        assert_eq!(parsed.name, "Jane Smith");
    }

    #[test]
    fn test_document_header_lines_are_skipped() {
        let text = "%PDF-1.7\n4 0 obj\nJohn Doe\njohn@example.com";
        let parsed = fallback_parse(text);
        assert_eq!(parsed.name, "John Doe");
    }

    #[test]
    fn test_heading_keywords_are_not_names() {
        let text = "Curriculum Vitae\nMarie Curie\n";
        let parsed = fallback_parse(text);
        assert_eq!(parsed.name, "Marie Curie");
    }

    #[test]
    fn test_long_lines_are_not_names() {
        let text = "one two three four five six seven\nAlan Turing";
        let parsed = fallback_parse(text);
        assert_eq!(parsed.name, "Alan Turing");
    }

    #[test]
    fn test_mostly_numeric_lines_are_not_names() {
        let text = "2020 2021 2022\nKatherine Johnson";
        let parsed = fallback_parse(text);
        assert_eq!(parsed.name, "Katherine Johnson");
    }

    #[test]
    fn test_no_candidates_yields_unknown_and_empty_fields() {
        let parsed = fallback_parse("12345 67890 13579 24680 11223\n99887 77665");
        assert_eq!(parsed.name, "Unknown");
        assert_eq!(parsed.email, "");
        assert!(parsed.skills.is_empty());
        assert_eq!(parsed.experience, 0);
    }
}
