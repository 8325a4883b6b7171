//! Question generation: AI primary path, canned fallback set.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::provider::AiProvider;
use crate::questions::prompts::{QUESTIONS_PROMPT_TEMPLATE, QUESTIONS_SYSTEM};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewQuestions {
    pub technical: Vec<String>,
    pub behavioral: Vec<String>,
    pub scenario: Vec<String>,
    pub personalized: String,
}

#[derive(Debug, Clone)]
pub struct QuestionInput {
    pub job_title: String,
    pub job_description: String,
    pub candidate_name: String,
    pub candidate_skills: Vec<String>,
    pub candidate_experience: i32,
    pub missing_skills: Vec<String>,
}

/// Generates a personalized question set. Provider errors are absorbed:
/// the deterministic fallback set is always available.
pub async fn generate_questions(
    provider: &dyn AiProvider,
    input: &QuestionInput,
) -> InterviewQuestions {
    let missing = if input.missing_skills.is_empty() {
        "None".to_string()
    } else {
        input.missing_skills.join(", ")
    };
    let prompt = QUESTIONS_PROMPT_TEMPLATE
        .replace("{job_title}", &input.job_title)
        .replace("{job_description}", &input.job_description)
        .replace("{candidate_name}", &input.candidate_name)
        .replace("{candidate_skills}", &input.candidate_skills.join(", "))
        .replace(
            "{candidate_experience}",
            &input.candidate_experience.to_string(),
        )
        .replace("{missing_skills}", &missing);

    match provider.generate_json(&prompt, QUESTIONS_SYSTEM).await {
        Ok(value) => from_value(&value),
        Err(e) => {
            warn!("AI question generation failed, using fallback: {e}");
            fallback_questions(input)
        }
    }
}

fn from_value(value: &Value) -> InterviewQuestions {
    InterviewQuestions {
        technical: string_list(value.get("technical")),
        behavioral: string_list(value.get("behavioral")),
        scenario: string_list(value.get("scenario")),
        personalized: value
            .get("personalized")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Deterministic question set built from the job title and first skill.
pub fn fallback_questions(input: &QuestionInput) -> InterviewQuestions {
    let first_skill = input
        .candidate_skills
        .first()
        .map(String::as_str)
        .unwrap_or("React");

    InterviewQuestions {
        technical: vec![
            format!("Explain your experience with {first_skill}."),
            "How do you handle state management?".to_string(),
            "Describe a challenging technical problem you solved.".to_string(),
            "What's your approach to optimizing performance?".to_string(),
            "How do you ensure code quality?".to_string(),
        ],
        behavioral: vec![
            "Tell me about working under pressure.".to_string(),
            "Describe collaborating with a difficult team member.".to_string(),
            "How do you handle feedback?".to_string(),
        ],
        scenario: vec![
            format!(
                "If building a {} application, what's your approach?",
                input.job_title
            ),
            "How would you handle a critical production bug?".to_string(),
        ],
        personalized: if input.candidate_name.is_empty() {
            String::new()
        } else {
            format!(
                "Hi {}, let's discuss your experience.",
                input.candidate_name
            )
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;
    use async_trait::async_trait;
    use serde_json::json;

    struct DownProvider;

    #[async_trait]
    impl AiProvider for DownProvider {
        fn name(&self) -> &'static str {
            "down"
        }

        async fn generate_json(&self, _: &str, _: &str) -> Result<Value, ProviderError> {
            Err(ProviderError::Unavailable("no credentials".to_string()))
        }
    }

    struct FixedProvider(Value);

    #[async_trait]
    impl AiProvider for FixedProvider {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn generate_json(&self, _: &str, _: &str) -> Result<Value, ProviderError> {
            Ok(self.0.clone())
        }
    }

    fn input() -> QuestionInput {
        QuestionInput {
            job_title: "Frontend Engineer".to_string(),
            job_description: "Build UIs".to_string(),
            candidate_name: "Ada".to_string(),
            candidate_skills: vec!["TypeScript".to_string()],
            candidate_experience: 3,
            missing_skills: vec![],
        }
    }

    #[tokio::test]
    async fn test_fallback_set_has_expected_shape() {
        let questions = generate_questions(&DownProvider, &input()).await;
        assert_eq!(questions.technical.len(), 5);
        assert_eq!(questions.behavioral.len(), 3);
        assert_eq!(questions.scenario.len(), 2);
        assert!(questions.technical[0].contains("TypeScript"));
        assert!(questions.scenario[0].contains("Frontend Engineer"));
        assert_eq!(questions.personalized, "Hi Ada, let's discuss your experience.");
    }

    #[tokio::test]
    async fn test_ai_output_mapped_with_defaults() {
        let provider = FixedProvider(json!({
            "technical": ["Q1"],
            "behavioral": ["Q2"]
        }));
        let questions = generate_questions(&provider, &input()).await;
        assert_eq!(questions.technical, vec!["Q1"]);
        assert_eq!(questions.behavioral, vec!["Q2"]);
        assert!(questions.scenario.is_empty());
        assert_eq!(questions.personalized, "");
    }

    #[test]
    fn test_fallback_without_name_or_skills() {
        let mut no_name = input();
        no_name.candidate_name = String::new();
        no_name.candidate_skills = vec![];
        let questions = fallback_questions(&no_name);
        assert!(questions.technical[0].contains("React"));
        assert_eq!(questions.personalized, "");
    }
}
