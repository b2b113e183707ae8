//! Extract questions use case
//!
//! Turns free-form note text into research questions. The model-backed
//! structured path is tried first; any failure there degrades to the pure
//! heuristic extractor, so the result is never empty and never an error.

use crate::config::ResearchParams;
use crate::ports::chat_gateway::{ChatGateway, ChatRequest, GatewayError};
use scout_domain::{ExtractionStage, PromptTemplate, ResearchQuestion, parsing};
use std::sync::Arc;
use tracing::{debug, warn};

/// Questions extracted from one note, with provenance
#[derive(Debug, Clone)]
pub struct ExtractedQuestions {
    /// At least one question for any non-trivial input
    pub questions: Vec<ResearchQuestion>,
    /// Which extraction path produced them
    pub stage: ExtractionStage,
    /// Tokens spent, failed structured attempts included
    pub cost_units: u32,
}

/// Use case for extracting research questions from a note
pub struct ExtractQuestionsUseCase {
    gateway: Arc<dyn ChatGateway>,
    params: ResearchParams,
}

impl ExtractQuestionsUseCase {
    pub fn new(gateway: Arc<dyn ChatGateway>, params: ResearchParams) -> Self {
        Self { gateway, params }
    }

    /// Extract questions, degrading to the heuristic path on any failure.
    pub async fn execute(&self, note_text: &str) -> ExtractedQuestions {
        match self.structured(note_text).await {
            Ok(extracted) if !extracted.questions.is_empty() => extracted,
            Ok(extracted) => {
                debug!("structured extraction returned no questions, using heuristics");
                ExtractedQuestions {
                    questions: parsing::fallback_questions(note_text),
                    stage: ExtractionStage::Heuristic,
                    cost_units: extracted.cost_units,
                }
            }
            Err(e) => {
                warn!("structured extraction failed: {}, using heuristics", e);
                ExtractedQuestions {
                    questions: parsing::fallback_questions(note_text),
                    stage: ExtractionStage::Heuristic,
                    cost_units: 0,
                }
            }
        }
    }

    async fn structured(&self, note_text: &str) -> Result<ExtractedQuestions, GatewayError> {
        let request = ChatRequest::new(
            PromptTemplate::extraction(note_text),
            self.params.max_extraction_tokens,
            self.params.extraction_temperature,
        );
        let completion = self.gateway.complete(request).await?;

        let questions = parsing::parse_question_payload(&completion.text)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        Ok(ExtractedQuestions {
            questions,
            stage: ExtractionStage::Structured,
            cost_units: completion.cost_units,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGateway;
    use scout_domain::Domain;

    #[tokio::test]
    async fn test_structured_path() {
        let payload = r#"[
            {"text": "What is their SOC 2 status?", "domain": "security", "priority": 4},
            {"text": "How do they use GitHub?", "domain": "technical"}
        ]"#;
        let gateway = Arc::new(ScriptedGateway::ok("claude", &[payload]));
        let use_case = ExtractQuestionsUseCase::new(gateway.clone(), ResearchParams::default());

        let extracted = use_case.execute("Meeting prep note").await;

        assert_eq!(extracted.stage, ExtractionStage::Structured);
        assert_eq!(extracted.questions.len(), 2);
        assert_eq!(extracted.questions[0].domain, Domain::Security);
        assert_eq!(extracted.cost_units, 10);

        let requests = gateway.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].max_tokens, 1000);
        assert!(requests[0].prompt.contains("Meeting prep note"));
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back_to_heuristics() {
        let gateway = Arc::new(ScriptedGateway::failing("claude", 1));
        let use_case = ExtractQuestionsUseCase::new(gateway, ResearchParams::default());

        let extracted = use_case
            .execute("What is their compliance posture? Also check github.")
            .await;

        assert_eq!(extracted.stage, ExtractionStage::Heuristic);
        assert!(!extracted.questions.is_empty());
        assert_eq!(extracted.cost_units, 0);
    }

    #[tokio::test]
    async fn test_malformed_payload_falls_back_to_heuristics() {
        let gateway = Arc::new(ScriptedGateway::ok("claude", &["no json in here"]));
        let use_case = ExtractQuestionsUseCase::new(gateway, ResearchParams::default());

        let extracted = use_case.execute("Plain note with no questions").await;

        assert_eq!(extracted.stage, ExtractionStage::Heuristic);
        assert_eq!(extracted.questions.len(), 1);
        assert_eq!(
            extracted.questions[0].text,
            "Research the topics mentioned in the note"
        );
    }

    #[tokio::test]
    async fn test_empty_structured_result_falls_back_keeping_cost() {
        let gateway = Arc::new(ScriptedGateway::ok("claude", &["[]"]));
        let use_case = ExtractQuestionsUseCase::new(gateway, ResearchParams::default());

        let extracted = use_case.execute("Short plain note").await;

        assert_eq!(extracted.stage, ExtractionStage::Heuristic);
        assert!(!extracted.questions.is_empty());
        // The failed structured attempt still cost tokens
        assert_eq!(extracted.cost_units, 10);
    }
}
