//! Research parameters — model call budgets.
//!
//! [`ResearchParams`] groups the static token and temperature budgets for
//! each model call the use cases make. These are application-layer
//! concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Token and temperature budgets for each research stage.
///
/// Extraction and merge run on the analysis gateway with low temperature;
/// agent research runs hotter on the research gateway; synthesis sits in
/// between.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchParams {
    /// Token budget for the question extraction call.
    pub max_extraction_tokens: u32,
    /// Temperature for question extraction.
    pub extraction_temperature: f32,
    /// Token budget for each agent research call.
    pub max_research_tokens: u32,
    /// Temperature for agent research.
    pub research_temperature: f32,
    /// Token budget for the multi-agent synthesis call.
    pub max_synthesis_tokens: u32,
    /// Temperature for multi-agent synthesis.
    pub synthesis_temperature: f32,
    /// Token budget for the single-pass perspective merge.
    pub max_merge_tokens: u32,
    /// Temperature for the perspective merge.
    pub merge_temperature: f32,
}

impl Default for ResearchParams {
    fn default() -> Self {
        Self {
            max_extraction_tokens: 1000,
            extraction_temperature: 0.3,
            max_research_tokens: 800,
            research_temperature: 0.7,
            max_synthesis_tokens: 2000,
            synthesis_temperature: 0.5,
            max_merge_tokens: 1000,
            merge_temperature: 0.3,
        }
    }
}

impl ResearchParams {
    // ==================== Builder Methods ====================

    pub fn with_max_research_tokens(mut self, max: u32) -> Self {
        self.max_research_tokens = max;
        self
    }

    pub fn with_max_synthesis_tokens(mut self, max: u32) -> Self {
        self.max_synthesis_tokens = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ResearchParams::default();
        assert_eq!(params.max_extraction_tokens, 1000);
        assert_eq!(params.max_research_tokens, 800);
        assert_eq!(params.max_synthesis_tokens, 2000);
        assert_eq!(params.max_merge_tokens, 1000);
    }

    #[test]
    fn test_builder() {
        let params = ResearchParams::default()
            .with_max_research_tokens(400)
            .with_max_synthesis_tokens(1000);

        assert_eq!(params.max_research_tokens, 400);
        assert_eq!(params.max_synthesis_tokens, 1000);
    }
}
