//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use application types where they fit.

use scout_application::ResearchParams;
use serde::{Deserialize, Serialize};

/// Root configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub providers: FileProvidersConfig,
    pub research: ResearchParams,
    pub logging: FileLoggingConfig,
}

/// Provider credentials and model selection from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Anthropic API key; `ANTHROPIC_API_KEY` overrides
    pub anthropic_api_key: Option<String>,
    /// OpenAI API key; `OPENAI_API_KEY` overrides
    pub openai_api_key: Option<String>,
    /// Model for extraction, synthesis, and merging
    pub analysis_model: String,
    /// Model for agent research and the primary single-pass perspective
    pub research_model: String,
    /// Model for the contrasting single-pass perspective
    pub contrast_model: String,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            openai_api_key: None,
            analysis_model: "claude-3-5-haiku-20241022".to_string(),
            research_model: "claude-3-5-sonnet-20250107".to_string(),
            contrast_model: "gpt-4o-mini".to_string(),
        }
    }
}

/// Logging configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path of the JSONL run log; `None` disables it
    pub run_log: Option<String>,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            run_log: Some("note-scout.runs.jsonl".to_string()),
        }
    }
}

impl FileConfig {
    /// Validate the configuration and return the list of issues.
    ///
    /// Returns issues instead of failing so the CLI can report all of them
    /// at once.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.providers.anthropic_api_key.is_none() {
            issues.push("Missing Anthropic API key".to_string());
        }
        if self.providers.openai_api_key.is_none() {
            issues.push("Missing OpenAI API key".to_string());
        }

        for (name, value) in [
            ("analysis_model", &self.providers.analysis_model),
            ("research_model", &self.providers.research_model),
            ("contrast_model", &self.providers.contrast_model),
        ] {
            if value.trim().is_empty() {
                issues.push(format!("{} cannot be empty", name));
            }
        }

        for (name, value) in [
            ("max_extraction_tokens", self.research.max_extraction_tokens),
            ("max_research_tokens", self.research.max_research_tokens),
            ("max_synthesis_tokens", self.research.max_synthesis_tokens),
            ("max_merge_tokens", self.research.max_merge_tokens),
        ] {
            if value == 0 {
                issues.push(format!("{} cannot be 0", name));
            }
        }

        for (name, value) in [
            ("extraction_temperature", self.research.extraction_temperature),
            ("research_temperature", self.research.research_temperature),
            ("synthesis_temperature", self.research.synthesis_temperature),
            ("merge_temperature", self.research.merge_temperature),
        ] {
            if !(0.0..=1.0).contains(&value) {
                issues.push(format!("{} must be between 0 and 1", name));
            }
        }

        issues
    }
}
