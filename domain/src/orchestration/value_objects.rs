//! Orchestration value objects - immutable result types for research runs.
//!
//! These types represent the outputs of each research phase:
//! - [`SynthesisOutcome`] - Combined report built from the agent findings
//! - [`OrchestrationResult`] - Complete result of a multi-agent run
//! - [`ProviderReport`] - One provider's answer on the single-pass path
//! - [`ResearchOutcome`] - Unified shape handed to formatting, whichever
//!   path produced it

use crate::agent::AgentReport;
use crate::core::domain::Domain;
use crate::core::question::ResearchQuestion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Phases of a research run, reported to the progress notifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Extraction,
    Agents,
    Synthesis,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Extraction => "extraction",
            Phase::Agents => "agents",
            Phase::Synthesis => "synthesis",
        }
    }
}

/// Which extraction path produced a set of questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStage {
    /// Model-backed JSON extraction succeeded
    Structured,
    /// Regex fallback fired, either on transport failure or an empty
    /// structured result
    Heuristic,
}

/// Combined report built from the agent findings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisOutcome {
    /// Full synthesis text; never empty, even on total failure
    pub synthesis: String,
    /// Executive summary section, or a truncated excerpt of the synthesis
    pub executive_summary: String,
    /// Bullets from the NEXT STEPS section
    pub next_actions: Vec<String>,
    /// Bullets from the MEETING TALKING POINTS section
    pub talking_points: Vec<String>,
    /// Estimated tokens spent on the synthesis call
    pub cost_units: u32,
    /// Whether the model path or the deterministic fallback produced this
    pub stage: ExtractionStage,
}

/// Complete result of a multi-agent research run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationResult {
    /// The note text the run was asked to research
    pub original_text: String,
    /// Questions driving the run
    pub questions: Vec<ResearchQuestion>,
    /// Per-domain agent reports, in deterministic domain order
    pub reports: BTreeMap<Domain, AgentReport>,
    /// Full synthesis text; never empty
    pub synthesis: String,
    pub executive_summary: String,
    pub next_actions: Vec<String>,
    pub talking_points: Vec<String>,
    /// Tokens spent across extraction, all agents, and synthesis,
    /// failed calls included
    pub total_cost_units: u32,
    /// True iff at least one agent report succeeded
    pub success: bool,
}

impl OrchestrationResult {
    /// Assembles a result from a finished run, deriving `success` from the
    /// reports so the invariant cannot drift.
    pub fn new(
        original_text: impl Into<String>,
        questions: Vec<ResearchQuestion>,
        reports: BTreeMap<Domain, AgentReport>,
        synthesis: SynthesisOutcome,
        total_cost_units: u32,
    ) -> Self {
        let success = reports.values().any(|r| r.is_success());
        Self {
            original_text: original_text.into(),
            questions,
            reports,
            synthesis: synthesis.synthesis,
            executive_summary: synthesis.executive_summary,
            next_actions: synthesis.next_actions,
            talking_points: synthesis.talking_points,
            total_cost_units,
            success,
        }
    }

    pub fn successful_reports(&self) -> impl Iterator<Item = &AgentReport> {
        self.reports.values().filter(|r| r.is_success())
    }
}

/// One provider's answer on the single-pass path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderReport {
    /// Provider label, e.g. "claude" or "openai"
    pub provider: String,
    /// The response content; empty on failure
    pub content: String,
    /// Whether this provider answered successfully
    pub success: bool,
    /// Error message if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Estimated tokens consumed
    pub cost_units: u32,
}

impl ProviderReport {
    pub fn success(provider: impl Into<String>, content: impl Into<String>, cost_units: u32) -> Self {
        Self {
            provider: provider.into(),
            content: content.into(),
            success: true,
            error: None,
            cost_units,
        }
    }

    pub fn failure(provider: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            content: String::new(),
            success: false,
            error: Some(error.into()),
            cost_units: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Which research path handled a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchMode {
    MultiAgent,
    SinglePass,
    Skipped,
}

/// Unified research result, whichever path produced it.
///
/// Both pipelines and the skip path normalize into this shape, so callers
/// never branch on which path ran to read the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchOutcome {
    pub mode: ResearchMode,
    /// Main body text; never empty
    pub summary: String,
    pub executive_summary: String,
    pub next_actions: Vec<String>,
    pub talking_points: Vec<String>,
    pub total_cost_units: u32,
    pub success: bool,
    /// Questions driving the run; empty on the single-pass and skip paths
    pub questions: Vec<ResearchQuestion>,
    /// Per-domain agent reports; empty outside the multi-agent path
    pub reports: BTreeMap<Domain, AgentReport>,
    /// Per-provider results; empty outside the single-pass path
    pub provider_reports: Vec<ProviderReport>,
}

impl ResearchOutcome {
    /// A run that was not attempted, with the reason as the summary.
    pub fn skipped(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            mode: ResearchMode::Skipped,
            summary: reason.clone(),
            executive_summary: reason,
            next_actions: Vec::new(),
            talking_points: Vec::new(),
            total_cost_units: 0,
            success: false,
            questions: Vec::new(),
            reports: BTreeMap::new(),
            provider_reports: Vec::new(),
        }
    }

    pub fn from_orchestration(result: OrchestrationResult) -> Self {
        Self {
            mode: ResearchMode::MultiAgent,
            summary: result.synthesis,
            executive_summary: result.executive_summary,
            next_actions: result.next_actions,
            talking_points: result.talking_points,
            total_cost_units: result.total_cost_units,
            success: result.success,
            questions: result.questions,
            reports: result.reports,
            provider_reports: Vec::new(),
        }
    }

    pub fn single_pass(
        summary: impl Into<String>,
        provider_reports: Vec<ProviderReport>,
        merge_cost_units: u32,
    ) -> Self {
        let summary = summary.into();
        let success = provider_reports.iter().any(|r| r.is_success());
        let total_cost_units = provider_reports
            .iter()
            .map(|r| r.cost_units)
            .sum::<u32>()
            + merge_cost_units;
        Self {
            mode: ResearchMode::SinglePass,
            executive_summary: summary.clone(),
            summary,
            next_actions: Vec::new(),
            talking_points: Vec::new(),
            total_cost_units,
            success,
            questions: Vec::new(),
            reports: BTreeMap::new(),
            provider_reports,
        }
    }
}
