//! Agent report value object

use crate::core::domain::Domain;
use crate::parsing::MAX_LIST_ITEMS;
use serde::{Deserialize, Serialize};

/// Default confidence assigned when structured parsing fully succeeds.
/// Declared but not calibrated; nothing downstream branches on it.
pub const DEFAULT_CONFIDENCE: f32 = 0.8;

/// Structured findings from one research agent invocation (Value Object)
///
/// Produced by exactly one agent run and never mutated afterwards; a
/// retry produces a new report, not an edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentReport {
    /// Roster name of the agent that produced this report
    pub agent_name: String,
    /// The agent's domain
    pub domain: Domain,
    /// Texts of the questions this agent was asked to address
    pub questions_addressed: Vec<String>,
    /// Free-text findings narrative
    pub findings: String,
    /// Bulleted insights, capped at 10
    pub key_insights: Vec<String>,
    /// Bulleted recommendations, capped at 10
    pub recommendations: Vec<String>,
    /// Bulleted talking points, capped at 10
    pub talking_points: Vec<String>,
    /// Fixed at [`DEFAULT_CONFIDENCE`] on successful parse
    pub confidence: f32,
    /// Sources referenced by the findings
    pub sources: Vec<String>,
    /// Whether this agent produced usable findings
    pub success: bool,
    /// Error message if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Estimated tokens consumed, including failed transport attempts
    pub cost_units: u32,
}

impl AgentReport {
    /// Creates a successful report. List fields are re-capped defensively
    /// so the ≤10 invariant holds regardless of the caller.
    pub fn success(
        agent_name: impl Into<String>,
        domain: Domain,
        questions_addressed: Vec<String>,
        findings: impl Into<String>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            domain,
            questions_addressed,
            findings: findings.into(),
            key_insights: Vec::new(),
            recommendations: Vec::new(),
            talking_points: Vec::new(),
            confidence: DEFAULT_CONFIDENCE,
            sources: Vec::new(),
            success: true,
            error: None,
            cost_units: 0,
        }
    }

    /// Creates a failed report. Findings carry a neutral placeholder and
    /// the list fields stay empty — never a partially-populated state.
    pub fn failure(
        agent_name: impl Into<String>,
        domain: Domain,
        questions_addressed: Vec<String>,
        findings: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            domain,
            questions_addressed,
            findings: findings.into(),
            key_insights: Vec::new(),
            recommendations: Vec::new(),
            talking_points: Vec::new(),
            confidence: 0.0,
            sources: Vec::new(),
            success: false,
            error: Some(error.into()),
            cost_units: 0,
        }
    }

    pub fn with_key_insights(mut self, items: Vec<String>) -> Self {
        self.key_insights = items;
        self.key_insights.truncate(MAX_LIST_ITEMS);
        self
    }

    pub fn with_recommendations(mut self, items: Vec<String>) -> Self {
        self.recommendations = items;
        self.recommendations.truncate(MAX_LIST_ITEMS);
        self
    }

    pub fn with_talking_points(mut self, items: Vec<String>) -> Self {
        self.talking_points = items;
        self.talking_points.truncate(MAX_LIST_ITEMS);
        self
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_cost_units(mut self, cost_units: u32) -> Self {
        self.cost_units = cost_units;
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}
