//! Synthesize use case
//!
//! Combines the agent reports into one document. Always produces a
//! non-empty synthesis: without any successful report it short-circuits to
//! a fixed message, and a failed model call degrades to a deterministic
//! concatenation of the findings.

use crate::config::ResearchParams;
use crate::ports::chat_gateway::{ChatGateway, ChatRequest};
use scout_domain::{
    AgentReport, Domain, ExtractionStage, PromptTemplate, ResearchQuestion, SynthesisOutcome,
    parsing, util,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// Executive summary falls back to a prefix of the synthesis when the
/// EXECUTIVE SUMMARY header is absent
const SUMMARY_FALLBACK_CHARS: usize = 500;

/// Findings excerpt length in the deterministic fallback
const FALLBACK_FINDINGS_CHARS: usize = 200;

/// Items carried per report list in the deterministic fallback
const FALLBACK_ITEMS_PER_REPORT: usize = 3;

/// Talking points surfaced by the deterministic fallback
const FALLBACK_TALKING_POINTS: usize = 8;

/// Use case for synthesizing agent reports
pub struct SynthesizeUseCase {
    gateway: Arc<dyn ChatGateway>,
    params: ResearchParams,
}

impl SynthesizeUseCase {
    pub fn new(gateway: Arc<dyn ChatGateway>, params: ResearchParams) -> Self {
        Self { gateway, params }
    }

    /// Synthesize the successful reports, never failing.
    pub async fn execute(
        &self,
        note_text: &str,
        questions: &[ResearchQuestion],
        reports: &BTreeMap<Domain, AgentReport>,
    ) -> SynthesisOutcome {
        let successful: Vec<&AgentReport> =
            reports.values().filter(|r| r.is_success()).collect();

        if successful.is_empty() {
            return SynthesisOutcome {
                synthesis: "Research could not be completed due to agent failures.".to_string(),
                executive_summary: "Unable to complete research.".to_string(),
                next_actions: vec!["Retry research with different approach".to_string()],
                talking_points: Vec::new(),
                cost_units: 0,
                stage: ExtractionStage::Heuristic,
            };
        }

        let request = ChatRequest::new(
            PromptTemplate::synthesis(note_text, questions, &successful),
            self.params.max_synthesis_tokens,
            self.params.synthesis_temperature,
        );

        match self.gateway.complete(request).await {
            Ok(completion) => Self::parse_synthesis(&completion.text, completion.cost_units),
            Err(e) => {
                warn!("synthesis failed: {}, using deterministic fallback", e);
                Self::fallback_synthesis(&successful)
            }
        }
    }

    fn parse_synthesis(content: &str, cost_units: u32) -> SynthesisOutcome {
        let executive_summary = {
            let section = parsing::extract_section(
                content,
                "EXECUTIVE SUMMARY:",
                Some("DETAILED FINDINGS:"),
            );
            if section.is_empty() {
                util::truncate_str(content, SUMMARY_FALLBACK_CHARS)
            } else {
                section
            }
        };

        let next_actions =
            parsing::bullet_list(&parsing::extract_section(content, "NEXT STEPS:", None));
        let talking_points = parsing::bullet_list(&parsing::extract_section(
            content,
            "MEETING TALKING POINTS:",
            Some("NEXT STEPS:"),
        ));

        SynthesisOutcome {
            synthesis: content.to_string(),
            executive_summary,
            next_actions,
            talking_points,
            cost_units,
            stage: ExtractionStage::Structured,
        }
    }

    /// Deterministic concatenation of the findings, used when the model
    /// synthesis call fails.
    fn fallback_synthesis(successful: &[&AgentReport]) -> SynthesisOutcome {
        let mut findings = Vec::new();
        let mut insights = Vec::new();
        let mut recommendations = Vec::new();
        let mut talking_points = Vec::new();

        for report in successful {
            if !report.findings.is_empty() {
                findings.push(format!(
                    "{}: {}...",
                    report.agent_name,
                    util::excerpt(&report.findings, FALLBACK_FINDINGS_CHARS)
                ));
            }
            insights.extend(report.key_insights.iter().take(FALLBACK_ITEMS_PER_REPORT).cloned());
            recommendations.extend(
                report
                    .recommendations
                    .iter()
                    .take(FALLBACK_ITEMS_PER_REPORT)
                    .cloned(),
            );
            talking_points.extend(
                report
                    .talking_points
                    .iter()
                    .take(FALLBACK_ITEMS_PER_REPORT)
                    .cloned(),
            );
        }

        let synthesis = format!(
            "RESEARCH SUMMARY:\n{}\n\nKEY INSIGHTS:\n{}\n\nRECOMMENDATIONS:\n{}\n\nTALKING POINTS:\n{}",
            findings.join(" "),
            bulleted(&insights),
            bulleted(&recommendations),
            bulleted(&talking_points),
        );

        let executive_summary = format!(
            "Multi-agent research completed with findings from {}",
            successful
                .iter()
                .map(|r| r.agent_name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        talking_points.truncate(FALLBACK_TALKING_POINTS);

        SynthesisOutcome {
            synthesis,
            executive_summary,
            next_actions: vec![
                "Review detailed findings".to_string(),
                "Prepare for discussions".to_string(),
            ],
            talking_points,
            cost_units: 0,
            stage: ExtractionStage::Heuristic,
        }
    }
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGateway;

    fn report_fixture(domain: Domain, name: &str) -> AgentReport {
        AgentReport::success(name, domain, vec!["q".to_string()], format!("{} findings", name))
            .with_key_insights(vec![format!("{} insight", name)])
            .with_recommendations(vec![format!("{} rec", name)])
            .with_talking_points(vec![format!("{} point", name)])
    }

    #[tokio::test]
    async fn test_no_successful_reports_short_circuits() {
        let gateway = Arc::new(ScriptedGateway::ok("claude", &[]));
        let use_case = SynthesizeUseCase::new(gateway.clone(), ResearchParams::default());

        let mut reports = BTreeMap::new();
        reports.insert(
            Domain::Security,
            AgentReport::failure("a", Domain::Security, vec![], "f", "err"),
        );

        let outcome = use_case.execute("note", &[], &reports).await;

        assert_eq!(
            outcome.synthesis,
            "Research could not be completed due to agent failures."
        );
        assert_eq!(outcome.executive_summary, "Unable to complete research.");
        assert_eq!(
            outcome.next_actions,
            vec!["Retry research with different approach"]
        );
        assert_eq!(outcome.stage, ExtractionStage::Heuristic);
        // No model call was made
        assert_eq!(gateway.request_count(), 0);
    }

    #[tokio::test]
    async fn test_structured_synthesis_parsed() {
        let response = "EXECUTIVE SUMMARY:\nStrong partner candidate.\n\
            DETAILED FINDINGS:\nDetails here.\n\
            MEETING TALKING POINTS:\n- Compliance maturity\n\
            NEXT STEPS:\n- Schedule the meeting\n- Share the deck";
        let gateway = Arc::new(ScriptedGateway::ok("claude", &[response]));
        let use_case = SynthesizeUseCase::new(gateway.clone(), ResearchParams::default());

        let mut reports = BTreeMap::new();
        reports.insert(Domain::Security, report_fixture(Domain::Security, "sec"));

        let outcome = use_case.execute("note", &[], &reports).await;

        assert_eq!(outcome.synthesis, response);
        assert_eq!(outcome.executive_summary, "Strong partner candidate.");
        assert_eq!(outcome.talking_points, vec!["Compliance maturity"]);
        assert_eq!(outcome.next_actions, vec!["Schedule the meeting", "Share the deck"]);
        assert_eq!(outcome.stage, ExtractionStage::Structured);
        assert_eq!(outcome.cost_units, 10);

        let requests = gateway.requests();
        assert_eq!(requests[0].max_tokens, 2000);
    }

    #[tokio::test]
    async fn test_missing_summary_header_truncates_response() {
        let long_response = "x".repeat(600);
        let gateway = Arc::new(ScriptedGateway::ok("claude", &[long_response.as_str()]));
        let use_case = SynthesizeUseCase::new(gateway, ResearchParams::default());

        let mut reports = BTreeMap::new();
        reports.insert(Domain::Security, report_fixture(Domain::Security, "sec"));

        let outcome = use_case.execute("note", &[], &reports).await;

        assert_eq!(outcome.executive_summary.chars().count(), 503);
        assert!(outcome.executive_summary.ends_with("..."));
    }

    #[tokio::test]
    async fn test_transport_failure_uses_deterministic_fallback() {
        let gateway = Arc::new(ScriptedGateway::failing("claude", 1));
        let use_case = SynthesizeUseCase::new(gateway, ResearchParams::default());

        let mut reports = BTreeMap::new();
        reports.insert(Domain::Security, report_fixture(Domain::Security, "sec"));
        reports.insert(Domain::Technical, report_fixture(Domain::Technical, "tech"));

        let outcome = use_case.execute("note", &[], &reports).await;

        assert!(outcome.synthesis.starts_with("RESEARCH SUMMARY:"));
        assert!(outcome.synthesis.contains("sec: sec findings..."));
        assert!(outcome.synthesis.contains("• tech insight"));
        assert_eq!(
            outcome.executive_summary,
            "Multi-agent research completed with findings from sec, tech"
        );
        assert_eq!(
            outcome.next_actions,
            vec!["Review detailed findings", "Prepare for discussions"]
        );
        assert_eq!(outcome.talking_points, vec!["sec point", "tech point"]);
        assert_eq!(outcome.stage, ExtractionStage::Heuristic);
        assert_eq!(outcome.cost_units, 0);
    }
}
