//! Research engine façade
//!
//! Single entry point for researching a note. Routes between the
//! multi-agent pipeline and the cheaper single-pass path, and normalizes
//! both (plus the trivial-input skip) into one outcome shape.

use crate::config::ResearchParams;
use crate::ports::chat_gateway::{ChatGateway, ChatRequest, Completion, GatewayError, GatewaySet};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::orchestrate::OrchestrateUseCase;
use scout_domain::{Category, PromptTemplate, ProviderReport, ResearchOutcome, routing};
use tracing::{info, warn};

/// Use case façade for researching one note
pub struct ResearchEngine {
    gateways: GatewaySet,
    params: ResearchParams,
}

impl ResearchEngine {
    pub fn new(gateways: GatewaySet, params: ResearchParams) -> Self {
        Self { gateways, params }
    }

    /// Research a note with default (no-op) progress
    pub async fn research(
        &self,
        note_text: &str,
        category: Category,
        research_approach: Option<&str>,
    ) -> ResearchOutcome {
        self.research_with_progress(note_text, category, research_approach, &NoProgress)
            .await
    }

    /// Research a note with progress callbacks
    pub async fn research_with_progress(
        &self,
        note_text: &str,
        category: Category,
        research_approach: Option<&str>,
        progress: &dyn ProgressNotifier,
    ) -> ResearchOutcome {
        if routing::is_trivial(note_text) {
            info!("note too short, skipping research");
            return ResearchOutcome::skipped("Note too short for meaningful research");
        }

        if routing::needs_multi_agent(note_text) {
            info!("using multi-agent research for complex note");
            let result = OrchestrateUseCase::new(self.gateways.clone(), self.params.clone())
                .execute_with_progress(note_text, progress)
                .await;
            return ResearchOutcome::from_orchestration(result);
        }

        info!("using single-pass research (category: {})", category);
        self.single_pass(note_text, category, research_approach)
            .await
    }

    /// Single-pass path: the same category prompt to two providers, then a
    /// perspective merge.
    async fn single_pass(
        &self,
        note_text: &str,
        category: Category,
        research_approach: Option<&str>,
    ) -> ResearchOutcome {
        let prompt = PromptTemplate::category_research(category, note_text, research_approach);
        let system = PromptTemplate::category_system(category);

        let request = || {
            ChatRequest::new(
                prompt.clone(),
                self.params.max_research_tokens,
                self.params.research_temperature,
            )
            .with_system(system)
        };

        let (primary, secondary) = tokio::join!(
            self.gateways.research.complete(request()),
            self.gateways.contrast.complete(request()),
        );

        let primary = provider_report(&*self.gateways.research, primary);
        let secondary = provider_report(&*self.gateways.contrast, secondary);

        let (summary, merge_cost) = match (primary.is_success(), secondary.is_success()) {
            (true, true) => self.merge_perspectives(&primary, &secondary).await,
            (true, false) => (labeled_perspective(&primary), 0),
            (false, true) => (labeled_perspective(&secondary), 0),
            (false, false) => (
                "Research could not be completed due to API errors.".to_string(),
                0,
            ),
        };

        ResearchOutcome::single_pass(summary, vec![primary, secondary], merge_cost)
    }

    /// Merge two successful perspectives through the analysis gateway,
    /// degrading to a labeled concatenation when the merge call fails.
    async fn merge_perspectives(
        &self,
        first: &ProviderReport,
        second: &ProviderReport,
    ) -> (String, u32) {
        let request = ChatRequest::new(
            PromptTemplate::perspective_merge(&first.content, &second.content),
            self.params.max_merge_tokens,
            self.params.merge_temperature,
        );

        match self.gateways.analysis.complete(request).await {
            Ok(completion) => (completion.text, completion.cost_units),
            Err(e) => {
                warn!("perspective merge failed: {}, showing both perspectives", e);
                let summary = format!(
                    "Research from {}:\n\n{}\n\n---\n\nResearch from {}:\n\n{}",
                    first.provider.to_uppercase(),
                    first.content,
                    second.provider.to_uppercase(),
                    second.content
                );
                (summary, 0)
            }
        }
    }
}

fn provider_report(
    gateway: &dyn ChatGateway,
    outcome: Result<Completion, GatewayError>,
) -> ProviderReport {
    match outcome {
        Ok(completion) => {
            ProviderReport::success(gateway.provider(), completion.text, completion.cost_units)
        }
        Err(e) => ProviderReport::failure(gateway.provider(), e.to_string()),
    }
}

fn labeled_perspective(report: &ProviderReport) -> String {
    format!(
        "Research from {}:\n\n{}",
        report.provider.to_uppercase(),
        report.content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGateway;
    use scout_domain::ResearchMode;
    use std::sync::Arc;

    fn engine(
        analysis: ScriptedGateway,
        research: ScriptedGateway,
        contrast: ScriptedGateway,
    ) -> ResearchEngine {
        ResearchEngine::new(
            GatewaySet::new(Arc::new(analysis), Arc::new(research), Arc::new(contrast)),
            ResearchParams::default(),
        )
    }

    #[tokio::test]
    async fn test_trivial_note_skips_without_gateway_calls() {
        let analysis = ScriptedGateway::ok("claude", &[]);
        let research = ScriptedGateway::ok("claude", &[]);
        let contrast = ScriptedGateway::ok("openai", &[]);
        let engine = engine(analysis, research, contrast);

        let outcome = engine.research("   hi   ", Category::General, None).await;

        assert_eq!(outcome.mode, ResearchMode::Skipped);
        assert_eq!(outcome.summary, "Note too short for meaningful research");
        assert!(!outcome.success);
    }

    #[tokio::test]
    async fn test_skip_makes_no_requests() {
        let analysis = Arc::new(ScriptedGateway::ok("claude", &[]));
        let research = Arc::new(ScriptedGateway::ok("claude", &[]));
        let contrast = Arc::new(ScriptedGateway::ok("openai", &[]));
        let engine = ResearchEngine::new(
            GatewaySet::new(
                Arc::clone(&analysis) as _,
                Arc::clone(&research) as _,
                Arc::clone(&contrast) as _,
            ),
            ResearchParams::default(),
        );

        engine.research("short", Category::General, None).await;

        assert_eq!(analysis.request_count(), 0);
        assert_eq!(research.request_count(), 0);
        assert_eq!(contrast.request_count(), 0);
    }

    #[tokio::test]
    async fn test_meeting_note_routes_to_multi_agent() {
        let analysis = ScriptedGateway::ok(
            "claude",
            &[
                r#"[{"text": "What is their security posture?", "domain": "security"}]"#,
                "EXECUTIVE SUMMARY:\nFine.\nDETAILED FINDINGS:\nDetails.",
            ],
        );
        let research = ScriptedGateway::ok("claude", &["FINDINGS:\nfound"]);
        let contrast = ScriptedGateway::ok("openai", &[]);
        let engine = engine(analysis, research, contrast);

        let outcome = engine
            .research(
                "Meeting with security leaders about partnership and GitHub forge \
                 collaboration, need 10K analysis before Friday",
                Category::General,
                None,
            )
            .await;

        assert_eq!(outcome.mode, ResearchMode::MultiAgent);
        assert!(outcome.success);
        assert!(!outcome.reports.is_empty());
        assert!(outcome.provider_reports.is_empty());
    }

    #[tokio::test]
    async fn test_single_pass_merges_both_perspectives() {
        let analysis = ScriptedGateway::ok("claude", &["merged summary"]);
        let research = ScriptedGateway::ok("claude", &["perspective one"]);
        let contrast = ScriptedGateway::ok("openai", &["perspective two"]);
        let engine = engine(analysis, research, contrast);

        let outcome = engine
            .research("Best rust async runtimes to evaluate", Category::Software, None)
            .await;

        assert_eq!(outcome.mode, ResearchMode::SinglePass);
        assert!(outcome.success);
        assert_eq!(outcome.summary, "merged summary");
        assert_eq!(outcome.provider_reports.len(), 2);
        // two provider calls at 10 each plus the merge at 10
        assert_eq!(outcome.total_cost_units, 30);
    }

    #[tokio::test]
    async fn test_single_pass_one_provider_down() {
        let analysis = ScriptedGateway::ok("claude", &[]);
        let research = ScriptedGateway::ok("claude", &["perspective one"]);
        let contrast = ScriptedGateway::failing("openai", 1);
        let engine = engine(analysis, research, contrast);

        let outcome = engine
            .research("Best rust async runtimes to evaluate", Category::Software, None)
            .await;

        assert!(outcome.success);
        assert_eq!(outcome.summary, "Research from CLAUDE:\n\nperspective one");
        assert_eq!(
            outcome.provider_reports.iter().filter(|r| r.is_success()).count(),
            1
        );
    }

    #[tokio::test]
    async fn test_single_pass_both_providers_down() {
        let analysis = ScriptedGateway::ok("claude", &[]);
        let research = ScriptedGateway::failing("claude", 1);
        let contrast = ScriptedGateway::failing("openai", 1);
        let engine = engine(analysis, research, contrast);

        let outcome = engine
            .research("Best rust async runtimes to evaluate", Category::Software, None)
            .await;

        assert!(!outcome.success);
        assert_eq!(
            outcome.summary,
            "Research could not be completed due to API errors."
        );
    }

    #[tokio::test]
    async fn test_single_pass_merge_failure_shows_both() {
        let analysis = ScriptedGateway::failing("claude", 1);
        let research = ScriptedGateway::ok("claude", &["perspective one"]);
        let contrast = ScriptedGateway::ok("openai", &["perspective two"]);
        let engine = engine(analysis, research, contrast);

        let outcome = engine
            .research("Best rust async runtimes to evaluate", Category::Software, None)
            .await;

        assert!(outcome.success);
        assert!(outcome.summary.contains("Research from CLAUDE:\n\nperspective one"));
        assert!(outcome.summary.contains("Research from OPENAI:\n\nperspective two"));
    }

    #[tokio::test]
    async fn test_research_approach_appended_to_prompt() {
        let analysis = ScriptedGateway::ok("claude", &["merged"]);
        let research = Arc::new(ScriptedGateway::ok("claude", &["one"]));
        let contrast = ScriptedGateway::ok("openai", &["two"]);
        let engine = ResearchEngine::new(
            GatewaySet::new(
                Arc::new(analysis),
                Arc::clone(&research) as _,
                Arc::new(contrast),
            ),
            ResearchParams::default(),
        );

        engine
            .research(
                "Best rust async runtimes to evaluate",
                Category::Software,
                Some("focus on benchmarks"),
            )
            .await;

        let requests = research.requests();
        assert!(requests[0].prompt.ends_with("Research Approach: focus on benchmarks"));
        assert_eq!(
            requests[0].system.as_deref(),
            Some(PromptTemplate::category_system(Category::Software))
        );
    }
}
