//! Orchestrate use case
//!
//! Runs the full multi-agent flow: question extraction, concurrent
//! specialist agents, and synthesis. Never fails — every internal failure
//! is captured in the result so the caller always receives a well-formed
//! document.

use crate::config::ResearchParams;
use crate::ports::chat_gateway::GatewaySet;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::extract_questions::ExtractQuestionsUseCase;
use crate::use_cases::run_agent::RunAgentUseCase;
use crate::use_cases::synthesize::SynthesizeUseCase;
use scout_domain::{
    AgentProfile, AgentReport, Domain, ExtractionStage, OrchestrationResult, Phase,
    ResearchQuestion, SynthesisOutcome,
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Use case for orchestrating a multi-agent research run
pub struct OrchestrateUseCase {
    gateways: GatewaySet,
    params: ResearchParams,
}

impl OrchestrateUseCase {
    pub fn new(gateways: GatewaySet, params: ResearchParams) -> Self {
        Self { gateways, params }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, note_text: &str) -> OrchestrationResult {
        self.execute_with_progress(note_text, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        note_text: &str,
        progress: &dyn ProgressNotifier,
    ) -> OrchestrationResult {
        // Phase 1: Question extraction
        progress.on_phase_start(&Phase::Extraction, 1);
        let extracted = ExtractQuestionsUseCase::new(
            Arc::clone(&self.gateways.analysis),
            self.params.clone(),
        )
        .execute(note_text)
        .await;
        progress.on_phase_complete(&Phase::Extraction);

        if extracted.questions.is_empty() {
            // The extractor guarantees a non-empty result, so this branch
            // only fires if that invariant is ever broken upstream.
            warn!("extraction produced no questions");
            return Self::empty_extraction_result(note_text, extracted.cost_units);
        }

        info!(
            "extracted {} questions via {:?} path",
            extracted.questions.len(),
            extracted.stage
        );

        // Phase 2: Concurrent agent research
        let reports = self
            .phase_agents(note_text, &extracted.questions, progress)
            .await;

        // Phase 3: Synthesis
        progress.on_phase_start(&Phase::Synthesis, 1);
        let synthesis = SynthesizeUseCase::new(
            Arc::clone(&self.gateways.analysis),
            self.params.clone(),
        )
        .execute(note_text, &extracted.questions, &reports)
        .await;
        progress.on_phase_complete(&Phase::Synthesis);

        let total_cost_units = extracted.cost_units
            + reports.values().map(|r| r.cost_units).sum::<u32>()
            + synthesis.cost_units;

        OrchestrationResult::new(
            note_text,
            extracted.questions,
            reports,
            synthesis,
            total_cost_units,
        )
    }

    /// Dispatch one agent per distinct question domain, concurrently.
    /// Waits for all of them; one agent's failure never cancels siblings.
    async fn phase_agents(
        &self,
        note_text: &str,
        questions: &[ResearchQuestion],
        progress: &dyn ProgressNotifier,
    ) -> BTreeMap<Domain, AgentReport> {
        let domains: BTreeSet<Domain> = questions.iter().map(|q| q.domain).collect();

        let mut scheduled = Vec::new();
        let mut join_set = JoinSet::new();

        for domain in domains {
            let Some(profile) = AgentProfile::for_domain(domain) else {
                warn!("no agent registered for domain {}, dropping", domain);
                continue;
            };
            scheduled.push(domain);

            let gateway = Arc::clone(&self.gateways.research);
            let params = self.params.clone();
            let questions = questions.to_vec();
            let context = note_text.to_string();

            join_set.spawn(async move {
                let report = RunAgentUseCase::new(gateway, params)
                    .execute(profile, &questions, &context)
                    .await;
                (domain, report)
            });
        }

        progress.on_phase_start(&Phase::Agents, scheduled.len());

        let mut reports = BTreeMap::new();

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((domain, report)) => {
                    info!(
                        "{} finished (success: {})",
                        report.agent_name,
                        report.is_success()
                    );
                    progress.on_agent_complete(&domain, report.is_success());
                    reports.insert(domain, report);
                }
                Err(e) => {
                    warn!("agent task join error: {}", e);
                }
            }
        }

        // A panicked task never delivered its report
        for domain in scheduled {
            if !reports.contains_key(&domain) {
                let profile_name = AgentProfile::for_domain(domain)
                    .map(|p| p.name)
                    .unwrap_or("UnknownAgent");
                progress.on_agent_complete(&domain, false);
                reports.insert(
                    domain,
                    AgentReport::failure(
                        profile_name,
                        domain,
                        Vec::new(),
                        "Research failed due to API error",
                        "agent task panicked",
                    ),
                );
            }
        }

        progress.on_phase_complete(&Phase::Agents);
        reports
    }

    fn empty_extraction_result(note_text: &str, cost_units: u32) -> OrchestrationResult {
        OrchestrationResult::new(
            note_text,
            Vec::new(),
            BTreeMap::new(),
            SynthesisOutcome {
                synthesis: "No research questions could be extracted from the note.".to_string(),
                executive_summary: "Unable to identify research requirements.".to_string(),
                next_actions: Vec::new(),
                talking_points: Vec::new(),
                cost_units: 0,
                stage: ExtractionStage::Heuristic,
            },
            cost_units,
        )
    }
}
