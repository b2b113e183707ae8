//! Run agent use case
//!
//! Executes one agent profile against its share of the extracted
//! questions. Failures are captured in the report rather than propagated,
//! so a single agent can never take down the run.

use crate::config::ResearchParams;
use crate::ports::chat_gateway::{ChatGateway, ChatRequest};
use scout_domain::{AgentProfile, AgentReport, ResearchQuestion, parsing, util};
use std::sync::Arc;
use tracing::{debug, warn};

/// Findings fall back to a prefix of the raw response when the FINDINGS
/// header is absent
const FINDINGS_FALLBACK_CHARS: usize = 1000;

/// Use case for running one research agent
pub struct RunAgentUseCase {
    gateway: Arc<dyn ChatGateway>,
    params: ResearchParams,
}

impl RunAgentUseCase {
    pub fn new(gateway: Arc<dyn ChatGateway>, params: ResearchParams) -> Self {
        Self { gateway, params }
    }

    /// Run the agent on the questions matching its domain.
    ///
    /// An empty share of questions and a transport failure both yield a
    /// failure report; neither is an error of this use case.
    pub async fn execute(
        &self,
        profile: &AgentProfile,
        questions: &[ResearchQuestion],
        shared_context: &str,
    ) -> AgentReport {
        let assigned: Vec<String> = questions
            .iter()
            .filter(|q| q.domain == profile.domain)
            .map(|q| q.text.clone())
            .collect();

        if assigned.is_empty() {
            debug!("{} has no questions to address", profile.name);
            return AgentReport::failure(
                profile.name,
                profile.domain,
                assigned,
                "",
                "No questions assigned to this agent",
            );
        }

        let request = ChatRequest::new(
            profile.render_prompt(&assigned, shared_context),
            self.params.max_research_tokens,
            self.params.research_temperature,
        )
        .with_system(profile.system_prompt);

        match self.gateway.complete(request).await {
            Ok(completion) => {
                debug!("{} completed research", profile.name);
                Self::parse_report(profile, assigned, &completion.text)
                    .with_cost_units(completion.cost_units)
            }
            Err(e) => {
                warn!("{} research failed: {}", profile.name, e);
                AgentReport::failure(
                    profile.name,
                    profile.domain,
                    assigned,
                    "Research failed due to API error",
                    e.to_string(),
                )
            }
        }
    }

    /// Slice the four structured sections out of the response. A missing
    /// FINDINGS header degrades to a raw-response prefix; missing list
    /// sections degrade to empty lists.
    fn parse_report(profile: &AgentProfile, assigned: Vec<String>, content: &str) -> AgentReport {
        let findings = {
            let section = parsing::extract_section(content, "FINDINGS:", Some("KEY INSIGHTS:"));
            if section.is_empty() {
                util::excerpt(content, FINDINGS_FALLBACK_CHARS).to_string()
            } else {
                section
            }
        };

        let key_insights = parsing::bullet_list(&parsing::extract_section(
            content,
            "KEY INSIGHTS:",
            Some("RECOMMENDATIONS:"),
        ));
        let recommendations = parsing::bullet_list(&parsing::extract_section(
            content,
            "RECOMMENDATIONS:",
            Some("TALKING POINTS:"),
        ));
        let talking_points =
            parsing::bullet_list(&parsing::extract_section(content, "TALKING POINTS:", None));

        AgentReport::success(profile.name, profile.domain, assigned, findings)
            .with_key_insights(key_insights)
            .with_recommendations(recommendations)
            .with_talking_points(talking_points)
    }
}
