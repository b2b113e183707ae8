//! Prompt templates for each stage of the research flow

use crate::agent::AgentReport;
use crate::category::Category;
use crate::core::question::ResearchQuestion;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// User prompt for structured question extraction
    pub fn extraction(note_content: &str) -> String {
        format!(
            r#"Analyze this note and extract specific research questions that need investigation:

NOTE CONTENT:
"{}"

Extract questions across these domains:
1. SECURITY: Security posture, compliance, risk management, governance
2. TECHNICAL: Infrastructure, GitHub/open source tools, technical capabilities
3. BUSINESS: Financial analysis, market position, executive communications
4. PARTNERSHIP: Sales opportunities, collaboration potential, relationship building

For each question found, determine:
- The specific research question
- Which domain it belongs to
- Priority level (1-5, 5 being critical for the user's goals)
- Additional context that would help research
- Whether it needs synthesis with other domains

Return JSON array with this structure:
[
    {{
        "text": "What is their current security compliance status?",
        "domain": "security",
        "priority": 4,
        "context": "Meeting with security leaders about partnership",
        "requires_synthesis": true
    }}
]

Focus on actionable research questions that would help the user succeed in their stated goals.
Extract 3-8 specific questions maximum."#,
            note_content
        )
    }

    /// User prompt for synthesizing multiple agent reports
    pub fn synthesis(
        note_content: &str,
        questions: &[ResearchQuestion],
        reports: &[&AgentReport],
    ) -> String {
        let question_block = questions
            .iter()
            .map(|q| format!("• {} (Priority: {}, Domain: {})", q.text, q.priority, q.domain))
            .collect::<Vec<_>>()
            .join("\n");

        let mut findings_block = String::new();
        for report in reports {
            findings_block.push_str(&format!(
                r#"
{} FINDINGS:
Questions Addressed: {}

Findings:
{}

Key Insights:
{}

Recommendations:
{}

Talking Points:
{}
"#,
                report.agent_name.to_uppercase(),
                report.questions_addressed.join(", "),
                report.findings,
                bulleted(&report.key_insights),
                bulleted(&report.recommendations),
                bulleted(&report.talking_points),
            ));
        }

        format!(
            r#"Synthesize these multi-agent research results into a comprehensive response for the user.

ORIGINAL USER NOTE:
{}

EXTRACTED RESEARCH QUESTIONS:
{}

RESEARCH FINDINGS FROM SPECIALIZED AGENTS:
{}

Create a comprehensive synthesis with these sections:

EXECUTIVE SUMMARY:
[2-3 paragraph summary of key findings and implications]

DETAILED FINDINGS:
[Synthesized findings organized by topic, not by agent]

KEY INSIGHTS:
• [Cross-domain insight #1]
• [Cross-domain insight #2]
• [Strategic insight #3]

ACTIONABLE RECOMMENDATIONS:
• [Immediate action #1]
• [Strategic action #2]
• [Partnership development action #3]

MEETING TALKING POINTS:
• [Key discussion point for security leaders]
• [Technical collaboration opportunity]
• [Business value proposition]
• [Partnership development angle]

NEXT STEPS:
• [Specific next action #1]
• [Follow-up research needed #2]
• [Meeting preparation task #3]

Focus on creating actionable intelligence that directly supports the user's goals as stated in their note."#,
            note_content, question_block, findings_block
        )
    }

    /// System persona for single-pass research, by note category
    pub fn category_system(category: Category) -> &'static str {
        match category {
            Category::Software => {
                "You are an expert software engineer with deep knowledge of modern development practices."
            }
            Category::Ai => {
                "You are an AI/ML specialist with expertise in current models and techniques."
            }
            Category::Building => "You are a construction expert with practical DIY experience.",
            Category::Lifestyle => {
                "You are a lifestyle consultant with local knowledge and creative ideas."
            }
            Category::Productivity => {
                "You are a productivity expert focused on evidence-based methods."
            }
            Category::General => {
                "You are a knowledgeable research assistant providing accurate information."
            }
        }
    }

    /// User prompt for single-pass research, by note category. An optional
    /// research approach from upstream analysis is appended verbatim.
    pub fn category_research(
        category: Category,
        content: &str,
        research_approach: Option<&str>,
    ) -> String {
        let mut prompt = match category {
            Category::Software => format!(
                r#"Research this software development topic: "{}"

Provide:
1. Current best practices and modern approaches
2. Code examples or implementation patterns
3. Common pitfalls and how to avoid them
4. Recommended tools, libraries, or frameworks
5. Performance and security considerations

Focus on practical, actionable information."#,
                content
            ),
            Category::Ai => format!(
                r#"Research this AI/ML topic: "{}"

Provide:
1. Current state-of-the-art approaches
2. Practical implementation considerations
3. Available models, tools, and frameworks
4. Cost and performance trade-offs
5. Ethical considerations and best practices

Include recent developments and future trends."#,
                content
            ),
            Category::Building => format!(
                r#"Research this building/construction topic: "{}"

Provide:
1. Materials needed and cost estimates
2. Step-by-step process or techniques
3. Required tools and equipment
4. Safety considerations and regulations
5. Common mistakes to avoid

Include practical tips for DIY implementation."#,
                content
            ),
            Category::Lifestyle => format!(
                r#"Research this lifestyle topic: "{}"

Provide:
1. Specific recommendations with details
2. Cost considerations and value
3. Timing and availability information
4. Alternatives and variations
5. Tips for best experience

Focus on current, local, and practical options."#,
                content
            ),
            Category::Productivity => format!(
                r#"Research this productivity topic: "{}"

Provide:
1. Evidence-based techniques and methods
2. Tools and apps that can help
3. Implementation strategies
4. Common obstacles and solutions
5. Metrics for measuring improvement

Emphasize actionable, sustainable approaches."#,
                content
            ),
            Category::General => format!(
                r#"Research this topic: "{}"

Provide comprehensive, accurate information including:
1. Key facts and context
2. Current best information available
3. Practical applications or implications
4. Reliable sources or references
5. Related topics to explore

Focus on clarity and usefulness."#,
                content
            ),
        };

        if let Some(approach) = research_approach {
            prompt.push_str(&format!("\n\nResearch Approach: {}", approach));
        }

        prompt
    }

    /// User prompt for merging two provider perspectives into one summary
    pub fn perspective_merge(primary: &str, secondary: &str) -> String {
        format!(
            r#"Synthesize these two research perspectives into a unified summary:

PERSPECTIVE 1:
{}

PERSPECTIVE 2:
{}

Create a coherent summary that:
1. Highlights key points both agree on
2. Notes any important differences in perspective
3. Provides the most actionable recommendations
4. Maintains all specific details (names, numbers, steps)

Format as a clean, organized summary without mentioning the sources."#,
            primary, secondary
        )
    }
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
