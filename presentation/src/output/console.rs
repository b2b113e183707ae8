//! Console output formatter for research outcomes

use colored::Colorize;
use scout_domain::{ResearchMode, ResearchOutcome};

/// Formats research outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete outcome
    pub fn format(outcome: &ResearchOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Note Scout Research"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Mode:".cyan().bold(),
            Self::mode_name(outcome.mode)
        ));
        output.push_str(&format!(
            "{} {}\n\n",
            "Status:".cyan().bold(),
            if outcome.success {
                "success".green().to_string()
            } else {
                "failed".red().to_string()
            }
        ));

        if !outcome.questions.is_empty() {
            output.push_str(&Self::section_header("Research Questions"));
            for question in &outcome.questions {
                output.push_str(&format!("  * {}\n", question));
            }
        }

        if !outcome.reports.is_empty() {
            output.push_str(&Self::section_header("Agent Reports"));
            for report in outcome.reports.values() {
                if report.success {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        format!("── {} ──", report.agent_name).yellow().bold(),
                        report.findings
                    ));
                    Self::push_list(&mut output, "Key Insights:", &report.key_insights);
                    Self::push_list(&mut output, "Recommendations:", &report.recommendations);
                    Self::push_list(&mut output, "Talking Points:", &report.talking_points);
                } else {
                    output.push_str(&format!(
                        "\n{}\nError: {}\n",
                        format!("── {} ──", report.agent_name).red().bold(),
                        report.error.as_deref().unwrap_or("Unknown")
                    ));
                }
            }
        }

        if !outcome.provider_reports.is_empty() {
            output.push_str(&Self::section_header("Provider Perspectives"));
            for report in &outcome.provider_reports {
                if report.success {
                    output.push_str(&format!(
                        "\n{}\n{}\n",
                        format!("── {} ──", report.provider).yellow().bold(),
                        report.content
                    ));
                } else {
                    output.push_str(&format!(
                        "\n{}\nError: {}\n",
                        format!("── {} ──", report.provider).red().bold(),
                        report.error.as_deref().unwrap_or("Unknown")
                    ));
                }
            }
        }

        output.push_str(&Self::section_header("Summary"));
        output.push_str(&format!("\n{}\n", outcome.summary));

        Self::push_list(&mut output, "Talking Points:", &outcome.talking_points);
        Self::push_list(&mut output, "Next Steps:", &outcome.next_actions);

        output.push_str(&format!(
            "\n{} {}\n",
            "Cost units:".dimmed(),
            outcome.total_cost_units
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &ResearchOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the synthesis only (concise output)
    pub fn format_synthesis_only(outcome: &ResearchOutcome) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Research Summary ===".cyan().bold()));
        output.push_str(&format!(
            "{} {}\n\n",
            "Mode:".dimmed(),
            Self::mode_name(outcome.mode)
        ));
        output.push_str(&outcome.summary);
        output.push('\n');

        if !outcome.next_actions.is_empty() {
            output.push_str(&format!("\n{}\n", "Next Steps:".cyan().bold()));
            for action in &outcome.next_actions {
                output.push_str(&format!("  * {}\n", action));
            }
        }

        output
    }

    fn mode_name(mode: ResearchMode) -> &'static str {
        match mode {
            ResearchMode::MultiAgent => "multi-agent",
            ResearchMode::SinglePass => "single-pass",
            ResearchMode::Skipped => "skipped",
        }
    }

    fn push_list(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("\n{}\n", title.cyan().bold()));
        for item in items {
            output.push_str(&format!("  * {}\n", item));
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
