//! Console output formatter for navigation results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use navigator_application::NavigationStep;
use navigator_domain::{
    GuardDecision, QuestionNode, SessionState, Severity, SurveyGraph, SurveyId, TraversalSession,
    ValidationReport,
};

/// Formats reports and steps for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a validation report
    pub fn format_report(
        survey: SurveyId,
        title: Option<&str>,
        report: &ValidationReport,
    ) -> String {
        let mut output = String::new();

        let heading = match title {
            Some(title) => format!("{} ({})", title, survey),
            None => survey.to_string(),
        };
        output.push_str(&Self::header(&heading));
        output.push('\n');

        let verdict = if report.is_safe() {
            "SAFE".green().bold()
        } else {
            "UNSAFE".red().bold()
        };
        output.push_str(&format!("\n{} {}\n", "Verdict:".cyan().bold(), verdict));

        let terminals = report
            .terminals
            .iter()
            .map(|q| q.to_string())
            .collect::<Vec<_>>();
        output.push_str(&format!(
            "{} {}\n",
            "Terminals:".cyan().bold(),
            if terminals.is_empty() {
                "none".to_string()
            } else {
                terminals.join(", ")
            }
        ));

        if let Some(path) = report.cycle_path()
            && !path.is_empty()
        {
            let path = path.iter().map(|q| q.to_string()).collect::<Vec<_>>();
            output.push_str(&format!(
                "{} {}\n",
                "Cycle:".red().bold(),
                path.join(" -> ")
            ));
        }

        if !report.issues.is_empty() {
            output.push_str(&Self::section_header("Issues"));
            for issue in &report.issues {
                let label = match issue.severity {
                    Severity::Error => "error".red().bold(),
                    Severity::Warning => "warning".yellow().bold(),
                };
                output.push_str(&format!("  {}: {}\n", label, issue.message));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the question being asked, ending in an input marker
    pub fn format_prompt(question: &QuestionNode) -> String {
        let mut output = format!(
            "\n{} {}\n",
            question.id.to_string().yellow().bold(),
            question.text
        );
        for option in question.options() {
            output.push_str(&format!("  [{}] {}\n", option.id.get(), option.label));
        }
        if !question.is_branching() {
            output.push_str(&format!("  {}\n", "(text:<answer> or - to skip)".dimmed()));
        }
        output.push_str("> ");
        output
    }

    /// Format one navigation step
    pub fn format_step(step: &NavigationStep, graph: &SurveyGraph) -> String {
        let mut output = String::new();

        if let Some(resolution) = &step.resolution {
            output.push_str(&format!(
                "{} {} ({})\n",
                "Resolved:".dimmed(),
                resolution.determinant,
                resolution.source.as_str()
            ));
        }

        match step.decision {
            GuardDecision::Present { question } => {
                let text = graph.get(question).map(|q| q.text.as_str()).unwrap_or("");
                output.push_str(&format!(
                    "{} {} {}\n",
                    "Next:".cyan().bold(),
                    question.to_string().yellow(),
                    text
                ));
            }
            GuardDecision::Completed => {
                output.push_str(&format!("{}\n", "Survey complete".green().bold()));
            }
            GuardDecision::Terminated { repeated } => {
                output.push_str(&format!(
                    "{} {} was already shown\n",
                    "Session terminated:".red().bold(),
                    repeated
                ));
            }
        }

        output
    }

    /// Format a stored session
    pub fn format_session(session: &TraversalSession) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header(&format!(
            "{} on {}",
            session.response_id, session.survey_id
        )));

        let state = match session.state() {
            SessionState::Complete => session.state().as_str().green().bold(),
            SessionState::Terminated => session.state().as_str().red().bold(),
            _ => session.state().as_str().yellow().bold(),
        };
        output.push_str(&format!("{} {}\n", "State:".cyan().bold(), state));

        let visited = session
            .visited_question_ids()
            .iter()
            .map(|q| q.to_string())
            .collect::<Vec<_>>();
        output.push_str(&format!("{} {}\n", "Visited:".cyan().bold(), visited.join(" -> ")));

        if let Some(current) = session.current_question_id() {
            output.push_str(&format!("{} {}\n", "Current:".cyan().bold(), current));
        }
        if let Some(started) = session.started_at() {
            output.push_str(&format!("{} {}\n", "Started:".dimmed(), started.to_rfc3339()));
        }
        if let Some(finished) = session.finished_at() {
            output.push_str(&format!("{} {}\n", "Finished:".dimmed(), finished.to_rfc3339()));
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(
        &self,
        survey: SurveyId,
        title: Option<&str>,
        report: &ValidationReport,
    ) -> String {
        Self::format_report(survey, title, report)
    }

    fn format_step(&self, step: &NavigationStep, graph: &SurveyGraph) -> String {
        Self::format_step(step, graph)
    }

    fn format_session(&self, session: &TraversalSession) -> String {
        Self::format_session(session)
    }
}
