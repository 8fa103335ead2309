//! Output formatter trait

use navigator_application::NavigationStep;
use navigator_domain::{SurveyGraph, SurveyId, TraversalSession, ValidationReport};

/// Trait for formatting navigation results
pub trait OutputFormatter {
    /// Format a validation report
    fn format_report(
        &self,
        survey: SurveyId,
        title: Option<&str>,
        report: &ValidationReport,
    ) -> String;

    /// Format one navigation step; `graph` supplies question text
    fn format_step(&self, step: &NavigationStep, graph: &SurveyGraph) -> String;

    /// Format a stored session
    fn format_session(&self, session: &TraversalSession) -> String;
}
