//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use navigator_application::NavigationStep;
use navigator_domain::{SurveyGraph, SurveyId, TraversalSession, ValidationReport};
use serde_json::json;

/// Formats results as pretty printed JSON for scripts and pipelines
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty(value: &impl serde::Serialize) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(
        &self,
        survey: SurveyId,
        title: Option<&str>,
        report: &ValidationReport,
    ) -> String {
        Self::pretty(&json!({
            "survey_id": survey,
            "title": title,
            "safe": report.is_safe(),
            "terminals": report.terminals,
            "issues": report.issues,
        }))
    }

    fn format_step(&self, step: &NavigationStep, _graph: &SurveyGraph) -> String {
        Self::pretty(step)
    }

    fn format_session(&self, session: &TraversalSession) -> String {
        Self::pretty(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigator_domain::{GraphValidator, NavigationDeterminant, QuestionNode};
    use serde_json::Value;

    #[test]
    fn test_report_json_carries_issue_codes() {
        let graph = SurveyGraph::from_questions([QuestionNode::non_branching(1, 0)
            .with_default(NavigationDeterminant::to_question(1).unwrap())])
        .unwrap();
        let report = GraphValidator::validate(&graph);

        let text = JsonFormatter.format_report(SurveyId::new(2), None, &report);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["survey_id"], 2);
        assert_eq!(value["safe"], false);
        assert!(
            value["issues"]
                .as_array()
                .unwrap()
                .iter()
                .any(|i| i["code"] == "cycle" && i["path"] == json!([1, 1]))
        );
    }
}
