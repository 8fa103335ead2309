//! Activate Survey use case
//!
//! Runs the graph validator before a survey goes live and turns an unsafe
//! verdict into an error that carries the full diagnostic.

use crate::ports::navigation_logger::{NavigationEvent, NavigationLogger, NoNavigationLogger};
use navigator_domain::{GraphValidator, SurveyGraph, SurveyId, ValidationReport};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during survey activation
#[derive(Error, Debug)]
pub enum ActivateSurveyError {
    #[error("{survey} cannot be activated: {}", report.summary())]
    UnsafeGraph {
        survey: SurveyId,
        report: ValidationReport,
    },
}

impl ActivateSurveyError {
    /// The diagnostic to surface to the survey author
    pub fn report(&self) -> &ValidationReport {
        match self {
            ActivateSurveyError::UnsafeGraph { report, .. } => report,
        }
    }
}

/// Use case for approving a survey graph before activation
pub struct ActivateSurveyUseCase {
    logger: Arc<dyn NavigationLogger>,
}

impl Default for ActivateSurveyUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivateSurveyUseCase {
    pub fn new() -> Self {
        Self {
            logger: Arc::new(NoNavigationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn NavigationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Validate `graph`; on success the report may still hold warnings.
    pub fn execute(
        &self,
        survey: SurveyId,
        graph: &SurveyGraph,
    ) -> Result<ValidationReport, ActivateSurveyError> {
        info!("Validating {} ({} questions)", survey, graph.len());
        let report = GraphValidator::validate(graph);

        self.logger.log(NavigationEvent::new(
            "survey_validated",
            json!({
                "survey_id": survey,
                "safe": report.is_safe(),
                "questions": graph.len(),
                "terminals": report.terminals,
                "issues": report.issues,
            }),
        ));

        if report.is_safe() {
            info!(
                "{} approved with {} warning(s)",
                survey,
                report.warnings().count()
            );
            Ok(report)
        } else {
            warn!("{} rejected: {}", survey, report.summary());
            Err(ActivateSurveyError::UnsafeGraph { survey, report })
        }
    }
}
