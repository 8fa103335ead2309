//! Survey document loader
//!
//! Reads a survey authored as TOML or JSON into a [`SurveyGraph`]:
//!
//! ```toml
//! id = 7
//! title = "Customer feedback"
//!
//! [[questions]]
//! id = 1
//! text = "Did you buy something?"
//! kind = "branching"
//! options = [
//!     { id = 11, label = "Yes", next = { kind = "go_to_question", target_question_id = 2 } },
//!     { id = 12, label = "No", next = { kind = "end_survey" } },
//! ]
//!
//! [[questions]]
//! id = 2
//! text = "What did you buy?"
//! default_next = { kind = "end_survey" }
//! ```
//!
//! `order` defaults to the question's position in the document.

use navigator_domain::{
    DomainError, NavigationDeterminant, OptionEdge, OptionId, QuestionId, QuestionKind,
    QuestionNode, SurveyGraph, SurveyId,
};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a survey document
#[derive(Error, Debug)]
pub enum SurveyLoadError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML survey: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON survey: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported survey format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("Question {question} is non_branching but declares options")]
    OptionsOnNonBranching { question: QuestionId },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A survey read from disk
#[derive(Debug, Clone)]
pub struct LoadedSurvey {
    pub id: SurveyId,
    pub title: Option<String>,
    pub graph: SurveyGraph,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum KindDocument {
    Branching,
    #[default]
    NonBranching,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionDocument {
    id: OptionId,
    #[serde(default)]
    label: String,
    #[serde(default)]
    next: Option<NavigationDeterminant>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestionDocument {
    id: QuestionId,
    #[serde(default)]
    order: Option<i32>,
    #[serde(default)]
    text: String,
    #[serde(default)]
    kind: KindDocument,
    #[serde(default)]
    default_next: Option<NavigationDeterminant>,
    #[serde(default)]
    options: Vec<OptionDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SurveyDocument {
    #[serde(default)]
    id: Option<SurveyId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    questions: Vec<QuestionDocument>,
}

/// Survey id used when the document does not name one
const DEFAULT_SURVEY_ID: SurveyId = SurveyId::new(1);

/// Loads survey documents from TOML or JSON
pub struct SurveyFileLoader;

impl SurveyFileLoader {
    /// Load a survey, choosing the format by file extension
    pub fn load(path: &Path) -> Result<LoadedSurvey, SurveyLoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if extension != "toml" && extension != "json" {
            return Err(SurveyLoadError::UnsupportedFormat(extension));
        }

        let content = std::fs::read_to_string(path).map_err(|source| SurveyLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Loading survey from {}", path.display());

        if extension == "toml" {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<LoadedSurvey, SurveyLoadError> {
        Self::build(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<LoadedSurvey, SurveyLoadError> {
        Self::build(serde_json::from_str(content)?)
    }

    fn build(document: SurveyDocument) -> Result<LoadedSurvey, SurveyLoadError> {
        let mut graph = SurveyGraph::new();
        for (position, question) in document.questions.into_iter().enumerate() {
            let order_index = question
                .order
                .unwrap_or_else(|| i32::try_from(position).unwrap_or(i32::MAX));
            graph.insert(Self::question(question, order_index)?)?;
        }

        Ok(LoadedSurvey {
            id: document.id.unwrap_or(DEFAULT_SURVEY_ID),
            title: document.title,
            graph,
        })
    }

    fn question(
        question: QuestionDocument,
        order_index: i32,
    ) -> Result<QuestionNode, SurveyLoadError> {
        let kind = match question.kind {
            KindDocument::NonBranching if !question.options.is_empty() => {
                return Err(SurveyLoadError::OptionsOnNonBranching {
                    question: question.id,
                });
            }
            KindDocument::NonBranching => QuestionKind::NonBranching,
            KindDocument::Branching => QuestionKind::Branching {
                options: question
                    .options
                    .into_iter()
                    .map(|o| OptionEdge {
                        id: o.id,
                        owning_question_id: question.id,
                        label: o.label,
                        next: o.next,
                    })
                    .collect(),
            },
        };

        Ok(QuestionNode {
            id: question.id,
            order_index,
            text: question.text,
            kind,
            default_next: question.default_next,
        })
    }
}
