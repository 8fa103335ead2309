//! Next-question resolution.
//!
//! [`NavigationResolver`] turns one answered question into exactly one
//! [`NavigationDeterminant`]. Steps are tried in order, each only when the
//! previous one produced nothing:
//!
//! 1. branching question, exactly one valid option selected, option target set
//! 2. the question's default determinant
//! 3. the next question by order index
//! 4. end of survey
//!
//! A branching question whose selection is missing, ambiguous or names an
//! option it does not have resolves straight to end, skipping steps 2 and 3.

use super::answer::Answer;
use super::determinant::NavigationDeterminant;
use crate::survey::graph::SurveyGraph;
use crate::survey::question::{QuestionKind, QuestionNode};
use serde::Serialize;
use tracing::debug;

/// Which rule produced a determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// The selected option's own determinant
    OptionNext,
    /// The question's default determinant
    DefaultNext,
    /// The next question in the survey's linear order
    SequentialOrder,
    /// No later question exists
    LastQuestion,
    /// The branching selection was unusable
    MalformedSelection,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &str {
        match self {
            ResolutionSource::OptionNext => "option_next",
            ResolutionSource::DefaultNext => "default_next",
            ResolutionSource::SequentialOrder => "sequential_order",
            ResolutionSource::LastQuestion => "last_question",
            ResolutionSource::MalformedSelection => "malformed_selection",
        }
    }
}

/// A determinant together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub determinant: NavigationDeterminant,
    pub source: ResolutionSource,
}

impl Resolution {
    fn new(determinant: NavigationDeterminant, source: ResolutionSource) -> Self {
        Self {
            determinant,
            source,
        }
    }
}

/// Stateless next-question resolver.
pub struct NavigationResolver;

impl NavigationResolver {
    /// Computes where to go after `question` was answered with `answer`.
    ///
    /// Never fails; malformed input degrades to [`NavigationDeterminant::end`].
    pub fn resolve(
        question: &QuestionNode,
        answer: &Answer,
        graph: &SurveyGraph,
    ) -> NavigationDeterminant {
        Self::resolve_detailed(question, answer, graph).determinant
    }

    /// Like [`Self::resolve`], also reporting which rule applied.
    pub fn resolve_detailed(
        question: &QuestionNode,
        answer: &Answer,
        graph: &SurveyGraph,
    ) -> Resolution {
        let resolution = Self::pick(question, answer, graph);
        debug!(
            "Resolved {} via {}: {}",
            question.id,
            resolution.source.as_str(),
            resolution.determinant
        );
        resolution
    }

    fn pick(question: &QuestionNode, answer: &Answer, graph: &SurveyGraph) -> Resolution {
        match &question.kind {
            QuestionKind::Branching { options } => {
                let selected = answer
                    .single_selection()
                    .and_then(|id| options.iter().find(|o| o.id == id));
                let Some(option) = selected else {
                    return Resolution::new(
                        NavigationDeterminant::end(),
                        ResolutionSource::MalformedSelection,
                    );
                };
                if let Some(next) = option.next {
                    return Resolution::new(next, ResolutionSource::OptionNext);
                }
            }
            QuestionKind::NonBranching => {}
        }

        if let Some(next) = question.default_next {
            return Resolution::new(next, ResolutionSource::DefaultNext);
        }

        let following = graph
            .next_in_order(question)
            .and_then(|q| NavigationDeterminant::to_question(q.id).ok());
        match following {
            Some(next) => Resolution::new(next, ResolutionSource::SequentialOrder),
            None => Resolution::new(NavigationDeterminant::end(), ResolutionSource::LastQuestion),
        }
    }
}
