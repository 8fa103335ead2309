//! Question graph entities
//!
//! A [`QuestionNode`] is either branching (its answer selects an
//! [`OptionEdge`], each optionally carrying its own determinant) or
//! non-branching. The two cases are a tagged variant so navigation code can
//! match them exhaustively.

use crate::core::ids::{OptionId, QuestionId};
use crate::navigation::determinant::NavigationDeterminant;
use serde::{Deserialize, Serialize};

/// An answer option of a branching question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEdge {
    pub id: OptionId,
    pub owning_question_id: QuestionId,
    /// Label shown to the respondent
    #[serde(default)]
    pub label: String,
    /// Where this option leads; `None` inherits the question's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NavigationDeterminant>,
}

impl OptionEdge {
    pub fn new(id: impl Into<OptionId>, owning_question_id: impl Into<QuestionId>) -> Self {
        Self {
            id: id.into(),
            owning_question_id: owning_question_id.into(),
            label: String::new(),
            next: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_next(mut self, next: NavigationDeterminant) -> Self {
        self.next = Some(next);
        self
    }

    /// The option's own determinant, or else the question default.
    pub fn effective_next(
        &self,
        question_default: Option<NavigationDeterminant>,
    ) -> Option<NavigationDeterminant> {
        self.next.or(question_default)
    }
}

/// Branching vs non-branching question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// The selected option decides where to go
    Branching { options: Vec<OptionEdge> },
    /// Every answer leads to the same place
    NonBranching,
}

impl QuestionKind {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionKind::Branching { .. } => "branching",
            QuestionKind::NonBranching => "non_branching",
        }
    }
}

/// A question in a survey graph (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionNode {
    pub id: QuestionId,
    /// Position in the survey's default linear order
    pub order_index: i32,
    /// Prompt text
    #[serde(default)]
    pub text: String,
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_next: Option<NavigationDeterminant>,
}

impl QuestionNode {
    /// A non-branching question.
    pub fn non_branching(id: impl Into<QuestionId>, order_index: i32) -> Self {
        Self {
            id: id.into(),
            order_index,
            text: String::new(),
            kind: QuestionKind::NonBranching,
            default_next: None,
        }
    }

    /// A branching question without options yet.
    pub fn branching(id: impl Into<QuestionId>, order_index: i32) -> Self {
        Self {
            id: id.into(),
            order_index,
            text: String::new(),
            kind: QuestionKind::Branching {
                options: Vec::new(),
            },
            default_next: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_default(mut self, next: NavigationDeterminant) -> Self {
        self.default_next = Some(next);
        self
    }

    /// Adds an option owned by this question.
    ///
    /// Has no effect on a non-branching question, which carries no options.
    pub fn with_option(
        mut self,
        id: impl Into<OptionId>,
        next: Option<NavigationDeterminant>,
    ) -> Self {
        let owner = self.id;
        if let QuestionKind::Branching { options } = &mut self.kind {
            let mut edge = OptionEdge::new(id, owner);
            edge.next = next;
            options.push(edge);
        }
        self
    }

    pub fn is_branching(&self) -> bool {
        matches!(self.kind, QuestionKind::Branching { .. })
    }

    /// Options in declaration order; empty for non-branching questions.
    pub fn options(&self) -> &[OptionEdge] {
        match &self.kind {
            QuestionKind::Branching { options } => options,
            QuestionKind::NonBranching => &[],
        }
    }

    pub fn option(&self, id: OptionId) -> Option<&OptionEdge> {
        self.options().iter().find(|o| o.id == id)
    }

    /// Every determinant that can leave this question, unset ones skipped.
    ///
    /// Non-branching questions contribute their default; branching questions
    /// contribute each option's effective determinant, in option order.
    pub fn effective_determinants(&self) -> Vec<NavigationDeterminant> {
        match &self.kind {
            QuestionKind::NonBranching => self.default_next.into_iter().collect(),
            QuestionKind::Branching { options } => options
                .iter()
                .filter_map(|o| o.effective_next(self.default_next))
                .collect(),
        }
    }

    /// Key that defines the survey's default linear order.
    pub fn order_key(&self) -> (i32, QuestionId) {
        (self.order_index, self.id)
    }
}
