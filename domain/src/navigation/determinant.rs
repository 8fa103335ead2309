//! Navigation determinant value object.
//!
//! A [`NavigationDeterminant`] is the decision taken after a question is
//! answered: show another question, or end the survey. It is always a tagged
//! record on the wire, so `0` can never be confused with "end" or "unset":
//!
//! ```
//! use navigator_domain::NavigationDeterminant;
//!
//! let next = NavigationDeterminant::to_question(7).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&next).unwrap(),
//!     r#"{"kind":"go_to_question","target_question_id":7}"#
//! );
//! assert_eq!(
//!     serde_json::to_string(&NavigationDeterminant::end()).unwrap(),
//!     r#"{"kind":"end_survey"}"#
//! );
//! ```

use crate::core::error::DomainError;
use crate::core::ids::QuestionId;
use serde::{Deserialize, Serialize};

/// Which way a determinant points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeterminantKind {
    GoToQuestion,
    EndSurvey,
}

impl DeterminantKind {
    pub fn as_str(&self) -> &str {
        match self {
            DeterminantKind::GoToQuestion => "go_to_question",
            DeterminantKind::EndSurvey => "end_survey",
        }
    }
}

/// Where to go after a question (Value Object).
///
/// Invariant: the target is present and positive iff the kind is
/// [`DeterminantKind::GoToQuestion`]. Fields are private so the invariant
/// holds for every value, including deserialized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DeterminantRecord", into = "DeterminantRecord")]
pub struct NavigationDeterminant {
    kind: DeterminantKind,
    target: Option<QuestionId>,
}

impl NavigationDeterminant {
    /// Go to the question with the given id.
    ///
    /// Fails with [`DomainError::InvalidDeterminant`] when `id <= 0`.
    pub fn to_question(id: impl Into<QuestionId>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.get() <= 0 {
            return Err(DomainError::InvalidDeterminant { id: id.get() });
        }
        Ok(Self {
            kind: DeterminantKind::GoToQuestion,
            target: Some(id),
        })
    }

    /// End the survey.
    pub const fn end() -> Self {
        Self {
            kind: DeterminantKind::EndSurvey,
            target: None,
        }
    }

    pub fn kind(&self) -> DeterminantKind {
        self.kind
    }

    /// Target question, `None` for [`DeterminantKind::EndSurvey`].
    pub fn target(&self) -> Option<QuestionId> {
        self.target
    }

    pub fn is_end(&self) -> bool {
        self.kind == DeterminantKind::EndSurvey
    }
}

impl std::fmt::Display for NavigationDeterminant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.target {
            Some(id) => write!(f, "-> {}", id),
            None => write!(f, "end"),
        }
    }
}

/// Wire shape of a determinant.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeterminantRecord {
    kind: DeterminantKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_question_id: Option<i64>,
}

impl TryFrom<DeterminantRecord> for NavigationDeterminant {
    type Error = String;

    fn try_from(record: DeterminantRecord) -> Result<Self, Self::Error> {
        match (record.kind, record.target_question_id) {
            (DeterminantKind::GoToQuestion, Some(id)) => {
                NavigationDeterminant::to_question(id).map_err(|e| e.to_string())
            }
            (DeterminantKind::GoToQuestion, None) => {
                Err("go_to_question requires target_question_id".to_string())
            }
            (DeterminantKind::EndSurvey, None) => Ok(NavigationDeterminant::end()),
            (DeterminantKind::EndSurvey, Some(id)) => Err(format!(
                "end_survey must not carry a target_question_id (got {})",
                id
            )),
        }
    }
}

impl From<NavigationDeterminant> for DeterminantRecord {
    fn from(determinant: NavigationDeterminant) -> Self {
        Self {
            kind: determinant.kind,
            target_question_id: determinant.target.map(QuestionId::get),
        }
    }
}
