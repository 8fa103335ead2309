//! Traversal session entity
//!
//! A [`TraversalSession`] is one respondent's run through one survey. It is
//! created when the run starts, changed by the
//! [`TraversalGuard`](super::guard::TraversalGuard) on every accepted answer
//! and handed to a session store between answers.

use crate::core::ids::{QuestionId, ResponseId, SurveyId};
use crate::navigation::determinant::NavigationDeterminant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a traversal session.
///
/// `NotStarted -> InProgress -> {Complete | Terminated}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    NotStarted,
    InProgress,
    /// Resolution reached the end of the survey
    Complete,
    /// A question would have been shown a second time
    Terminated,
}

impl SessionState {
    pub fn as_str(&self) -> &str {
        match self {
            SessionState::NotStarted => "not_started",
            SessionState::InProgress => "in_progress",
            SessionState::Complete => "complete",
            SessionState::Terminated => "terminated",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Complete | SessionState::Terminated)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One respondent's run through a survey (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalSession {
    pub response_id: ResponseId,
    pub survey_id: SurveyId,
    /// Presented questions in presentation order, without duplicates
    #[serde(rename = "visited_question_ids")]
    pub(crate) visited: Vec<QuestionId>,
    pub(crate) current_question_id: Option<QuestionId>,
    pub(crate) state: SessionState,
    /// The last determinant handed back to the delivery channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) last_determinant: Option<NavigationDeterminant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) finished_at: Option<DateTime<Utc>>,
}

impl TraversalSession {
    pub fn new(response_id: ResponseId, survey_id: SurveyId) -> Self {
        Self {
            response_id,
            survey_id,
            visited: Vec::new(),
            current_question_id: None,
            state: SessionState::NotStarted,
            last_determinant: None,
            started_at: None,
            finished_at: None,
        }
    }

    pub fn visited_question_ids(&self) -> &[QuestionId] {
        &self.visited
    }

    /// The question currently shown, `None` before start and once finished.
    pub fn current_question_id(&self) -> Option<QuestionId> {
        self.current_question_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn last_determinant(&self) -> Option<NavigationDeterminant> {
        self.last_determinant
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_not_started() {
        let session = TraversalSession::new(ResponseId::new(1), SurveyId::new(2));
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(session.visited_question_ids().is_empty());
        assert!(session.current_question_id().is_none());
        assert!(!session.is_finished());
    }

    #[test]
    fn test_terminal_states() {
        assert!(SessionState::Complete.is_terminal());
        assert!(SessionState::Terminated.is_terminal());
        assert!(!SessionState::InProgress.is_terminal());
        assert!(!SessionState::NotStarted.is_terminal());
    }

    #[test]
    fn test_serde_keeps_visited_order() {
        let mut session = TraversalSession::new(ResponseId::new(1), SurveyId::new(2));
        session.visited = vec![QuestionId::new(5), QuestionId::new(2), QuestionId::new(9)];
        session.state = SessionState::InProgress;
        session.current_question_id = Some(QuestionId::new(9));

        let json = serde_json::to_string(&session).unwrap();
        let back: TraversalSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
        assert_eq!(
            back.visited_question_ids(),
            &[QuestionId::new(5), QuestionId::new(2), QuestionId::new(9)]
        );
    }
}
