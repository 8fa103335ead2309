//! Runtime repeat protection for live sessions.
//!
//! [`TraversalGuard`] keeps a session from showing any question twice, even
//! when the survey graph skipped validation or was edited mid-run. Before a
//! resolved question is presented, the guard checks the session's visited set;
//! a repeat terminates the session exactly as if the survey had ended.

use super::entities::{SessionState, TraversalSession};
use crate::core::error::DomainError;
use crate::core::ids::QuestionId;
use crate::navigation::determinant::NavigationDeterminant;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

/// What the delivery channel does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Show this question
    Present { question: QuestionId },
    /// The survey ended normally
    Completed,
    /// The resolved question was already shown; the run was cut short
    Terminated { repeated: QuestionId },
}

impl GuardDecision {
    /// The determinant to hand back: a repeat is reported as end of survey.
    pub fn determinant(&self) -> NavigationDeterminant {
        match self {
            GuardDecision::Present { question } => NavigationDeterminant::to_question(*question)
                .unwrap_or_else(|_| NavigationDeterminant::end()),
            GuardDecision::Completed | GuardDecision::Terminated { .. } => {
                NavigationDeterminant::end()
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, GuardDecision::Present { .. })
    }
}

/// Stateless guard over explicit session records.
pub struct TraversalGuard;

impl TraversalGuard {
    /// Appends `question` to the visited set unless already present.
    ///
    /// Returns whether it was inserted.
    pub fn record_visited(session: &mut TraversalSession, question: QuestionId) -> bool {
        if Self::has_visited(session, question) {
            return false;
        }
        session.visited.push(question);
        true
    }

    pub fn has_visited(session: &TraversalSession, question: QuestionId) -> bool {
        session.visited.contains(&question)
    }

    /// Moves a new session to `InProgress`, presenting `first`.
    pub fn start(session: &mut TraversalSession, first: QuestionId) -> Result<(), DomainError> {
        if session.state != SessionState::NotStarted {
            return Err(DomainError::SessionAlreadyStarted);
        }
        Self::record_visited(session, first);
        session.current_question_id = Some(first);
        session.state = SessionState::InProgress;
        session.started_at = Some(Utc::now());
        session.last_determinant = NavigationDeterminant::to_question(first).ok();
        Ok(())
    }

    /// Applies a resolved determinant for the answer to `answered`.
    ///
    /// Rejects answers once the session is finished, and answers for any
    /// question other than the current one.
    pub fn advance(
        session: &mut TraversalSession,
        answered: QuestionId,
        resolved: NavigationDeterminant,
    ) -> Result<GuardDecision, DomainError> {
        match session.state {
            SessionState::NotStarted => return Err(DomainError::SessionNotStarted),
            SessionState::Complete | SessionState::Terminated => {
                return Err(DomainError::SessionFinished);
            }
            SessionState::InProgress => {}
        }
        if let Some(current) = session.current_question_id
            && current != answered
        {
            return Err(DomainError::UnexpectedQuestion { answered, current });
        }
        Self::record_visited(session, answered);

        let decision = match resolved.target() {
            None => GuardDecision::Completed,
            Some(next) if Self::has_visited(session, next) => {
                warn!(
                    "{}: {} was already shown, terminating session",
                    session.response_id, next
                );
                GuardDecision::Terminated { repeated: next }
            }
            Some(next) => {
                Self::record_visited(session, next);
                GuardDecision::Present { question: next }
            }
        };

        session.last_determinant = Some(decision.determinant());
        match decision {
            GuardDecision::Present { question } => {
                session.current_question_id = Some(question);
            }
            GuardDecision::Completed => Self::finish(session, SessionState::Complete),
            GuardDecision::Terminated { .. } => Self::finish(session, SessionState::Terminated),
        }
        Ok(decision)
    }

    fn finish(session: &mut TraversalSession, state: SessionState) {
        session.state = state;
        session.current_question_id = None;
        session.finished_at = Some(Utc::now());
        info!(
            "{} finished as {} after {} questions",
            session.response_id,
            state,
            session.visited.len()
        );
    }
}
