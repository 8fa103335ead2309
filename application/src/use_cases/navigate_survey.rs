//! Navigate Survey use case
//!
//! Drives one respondent through a survey on behalf of a delivery channel:
//!
//! 1. `start` creates a session and presents the first question
//! 2. `submit_answer` resolves the next determinant, runs it through the
//!    traversal guard and persists the session
//!
//! Callers serialize answers per response id; different sessions are
//! independent and may be processed concurrently.

use crate::config::NavigationParams;
use crate::ports::navigation_logger::{NavigationEvent, NavigationLogger, NoNavigationLogger};
use crate::ports::session_store::{SessionStore, SessionStoreError};
use navigator_domain::{
    Answer, DomainError, GraphValidator, GuardDecision, NavigationDeterminant, NavigationResolver,
    QuestionId, Resolution, ResponseId, SessionState, SurveyGraph, SurveyId, TraversalGuard,
    TraversalSession, ValidationReport,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while navigating a survey
#[derive(Error, Debug)]
pub enum NavigateSurveyError {
    #[error("Survey has no questions")]
    EmptySurvey,

    #[error("Survey failed validation: {}", .0.summary())]
    UnsafeGraph(ValidationReport),

    #[error("No session for {0}")]
    SessionNotFound(ResponseId),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Session store error: {0}")]
    Store(#[from] SessionStoreError),
}

/// Result of one navigation call, as handed back to the delivery channel
#[derive(Debug, Clone, Serialize)]
pub struct NavigationStep {
    pub response_id: ResponseId,
    /// Where the delivery channel goes next
    pub determinant: NavigationDeterminant,
    pub decision: GuardDecision,
    pub state: SessionState,
    /// How the answer was resolved; `None` for the first question
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
}

impl NavigationStep {
    /// Question to present next, if the session continues
    pub fn next_question(&self) -> Option<QuestionId> {
        match self.decision {
            GuardDecision::Present { question } => Some(question),
            _ => None,
        }
    }
}

/// Use case for taking respondents through a survey
pub struct NavigateSurveyUseCase<S: SessionStore + ?Sized + 'static> {
    store: Arc<S>,
    logger: Arc<dyn NavigationLogger>,
    params: NavigationParams,
}

impl<S: SessionStore + ?Sized + 'static> NavigateSurveyUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            logger: Arc::new(NoNavigationLogger),
            params: NavigationParams::default(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn NavigationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_params(mut self, params: NavigationParams) -> Self {
        self.params = params;
        self
    }

    /// Start a new session on `graph` and present its first question
    pub async fn start(
        &self,
        survey: SurveyId,
        graph: &SurveyGraph,
    ) -> Result<NavigationStep, NavigateSurveyError> {
        let first = graph
            .first_question()
            .ok_or(NavigateSurveyError::EmptySurvey)?
            .id;

        if self.params.validate_before_start {
            let report = GraphValidator::validate(graph);
            if !report.is_safe() {
                warn!("Refusing to start {}: {}", survey, report.summary());
                return Err(NavigateSurveyError::UnsafeGraph(report));
            }
        }

        let response_id = self.store.next_response_id().await?;
        let mut session = TraversalSession::new(response_id, survey);
        TraversalGuard::start(&mut session, first)?;
        self.store.save(&session).await?;

        info!("{} started {} at {}", response_id, survey, first);
        self.logger.log(NavigationEvent::new(
            "session_started",
            json!({
                "response_id": response_id,
                "survey_id": survey,
                "question_id": first,
            }),
        ));

        let decision = GuardDecision::Present { question: first };
        Ok(NavigationStep {
            response_id,
            determinant: decision.determinant(),
            decision,
            state: session.state(),
            resolution: None,
        })
    }

    /// Accept an answer for `question` and move the session on
    pub async fn submit_answer(
        &self,
        graph: &SurveyGraph,
        response_id: ResponseId,
        question: QuestionId,
        answer: &Answer,
    ) -> Result<NavigationStep, NavigateSurveyError> {
        let mut session = self
            .store
            .load(response_id)
            .await?
            .ok_or(NavigateSurveyError::SessionNotFound(response_id))?;
        if session.is_finished() {
            return Err(DomainError::SessionFinished.into());
        }

        let node = graph
            .get(question)
            .ok_or(DomainError::UnknownQuestion(question))?;
        let resolution = NavigationResolver::resolve_detailed(node, answer, graph);
        let decision = TraversalGuard::advance(&mut session, question, resolution.determinant)?;
        self.store.save(&session).await?;

        debug!(
            "{} answered {}: {:?} -> {:?}",
            response_id, question, resolution.source, decision
        );
        self.logger.log(NavigationEvent::new(
            "answer_resolved",
            json!({
                "response_id": response_id,
                "question_id": question,
                "source": resolution.source,
                "resolved": resolution.determinant,
                "decision": decision,
                "state": session.state(),
                "visited": session.visited_question_ids(),
            }),
        ));
        if let GuardDecision::Terminated { repeated } = decision {
            self.logger.log(NavigationEvent::new(
                "session_terminated",
                json!({
                    "response_id": response_id,
                    "repeated_question_id": repeated,
                }),
            ));
        }

        Ok(NavigationStep {
            response_id,
            determinant: decision.determinant(),
            decision,
            state: session.state(),
            resolution: Some(resolution),
        })
    }

    /// Load the persisted session for `response_id`
    pub async fn session(
        &self,
        response_id: ResponseId,
    ) -> Result<TraversalSession, NavigateSurveyError> {
        self.store
            .load(response_id)
            .await?
            .ok_or(NavigateSurveyError::SessionNotFound(response_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use navigator_domain::{QuestionNode, ResolutionSource};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use tokio::sync::Mutex;

    // ==================== Test doubles ====================

    #[derive(Default)]
    struct MapStore {
        next: AtomicI64,
        sessions: Mutex<HashMap<ResponseId, TraversalSession>>,
    }

    #[async_trait]
    impl SessionStore for MapStore {
        async fn next_response_id(&self) -> Result<ResponseId, SessionStoreError> {
            Ok(ResponseId::new(self.next.fetch_add(1, Ordering::SeqCst) + 1))
        }

        async fn load(
            &self,
            id: ResponseId,
        ) -> Result<Option<TraversalSession>, SessionStoreError> {
            Ok(self.sessions.lock().await.get(&id).cloned())
        }

        async fn save(&self, session: &TraversalSession) -> Result<(), SessionStoreError> {
            self.sessions
                .lock()
                .await
                .insert(session.response_id, session.clone());
            Ok(())
        }
    }

    // ==================== Helpers ====================

    fn go(id: i64) -> NavigationDeterminant {
        NavigationDeterminant::to_question(id).unwrap()
    }

    fn q(id: i64) -> QuestionId {
        QuestionId::new(id)
    }

    /// Q1(default=Q2) -> Q2(A->Q3, B->end) -> Q3(default=q3_next)
    fn scenario(q3_next: NavigationDeterminant) -> SurveyGraph {
        SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0).with_default(go(2)),
            QuestionNode::branching(2, 1)
                .with_option(21, Some(go(3)))
                .with_option(22, Some(NavigationDeterminant::end())),
            QuestionNode::non_branching(3, 2).with_default(q3_next),
        ])
        .unwrap()
    }

    fn use_case() -> NavigateSurveyUseCase<MapStore> {
        NavigateSurveyUseCase::new(Arc::new(MapStore::default()))
    }

    // ==================== Flow tests ====================

    #[tokio::test]
    async fn test_full_run_completes() {
        let graph = scenario(NavigationDeterminant::end());
        let nav = use_case();

        let step = nav.start(SurveyId::new(1), &graph).await.unwrap();
        assert_eq!(step.next_question(), Some(q(1)));
        let id = step.response_id;

        let step = nav
            .submit_answer(&graph, id, q(1), &Answer::text("hello"))
            .await
            .unwrap();
        assert_eq!(step.determinant, go(2));

        let step = nav
            .submit_answer(&graph, id, q(2), &Answer::choice(21))
            .await
            .unwrap();
        assert_eq!(step.next_question(), Some(q(3)));

        let step = nav
            .submit_answer(&graph, id, q(3), &Answer::empty())
            .await
            .unwrap();
        assert_eq!(step.decision, GuardDecision::Completed);
        assert_eq!(step.state, SessionState::Complete);

        let session = nav.session(id).await.unwrap();
        assert_eq!(session.visited_question_ids(), &[q(1), q(2), q(3)]);
    }

    #[tokio::test]
    async fn test_unsafe_graph_cannot_start() {
        let nav = use_case();
        let result = nav.start(SurveyId::new(1), &scenario(go(1))).await;
        assert!(matches!(result, Err(NavigateSurveyError::UnsafeGraph(_))));
    }

    #[tokio::test]
    async fn test_empty_graph_cannot_start() {
        let nav = use_case();
        let result = nav.start(SurveyId::new(1), &SurveyGraph::new()).await;
        assert!(matches!(result, Err(NavigateSurveyError::EmptySurvey)));
    }

    #[tokio::test]
    async fn test_guard_terminates_unvalidated_cycle() {
        let graph = scenario(go(1));
        let nav = NavigateSurveyUseCase::new(Arc::new(MapStore::default()))
            .with_params(NavigationParams::default().with_validate_before_start(false));

        let id = nav.start(SurveyId::new(1), &graph).await.unwrap().response_id;
        nav.submit_answer(&graph, id, q(1), &Answer::empty())
            .await
            .unwrap();
        nav.submit_answer(&graph, id, q(2), &Answer::choice(21))
            .await
            .unwrap();
        let step = nav
            .submit_answer(&graph, id, q(3), &Answer::empty())
            .await
            .unwrap();

        assert_eq!(step.decision, GuardDecision::Terminated { repeated: q(1) });
        assert_eq!(step.determinant, NavigationDeterminant::end());
        assert_eq!(step.state, SessionState::Terminated);
    }

    #[tokio::test]
    async fn test_graph_edited_mid_session_is_guarded() {
        let graph = scenario(NavigationDeterminant::end());
        let nav = use_case();
        let id = nav.start(SurveyId::new(1), &graph).await.unwrap().response_id;
        nav.submit_answer(&graph, id, q(1), &Answer::empty())
            .await
            .unwrap();

        // The author now points Q2's first option back at Q1
        let edited = SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0).with_default(go(2)),
            QuestionNode::branching(2, 1)
                .with_option(21, Some(go(1)))
                .with_option(22, Some(NavigationDeterminant::end())),
        ])
        .unwrap();
        let step = nav
            .submit_answer(&edited, id, q(2), &Answer::choice(21))
            .await
            .unwrap();
        assert_eq!(step.state, SessionState::Terminated);
    }

    #[tokio::test]
    async fn test_malformed_selection_completes_session() {
        let graph = scenario(NavigationDeterminant::end());
        let nav = use_case();
        let id = nav.start(SurveyId::new(1), &graph).await.unwrap().response_id;
        nav.submit_answer(&graph, id, q(1), &Answer::empty())
            .await
            .unwrap();

        let step = nav
            .submit_answer(&graph, id, q(2), &Answer::choices([21, 22]))
            .await
            .unwrap();
        assert_eq!(step.state, SessionState::Complete);
        assert_eq!(
            step.resolution.unwrap().source,
            ResolutionSource::MalformedSelection
        );
    }

    #[tokio::test]
    async fn test_finished_session_rejects_answers() {
        let graph = scenario(NavigationDeterminant::end());
        let nav = use_case();
        let id = nav.start(SurveyId::new(1), &graph).await.unwrap().response_id;
        nav.submit_answer(&graph, id, q(1), &Answer::empty())
            .await
            .unwrap();
        nav.submit_answer(&graph, id, q(2), &Answer::choice(22))
            .await
            .unwrap();

        let result = nav
            .submit_answer(&graph, id, q(3), &Answer::empty())
            .await;
        assert!(matches!(
            result,
            Err(NavigateSurveyError::Domain(DomainError::SessionFinished))
        ));
    }

    #[tokio::test]
    async fn test_unknown_session_and_question() {
        let graph = scenario(NavigationDeterminant::end());
        let nav = use_case();

        let result = nav
            .submit_answer(&graph, ResponseId::new(404), q(1), &Answer::empty())
            .await;
        assert!(matches!(
            result,
            Err(NavigateSurveyError::SessionNotFound(_))
        ));

        let id = nav.start(SurveyId::new(1), &graph).await.unwrap().response_id;
        let result = nav
            .submit_answer(&graph, id, q(77), &Answer::empty())
            .await;
        assert!(matches!(
            result,
            Err(NavigateSurveyError::Domain(DomainError::UnknownQuestion(_)))
        ));
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let graph = scenario(NavigationDeterminant::end());
        let nav = use_case();
        let a = nav.start(SurveyId::new(1), &graph).await.unwrap().response_id;
        let b = nav.start(SurveyId::new(1), &graph).await.unwrap().response_id;
        assert_ne!(a, b);

        nav.submit_answer(&graph, a, q(1), &Answer::empty())
            .await
            .unwrap();

        assert_eq!(nav.session(a).await.unwrap().visited_question_ids().len(), 2);
        assert_eq!(nav.session(b).await.unwrap().visited_question_ids(), &[q(1)]);
    }

    #[tokio::test]
    async fn test_trait_object_store() {
        let graph = scenario(NavigationDeterminant::end());
        let store: Arc<dyn SessionStore> = Arc::new(MapStore::default());
        let nav = NavigateSurveyUseCase::new(store);

        let id = nav.start(SurveyId::new(1), &graph).await.unwrap().response_id;
        let step = nav
            .submit_answer(&graph, id, q(1), &Answer::empty())
            .await
            .unwrap();
        assert_eq!(step.next_question(), Some(q(2)));
    }
}
