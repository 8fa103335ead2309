//! Answer loop for the walk and resume commands

use crate::input::answer::{AnswerParseError, AnswerSource};
use crate::output::formatter::OutputFormatter;
use navigator_application::{NavigateSurveyError, NavigateSurveyUseCase, SessionStore};
use navigator_domain::{QuestionId, ResponseId, SurveyGraph, SurveyId, TraversalSession};
use std::io::Write;
use thiserror::Error;

/// Errors that stop a walk
#[derive(Error, Debug)]
pub enum WalkError {
    #[error(transparent)]
    Navigate(#[from] NavigateSurveyError),

    #[error(transparent)]
    Answer(#[from] AnswerParseError),

    #[error("Cannot write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} is current but no longer part of the survey")]
    MissingQuestion(QuestionId),
}

/// Where a walk stopped
#[derive(Debug)]
pub struct WalkOutcome {
    pub response_id: ResponseId,
    /// The stored session as it was left
    pub session: TraversalSession,
}

impl WalkOutcome {
    /// True when the session ended, false when answers ran out first
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }
}

/// Drives a session with answers from an [`AnswerSource`]
pub struct SurveyWalker<'a, S: SessionStore + ?Sized + 'static> {
    use_case: &'a NavigateSurveyUseCase<S>,
    graph: &'a SurveyGraph,
    formatter: &'a dyn OutputFormatter,
}

impl<'a, S: SessionStore + ?Sized + 'static> SurveyWalker<'a, S> {
    pub fn new(
        use_case: &'a NavigateSurveyUseCase<S>,
        graph: &'a SurveyGraph,
        formatter: &'a dyn OutputFormatter,
    ) -> Self {
        Self {
            use_case,
            graph,
            formatter,
        }
    }

    /// Start a new session and answer until it ends or answers run out
    pub async fn start(
        &self,
        survey: SurveyId,
        source: &mut dyn AnswerSource,
        out: &mut dyn Write,
    ) -> Result<WalkOutcome, WalkError> {
        let step = self.use_case.start(survey, self.graph).await?;
        writeln!(out, "{}", self.formatter.format_step(&step, self.graph))?;
        self.answer_from(step.response_id, step.next_question(), source, out)
            .await
    }

    /// Continue a stored session
    pub async fn resume(
        &self,
        response_id: ResponseId,
        source: &mut dyn AnswerSource,
        out: &mut dyn Write,
    ) -> Result<WalkOutcome, WalkError> {
        let session = self.use_case.session(response_id).await?;
        let current = if session.is_finished() {
            None
        } else {
            session.current_question_id()
        };
        self.answer_from(response_id, current, source, out).await
    }

    async fn answer_from(
        &self,
        response_id: ResponseId,
        mut current: Option<QuestionId>,
        source: &mut dyn AnswerSource,
        out: &mut dyn Write,
    ) -> Result<WalkOutcome, WalkError> {
        while let Some(question) = current {
            let node = self
                .graph
                .get(question)
                .ok_or(WalkError::MissingQuestion(question))?;
            let Some(answer) = source.next_answer(node)? else {
                break;
            };

            let step = self
                .use_case
                .submit_answer(self.graph, response_id, question, &answer)
                .await?;
            writeln!(out, "{}", self.formatter.format_step(&step, self.graph))?;
            current = step.next_question();
        }

        let session = self.use_case.session(response_id).await?;
        writeln!(out, "{}", self.formatter.format_session(&session))?;
        Ok(WalkOutcome {
            response_id,
            session,
        })
    }
}
