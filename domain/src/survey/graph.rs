//! Survey graph aggregate
//!
//! [`SurveyGraph`] holds the questions of one survey keyed by id, plus the
//! default linear order defined by `(order_index, id)`. It is authored by an
//! external editing tool and treated as a read-only input by navigation.

use super::question::QuestionNode;
use crate::core::error::DomainError;
use crate::core::ids::QuestionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The questions of one survey (Aggregate)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphRecord", into = "GraphRecord")]
pub struct SurveyGraph {
    questions: BTreeMap<QuestionId, QuestionNode>,
    /// Question ids sorted by `(order_index, id)`
    order: Vec<QuestionId>,
}

impl SurveyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from questions, rejecting non-positive or duplicate
    /// ids and options that claim a different owner.
    pub fn from_questions(
        questions: impl IntoIterator<Item = QuestionNode>,
    ) -> Result<Self, DomainError> {
        let mut graph = Self::new();
        for question in questions {
            graph.insert(question)?;
        }
        Ok(graph)
    }

    /// Adds a question.
    ///
    /// Ids must be positive so that a determinant can name the question.
    pub fn insert(&mut self, question: QuestionNode) -> Result<(), DomainError> {
        if question.id.get() <= 0 {
            return Err(DomainError::InvalidQuestionId(question.id));
        }
        if self.questions.contains_key(&question.id) {
            return Err(DomainError::DuplicateQuestion(question.id));
        }
        if let Some(stray) = question
            .options()
            .iter()
            .find(|o| o.owning_question_id != question.id)
        {
            return Err(DomainError::OptionOwnerMismatch {
                option: stray.id,
                holder: question.id,
                owner: stray.owning_question_id,
            });
        }

        let key = question.order_key();
        let position = self
            .order
            .partition_point(|id| self.questions[id].order_key() < key);
        self.order.insert(position, question.id);
        self.questions.insert(question.id, question);
        Ok(())
    }

    pub fn get(&self, id: QuestionId) -> Option<&QuestionNode> {
        self.questions.get(&id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.questions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in the survey's default linear order.
    pub fn ordered(&self) -> impl Iterator<Item = &QuestionNode> {
        self.order.iter().map(|id| &self.questions[id])
    }

    /// The question a new session starts with.
    pub fn first_question(&self) -> Option<&QuestionNode> {
        self.ordered().next()
    }

    /// The question following `question` in the default linear order.
    ///
    /// Works for questions that are not part of this graph too: the result
    /// is the first question whose order key is greater.
    pub fn next_in_order(&self, question: &QuestionNode) -> Option<&QuestionNode> {
        let key = question.order_key();
        self.ordered().find(|q| q.order_key() > key)
    }

    /// Checks that every determinant target names a question of this graph.
    pub fn check_integrity(&self) -> Result<(), DomainError> {
        for question in self.ordered() {
            let targets = question
                .default_next
                .into_iter()
                .chain(question.options().iter().filter_map(|o| o.next))
                .filter_map(|d| d.target());
            for target in targets {
                if !self.contains(target) {
                    return Err(DomainError::GraphIntegrity {
                        question: question.id,
                        target,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Wire shape of a graph: a plain question list.
#[derive(Debug, Serialize, Deserialize)]
struct GraphRecord {
    questions: Vec<QuestionNode>,
}

impl TryFrom<GraphRecord> for SurveyGraph {
    type Error = DomainError;

    fn try_from(record: GraphRecord) -> Result<Self, Self::Error> {
        SurveyGraph::from_questions(record.questions)
    }
}

impl From<SurveyGraph> for GraphRecord {
    fn from(graph: SurveyGraph) -> Self {
        let SurveyGraph {
            mut questions,
            order,
        } = graph;
        Self {
            questions: order
                .iter()
                .filter_map(|id| questions.remove(id))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::determinant::NavigationDeterminant;
    use crate::survey::question::OptionEdge;

    fn go(id: i64) -> NavigationDeterminant {
        NavigationDeterminant::to_question(id).unwrap()
    }

    #[test]
    fn test_rejects_duplicate_question() {
        let result = SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0),
            QuestionNode::non_branching(1, 1),
        ]);
        assert_eq!(
            result,
            Err(DomainError::DuplicateQuestion(QuestionId::new(1)))
        );
    }

    #[test]
    fn test_rejects_non_positive_question_id() {
        for id in [0, -3] {
            let result = SurveyGraph::from_questions([
                QuestionNode::non_branching(1, 0),
                QuestionNode::non_branching(id, 1).with_default(NavigationDeterminant::end()),
            ]);
            assert_eq!(
                result,
                Err(DomainError::InvalidQuestionId(QuestionId::new(id)))
            );
        }
    }

    #[test]
    fn test_rejects_option_with_foreign_owner() {
        let mut question = QuestionNode::branching(1, 0);
        if let crate::QuestionKind::Branching { options } = &mut question.kind {
            options.push(OptionEdge::new(10, 2));
        }
        let result = SurveyGraph::from_questions([question]);
        assert!(matches!(
            result,
            Err(DomainError::OptionOwnerMismatch { .. })
        ));
    }

    #[test]
    fn test_order_follows_order_index_then_id() {
        let graph = SurveyGraph::from_questions([
            QuestionNode::non_branching(3, 2),
            QuestionNode::non_branching(1, 5),
            QuestionNode::non_branching(2, 2),
        ])
        .unwrap();

        let ids: Vec<_> = graph.ordered().map(|q| q.id.get()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(graph.first_question().unwrap().id, QuestionId::new(2));
    }

    #[test]
    fn test_next_in_order() {
        let graph = SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0),
            QuestionNode::non_branching(2, 10),
            QuestionNode::non_branching(3, 20),
        ])
        .unwrap();

        let q1 = graph.get(QuestionId::new(1)).unwrap();
        let q3 = graph.get(QuestionId::new(3)).unwrap();
        assert_eq!(graph.next_in_order(q1).unwrap().id, QuestionId::new(2));
        assert!(graph.next_in_order(q3).is_none());
    }

    #[test]
    fn test_check_integrity_reports_dangling_target() {
        let graph = SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0).with_default(go(2)),
            QuestionNode::branching(2, 1).with_option(20, Some(go(99))),
        ])
        .unwrap();

        assert_eq!(
            graph.check_integrity(),
            Err(DomainError::GraphIntegrity {
                question: QuestionId::new(2),
                target: QuestionId::new(99),
            })
        );
    }

    #[test]
    fn test_serde_keeps_questions() {
        let graph = SurveyGraph::from_questions([
            QuestionNode::non_branching(2, 1).with_default(NavigationDeterminant::end()),
            QuestionNode::branching(1, 0).with_option(10, Some(go(2))),
        ])
        .unwrap();

        let json = serde_json::to_string(&graph).unwrap();
        let back: SurveyGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, graph);
    }
}
