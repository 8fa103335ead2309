//! Design-time validation of survey graphs.
//!
//! [`GraphValidator`] decides whether a complete [`SurveyGraph`] is safe to
//! activate:
//!
//! - no cycle through explicit determinants, in any component
//! - at least one question can end the survey
//! - every determinant target exists
//!
//! The graph walked here has one edge per effective `GoToQuestion`
//! determinant: the default of a non-branching question, or each option's
//! own determinant (falling back to the question default) of a branching one.
//! `EndSurvey` and unset determinants add no edge.
//!
//! Any fault met during the walk is treated as unsafe. The validator never
//! reports a graph as safe when it could not finish looking at it.
//!
//! # Examples
//!
//! ```
//! use navigator_domain::{GraphValidator, NavigationDeterminant, QuestionNode, SurveyGraph};
//!
//! let graph = SurveyGraph::from_questions([
//!     QuestionNode::non_branching(1, 0)
//!         .with_default(NavigationDeterminant::to_question(2).unwrap()),
//!     QuestionNode::non_branching(2, 1).with_default(NavigationDeterminant::end()),
//! ])
//! .unwrap();
//!
//! assert!(GraphValidator::validate_structure(&graph));
//! ```

use super::graph::SurveyGraph;
use super::question::{QuestionKind, QuestionNode};
use crate::core::error::DomainError;
use crate::core::ids::QuestionId;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, VecDeque};
use tracing::warn;

/// Outcome of cycle detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleDetection {
    pub has_cycle: bool,
    /// The cycle, starting and ending with the same question.
    /// `None` when there is no cycle or the walk faulted.
    pub cycle_path: Option<Vec<QuestionId>>,
}

impl CycleDetection {
    fn acyclic() -> Self {
        Self {
            has_cycle: false,
            cycle_path: None,
        }
    }

    fn cycle(path: Vec<QuestionId>) -> Self {
        Self {
            has_cycle: true,
            cycle_path: Some(path),
        }
    }

    /// Pessimistic result for a walk that could not complete.
    fn fault() -> Self {
        Self {
            has_cycle: true,
            cycle_path: None,
        }
    }
}

/// Severity level of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The survey must not be activated.
    Error,
    /// The survey works but may not behave as the author expects.
    Warning,
}

/// Identifies a specific validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum IssueCode {
    /// The survey has no questions.
    EmptyGraph,
    /// A determinant points at a question that does not exist.
    DanglingTarget {
        question: QuestionId,
        target: QuestionId,
    },
    /// Following determinants can return to an earlier question.
    Cycle { path: Vec<QuestionId> },
    /// No question can end the survey.
    NoTerminal,
    /// No explicit `EndSurvey` is reachable; the run relies on sequential order.
    CannotTerminate { question: QuestionId },
    /// The question can never be shown starting from the first question.
    Unreachable { question: QuestionId },
    /// A branching question without options ends the survey on every answer.
    BranchingWithoutOptions { question: QuestionId },
}

/// A detected issue in a survey graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    #[serde(flatten)]
    pub code: IssueCode,
    pub message: String,
}

impl ValidationIssue {
    fn error(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    fn warning(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }
}

/// Full diagnostic for one graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
    pub terminals: BTreeSet<QuestionId>,
}

impl ValidationReport {
    /// True when no error-severity issue was found.
    pub fn is_safe(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// The detected cycle, if any.
    pub fn cycle_path(&self) -> Option<&[QuestionId]> {
        self.issues.iter().find_map(|i| match &i.code {
            IssueCode::Cycle { path } => Some(path.as_slice()),
            _ => None,
        })
    }

    /// One-line summary of the errors, for logs and error messages.
    pub fn summary(&self) -> String {
        let errors: Vec<_> = self.errors().map(|i| i.message.as_str()).collect();
        if errors.is_empty() {
            "survey graph is safe".to_string()
        } else {
            errors.join("; ")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// One entry of the explicit DFS stack.
struct Frame {
    question: QuestionId,
    successors: Vec<QuestionId>,
    cursor: usize,
}

/// Stateless survey graph validator.
pub struct GraphValidator;

impl GraphValidator {
    /// Detects a cycle reachable from any question.
    ///
    /// A dangling target aborts the walk and is reported as a cycle
    /// without a path.
    pub fn detect_cycle(graph: &SurveyGraph) -> CycleDetection {
        match Self::find_cycle(graph) {
            Ok(Some(path)) => CycleDetection::cycle(path),
            Ok(None) => CycleDetection::acyclic(),
            Err(e) => {
                warn!("Cycle detection aborted, treating graph as cyclic: {}", e);
                CycleDetection::fault()
            }
        }
    }

    /// Questions with at least one effective `EndSurvey` determinant.
    pub fn find_terminals(graph: &SurveyGraph) -> BTreeSet<QuestionId> {
        graph
            .ordered()
            .filter(|q| q.effective_determinants().iter().any(|d| d.is_end()))
            .map(|q| q.id)
            .collect()
    }

    /// Whether the graph may go live: non-empty, fully connected to existing
    /// questions, acyclic and able to end.
    pub fn validate_structure(graph: &SurveyGraph) -> bool {
        if graph.is_empty() {
            return false;
        }
        // Overridden defaults never become edges, so the walk alone misses them
        if let Err(e) = graph.check_integrity() {
            warn!("Survey graph is not safe: {}", e);
            return false;
        }
        if Self::detect_cycle(graph).has_cycle {
            return false;
        }
        !Self::find_terminals(graph).is_empty()
    }

    /// Produces the full diagnostic the authoring tool shows.
    ///
    /// `validate(graph).is_safe()` agrees with [`Self::validate_structure`].
    pub fn validate(graph: &SurveyGraph) -> ValidationReport {
        let mut report = ValidationReport::default();

        if graph.is_empty() {
            report.issues.push(ValidationIssue::error(
                IssueCode::EmptyGraph,
                "survey has no questions",
            ));
            return report;
        }

        let dangling = Self::dangling_targets(graph);
        if !dangling.is_empty() {
            report.issues.extend(dangling.into_iter().map(|(question, target)| {
                ValidationIssue::error(
                    IssueCode::DanglingTarget { question, target },
                    format!("{} points to {}, which does not exist", question, target),
                )
            }));
            return report;
        }

        let detection = Self::detect_cycle(graph);
        match detection.cycle_path {
            Some(path) => {
                let rendered = render_path(&path);
                report.issues.push(ValidationIssue::error(
                    IssueCode::Cycle { path },
                    format!("questions form a cycle: {}", rendered),
                ));
            }
            None if detection.has_cycle => {
                report.issues.push(ValidationIssue::error(
                    IssueCode::Cycle { path: Vec::new() },
                    "graph walk failed; treating survey as cyclic",
                ));
            }
            None => {}
        }

        report.terminals = Self::find_terminals(graph);
        if report.terminals.is_empty() {
            report.issues.push(ValidationIssue::error(
                IssueCode::NoTerminal,
                "no question ends the survey",
            ));
        } else {
            for question in Self::cannot_terminate(graph, &report.terminals) {
                report.issues.push(ValidationIssue::warning(
                    IssueCode::CannotTerminate { question },
                    format!(
                        "{} cannot reach an explicit end; it relies on sequential order",
                        question
                    ),
                ));
            }
        }

        for question in Self::unreachable(graph) {
            report.issues.push(ValidationIssue::warning(
                IssueCode::Unreachable { question },
                format!("{} can never be shown", question),
            ));
        }

        for question in graph.ordered() {
            if matches!(&question.kind, QuestionKind::Branching { options } if options.is_empty())
            {
                report.issues.push(ValidationIssue::warning(
                    IssueCode::BranchingWithoutOptions {
                        question: question.id,
                    },
                    format!("{} is branching but has no options", question.id),
                ));
            }
        }

        report
    }

    /// Iterative three-color DFS started from every unvisited question.
    fn find_cycle(graph: &SurveyGraph) -> Result<Option<Vec<QuestionId>>, DomainError> {
        let mut colors: HashMap<QuestionId, Color> =
            graph.ordered().map(|q| (q.id, Color::White)).collect();

        for root in graph.ordered() {
            if colors.get(&root.id) != Some(&Color::White) {
                continue;
            }

            colors.insert(root.id, Color::Gray);
            let mut stack = vec![Frame {
                question: root.id,
                successors: Self::successors(graph, root)?,
                cursor: 0,
            }];

            while let Some(frame) = stack.last_mut() {
                let Some(next) = frame.successors.get(frame.cursor).copied() else {
                    let done = frame.question;
                    colors.insert(done, Color::Black);
                    stack.pop();
                    continue;
                };
                frame.cursor += 1;

                match colors.get(&next).copied() {
                    Some(Color::White) => {
                        let node = graph.get(next).ok_or(DomainError::UnknownQuestion(next))?;
                        colors.insert(next, Color::Gray);
                        stack.push(Frame {
                            question: next,
                            successors: Self::successors(graph, node)?,
                            cursor: 0,
                        });
                    }
                    Some(Color::Gray) => {
                        let mut path: Vec<_> = stack
                            .iter()
                            .map(|f| f.question)
                            .skip_while(|id| *id != next)
                            .collect();
                        path.push(next);
                        return Ok(Some(path));
                    }
                    Some(Color::Black) => {}
                    None => return Err(DomainError::UnknownQuestion(next)),
                }
            }
        }

        Ok(None)
    }

    /// Targets of a question's `GoToQuestion` edges, checked against the graph.
    fn successors(
        graph: &SurveyGraph,
        question: &QuestionNode,
    ) -> Result<Vec<QuestionId>, DomainError> {
        question
            .effective_determinants()
            .into_iter()
            .filter_map(|d| d.target())
            .map(|target| {
                if graph.contains(target) {
                    Ok(target)
                } else {
                    Err(DomainError::GraphIntegrity {
                        question: question.id,
                        target,
                    })
                }
            })
            .collect()
    }

    fn dangling_targets(graph: &SurveyGraph) -> Vec<(QuestionId, QuestionId)> {
        graph
            .ordered()
            .flat_map(|q| {
                q.default_next
                    .into_iter()
                    .chain(q.options().iter().filter_map(|o| o.next))
                    .filter_map(|d| d.target())
                    .filter(|target| !graph.contains(*target))
                    .map(move |target| (q.id, target))
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Questions from which no terminal is reachable over explicit edges.
    fn cannot_terminate(
        graph: &SurveyGraph,
        terminals: &BTreeSet<QuestionId>,
    ) -> Vec<QuestionId> {
        let mut predecessors: HashMap<QuestionId, Vec<QuestionId>> = HashMap::new();
        for question in graph.ordered() {
            for target in question.effective_determinants().iter().filter_map(|d| d.target()) {
                predecessors.entry(target).or_default().push(question.id);
            }
        }

        let mut reaches_end: BTreeSet<QuestionId> = terminals.clone();
        let mut queue: VecDeque<QuestionId> = terminals.iter().copied().collect();
        while let Some(id) = queue.pop_front() {
            for pred in predecessors.get(&id).into_iter().flatten() {
                if reaches_end.insert(*pred) {
                    queue.push_back(*pred);
                }
            }
        }

        graph
            .ordered()
            .map(|q| q.id)
            .filter(|id| !reaches_end.contains(id))
            .collect()
    }

    /// Questions a run starting at the first question can never show,
    /// counting both explicit determinants and the sequential fallback.
    fn unreachable(graph: &SurveyGraph) -> Vec<QuestionId> {
        let Some(first) = graph.first_question() else {
            return Vec::new();
        };

        let mut seen = BTreeSet::from([first.id]);
        let mut queue = VecDeque::from([first.id]);
        while let Some(id) = queue.pop_front() {
            let Some(question) = graph.get(id) else {
                continue;
            };

            let mut next: Vec<QuestionId> = question
                .effective_determinants()
                .iter()
                .filter_map(|d| d.target())
                .collect();
            if falls_back_to_order(question)
                && let Some(following) = graph.next_in_order(question)
            {
                next.push(following.id);
            }

            for target in next {
                if seen.insert(target) {
                    queue.push_back(target);
                }
            }
        }

        graph
            .ordered()
            .map(|q| q.id)
            .filter(|id| !seen.contains(id))
            .collect()
    }
}

/// Whether some well-formed answer leaves this question by sequential order.
fn falls_back_to_order(question: &QuestionNode) -> bool {
    if question.default_next.is_some() {
        return false;
    }
    match &question.kind {
        QuestionKind::NonBranching => true,
        QuestionKind::Branching { options } => options.iter().any(|o| o.next.is_none()),
    }
}

fn render_path(path: &[QuestionId]) -> String {
    path.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::determinant::NavigationDeterminant;

    // ==================== Helpers ====================

    fn go(id: i64) -> NavigationDeterminant {
        NavigationDeterminant::to_question(id).unwrap()
    }

    fn end() -> NavigationDeterminant {
        NavigationDeterminant::end()
    }

    fn ids(raw: &[i64]) -> Vec<QuestionId> {
        raw.iter().copied().map(QuestionId::new).collect()
    }

    /// Q1(default=Q2) -> Q2(A->Q3, B->end) -> Q3(default=q3_next)
    fn scenario(q3_next: NavigationDeterminant) -> SurveyGraph {
        SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0).with_default(go(2)),
            QuestionNode::branching(2, 1)
                .with_option(21, Some(go(3)))
                .with_option(22, Some(end())),
            QuestionNode::non_branching(3, 2).with_default(q3_next),
        ])
        .unwrap()
    }

    /// Every consecutive pair of the path is an edge of the graph.
    fn assert_path_is_cycle(graph: &SurveyGraph, path: &[QuestionId]) {
        assert!(path.len() >= 2);
        assert_eq!(path.first(), path.last());
        for pair in path.windows(2) {
            let targets: Vec<_> = graph
                .get(pair[0])
                .unwrap()
                .effective_determinants()
                .iter()
                .filter_map(|d| d.target())
                .collect();
            assert!(targets.contains(&pair[1]), "{} -/-> {}", pair[0], pair[1]);
        }
    }

    // ==================== Cycle detection ====================

    #[test]
    fn scenario_a_cycle_through_three_questions() {
        let graph = scenario(go(1));
        let detection = GraphValidator::detect_cycle(&graph);

        assert!(detection.has_cycle);
        let path = detection.cycle_path.unwrap();
        for id in ids(&[1, 2, 3]) {
            assert!(path.contains(&id));
        }
        assert_path_is_cycle(&graph, &path);
    }

    #[test]
    fn scenario_b_terminating_graph_is_valid() {
        let graph = scenario(end());
        assert!(!GraphValidator::detect_cycle(&graph).has_cycle);
        assert!(GraphValidator::validate_structure(&graph));
    }

    #[test]
    fn scenario_c_converging_options_are_not_a_cycle() {
        let graph = SurveyGraph::from_questions([
            QuestionNode::branching(1, 0)
                .with_option(11, Some(go(2)))
                .with_option(12, Some(go(2))),
            QuestionNode::non_branching(2, 1).with_default(end()),
        ])
        .unwrap();

        let detection = GraphValidator::detect_cycle(&graph);
        assert!(!detection.has_cycle);
        assert!(detection.cycle_path.is_none());
        assert!(GraphValidator::validate_structure(&graph));
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        let graph = SurveyGraph::from_questions([
            QuestionNode::branching(1, 0)
                .with_option(11, Some(go(2)))
                .with_option(12, Some(go(3))),
            QuestionNode::non_branching(2, 1).with_default(go(4)),
            QuestionNode::non_branching(3, 2).with_default(go(4)),
            QuestionNode::non_branching(4, 3).with_default(end()),
        ])
        .unwrap();

        assert!(!GraphValidator::detect_cycle(&graph).has_cycle);
    }

    #[test]
    fn cycle_path_excludes_lead_in_questions() {
        // Q1 -> Q2 -> Q3 -> Q2: Q1 is not on the cycle
        let graph = SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0).with_default(go(2)),
            QuestionNode::non_branching(2, 1).with_default(go(3)),
            QuestionNode::non_branching(3, 2).with_default(go(2)),
        ])
        .unwrap();

        let path = GraphValidator::detect_cycle(&graph).cycle_path.unwrap();
        assert_eq!(path, ids(&[2, 3, 2]));
        assert_path_is_cycle(&graph, &path);
    }

    #[test]
    fn cycle_in_disconnected_component_is_found() {
        // Q1 -> end; Q5 <-> Q6 is never reached from Q1
        let graph = SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0).with_default(end()),
            QuestionNode::non_branching(5, 1).with_default(go(6)),
            QuestionNode::non_branching(6, 2).with_default(go(5)),
        ])
        .unwrap();

        let detection = GraphValidator::detect_cycle(&graph);
        assert!(detection.has_cycle);
        assert_eq!(detection.cycle_path.unwrap(), ids(&[5, 6, 5]));
        assert!(!GraphValidator::validate_structure(&graph));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = SurveyGraph::from_questions([
            QuestionNode::branching(1, 0)
                .with_option(11, Some(go(1)))
                .with_option(12, Some(end())),
        ])
        .unwrap();

        let detection = GraphValidator::detect_cycle(&graph);
        assert_eq!(detection.cycle_path, Some(ids(&[1, 1])));
    }

    #[test]
    fn option_inheriting_default_creates_edge() {
        // Q2's option 21 has no own target and inherits default -> Q1
        let graph = SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0).with_default(go(2)),
            QuestionNode::branching(2, 1)
                .with_default(go(1))
                .with_option(21, None)
                .with_option(22, Some(end())),
        ])
        .unwrap();

        assert!(GraphValidator::detect_cycle(&graph).has_cycle);
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let count = 50_000;
        let questions = (1..=count).map(|i| {
            let next = if i == count { end() } else { go(i + 1) };
            QuestionNode::non_branching(i, i as i32).with_default(next)
        });
        let graph = SurveyGraph::from_questions(questions).unwrap();

        assert!(GraphValidator::validate_structure(&graph));
    }

    // ==================== Fault handling ====================

    #[test]
    fn dangling_target_is_reported_as_cycle() {
        let graph = SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0).with_default(go(42)),
            QuestionNode::non_branching(2, 1).with_default(end()),
        ])
        .unwrap();

        let detection = GraphValidator::detect_cycle(&graph);
        assert!(detection.has_cycle);
        assert!(detection.cycle_path.is_none());
        assert!(!GraphValidator::validate_structure(&graph));
    }

    // ==================== Structure ====================

    /// Q1's default points nowhere, but its only option overrides it
    fn overridden_default_to_missing_question() -> SurveyGraph {
        SurveyGraph::from_questions([QuestionNode::branching(1, 0)
            .with_default(go(99))
            .with_option(11, Some(end()))])
        .unwrap()
    }

    #[test]
    fn overridden_dangling_default_is_invalid() {
        let graph = overridden_default_to_missing_question();

        assert!(!GraphValidator::detect_cycle(&graph).has_cycle);
        assert!(!GraphValidator::validate_structure(&graph));
        assert!(!GraphValidator::validate(&graph).is_safe());
    }

    #[test]
    fn branching_without_options_checks_its_default() {
        let graph = SurveyGraph::from_questions([
            QuestionNode::branching(1, 0).with_default(go(7)),
            QuestionNode::non_branching(2, 1).with_default(end()),
        ])
        .unwrap();

        assert!(!GraphValidator::validate_structure(&graph));
    }

    #[test]
    fn empty_graph_is_invalid() {
        let graph = SurveyGraph::new();
        assert!(!GraphValidator::validate_structure(&graph));

        let report = GraphValidator::validate(&graph);
        assert!(!report.is_safe());
        assert_eq!(report.issues[0].code, IssueCode::EmptyGraph);
    }

    #[test]
    fn graph_without_terminal_is_invalid() {
        let graph = SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0).with_default(go(2)),
            QuestionNode::non_branching(2, 1),
        ])
        .unwrap();

        assert!(!GraphValidator::detect_cycle(&graph).has_cycle);
        assert!(GraphValidator::find_terminals(&graph).is_empty());
        assert!(!GraphValidator::validate_structure(&graph));
    }

    #[test]
    fn branch_reaching_only_a_cycle_is_invalid() {
        // Q1: A -> end, B -> Q2; Q2 <-> Q3
        let graph = SurveyGraph::from_questions([
            QuestionNode::branching(1, 0)
                .with_option(11, Some(end()))
                .with_option(12, Some(go(2))),
            QuestionNode::non_branching(2, 1).with_default(go(3)),
            QuestionNode::non_branching(3, 2).with_default(go(2)),
        ])
        .unwrap();

        assert!(!GraphValidator::validate_structure(&graph));
    }

    #[test]
    fn find_terminals_uses_effective_determinants() {
        let graph = SurveyGraph::from_questions([
            QuestionNode::branching(1, 0)
                .with_default(end())
                .with_option(11, None)
                .with_option(12, Some(go(2))),
            QuestionNode::branching(2, 1)
                .with_default(end())
                .with_option(21, Some(go(3))),
            QuestionNode::non_branching(3, 2).with_default(end()),
        ])
        .unwrap();

        // Q2's only option overrides the default, so Q2 is not terminal
        assert_eq!(GraphValidator::find_terminals(&graph), BTreeSet::from_iter(ids(&[1, 3])));
    }

    // ==================== Report ====================

    #[test]
    fn report_agrees_with_validate_structure() {
        let graphs = [
            scenario(go(1)),
            scenario(end()),
            SurveyGraph::new(),
            SurveyGraph::from_questions([QuestionNode::non_branching(1, 0).with_default(go(9))])
                .unwrap(),
            overridden_default_to_missing_question(),
        ];
        for graph in &graphs {
            assert_eq!(
                GraphValidator::validate(graph).is_safe(),
                GraphValidator::validate_structure(graph)
            );
        }
    }

    #[test]
    fn report_carries_cycle_path() {
        let report = GraphValidator::validate(&scenario(go(1)));
        assert!(!report.is_safe());
        let path = report.cycle_path().unwrap();
        assert_eq!(path.first(), path.last());
        assert!(report.summary().contains("cycle"));
    }

    #[test]
    fn report_lists_every_dangling_target() {
        let graph = SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0).with_default(go(8)),
            QuestionNode::branching(2, 1)
                .with_option(21, Some(go(9)))
                .with_option(22, Some(end())),
        ])
        .unwrap();

        let report = GraphValidator::validate(&graph);
        let dangling: Vec<_> = report
            .errors()
            .filter(|i| matches!(i.code, IssueCode::DanglingTarget { .. }))
            .collect();
        assert_eq!(dangling.len(), 2);
    }

    #[test]
    fn report_warns_about_unreachable_and_open_ended_questions() {
        // Q1 -> end immediately; Q2 can never be shown and has no explicit end
        let graph = SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0).with_default(end()),
            QuestionNode::non_branching(2, 1),
            QuestionNode::branching(3, 2),
        ])
        .unwrap();

        let report = GraphValidator::validate(&graph);
        assert!(report.is_safe());

        let codes: Vec<_> = report.warnings().map(|i| i.code.clone()).collect();
        assert!(codes.contains(&IssueCode::Unreachable {
            question: QuestionId::new(2)
        }));
        assert!(codes.contains(&IssueCode::CannotTerminate {
            question: QuestionId::new(2)
        }));
        assert!(codes.contains(&IssueCode::BranchingWithoutOptions {
            question: QuestionId::new(3)
        }));
    }

    #[test]
    fn sequential_fallback_counts_for_reachability() {
        // Q1 has no determinant, so Q2 is shown next by order
        let graph = SurveyGraph::from_questions([
            QuestionNode::non_branching(1, 0),
            QuestionNode::non_branching(2, 1).with_default(end()),
        ])
        .unwrap();

        let report = GraphValidator::validate(&graph);
        assert!(report.is_safe());
        assert!(
            !report
                .warnings()
                .any(|i| matches!(i.code, IssueCode::Unreachable { .. }))
        );
    }
}
