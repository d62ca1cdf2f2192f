//! Banker's Algorithm safety check.
//!
//! Decides whether the current allocation state is safe: whether some order
//! exists in which every process can obtain its full remaining need and
//! release what it holds.
//!
//! # Algorithm
//!
//! 1. `work := available`, every process unfinished.
//! 2. Scan processes in index order for the first unfinished one whose
//!    `need <= work` in every dimension.
//! 3. Admit it: `work += allocation`, mark it finished, record a step,
//!    and restart the scan from index 0.
//! 4. A full scan with no admission while processes remain means unsafe.
//!
//! The restart-from-zero policy makes the safe sequence deterministic.
//! The search is greedy with no backtracking, as in the textbook algorithm.
//!
//! # Complexity
//! O(n² · m) for n processes and m resource types.
//!
//! # Reference
//! Dijkstra (1965), "Cooperating Sequential Processes";
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 8.6.3

use serde::{Deserialize, Serialize};

use crate::models::{Process, ResourceVector};
use crate::validation::{self, ValidationError};

/// One admission in a safe sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyStep {
    /// Admitted process.
    pub process_id: String,
    /// Work vector before the process released its allocation.
    pub work_before: ResourceVector,
    /// The process's remaining need at admission.
    pub need: ResourceVector,
    /// Units the process releases on completion.
    pub allocation: ResourceVector,
    /// `work_before + allocation`.
    pub work_after: ResourceVector,
}

/// A complete safe sequence with per-step snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeSequence {
    /// Admissions in order.
    pub steps: Vec<SafetyStep>,
}

impl SafeSequence {
    /// Process ids in admission order.
    pub fn order(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.process_id.as_str()).collect()
    }

    /// Work vector after the last admission, if any process was admitted.
    pub fn final_work(&self) -> Option<&ResourceVector> {
        self.steps.last().map(|s| &s.work_after)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Result of a safety check.
///
/// `Unsafe` is a valid outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SafetyOutcome {
    /// Every process can finish in the given order.
    Safe(SafeSequence),
    /// The greedy scan stalled.
    Unsafe {
        /// Work vector at the stall.
        work: ResourceVector,
        /// Processes whose need exceeded `work` at the stall, in index order.
        blocked: Vec<String>,
    },
}

impl SafetyOutcome {
    pub fn is_safe(&self) -> bool {
        matches!(self, SafetyOutcome::Safe(_))
    }

    /// The safe sequence, when the state is safe.
    pub fn sequence(&self) -> Option<&SafeSequence> {
        match self {
            SafetyOutcome::Safe(seq) => Some(seq),
            SafetyOutcome::Unsafe { .. } => None,
        }
    }
}

/// Validates the input, then runs the safety check.
///
/// # Example
///
/// ```
/// use cpu_schedule::banker::check_safety;
/// use cpu_schedule::models::Process;
///
/// let processes = vec![
///     Process::new("P0", [7, 5, 3], [0, 1, 0]),
///     Process::new("P1", [3, 2, 2], [2, 0, 0]),
///     Process::new("P2", [9, 0, 2], [3, 0, 2]),
///     Process::new("P3", [2, 2, 2], [2, 1, 1]),
///     Process::new("P4", [4, 3, 3], [0, 0, 2]),
/// ];
/// let outcome = check_safety(&processes, &[3, 3, 2]).unwrap();
/// let order = outcome.sequence().unwrap().order();
/// assert_eq!(order, vec!["P1", "P3", "P0", "P2", "P4"]);
/// ```
pub fn check_safety(
    processes: &[Process],
    available: &[i64],
) -> Result<SafetyOutcome, Vec<ValidationError>> {
    validation::validate_processes(processes, available)?;
    Ok(evaluate_safety(processes, available))
}

/// Runs the safety check on validated input.
pub fn evaluate_safety(processes: &[Process], available: &[i64]) -> SafetyOutcome {
    let mut work: ResourceVector = available.to_vec();
    let mut finished = vec![false; processes.len()];
    let mut sequence = SafeSequence::default();

    while sequence.len() < processes.len() {
        let admissible = processes
            .iter()
            .enumerate()
            .find(|(i, p)| !finished[*i] && p.can_finish_with(&work));

        let Some((index, process)) = admissible else {
            let blocked = processes
                .iter()
                .zip(&finished)
                .filter(|(_, done)| !**done)
                .map(|(p, _)| p.id.clone())
                .collect();
            return SafetyOutcome::Unsafe { work, blocked };
        };

        let work_before = work.clone();
        for (w, alloc) in work.iter_mut().zip(&process.allocation) {
            *w += alloc;
        }
        finished[index] = true;

        sequence.steps.push(SafetyStep {
            process_id: process.id.clone(),
            work_before,
            need: process.need(),
            allocation: process.allocation.clone(),
            work_after: work.clone(),
        });
    }

    SafetyOutcome::Safe(sequence)
}

/// Re-simulates an arbitrary order and reports whether it is safe.
///
/// The order must name every process exactly once.
pub fn verify_safe_sequence(processes: &[Process], available: &[i64], order: &[&str]) -> bool {
    if order.len() != processes.len() {
        return false;
    }

    let mut work: ResourceVector = available.to_vec();
    let mut seen = vec![false; processes.len()];

    for id in order {
        let Some(index) = processes.iter().position(|p| p.id == *id) else {
            return false;
        };
        if seen[index] || !processes[index].can_finish_with(&work) {
            return false;
        }
        seen[index] = true;
        // Saturating: a total past i64::MAX still covers any need.
        for (w, alloc) in work.iter_mut().zip(&processes[index].allocation) {
            *w = w.saturating_add(*alloc);
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn textbook_processes() -> Vec<Process> {
        vec![
            Process::new("P0", [7, 5, 3], [0, 1, 0]),
            Process::new("P1", [3, 2, 2], [2, 0, 0]),
            Process::new("P2", [9, 0, 2], [3, 0, 2]),
            Process::new("P3", [2, 2, 2], [2, 1, 1]),
            Process::new("P4", [4, 3, 3], [0, 0, 2]),
        ]
    }

    #[test]
    fn test_safe_sequence_scan_restart() {
        let processes = textbook_processes();
        let outcome = check_safety(&processes, &[3, 3, 2]).unwrap();
        let seq = outcome.sequence().unwrap();

        assert_eq!(seq.order(), vec!["P1", "P3", "P0", "P2", "P4"]);
        assert!(verify_safe_sequence(&processes, &[3, 3, 2], &seq.order()));
        assert_eq!(seq.final_work(), Some(&vec![10, 5, 7]));
    }

    #[test]
    fn test_step_snapshots() {
        let outcome = check_safety(&textbook_processes(), &[3, 3, 2]).unwrap();
        let steps = &outcome.sequence().unwrap().steps;

        assert_eq!(steps[0].work_before, vec![3, 3, 2]);
        assert_eq!(steps[0].need, vec![1, 2, 2]);
        assert_eq!(steps[0].allocation, vec![2, 0, 0]);
        assert_eq!(steps[0].work_after, vec![5, 3, 2]);

        for pair in steps.windows(2) {
            assert_eq!(pair[0].work_after, pair[1].work_before);
        }
    }

    #[test]
    fn test_unsafe_with_nothing_available() {
        let outcome = check_safety(&textbook_processes(), &[0, 0, 0]).unwrap();
        assert!(!outcome.is_safe());
        assert!(outcome.sequence().is_none());

        match outcome {
            SafetyOutcome::Unsafe { work, blocked } => {
                assert_eq!(work, vec![0, 0, 0]);
                assert_eq!(blocked.len(), 5);
            }
            SafetyOutcome::Safe(_) => panic!("expected unsafe"),
        }
    }

    #[test]
    fn test_unsafe_after_partial_progress() {
        let processes = vec![
            Process::new("A", [1, 0], [0, 0]),
            Process::new("B", [5, 5], [1, 0]),
        ];
        let outcome = evaluate_safety(&processes, &[1, 1]);
        assert_eq!(
            outcome,
            SafetyOutcome::Unsafe {
                work: vec![1, 1],
                blocked: vec!["B".to_string()],
            }
        );
    }

    #[test]
    fn test_dimension_generic() {
        let processes = vec![
            Process::new("A", [2], [1]),
            Process::new("B", [2], [0]),
        ];
        let outcome = evaluate_safety(&processes, &[1]);
        assert_eq!(outcome.sequence().unwrap().order(), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_processes_safe() {
        let outcome = check_safety(&[], &[3, 3, 2]).unwrap();
        assert!(outcome.is_safe());
        assert!(outcome.sequence().unwrap().is_empty());
    }

    #[test]
    fn test_allocation_exceeding_maximum_rejected() {
        let processes = vec![Process::new("P0", [1, 1, 1], [2, 1, 1])];
        let errors = check_safety(&processes, &[3, 3, 2]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::AllocationExceedsMaximum);
    }

    #[test]
    fn test_verify_rejects_bad_orders() {
        let processes = textbook_processes();
        let available = [3, 3, 2];
        assert!(verify_safe_sequence(&processes, &available, &["P1", "P3", "P4", "P0", "P2"]));
        // P0 cannot start first.
        assert!(!verify_safe_sequence(&processes, &available, &["P0", "P1", "P2", "P3", "P4"]));
        assert!(!verify_safe_sequence(&processes, &available, &["P1", "P3"]));
        assert!(!verify_safe_sequence(&processes, &available, &["P1", "P1", "P3", "P4", "P0"]));
        assert!(!verify_safe_sequence(&processes, &available, &["P1", "P3", "P4", "P0", "PX"]));
    }

    #[test]
    fn test_repeatable() {
        let processes = textbook_processes();
        assert_eq!(
            evaluate_safety(&processes, &[3, 3, 2]),
            evaluate_safety(&processes, &[3, 3, 2])
        );
    }

    #[test]
    fn test_outcome_json_tag() {
        let outcome = evaluate_safety(&textbook_processes(), &[0, 0, 0]);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "unsafe");
    }

    #[test]
    fn test_overflowing_resource_total_rejected() {
        let processes = vec![
            Process::new("A", [1], [1]),
            Process::new("B", [i64::MAX], [i64::MAX]),
        ];
        let errors = check_safety(&processes, &[i64::MAX]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::Overflow);
    }

    #[test]
    fn test_verify_saturates_instead_of_overflowing() {
        let processes = vec![
            Process::new("A", [1], [1]),
            Process::new("B", [i64::MAX], [i64::MAX]),
        ];
        assert!(verify_safe_sequence(&processes, &[i64::MAX], &["A", "B"]));
    }
}
