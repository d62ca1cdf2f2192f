//! Rule engine for multi-key job ordering.
//!
//! Applies rules in sequence, consulting the next rule only on ties. Jobs
//! that tie on every rule keep their input order, which is what makes every
//! kernel's ordering reproducible.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Job;

/// A composable rule engine for job ordering.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{rules, RuleEngine};
/// use cpu_schedule::models::Job;
///
/// let engine = RuleEngine::new().with_rule(rules::Priority);
/// let jobs = vec![
///     Job::new("P1", 5).with_priority(3),
///     Job::new("P2", 3).with_priority(1),
/// ];
/// assert_eq!(engine.sort_indices(&jobs), vec![1, 0]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (pure input order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule, consulted only when every earlier rule ties.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns indices into `jobs` in dispatch order.
    ///
    /// The sort is stable: jobs that tie on every rule keep their
    /// relative input order.
    pub fn sort_indices(&self, jobs: &[Job]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&jobs[a], &jobs[b]));
        indices
    }

    /// Returns the jobs themselves in dispatch order.
    pub fn sort<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        self.sort_indices(jobs).into_iter().map(|i| &jobs[i]).collect()
    }

    /// Orders already-borrowed jobs in place (stable).
    pub fn sort_refs(&self, jobs: &mut [&Job]) {
        jobs.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        Ordering::Equal
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn ids<'a>(jobs: &'a [Job], order: &[usize]) -> Vec<&'a str> {
        order.iter().map(|&i| jobs[i].id.as_str()).collect()
    }

    #[test]
    fn test_spt_ordering() {
        let jobs = vec![Job::new("P1", 5), Job::new("P2", 3), Job::new("P3", 1)];
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert_eq!(ids(&jobs, &engine.sort_indices(&jobs)), vec!["P3", "P2", "P1"]);
    }

    #[test]
    fn test_stable_on_ties() {
        let jobs = vec![Job::new("B", 2), Job::new("A", 2), Job::new("C", 1)];
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert_eq!(ids(&jobs, &engine.sort_indices(&jobs)), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_second_rule_breaks_ties() {
        let jobs = vec![
            Job::new("P1", 4).with_arrival(1),
            Job::new("P2", 2).with_arrival(1),
            Job::new("P3", 9).with_arrival(0),
        ];
        let engine = RuleEngine::new()
            .with_rule(rules::Fifo)
            .with_rule(rules::Spt);
        assert_eq!(ids(&jobs, &engine.sort_indices(&jobs)), vec!["P3", "P2", "P1"]);
    }

    #[test]
    fn test_sort_refs() {
        let jobs = vec![Job::new("P1", 5), Job::new("P2", 1)];
        let mut refs: Vec<&Job> = jobs.iter().collect();
        RuleEngine::new().with_rule(rules::Spt).sort_refs(&mut refs);
        assert_eq!(refs[0].id, "P2");
    }

    #[test]
    fn test_no_rules_keeps_input_order() {
        let jobs = vec![Job::new("P2", 5), Job::new("P1", 1)];
        assert_eq!(RuleEngine::new().sort_indices(&jobs), vec![0, 1]);
    }

    #[test]
    fn test_empty_jobs() {
        let engine = RuleEngine::new().with_rule(rules::Spt);
        assert!(engine.sort_indices(&[]).is_empty());
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new().with_rule(rules::Spt).with_rule(rules::Fifo);
        assert_eq!(engine.rule_names(), vec!["SPT", "FIFO"]);
        assert!(format!("{engine:?}").contains("SPT"));
    }
}
