//! Process model for deadlock avoidance.
//!
//! A process holds some units of each resource type (`allocation`) and
//! declares the most it may ever hold (`maximum`). The difference is its
//! remaining `need`.
//!
//! # Reference
//! Dijkstra (1965), "Cooperating Sequential Processes" (Banker's Algorithm)

use serde::{Deserialize, Serialize};

/// One unit count per resource type.
pub type ResourceVector = Vec<i64>;

/// A process participating in a Banker's safety check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (e.g. "P0").
    pub id: String,
    /// Maximum units of each resource the process may claim.
    pub maximum: ResourceVector,
    /// Units of each resource currently held.
    pub allocation: ResourceVector,
}

impl Process {
    /// Creates a process from its maximum claim and current allocation.
    pub fn new(
        id: impl Into<String>,
        maximum: impl Into<ResourceVector>,
        allocation: impl Into<ResourceVector>,
    ) -> Self {
        Self {
            id: id.into(),
            maximum: maximum.into(),
            allocation: allocation.into(),
        }
    }

    /// `maximum - allocation`, element-wise.
    pub fn need(&self) -> ResourceVector {
        self.maximum
            .iter()
            .zip(&self.allocation)
            .map(|(max, alloc)| max - alloc)
            .collect()
    }

    /// Number of resource types this process describes.
    pub fn dimensions(&self) -> usize {
        self.maximum.len()
    }

    /// Whether the remaining need fits within `work` in every dimension.
    pub fn can_finish_with(&self, work: &[i64]) -> bool {
        self.need().iter().zip(work).all(|(need, avail)| need <= avail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_need() {
        let p = Process::new("P0", [7, 5, 3], [0, 1, 0]);
        assert_eq!(p.need(), vec![7, 4, 3]);
        assert_eq!(p.dimensions(), 3);
    }

    #[test]
    fn test_can_finish_with() {
        let p = Process::new("P1", [3, 2, 2], [2, 0, 0]);
        assert!(p.can_finish_with(&[3, 3, 2]));
        assert!(p.can_finish_with(&[1, 2, 2]));
        assert!(!p.can_finish_with(&[1, 1, 2]));
    }
}
