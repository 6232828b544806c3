//! Tour representations.

use std::cmp::Ordering;

use crate::graph::Graph;

/// A closed walk produced by one agent, in 0-based vertex indices.
///
/// A feasible tour has `size + 1` entries, starts and ends at the same
/// vertex and visits every other vertex exactly once. A dead-ended agent
/// yields a shorter closed walk that is not feasible.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Vertex sequence, last entry repeats the first.
    pub path: Vec<usize>,
    /// Sum of consecutive edge weights along `path`.
    pub distance: f64,
    /// Whether every vertex appears among the non-closing entries.
    pub feasible: bool,
}

impl Tour {
    /// Wraps a closed path over `graph`, deriving its distance and
    /// feasibility.
    ///
    /// Callers guarantee every entry is a vertex of `graph`.
    pub(crate) fn from_closed_path(graph: &Graph, path: Vec<usize>) -> Self {
        let distance: f64 = path
            .windows(2)
            .map(|w| f64::from(graph.row(w[0])[w[1]]))
            .sum();
        let feasible = covers_all(&path, graph.size());
        Self {
            path,
            distance,
            feasible,
        }
    }

    /// Ranking used for every "best" decision: feasible before infeasible,
    /// then ascending distance.
    pub fn rank(&self, other: &Tour) -> Ordering {
        other
            .feasible
            .cmp(&self.feasible)
            .then_with(|| self.distance.total_cmp(&other.distance))
    }

    /// Returns `true` if `self` strictly outranks `other`.
    pub fn is_better_than(&self, other: &Tour) -> bool {
        self.rank(other) == Ordering::Less
    }
}

/// Checks that each vertex `0..size` appears before the closing entry.
fn covers_all(path: &[usize], size: usize) -> bool {
    let Some((_, body)) = path.split_last() else {
        return false;
    };
    let mut seen = vec![false; size];
    for &v in body {
        if let Some(slot) = seen.get_mut(v) {
            *slot = true;
        }
    }
    seen.into_iter().all(|s| s)
}

/// Final answer in display form: 1-based vertices plus total distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourResult {
    /// 1-based vertex sequence, last entry repeats the first.
    pub vertices: Vec<usize>,
    /// Total distance of the tour.
    pub distance: f64,
}

impl From<&Tour> for TourResult {
    fn from(tour: &Tour) -> Self {
        Self {
            vertices: tour.path.iter().map(|v| v + 1).collect(),
            distance: tour.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_matrix(vec![
            vec![0, 2, 3],
            vec![2, 0, 4],
            vec![3, 4, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_feasibility() {
        let g = triangle();
        let tour = Tour::from_closed_path(&g, vec![0, 2, 1, 0]);
        assert!(tour.feasible);
        assert!((tour.distance - 9.0).abs() < 1e-12);
        assert!(!Tour::from_closed_path(&g, vec![0, 2, 0]).feasible);
        assert!(!Tour::from_closed_path(&g, vec![]).feasible);
    }

    #[test]
    fn test_single_vertex_loop_is_feasible() {
        let g = Graph::from_matrix(vec![vec![0]]).unwrap();
        let tour = Tour::from_closed_path(&g, vec![0, 0]);
        assert!(tour.feasible);
        assert_eq!(tour.distance, 0.0);
    }

    #[test]
    fn test_closing_entry_does_not_count() {
        // vertex 1 only appears as the closing entry
        assert!(!Tour::from_closed_path(&triangle(), vec![0, 2, 1]).feasible);
    }

    #[test]
    fn test_return_over_missing_edge_still_covers() {
        let g = Graph::from_matrix(vec![
            vec![0, 1, 0],
            vec![1, 0, 1],
            vec![0, 1, 0],
        ])
        .unwrap();
        // the closing step 2 -> 0 has no edge and adds nothing
        let tour = Tour::from_closed_path(&g, vec![0, 1, 2, 0]);
        assert!(tour.feasible);
        assert!((tour.distance - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_feasible_outranks_shorter_infeasible() {
        let g = triangle();
        let long = Tour::from_closed_path(&g, vec![0, 1, 2, 0]);
        let short = Tour::from_closed_path(&g, vec![0, 1, 0]);
        assert!(short.distance < long.distance);
        assert!(long.is_better_than(&short));
        assert!(!short.is_better_than(&long));
    }

    #[test]
    fn test_rank_by_distance() {
        let a = Tour {
            path: vec![0, 1, 2, 0],
            distance: 10.0,
            feasible: true,
        };
        let b = Tour {
            path: vec![0, 2, 1, 0],
            distance: 12.0,
            feasible: true,
        };
        assert!(a.is_better_than(&b));
        assert!(!a.is_better_than(&a.clone()));
    }

    #[test]
    fn test_result_is_one_based() {
        let tour = Tour {
            path: vec![0, 1, 3, 2, 0],
            distance: 14.0,
            feasible: true,
        };
        let result = TourResult::from(&tour);
        assert_eq!(result.vertices, vec![1, 2, 4, 3, 1]);
        assert!((result.distance - 14.0).abs() < 1e-12);
    }
}
