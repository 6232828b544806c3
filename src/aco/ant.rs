//! Single-agent tour construction.
//!
//! An [`Ant`] starts at one seed vertex and repeatedly picks an unvisited
//! neighbour with probability proportional to
//! `pheromone^alpha * (1 / distance)^beta`. Zero-weight edges are not
//! candidates. When no candidate remains before all vertices are visited
//! the walk dead-ends: it stops growing and is closed as-is, producing an
//! infeasible tour.

use rand::Rng;

use super::config::AcoConfig;
use super::pheromone::PheromoneField;
use super::types::Tour;
use crate::graph::Graph;

/// One agent of a colony round.
///
/// Lives only for the round that created it.
#[derive(Debug, Clone)]
pub struct Ant<'g> {
    graph: &'g Graph,
    start: usize,
    tabu: Vec<bool>,
    tour: Tour,
    visited: Vec<(usize, usize)>,
}

impl<'g> Ant<'g> {
    /// Creates an agent positioned at `start`.
    ///
    /// # Panics
    /// Panics if `start >= graph.size()`.
    pub fn new(graph: &'g Graph, start: usize) -> Self {
        let mut tabu = vec![false; graph.size()];
        tabu[start] = true;
        Self {
            graph,
            start,
            tabu,
            tour: Tour {
                path: vec![start],
                distance: 0.0,
                feasible: false,
            },
            visited: Vec::with_capacity(graph.size()),
        }
    }

    /// Builds the agent's tour under the given pheromone field and closes
    /// it back to the seed vertex.
    pub fn make_bypass<R: Rng>(
        &mut self,
        pheromones: &PheromoneField,
        config: &AcoConfig,
        rng: &mut R,
    ) {
        for _ in 0..self.graph.size() {
            match self.choose_next(pheromones, config, rng) {
                Some(next) => self.step_to(next),
                None => break,
            }
        }
        self.close();
    }

    /// Seed vertex.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The closed tour (meaningful once [`make_bypass`](Self::make_bypass) ran).
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Directed steps taken, excluding the closing edge.
    pub fn visited(&self) -> &[(usize, usize)] {
        &self.visited
    }

    /// Whether the agent stepped along the unordered pair `{i, j}`.
    pub fn is_visited(&self, i: usize, j: usize) -> bool {
        self.visited
            .iter()
            .any(|&(a, b)| (a == i && b == j) || (a == j && b == i))
    }

    fn current(&self) -> usize {
        self.tour.path.last().copied().unwrap_or(self.start)
    }

    fn step_to(&mut self, next: usize) {
        self.visited.push((self.current(), next));
        self.tour.path.push(next);
        self.tabu[next] = true;
    }

    fn close(&mut self) {
        let mut path = std::mem::take(&mut self.tour.path);
        path.push(self.start);
        self.tour = Tour::from_closed_path(self.graph, path);
    }

    /// Roulette-wheel selection over reachable unvisited vertices.
    fn choose_next<R: Rng>(
        &self,
        pheromones: &PheromoneField,
        config: &AcoConfig,
        rng: &mut R,
    ) -> Option<usize> {
        let current = self.current();
        let candidates: Vec<(usize, u32)> = self
            .graph
            .row(current)
            .iter()
            .enumerate()
            .filter(|&(v, &w)| w > 0 && !self.tabu[v])
            .map(|(v, &w)| (v, w))
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let chances = chances(&candidates, current, pheromones, config)?;
        let draw: f64 = rng.random_range(0.0..1.0);
        let mut cumulative = 0.0;
        for (&(v, _), p) in candidates.iter().zip(&chances) {
            cumulative += p;
            if draw < cumulative {
                return Some(v);
            }
        }
        // rounding left the total just below the draw
        candidates.last().map(|&(v, _)| v)
    }
}

/// Normalized selection probabilities for `candidates`.
///
/// Falls back to a max-shifted log-domain evaluation when the direct sum
/// overflows or underflows, which leaves the distribution unchanged.
fn chances(
    candidates: &[(usize, u32)],
    current: usize,
    pheromones: &PheromoneField,
    config: &AcoConfig,
) -> Option<Vec<f64>> {
    let direct: Vec<f64> = candidates
        .iter()
        .map(|&(v, w)| {
            pheromones.get(current, v).powf(config.alpha) * (1.0 / f64::from(w)).powf(config.beta)
        })
        .collect();
    let total: f64 = direct.iter().sum();
    if total.is_finite() && total > 0.0 {
        return Some(direct.into_iter().map(|c| c / total).collect());
    }

    let logs: Vec<f64> = candidates
        .iter()
        .map(|&(v, w)| {
            config.alpha * pheromones.get(current, v).ln() - config.beta * f64::from(w).ln()
        })
        .collect();
    let max = logs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return None;
    }
    let shifted: Vec<f64> = logs.iter().map(|l| (l - max).exp()).collect();
    let total: f64 = shifted.iter().sum();
    if total > 0.0 {
        Some(shifted.into_iter().map(|c| c / total).collect())
    } else {
        None
    }
}

#[cfg(test)]
impl<'g> Ant<'g> {
    /// Builds an agent that walked `path` (without the closing vertex).
    pub(crate) fn from_path(graph: &'g Graph, path: &[usize]) -> Self {
        let mut ant = Ant::new(graph, path[0]);
        for &v in &path[1..] {
            ant.step_to(v);
        }
        ant.close();
        ant
    }
}
