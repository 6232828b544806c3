//! ACO search driver.
//!
//! # Algorithm
//!
//! 1. For each colony, reset the pheromone field to `tau`
//! 2. For each round within the colony:
//!    a. Build one tour per starting vertex (sequentially or concurrently)
//!    b. Sort the round's tours by distance; keep the colony best
//!    c. Evaporate and deposit pheromone from every agent's logged edges
//! 3. Keep the best colony result across all colonies
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant System: Optimization
//! by a Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use rand::rngs::StdRng;
use tracing::{debug, info, trace, warn};

use super::ant::Ant;
use super::colony::{ColonyRound, RoundMode};
use super::config::AcoConfig;
use super::pheromone::PheromoneField;
use super::types::{Tour, TourResult};
use crate::error::{AcoError, AcoResult};
use crate::graph::Graph;
use crate::random::seeded_or_random;

/// Ant Colony Optimization driver for the Traveling Salesman Problem.
///
/// Borrows the graph for its whole lifetime. Each call to
/// [`run_algorithm`](Self::run_algorithm) is an independent search that
/// replaces the previously recorded result.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::{AcoConfig, AntAlgorithm};
/// use u_antcolony::graph::Graph;
///
/// let graph = Graph::from_matrix(vec![
///     vec![0, 1, 2, 3],
///     vec![1, 0, 4, 5],
///     vec![2, 4, 0, 6],
///     vec![3, 5, 6, 0],
/// ])
/// .unwrap();
/// let config = AcoConfig::default().with_colonies(5).with_bypass_count(5).with_seed(42);
/// let mut aco = AntAlgorithm::with_config(&graph, config).unwrap();
/// let result = aco.run_algorithm().unwrap();
/// assert_eq!(result.vertices.len(), 5);
/// assert_eq!(result.distance, 14.0);
/// ```
#[derive(Debug)]
pub struct AntAlgorithm<'g> {
    graph: &'g Graph,
    config: AcoConfig,
    pheromones: PheromoneField,
    result: Option<Tour>,
    last_mode: Option<RoundMode>,
    rng: StdRng,
}

impl<'g> AntAlgorithm<'g> {
    /// Creates a driver with the default configuration.
    pub fn new(graph: &'g Graph) -> Self {
        let config = AcoConfig::default();
        Self {
            graph,
            pheromones: PheromoneField::new(graph.size(), config.tau),
            rng: seeded_or_random(config.seed),
            result: None,
            last_mode: None,
            config,
        }
    }

    /// Creates a driver with a custom configuration.
    ///
    /// # Errors
    /// [`AcoError::InvalidConfig`] if [`AcoConfig::validate`] fails.
    pub fn with_config(graph: &'g Graph, config: AcoConfig) -> AcoResult<Self> {
        config.validate().map_err(AcoError::InvalidConfig)?;
        Ok(Self {
            graph,
            pheromones: PheromoneField::new(graph.size(), config.tau),
            rng: seeded_or_random(config.seed),
            result: None,
            last_mode: None,
            config,
        })
    }

    /// Selects concurrent or sequential rounds for subsequent runs.
    ///
    /// Takes `&mut self`, so it cannot affect a run in flight.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Pheromone field as left by the last round of the last colony.
    pub fn pheromones(&self) -> &PheromoneField {
        &self.pheromones
    }

    /// Round mode used by the last run, `None` before the first one.
    pub fn last_mode(&self) -> Option<RoundMode> {
        self.last_mode
    }

    /// Best tour recorded by the last run, in 0-based form, feasible or not.
    pub fn best_tour(&self) -> Option<&Tour> {
        self.result.as_ref()
    }

    /// Runs every colony and returns the best tour found.
    ///
    /// # Errors
    /// [`AcoError::InfeasibleSolution`] if no agent of any colony produced
    /// a tour through every vertex.
    pub fn run_algorithm(&mut self) -> AcoResult<TourResult> {
        let mode = RoundMode::from_parallel(self.config.parallel);
        let span = tracing::debug_span!("run_algorithm", vertices = self.graph.size(), ?mode);
        let _guard = span.enter();

        let mut best: Option<Tour> = None;
        for colony in 0..self.config.colonies {
            let colony_best = self.run_colony(mode);
            debug!(
                colony,
                distance = distance_of(colony_best.as_ref()),
                best = distance_of(best.as_ref()),
                "colony finished"
            );
            if improves(colony_best.as_ref(), best.as_ref()) {
                best = colony_best;
            }
        }
        self.result = best;
        self.last_mode = Some(mode);

        match &self.result {
            Some(tour) => info!(
                distance = tour.distance,
                feasible = tour.feasible,
                ?mode,
                "run finished"
            ),
            None => info!(?mode, "run finished without a tour"),
        }
        self.get_result()
    }

    /// Returns the recorded result in 1-based display form.
    ///
    /// Does not mutate any state; repeated calls return the same value.
    ///
    /// # Errors
    /// [`AcoError::InfeasibleSolution`] if nothing was recorded or the
    /// recorded tour misses a vertex.
    pub fn get_result(&self) -> AcoResult<TourResult> {
        match &self.result {
            Some(tour) if tour.feasible => Ok(TourResult::from(tour)),
            _ => Err(AcoError::InfeasibleSolution),
        }
    }

    fn run_colony(&mut self, mode: RoundMode) -> Option<Tour> {
        let mut colony_best: Option<Tour> = None;
        self.pheromones.reset(self.config.tau);

        let round = ColonyRound::new(self.graph, mode);
        for bypass in 0..self.config.bypass_count {
            let mut ants = round.run(&self.pheromones, &self.config, &mut self.rng);
            update_result(&mut ants, &mut colony_best);
            if let Some(lead) = ants.first() {
                trace!(
                    bypass,
                    distance = lead.tour().distance,
                    feasible = lead.tour().feasible,
                    "round finished"
                );
            }
            self.update_pheromones(&ants);
        }
        colony_best
    }

    fn update_pheromones(&mut self, ants: &[Ant<'_>]) {
        let saturated = self.pheromones.deposit(ants, self.config.ro, self.config.q);
        if saturated > 0 {
            warn!(saturated, "pheromone trails clamped at f64::MAX");
        }
    }
}

/// Sorts the round's agents by ascending distance and records an
/// improvement.
///
/// The sorted order is also the pheromone accumulation order. Ties are
/// broken by starting vertex so the order does not depend on which
/// concurrent agent finished first. The round's candidate is the shortest
/// feasible tour, or the shortest tour when none is feasible.
fn update_result(ants: &mut [Ant<'_>], best: &mut Option<Tour>) {
    ants.sort_by(|a, b| {
        a.tour()
            .distance
            .total_cmp(&b.tour().distance)
            .then_with(|| a.start().cmp(&b.start()))
    });
    let lead = ants
        .iter()
        .find(|a| a.tour().feasible)
        .or_else(|| ants.first());
    if let Some(lead) = lead {
        if improves(Some(lead.tour()), best.as_ref()) {
            *best = Some(lead.tour().clone());
        }
    }
}

fn improves(candidate: Option<&Tour>, current: Option<&Tour>) -> bool {
    match (candidate, current) {
        (Some(c), Some(b)) => c.is_better_than(b),
        (Some(_), None) => true,
        (None, _) => false,
    }
}

fn distance_of(tour: Option<&Tour>) -> f64 {
    tour.map_or(f64::INFINITY, |t| t.distance)
}
