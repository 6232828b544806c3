//! One wave of agents, one per starting vertex.

use std::sync::{Mutex, PoisonError};

use rand::Rng;

use super::ant::Ant;
use super::config::AcoConfig;
use super::pheromone::PheromoneField;
use crate::graph::Graph;
use crate::random::create_rng;

/// How a round dispatches its agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundMode {
    /// Agents run one after another on the calling thread, seeds `0..n` in order.
    Sequential,
    /// One rayon task per starting vertex. Finished agents are appended to a
    /// shared vector under a mutex, in completion order.
    Concurrent,
}

impl RoundMode {
    pub fn from_parallel(parallel: bool) -> Self {
        if parallel {
            RoundMode::Concurrent
        } else {
            RoundMode::Sequential
        }
    }
}

/// A single colony round over a graph.
///
/// The pheromone field is only read while the round runs; the returned
/// agents are handed back once every agent has finished.
#[derive(Debug, Clone, Copy)]
pub struct ColonyRound<'g> {
    graph: &'g Graph,
    mode: RoundMode,
}

impl<'g> ColonyRound<'g> {
    pub fn new(graph: &'g Graph, mode: RoundMode) -> Self {
        Self { graph, mode }
    }

    /// Runs one agent per vertex and returns all of them.
    ///
    /// Each agent gets its own generator, seeded from `rng` before any agent
    /// starts, so a seeded run is reproducible in either mode. In concurrent
    /// mode the order of the returned agents is unspecified.
    pub fn run<R: Rng>(
        &self,
        pheromones: &PheromoneField,
        config: &AcoConfig,
        rng: &mut R,
    ) -> Vec<Ant<'g>> {
        let seeds: Vec<u64> = (0..self.graph.size()).map(|_| rng.random()).collect();
        match self.mode {
            RoundMode::Sequential => self.run_sequential(pheromones, config, &seeds),
            RoundMode::Concurrent => self.run_concurrent(pheromones, config, &seeds),
        }
    }

    fn run_sequential(
        &self,
        pheromones: &PheromoneField,
        config: &AcoConfig,
        seeds: &[u64],
    ) -> Vec<Ant<'g>> {
        seeds
            .iter()
            .enumerate()
            .map(|(start, &seed)| {
                let mut ant = Ant::new(self.graph, start);
                ant.make_bypass(pheromones, config, &mut create_rng(seed));
                ant
            })
            .collect()
    }

    fn run_concurrent(
        &self,
        pheromones: &PheromoneField,
        config: &AcoConfig,
        seeds: &[u64],
    ) -> Vec<Ant<'g>> {
        let ants = Mutex::new(Vec::with_capacity(seeds.len()));
        let graph = self.graph;

        // scope returns only after every spawned task has finished
        rayon::scope(|s| {
            for (start, &seed) in seeds.iter().enumerate() {
                let ants = &ants;
                s.spawn(move |_| {
                    let mut ant = Ant::new(graph, start);
                    ant.make_bypass(pheromones, config, &mut create_rng(seed));

                    ants.lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .push(ant);
                });
            }
        });

        ants.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
