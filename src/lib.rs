//! Ant Colony Optimization for the Traveling Salesman Problem.
//!
//! - **Graph**: immutable adjacency matrix of non-negative integer weights,
//!   with a loader for the plain-text matrix format.
//! - **ACO**: probabilistic tour construction, pheromone evaporation and
//!   deposit, and a multi-colony driver that runs each round either
//!   sequentially or concurrently.
//!
//! # Example
//!
//! ```
//! use u_antcolony::aco::{AcoConfig, AntAlgorithm};
//! use u_antcolony::graph::Graph;
//!
//! let graph: Graph = "3\n0 2 3\n2 0 4\n3 4 0".parse().unwrap();
//! let mut aco = AntAlgorithm::with_config(&graph, AcoConfig::default().with_colonies(3)).unwrap();
//! aco.set_parallel(true);
//! let result = aco.run_algorithm().unwrap();
//! assert_eq!(result.distance, 9.0);
//! ```
//!
//! The library emits [`tracing`] events and never installs a subscriber.

pub mod aco;
pub mod error;
pub mod graph;
pub mod random;

pub use error::{AcoError, AcoResult, GraphError};
