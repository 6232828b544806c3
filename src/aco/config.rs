//! ACO configuration.
//!
//! [`AcoConfig`] holds the heuristic constants shared by every agent of a
//! run. They are fixed for the duration of a run.

/// Configuration for the Ant Colony Optimization driver.
///
/// # Defaults
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.colonies, 100);
/// assert_eq!(config.bypass_count, 10);
/// assert!(!config.parallel);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_colonies(5)
///     .with_bypass_count(5)
///     .with_beta(2.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Pheromone importance exponent.
    pub alpha: f64,

    /// Distance importance exponent, applied to `1 / distance`.
    pub beta: f64,

    /// Pheromone deposit scale. An agent deposits `q / tour_distance`
    /// on every edge it logged.
    pub q: f64,

    /// Initial pheromone level of every cell at the start of a colony.
    pub tau: f64,

    /// Evaporation parameter. Each contributing agent adds
    /// `(1 - ro) * current` before its deposit.
    pub ro: f64,

    /// Number of independent colonies (pheromone restarts) per run.
    pub colonies: usize,

    /// Number of rounds within one colony.
    pub bypass_count: usize,

    /// Whether rounds build tours concurrently, one task per vertex.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            q: 4.0,
            tau: 0.2,
            ro: 0.5,
            colonies: 100,
            bypass_count: 10,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_tau(mut self, tau: f64) -> Self {
        self.tau = tau;
        self
    }

    pub fn with_ro(mut self, ro: f64) -> Self {
        self.ro = ro;
        self
    }

    pub fn with_colonies(mut self, n: usize) -> Self {
        self.colonies = n;
        self
    }

    pub fn with_bypass_count(mut self, n: usize) -> Self {
        self.bypass_count = n;
        self
    }

    /// Enables or disables concurrent tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(format!("alpha must be finite and non-negative, got {}", self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(format!("beta must be finite and non-negative, got {}", self.beta));
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(format!("q must be finite and positive, got {}", self.q));
        }
        if !self.tau.is_finite() || self.tau <= 0.0 {
            return Err(format!("tau must be finite and positive, got {}", self.tau));
        }
        if !(0.0..=1.0).contains(&self.ro) {
            return Err(format!("ro must be in [0, 1], got {}", self.ro));
        }
        if self.colonies == 0 {
            return Err("colonies must be at least 1".into());
        }
        if self.bypass_count == 0 {
            return Err("bypass_count must be at least 1".into());
        }
        Ok(())
    }
}
