//! Symmetric pheromone trail matrix.

use super::ant::Ant;

/// Square matrix of trail intensities with `[i][j] == [j][i]`.
///
/// Written only by the driver between rounds; agents read it while a
/// round is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    size: usize,
    trails: Vec<f64>,
}

impl PheromoneField {
    /// Creates a `size x size` field with every cell set to `tau`.
    pub fn new(size: usize, tau: f64) -> Self {
        Self {
            size,
            trails: vec![tau; size * size],
        }
    }

    /// Resets every cell to `tau`.
    pub fn reset(&mut self, tau: f64) {
        self.trails.fill(tau);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Trail intensity on `(i, j)`.
    ///
    /// # Panics
    /// Panics if either index is `>= size()`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "pheromone index out of range");
        self.trails[i * self.size + j]
    }

    /// Applies one round of evaporation and deposit.
    ///
    /// For every edge an agent logged, in agent order:
    /// `p += (1 - ro) * p + q / agent_distance`, mirrored to the opposite
    /// cell. Evaporation is therefore compounded once per contributing
    /// agent. Cells are clamped to `f64::MAX`.
    ///
    /// Returns the number of cells that hit the ceiling.
    pub fn deposit(&mut self, ants: &[Ant<'_>], ro: f64, q: f64) -> usize {
        let mut saturated = 0;
        for ant in ants {
            let distance = ant.tour().distance;
            for &(a, b) in ant.visited() {
                let (i, j) = if a < b { (a, b) } else { (b, a) };
                let cell = self.trails[i * self.size + j];
                let mut next = cell + (1.0 - ro) * cell + q / distance;
                if !next.is_finite() {
                    next = f64::MAX;
                    saturated += 1;
                }
                self.trails[i * self.size + j] = next;
                self.trails[j * self.size + i] = next;
            }
        }
        saturated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn assert_symmetric(field: &PheromoneField) {
        for i in 0..field.size() {
            for j in 0..field.size() {
                assert_eq!(field.get(i, j), field.get(j, i), "asymmetric at ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_new_and_reset() {
        let mut field = PheromoneField::new(3, 0.2);
        assert_eq!(field.size(), 3);
        assert!((field.get(2, 1) - 0.2).abs() < 1e-12);
        field.reset(0.7);
        assert!((field.get(0, 0) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_deposit_single_ant() {
        let graph = Graph::from_matrix(vec![
            vec![0, 1, 2],
            vec![1, 0, 3],
            vec![2, 3, 0],
        ])
        .unwrap();
        // 0 -> 1 -> 2 -> 0, distance 6, logged edges (0,1) and (1,2)
        let ant = Ant::from_path(&graph, &[0, 1, 2]);
        let mut field = PheromoneField::new(3, 0.2);
        let saturated = field.deposit(std::slice::from_ref(&ant), 0.5, 4.0);
        assert_eq!(saturated, 0);

        let expected = 0.2 + 0.5 * 0.2 + 4.0 / 6.0;
        assert!((field.get(0, 1) - expected).abs() < 1e-12);
        assert!((field.get(2, 1) - expected).abs() < 1e-12);
        // closing edge is not logged
        assert!((field.get(0, 2) - 0.2).abs() < 1e-12);
        assert_symmetric(&field);
    }

    #[test]
    fn test_deposit_compounds_per_agent() {
        let graph = Graph::from_matrix(vec![vec![0, 2], vec![2, 0]]).unwrap();
        let a = Ant::from_path(&graph, &[0, 1]);
        let b = Ant::from_path(&graph, &[1, 0]);
        let mut field = PheromoneField::new(2, 1.0);
        field.deposit(&[a, b], 0.5, 4.0);

        // each ant: distance 4, deposit 1.0
        let after_first = 1.0 + 0.5 * 1.0 + 1.0;
        let after_second = after_first + 0.5 * after_first + 1.0;
        assert!((field.get(0, 1) - after_second).abs() < 1e-12);
        assert_symmetric(&field);
    }

    #[test]
    fn test_deposit_saturates_finite() {
        let graph = Graph::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let ant = Ant::from_path(&graph, &[0, 1]);
        let mut field = PheromoneField::new(2, f64::MAX);
        let saturated = field.deposit(std::slice::from_ref(&ant), 0.0, 1.0);
        assert_eq!(saturated, 1);
        assert_eq!(field.get(0, 1), f64::MAX);
        assert_eq!(field.get(1, 0), f64::MAX);
    }
}
