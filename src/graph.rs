//! Weighted graph stored as a dense adjacency matrix.
//!
//! A zero weight means "no direct edge". Tour construction treats such
//! entries as unreachable rather than as free moves.
//!
//! # Text format
//!
//! ```text
//! 4
//! 0 1 2 3
//! 1 0 4 5
//! 2 4 0 6
//! 3 5 6 0
//! ```
//!
//! The first line holds the vertex count `N` and nothing else. It is
//! followed by exactly `N * N` whitespace-separated non-negative integers.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::GraphError;

/// Immutable square matrix of non-negative edge weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    size: usize,
    weights: Vec<u32>,
}

impl Graph {
    /// Builds a graph from a row-major square matrix.
    ///
    /// # Errors
    /// [`GraphError::Empty`] for a matrix without rows, and
    /// [`GraphError::NotSquare`] if any row length differs from the row count.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_antcolony::graph::Graph;
    ///
    /// let g = Graph::from_matrix(vec![vec![0, 3], vec![3, 0]]).unwrap();
    /// assert_eq!(g.size(), 2);
    /// assert_eq!(g.weight(0, 1).unwrap(), 3);
    /// ```
    pub fn from_matrix(matrix: Vec<Vec<u32>>) -> Result<Self, GraphError> {
        let size = matrix.len();
        if size == 0 {
            return Err(GraphError::Empty);
        }
        let mut weights = Vec::with_capacity(size * size);
        for (row, values) in matrix.into_iter().enumerate() {
            if values.len() != size {
                return Err(GraphError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            weights.extend(values);
        }
        Ok(Self { size, weights })
    }

    /// Loads a graph from a text file in adjacency-matrix format.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        fs::read_to_string(path)?.parse()
    }

    /// Reads a graph in adjacency-matrix format from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, GraphError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight of the edge `(i, j)`; zero means no edge.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if either index is `>= size()`.
    pub fn weight(&self, i: usize, j: usize) -> Result<u32, GraphError> {
        if i >= self.size || j >= self.size {
            return Err(GraphError::IndexOutOfRange {
                row: i,
                col: j,
                size: self.size,
            });
        }
        Ok(self.weights[i * self.size + j])
    }

    /// Weights of all edges leaving `i`.
    ///
    /// Callers guarantee `i < size()`.
    pub(crate) fn row(&self, i: usize) -> &[u32] {
        &self.weights[i * self.size..(i + 1) * self.size]
    }

    /// Sum of consecutive edge weights along `path`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if the path names a vertex outside
    /// the graph.
    pub fn path_length(&self, path: &[usize]) -> Result<f64, GraphError> {
        path.windows(2)
            .try_fold(0.0, |acc, w| -> Result<f64, GraphError> {
                Ok(acc + f64::from(self.weight(w[0], w[1])?))
            })
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (header, body) = text.split_once('\n').unwrap_or((text, ""));
        let header = header.trim_end_matches('\r');
        let size: usize = header
            .trim_start()
            .parse()
            .map_err(|_| GraphError::BadSize(header.to_string()))?;
        if size == 0 {
            return Err(GraphError::BadSize(header.to_string()));
        }

        let expected = size * size;
        let mut weights = Vec::with_capacity(expected);
        let mut tokens = body.split_whitespace();
        for token in tokens.by_ref().take(expected) {
            if !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(GraphError::NonDigitWeight(token.to_string()));
            }
            let value = token
                .parse::<u32>()
                .map_err(|_| GraphError::WeightOverflow(token.to_string()))?;
            weights.push(value);
        }
        if weights.len() < expected {
            return Err(GraphError::TooFewWeights {
                expected,
                found: weights.len(),
            });
        }
        if tokens.next().is_some() {
            return Err(GraphError::TooManyWeights { expected, size });
        }

        Ok(Self { size, weights })
    }
}
