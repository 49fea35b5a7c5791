// Distance matrix built from node coordinates

use rayon::prelude::*;

use crate::models::{Distance, Node};

/// Symmetric N x N matrix of Euclidean distances between nodes.
/// Built once from the instance coordinates, read-only afterwards.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Distance>,
}

impl DistanceMatrix {
    /// Computes the full pairwise matrix. Rows are computed in
    /// parallel; the diagonal is zero.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let size = nodes.len();
        let values: Vec<Distance> = (0..size)
            .into_par_iter()
            .flat_map_iter(|i| {
                (0..size).map(move |j| {
                    if i == j {
                        0.0
                    } else {
                        nodes[i].location.distance_to(&nodes[j].location)
                    }
                })
            })
            .collect();

        Self { size, values }
    }

    /// Number of nodes covered by the matrix
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance between two nodes
    pub fn get(&self, from: usize, to: usize) -> Distance {
        self.values[from * self.size + to]
    }

    /// Total distance along a stop sequence
    pub fn path_distance(&self, stops: &[usize]) -> Distance {
        stops.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn grid_nodes() -> Vec<Node> {
        vec![
            Node::new(0, Location::new(0.0, 0.0), 0.0),
            Node::new(1, Location::new(3.0, 4.0), 10.0),
            Node::new(2, Location::new(6.0, 8.0), 10.0),
        ]
    }

    #[test]
    fn test_matrix_is_symmetric_with_zero_diagonal() {
        let matrix = DistanceMatrix::from_nodes(&grid_nodes());
        assert_eq!(matrix.size(), 3);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        assert_eq!(matrix.get(0, 1), 5.0);
        assert_eq!(matrix.get(0, 2), 10.0);
        assert_eq!(matrix.get(1, 2), 5.0);
    }

    #[test]
    fn test_path_distance() {
        let matrix = DistanceMatrix::from_nodes(&grid_nodes());
        assert_eq!(matrix.path_distance(&[0, 1, 2, 0]), 20.0);
        assert_eq!(matrix.path_distance(&[0]), 0.0);
    }
}
