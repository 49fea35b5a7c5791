// Routing instance model: node set plus the fixed fleet

use crate::models::{Demand, Node, DEPOT};

/// A fixed fleet of identical vehicles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fleet {
    /// Number of vehicles available
    pub vehicles: usize,

    /// Capacity of every vehicle
    pub capacity: f64,
}

impl Fleet {
    /// Creates a new fleet description
    pub fn new(vehicles: usize, capacity: f64) -> Self {
        Self { vehicles, capacity }
    }
}

/// An immutable routing instance: depot, customers and fleet.
/// Construction validates the demand data, after that the instance
/// is read-only.
#[derive(Debug, Clone)]
pub struct Instance {
    nodes: Vec<Node>,
    fleet: Fleet,
}

impl Instance {
    /// Creates a validated instance. Node ids must be dense 0..N with
    /// node 0 as the depot, the depot demand must be zero and all
    /// customer demands non-negative.
    pub fn new(nodes: Vec<Node>, fleet: Fleet) -> Result<Self, String> {
        if nodes.len() < 2 {
            return Err("instance needs a depot and at least one customer".to_string());
        }
        if fleet.vehicles == 0 {
            return Err("fleet must have at least one vehicle".to_string());
        }
        if fleet.capacity <= 0.0 {
            return Err(format!("vehicle capacity must be positive, got {}", fleet.capacity));
        }

        for (expected_id, node) in nodes.iter().enumerate() {
            if node.id != expected_id {
                return Err(format!(
                    "node ids must be dense and ordered: expected {}, found {}",
                    expected_id, node.id
                ));
            }
            if node.demand < 0.0 {
                return Err(format!("node {} has negative demand {}", node.id, node.demand));
            }
        }
        if nodes[DEPOT].demand != 0.0 {
            return Err(format!(
                "depot demand must be zero, got {}",
                nodes[DEPOT].demand
            ));
        }

        Ok(Self { nodes, fleet })
    }

    /// All nodes, depot first
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Total node count including the depot
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of customers (everything except the depot)
    pub fn customer_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// The fleet serving this instance
    pub fn fleet(&self) -> Fleet {
        self.fleet
    }

    /// Demand of a single node
    pub fn demand(&self, id: usize) -> Demand {
        self.nodes[id].demand
    }

    /// Sum of all customer demands
    pub fn total_demand(&self) -> Demand {
        self.nodes.iter().map(|n| n.demand).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn nodes(demands: &[f64]) -> Vec<Node> {
        demands
            .iter()
            .enumerate()
            .map(|(id, &d)| Node::new(id, Location::new(id as f64, 0.0), d))
            .collect()
    }

    #[test]
    fn test_valid_instance() {
        let instance = Instance::new(nodes(&[0.0, 10.0, 20.0]), Fleet::new(2, 100.0)).unwrap();
        assert_eq!(instance.node_count(), 3);
        assert_eq!(instance.customer_count(), 2);
        assert_eq!(instance.total_demand(), 30.0);
        assert_eq!(instance.demand(2), 20.0);
    }

    #[test]
    fn test_rejects_nonzero_depot_demand() {
        let result = Instance::new(nodes(&[5.0, 10.0]), Fleet::new(1, 100.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_negative_demand() {
        let result = Instance::new(nodes(&[0.0, -1.0]), Fleet::new(1, 100.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_sparse_ids() {
        let mut bad = nodes(&[0.0, 10.0]);
        bad[1].id = 7;
        let result = Instance::new(bad, Fleet::new(1, 100.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_fleet() {
        let result = Instance::new(nodes(&[0.0, 10.0]), Fleet::new(0, 100.0));
        assert!(result.is_err());
    }
}
