// Node model representing the depot and customer stops

use crate::models::{Demand, Location, NodeId};

/// A single node of the routing instance. Node 0 is the depot, all
/// other ids are customers with a delivery demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Identifier of the node (0 = depot)
    pub id: NodeId,

    /// Geographic location of the node
    pub location: Location,

    /// Delivery demand (always 0.0 for the depot)
    pub demand: Demand,
}

impl Node {
    /// Creates a new node
    pub fn new(id: NodeId, location: Location, demand: Demand) -> Self {
        Self {
            id,
            location,
            demand,
        }
    }

    /// Whether this node is the depot
    pub fn is_depot(&self) -> bool {
        self.id == crate::models::DEPOT
    }
}
