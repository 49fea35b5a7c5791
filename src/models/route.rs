// Route model for reconstructed per-vehicle tours

use crate::models::{Distance, NodeId, VehicleId, DEPOT};

/// A reconstructed vehicle tour: ordered stop sequence starting and
/// ending at the depot, with its derived metrics
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Vehicle this route belongs to
    pub vehicle: VehicleId,

    /// Ordered node sequence, depot first and (for closed routes) last
    pub stops: Vec<NodeId>,

    /// Sum of consecutive-arc distances
    pub distance: Distance,
}

impl Route {
    /// Creates a new route
    pub fn new(vehicle: VehicleId, stops: Vec<NodeId>, distance: Distance) -> Self {
        Self {
            vehicle,
            stops,
            distance,
        }
    }

    /// Number of customer stops (sequence length minus depot occurrences)
    pub fn customer_count(&self) -> usize {
        self.stops.iter().filter(|&&n| n != DEPOT).count()
    }

    /// Whether the route both starts and ends at the depot
    pub fn is_closed(&self) -> bool {
        self.stops.len() >= 2
            && self.stops.first() == Some(&DEPOT)
            && self.stops.last() == Some(&DEPOT)
    }

    /// Customer ids visited by this route, in visit order
    pub fn customers(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.stops.iter().copied().filter(|&n| n != DEPOT)
    }
}
