// Route reconstruction from oracle arc selections

use crate::models::{NodeId, Route, VehicleId, DEPOT};
use crate::utils::distance::DistanceMatrix;

/// Result of walking one vehicle's arc set
#[derive(Debug, Clone)]
pub struct VehicleWalk {
    /// The reconstructed route, `None` when the vehicle is unused
    /// (sequence of length <= 2)
    pub route: Option<Route>,

    /// Arcs the walk never consumed. Non-empty means the oracle
    /// output contained a cycle not reachable from the depot; the
    /// walk does not repair it, callers flag it.
    pub unused_arcs: Vec<(NodeId, NodeId)>,
}

/// Walks a vehicle's selected arcs starting from the depot. Arcs are
/// taken in ascending (origin, destination) order so the tie-break is
/// reproducible regardless of how the caller enumerated them. Each
/// arc is consumed at most once. The walk only halts when no unused
/// outbound arc remains at the current node, so a depot-bound closing
/// arc is always taken inside the loop; an open walk means the arc
/// set itself had no return to the depot.
pub fn walk_vehicle(
    vehicle: VehicleId,
    arcs: &[(NodeId, NodeId)],
    matrix: &DistanceMatrix,
) -> VehicleWalk {
    let mut arcs: Vec<(NodeId, NodeId)> = arcs.to_vec();
    arcs.sort_unstable();

    let mut used = vec![false; arcs.len()];
    let mut stops: Vec<NodeId> = vec![DEPOT];
    let mut current = DEPOT;

    loop {
        let next = arcs
            .iter()
            .enumerate()
            .find(|&(idx, &(from, _))| !used[idx] && from == current);

        match next {
            Some((idx, &(_, to))) => {
                used[idx] = true;
                stops.push(to);
                current = to;
            }
            None => break,
        }
    }

    let unused_arcs: Vec<(NodeId, NodeId)> = arcs
        .iter()
        .zip(&used)
        .filter(|&(_, &was_used)| !was_used)
        .map(|(&arc, _)| arc)
        .collect();

    // Depot-to-depot or no movement counts as an unused vehicle
    let route = if stops.len() > 2 {
        let distance = matrix.path_distance(&stops);
        Some(Route::new(vehicle, stops, distance))
    } else {
        None
    };

    VehicleWalk { route, unused_arcs }
}

/// Reconstructs all retained routes. Returns the routes plus, per
/// vehicle, any arcs left over after the walk (residual sub-tours in
/// the oracle output).
pub fn reconstruct_routes(
    arcs_per_vehicle: &[Vec<(NodeId, NodeId)>],
    matrix: &DistanceMatrix,
) -> (Vec<Route>, Vec<(VehicleId, Vec<(NodeId, NodeId)>)>) {
    let mut routes = Vec::new();
    let mut leftovers = Vec::new();

    for (vehicle, arcs) in arcs_per_vehicle.iter().enumerate() {
        let walk = walk_vehicle(vehicle, arcs, matrix);
        if let Some(route) = walk.route {
            routes.push(route);
        }
        if !walk.unused_arcs.is_empty() {
            leftovers.push((vehicle, walk.unused_arcs));
        }
    }

    (routes, leftovers)
}
