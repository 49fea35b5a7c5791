// Min-max CVRP formulation: arc selection, load propagation and
// distance balancing, handed to the oracle as a neutral MIP

use crate::models::{Instance, NodeId, VehicleId, DEPOT};
use crate::solver::model::{Cmp, LinExpr, MipModel, VarId};
use crate::utils::distance::DistanceMatrix;

/// The distance-balanced CVRP as a mixed-integer program, with the
/// variable bookkeeping needed to decode an oracle assignment back
/// into per-vehicle arc sets.
///
/// Model construction is deterministic: building the same instance
/// twice yields identical variable ids.
pub struct CvrpFormulation {
    model: MipModel,
    nodes: usize,
    vehicles: usize,
    arc_index: Vec<Option<VarId>>,
    max_dist: VarId,
}

impl CvrpFormulation {
    /// Builds the full model for an instance.
    pub fn build(instance: &Instance, matrix: &DistanceMatrix) -> Self {
        let n = instance.node_count();
        let k_count = instance.fleet().vehicles;
        let capacity = instance.fleet().capacity;

        let mut model = MipModel::new();

        // Arc selection: x[i][j][k] = vehicle k travels from i to j
        let mut arc_index: Vec<Option<VarId>> = vec![None; n * n * k_count];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                for k in 0..k_count {
                    let var = model.add_binary(format!("x_{}_{}_{}", i, j, k));
                    arc_index[(i * n + j) * k_count + k] = Some(var);
                }
            }
        }

        // Accumulated load per customer and vehicle, bounded by
        // [demand, capacity]
        let mut load_index: Vec<VarId> = Vec::with_capacity((n - 1) * k_count);
        for i in 1..n {
            for k in 0..k_count {
                let var = model.add_continuous(
                    format!("u_{}_{}", i, k),
                    instance.demand(i),
                    capacity,
                );
                load_index.push(var);
            }
        }
        let load = |i: NodeId, k: VehicleId| load_index[(i - 1) * k_count + k];

        // Per-vehicle route distance and the global maximum
        let route_dist: Vec<VarId> = (0..k_count)
            .map(|k| model.add_continuous(format!("route_dist_{}", k), 0.0, f64::INFINITY))
            .collect();
        let max_dist = model.add_continuous("max_dist".to_string(), 0.0, f64::INFINITY);

        let arc = |i: NodeId, j: NodeId, k: VehicleId| arc_index[(i * n + j) * k_count + k];

        // Objective: minimize the maximum per-vehicle route distance
        model.minimize(LinExpr::single(max_dist));

        // Each customer is entered by exactly one vehicle arc
        for j in 1..n {
            let mut lhs = LinExpr::new();
            for i in 0..n {
                if i == j {
                    continue;
                }
                for k in 0..k_count {
                    lhs.add(arc(i, j, k).unwrap(), 1.0);
                }
            }
            model.add_constraint(lhs, Cmp::Eq, 1.0);
        }

        // Flow conservation per vehicle and node: inbound == outbound
        for k in 0..k_count {
            for h in 0..n {
                let mut lhs = LinExpr::new();
                for i in 0..n {
                    if i != h {
                        lhs.add(arc(i, h, k).unwrap(), 1.0);
                    }
                }
                for j in 0..n {
                    if j != h {
                        lhs.add(arc(h, j, k).unwrap(), -1.0);
                    }
                }
                model.add_constraint(lhs, Cmp::Eq, 0.0);
            }
        }

        // At most one depot departure and one depot return per vehicle
        for k in 0..k_count {
            let mut depart = LinExpr::new();
            let mut ret = LinExpr::new();
            for j in 1..n {
                depart.add(arc(DEPOT, j, k).unwrap(), 1.0);
                ret.add(arc(j, DEPOT, k).unwrap(), 1.0);
            }
            model.add_constraint(depart, Cmp::Le, 1.0);
            model.add_constraint(ret, Cmp::Le, 1.0);
        }

        // Sub-tour elimination by load propagation (MTZ with big-M =
        // capacity): u[i,k] - u[j,k] + Q * x[i,j,k] <= Q - demand(j)
        for k in 0..k_count {
            for i in 1..n {
                for j in 1..n {
                    if i == j {
                        continue;
                    }
                    let lhs = LinExpr::new()
                        .with(load(i, k), 1.0)
                        .with(load(j, k), -1.0)
                        .with(arc(i, j, k).unwrap(), capacity);
                    model.add_constraint(lhs, Cmp::Le, capacity - instance.demand(j));
                }
            }
        }

        // route_dist[k] equals the selected-arc distance sum and is
        // dominated by max_dist
        for (k, &dist_var) in route_dist.iter().enumerate() {
            let mut lhs = LinExpr::single(dist_var);
            for i in 0..n {
                for j in 0..n {
                    if i != j {
                        lhs.add(arc(i, j, k).unwrap(), -matrix.get(i, j));
                    }
                }
            }
            model.add_constraint(lhs, Cmp::Eq, 0.0);

            let bound = LinExpr::single(dist_var).with(max_dist, -1.0);
            model.add_constraint(bound, Cmp::Le, 0.0);
        }

        // Full-fleet requirement: every vehicle departs the depot at
        // least once. Strict feasibility condition, not a preference:
        // it makes instances infeasible when K exceeds what the
        // customer count supports.
        for k in 0..k_count {
            let mut depart = LinExpr::new();
            for j in 1..n {
                depart.add(arc(DEPOT, j, k).unwrap(), 1.0);
            }
            model.add_constraint(depart, Cmp::Ge, 1.0);
        }

        Self {
            model,
            nodes: n,
            vehicles: k_count,
            arc_index,
            max_dist,
        }
    }

    /// The underlying MIP handed to the oracle
    pub fn model(&self) -> &MipModel {
        &self.model
    }

    /// Variable id of a single arc decision, `None` on the diagonal
    pub fn arc_var(&self, from: NodeId, to: NodeId, vehicle: VehicleId) -> Option<VarId> {
        self.arc_index[(from * self.nodes + to) * self.vehicles + vehicle]
    }

    /// Decodes an assignment into per-vehicle arc lists, each sorted
    /// ascending by (origin, destination). The ordering fixes the
    /// reconstruction tie-break.
    pub fn selected_arcs(&self, assignment: &[f64]) -> Vec<Vec<(NodeId, NodeId)>> {
        let mut per_vehicle: Vec<Vec<(NodeId, NodeId)>> = vec![Vec::new(); self.vehicles];
        for i in 0..self.nodes {
            for j in 0..self.nodes {
                if i == j {
                    continue;
                }
                for (k, arcs) in per_vehicle.iter_mut().enumerate() {
                    let var = self.arc_var(i, j, k).unwrap();
                    if assignment[var.0] > 0.5 {
                        arcs.push((i, j));
                    }
                }
            }
        }
        per_vehicle
    }

    /// Value of the max-route-distance objective in an assignment
    pub fn objective_value(&self, assignment: &[f64]) -> f64 {
        assignment[self.max_dist.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fleet, Location, Node};

    fn small_instance() -> Instance {
        let nodes = vec![
            Node::new(0, Location::new(0.0, 0.0), 0.0),
            Node::new(1, Location::new(10.0, 0.0), 50.0),
            Node::new(2, Location::new(0.0, 10.0), 70.0),
        ];
        Instance::new(nodes, Fleet::new(2, 100.0)).unwrap()
    }

    #[test]
    fn test_variable_and_constraint_counts() {
        let instance = small_instance();
        let matrix = DistanceMatrix::from_nodes(instance.nodes());
        let formulation = CvrpFormulation::build(&instance, &matrix);
        let model = formulation.model();

        // 12 arcs + 4 loads + 2 route distances + 1 maximum
        assert_eq!(model.var_count(), 19);

        // 2 visit + 6 flow + 4 depot caps + 4 MTZ + 4 distance
        // linking + 2 full-fleet
        assert_eq!(model.constraint_count(), 22);
    }

    #[test]
    fn test_build_is_deterministic() {
        let instance = small_instance();
        let matrix = DistanceMatrix::from_nodes(instance.nodes());
        let a = CvrpFormulation::build(&instance, &matrix);
        let b = CvrpFormulation::build(&instance, &matrix);

        assert_eq!(a.arc_var(0, 1, 0), b.arc_var(0, 1, 0));
        assert_eq!(a.arc_var(2, 1, 1), b.arc_var(2, 1, 1));
        assert_eq!(a.model().var_count(), b.model().var_count());
    }

    #[test]
    fn test_selected_arcs_are_sorted_per_vehicle() {
        let instance = small_instance();
        let matrix = DistanceMatrix::from_nodes(instance.nodes());
        let formulation = CvrpFormulation::build(&instance, &matrix);

        let mut assignment = vec![0.0; formulation.model().var_count()];
        // Vehicle 0 drives 0 -> 2 -> 0, vehicle 1 drives 0 -> 1 -> 0
        for (i, j, k) in [(0, 2, 0), (2, 0, 0), (0, 1, 1), (1, 0, 1)] {
            assignment[formulation.arc_var(i, j, k).unwrap().0] = 1.0;
        }

        let arcs = formulation.selected_arcs(&assignment);
        assert_eq!(arcs[0], vec![(0, 2), (2, 0)]);
        assert_eq!(arcs[1], vec![(0, 1), (1, 0)]);
    }
}
