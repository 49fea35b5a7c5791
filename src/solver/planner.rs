// Planner orchestration: build model, invoke oracle, reconstruct

use anyhow::{anyhow, Result};

use crate::models::{Instance, Route};
use crate::solver::cvrp::CvrpFormulation;
use crate::solver::reconstruct::reconstruct_routes;
use crate::solver::{MipOracle, SolveStatus, SolverConfig};
use crate::utils::distance::DistanceMatrix;

/// Outcome of a planning run. Both no-plan variants mean no routes
/// and no plots, but callers are told which occurred.
#[derive(Debug, Clone)]
pub enum PlanOutcome {
    /// The oracle produced an incumbent and routes were reconstructed
    Planned {
        status: SolveStatus,
        objective: f64,
        gap: f64,
        routes: Vec<Route>,
    },

    /// The model is mathematically infeasible
    Infeasible,

    /// The time budget ran out before any incumbent was found
    TimeLimitNoSolution,
}

impl PlanOutcome {
    /// Routes of a successful plan
    pub fn routes(&self) -> Option<&[Route]> {
        match self {
            PlanOutcome::Planned { routes, .. } => Some(routes),
            _ => None,
        }
    }
}

/// Translates an instance into the balanced CVRP model, delegates
/// solving to an oracle and turns the assignment back into routes.
pub struct RoutePlanner {
    instance: Instance,
    matrix: DistanceMatrix,
}

impl RoutePlanner {
    pub fn new(instance: Instance) -> Self {
        let matrix = DistanceMatrix::from_nodes(instance.nodes());
        Self { instance, matrix }
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Runs one planning pass against the given oracle.
    pub fn plan(&self, oracle: &dyn MipOracle, config: &SolverConfig) -> Result<PlanOutcome> {
        let formulation = CvrpFormulation::build(&self.instance, &self.matrix);
        let solution = oracle.solve(formulation.model(), config)?;

        match solution.status {
            SolveStatus::Infeasible => Ok(PlanOutcome::Infeasible),
            SolveStatus::TimeLimitNoSolution => Ok(PlanOutcome::TimeLimitNoSolution),
            status @ (SolveStatus::Optimal | SolveStatus::Feasible) => {
                let assignment = solution
                    .assignment
                    .ok_or_else(|| anyhow!("oracle reported {} without an assignment", status))?;
                if assignment.len() != formulation.model().var_count() {
                    return Err(anyhow!(
                        "oracle assignment has {} values, model has {} variables",
                        assignment.len(),
                        formulation.model().var_count()
                    ));
                }

                let arcs = formulation.selected_arcs(&assignment);
                let (routes, leftovers) = reconstruct_routes(&arcs, &self.matrix);

                // A leftover arc set is a depot-free cycle in the
                // oracle output. The model constraints should exclude
                // this; it is flagged, not repaired.
                for (vehicle, arcs) in &leftovers {
                    eprintln!(
                        "warning: vehicle {} has {} arcs outside its depot walk: {:?}",
                        vehicle + 1,
                        arcs.len(),
                        arcs
                    );
                }

                let objective = solution
                    .objective
                    .unwrap_or_else(|| formulation.objective_value(&assignment));
                let gap = solution.gap.unwrap_or(0.0);

                Ok(PlanOutcome::Planned {
                    status,
                    objective,
                    gap,
                    routes,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fleet, Location, Node};
    use crate::solver::model::MipModel;
    use crate::solver::MipSolution;

    /// Oracle stub returning a canned solution
    struct FixedOracle(MipSolution);

    impl MipOracle for FixedOracle {
        fn solve(&self, _model: &MipModel, _config: &SolverConfig) -> Result<MipSolution> {
            Ok(self.0.clone())
        }
    }

    fn two_customer_instance() -> Instance {
        let nodes = vec![
            Node::new(0, Location::new(0.0, 0.0), 0.0),
            Node::new(1, Location::new(10.0, 0.0), 40.0),
            Node::new(2, Location::new(0.0, 10.0), 60.0),
        ];
        Instance::new(nodes, Fleet::new(2, 100.0)).unwrap()
    }

    #[test]
    fn test_infeasible_status_produces_no_routes() {
        let planner = RoutePlanner::new(two_customer_instance());
        let oracle = FixedOracle(MipSolution::without_incumbent(SolveStatus::Infeasible));
        let outcome = planner.plan(&oracle, &SolverConfig::default()).unwrap();

        assert!(matches!(outcome, PlanOutcome::Infeasible));
        assert!(outcome.routes().is_none());
    }

    #[test]
    fn test_time_limit_without_incumbent_is_distinct() {
        let planner = RoutePlanner::new(two_customer_instance());
        let oracle = FixedOracle(MipSolution::without_incumbent(
            SolveStatus::TimeLimitNoSolution,
        ));
        let outcome = planner.plan(&oracle, &SolverConfig::default()).unwrap();

        assert!(matches!(outcome, PlanOutcome::TimeLimitNoSolution));
    }

    #[test]
    fn test_incumbent_missing_assignment_is_an_error() {
        let planner = RoutePlanner::new(two_customer_instance());
        let oracle = FixedOracle(MipSolution {
            status: SolveStatus::Feasible,
            assignment: None,
            objective: Some(12.0),
            gap: Some(0.02),
        });

        assert!(planner.plan(&oracle, &SolverConfig::default()).is_err());
    }

    #[test]
    fn test_feasible_assignment_is_decoded_into_routes() {
        let instance = two_customer_instance();
        let planner = RoutePlanner::new(instance.clone());

        // The planner rebuilds the same deterministic formulation, so
        // arc variable ids derived here match the ones it decodes.
        let matrix = DistanceMatrix::from_nodes(instance.nodes());
        let formulation = CvrpFormulation::build(&instance, &matrix);
        let mut assignment = vec![0.0; formulation.model().var_count()];
        for (i, j, k) in [(0, 1, 0), (1, 0, 0), (0, 2, 1), (2, 0, 1)] {
            assignment[formulation.arc_var(i, j, k).unwrap().0] = 1.0;
        }

        let oracle = FixedOracle(MipSolution {
            status: SolveStatus::Feasible,
            assignment: Some(assignment),
            objective: Some(20.0),
            gap: Some(0.015),
        });

        let outcome = planner.plan(&oracle, &SolverConfig::default()).unwrap();
        match outcome {
            PlanOutcome::Planned {
                status,
                objective,
                gap,
                routes,
            } => {
                assert_eq!(status, SolveStatus::Feasible);
                assert_eq!(objective, 20.0);
                assert_eq!(gap, 0.015);
                assert_eq!(routes.len(), 2);
                assert_eq!(routes[0].stops, vec![0, 1, 0]);
                assert_eq!(routes[1].stops, vec![0, 2, 0]);
                assert_eq!(routes[0].distance, 20.0);
            }
            other => panic!("expected a plan, got {:?}", other),
        }
    }
}
