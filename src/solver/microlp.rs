// Oracle adapter over good_lp with the pure-Rust microlp backend

use anyhow::anyhow;
use good_lp::{
    constraint, default_solver, variable, variables, Expression, ResolutionError, Solution,
    SolverModel, Variable,
};

use crate::solver::model::{Cmp, LinExpr, MipModel, VarKind};
use crate::solver::{MipOracle, MipSolution, SolveStatus, SolverConfig};

/// Mixed-integer oracle backed by microlp. Branch-and-bound runs to
/// completion, so the outcome is always a proven optimum or proven
/// infeasibility; the configured time limit and gap are not enforced
/// by this backend and the time-limit statuses are never returned
/// here. Oracles wrapping solvers with a real time budget map those
/// outcomes onto `Feasible` / `TimeLimitNoSolution`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MicrolpOracle;

impl MicrolpOracle {
    pub fn new() -> Self {
        Self
    }
}

impl MipOracle for MicrolpOracle {
    fn solve(&self, model: &MipModel, _config: &SolverConfig) -> anyhow::Result<MipSolution> {
        let mut problem_vars = variables!();

        let vars: Vec<Variable> = model
            .vars()
            .iter()
            .map(|def| match def.kind {
                VarKind::Binary => problem_vars.add(variable().binary()),
                VarKind::Continuous { lb, ub } => {
                    let mut builder = variable();
                    if lb.is_finite() {
                        builder = builder.min(lb);
                    }
                    if ub.is_finite() {
                        builder = builder.max(ub);
                    }
                    problem_vars.add(builder)
                }
            })
            .collect();

        let to_expression = |lin: &LinExpr| -> Expression {
            let mut expression = Expression::from(0.0);
            for &(var, coefficient) in &lin.terms {
                expression += coefficient * vars[var.0];
            }
            expression
        };

        let objective = to_expression(model.objective());
        let mut problem = problem_vars
            .minimise(objective.clone())
            .using(default_solver);

        for c in model.constraints() {
            let lhs = to_expression(&c.lhs);
            let rhs = c.rhs;
            let constraint = match c.cmp {
                Cmp::Le => constraint!(lhs <= rhs),
                Cmp::Ge => constraint!(lhs >= rhs),
                Cmp::Eq => constraint!(lhs == rhs),
            };
            problem = problem.with(constraint);
        }

        match problem.solve() {
            Ok(solution) => {
                let assignment: Vec<f64> = vars.iter().map(|&v| solution.value(v)).collect();
                let objective_value = model.objective().eval(&assignment);
                Ok(MipSolution {
                    status: SolveStatus::Optimal,
                    assignment: Some(assignment),
                    objective: Some(objective_value),
                    gap: Some(0.0),
                })
            }
            Err(ResolutionError::Infeasible) => {
                Ok(MipSolution::without_incumbent(SolveStatus::Infeasible))
            }
            Err(other) => Err(anyhow!("MIP oracle failed: {}", other)),
        }
    }
}
