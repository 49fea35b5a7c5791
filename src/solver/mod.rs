pub mod cvrp;
pub mod microlp;
pub mod model;
pub mod planner;
pub mod reconstruct;

use std::fmt;

use crate::solver::model::MipModel;

/// Oracle configuration: time budget and acceptable optimality gap
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Maximum solve time in seconds
    pub time_limit_secs: f64,

    /// Relative optimality gap at which an incumbent is accepted
    pub mip_gap: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: 600.0,
            mip_gap: 0.03,
        }
    }
}

/// Outcome classification reported by the oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Proven optimal solution
    Optimal,

    /// Time limit reached with an incumbent within some gap
    Feasible,

    /// Time limit reached without any incumbent. Distinct from
    /// `Infeasible`: the instance may still have solutions.
    TimeLimitNoSolution,

    /// The model is mathematically infeasible
    Infeasible,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SolveStatus::Optimal => "optimal",
            SolveStatus::Feasible => "feasible (gap)",
            SolveStatus::TimeLimitNoSolution => "time limit, no solution",
            SolveStatus::Infeasible => "infeasible",
        };
        write!(f, "{}", text)
    }
}

/// Result of a single oracle invocation. The assignment holds one
/// value per model variable, in variable-id order, and is present
/// whenever an incumbent exists.
#[derive(Debug, Clone)]
pub struct MipSolution {
    pub status: SolveStatus,
    pub assignment: Option<Vec<f64>>,
    pub objective: Option<f64>,
    pub gap: Option<f64>,
}

impl MipSolution {
    /// A solution record without any incumbent
    pub fn without_incumbent(status: SolveStatus) -> Self {
        Self {
            status,
            assignment: None,
            objective: None,
            gap: None,
        }
    }

    /// Whether the oracle produced variable values to decode
    pub fn has_incumbent(&self) -> bool {
        self.assignment.is_some()
    }
}

/// The external mixed-integer solver, treated as an opaque service:
/// model in, status plus assignment out. Implementations wrap a real
/// solver; tests inject deterministic stubs.
pub trait MipOracle {
    fn solve(&self, model: &MipModel, config: &SolverConfig) -> anyhow::Result<MipSolution>;
}
