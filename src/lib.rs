// Public modules
pub mod models;
pub mod organizer;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use models::{Fleet, Instance, Location, Node, Route};
pub use solver::planner::{PlanOutcome, RoutePlanner};
pub use solver::{MipOracle, MipSolution, SolveStatus, SolverConfig};
pub use utils::distance::DistanceMatrix;
