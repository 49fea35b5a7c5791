// Models module - exports all model types

mod instance;
mod location;
mod node;
mod route;

// Re-export model types
pub use self::instance::{Fleet, Instance};
pub use self::location::Location;
pub use self::node::Node;
pub use self::route::Route;

// Common type aliases for improved code readability
pub type NodeId = usize;
pub type VehicleId = usize;
pub type Demand = f64;
pub type Distance = f64;

/// Identifier of the depot node in every instance
pub const DEPOT: NodeId = 0;
