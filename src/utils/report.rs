// Aggregate metrics and console reporting for reconstructed plans

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::models::{Instance, NodeId, Route};
use crate::solver::SolveStatus;

/// One reconstructed route in the summary
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub vehicle: usize,
    pub stops: Vec<NodeId>,
    pub distance: f64,
    pub customers: usize,
}

/// Distance-balance statistics across routes
#[derive(Debug, Clone, Serialize)]
pub struct BalanceStats {
    pub min_distance: f64,
    pub max_distance: f64,
    pub spread: f64,
    pub std_dev: f64,
}

/// Min/max/spread/population standard deviation of route distances
pub fn balance_stats(distances: &[f64]) -> Option<BalanceStats> {
    if distances.is_empty() {
        return None;
    }

    let min = distances.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = distances.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mean = distances.iter().sum::<f64>() / distances.len() as f64;
    let variance =
        distances.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / distances.len() as f64;

    Some(BalanceStats {
        min_distance: min,
        max_distance: max,
        spread: max - min,
        std_dev: variance.sqrt(),
    })
}

/// Machine-readable summary of a completed plan
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub status: String,
    pub objective: f64,
    pub gap: f64,
    pub expected_customers: usize,
    pub served_customers: usize,
    pub served_ids: Vec<NodeId>,
    pub unserved_ids: Vec<NodeId>,
    pub total_distance: f64,
    pub balance: Option<BalanceStats>,
    pub routes: Vec<RouteSummary>,
}

impl PlanSummary {
    pub fn new(
        instance: &Instance,
        status: SolveStatus,
        objective: f64,
        gap: f64,
        routes: &[Route],
    ) -> Self {
        let route_summaries: Vec<RouteSummary> = routes
            .iter()
            .map(|route| RouteSummary {
                vehicle: route.vehicle,
                stops: route.stops.clone(),
                distance: route.distance,
                customers: route.customer_count(),
            })
            .collect();

        let mut served_ids: Vec<NodeId> = routes.iter().flat_map(|r| r.customers()).collect();
        served_ids.sort_unstable();
        served_ids.dedup();

        let unserved_ids: Vec<NodeId> = (1..instance.node_count())
            .filter(|id| !served_ids.contains(id))
            .collect();

        let distances: Vec<f64> = routes.iter().map(|r| r.distance).collect();

        Self {
            status: status.to_string(),
            objective,
            gap,
            expected_customers: instance.customer_count(),
            served_customers: routes.iter().map(|r| r.customer_count()).sum(),
            served_ids,
            unserved_ids,
            total_distance: distances.iter().sum(),
            balance: balance_stats(&distances),
            routes: route_summaries,
        }
    }

    /// Writes the summary as pretty JSON next to the plot files
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        fs::write(path, json)
    }
}

/// Prints the per-vehicle routes and the balance analysis block
pub fn print_report(summary: &PlanSummary) {
    println!("\nVehicle routes (balanced by distance):");
    for route in &summary.routes {
        let path: Vec<String> = route.stops.iter().map(|n| n.to_string()).collect();
        println!("Vehicle {}: {}", route.vehicle + 1, path.join(" -> "));
        println!("  Distance: {:.2} units", route.distance);
        println!("  Customers served: {}", route.customers);
    }

    println!(
        "\nTotal customers served: {} (expected: {})",
        summary.served_customers, summary.expected_customers
    );
    println!("Maximum route distance: {:.2} units", summary.objective);
    println!("Total distance travelled: {:.2} units", summary.total_distance);
    println!("Customers served: {:?}", summary.served_ids);
    if !summary.unserved_ids.is_empty() {
        println!("Unserved customers: {:?}", summary.unserved_ids);
    }

    if let Some(balance) = &summary.balance {
        println!("\nDistance balance analysis:");
        println!("  Min distance: {:.2}", balance.min_distance);
        println!("  Max distance: {:.2}", balance.max_distance);
        println!("  Max-min spread: {:.2}", balance.spread);
        println!("  Std deviation: {:.2}", balance.std_dev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fleet, Location, Node};

    fn instance() -> Instance {
        let nodes = vec![
            Node::new(0, Location::new(0.0, 0.0), 0.0),
            Node::new(1, Location::new(1.0, 0.0), 10.0),
            Node::new(2, Location::new(2.0, 0.0), 10.0),
            Node::new(3, Location::new(3.0, 0.0), 10.0),
        ];
        Instance::new(nodes, Fleet::new(2, 100.0)).unwrap()
    }

    #[test]
    fn test_balance_stats() {
        let stats = balance_stats(&[2.0, 4.0, 6.0]).unwrap();
        assert_eq!(stats.min_distance, 2.0);
        assert_eq!(stats.max_distance, 6.0);
        assert_eq!(stats.spread, 4.0);
        // Population std dev of [2, 4, 6]
        assert!((stats.std_dev - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_balance_stats_empty() {
        assert!(balance_stats(&[]).is_none());
    }

    #[test]
    fn test_summary_tracks_served_and_unserved() {
        let routes = vec![
            Route::new(0, vec![0, 1, 0], 2.0),
            Route::new(1, vec![0, 2, 0], 4.0),
        ];
        let summary = PlanSummary::new(&instance(), SolveStatus::Optimal, 4.0, 0.0, &routes);

        assert_eq!(summary.expected_customers, 3);
        assert_eq!(summary.served_customers, 2);
        assert_eq!(summary.served_ids, vec![1, 2]);
        assert_eq!(summary.unserved_ids, vec![3]);
        assert_eq!(summary.total_distance, 6.0);
        assert_eq!(summary.balance.as_ref().unwrap().spread, 2.0);
    }

    #[test]
    fn test_summary_with_full_coverage() {
        let routes = vec![
            Route::new(0, vec![0, 1, 3, 0], 6.0),
            Route::new(1, vec![0, 2, 0], 4.0),
        ];
        let summary = PlanSummary::new(&instance(), SolveStatus::Feasible, 6.0, 0.02, &routes);

        assert_eq!(summary.served_customers, summary.expected_customers);
        assert!(summary.unserved_ids.is_empty());
        assert_eq!(summary.status, "feasible (gap)");
    }
}
