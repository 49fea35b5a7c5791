use std::path::Path;

use anyhow::{anyhow, Context, Result};

use route_balancer::solver::microlp::MicrolpOracle;
use route_balancer::utils::generator::demo_nodes;
use route_balancer::utils::instance_io::load_nodes;
use route_balancer::utils::plot::{render_combined, render_per_vehicle};
use route_balancer::utils::report::{print_report, PlanSummary};
use route_balancer::{Fleet, Instance, PlanOutcome, RoutePlanner, SolverConfig};

// Fleet and oracle parameters of the planning run
const VEHICLES: usize = 4;
const CAPACITY: f64 = 2000.0;
const DEMO_CUSTOMERS: usize = 8;
const DEMO_SEED: u64 = 4624266;

fn main() -> Result<()> {
    let nodes = match std::env::args().nth(1) {
        Some(path) => load_nodes(&path).with_context(|| format!("loading instance {}", path))?,
        None => {
            println!("No instance file given, planning the built-in demo instance");
            demo_nodes(DEMO_CUSTOMERS, DEMO_SEED)
        }
    };

    let instance =
        Instance::new(nodes, Fleet::new(VEHICLES, CAPACITY)).map_err(|e| anyhow!(e))?;

    println!(
        "Total nodes (depot + customers): {}",
        instance.node_count()
    );
    println!("Customers: {}", instance.customer_count());
    println!(
        "Fleet: {} vehicles with capacity {}",
        instance.fleet().vehicles,
        instance.fleet().capacity
    );

    let config = SolverConfig::default();
    println!(
        "\nStarting optimization... (time limit: {:.0}s, acceptable gap: {:.0}%)",
        config.time_limit_secs,
        config.mip_gap * 100.0
    );

    let planner = RoutePlanner::new(instance.clone());
    let outcome = planner.plan(&MicrolpOracle::new(), &config)?;

    match &outcome {
        PlanOutcome::Infeasible => {
            println!("The model has no feasible solution.");
        }
        PlanOutcome::TimeLimitNoSolution => {
            println!("Time limit reached without finding a feasible solution.");
        }
        PlanOutcome::Planned {
            status,
            objective,
            gap,
            routes,
        } => {
            println!(
                "Solution found: {} (objective {:.2}, gap {:.2}%)",
                status,
                objective,
                gap * 100.0
            );

            let summary = PlanSummary::new(&instance, *status, *objective, *gap, routes);
            print_report(&summary);

            let out_dir = Path::new(".");
            summary
                .write_json(out_dir.join("balanced_routes_summary.json"))
                .context("writing plan summary")?;

            let combined = render_combined(out_dir, &instance, routes, *gap)
                .map_err(|e| anyhow!("rendering combined chart: {}", e))?;
            println!("\nCombined chart written to {}", combined.display());

            let per_vehicle = render_per_vehicle(out_dir, &instance, routes)
                .map_err(|e| anyhow!("rendering vehicle charts: {}", e))?;
            for path in per_vehicle {
                println!("Vehicle chart written to {}", path.display());
            }
        }
    }

    Ok(())
}
