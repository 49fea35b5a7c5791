// Route visualization with plotters: one combined chart plus one
// chart per vehicle

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::models::{Instance, Route, DEPOT};

// Vehicle color cycle for the route charts
const COLORS: [RGBColor; 4] = [
    RGBColor(128, 0, 128),  // purple
    RGBColor(0, 255, 255),  // cyan
    RGBColor(255, 215, 0),  // gold
    RGBColor(255, 20, 147), // deep pink
];

fn vehicle_color(vehicle: usize) -> RGBColor {
    COLORS[vehicle % COLORS.len()]
}

/// Chart bounds from the node coordinates, padded like the original
/// figures
fn chart_bounds(instance: &Instance) -> (f64, f64, f64, f64) {
    let xs: Vec<f64> = instance.nodes().iter().map(|n| n.location.x).collect();
    let ys: Vec<f64> = instance.nodes().iter().map(|n| n.location.y).collect();

    let min_x = xs.iter().cloned().fold(f64::INFINITY, f64::min) - 10.0;
    let max_x = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max) + 10.0;
    let min_y = ys.iter().cloned().fold(f64::INFINITY, f64::min) - 10.0;
    let max_y = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max) + 10.0;

    (min_x, max_x, min_y, max_y)
}

fn draw_nodes<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    instance: &Instance,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    for node in instance.nodes() {
        let point = (node.location.x, node.location.y);
        if node.id == DEPOT {
            chart.draw_series(std::iter::once(Circle::new(
                point,
                8,
                ShapeStyle::from(&RED).filled(),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                "Depot".to_string(),
                (point.0 + 1.0, point.1 + 1.0),
                ("sans-serif", 14).into_font(),
            )))?;
        } else {
            chart.draw_series(std::iter::once(Circle::new(
                point,
                5,
                ShapeStyle::from(&BLUE).filled(),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                node.id.to_string(),
                (point.0 + 1.0, point.1 + 1.0),
                ("sans-serif", 12).into_font(),
            )))?;
        }
    }
    Ok(())
}

fn route_points(instance: &Instance, route: &Route) -> Vec<(f64, f64)> {
    route
        .stops
        .iter()
        .map(|&id| {
            let location = instance.nodes()[id].location;
            (location.x, location.y)
        })
        .collect()
}

/// Renders all routes overlaid in one figure, color-coded per
/// vehicle. Returns the written file path.
pub fn render_combined(
    out_dir: &Path,
    instance: &Instance,
    routes: &[Route],
    gap: f64,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = out_dir.join("balanced_routes_all_vehicles.png");
    let (min_x, max_x, min_y, max_y) = chart_bounds(instance);

    // Backend and chart borrow `path`; scope them so the borrow ends
    // before the path is returned
    {
        let root = BitMapBackend::new(&path, (1200, 1200)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Distance-Balanced Routes (gap: {:.2}%)", gap * 100.0),
                ("sans-serif", 24).into_font(),
            )
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(30)
            .build_cartesian_2d(min_x..max_x, min_y..max_y)?;

        chart.configure_mesh().draw()?;

        for route in routes {
            let color = vehicle_color(route.vehicle);
            chart
                .draw_series(LineSeries::new(
                    route_points(instance, route),
                    color.mix(0.8).stroke_width(2),
                ))?
                .label(format!(
                    "Vehicle {} ({:.1} units, {} customers)",
                    route.vehicle + 1,
                    route.distance,
                    route.customer_count()
                ))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.mix(0.8).stroke_width(2))
                });
        }

        draw_nodes(&mut chart, instance)?;

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;

        root.present()?;
    }

    Ok(path)
}

/// Renders one figure per retained route. Returns the written file
/// paths.
pub fn render_per_vehicle(
    out_dir: &Path,
    instance: &Instance,
    routes: &[Route],
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let (min_x, max_x, min_y, max_y) = chart_bounds(instance);
    let mut paths = Vec::with_capacity(routes.len());

    for route in routes {
        let path = out_dir.join(format!("balanced_route_vehicle_{}.png", route.vehicle + 1));
        // Same scoping as `render_combined`: drop the backend before
        // the path moves into the result
        {
            let root = BitMapBackend::new(&path, (1000, 1000)).into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(
                    format!(
                        "Vehicle {}: {} customers, {:.2} units",
                        route.vehicle + 1,
                        route.customer_count(),
                        route.distance
                    ),
                    ("sans-serif", 22).into_font(),
                )
                .margin(10)
                .x_label_area_size(30)
                .y_label_area_size(30)
                .build_cartesian_2d(min_x..max_x, min_y..max_y)?;

            chart.configure_mesh().draw()?;

            let color = vehicle_color(route.vehicle);
            chart.draw_series(LineSeries::new(
                route_points(instance, route),
                color.mix(0.8).stroke_width(3),
            ))?;

            draw_nodes(&mut chart, instance)?;

            root.present()?;
        }
        paths.push(path);
    }

    Ok(paths)
}
