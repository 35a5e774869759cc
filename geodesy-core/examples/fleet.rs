use anyhow::{Context, Result};
use geodesy_core::{GeoError, InverseEngine, Position};
use indicatif::ProgressBar;

const WAYPOINTS: &[(&str, &str)] = &[
    ("san_francisco", "37.7749, -122.4194"),
    ("new_york", "40.7128, -74.0060"),
    ("london", "51.5074, -0.1278"),
    ("paris", r#"48°51'24"N, 2°21'3"E"#),
    ("sydney", "33.8688 S, 151.2093 E"),
    ("mcmurdo", "-77.8419, 166.6863"),
    ("north_pole", "90.0, 0.0"),
    ("diego_garcia", "-7.3195, 72.4229"),
];

/// Runs the full leg matrix for a small fleet of waypoints, counting the
/// legs the engine refuses as antipodal and reporting the longest one.
///
/// The waypoint list mixes plain decimal coordinates with sexagesimal and
/// hemisphere-letter forms on purpose, so the whole parsing surface gets
/// exercised too.
fn main() -> Result<()> {
    let engine = InverseEngine::new();

    let mut fleet = Vec::with_capacity(WAYPOINTS.len());
    for (name, coordinates) in WAYPOINTS {
        let position: Position = coordinates
            .parse()
            .with_context(|| format!("Failed to parse waypoint {name}"))?;
        fleet.push((*name, position));
    }

    let pb = ProgressBar::new((fleet.len() * fleet.len()) as u64);

    let mut computed = 0usize;
    let mut rejected = 0usize;
    let mut longest: Option<(f64, &str, &str)> = None;
    for &(from_name, from) in &fleet {
        for &(to_name, to) in &fleet {
            match engine.inverse(from, to) {
                Ok(solution) => {
                    computed += 1;
                    let further = longest
                        .is_none_or(|(distance, ..)| distance < solution.distance_meters);
                    if further {
                        longest = Some((solution.distance_meters, from_name, to_name));
                    }
                }
                Err(GeoError::AntipodalUnsupported) => rejected += 1,
                Err(error) => {
                    return Err(error)
                        .with_context(|| format!("Failed leg {from_name} -> {to_name}"));
                }
            }
            pb.inc(1);
        }
    }
    pb.finish_with_message("matrix complete");

    println!("{computed} legs solved, {rejected} rejected as antipodal");
    if let Some((distance, from, to)) = longest {
        println!("longest leg: {from} -> {to} at {:.1} km", distance / 1000.0);
    }

    let (_, north_pole) = fleet[6];
    let (_, london) = fleet[2];
    let southbound = engine
        .inverse(north_pole, london)
        .context("Failed to leave the pole")?;
    println!(
        "leaving the north pole for london: bearing {:.0}º over {:.1} km",
        southbound.initial_azimuth,
        southbound.distance_meters / 1000.0,
    );

    Ok(())
}
