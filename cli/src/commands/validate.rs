use colored::*;
use skyhaul_common::{config::Config, error::AllocationError, models::Location, success};
use skyhaul_core::{allocator, parser};

use crate::terminal::print;

/// Parses the manifest and checks every package against the fleet.
///
/// Fails with the same error `dispatch` would raise for oversized packages.
pub fn validate(cfg: &Config) -> anyhow::Result<()> {
    let manifest = parser::load_input(&cfg.input)?;

    let largest: u32 = manifest
        .drones
        .iter()
        .map(|drone| drone.maximum_weight())
        .max()
        .unwrap_or(0);
    let total_weight: u64 = manifest
        .locations
        .iter()
        .map(|location| u64::from(location.package_weight()))
        .sum();

    print::header("Manifest", cfg.quiet);
    print::aligned_lines(&[
        ("Drones", manifest.drones.len().to_string().normal()),
        ("Locations", manifest.locations.len().to_string().normal()),
        ("Largest drone", largest.to_string().normal()),
        ("Total weight", total_weight.to_string().normal()),
    ]);

    let (_, infeasible): (Vec<Location>, Vec<Location>) =
        allocator::split_infeasible(&manifest.drones, manifest.locations);

    if !infeasible.is_empty() {
        return Err(AllocationError::infeasible(infeasible).into());
    }

    success!("{} is ready for dispatch", cfg.input.display());
    Ok(())
}
