use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use skyhaul_common::{config::Config, models::Drone, success, warn};
use skyhaul_core::parser::{self, Manifest};
use skyhaul_core::report::{self, ReportSink, WriterSink};
use skyhaul_core::allocator;

use crate::sprint;
use crate::terminal::{colors, print, report::ConsoleSink};

pub fn dispatch(cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    let Manifest {
        mut drones,
        locations,
    } = parser::load_input(&cfg.input)?;
    success!(
        "Loaded {} drones and {} locations from {}",
        drones.len(),
        locations.len(),
        cfg.input.display()
    );

    match allocator::assign(&mut drones, locations) {
        Ok(_) => {}
        Err(err) if cfg.skip_infeasible => {
            for location in err.locations() {
                warn!(
                    "No drone can carry {} [{}], leaving it out of the plan",
                    location.name(),
                    location.package_weight()
                );
            }
        }
        Err(err) => return Err(err.into()),
    }

    print::header("Trip Plan", cfg.quiet);
    write_report(&drones, cfg)?;
    print_summary(&drones, start_time.elapsed(), cfg);

    Ok(())
}

fn write_report(drones: &[Drone], cfg: &Config) -> anyhow::Result<()> {
    let mut console = ConsoleSink;

    let Some(path) = &cfg.output else {
        return Ok(report::render(drones, &mut [&mut console as &mut dyn ReportSink])?);
    };

    let mut file = WriterSink::create(path)
        .with_context(|| format!("failed to create output file '{}'", path.display()))?;
    let mut sinks: [&mut dyn ReportSink; 2] = [&mut console, &mut file];
    report::render(drones, &mut sinks)
        .with_context(|| format!("failed to write output file '{}'", path.display()))?;

    success!("Trip listing written to {}", path.display());
    Ok(())
}

fn print_summary(drones: &[Drone], total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let trips: usize = drones.iter().map(Drone::trip_count).sum();
    let trips: ColoredString = format!("{trips} trips").bold().green();
    let fleet: ColoredString = format!("{} drones", drones.len()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Dispatch Complete: {trips} across {fleet} in {total_time}").color(colors::TEXT_DEFAULT);

    sprint!();
    print::fat_separator();
    print::centerln(&format!("{}", output));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};

    const FEASIBLE: &str = "A, [50], B, [30]\nx, [10]\ny, [20]\nz, [25]\n";
    const WITH_PIANO: &str = "Tiny, [20]\nbox, [15]\nPiano, [999]\nbag, [5]\n";

    fn config(dir: &Path, manifest: &str, output: Option<PathBuf>, skip_infeasible: bool) -> Config {
        let input = dir.join("input.txt");
        fs::write(&input, manifest).unwrap();

        Config {
            input,
            output,
            quiet: 1,
            skip_infeasible,
        }
    }

    #[test]
    fn test_dispatch_writes_listing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("Output.txt");
        let cfg = config(dir.path(), FEASIBLE, Some(output.clone()), false);

        dispatch(&cfg).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "A\nTrip #1\nx,y\nB\nTrip #1\nz\n"
        );
    }

    #[test]
    fn test_infeasible_aborts_before_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("Output.txt");
        let cfg = config(dir.path(), WITH_PIANO, Some(output.clone()), false);

        let err = dispatch(&cfg).unwrap_err();

        assert!(err.to_string().contains("Piano"));
        assert!(!output.exists());
    }

    #[test]
    fn test_skip_infeasible_still_reports() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("Output.txt");
        let cfg = config(dir.path(), WITH_PIANO, Some(output.clone()), true);

        dispatch(&cfg).unwrap();

        let listing = fs::read_to_string(&output).unwrap();
        assert_eq!(listing, "Tiny\nTrip #1\nbox,bag\n");
        assert!(!listing.contains("Piano"));
    }

    #[test]
    fn test_no_file_leaves_disk_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), FEASIBLE, None, false);

        dispatch(&cfg).unwrap();

        let entries: Vec<PathBuf> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(entries, vec![dir.path().join("input.txt")]);
    }

    #[test]
    fn test_malformed_manifest_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("Output.txt");
        let cfg = config(dir.path(), "A, [50]\nx, 10\n", Some(output.clone()), false);

        let err = dispatch(&cfg).unwrap_err();

        assert!(err.to_string().starts_with("line 2:"));
        assert!(!output.exists());
    }
}
