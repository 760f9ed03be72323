#![cfg(test)]
use skyhaul_common::error::{AllocationError, ManifestError};
use skyhaul_common::models::{Drone, Location};
use skyhaul_core::allocator::{self, Assignment};
use skyhaul_core::parser::{self, Manifest};
use skyhaul_core::report::{self, ReportSink, WriterSink};

use crate::planning::fixtures;

fn plan(text: &str) -> (Vec<Drone>, Vec<Location>, Result<Assignment, AllocationError>) {
    let Manifest {
        mut drones,
        locations,
    } = parser::parse_input(text).expect("fixture must parse");
    let result = allocator::assign(&mut drones, locations.clone());
    (drones, locations, result)
}

/// Every trip respects its drone's capacity and every input location
/// appears exactly once across the whole plan.
fn assert_plan_invariants(drones: &[Drone], locations: &[Location]) {
    let mut packed: Vec<&Location> = Vec::new();
    for drone in drones {
        for trip in drone.trips() {
            assert!(
                trip.weight() <= u64::from(drone.maximum_weight()),
                "{} overloaded: {} > {}",
                drone.name(),
                trip.weight(),
                drone.maximum_weight()
            );
            packed.extend(trip.locations());
        }
    }

    assert_eq!(packed.len(), locations.len(), "plan does not cover every location");
    for location in locations {
        let hits = packed.iter().filter(|p| p.name() == location.name()).count();
        assert_eq!(hits, 1, "{} packed {} times", location.name(), hits);
    }
}

#[test]
fn mixed_fleet_listing() {
    let (drones, locations, result) = plan(fixtures::MIXED_FLEET);

    assert_eq!(
        result,
        Ok(Assignment {
            rounds: 3,
            trips: 7,
            assigned: 16
        })
    );
    assert_plan_invariants(&drones, &locations);

    let expected = "\
DroneB
Trip #1
LocationA,LocationC
Trip #2
LocationD,LocationH,LocationL
Trip #3
LocationJ,LocationM,LocationN,LocationO,LocationP
DroneA
Trip #1
LocationB,LocationG
Trip #2
LocationF
DroneC
Trip #1
LocationE
Trip #2
LocationI,LocationK
";
    assert_eq!(report::render_to_string(&drones), expected);
}

#[test]
fn two_drone_regression() {
    let (drones, locations, result) = plan(fixtures::TWO_DRONES);

    assert!(result.is_ok());
    assert_plan_invariants(&drones, &locations);
    assert_eq!(
        report::render_to_string(&drones),
        "A\nTrip #1\nx,y\nB\nTrip #1\nz\n"
    );
}

#[test]
fn oversized_package_is_reported_not_looped() {
    let (drones, _, result) = plan(fixtures::OVERSIZED);

    let err = result.unwrap_err();
    assert_eq!(err.locations(), &[Location::new("Piano", 999)]);
    assert_eq!(err.to_string(), "no drone can carry location Piano [999]");
    assert!(drones[0].trips().is_empty());
}

#[test]
fn no_locations_prints_names_only() {
    let (drones, _, result) = plan(fixtures::NO_LOCATIONS);

    assert_eq!(result, Ok(Assignment::default()));
    assert!(drones.iter().all(|drone| drone.trips().is_empty()));
    assert_eq!(report::render_to_string(&drones), "DroneB\nDroneA\n");
}

#[test]
fn empty_fleet_with_locations_is_infeasible() {
    let (drones, locations, result) = plan("\nx, [1]\ny, [2]\n");

    assert!(drones.is_empty());
    assert_eq!(result.unwrap_err().locations(), locations.as_slice());
}

#[test]
fn repeated_runs_are_identical() {
    let first = report::render_to_string(&plan(fixtures::MIXED_FLEET).0);
    let second = report::render_to_string(&plan(fixtures::MIXED_FLEET).0);
    assert_eq!(first, second);
}

#[test]
fn console_and_file_sinks_agree() {
    struct Lines(Vec<String>);

    impl ReportSink for Lines {
        fn drone(&mut self, name: &str) -> std::io::Result<()> {
            self.0.push(name.to_string());
            Ok(())
        }

        fn trip(&mut self, index: usize, names: &[&str]) -> std::io::Result<()> {
            self.0.push(report::trip_header(index));
            self.0.push(report::trip_line(names));
            Ok(())
        }
    }

    let (drones, _, _) = plan(fixtures::MIXED_FLEET);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Output.txt");

    let mut lines = Lines(Vec::new());
    let mut file = WriterSink::create(&path).unwrap();
    let mut sinks: [&mut dyn ReportSink; 2] = [&mut lines, &mut file];
    report::render(&drones, &mut sinks).unwrap();
    drop(file);

    let written = std::fs::read_to_string(&path).unwrap();
    let expected: String = lines.0.iter().map(|line| format!("{line}\n")).collect();
    assert_eq!(written, expected);
}

#[test]
fn load_input_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, fixtures::TWO_DRONES).unwrap();

    let manifest = parser::load_input(&path).unwrap();
    assert_eq!(manifest.drones.len(), 2);
    assert_eq!(manifest.locations.len(), 3);

    let missing = dir.path().join("missing.txt");
    assert!(matches!(
        parser::load_input(&missing),
        Err(ManifestError::Io { .. })
    ));
}

#[test]
fn malformed_manifest_fails_whole_run() {
    let err = parser::parse_input("A, [10]\nx, [1]\ny, [oops]\n").unwrap_err();
    assert!(err.to_string().starts_with("line 3:"));
}
