//! Greedy trip allocation.
//!
//! The fleet is sorted once by capacity, largest first, keeping input order
//! between drones of equal capacity. Allocation then runs in rounds: every
//! drone, in that order, gets one chance per round to pack a single trip
//! from whatever is still pending. Packing is first-fit in pool order: a
//! location joins the trip if it still fits the remaining capacity.
//!
//! Locations heavier than the largest drone are set aside before the first
//! round and returned as [`AllocationError::Infeasible`] once everything else
//! has been planned. With those gone the largest drone always has something
//! to pack, so each round shrinks the pool and the loop terminates.

use std::cmp::Reverse;
use std::mem;

use skyhaul_common::error::AllocationError;
use skyhaul_common::models::{Drone, Location, Trip};
use tracing::{debug, trace};

/// Counters describing a finished allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Assignment {
    pub rounds: usize,
    pub trips: usize,
    pub assigned: usize,
}

/// Assigns every location in `locations` to a trip of one of `drones`.
///
/// On return `drones` is in reporting order (descending capacity, stable).
/// When some locations cannot be carried at all, the rest are still assigned
/// and the leftovers come back in the error.
pub fn assign(
    drones: &mut [Drone],
    locations: Vec<Location>,
) -> Result<Assignment, AllocationError> {
    drones.sort_by_key(|drone| Reverse(drone.maximum_weight()));

    let (mut pending, infeasible) = split_infeasible(drones, locations);
    for location in &infeasible {
        debug!(
            "Setting aside {} [{}]: heavier than every drone",
            location.name(),
            location.package_weight()
        );
    }

    let mut assignment = Assignment::default();
    while !pending.is_empty() {
        assignment.rounds += 1;
        let before = pending.len();

        for drone in drones.iter_mut() {
            let Some(trip) = pack_trip(drone, &mut pending) else {
                trace!("Round {}: {} has nothing it can carry", assignment.rounds, drone.name());
                continue;
            };

            trace!(
                "Round {}: {} takes {} location(s), {} of {}",
                assignment.rounds,
                drone.name(),
                trip.len(),
                trip.weight(),
                drone.maximum_weight()
            );
            assignment.trips += 1;
            assignment.assigned += trip.len();
            drone.push_trip(trip);
        }

        debug_assert!(pending.len() < before, "allocation round made no progress");
    }

    debug!(
        "Planned {} trips over {} rounds for {} locations",
        assignment.trips, assignment.rounds, assignment.assigned
    );

    if infeasible.is_empty() {
        Ok(assignment)
    } else {
        Err(AllocationError::infeasible(infeasible))
    }
}

/// Partitions `locations` into (carriable, too heavy for the whole fleet).
///
/// An empty fleet makes every location infeasible.
pub fn split_infeasible(
    drones: &[Drone],
    locations: Vec<Location>,
) -> (Vec<Location>, Vec<Location>) {
    let largest = drones.iter().map(Drone::maximum_weight).max();

    locations
        .into_iter()
        .partition(|location| largest.is_some_and(|cap| location.package_weight() <= cap))
}

/// Packs one first-fit trip for `drone`, removing the packed locations from `pending`.
///
/// Returns `None`, leaving `pending` untouched, when the drone cannot carry
/// any pending location.
fn pack_trip(drone: &Drone, pending: &mut Vec<Location>) -> Option<Trip> {
    if !pending.iter().any(|location| drone.can_carry(location)) {
        return None;
    }

    let mut remaining = drone.maximum_weight();
    let mut packed = Vec::new();

    for location in mem::take(pending) {
        if location.package_weight() <= remaining {
            remaining -= location.package_weight();
            packed.push(location);
        } else {
            pending.push(location);
        }
    }

    Some(Trip::new(packed))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
