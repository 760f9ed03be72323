use crate::models::{location::Location, trip::Trip};

/// A delivery drone and the trips it has been given so far.
///
/// Trips only ever grow; the allocator appends one per round at most.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drone {
    name: String,
    maximum_weight: u32,
    trips: Vec<Trip>,
}

impl Drone {
    pub fn new(name: impl Into<String>, maximum_weight: u32) -> Self {
        Self {
            name: name.into(),
            maximum_weight,
            trips: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn maximum_weight(&self) -> u32 {
        self.maximum_weight
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    pub fn push_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Whether this drone could ever lift `location` on an empty trip.
    pub fn can_carry(&self, location: &Location) -> bool {
        location.package_weight() <= self.maximum_weight
    }
}
