use crate::models::location::Location;

/// Locations assigned together in one round, kept in the order they were packed.
///
/// The order is the packing order, not a flight route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trip {
    locations: Vec<Location>,
}

impl Trip {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Total package weight carried on this trip.
    pub fn weight(&self) -> u64 {
        self.locations
            .iter()
            .map(|location| u64::from(location.package_weight()))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.locations.iter().map(Location::name).collect()
    }
}
