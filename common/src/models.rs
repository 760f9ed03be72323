//! # Domain Models
//!
//! * [`drone::Drone`]: a carrier with a fixed capacity and an append-only list of trips.
//! * [`location::Location`]: a delivery stop and the weight of its package.
//! * [`trip::Trip`]: one capacity-bounded batch of locations flown together.

pub mod drone;
pub mod location;
pub mod trip;

pub use drone::Drone;
pub use location::Location;
pub use trip::Trip;
