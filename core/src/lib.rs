//! Planning core for `skyhaul`.
//!
//! * [`parser`]: turns manifest text into drones and locations.
//! * [`allocator`]: greedy, round-based packing of locations into trips.
//! * [`report`]: renders the planned trips to one or more sinks.

pub mod allocator;
pub mod parser;
pub mod report;
