//! Shared building blocks for the `skyhaul` workspace.
//!
//! * [`models`]: drones, delivery locations and the trips that bind them.
//! * [`error`]: typed failures raised while reading a manifest or planning trips.
//! * [`config`]: run options handed from the CLI down to the commands.

pub mod config;
pub mod error;
pub mod log;
pub mod models;

#[doc(hidden)]
pub use tracing;
