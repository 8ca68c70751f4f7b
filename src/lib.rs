//! Propellant sizing and budget planning for two-burn Hohmann transfers around the Earth.
//!
//! The member crates hold the physics and bookkeeping; this crate re-exports them so
//! front-ends (the `planner` CLI, tests) depend on a single library.

pub use hohmann_config as config;
pub use hohmann_core::{constants, time, units};
pub use hohmann_impulsive as impulsive;
pub use hohmann_propulsion as propulsion;
pub use hohmann_transfer as transfer;
pub use hohmann_transfer::{mission, reference, validate};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
