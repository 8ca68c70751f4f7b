//! Impulsive transfer utilities: the classical two-burn Hohmann transfer around the Earth.

pub mod transfers;

pub use transfers::{OrbitDirection, TransferPlan, hohmann};
