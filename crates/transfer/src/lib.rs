//! Transfer façade crate: quotes propellant for a Hohmann transfer and checks it against a budget.

pub mod mission;
pub mod reference;
pub mod validate;

pub use facade::*;
pub use hohmann_impulsive as impulsive;
pub use hohmann_propulsion as propulsion;

mod facade;
