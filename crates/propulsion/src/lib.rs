//! Propellant descriptors and the two-burn propellant mass solver.

pub mod catalog;
pub mod solver;

pub use catalog::{DEFAULT_CATALOG, PropellantSpec};
pub use solver::{
    MAIN_SOLVER_PASSES, MassBreakdown, SEARCH_SOLVER_PASSES, SEED_PROPELLANT_KG,
    solve_two_burn_mass,
};
