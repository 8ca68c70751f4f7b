//! Fixed-point propellant mass solver for a two-burn manoeuvre.
//!
//! The propellant burned in the first manoeuvre depends on the total vehicle mass,
//! which in turn includes the propellant for both manoeuvres. The solver starts from
//! `dry mass + SEED_PROPELLANT_KG` and re-applies the exponential burn model a fixed
//! number of passes:
//!
//! ```text
//! stage1 = M * (1 - e^(-|dv1| / ve))
//! stage2 = (M - stage1) * (1 - e^(-|dv2| / ve))
//! M      = dry + stage1 + stage2
//! ```
//!
//! There is no tolerance check. The pass count is part of the numeric contract: the
//! quote tables use [`MAIN_SOLVER_PASSES`] and the reachable-orbit search uses
//! [`SEARCH_SOLVER_PASSES`], and changing either changes the reported masses.

use hohmann_core::constants::EULER_APPROX;
use serde::Serialize;

/// Passes used when quoting a transfer.
pub const MAIN_SOLVER_PASSES: usize = 20;
/// Passes used at every trial radius of the reachable-orbit search.
pub const SEARCH_SOLVER_PASSES: usize = 10;
/// Initial propellant guess added to the dry mass (kg).
pub const SEED_PROPELLANT_KG: f64 = 1_000.0;

/// Propellant split between the two burns (kg). All fields are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MassBreakdown {
    pub stage1_kg: f64,
    pub stage2_kg: f64,
    pub total_kg: f64,
}

/// Solve the propellant mass for burns `dv1_m_s` and `dv2_m_s` (sign ignored).
///
/// Panics when `exhaust_velocity_m_s` or `dry_mass_kg` is not positive, or `passes` is zero.
pub fn solve_two_burn_mass(
    dv1_m_s: f64,
    dv2_m_s: f64,
    exhaust_velocity_m_s: f64,
    dry_mass_kg: f64,
    passes: usize,
) -> MassBreakdown {
    assert!(
        exhaust_velocity_m_s > 0.0 && dry_mass_kg > 0.0 && passes > 0,
        "invalid solver inputs (ve={exhaust_velocity_m_s}, dry={dry_mass_kg}, passes={passes})"
    );

    let retained1 = EULER_APPROX.powf(-dv1_m_s.abs() / exhaust_velocity_m_s);
    let retained2 = EULER_APPROX.powf(-dv2_m_s.abs() / exhaust_velocity_m_s);

    let mut total_mass = dry_mass_kg + SEED_PROPELLANT_KG;
    let mut stage1 = 0.0;
    let mut stage2 = 0.0;
    for _ in 0..passes {
        stage1 = total_mass * (1.0 - retained1);
        stage2 = (total_mass - stage1) * (1.0 - retained2);
        total_mass = dry_mass_kg + stage1 + stage2;
    }

    let stage1 = f64::max(stage1, 0.0);
    let stage2 = f64::max(stage2, 0.0);
    MassBreakdown {
        stage1_kg: stage1,
        stage2_kg: stage2,
        total_kg: (stage1 + stage2).max(0.0),
    }
}
