//! Per-propellant mass and cost for a fixed transfer.

use hohmann_impulsive::TransferPlan;
use hohmann_propulsion::{MAIN_SOLVER_PASSES, MassBreakdown, PropellantSpec, solve_two_burn_mass};
use serde::Serialize;
use tracing::debug;

/// Propellant needed for one catalog entry, with its price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropellantRequirement {
    /// Position of the propellant in its catalog.
    pub index: usize,
    pub propellant: PropellantSpec,
    pub exhaust_velocity_m_s: f64,
    pub mass: MassBreakdown,
    pub total_cost_usd: f64,
}

impl PropellantRequirement {
    pub fn total_mass_kg(&self) -> f64 {
        self.mass.total_kg
    }
}

/// Cost of `mass_kg` propellant at `price_usd_per_kg`, never negative.
pub fn estimate_cost(mass_kg: f64, price_usd_per_kg: f64) -> f64 {
    (mass_kg * price_usd_per_kg).max(0.0)
}

/// Propellant mass for `propellant` over `plan` using `passes` solver passes.
pub fn propellant_mass(
    plan: &TransferPlan,
    propellant: &PropellantSpec,
    dry_mass_kg: f64,
    passes: usize,
) -> MassBreakdown {
    solve_two_burn_mass(
        plan.dv1_m_s,
        plan.dv2_m_s,
        propellant.exhaust_velocity_m_s(),
        dry_mass_kg,
        passes,
    )
}

/// Quote every catalog entry for `plan`, in catalog order.
pub fn quote_propellants(
    plan: &TransferPlan,
    dry_mass_kg: f64,
    catalog: &[PropellantSpec],
) -> Vec<PropellantRequirement> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, propellant)| {
            let mass = propellant_mass(plan, propellant, dry_mass_kg, MAIN_SOLVER_PASSES);
            let total_cost_usd = estimate_cost(mass.total_kg, propellant.price_usd_per_kg);
            debug!(
                propellant = %propellant.name,
                mass_kg = mass.total_kg,
                cost_usd = total_cost_usd,
                "quoted propellant"
            );
            PropellantRequirement {
                index,
                propellant: propellant.clone(),
                exhaust_velocity_m_s: propellant.exhaust_velocity_m_s(),
                mass,
                total_cost_usd,
            }
        })
        .collect()
}
