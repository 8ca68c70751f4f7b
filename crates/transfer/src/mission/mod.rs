//! Transfer quoting pipeline: delta-v, then propellant mass and cost per catalog entry,
//! then budget checks.

pub mod affordability;
pub mod cost;
pub mod reachable;
pub mod session;

use hohmann_impulsive::{TransferPlan, hohmann};
use hohmann_propulsion::PropellantSpec;
use serde::Serialize;

use self::cost::{PropellantRequirement, quote_propellants};
use crate::catalog::CatalogError;
use crate::validate::{self, InputError};

/// Inputs for quoting a transfer between two circular Earth orbits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferRequest {
    /// Initial orbit radius from the Earth's centre (m).
    pub initial_radius_m: f64,
    /// Target orbit radius from the Earth's centre (m).
    pub target_radius_m: f64,
    /// Vehicle mass without propellant (kg).
    pub dry_mass_kg: f64,
}

/// Delta-v and per-propellant requirements for one transfer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferQuote {
    pub plan: TransferPlan,
    pub dry_mass_kg: f64,
    /// One entry per catalog propellant, in catalog order.
    pub requirements: Vec<PropellantRequirement>,
}

/// Result of the quoting pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferOutcome {
    /// Initial and target radius coincide; nothing was computed.
    NoManeuver,
    Quote(TransferQuote),
}

/// Top-level planning error.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Validate `request`, then quote every propellant of `catalog` for the transfer.
pub fn plan_transfer(
    request: &TransferRequest,
    catalog: &[PropellantSpec],
) -> Result<TransferOutcome, PlanError> {
    let r1 = validate::orbit_radius("initial radius", request.initial_radius_m)?;
    let r2 = validate::orbit_radius("target radius", request.target_radius_m)?;
    let dry_mass = validate::dry_mass(request.dry_mass_kg)?;
    if catalog.is_empty() {
        return Err(CatalogError::EmptyCatalog.into());
    }

    if r1 == r2 {
        return Ok(TransferOutcome::NoManeuver);
    }

    let plan = hohmann(r1, r2);
    Ok(TransferOutcome::Quote(TransferQuote {
        plan,
        dry_mass_kg: dry_mass,
        requirements: quote_propellants(&plan, dry_mass, catalog),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hohmann_propulsion::DEFAULT_CATALOG;

    #[test]
    fn equal_radii_skip_the_pipeline() {
        let request = TransferRequest {
            initial_radius_m: 7_000_000.0,
            target_radius_m: 7_000_000.0,
            dry_mass_kg: 1_000.0,
        };
        assert_eq!(
            plan_transfer(&request, &DEFAULT_CATALOG).unwrap(),
            TransferOutcome::NoManeuver
        );
    }

    #[test]
    fn invalid_inputs_surface_as_errors() {
        let below_surface = TransferRequest {
            initial_radius_m: 6_000_000.0,
            target_radius_m: 7_000_000.0,
            dry_mass_kg: 1_000.0,
        };
        assert!(matches!(
            plan_transfer(&below_surface, &DEFAULT_CATALOG),
            Err(PlanError::Input(InputError::BelowEarthRadius { .. }))
        ));

        let massless = TransferRequest {
            dry_mass_kg: 0.0,
            ..below_surface
        };
        let massless = TransferRequest {
            initial_radius_m: 7_000_000.0,
            ..massless
        };
        assert!(matches!(
            plan_transfer(&massless, &DEFAULT_CATALOG),
            Err(PlanError::Input(InputError::NonPositive { .. }))
        ));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let request = TransferRequest {
            initial_radius_m: 7_000_000.0,
            target_radius_m: 8_000_000.0,
            dry_mass_kg: 1_000.0,
        };
        assert!(matches!(
            plan_transfer(&request, &[]),
            Err(PlanError::Catalog(CatalogError::EmptyCatalog))
        ));
    }
}
