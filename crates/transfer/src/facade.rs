//! Re-exported APIs for consumers of the transfer crate.

pub use crate::mission::affordability::affordable;
pub use crate::mission::cost::{PropellantRequirement, estimate_cost, quote_propellants};
pub use crate::mission::reachable::{ReachableOrbitEstimate, max_reachable_radius, reachable_orbits};
pub use crate::mission::session::{
    Budget, BudgetAssessment, BudgetSession, Purchase, SelectionError,
};
pub use crate::mission::{PlanError, TransferOutcome, TransferQuote, TransferRequest, plan_transfer};
pub use crate::validate::InputError;
pub use hohmann_impulsive::{OrbitDirection, TransferPlan};
pub use hohmann_propulsion::{DEFAULT_CATALOG, PropellantSpec};

pub mod catalog {
    use std::borrow::Cow;
    use std::path::Path;

    use hohmann_config::{ConfigError, PropellantConfig, load_propellants};
    use hohmann_propulsion::{DEFAULT_CATALOG, PropellantSpec};
    use thiserror::Error;

    /// Errors surfaced when building a propellant catalog.
    #[derive(Debug, Error)]
    pub enum CatalogError {
        #[error("propellant catalog is empty")]
        EmptyCatalog,
        #[error("propellant '{name}' has invalid specific impulse {isp_seconds} s")]
        InvalidIsp { name: String, isp_seconds: f64 },
        #[error("propellant '{name}' has invalid price {usd_per_kg} USD/kg")]
        InvalidPrice { name: String, usd_per_kg: f64 },
        #[error("failed to load catalog: {0}")]
        Config(#[from] ConfigError),
    }

    /// Convert a `PropellantConfig` into its runtime `PropellantSpec`.
    ///
    /// Isp must be finite and positive; price must be finite and non-negative.
    pub fn from_config(config: &PropellantConfig) -> Result<PropellantSpec, CatalogError> {
        if !config.isp_seconds.is_finite() || config.isp_seconds <= 0.0 {
            return Err(CatalogError::InvalidIsp {
                name: config.name.clone(),
                isp_seconds: config.isp_seconds,
            });
        }
        if !config.price_usd_per_kg.is_finite() || config.price_usd_per_kg < 0.0 {
            return Err(CatalogError::InvalidPrice {
                name: config.name.clone(),
                usd_per_kg: config.price_usd_per_kg,
            });
        }
        Ok(PropellantSpec {
            name: Cow::Owned(config.name.clone()),
            isp_seconds: config.isp_seconds,
            price_usd_per_kg: config.price_usd_per_kg,
        })
    }

    /// Load a catalog file, keeping file order as index order.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<PropellantSpec>, CatalogError> {
        let configs = load_propellants(path)?;
        if configs.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        configs.iter().map(from_config).collect()
    }

    /// Catalog at `path`, or the built-in catalog when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Vec<PropellantSpec>, CatalogError> {
        match path {
            Some(path) => load(path),
            None => Ok(DEFAULT_CATALOG.to_vec()),
        }
    }
}
