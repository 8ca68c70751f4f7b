//! Largest target orbit affordable with a capped budget.
//!
//! The search walks outward from the initial radius in fixed steps and stops at the
//! first trial radius whose transfer costs more than the budget. It relies on the
//! transfer cost growing with the target radius. That holds while the radius ratio
//! stays below roughly 15.6, where the total Hohmann delta-v peaks; beyond that the
//! cost falls again and the estimate is only a lower bound on what is reachable.

use hohmann_impulsive::hohmann;
use hohmann_propulsion::{PropellantSpec, SEARCH_SOLVER_PASSES};
use serde::Serialize;
use tracing::{debug, warn};

use super::cost::{estimate_cost, propellant_mass};

/// Radius step as a fraction of the initial radius.
pub const STEP_FRACTION: f64 = 0.05;
/// Smallest radius step (m).
pub const MIN_STEP_M: f64 = 1_000.0;
/// Trial radii evaluated before the search gives up.
pub const MAX_SEARCH_STEPS: usize = 2_000;

/// Furthest orbit reachable with one propellant at the current budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachableOrbitEstimate {
    /// Position of the propellant in its catalog.
    pub index: usize,
    pub propellant: PropellantSpec,
    /// Last affordable trial radius; never below the initial radius.
    pub max_radius_m: f64,
    /// Number of affordable trial radii, including the initial one.
    pub steps: usize,
    /// The step cap was reached before the budget ran out.
    pub capped: bool,
}

/// Radius increment used when searching outward from `r1_m`.
pub fn search_step_m(r1_m: f64) -> f64 {
    (r1_m * STEP_FRACTION).max(MIN_STEP_M)
}

/// Cost of reaching `candidate_m` from `r1_m` as evaluated by the search.
pub fn search_cost(
    r1_m: f64,
    candidate_m: f64,
    dry_mass_kg: f64,
    propellant: &PropellantSpec,
) -> f64 {
    let plan = hohmann(r1_m, candidate_m);
    let mass = propellant_mass(&plan, propellant, dry_mass_kg, SEARCH_SOLVER_PASSES);
    estimate_cost(mass.total_kg, propellant.price_usd_per_kg)
}

/// Search the largest radius reachable from `r1_m` for `budget_usd` with `propellant`.
pub fn max_reachable_radius(
    index: usize,
    propellant: &PropellantSpec,
    r1_m: f64,
    dry_mass_kg: f64,
    budget_usd: f64,
) -> ReachableOrbitEstimate {
    let step = search_step_m(r1_m);
    let mut candidate = r1_m;
    let mut last_affordable = r1_m;
    let mut steps = 0;

    while steps < MAX_SEARCH_STEPS {
        if search_cost(r1_m, candidate, dry_mass_kg, propellant) > budget_usd {
            break;
        }
        last_affordable = candidate;
        candidate += step;
        steps += 1;
    }

    let capped = steps == MAX_SEARCH_STEPS;
    if capped {
        warn!(
            propellant = %propellant.name,
            max_radius_m = last_affordable,
            "reachable-orbit search hit its step cap"
        );
    }
    debug!(
        propellant = %propellant.name,
        max_radius_m = last_affordable,
        steps,
        capped,
        "reachable-orbit search finished"
    );

    ReachableOrbitEstimate {
        index,
        propellant: propellant.clone(),
        max_radius_m: last_affordable,
        steps,
        capped,
    }
}

/// Run [`max_reachable_radius`] for every catalog entry, in catalog order.
pub fn reachable_orbits(
    catalog: &[PropellantSpec],
    r1_m: f64,
    dry_mass_kg: f64,
    budget_usd: f64,
) -> Vec<ReachableOrbitEstimate> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, propellant)| {
            max_reachable_radius(index, propellant, r1_m, dry_mass_kg, budget_usd)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hohmann_core::constants::EARTH_RADIUS_M;
    use hohmann_propulsion::DEFAULT_CATALOG;

    const ISS_M: f64 = 6_771_000.0;
    const DRY: f64 = 22_800.0;

    #[test]
    fn step_has_a_floor() {
        assert_eq!(search_step_m(ISS_M), ISS_M * 0.05);
        assert_eq!(search_step_m(10_000.0), MIN_STEP_M);
    }

    #[test]
    fn tiny_budget_stays_at_initial_orbit() {
        for estimate in reachable_orbits(&DEFAULT_CATALOG, ISS_M, DRY, 1.0) {
            assert_eq!(estimate.max_radius_m, ISS_M);
            assert_eq!(estimate.steps, 1);
            assert!(!estimate.capped);
        }
    }

    #[test]
    fn hundred_thousand_dollars_matches_reference_radii() {
        let radii: Vec<f64> = reachable_orbits(&DEFAULT_CATALOG, ISS_M, DRY, 100_000.0)
            .iter()
            .map(|e| e.max_radius_m)
            .collect();
        let step = search_step_m(ISS_M);
        let expected = [
            ISS_M + 36.0 * step,
            ISS_M + 5.0 * step,
            ISS_M + 20.0 * step,
            ISS_M,
            ISS_M,
            ISS_M + 10.0 * step,
            ISS_M,
        ];
        for (got, want) in radii.iter().zip(expected) {
            assert!((got - want).abs() < 1e-3, "got {got}, want {want}");
        }
    }

    #[test]
    fn search_quotes_with_the_shorter_solver_run() {
        // CH4/LOX at $200k and solid at $400k depend on the search pass count.
        let step = search_step_m(ISS_M);
        let cases = [
            (2, 200_000.0, 72.0),
            (5, 200_000.0, 23.0),
            (5, 400_000.0, 87.0),
        ];
        for (index, budget, steps) in cases {
            let propellant = &DEFAULT_CATALOG[index];
            let estimate = max_reachable_radius(index, propellant, ISS_M, DRY, budget);
            let expected = ISS_M + steps * step;
            assert!(
                (estimate.max_radius_m - expected).abs() < 1e-3,
                "{} at ${budget}: got {}, want {expected}",
                propellant.name,
                estimate.max_radius_m
            );
        }
    }

    #[test]
    fn estimate_sits_on_the_budget_boundary() {
        let budget = 250_000.0;
        let step = search_step_m(EARTH_RADIUS_M + 400_000.0);
        for propellant in DEFAULT_CATALOG.iter() {
            let r1 = EARTH_RADIUS_M + 400_000.0;
            let estimate = max_reachable_radius(0, propellant, r1, DRY, budget);
            assert!(estimate.max_radius_m >= r1);
            assert!(search_cost(r1, estimate.max_radius_m, DRY, propellant) <= budget);
            if !estimate.capped {
                let next = search_cost(r1, estimate.max_radius_m + step, DRY, propellant);
                assert!(next > budget, "{}: next step costs {next}", propellant.name);
            }
        }
    }

    #[test]
    fn huge_budget_hits_the_step_cap() {
        let cheap = PropellantSpec::new("free lunch", 450.0, 0.0);
        let estimate = max_reachable_radius(0, &cheap, ISS_M, DRY, 1.0);
        assert!(estimate.capped);
        assert_eq!(estimate.steps, MAX_SEARCH_STEPS);
        let expected = ISS_M + (MAX_SEARCH_STEPS - 1) as f64 * search_step_m(ISS_M);
        assert!((estimate.max_radius_m - expected).abs() < 1e-3);
    }
}
