//! Filter quoted propellants against a budget.

use super::cost::PropellantRequirement;

/// Requirements whose cost fits in `budget_usd`, in their original order.
pub fn affordable(
    requirements: &[PropellantRequirement],
    budget_usd: f64,
) -> Vec<PropellantRequirement> {
    requirements
        .iter()
        .filter(|r| r.total_cost_usd >= 0.0 && r.total_cost_usd <= budget_usd)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::cost::quote_propellants;
    use hohmann_impulsive::hohmann;
    use hohmann_propulsion::DEFAULT_CATALOG;

    fn geo_quotes() -> Vec<PropellantRequirement> {
        let plan = hohmann(6_771_000.0, 42_164_000.0);
        quote_propellants(&plan, 22_800.0, &DEFAULT_CATALOG)
    }

    #[test]
    fn one_dollar_buys_nothing() {
        assert!(affordable(&geo_quotes(), 1.0).is_empty());
    }

    #[test]
    fn budget_at_exact_cost_is_affordable() {
        let quotes = geo_quotes();
        let cheapest = quotes[0].total_cost_usd;
        let picked = affordable(&quotes, cheapest);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].index, 0);
    }

    #[test]
    fn result_preserves_catalog_order() {
        let quotes = geo_quotes();
        let picked = affordable(&quotes, 1.0e6);
        let indices: Vec<usize> = picked.iter().map(|r| r.index).collect();
        // RP-1, LH2, CH4 and solid fit under a million dollars.
        assert_eq!(indices, [0, 1, 2, 5]);
        assert!(picked.iter().all(|r| r.total_cost_usd <= 1.0e6));
    }
}
