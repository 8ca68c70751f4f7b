//! Budget bookkeeping for one quoted transfer.
//!
//! Every assessment is recomputed from the quote and the current budget; nothing is
//! cached across top-ups.

use hohmann_propulsion::PropellantSpec;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use super::TransferQuote;
use super::affordability::affordable;
use super::cost::PropellantRequirement;
use super::reachable::{ReachableOrbitEstimate, reachable_orbits};
use crate::validate::{self, InputError};

/// Available funds (USD). Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Budget {
    amount_usd: f64,
}

impl Budget {
    pub fn new(amount_usd: f64) -> Result<Self, InputError> {
        Ok(Self {
            amount_usd: validate::budget(amount_usd)?,
        })
    }

    pub fn amount_usd(&self) -> f64 {
        self.amount_usd
    }

    /// Add a positive amount and return the new total. The total must stay finite.
    pub fn top_up(&mut self, amount_usd: f64) -> Result<f64, InputError> {
        let total = self.amount_usd + validate::top_up(amount_usd)?;
        self.amount_usd = validate::budget(total)?;
        Ok(self.amount_usd)
    }
}

/// What the current budget allows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "entries", rename_all = "snake_case")]
pub enum BudgetAssessment {
    /// At least one propellant reaches the target; entries in catalog order.
    Affordable(Vec<PropellantRequirement>),
    /// Nothing reaches the target; furthest orbit per propellant instead.
    Insufficient(Vec<ReachableOrbitEstimate>),
}

impl BudgetAssessment {
    pub fn is_affordable(&self) -> bool {
        matches!(self, BudgetAssessment::Affordable(_))
    }
}

/// A propellant chosen from the affordable set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Purchase {
    pub requirement: PropellantRequirement,
    pub remaining_budget_usd: f64,
}

/// Selection that does not name an affordable propellant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("propellant index {0} is not in the affordable set")]
    InvalidSelection(usize),
    #[error("'{0}' is not a propellant index")]
    Unparseable(String),
}

/// A quoted transfer together with the budget being spent on it.
#[derive(Debug, Clone)]
pub struct BudgetSession {
    quote: TransferQuote,
    budget: Budget,
}

impl BudgetSession {
    pub fn new(quote: TransferQuote, budget: Budget) -> Self {
        Self { quote, budget }
    }

    pub fn quote(&self) -> &TransferQuote {
        &self.quote
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Propellants the current budget pays for, in catalog order.
    pub fn affordable(&self) -> Vec<PropellantRequirement> {
        affordable(&self.quote.requirements, self.budget.amount_usd())
    }

    /// Recompute what the current budget allows.
    pub fn assess(&self) -> BudgetAssessment {
        let affordable = self.affordable();
        if !affordable.is_empty() {
            return BudgetAssessment::Affordable(affordable);
        }
        // requirements carry the quoted catalog in index order
        let catalog: Vec<PropellantSpec> = self
            .quote
            .requirements
            .iter()
            .map(|r| r.propellant.clone())
            .collect();
        BudgetAssessment::Insufficient(reachable_orbits(
            &catalog,
            self.quote.plan.r1_m,
            self.quote.dry_mass_kg,
            self.budget.amount_usd(),
        ))
    }

    /// Add funds and reassess. A rejected amount leaves the budget unchanged.
    pub fn top_up(&mut self, amount_usd: f64) -> Result<BudgetAssessment, InputError> {
        let total = self.budget.top_up(amount_usd)?;
        info!(
            top_up_usd = amount_usd,
            budget_usd = total,
            "budget topped up"
        );
        Ok(self.assess())
    }

    /// Buy the propellant at catalog position `index` if the budget covers it.
    pub fn select(&self, index: usize) -> Result<Purchase, SelectionError> {
        let requirement = self
            .affordable()
            .into_iter()
            .find(|r| r.index == index)
            .ok_or(SelectionError::InvalidSelection(index))?;
        let remaining_budget_usd = self.budget.amount_usd() - requirement.total_cost_usd;
        info!(
            propellant = %requirement.propellant.name,
            cost_usd = requirement.total_cost_usd,
            remaining_budget_usd,
            "propellant selected"
        );
        Ok(Purchase {
            requirement,
            remaining_budget_usd,
        })
    }

    /// [`select`](Self::select) from raw user text such as `"2"` or `" 2 "`.
    ///
    /// The text must spell an index exactly as it is printed, so `"02"` or `"+2"` are
    /// rejected.
    pub fn select_str(&self, input: &str) -> Result<Purchase, SelectionError> {
        let trimmed = input.trim();
        let unparseable = || SelectionError::Unparseable(trimmed.to_string());
        let index = trimmed.parse::<usize>().map_err(|_| unparseable())?;
        if index.to_string() != trimmed {
            return Err(unparseable());
        }
        self.select(index)
    }
}
