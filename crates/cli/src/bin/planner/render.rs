//! Human, CSV and JSON renderings of planner results.

use std::io::{self, Write};

use hohmann_budget::reference::{DRY_MASS_REFERENCES, ORBIT_REFERENCES};
use hohmann_budget::time::seconds_to_hours;
use hohmann_budget::transfer::{
    BudgetAssessment, OrbitDirection, PropellantRequirement, Purchase, ReachableOrbitEstimate,
    TransferPlan, TransferQuote,
};
use hohmann_budget::units::m_to_km;
use serde::Serialize;

pub fn orbit_references(w: &mut dyn Write) -> io::Result<()> {
    writeln!(
        w,
        "Reference orbit radii (from the Earth's centre, approximate):"
    )?;
    for reference in ORBIT_REFERENCES {
        writeln!(
            w,
            "  - {:<32} R = {:>15.0} m",
            reference.label, reference.radius_m
        )?;
    }
    writeln!(w)
}

pub fn dry_mass_references(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "Reference dry masses:")?;
    for reference in DRY_MASS_REFERENCES {
        writeln!(
            w,
            "  - {:<20} {:>10.0} kg",
            reference.label, reference.dry_mass_kg
        )?;
    }
    writeln!(w)
}

pub fn plan(w: &mut dyn Write, plan: &TransferPlan) -> io::Result<()> {
    match plan.direction() {
        Some(OrbitDirection::Raise) => {
            writeln!(
                w,
                "Note: R2 > R1, the manoeuvre raises the orbit (prograde burns)."
            )?;
        }
        Some(OrbitDirection::Lower) => {
            writeln!(w, "Note: R2 < R1, the manoeuvre lowers the orbit.")?;
            writeln!(
                w,
                "      Propellant and cost are computed as for raising; the burns point retrograde."
            )?;
        }
        None => {}
    }
    writeln!(w)?;
    writeln!(w, "=== Hohmann Transfer ===")?;
    writeln!(
        w,
        "Orbits          : R1 = {:.2} km, R2 = {:.2} km",
        m_to_km(plan.r1_m),
        m_to_km(plan.r2_m)
    )?;
    writeln!(w, "Circular speed  : v1 = {:.2} m/s", plan.v1_m_s)?;
    writeln!(
        w,
        "Burns           : ΔV1 = {:.2} m/s, ΔV2 = {:.2} m/s (total {:.2} m/s)",
        plan.dv1_magnitude_m_s(),
        plan.dv2_magnitude_m_s(),
        plan.total_delta_v_m_s()
    )?;
    writeln!(
        w,
        "Transfer time   : {:.2} h",
        seconds_to_hours(plan.transfer_time_s())
    )?;
    writeln!(w)
}

pub fn requirements(w: &mut dyn Write, requirements: &[PropellantRequirement]) -> io::Result<()> {
    writeln!(w, "=== Propellant Requirements ===")?;
    for r in requirements {
        writeln!(w, "[{}] {}", r.index, r.propellant.name)?;
        writeln!(
            w,
            "    Isp = {:.0} s | exhaust velocity ≈ {:.2} m/s",
            r.propellant.isp_seconds, r.exhaust_velocity_m_s
        )?;
        writeln!(
            w,
            "    propellant = {:.2} kg (burn 1: {:.2} kg, burn 2: {:.2} kg)",
            r.mass.total_kg, r.mass.stage1_kg, r.mass.stage2_kg
        )?;
        writeln!(w, "    estimated cost = ${:.2}", r.total_cost_usd)?;
    }
    writeln!(w)
}

pub fn assessment(
    w: &mut dyn Write,
    assessment: &BudgetAssessment,
    budget_usd: f64,
) -> io::Result<()> {
    writeln!(w, "=== Budget Check (${budget_usd:.2}) ===")?;
    match assessment {
        BudgetAssessment::Affordable(entries) => {
            writeln!(w, "The budget reaches the target orbit with:")?;
            for r in entries {
                writeln!(
                    w,
                    "  [{}] {} - cost ${:.2}",
                    r.index, r.propellant.name, r.total_cost_usd
                )?;
            }
        }
        BudgetAssessment::Insufficient(estimates) => {
            writeln!(
                w,
                "The budget does not reach the target orbit with any propellant."
            )?;
            writeln!(
                w,
                "Maximum reachable orbit (R3) per propellant at this budget:"
            )?;
            for e in estimates {
                writeln!(
                    w,
                    "  [{}] {:<18} R3 ≈ {:.2} m{}",
                    e.index,
                    e.propellant.name,
                    e.max_radius_m,
                    if e.capped { " (search limit reached)" } else { "" }
                )?;
            }
        }
    }
    writeln!(w)
}

pub fn purchase(w: &mut dyn Write, purchase: &Purchase) -> io::Result<()> {
    let requirement = &purchase.requirement;
    writeln!(w, "Selected        : {}", requirement.propellant.name)?;
    writeln!(w, "Cost            : ${:.2}", requirement.total_cost_usd)?;
    let remaining = purchase.remaining_budget_usd;
    writeln!(w, "Remaining funds : ${remaining:.2}")
}

#[derive(Serialize)]
struct CsvRow<'a> {
    index: usize,
    propellant: &'a str,
    isp_s: f64,
    exhaust_velocity_m_s: f64,
    stage1_kg: f64,
    stage2_kg: f64,
    total_kg: f64,
    cost_usd: f64,
    affordable: bool,
    max_radius_m: Option<f64>,
}

/// One CSV row per propellant; `max_radius_m` is empty unless the budget fell short.
pub fn csv(
    w: &mut dyn Write,
    quote: &TransferQuote,
    assessment: &BudgetAssessment,
) -> anyhow::Result<()> {
    let (affordable, estimates): (&[PropellantRequirement], &[ReachableOrbitEstimate]) =
        match assessment {
            BudgetAssessment::Affordable(entries) => (entries.as_slice(), &[][..]),
            BudgetAssessment::Insufficient(estimates) => (&[][..], estimates.as_slice()),
        };

    let mut writer = csv::Writer::from_writer(w);
    for r in &quote.requirements {
        writer.serialize(CsvRow {
            index: r.index,
            propellant: &r.propellant.name,
            isp_s: r.propellant.isp_seconds,
            exhaust_velocity_m_s: r.exhaust_velocity_m_s,
            stage1_kg: r.mass.stage1_kg,
            stage2_kg: r.mass.stage2_kg,
            total_kg: r.mass.total_kg,
            cost_usd: r.total_cost_usd,
            affordable: affordable.iter().any(|a| a.index == r.index),
            max_radius_m: estimates
                .iter()
                .find(|e| e.index == r.index)
                .map(|e| e.max_radius_m),
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Everything the planner computed in one run.
#[derive(Serialize)]
pub struct Report<'a> {
    pub quote: &'a TransferQuote,
    pub transfer_time_s: f64,
    pub budget_usd: f64,
    pub assessment: &'a BudgetAssessment,
    pub purchase: Option<&'a Purchase>,
}

pub fn json(w: &mut dyn Write, report: &Report<'_>) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)?;
    Ok(())
}
