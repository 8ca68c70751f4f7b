//! Interactive Hohmann transfer budget planner.
//!
//! Values missing from the command line or scenario file are asked for on stdin,
//! with reference radii and dry masses printed first. Pass `--no-prompt` to run
//! non-interactively.

#[path = "planner/console.rs"]
mod console;
#[path = "planner/render.rs"]
mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use hohmann_budget::config::{ScenarioConfig, load_scenario};
use hohmann_budget::transfer::{
    Budget, BudgetSession, Purchase, TransferOutcome, TransferRequest, catalog, plan_transfer,
};
use hohmann_budget::validate::{self, InputError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use console::Console;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Propellant mass, cost and budget check for a two-burn Hohmann transfer"
)]
struct Cli {
    /// Initial orbit radius from the Earth's centre (m)
    #[arg(long)]
    r1: Option<f64>,

    /// Target orbit radius from the Earth's centre (m)
    #[arg(long)]
    r2: Option<f64>,

    /// Rocket dry mass (kg)
    #[arg(long)]
    dry_mass: Option<f64>,

    /// Available budget (USD)
    #[arg(long)]
    budget: Option<f64>,

    /// Budget top-up applied while nothing is affordable (USD, repeatable)
    #[arg(long = "top-up")]
    top_ups: Vec<f64>,

    /// Catalog index of the propellant to buy
    #[arg(long)]
    select: Option<usize>,

    /// Propellant catalog (YAML, TOML, or directory of TOML files)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Scenario file supplying the values above (YAML or TOML)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Never read stdin; missing values are errors
    #[arg(long, default_value_t = false)]
    no_prompt: bool,

    /// Log solver and search details to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug, PartialEq, Eq)]
enum Format {
    Table,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let scenario = match &cli.scenario {
        Some(path) => Some(
            load_scenario(path).with_context(|| format!("loading scenario {}", path.display()))?,
        ),
        None => None,
    };
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| scenario.as_ref().and_then(|s| s.catalog.clone()));
    let catalog = catalog::load_or_default(catalog_path.as_deref())?;
    debug!(
        entries = catalog.len(),
        custom = catalog_path.is_some(),
        "propellant catalog loaded"
    );

    let table = cli.format == Format::Table;
    let mut console = Console::new(table);
    let interactive = !cli.no_prompt;

    let r1 = cli.r1.or(scenario.as_ref().map(|s| s.initial_radius_m));
    let r2 = cli.r2.or(scenario.as_ref().map(|s| s.target_radius_m));
    if interactive && (r1.is_none() || r2.is_none()) {
        render::orbit_references(console.out())?;
    }
    let r1 = resolve(&mut console, interactive, r1, "--r1", |c| {
        c.ask_number("Initial orbit radius R1 (m): ", "6771000", initial_radius)
    })?;
    let r2 = resolve(&mut console, interactive, r2, "--r2", |c| {
        c.ask_number("Target orbit radius R2 (m): ", "42164000", target_radius)
    })?;
    let r1 = initial_radius(r1)?;
    let r2 = target_radius(r2)?;

    if r1 == r2 {
        writeln!(console.out(), "R2 = R1: no manoeuvre needed.")?;
        return Ok(());
    }

    let dry_mass = cli.dry_mass.or(scenario.as_ref().map(|s| s.dry_mass_kg));
    if interactive && dry_mass.is_none() {
        render::dry_mass_references(console.out())?;
    }
    let dry_mass = resolve(&mut console, interactive, dry_mass, "--dry-mass", |c| {
        c.ask_number("Rocket dry mass (kg): ", "22800", validate::dry_mass)
    })?;

    let request = TransferRequest {
        initial_radius_m: r1,
        target_radius_m: r2,
        dry_mass_kg: dry_mass,
    };
    let quote = match plan_transfer(&request, &catalog)? {
        TransferOutcome::Quote(quote) => quote,
        TransferOutcome::NoManeuver => unreachable!("equal radii return before planning"),
    };

    let mut stdout = io::stdout();
    if table {
        render::plan(&mut stdout, &quote.plan)?;
        render::requirements(&mut stdout, &quote.requirements)?;
    }

    let budget = cli.budget.or(scenario.as_ref().and_then(|s| s.budget_usd));
    if interactive && budget.is_none() {
        writeln!(
            console.out(),
            "Enter the total budget (USD), using the costs above as a guide."
        )?;
    }
    let budget = resolve(&mut console, interactive, budget, "--budget", |c| {
        c.ask_number("Total budget ($): ", "60000", validate::budget)
    })?;

    let mut session = BudgetSession::new(quote, Budget::new(budget)?);
    let mut queued_top_ups = top_ups(&cli, scenario.as_ref()).into_iter();
    let selection = cli.select.or(scenario.as_ref().and_then(|s| s.selection));

    let mut assessment = session.assess();
    let purchase = loop {
        if table {
            render::assessment(&mut stdout, &assessment, session.budget().amount_usd())?;
        }
        if assessment.is_affordable() {
            break choose(&mut console, &session, selection, interactive)?;
        }

        let amount = if let Some(amount) = queued_top_ups.next() {
            Some(amount)
        } else if interactive && console.confirm("Add to the budget? (y/n): ")? {
            Some(console.ask_number("Top-up amount ($): ", "1500.50", validate::top_up)?)
        } else {
            None
        };
        let Some(amount) = amount else {
            if table {
                writeln!(stdout, "Budget not increased. Mission cancelled.")?;
            }
            break None;
        };
        assessment = session.top_up(amount)?;
        if table {
            writeln!(
                stdout,
                "New budget: ${:.2}\n",
                session.budget().amount_usd()
            )?;
        }
    };

    match cli.format {
        Format::Table => {
            if let Some(purchase) = &purchase {
                render::purchase(&mut stdout, purchase)?;
            }
        }
        Format::Csv => render::csv(&mut stdout, session.quote(), &assessment)?,
        Format::Json => render::json(
            &mut stdout,
            &render::Report {
                quote: session.quote(),
                transfer_time_s: session.quote().plan.transfer_time_s(),
                budget_usd: session.budget().amount_usd(),
                assessment: &assessment,
                purchase: purchase.as_ref(),
            },
        )?,
    }
    stdout.flush()?;
    Ok(())
}

fn initial_radius(value: f64) -> Result<f64, InputError> {
    validate::orbit_radius("R1", value)
}

fn target_radius(value: f64) -> Result<f64, InputError> {
    validate::orbit_radius("R2", value)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Use `given` when present, otherwise prompt (or fail without a terminal session).
fn resolve<F>(
    console: &mut Console,
    interactive: bool,
    given: Option<f64>,
    flag: &str,
    prompt: F,
) -> anyhow::Result<f64>
where
    F: FnOnce(&mut Console) -> anyhow::Result<f64>,
{
    match given {
        Some(value) => Ok(value),
        None if interactive => prompt(console),
        None => bail!("{flag} is required with --no-prompt"),
    }
}

fn top_ups(cli: &Cli, scenario: Option<&ScenarioConfig>) -> Vec<f64> {
    if !cli.top_ups.is_empty() {
        return cli.top_ups.clone();
    }
    scenario.map(|s| s.top_ups_usd.clone()).unwrap_or_default()
}

/// Pick a propellant from the affordable set, from `selection` or by prompting.
fn choose(
    console: &mut Console,
    session: &BudgetSession,
    selection: Option<usize>,
    interactive: bool,
) -> anyhow::Result<Option<Purchase>> {
    if let Some(index) = selection {
        return Ok(Some(session.select(index)?));
    }
    if !interactive {
        return Ok(None);
    }
    loop {
        let answer = console.ask("Propellant index to buy (number in [ ]): ")?;
        match session.select_str(&answer) {
            Ok(purchase) => return Ok(Some(purchase)),
            Err(err) => writeln!(console.out(), "Invalid selection: {err}. Try again.")?,
        }
    }
}
