//! Command handlers

use crate::cli::{Cli, Commands, ListArgs, RateArgs};
use crate::output::{
    output_breakdown, output_check, output_drivers, output_quote, output_routes, output_trucks,
    output_violations,
};
use dispatch_app::app::DispatchService;
use dispatch_app::config::Config;
use dispatch_app::repository::open_configured_fleet_repo;
use dispatch_domain::model::TripParameters;
use dispatch_domain::service::{FleetQuery, PayCalculator};
use dispatch_infra::persistence::FileFleetRepository;
use dispatch_types::{OutputFormat, Result, RouteType, SpeedModel};
use std::path::{Path, PathBuf};
use tracing::debug;

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    /// At least one assignment broke a rule
    RuleViolations,
}

impl Outcome {
    fn from_valid(valid: bool) -> Self {
        if valid {
            Outcome::Clean
        } else {
            Outcome::RuleViolations
        }
    }
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<Outcome> {
    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;
    debug!(path = %config_path.display(), "loaded config");

    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Validate { driver, truck, route } => {
            let service = open_service(&config, cli.fleet)?;
            let violations =
                service.validate_by_ids(driver.as_deref(), truck.as_deref(), route.as_deref())?;
            output_violations(output_format, &violations)?;
            Ok(Outcome::from_valid(violations.is_empty()))
        }

        Commands::Quote {
            distance,
            rate,
            years,
            route_type,
            rates,
        } => cmd_quote(&config, output_format, distance, rate, years, route_type, &rates),

        Commands::QuoteRoute {
            route,
            driver,
            rate,
            rates,
        } => {
            let config = with_rate_overrides(&config, &rates);
            let service = open_service(&config, cli.fleet)?;
            let quote = service.quote_route(&route, &driver, rate)?;
            output_quote(output_format, &quote)?;
            Ok(Outcome::Clean)
        }

        Commands::Check => cmd_check(&config, cli.fleet, output_format),

        Commands::Drivers { list, min_license } => {
            let service = open_service(&config, cli.fleet)?;
            let page = service.list_drivers(&fleet_query(&list), min_license)?;
            output_drivers(output_format, &page)?;
            Ok(Outcome::Clean)
        }

        Commands::Trucks { list, class } => {
            let service = open_service(&config, cli.fleet)?;
            let page = service.list_trucks(&fleet_query(&list), class)?;
            output_trucks(output_format, &page)?;
            Ok(Outcome::Clean)
        }

        Commands::Routes { list } => {
            let service = open_service(&config, cli.fleet)?;
            let page = service.list_routes(&fleet_query(&list))?;
            output_routes(output_format, &page)?;
            Ok(Outcome::Clean)
        }

        Commands::Config {
            show,
            reset,
            set_format,
            set_fleet,
            set_speed_model,
            set_mph,
            set_fuel_price,
            set_mpg,
            set_other_cost_rate,
            set_profit_margin,
            set_hazmat_class_a,
            set_hazmat_min_years,
            set_oversized_min_years,
            set_long_haul_min_years,
        } => {
            let updates = ConfigUpdates {
                format: set_format,
                fleet: set_fleet,
                speed_model: set_speed_model,
                mph: set_mph,
                fuel_price: set_fuel_price,
                mpg: set_mpg,
                other_cost_rate: set_other_cost_rate,
                profit_margin: set_profit_margin,
                hazmat_class_a: set_hazmat_class_a,
                hazmat_min_years: set_hazmat_min_years,
                oversized_min_years: set_oversized_min_years,
                long_haul_min_years: set_long_haul_min_years,
            };
            cmd_config(&config_path, config, show, reset, updates)?;
            Ok(Outcome::Clean)
        }
    }
}

fn open_service(config: &Config, fleet: Option<PathBuf>) -> Result<DispatchService<FileFleetRepository>> {
    let repo = open_configured_fleet_repo(config, fleet)?;
    Ok(DispatchService::from_config(repo, config))
}

fn fleet_query(list: &ListArgs) -> FleetQuery {
    FleetQuery {
        available_only: list.available,
        search: list.search.clone(),
        page: list.page,
        page_size: list.page_size,
    }
}

/// Apply per-command speed overrides on top of the loaded config
fn with_rate_overrides(config: &Config, rates: &RateArgs) -> Config {
    let mut config = config.clone();
    if let Some(model) = rates.speed_model {
        config.speed_model = model;
    }
    if let Some(mph) = rates.mph {
        config.average_speed_mph = mph;
    }
    config
}

fn cmd_quote(
    config: &Config,
    output_format: OutputFormat,
    distance: f64,
    rate: f64,
    years: f64,
    route_type: RouteType,
    rates: &RateArgs,
) -> Result<Outcome> {
    let config = with_rate_overrides(config, rates);
    let params = TripParameters::new(distance, rate, years, route_type);
    let breakdown = PayCalculator::new(config.cost_rates()).calculate(&params)?;
    output_breakdown(output_format, &params, &breakdown)?;
    Ok(Outcome::Clean)
}

fn cmd_check(config: &Config, fleet: Option<PathBuf>, output_format: OutputFormat) -> Result<Outcome> {
    let service = open_service(config, fleet)?;
    eprintln!("Checking planned assignments in: {}", service.repository().toml_path().display());

    let results = service.check_planned()?;
    output_check(output_format, &results)?;

    let invalid = results.iter().filter(|r| !r.is_valid).count();
    if invalid > 0 {
        eprintln!("\nWarning: {} invalid assignment(s) found", invalid);
    }
    Ok(Outcome::from_valid(invalid == 0))
}

/// Values passed with `config --set-*`
#[derive(Debug, Default)]
struct ConfigUpdates {
    format: Option<OutputFormat>,
    fleet: Option<PathBuf>,
    speed_model: Option<SpeedModel>,
    mph: Option<f64>,
    fuel_price: Option<f64>,
    mpg: Option<f64>,
    other_cost_rate: Option<f64>,
    profit_margin: Option<f64>,
    hazmat_class_a: Option<bool>,
    hazmat_min_years: Option<u32>,
    oversized_min_years: Option<u32>,
    long_haul_min_years: Option<u32>,
}

/// 0 years means no requirement
fn threshold(years: u32) -> Option<u32> {
    (years > 0).then_some(years)
}

/// Apply updates to `config`; returns whether anything changed
fn apply_updates(config: &mut Config, updates: ConfigUpdates) -> bool {
    let mut modified = false;

    if let Some(format) = updates.format {
        config.output_format = format;
        modified = true;
    }

    if let Some(fleet) = updates.fleet {
        config.fleet_path = Some(fleet);
        modified = true;
    }

    if let Some(model) = updates.speed_model {
        config.speed_model = model;
        modified = true;
    }

    if let Some(mph) = updates.mph {
        config.average_speed_mph = mph;
        modified = true;
    }

    if let Some(price) = updates.fuel_price {
        config.fuel_price_per_gallon = price;
        modified = true;
    }

    if let Some(mpg) = updates.mpg {
        config.average_mpg = mpg;
        modified = true;
    }

    if let Some(rate) = updates.other_cost_rate {
        config.other_cost_rate = rate;
        modified = true;
    }

    if let Some(margin) = updates.profit_margin {
        config.profit_margin = margin;
        modified = true;
    }

    if let Some(required) = updates.hazmat_class_a {
        config.hazmat_requires_class_a = required;
        modified = true;
    }

    if let Some(years) = updates.hazmat_min_years {
        config.hazmat_min_years = threshold(years);
        modified = true;
    }

    if let Some(years) = updates.oversized_min_years {
        config.oversized_min_years = threshold(years);
        modified = true;
    }

    if let Some(years) = updates.long_haul_min_years {
        config.long_haul_min_years = threshold(years);
        modified = true;
    }

    modified
}

fn print_config(config: &Config, path: &Path) {
    println!("{}", config);
    println!("Config file:         {}", path.display());
}

fn cmd_config(path: &Path, mut config: Config, show: bool, reset: bool, updates: ConfigUpdates) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(path)?;
        println!("Configuration reset to defaults\n");
        print_config(&config, path);
        return Ok(());
    }

    let modified = apply_updates(&mut config, updates);

    if modified {
        config.save_to(path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        print_config(&config, path);
    }

    Ok(())
}
