//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use dispatch_types::{LicenseLevel, OutputFormat, RouteType, SpeedModel, TruckClass};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dispatch-checker")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Validate driver assignments and price trucking trips")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fleet TOML file (overrides config)
    #[arg(long, global = true)]
    pub fleet: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Pagination and filters shared by the listing commands
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Entries per page
    #[arg(long, default_value = "20")]
    pub page_size: usize,

    /// Only entries that can take an assignment now
    #[arg(long)]
    pub available: bool,

    /// Case-insensitive match on id or name
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

/// Calculator overrides for the quote commands
#[derive(Args, Debug, Clone, Default)]
pub struct RateArgs {
    /// Drive time model. Uses config value if not specified.
    #[arg(long)]
    pub speed_model: Option<SpeedModel>,

    /// Average road speed in mph. Uses config value if not specified.
    #[arg(long)]
    pub mph: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate one driver + truck + route assignment from the fleet file
    Validate {
        /// Driver id
        #[arg(long, short = 'd')]
        driver: Option<String>,

        /// Truck id
        #[arg(long, short = 't')]
        truck: Option<String>,

        /// Route id
        #[arg(long, short = 'r')]
        route: Option<String>,
    },

    /// Calculate driver pay and trip cost from explicit parameters
    Quote {
        /// Trip distance in miles
        #[arg(long)]
        distance: f64,

        /// Driver hourly rate
        #[arg(long)]
        rate: f64,

        /// Driver years of experience
        #[arg(long, default_value = "0")]
        years: f64,

        /// Route type
        #[arg(long, value_enum, default_value_t = RouteType::Standard)]
        route_type: RouteType,

        #[command(flatten)]
        rates: RateArgs,
    },

    /// Calculate pay and cost for a fleet route and driver
    QuoteRoute {
        /// Route id
        #[arg(long, short = 'r')]
        route: String,

        /// Driver id
        #[arg(long, short = 'd')]
        driver: String,

        /// Driver hourly rate
        #[arg(long)]
        rate: f64,

        #[command(flatten)]
        rates: RateArgs,
    },

    /// Check every planned assignment in the fleet file
    Check,

    /// List drivers
    Drivers {
        #[command(flatten)]
        list: ListArgs,

        /// Minimum license level (a, b, c)
        #[arg(long)]
        min_license: Option<LicenseLevel>,
    },

    /// List trucks
    Trucks {
        #[command(flatten)]
        list: ListArgs,

        /// Truck class
        #[arg(long)]
        class: Option<TruckClass>,
    },

    /// List routes
    Routes {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set default fleet file
        #[arg(long)]
        set_fleet: Option<PathBuf>,

        /// Set drive time model
        #[arg(long)]
        set_speed_model: Option<SpeedModel>,

        /// Set average road speed (mph)
        #[arg(long)]
        set_mph: Option<f64>,

        /// Set fuel price per gallon
        #[arg(long)]
        set_fuel_price: Option<f64>,

        /// Set average fuel economy (mpg)
        #[arg(long)]
        set_mpg: Option<f64>,

        /// Set other costs per mile
        #[arg(long)]
        set_other_cost_rate: Option<f64>,

        /// Set profit margin multiplier (e.g. 1.2)
        #[arg(long)]
        set_profit_margin: Option<f64>,

        /// Require exactly Class A for hazmat routes
        #[arg(long)]
        set_hazmat_class_a: Option<bool>,

        /// Minimum years for hazmat routes (0 disables)
        #[arg(long)]
        set_hazmat_min_years: Option<u32>,

        /// Minimum years for oversized routes (0 disables)
        #[arg(long)]
        set_oversized_min_years: Option<u32>,

        /// Minimum years for long haul routes (0 disables)
        #[arg(long)]
        set_long_haul_min_years: Option<u32>,
    },
}
