//! Configuration management for dispatch-checker
//!
//! Config stored at: ~/.config/dispatch-checker/config.json

use dispatch_domain::model::rules::{
    AVERAGE_MPG, AVERAGE_SPEED_MPH, FUEL_PRICE_PER_GALLON, OTHER_COST_RATE, OVERSIZED_MIN_YEARS,
    PROFIT_MARGIN,
};
use dispatch_domain::model::{CostRates, RuleSet};
use dispatch_types::{ConfigError, OutputFormat, Result, SpeedModel};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Fleet TOML file used when --fleet is not given
    #[serde(default)]
    pub fleet_path: Option<PathBuf>,

    /// Drive time model (continuous, whole-hours)
    #[serde(default)]
    pub speed_model: SpeedModel,

    #[serde(default = "default_speed")]
    pub average_speed_mph: f64,

    #[serde(default = "default_fuel_price")]
    pub fuel_price_per_gallon: f64,

    #[serde(default = "default_mpg")]
    pub average_mpg: f64,

    #[serde(default = "default_other_cost_rate")]
    pub other_cost_rate: f64,

    #[serde(default = "default_profit_margin")]
    pub profit_margin: f64,

    #[serde(default = "default_true")]
    pub hazmat_requires_class_a: bool,

    #[serde(default)]
    pub hazmat_min_years: Option<u32>,

    #[serde(default)]
    pub long_haul_min_years: Option<u32>,

    #[serde(default = "default_oversized_min_years")]
    pub oversized_min_years: Option<u32>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_speed() -> f64 {
    AVERAGE_SPEED_MPH
}

fn default_fuel_price() -> f64 {
    FUEL_PRICE_PER_GALLON
}

fn default_mpg() -> f64 {
    AVERAGE_MPG
}

fn default_other_cost_rate() -> f64 {
    OTHER_COST_RATE
}

fn default_profit_margin() -> f64 {
    PROFIT_MARGIN
}

fn default_oversized_min_years() -> Option<u32> {
    Some(OVERSIZED_MIN_YEARS)
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            fleet_path: None,
            speed_model: SpeedModel::Continuous,
            average_speed_mph: default_speed(),
            fuel_price_per_gallon: default_fuel_price(),
            average_mpg: default_mpg(),
            other_cost_rate: default_other_cost_rate(),
            profit_margin: default_profit_margin(),
            hazmat_requires_class_a: true,
            hazmat_min_years: None,
            long_haul_min_years: None,
            oversized_min_years: default_oversized_min_years(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("dispatch-checker");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Reject values the calculator cannot work with
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("average_speed_mph", self.average_speed_mph),
            ("average_mpg", self.average_mpg),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue(format!("{} must be > 0 (got {})", name, value)).into());
            }
        }

        let non_negative = [
            ("fuel_price_per_gallon", self.fuel_price_per_gallon),
            ("other_cost_rate", self.other_cost_rate),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue(format!("{} must be >= 0 (got {})", name, value)).into());
            }
        }

        if !self.profit_margin.is_finite() || self.profit_margin < 1.0 {
            return Err(ConfigError::InvalidValue(format!(
                "profit_margin must be >= 1.0 so revenue covers cost (got {})",
                self.profit_margin
            ))
            .into());
        }
        Ok(())
    }

    pub fn rule_set(&self) -> RuleSet {
        RuleSet {
            hazmat_requires_class_a: self.hazmat_requires_class_a,
            hazmat_min_years: self.hazmat_min_years,
            oversized_min_years: self.oversized_min_years,
            long_haul_min_years: self.long_haul_min_years,
        }
    }

    pub fn cost_rates(&self) -> CostRates {
        CostRates {
            fuel_price_per_gallon: self.fuel_price_per_gallon,
            average_mpg: self.average_mpg,
            other_cost_rate: self.other_cost_rate,
            profit_margin: self.profit_margin,
            average_speed_mph: self.average_speed_mph,
            speed_model: self.speed_model,
        }
    }
}

fn years(value: Option<u32>) -> String {
    value
        .map(|y| format!("{} years", y))
        .unwrap_or_else(|| "(none)".to_string())
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Dispatch Checker Configuration")?;
        writeln!(f, "==============================")?;
        writeln!(f)?;
        writeln!(f, "Output format:       {}", self.output_format)?;
        writeln!(
            f,
            "Fleet file:          {}",
            self.fleet_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string())
        )?;
        writeln!(f)?;
        writeln!(f, "Speed model:         {}", self.speed_model)?;
        writeln!(f, "Average speed:       {:.1} mph", self.average_speed_mph)?;
        writeln!(f, "Fuel price:          ${:.2}/gal", self.fuel_price_per_gallon)?;
        writeln!(f, "Fuel economy:        {:.1} mpg", self.average_mpg)?;
        writeln!(f, "Other costs:         ${:.2}/mi", self.other_cost_rate)?;
        writeln!(f, "Profit margin:       x{:.2}", self.profit_margin)?;
        writeln!(f)?;
        writeln!(f, "Hazmat needs A:      {}", self.hazmat_requires_class_a)?;
        writeln!(f, "Hazmat min exp:      {}", years(self.hazmat_min_years))?;
        writeln!(f, "Oversized min exp:   {}", years(self.oversized_min_years))?;
        writeln!(f, "Long haul min exp:   {}", years(self.long_haul_min_years))?;
        Ok(())
    }
}
