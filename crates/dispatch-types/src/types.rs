//! Closed enumerations shared by every layer

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Driver license level (ClassC < ClassB < ClassA)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum LicenseLevel {
    #[serde(alias = "C", alias = "class-c", alias = "classc")]
    #[value(name = "c", alias = "class-c")]
    ClassC,
    #[serde(alias = "B", alias = "class-b", alias = "classb")]
    #[value(name = "b", alias = "class-b")]
    ClassB,
    #[serde(alias = "A", alias = "class-a", alias = "classa")]
    #[value(name = "a", alias = "class-a")]
    ClassA,
}

impl LicenseLevel {
    pub const ALL: [LicenseLevel; 3] = [LicenseLevel::ClassC, LicenseLevel::ClassB, LicenseLevel::ClassA];

    /// Position in the license order, lowest first
    pub fn rank(&self) -> u8 {
        match self {
            LicenseLevel::ClassC => 0,
            LicenseLevel::ClassB => 1,
            LicenseLevel::ClassA => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LicenseLevel::ClassC => "Class C",
            LicenseLevel::ClassB => "Class B",
            LicenseLevel::ClassA => "Class A",
        }
    }
}

impl Ord for LicenseLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for LicenseLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LicenseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LicenseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "a" | "classa" => Ok(LicenseLevel::ClassA),
            "b" | "classb" => Ok(LicenseLevel::ClassB),
            "c" | "classc" => Ok(LicenseLevel::ClassC),
            _ => Err(format!("unknown license level: {}", s)),
        }
    }
}

/// Truck weight class (Light < Medium < Heavy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum TruckClass {
    #[serde(alias = "light")]
    Light,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "heavy")]
    Heavy,
}

impl TruckClass {
    pub const ALL: [TruckClass; 3] = [TruckClass::Light, TruckClass::Medium, TruckClass::Heavy];

    /// Position in the weight order, lightest first
    pub fn rank(&self) -> u8 {
        match self {
            TruckClass::Light => 0,
            TruckClass::Medium => 1,
            TruckClass::Heavy => 2,
        }
    }

    /// Minimum license level needed to drive this class
    pub fn required_license(&self) -> LicenseLevel {
        match self {
            TruckClass::Heavy => LicenseLevel::ClassA,
            TruckClass::Medium => LicenseLevel::ClassB,
            TruckClass::Light => LicenseLevel::ClassC,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TruckClass::Light => "Light",
            TruckClass::Medium => "Medium",
            TruckClass::Heavy => "Heavy",
        }
    }
}

impl Ord for TruckClass {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for TruckClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TruckClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TruckClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "light" => Ok(TruckClass::Light),
            "medium" => Ok(TruckClass::Medium),
            "heavy" => Ok(TruckClass::Heavy),
            _ => Err(format!("unknown truck class: {}", s)),
        }
    }
}

/// Route category, drives pay bonuses and experience requirements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum RouteType {
    #[default]
    #[serde(alias = "standard")]
    Standard,
    #[serde(alias = "hazmat")]
    Hazmat,
    #[serde(alias = "oversized")]
    Oversized,
    #[serde(alias = "long-haul", alias = "longhaul", alias = "long_haul")]
    LongHaul,
}

impl RouteType {
    pub const ALL: [RouteType; 4] = [
        RouteType::Standard,
        RouteType::Hazmat,
        RouteType::Oversized,
        RouteType::LongHaul,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RouteType::Standard => "Standard",
            RouteType::Hazmat => "Hazmat",
            RouteType::Oversized => "Oversized",
            RouteType::LongHaul => "Long Haul",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RouteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "standard" => Ok(RouteType::Standard),
            "hazmat" => Ok(RouteType::Hazmat),
            "oversized" => Ok(RouteType::Oversized),
            "longhaul" => Ok(RouteType::LongHaul),
            _ => Err(format!("unknown route type: {}", s)),
        }
    }
}

/// How drive time is derived from distance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SpeedModel {
    /// Fractional hours at the average speed
    #[default]
    Continuous,
    /// Hours rounded up to the next whole hour
    WholeHours,
}

impl fmt::Display for SpeedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedModel::Continuous => write!(f, "continuous"),
            SpeedModel::WholeHours => write!(f, "whole-hours"),
        }
    }
}

/// Lowercase and strip separators so "Class-A", "class_a" and "ClassA" agree
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
