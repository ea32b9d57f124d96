use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Measure;
use crate::error::DashError;

/// Continent grouping used by the dataset; variants sort alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Continent {
    pub const ALL: [Self; 5] = [
        Self::Africa,
        Self::Americas,
        Self::Asia,
        Self::Europe,
        Self::Oceania,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Continent {
    type Err = DashError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|continent| continent.name() == value)
            .ok_or_else(|| DashError::InvalidData(format!("unknown continent `{value}`")))
    }
}

/// One (country, year) observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub country: String,
    pub continent: Continent,
    pub year: i32,
    pub population: u64,
    pub gdp_per_capita: f64,
    pub life_expectancy: f64,
}

impl Record {
    #[must_use]
    pub fn new(
        country: impl Into<String>,
        continent: Continent,
        year: i32,
        population: u64,
        gdp_per_capita: f64,
        life_expectancy: f64,
    ) -> Self {
        Self {
            country: country.into(),
            continent,
            year,
            population,
            gdp_per_capita,
            life_expectancy,
        }
    }

    /// Value of the numeric field behind `measure`.
    #[must_use]
    pub fn value(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Population => self.population as f64,
            Measure::GdpPerCapita => self.gdp_per_capita,
            Measure::LifeExpectancy => self.life_expectancy,
        }
    }
}
