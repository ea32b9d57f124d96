use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::core::{Continent, Record};
use crate::error::{DashError, DashResult};

/// Synthetic sample shipped with the crate, in the gapminder column layout.
///
/// 30 countries over the twelve five-year steps 1952..=2007. The 1952 and
/// 2007 rows approximate published gapminder values; the years between are
/// linearly interpolated and are not real observations. Load a full
/// gapminder export with [`Dataset::from_csv_path`] for real figures.
pub const BUNDLED_GAPMINDER_CSV: &str = include_str!("../../data/gapminder_sample.csv");

/// CSV row as it appears in gapminder exports.
#[derive(Debug, Deserialize)]
struct RawRecord {
    country: String,
    continent: String,
    year: i32,
    #[serde(rename = "lifeExp")]
    life_expectancy: f64,
    pop: f64,
    #[serde(rename = "gdpPercap")]
    gdp_per_capita: f64,
}

impl RawRecord {
    fn into_record(self, line: usize) -> DashResult<Record> {
        let continent: Continent = self
            .continent
            .parse()
            .map_err(|e| DashError::DataLoad(format!("row {line}: {e}")))?;

        if !self.pop.is_finite() || self.pop < 0.0 || self.pop.fract() != 0.0 {
            return Err(DashError::DataLoad(format!(
                "row {line}: population must be a non-negative integer, got {}",
                self.pop
            )));
        }

        Ok(Record {
            country: self.country,
            continent,
            year: self.year,
            population: self.pop as u64,
            gdp_per_capita: self.gdp_per_capita,
            life_expectancy: self.life_expectancy,
        })
    }
}

/// Immutable demographic dataset with cached distinct views.
///
/// Built once at startup and shared read-only (usually behind an `Arc`).
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    countries: Vec<String>,
    years: Vec<i32>,
}

impl Dataset {
    /// Parses the bundled synthetic sample (see [`BUNDLED_GAPMINDER_CSV`]).
    pub fn load() -> DashResult<Self> {
        let dataset = Self::from_csv_str(BUNDLED_GAPMINDER_CSV)?;
        info!(
            records = dataset.records.len(),
            countries = dataset.countries.len(),
            years = dataset.years.len(),
            "loaded bundled dataset"
        );
        Ok(dataset)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> DashResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            DashError::DataLoad(format!("cannot open `{}`: {e}", path.display()))
        })?;
        let dataset = Self::from_csv_reader(file)?;
        info!(
            path = %path.display(),
            records = dataset.records.len(),
            "loaded dataset from file"
        );
        Ok(dataset)
    }

    pub fn from_csv_str(input: &str) -> DashResult<Self> {
        Self::from_csv_reader(input.as_bytes())
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> DashResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
            // Header is line 1.
            let line = index + 2;
            let raw = row.map_err(|e| DashError::DataLoad(format!("row {line}: {e}")))?;
            records.push(raw.into_record(line)?);
        }

        Self::from_records(records).map_err(|e| match e {
            DashError::InvalidData(reason) => DashError::DataLoad(reason),
            other => other,
        })
    }

    pub fn from_records(records: Vec<Record>) -> DashResult<Self> {
        if records.is_empty() {
            return Err(DashError::InvalidData("dataset has no records".to_owned()));
        }

        let mut countries = Vec::new();
        let mut years = Vec::with_capacity(records.len());
        {
            let mut seen = HashSet::with_capacity(records.len());
            let mut known_countries = HashSet::new();
            for record in &records {
                if record.country.is_empty() {
                    return Err(DashError::InvalidData(
                        "country name must not be empty".to_owned(),
                    ));
                }
                for (field, value) in [
                    ("gdpPercap", record.gdp_per_capita),
                    ("lifeExp", record.life_expectancy),
                ] {
                    if !value.is_finite() || value < 0.0 {
                        return Err(DashError::InvalidData(format!(
                            "{field} for {} in {} must be finite and >= 0",
                            record.country, record.year
                        )));
                    }
                }
                if !seen.insert((record.country.as_str(), record.year)) {
                    return Err(DashError::InvalidData(format!(
                        "duplicate record for {} in {}",
                        record.country, record.year
                    )));
                }
                if known_countries.insert(record.country.as_str()) {
                    countries.push(record.country.clone());
                }
                years.push(record.year);
            }
        }

        years.sort_unstable();
        years.dedup();

        Ok(Self {
            records,
            countries,
            years,
        })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Countries in order of first appearance.
    #[must_use]
    pub fn distinct_countries(&self) -> &[String] {
        &self.countries
    }

    /// Years in ascending order.
    #[must_use]
    pub fn distinct_years(&self) -> &[i32] {
        &self.years
    }

    #[must_use]
    pub fn min_year(&self) -> i32 {
        self.years[0]
    }

    #[must_use]
    pub fn max_year(&self) -> i32 {
        self.years[self.years.len() - 1]
    }

    #[must_use]
    pub fn contains_country(&self, country: &str) -> bool {
        self.countries.iter().any(|known| known == country)
    }

    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }
}
