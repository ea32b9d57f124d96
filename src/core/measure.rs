use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};

/// Numeric record field selectable from the measure dropdowns.
///
/// Controls carry the dataset column name (`pop`, `gdpPercap`, `lifeExp`) as
/// their value; the display label is only used for option text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    #[serde(rename = "pop")]
    Population,
    #[serde(rename = "gdpPercap")]
    GdpPerCapita,
    #[serde(rename = "lifeExp")]
    LifeExpectancy,
}

impl Measure {
    /// Dropdown order.
    pub const ALL: [Self; 3] = [Self::Population, Self::GdpPerCapita, Self::LifeExpectancy];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Population => "Population",
            Self::GdpPerCapita => "GDP per Capita",
            Self::LifeExpectancy => "Life Expectancy",
        }
    }

    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Population => "pop",
            Self::GdpPerCapita => "gdpPercap",
            Self::LifeExpectancy => "lifeExp",
        }
    }

    pub fn from_field(field: &str) -> DashResult<Self> {
        Self::ALL
            .into_iter()
            .find(|measure| measure.field() == field)
            .ok_or_else(|| DashError::UnknownMeasure(field.to_owned()))
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

impl FromStr for Measure {
    type Err = DashError;

    fn from_str(field: &str) -> Result<Self, Self::Err> {
        Self::from_field(field)
    }
}
