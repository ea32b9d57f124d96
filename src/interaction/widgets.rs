use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Dataset, Measure};

/// Slider increment, in years.
pub const YEAR_STEP: i32 = 5;

/// Countries preselected in the line chart, when present in the dataset.
pub const DEFAULT_COUNTRIES: [&str; 2] = ["United States", "China"];

/// Stable identifier of one input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ControlId {
    #[serde(rename = "country-dropdown")]
    Countries,
    #[serde(rename = "yaxis-dropdown")]
    YAxis,
    #[serde(rename = "bubble-x")]
    BubbleX,
    #[serde(rename = "bubble-y")]
    BubbleY,
    #[serde(rename = "bubble-size")]
    BubbleSize,
    #[serde(rename = "year-slider")]
    Year,
}

impl ControlId {
    pub const ALL: [Self; 6] = [
        Self::Countries,
        Self::YAxis,
        Self::BubbleX,
        Self::BubbleY,
        Self::BubbleSize,
        Self::Year,
    ];

    /// DOM id used by the shell and the update endpoint.
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Countries => "country-dropdown",
            Self::YAxis => "yaxis-dropdown",
            Self::BubbleX => "bubble-x",
            Self::BubbleY => "bubble-y",
            Self::BubbleSize => "bubble-size",
            Self::Year => "year-slider",
        }
    }

    pub(crate) const fn bit(self) -> u8 {
        match self {
            Self::Countries => 1 << 0,
            Self::YAxis => 1 << 1,
            Self::BubbleX => 1 << 2,
            Self::BubbleY => 1 << 3,
            Self::BubbleSize => 1 << 4,
            Self::Year => 1 << 5,
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Value carried by a control, shaped like the JSON the page sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    Year(i32),
    Choice(String),
    Selection(Vec<String>),
}

impl ControlValue {
    #[must_use]
    pub fn as_year(&self) -> Option<i32> {
        match self {
            Self::Year(year) => Some(*year),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(choice) => Some(choice.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            Self::Selection(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub(crate) const fn kind_name(&self) -> &'static str {
        match self {
            Self::Year(_) => "number",
            Self::Choice(_) => "string",
            Self::Selection(_) => "list",
        }
    }
}

/// One user interaction: a widget and its new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlChange {
    pub control: ControlId,
    pub value: ControlValue,
}

impl ControlChange {
    #[must_use]
    pub fn new(control: ControlId, value: ControlValue) -> Self {
        Self { control, value }
    }

    #[must_use]
    pub fn countries<S: Into<String>>(countries: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            ControlId::Countries,
            ControlValue::Selection(countries.into_iter().map(Into::into).collect()),
        )
    }

    #[must_use]
    pub fn measure(control: ControlId, measure: Measure) -> Self {
        Self::new(control, ControlValue::Choice(measure.field().to_owned()))
    }

    #[must_use]
    pub fn year(year: i32) -> Self {
        Self::new(ControlId::Year, ControlValue::Year(year))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetKind {
    Dropdown,
    Slider {
        min: i32,
        max: i32,
        step: i32,
        /// One labelled mark per distinct dataset year.
        marks: Vec<i32>,
    },
}

/// Declarative description of one input widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub id: ControlId,
    pub label: String,
    pub kind: WidgetKind,
    pub options: Vec<ControlOption>,
    pub multi: bool,
    pub default: ControlValue,
}

impl WidgetConfig {
    fn measure_dropdown(id: ControlId, label: &str, default: Measure) -> Self {
        Self {
            id,
            label: label.to_owned(),
            kind: WidgetKind::Dropdown,
            options: Measure::ALL
                .into_iter()
                .map(|measure| ControlOption {
                    label: measure.label().to_owned(),
                    value: measure.field().to_owned(),
                })
                .collect(),
            multi: false,
            default: ControlValue::Choice(default.field().to_owned()),
        }
    }

    #[must_use]
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

/// Builds the six dashboard widgets, options derived from `dataset`.
#[must_use]
pub fn standard_widgets(dataset: &Dataset) -> Vec<WidgetConfig> {
    let default_countries: Vec<String> = DEFAULT_COUNTRIES
        .iter()
        .filter(|country| dataset.contains_country(country))
        .map(|country| (*country).to_owned())
        .collect();

    vec![
        WidgetConfig {
            id: ControlId::Countries,
            label: "Select countries".to_owned(),
            kind: WidgetKind::Dropdown,
            options: dataset
                .distinct_countries()
                .iter()
                .map(|country| ControlOption {
                    label: country.clone(),
                    value: country.clone(),
                })
                .collect(),
            multi: true,
            default: ControlValue::Selection(default_countries),
        },
        WidgetConfig::measure_dropdown(ControlId::YAxis, "Y-axis measure", Measure::GdpPerCapita),
        WidgetConfig::measure_dropdown(
            ControlId::BubbleX,
            "X measure (bubble)",
            Measure::GdpPerCapita,
        ),
        WidgetConfig::measure_dropdown(
            ControlId::BubbleY,
            "Y measure (bubble)",
            Measure::LifeExpectancy,
        ),
        WidgetConfig::measure_dropdown(
            ControlId::BubbleSize,
            "Size measure (bubble)",
            Measure::Population,
        ),
        WidgetConfig {
            id: ControlId::Year,
            label: "Select year".to_owned(),
            kind: WidgetKind::Slider {
                min: dataset.min_year(),
                max: dataset.max_year(),
                step: YEAR_STEP,
                marks: dataset.distinct_years().to_vec(),
            },
            options: Vec::new(),
            multi: false,
            default: ControlValue::Year(dataset.min_year()),
        },
    ]
}
