use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::charts::ChartSpec;
use crate::error::DashResult;

/// One of the four chart areas in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SlotId {
    #[serde(rename = "line-chart")]
    Line,
    #[serde(rename = "bubble-chart")]
    Bubble,
    #[serde(rename = "bar-chart")]
    Bar,
    #[serde(rename = "pie-chart")]
    Pie,
}

impl SlotId {
    pub const ALL: [Self; 4] = [Self::Line, Self::Bubble, Self::Bar, Self::Pie];

    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Line => "line-chart",
            Self::Bubble => "bubble-chart",
            Self::Bar => "bar-chart",
            Self::Pie => "pie-chart",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// What a slot currently shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum SlotState {
    /// Nothing to draw; not an error.
    #[default]
    Empty,
    Chart(ChartSpec),
    /// Render failure isolated to this slot.
    Error(String),
}

impl SlotState {
    #[must_use]
    pub fn from_result(result: DashResult<ChartSpec>) -> Self {
        match result {
            Ok(spec) => Self::Chart(spec),
            Err(err) => Self::Error(err.to_string()),
        }
    }

    #[must_use]
    pub fn from_optional(result: DashResult<Option<ChartSpec>>) -> Self {
        match result {
            Ok(Some(spec)) => Self::Chart(spec),
            Ok(None) => Self::Empty,
            Err(err) => Self::Error(err.to_string()),
        }
    }

    #[must_use]
    pub fn chart(&self) -> Option<&ChartSpec> {
        match self {
            Self::Chart(spec) => Some(spec),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Plotly figure for the slot; `{}` when there is no chart.
    #[must_use]
    pub fn figure(&self) -> Value {
        match self {
            Self::Chart(spec) => spec.to_plotly_figure(),
            Self::Empty | Self::Error(_) => json!({}),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SlotEntry {
    state: SlotState,
    revision: u64,
}

/// Latest state per slot, guarded by revision.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotTable {
    entries: IndexMap<SlotId, SlotEntry>,
}

impl Default for SlotTable {
    fn default() -> Self {
        Self {
            entries: SlotId::ALL
                .into_iter()
                .map(|slot| {
                    (
                        slot,
                        SlotEntry {
                            state: SlotState::Empty,
                            revision: 0,
                        },
                    )
                })
                .collect(),
        }
    }
}

impl SlotTable {
    /// Stores `state` unless the slot already holds a newer revision.
    ///
    /// Returns whether the state was accepted.
    pub fn commit(&mut self, slot: SlotId, revision: u64, state: SlotState) -> bool {
        let entry = self.entries.entry(slot).or_insert_with(|| SlotEntry {
            state: SlotState::Empty,
            revision: 0,
        });
        if revision < entry.revision {
            return false;
        }
        entry.state = state;
        entry.revision = revision;
        true
    }

    #[must_use]
    pub fn state(&self, slot: SlotId) -> &SlotState {
        static EMPTY: SlotState = SlotState::Empty;
        self.entries.get(&slot).map_or(&EMPTY, |entry| &entry.state)
    }

    #[must_use]
    pub fn revision(&self, slot: SlotId) -> u64 {
        self.entries.get(&slot).map_or(0, |entry| entry.revision)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &SlotState)> + '_ {
        self.entries
            .iter()
            .map(|(slot, entry)| (*slot, &entry.state))
    }
}
