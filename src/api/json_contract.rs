use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DashError, DashResult};

use super::{Dashboard, SlotId, SlotState, UpdateBatch};

pub const UPDATE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Chart,
    Empty,
    Error,
}

/// Wire form of one slot: status plus a plotly figure (`{}` when blank).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotPayloadV1 {
    pub slot: SlotId,
    pub status: SlotStatus,
    pub figure: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SlotPayloadV1 {
    #[must_use]
    pub fn new(slot: SlotId, state: &SlotState) -> Self {
        let (status, error) = match state {
            SlotState::Chart(_) => (SlotStatus::Chart, None),
            SlotState::Empty => (SlotStatus::Empty, None),
            SlotState::Error(message) => (SlotStatus::Error, Some(message.clone())),
        };
        Self {
            slot,
            status,
            figure: state.figure(),
            error,
        }
    }
}

/// Versioned payload returned by the update and figures endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateContractV1 {
    pub schema_version: u32,
    pub revision: u64,
    pub slots: Vec<SlotPayloadV1>,
}

impl UpdateContractV1 {
    pub fn to_json_string(&self) -> DashResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json_str(input: &str) -> DashResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            DashError::InvalidData(format!("failed to parse update contract payload: {e}"))
        })?;
        if payload.schema_version != UPDATE_JSON_SCHEMA_V1 {
            return Err(DashError::InvalidData(format!(
                "unsupported update contract schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }

    #[must_use]
    pub fn slot(&self, slot: SlotId) -> Option<&SlotPayloadV1> {
        self.slots.iter().find(|payload| payload.slot == slot)
    }
}

impl UpdateBatch {
    #[must_use]
    pub fn to_json_contract_v1(&self) -> UpdateContractV1 {
        UpdateContractV1 {
            schema_version: UPDATE_JSON_SCHEMA_V1,
            revision: self.revision,
            slots: self
                .updates
                .iter()
                .map(|update| SlotPayloadV1::new(update.slot, &update.state))
                .collect(),
        }
    }
}

impl Dashboard {
    /// Every slot at the current revision, for page loads.
    #[must_use]
    pub fn figures_json_contract_v1(&self) -> UpdateContractV1 {
        UpdateContractV1 {
            schema_version: UPDATE_JSON_SCHEMA_V1,
            revision: self.revision(),
            slots: self
                .slots()
                .iter()
                .map(|(slot, state)| SlotPayloadV1::new(slot, state))
                .collect(),
        }
    }
}
