//! Reactive engine: control changes in, recomputed chart slots out.

mod dependency;
mod json_contract;
mod slots;

pub use dependency::{
    Binding, BindingHandler, DependencyGraph, InputSet, InputValues, LINE_BINDING, SlotOutputs,
    YEAR_OVERVIEW_BINDING,
};
pub use json_contract::{SlotPayloadV1, SlotStatus, UPDATE_JSON_SCHEMA_V1, UpdateContractV1};
pub use slots::{SlotId, SlotState, SlotTable};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::Dataset;
use crate::error::DashResult;
use crate::interaction::{ControlChange, ControlPanel, ControlState};

/// New state of one slot within an update batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotUpdate {
    pub slot: SlotId,
    pub state: SlotState,
}

/// Result of processing one control change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBatch {
    pub revision: u64,
    pub updates: Vec<SlotUpdate>,
}

impl UpdateBatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    #[must_use]
    pub fn touches(&self, slot: SlotId) -> bool {
        self.updates.iter().any(|update| update.slot == slot)
    }

    #[must_use]
    pub fn state(&self, slot: SlotId) -> Option<&SlotState> {
        self.updates
            .iter()
            .find(|update| update.slot == slot)
            .map(|update| &update.state)
    }
}

/// One dashboard session: dataset, controls, dependency table and slots.
///
/// Events are processed one at a time to completion; callers that share a
/// dashboard across tasks serialize access (the server holds it behind a
/// mutex).
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    panel: ControlPanel,
    graph: DependencyGraph,
    slots: SlotTable,
    revision: u64,
    recomputations: Vec<u64>,
}

impl Dashboard {
    /// Builds the session with the standard bindings and renders every slot.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_graph(dataset, DependencyGraph::standard())
    }

    #[must_use]
    pub fn with_graph(dataset: Arc<Dataset>, graph: DependencyGraph) -> Self {
        let panel = ControlPanel::new(&dataset);
        let recomputations = vec![0; graph.bindings().len()];
        let mut dashboard = Self {
            dataset,
            panel,
            graph,
            slots: SlotTable::default(),
            revision: 0,
            recomputations,
        };
        dashboard.refresh_all();
        dashboard
    }

    #[must_use]
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    #[must_use]
    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    #[must_use]
    pub fn state(&self) -> &ControlState {
        self.panel.state()
    }

    #[must_use]
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    #[must_use]
    pub fn slot(&self, slot: SlotId) -> &SlotState {
        self.slots.state(slot)
    }

    #[must_use]
    pub fn slots(&self) -> &SlotTable {
        &self.slots
    }

    /// Revision of the most recent update batch.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// How many times the named binding has been recomputed.
    #[must_use]
    pub fn recompute_count(&self, binding: &str) -> u64 {
        self.graph
            .bindings()
            .iter()
            .position(|candidate| candidate.name() == binding)
            .map_or(0, |index| self.recomputations[index])
    }

    /// Applies a user interaction and recomputes the bindings that declare it.
    ///
    /// An unchanged value recomputes nothing and returns an empty batch at the
    /// current revision. Invalid values are rejected without touching state.
    pub fn apply(&mut self, change: &ControlChange) -> DashResult<UpdateBatch> {
        if !self.panel.apply(change)? {
            return Ok(UpdateBatch {
                revision: self.revision,
                updates: Vec::new(),
            });
        }

        let affected: Vec<usize> = self.graph.affected_by(change.control).collect();
        Ok(self.recompute(&affected))
    }

    /// Recomputes every binding.
    pub fn refresh_all(&mut self) -> UpdateBatch {
        let all: Vec<usize> = (0..self.graph.bindings().len()).collect();
        self.recompute(&all)
    }

    fn recompute(&mut self, binding_indices: &[usize]) -> UpdateBatch {
        self.revision += 1;
        let revision = self.revision;
        let mut updates = Vec::new();

        for &index in binding_indices {
            let binding = &self.graph.bindings()[index];
            debug!(binding = binding.name(), revision, "recomputing binding");
            let outputs = binding.evaluate(&self.dataset, self.panel.state());
            self.recomputations[index] += 1;

            for (slot, state) in outputs {
                if let Some(message) = state.error() {
                    warn!(slot = %slot, revision, error = message, "slot render failed");
                }
                if self.slots.commit(slot, revision, state.clone()) {
                    updates.push(SlotUpdate { slot, state });
                }
            }
        }

        UpdateBatch { revision, updates }
    }
}
