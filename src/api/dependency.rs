use std::fmt;

use indexmap::IndexMap;
use smallvec::{SmallVec, smallvec};

use crate::api::{SlotId, SlotState};
use crate::charts::{ChartSpec, render_bar, render_bubble, render_line, render_pie};
use crate::core::Dataset;
use crate::error::{DashError, DashResult};
use crate::interaction::{ControlId, ControlState, ControlValue};

/// Bitmask of control ids, used to match a change against binding inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSet {
    bits: u8,
}

impl InputSet {
    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn from_control(control: ControlId) -> Self {
        Self {
            bits: control.bit(),
        }
    }

    #[must_use]
    pub const fn with_control(self, control: ControlId) -> Self {
        Self {
            bits: self.bits | control.bit(),
        }
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        (self.bits & other.bits) != 0
    }

    #[must_use]
    pub const fn contains(self, control: ControlId) -> bool {
        self.intersects(Self::from_control(control))
    }
}

impl FromIterator<ControlId> for InputSet {
    fn from_iter<I: IntoIterator<Item = ControlId>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::none(), |set, control| set.with_control(control))
    }
}

/// Current values of exactly the inputs a binding declared, in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputValues {
    values: IndexMap<ControlId, ControlValue>,
}

impl InputValues {
    #[must_use]
    pub fn project(state: &ControlState, inputs: &[ControlId]) -> Self {
        Self {
            values: inputs
                .iter()
                .map(|&control| (control, state.value(control)))
                .collect(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, control: ControlId, value: ControlValue) -> Self {
        self.values.insert(control, value);
        self
    }

    #[must_use]
    pub fn get(&self, control: ControlId) -> Option<&ControlValue> {
        self.values.get(&control)
    }

    pub fn controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.values.keys().copied()
    }

    fn require(&self, control: ControlId) -> DashResult<&ControlValue> {
        self.get(control)
            .ok_or_else(|| DashError::MissingInput(control.dom_id().to_owned()))
    }

    pub fn year(&self, control: ControlId) -> DashResult<i32> {
        let value = self.require(control)?;
        value.as_year().ok_or_else(|| {
            DashError::Render(format!("input `{control}` is not a year"))
        })
    }

    pub fn choice(&self, control: ControlId) -> DashResult<&str> {
        let value = self.require(control)?;
        value.as_choice().ok_or_else(|| {
            DashError::Render(format!("input `{control}` is not a single choice"))
        })
    }

    pub fn selection(&self, control: ControlId) -> DashResult<&[String]> {
        let value = self.require(control)?;
        value.as_selection().ok_or_else(|| {
            DashError::Render(format!("input `{control}` is not a selection"))
        })
    }
}

/// Fresh state for each output slot of a binding.
pub type SlotOutputs = SmallVec<[(SlotId, SlotState); 4]>;

/// Handler invoked with the dataset and the binding's declared inputs.
pub type BindingHandler = fn(&Dataset, &InputValues) -> SlotOutputs;

/// One row of the dependency table: outputs recomputed together from inputs.
#[derive(Clone)]
pub struct Binding {
    name: &'static str,
    outputs: SmallVec<[SlotId; 4]>,
    inputs: SmallVec<[ControlId; 4]>,
    input_set: InputSet,
    handler: BindingHandler,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name)
            .field("outputs", &self.outputs)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}

impl Binding {
    #[must_use]
    pub fn new(
        name: &'static str,
        outputs: &[SlotId],
        inputs: &[ControlId],
        handler: BindingHandler,
    ) -> Self {
        Self {
            name,
            outputs: SmallVec::from_slice(outputs),
            inputs: SmallVec::from_slice(inputs),
            input_set: inputs.iter().copied().collect(),
            handler,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn outputs(&self) -> &[SlotId] {
        &self.outputs
    }

    #[must_use]
    pub fn inputs(&self) -> &[ControlId] {
        &self.inputs
    }

    #[must_use]
    pub fn depends_on(&self, control: ControlId) -> bool {
        self.input_set.contains(control)
    }

    /// Runs the handler against the current `state`.
    #[must_use]
    pub fn evaluate(&self, dataset: &Dataset, state: &ControlState) -> SlotOutputs {
        self.evaluate_inputs(dataset, &InputValues::project(state, &self.inputs))
    }

    /// Runs the handler with explicit input values.
    ///
    /// Outputs the handler did not produce are reported as slot errors.
    #[must_use]
    pub fn evaluate_inputs(&self, dataset: &Dataset, inputs: &InputValues) -> SlotOutputs {
        let mut produced = (self.handler)(dataset, inputs);
        produced.retain(|(slot, _)| self.outputs.contains(slot));
        for &slot in &self.outputs {
            if !produced.iter().any(|(produced_slot, _)| *produced_slot == slot) {
                produced.push((
                    slot,
                    SlotState::Error(format!("binding `{}` produced no output", self.name)),
                ));
            }
        }
        produced
    }
}

/// Explicit `{outputs <- inputs}` table built at startup.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    bindings: Vec<Binding>,
}

impl DependencyGraph {
    pub fn new(bindings: Vec<Binding>) -> DashResult<Self> {
        for slot in SlotId::ALL {
            let owners = bindings
                .iter()
                .filter(|binding| binding.outputs.contains(&slot))
                .count();
            if owners > 1 {
                return Err(DashError::InvalidData(format!(
                    "slot `{slot}` is produced by {owners} bindings"
                )));
            }
        }
        Ok(Self { bindings })
    }

    /// The dashboard table: the line chart follows the country selection and
    /// y-measure; bubble, bar and pie share one year-filtered recomputation.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bindings: vec![
                Binding::new(
                    LINE_BINDING,
                    &[SlotId::Line],
                    &[ControlId::Countries, ControlId::YAxis],
                    line_handler,
                ),
                Binding::new(
                    YEAR_OVERVIEW_BINDING,
                    &[SlotId::Bubble, SlotId::Bar, SlotId::Pie],
                    &[
                        ControlId::Year,
                        ControlId::BubbleX,
                        ControlId::BubbleY,
                        ControlId::BubbleSize,
                    ],
                    year_overview_handler,
                ),
            ],
        }
    }

    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Indices of bindings that declare `control` as an input.
    pub fn affected_by(&self, control: ControlId) -> impl Iterator<Item = usize> + '_ {
        self.bindings
            .iter()
            .enumerate()
            .filter(move |(_, binding)| binding.depends_on(control))
            .map(|(index, _)| index)
    }

    #[must_use]
    pub fn binding_for(&self, slot: SlotId) -> Option<&Binding> {
        self.bindings
            .iter()
            .find(|binding| binding.outputs.contains(&slot))
    }
}

pub const LINE_BINDING: &str = "line";
pub const YEAR_OVERVIEW_BINDING: &str = "year-overview";

fn line_handler(dataset: &Dataset, inputs: &InputValues) -> SlotOutputs {
    let rendered = inputs.selection(ControlId::Countries).and_then(|countries| {
        let y_field = inputs.choice(ControlId::YAxis)?;
        render_line(dataset, countries, y_field)
    });
    smallvec![(SlotId::Line, SlotState::from_optional(rendered))]
}

fn year_overview_handler(dataset: &Dataset, inputs: &InputValues) -> SlotOutputs {
    let year = match inputs.year(ControlId::Year) {
        Ok(year) => year,
        Err(err) => {
            let message = err.to_string();
            return [SlotId::Bubble, SlotId::Bar, SlotId::Pie]
                .into_iter()
                .map(|slot| (slot, SlotState::Error(message.clone())))
                .collect();
        }
    };

    smallvec![
        (SlotId::Bubble, SlotState::from_result(bubble_chart(dataset, year, inputs))),
        (SlotId::Bar, SlotState::from_result(render_bar(dataset, year))),
        (SlotId::Pie, SlotState::from_result(render_pie(dataset, year))),
    ]
}

fn bubble_chart(dataset: &Dataset, year: i32, inputs: &InputValues) -> DashResult<ChartSpec> {
    render_bubble(
        dataset,
        year,
        inputs.choice(ControlId::BubbleX)?,
        inputs.choice(ControlId::BubbleY)?,
        inputs.choice(ControlId::BubbleSize)?,
    )
}
