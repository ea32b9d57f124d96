use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Dataset, Measure};
use crate::error::{DashError, DashResult};
use crate::interaction::{
    ControlChange, ControlId, ControlValue, DEFAULT_COUNTRIES, WidgetConfig, WidgetKind,
    standard_widgets,
};

/// Current value of every control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    /// Selection order, no duplicates.
    pub countries: Vec<String>,
    pub y_measure: Measure,
    pub bubble_x: Measure,
    pub bubble_y: Measure,
    pub bubble_size: Measure,
    pub year: i32,
}

impl ControlState {
    /// Default selections for `dataset`.
    #[must_use]
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            countries: DEFAULT_COUNTRIES
                .iter()
                .filter(|country| dataset.contains_country(country))
                .map(|country| (*country).to_owned())
                .collect(),
            y_measure: Measure::GdpPerCapita,
            bubble_x: Measure::GdpPerCapita,
            bubble_y: Measure::LifeExpectancy,
            bubble_size: Measure::Population,
            year: dataset.min_year(),
        }
    }

    /// Current value of `control`, in wire shape.
    #[must_use]
    pub fn value(&self, control: ControlId) -> ControlValue {
        let measure = |measure: Measure| ControlValue::Choice(measure.field().to_owned());
        match control {
            ControlId::Countries => ControlValue::Selection(self.countries.clone()),
            ControlId::YAxis => measure(self.y_measure),
            ControlId::BubbleX => measure(self.bubble_x),
            ControlId::BubbleY => measure(self.bubble_y),
            ControlId::BubbleSize => measure(self.bubble_size),
            ControlId::Year => ControlValue::Year(self.year),
        }
    }
}

/// Owns the widget set and the `ControlState` it drives.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    widgets: Vec<WidgetConfig>,
    state: ControlState,
}

impl ControlPanel {
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            widgets: standard_widgets(dataset),
            state: ControlState::initial(dataset),
        }
    }

    #[must_use]
    pub fn widgets(&self) -> &[WidgetConfig] {
        &self.widgets
    }

    #[must_use]
    pub fn widget(&self, id: ControlId) -> Option<&WidgetConfig> {
        self.widgets.iter().find(|widget| widget.id == id)
    }

    #[must_use]
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Validates `change` and writes it into the one matching state field.
    ///
    /// Returns `Ok(false)` when the value equals the current one. A rejected
    /// change leaves the state untouched.
    pub fn apply(&mut self, change: &ControlChange) -> DashResult<bool> {
        let control = change.control;
        let widget = self
            .widgets
            .iter()
            .find(|widget| widget.id == control)
            .ok_or_else(|| DashError::invalid_control(control.dom_id(), "widget not registered"))?;

        let result = match control {
            ControlId::Countries => validate_selection(widget, &change.value)
                .map(|countries| replace(&mut self.state.countries, countries)),
            ControlId::YAxis => validate_measure(widget, &change.value)
                .map(|measure| replace(&mut self.state.y_measure, measure)),
            ControlId::BubbleX => validate_measure(widget, &change.value)
                .map(|measure| replace(&mut self.state.bubble_x, measure)),
            ControlId::BubbleY => validate_measure(widget, &change.value)
                .map(|measure| replace(&mut self.state.bubble_y, measure)),
            ControlId::BubbleSize => validate_measure(widget, &change.value)
                .map(|measure| replace(&mut self.state.bubble_size, measure)),
            ControlId::Year => validate_year(widget, &change.value)
                .map(|year| replace(&mut self.state.year, year)),
        };

        match &result {
            Ok(changed) => debug!(control = %control, changed, "control change applied"),
            Err(err) => warn!(control = %control, error = %err, "control change rejected"),
        }
        result
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn kind_mismatch(widget: &WidgetConfig, expected: &str, value: &ControlValue) -> DashError {
    DashError::invalid_control(
        widget.id.dom_id(),
        format!("expected {expected}, got {}", value.kind_name()),
    )
}

fn validate_selection(widget: &WidgetConfig, value: &ControlValue) -> DashResult<Vec<String>> {
    let items = value
        .as_selection()
        .ok_or_else(|| kind_mismatch(widget, "list", value))?;

    let mut selected: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !widget.has_option(item) {
            return Err(DashError::invalid_control(
                widget.id.dom_id(),
                format!("`{item}` is not an available option"),
            ));
        }
        if !selected.contains(item) {
            selected.push(item.clone());
        }
    }
    if !widget.multi && selected.len() > 1 {
        return Err(DashError::invalid_control(
            widget.id.dom_id(),
            "widget accepts a single selection",
        ));
    }
    Ok(selected)
}

fn validate_measure(widget: &WidgetConfig, value: &ControlValue) -> DashResult<Measure> {
    let field = value
        .as_choice()
        .ok_or_else(|| kind_mismatch(widget, "string", value))?;
    if !widget.has_option(field) {
        return Err(DashError::invalid_control(
            widget.id.dom_id(),
            format!("`{field}` is not an available option"),
        ));
    }
    Measure::from_field(field)
}

fn validate_year(widget: &WidgetConfig, value: &ControlValue) -> DashResult<i32> {
    let year = value
        .as_year()
        .ok_or_else(|| kind_mismatch(widget, "number", value))?;
    match &widget.kind {
        WidgetKind::Slider { marks, .. } if marks.contains(&year) => Ok(year),
        WidgetKind::Slider { .. } => Err(DashError::invalid_control(
            widget.id.dom_id(),
            format!("{year} is not a dataset year"),
        )),
        WidgetKind::Dropdown => Err(DashError::invalid_control(
            widget.id.dom_id(),
            "year control must be a slider",
        )),
    }
}
