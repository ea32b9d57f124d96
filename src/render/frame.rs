use crate::api::{Dashboard, SlotId, SlotState, SlotTable};
use crate::error::{DashError, DashResult};
use crate::interaction::{ControlId, ControlState, WidgetConfig};
use crate::render::ShellLayout;

/// Everything a backend needs for one full page render.
#[derive(Debug, Clone, Copy)]
pub struct ShellFrame<'a> {
    pub layout: &'a ShellLayout,
    pub widgets: &'a [WidgetConfig],
    pub state: &'a ControlState,
    pub slots: &'a SlotTable,
    pub revision: u64,
}

impl<'a> ShellFrame<'a> {
    #[must_use]
    pub fn from_dashboard(layout: &'a ShellLayout, dashboard: &'a Dashboard) -> Self {
        Self {
            layout,
            widgets: dashboard.panel().widgets(),
            state: dashboard.state(),
            slots: dashboard.slots(),
            revision: dashboard.revision(),
        }
    }

    #[must_use]
    pub fn widget(&self, id: ControlId) -> Option<&'a WidgetConfig> {
        self.widgets.iter().find(|widget| widget.id == id)
    }

    #[must_use]
    pub fn slot(&self, slot: SlotId) -> &'a SlotState {
        self.slots.state(slot)
    }

    /// Checks the layout against the widget set.
    pub fn validate(&self) -> DashResult<()> {
        if self.layout.title.trim().is_empty() {
            return Err(DashError::InvalidData(
                "shell title must not be empty".to_owned(),
            ));
        }

        let mut seen_controls = Vec::new();
        for control in self.layout.controls() {
            if self.widget(control).is_none() {
                return Err(DashError::InvalidData(format!(
                    "layout references unknown control `{control}`"
                )));
            }
            if seen_controls.contains(&control) {
                return Err(DashError::InvalidData(format!(
                    "control `{control}` placed twice"
                )));
            }
            seen_controls.push(control);
        }

        let mut seen_slots = Vec::new();
        for slot in self.layout.slots() {
            if seen_slots.contains(&slot) {
                return Err(DashError::InvalidData(format!("slot `{slot}` placed twice")));
            }
            seen_slots.push(slot);
        }

        Ok(())
    }
}
