//! Control panel: widget descriptions and the state they drive.

mod panel;
mod widgets;

pub use panel::{ControlPanel, ControlState};
pub use widgets::{
    ControlChange, ControlId, ControlOption, ControlValue, DEFAULT_COUNTRIES, WidgetConfig,
    WidgetKind, YEAR_STEP, standard_widgets,
};
