use serde::{Deserialize, Serialize};

use crate::api::SlotId;
use crate::interaction::ControlId;

pub const DEFAULT_TITLE: &str = "Comparing countries and continents (Gapminder)";
pub const LOGO_SRC: &str = "/assets/logo.png";
pub const LOGO_FILE: &str = "logo.png";

/// Static page composition: header, two control columns, 2x2 chart grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellLayout {
    pub logo_src: String,
    pub logo_height_px: u32,
    pub title: String,
    pub left_controls: Vec<ControlId>,
    pub right_controls: Vec<ControlId>,
    /// Rows of chart slots, top to bottom.
    pub chart_grid: [[SlotId; 2]; 2],
}

impl ShellLayout {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            logo_src: LOGO_SRC.to_owned(),
            logo_height_px: 60,
            title: DEFAULT_TITLE.to_owned(),
            left_controls: vec![ControlId::Countries, ControlId::YAxis],
            right_controls: vec![
                ControlId::BubbleX,
                ControlId::BubbleY,
                ControlId::BubbleSize,
                ControlId::Year,
            ],
            chart_grid: [[SlotId::Line, SlotId::Bubble], [SlotId::Bar, SlotId::Pie]],
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.left_controls
            .iter()
            .chain(self.right_controls.iter())
            .copied()
    }

    pub fn slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.chart_grid.iter().flat_map(|row| row.iter().copied())
    }
}

impl Default for ShellLayout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::ShellLayout;
    use crate::api::SlotId;
    use crate::interaction::ControlId;

    #[test]
    fn standard_layout_places_every_control_and_slot_once() {
        let layout = ShellLayout::standard();

        let mut controls: Vec<ControlId> = layout.controls().collect();
        controls.sort();
        assert_eq!(controls, ControlId::ALL.to_vec());

        let mut slots: Vec<SlotId> = layout.slots().collect();
        slots.sort();
        assert_eq!(slots, SlotId::ALL.to_vec());
    }
}
