use crate::api::SlotId;
use crate::error::DashResult;
use crate::render::{Renderer, ShellFrame};

/// No-op renderer used by tests and headless sessions.
///
/// It still validates the frame so layout mistakes surface without a browser.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_control_count: usize,
    pub last_chart_count: usize,
    pub last_error_slots: Vec<SlotId>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ShellFrame<'_>) -> DashResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_control_count = frame.layout.controls().count();
        self.last_chart_count = frame
            .layout
            .slots()
            .filter(|&slot| frame.slot(slot).chart().is_some())
            .count();
        self.last_error_slots = frame
            .layout
            .slots()
            .filter(|&slot| frame.slot(slot).is_error())
            .collect();
        Ok(())
    }
}
