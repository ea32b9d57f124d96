//! Presentation shell: static layout and the backends that draw it.

mod frame;
mod html;
mod layout;
mod null_renderer;

pub use frame::ShellFrame;
pub use html::{HtmlRenderer, PLOTLY_JS_URL, UPDATE_ENDPOINT};
pub use layout::{DEFAULT_TITLE, LOGO_FILE, LOGO_SRC, ShellLayout};
pub use null_renderer::NullRenderer;

use crate::error::DashResult;

/// Contract implemented by any shell backend.
///
/// Backends receive a fully materialized `ShellFrame`, so markup code stays
/// isolated from control validation and chart computation.
pub trait Renderer {
    fn render(&mut self, frame: &ShellFrame<'_>) -> DashResult<()>;
}
