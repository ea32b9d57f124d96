//! gapminder-dash: a reactive Gapminder dashboard.
//!
//! Controls feed an explicit dependency table; each binding re-renders its
//! chart slots from the shared, read-only dataset. Charts are emitted as
//! plotly figures and drawn in the browser.

pub mod api;
pub mod charts;
pub mod config;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "server")]
pub mod server;

pub use api::{Dashboard, SlotId, SlotState, UpdateBatch};
pub use config::{DashboardConfig, DatasetSource};
pub use error::{DashError, DashResult};
