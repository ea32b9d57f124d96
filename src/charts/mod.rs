//! Chart renderers: pure functions from dataset + control values to chart specs.
//!
//! Every renderer is deterministic. Calling one twice with the same inputs
//! yields equal `ChartSpec` values and identical plotly JSON.

mod bar;
mod bubble;
mod line;
mod pie;

pub use bar::{TOP_COUNTRIES, render_bar};
pub use bubble::{BUBBLE_SIZE_MAX, render_bubble};
pub use line::render_line;
pub use pie::render_pie;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bubble,
    Bar,
    Pie,
}

/// One line series: year on x, a measure on y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTrace {
    pub name: String,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
}

/// Scatter points with per-point marker size and hover label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleTrace {
    pub labels: Vec<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub sizes: Vec<f64>,
    pub size_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Line(LineTrace),
    Bubble(BubbleTrace),
    Bar(BarTrace),
    Pie(PieTrace),
}

impl Trace {
    fn to_plotly(&self) -> Value {
        match self {
            Self::Line(trace) => json!({
                "type": "scatter",
                "mode": "lines",
                "name": trace.name,
                "legendgroup": trace.name,
                "x": trace.x,
                "y": trace.y,
            }),
            Self::Bubble(trace) => {
                let largest = trace.sizes.iter().copied().fold(0.0_f64, f64::max);
                let size_ref = if largest > 0.0 {
                    2.0 * largest / (trace.size_max * trace.size_max)
                } else {
                    1.0
                };
                json!({
                    "type": "scatter",
                    "mode": "markers",
                    "x": trace.x,
                    "y": trace.y,
                    "hovertext": trace.labels,
                    "marker": {
                        "size": trace.sizes,
                        "sizemode": "area",
                        "sizeref": size_ref,
                    },
                })
            }
            Self::Bar(trace) => json!({
                "type": "bar",
                "x": trace.categories,
                "y": trace.values,
            }),
            Self::Pie(trace) => json!({
                "type": "pie",
                "labels": trace.labels,
                "values": trace.values,
            }),
        }
    }
}

/// Renderable description of one chart slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    #[must_use]
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            x_title: None,
            y_title: None,
            traces: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.x_title = Some(x_title.into());
        self.y_title = Some(y_title.into());
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.traces.push(trace);
        self
    }

    /// Line traces, in series order.
    pub fn line_traces(&self) -> impl Iterator<Item = &LineTrace> {
        self.traces.iter().filter_map(|trace| match trace {
            Trace::Line(line) => Some(line),
            _ => None,
        })
    }

    #[must_use]
    pub fn bubble_trace(&self) -> Option<&BubbleTrace> {
        self.traces.iter().find_map(|trace| match trace {
            Trace::Bubble(bubble) => Some(bubble),
            _ => None,
        })
    }

    #[must_use]
    pub fn bar_trace(&self) -> Option<&BarTrace> {
        self.traces.iter().find_map(|trace| match trace {
            Trace::Bar(bar) => Some(bar),
            _ => None,
        })
    }

    #[must_use]
    pub fn pie_trace(&self) -> Option<&PieTrace> {
        self.traces.iter().find_map(|trace| match trace {
            Trace::Pie(pie) => Some(pie),
            _ => None,
        })
    }

    /// Plotly figure object (`{data, layout}`) consumed by `Plotly.react`.
    #[must_use]
    pub fn to_plotly_figure(&self) -> Value {
        let data: Vec<Value> = self.traces.iter().map(Trace::to_plotly).collect();

        let mut layout = json!({
            "title": { "text": self.title },
        });
        if let Some(x_title) = &self.x_title {
            layout["xaxis"] = json!({ "title": { "text": x_title } });
        }
        if let Some(y_title) = &self.y_title {
            layout["yaxis"] = json!({ "title": { "text": y_title } });
        }
        if self.kind == ChartKind::Line {
            layout["legend"] = json!({ "title": { "text": "country" } });
        }

        json!({ "data": data, "layout": layout })
    }
}
