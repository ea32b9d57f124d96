use std::fmt::Write as _;

use crate::api::{SlotPayloadV1, UPDATE_JSON_SCHEMA_V1, UpdateContractV1};
use crate::error::{DashError, DashResult};
use crate::interaction::{ControlState, ControlValue, WidgetConfig, WidgetKind};
use crate::render::{Renderer, ShellFrame};

pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const UPDATE_ENDPOINT: &str = "/api/update";

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0 16px; }
h1 { text-align: center; }
.controls { width: 48%; display: inline-block; vertical-align: top; }
.controls.right { float: right; }
.controls label { display: block; margin-top: 8px; }
.controls select { width: 100%; }
.chart { width: 48%; display: inline-block; min-height: 450px; }
.slot-error { color: #b00020; font-family: monospace; }
";

// Page-side half of the update loop: post one change, redraw returned slots.
// Responses can arrive out of order, so a slot is never redrawn from a
// contract older than the one it already shows.
const SCRIPT: &str = r#"
const drawnRevisions = {};
function drawSlot(payload, revision) {
  if ((drawnRevisions[payload.slot] || 0) > revision) {
    return;
  }
  drawnRevisions[payload.slot] = revision;
  const errorBox = document.getElementById(payload.slot + "-error");
  errorBox.textContent = payload.status === "error" ? payload.error : "";
  const figure = payload.figure || {};
  Plotly.react(payload.slot, figure.data || [], figure.layout || {});
}
function drawContract(contract) {
  contract.slots.forEach((payload) => drawSlot(payload, contract.revision));
}
function readControl(element) {
  if (element.type === "range") {
    return Number(element.value);
  }
  if (element.multiple) {
    return Array.from(element.selectedOptions).map((option) => option.value);
  }
  return element.value;
}
async function sendChange(element) {
  if (element.type === "range") {
    document.getElementById(element.id + "-value").textContent = element.value;
  }
  const response = await fetch(UPDATE_ENDPOINT, {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({ control: element.id, value: readControl(element) }),
  });
  const body = await response.json();
  if (!response.ok) {
    console.warn(body.error);
    return;
  }
  drawContract(body);
}
document.querySelectorAll("[data-control]").forEach((element) => {
  element.addEventListener("change", () => sendChange(element));
});
drawContract(INITIAL_FIGURES);
"#;

/// Renders the shell as one self-contained HTML document.
///
/// Charts are drawn client-side by plotly.js; the initial figures are
/// embedded so the first paint needs no extra request.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    document: String,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered document.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    fn write_document(frame: &ShellFrame<'_>) -> Result<String, std::fmt::Error> {
        let layout = frame.layout;
        let mut out = String::with_capacity(16 * 1024);

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", escape(&layout.title))?;
        writeln!(out, "<script src=\"{PLOTLY_JS_URL}\"></script>")?;
        writeln!(out, "<style>\n{STYLE}</style>\n</head>\n<body>")?;
        writeln!(
            out,
            "<img src=\"{}\" alt=\"logo\" style=\"height:{}px; display:block; margin:0 auto\">",
            escape(&layout.logo_src),
            layout.logo_height_px
        )?;
        writeln!(out, "<h1>{}</h1>", escape(&layout.title))?;

        for (class, controls) in [
            ("controls left", &layout.left_controls),
            ("controls right", &layout.right_controls),
        ] {
            writeln!(out, "<div class=\"{class}\">")?;
            for &control in controls {
                if let Some(widget) = frame.widget(control) {
                    write_widget(&mut out, widget, frame.state)?;
                }
            }
            writeln!(out, "</div>")?;
        }

        for slot in layout.slots() {
            writeln!(
                out,
                "<div class=\"chart\"><div id=\"{id}\"></div><div id=\"{id}-error\" class=\"slot-error\"></div></div>",
                id = slot.dom_id()
            )?;
        }

        writeln!(out, "<script>")?;
        writeln!(out, "const UPDATE_ENDPOINT = \"{UPDATE_ENDPOINT}\";")?;
        Ok(out)
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, frame: &ShellFrame<'_>) -> DashResult<()> {
        frame.validate()?;

        let contract = UpdateContractV1 {
            schema_version: UPDATE_JSON_SCHEMA_V1,
            revision: frame.revision,
            slots: frame
                .layout
                .slots()
                .map(|slot| SlotPayloadV1::new(slot, frame.slot(slot)))
                .collect(),
        };
        // `</` inside an inline script would close the element early.
        let initial = contract.to_json_string()?.replace("</", "<\\/");

        let mut document = Self::write_document(frame)
            .map_err(|e| DashError::Render(format!("failed to write shell markup: {e}")))?;
        document.push_str("const INITIAL_FIGURES = ");
        document.push_str(&initial);
        document.push_str(";\n");
        document.push_str(SCRIPT);
        document.push_str("</script>\n</body>\n</html>\n");

        self.document = document;
        Ok(())
    }
}

fn write_widget(out: &mut String, widget: &WidgetConfig, state: &ControlState) -> std::fmt::Result {
    let id = widget.id.dom_id();
    writeln!(out, "<label for=\"{id}\">{}</label>", escape(&widget.label))?;

    match &widget.kind {
        WidgetKind::Dropdown => {
            let current = state.value(widget.id);
            let multiple = if widget.multi { " multiple size=\"8\"" } else { "" };
            writeln!(out, "<select id=\"{id}\" data-control{multiple}>")?;
            for option in &widget.options {
                let selected = match &current {
                    ControlValue::Selection(items) => items.contains(&option.value),
                    ControlValue::Choice(choice) => *choice == option.value,
                    ControlValue::Year(_) => false,
                };
                writeln!(
                    out,
                    "<option value=\"{}\"{}>{}</option>",
                    escape(&option.value),
                    if selected { " selected" } else { "" },
                    escape(&option.label)
                )?;
            }
            writeln!(out, "</select>")?;
        }
        WidgetKind::Slider {
            min,
            max,
            step,
            marks,
        } => {
            writeln!(
                out,
                "<input type=\"range\" id=\"{id}\" data-control min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{}\" list=\"{id}-marks\">",
                state.year
            )?;
            writeln!(out, "<output id=\"{id}-value\">{}</output>", state.year)?;
            writeln!(out, "<datalist id=\"{id}-marks\">")?;
            for mark in marks {
                writeln!(out, "<option value=\"{mark}\" label=\"{mark}\"></option>")?;
            }
            writeln!(out, "</datalist>")?;
        }
    }
    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
