use crate::charts::{BubbleTrace, ChartKind, ChartSpec, Trace};
use crate::core::{Dataset, Measure, rows_in_year};
use crate::error::{DashError, DashResult};

/// Largest marker diameter in pixels.
pub const BUBBLE_SIZE_MAX: f64 = 20.0;

/// Renders one point per country observed in `year`.
pub fn render_bubble(
    dataset: &Dataset,
    year: i32,
    x_field: &str,
    y_field: &str,
    size_field: &str,
) -> DashResult<ChartSpec> {
    let x_measure = Measure::from_field(x_field)?;
    let y_measure = Measure::from_field(y_field)?;
    let size_measure = Measure::from_field(size_field)?;

    let rows = rows_in_year(dataset.records(), year);
    let mut trace = BubbleTrace {
        labels: Vec::with_capacity(rows.len()),
        x: Vec::with_capacity(rows.len()),
        y: Vec::with_capacity(rows.len()),
        sizes: Vec::with_capacity(rows.len()),
        size_max: BUBBLE_SIZE_MAX,
    };

    for record in rows {
        let size = record.value(size_measure);
        if !size.is_finite() || size < 0.0 {
            return Err(DashError::Render(format!(
                "bubble size for {} must be finite and >= 0, got {size}",
                record.country
            )));
        }
        trace.labels.push(record.country.clone());
        trace.x.push(record.value(x_measure));
        trace.y.push(record.value(y_measure));
        trace.sizes.push(size);
    }

    Ok(
        ChartSpec::new(ChartKind::Bubble, format!("Bubble chart for {year}"))
            .with_axis_titles(x_measure.field(), y_measure.field())
            .with_trace(Trace::Bubble(trace)),
    )
}
