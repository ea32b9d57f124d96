use tracing::trace;

use crate::charts::{ChartKind, ChartSpec, LineTrace, Trace};
use crate::core::{Dataset, Measure, rows_by_country};
use crate::error::DashResult;

/// Renders the country dynamics line chart.
///
/// Returns `Ok(None)` for an empty selection: the slot stays blank and no
/// error is raised. Otherwise emits one series per selected country that has
/// rows, in dataset order.
pub fn render_line(
    dataset: &Dataset,
    countries: &[String],
    y_field: &str,
) -> DashResult<Option<ChartSpec>> {
    if countries.is_empty() {
        return Ok(None);
    }
    let measure = Measure::from_field(y_field)?;

    let groups = rows_by_country(dataset.records(), countries);
    let mut spec = ChartSpec::new(
        ChartKind::Line,
        format!("Dynamics of {} by country", measure.field()),
    )
    .with_axis_titles("year", measure.field());

    for (country, rows) in groups {
        let (x, y): (Vec<i32>, Vec<f64>) = rows
            .iter()
            .map(|record| (record.year, record.value(measure)))
            .unzip();
        spec = spec.with_trace(Trace::Line(LineTrace {
            name: country.to_owned(),
            x,
            y,
        }));
    }

    trace!(series = spec.traces.len(), measure = %measure, "line chart rendered");
    Ok(Some(spec))
}
