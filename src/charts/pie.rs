use crate::charts::{ChartKind, ChartSpec, PieTrace, Trace};
use crate::core::{Dataset, population_by_continent, rows_in_year};
use crate::error::DashResult;

/// Renders population share per continent for `year`.
pub fn render_pie(dataset: &Dataset, year: i32) -> DashResult<ChartSpec> {
    let rows = rows_in_year(dataset.records(), year);
    let totals = population_by_continent(&rows);

    let trace = PieTrace {
        labels: totals.keys().map(|continent| continent.name().to_owned()).collect(),
        values: totals.values().map(|&total| total as f64).collect(),
    };

    Ok(ChartSpec::new(
        ChartKind::Pie,
        format!("Population distribution by continent in {year}"),
    )
    .with_trace(Trace::Pie(trace)))
}
