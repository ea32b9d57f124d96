use crate::charts::{BarTrace, ChartKind, ChartSpec, Trace};
use crate::core::{Dataset, Measure, rows_in_year, top_rows_by};
use crate::error::DashResult;

/// Number of bars in the population ranking.
pub const TOP_COUNTRIES: usize = 15;

/// Renders the most populous countries of `year`, largest first.
pub fn render_bar(dataset: &Dataset, year: i32) -> DashResult<ChartSpec> {
    let rows = rows_in_year(dataset.records(), year);
    let top = top_rows_by(&rows, TOP_COUNTRIES, |record| {
        record.value(Measure::Population)
    });

    let trace = BarTrace {
        categories: top.iter().map(|record| record.country.clone()).collect(),
        values: top.iter().map(|record| record.population as f64).collect(),
    };

    Ok(ChartSpec::new(
        ChartKind::Bar,
        format!("Top {TOP_COUNTRIES} countries by population in {year}"),
    )
    .with_axis_titles("country", Measure::Population.field())
    .with_trace(Trace::Bar(trace)))
}
