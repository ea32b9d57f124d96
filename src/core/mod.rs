pub mod dataset;
pub mod measure;
pub mod types;
pub mod windowing;

pub use dataset::Dataset;
pub use measure::Measure;
pub use types::{Continent, Record};
pub use windowing::{
    population_by_continent, rows_by_country, rows_in_year, top_rows_by,
};
