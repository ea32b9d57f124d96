use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::{Continent, Record};

/// Returns rows observed in `year`, preserving dataset order.
#[must_use]
pub fn rows_in_year(records: &[Record], year: i32) -> Vec<&Record> {
    records.iter().filter(|record| record.year == year).collect()
}

/// Groups rows of the selected countries, keyed by first appearance in
/// `records`.
///
/// The order of `countries` does not matter and countries without rows are
/// left out. Rows inside a group keep dataset order, which is ascending by
/// year for gapminder extracts.
#[must_use]
pub fn rows_by_country<'a>(
    records: &'a [Record],
    countries: &[String],
) -> IndexMap<&'a str, Vec<&'a Record>> {
    let selected: HashSet<&str> = countries.iter().map(String::as_str).collect();
    let mut groups: IndexMap<&str, Vec<&Record>> = IndexMap::with_capacity(selected.len());

    for record in records {
        if selected.contains(record.country.as_str()) {
            groups.entry(record.country.as_str()).or_default().push(record);
        }
    }

    groups
}

/// Returns at most `n` rows with the largest `key`, descending.
///
/// Ties keep their original relative order.
#[must_use]
pub fn top_rows_by<'a, F>(rows: &[&'a Record], n: usize, key: F) -> Vec<&'a Record>
where
    F: Fn(&Record) -> f64,
{
    let mut ranked = rows.to_vec();
    ranked.sort_by_key(|record| Reverse(OrderedFloat(key(*record))));
    ranked.truncate(n);
    ranked
}

/// Sums population per continent, continents in alphabetical order.
#[must_use]
pub fn population_by_continent(rows: &[&Record]) -> BTreeMap<Continent, u64> {
    let mut totals = BTreeMap::new();
    for record in rows {
        *totals.entry(record.continent).or_insert(0u64) += record.population;
    }
    totals
}
