use gapminder_dash::DashError;
use gapminder_dash::core::{Continent, Dataset, Measure, Record};

#[test]
fn bundled_dataset_loads_with_cached_views() {
    let dataset = Dataset::load().expect("bundled dataset");

    assert_eq!(dataset.len(), 360);
    assert_eq!(dataset.distinct_countries().len(), 30);
    assert_eq!(dataset.min_year(), 1952);
    assert_eq!(dataset.max_year(), 2007);
    assert_eq!(
        dataset.distinct_years(),
        &[1952, 1957, 1962, 1967, 1972, 1977, 1982, 1987, 1992, 1997, 2002, 2007]
    );
    assert!(dataset.contains_country("United States"));
    assert!(dataset.contains_country("Congo, Dem. Rep."));
    assert!(!dataset.contains_year(1953));
}

#[test]
fn bundled_dataset_keeps_anchor_values() {
    let dataset = Dataset::load().expect("bundled dataset");
    let china_1952 = dataset
        .records()
        .iter()
        .find(|record| record.country == "China" && record.year == 1952)
        .expect("china 1952");

    assert_eq!(china_1952.continent, Continent::Asia);
    assert_eq!(china_1952.population, 556_263_527);
    assert!((china_1952.value(Measure::LifeExpectancy) - 44.0).abs() <= 1e-9);
}

#[test]
fn csv_columns_may_come_in_any_order() {
    let csv = "\
year,country,pop,continent,gdpPercap,lifeExp
2002,Chad,8835739,Africa,1156.18,50.525
1997,Chad,7562011,Africa,1004.96,51.573
";
    let dataset = Dataset::from_csv_str(csv).expect("parse");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.distinct_years(), &[1997, 2002]);
    assert_eq!(dataset.records()[0].population, 8_835_739);
}

#[test]
fn population_written_as_float_is_accepted_when_integral() {
    let csv = "country,continent,year,lifeExp,pop,gdpPercap\nIndia,Asia,1952,37.373,372000000.0,546.5657\n";
    let dataset = Dataset::from_csv_str(csv).expect("parse");
    assert_eq!(dataset.records()[0].population, 372_000_000);
}

#[test]
fn malformed_csv_fails_to_load() {
    let cases = [
        "country,continent,year,lifeExp,pop,gdpPercap\n",
        "country,continent,year,lifeExp,pop,gdpPercap\nChad,Atlantis,2002,50.5,8835739,1156.18\n",
        "country,continent,year,lifeExp,pop,gdpPercap\nChad,Africa,twenty,50.5,8835739,1156.18\n",
        "country,continent,year,lifeExp,pop,gdpPercap\nChad,Africa,2002,50.5,88.5,1156.18\n",
        "country,continent,year,lifeExp,pop,gdpPercap\nChad,Africa,2002,50.5,1,1\nChad,Africa,2002,50.5,1,1\n",
    ];

    for csv in cases {
        let err = Dataset::from_csv_str(csv).expect_err("must fail");
        assert!(matches!(err, DashError::DataLoad(_)), "unexpected error: {err}");
    }
}

#[test]
fn missing_dataset_file_is_a_load_error() {
    let err = Dataset::from_csv_path("does/not/exist.csv").expect_err("must fail");
    assert!(matches!(err, DashError::DataLoad(_)));
}

#[test]
fn distinct_countries_follow_first_appearance() {
    let dataset = Dataset::from_records(vec![
        Record::new("Zambia", Continent::Africa, 1952, 10, 1.0, 40.0),
        Record::new("Albania", Continent::Europe, 1952, 20, 2.0, 50.0),
        Record::new("Zambia", Continent::Africa, 1957, 12, 1.5, 41.0),
    ])
    .expect("dataset");

    assert_eq!(dataset.distinct_countries(), &["Zambia", "Albania"]);
    assert_eq!(dataset.distinct_years(), &[1952, 1957]);
}

#[test]
fn non_finite_measures_are_rejected() {
    let err = Dataset::from_records(vec![Record::new(
        "Chad",
        Continent::Africa,
        2002,
        1,
        f64::NAN,
        50.0,
    )])
    .expect_err("must fail");
    assert!(matches!(err, DashError::InvalidData(_)));
}
