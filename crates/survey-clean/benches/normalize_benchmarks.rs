//! Normalization performance benchmarks.
//!
//! Measures the alias resolver on its own and the full pipeline across table
//! sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use survey_clean::geo::LAGOS_LGAS;
use survey_clean::schema::{
    AGE_SOURCE_COLUMN, FOODS_SOURCE_COLUMN, LGA_SOURCE_COLUMN, SWEATING_SOURCE_COLUMN,
};
use survey_clean::{standardize, SurveyCleaner, SurveyTable, REQUIRED_COLUMNS};

/// Raw LGA answers mixing canonical names, aliases and junk.
const RAW_ANSWERS: &[&str] = &[
    "Yaba", "  Ikeja ", "Ajah", "Ketu", "Oshodi  Isolo", "Eti - Osa", "Agboyi / Ketu",
    "Abuja", "", "Lagos Island",
];

/// Generate a synthetic survey with the specified number of rows.
fn generate_survey(rows: usize) -> SurveyTable {
    let headers: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
    let data = (0..rows)
        .map(|row| {
            headers
                .iter()
                .map(|h| match h.as_str() {
                    AGE_SOURCE_COLUMN => "25-34 years".to_string(),
                    LGA_SOURCE_COLUMN => match row % 3 {
                        0 => LAGOS_LGAS[row % LAGOS_LGAS.len()].to_string(),
                        _ => RAW_ANSWERS[row % RAW_ANSWERS.len()].to_string(),
                    },
                    FOODS_SOURCE_COLUMN => "Rice, Beans,Fish".to_string(),
                    SWEATING_SOURCE_COLUMN => "Yes".to_string(),
                    _ => String::new(),
                })
                .collect::<Vec<_>>()
        })
        .collect();
    SurveyTable::from_text_rows(headers, data)
}

/// Benchmark standardizing single answers.
fn bench_standardize(c: &mut Criterion) {
    let mut group = c.benchmark_group("standardize");

    for raw in RAW_ANSWERS {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{raw:?}")), raw, |b, raw| {
            b.iter(|| black_box(standardize(Some(*raw))))
        });
    }

    group.finish();
}

/// Benchmark the full pipeline over tables of various sizes.
fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");
    let cleaner = SurveyCleaner::new();

    for rows in [100, 1_000, 10_000].iter() {
        let table = generate_survey(*rows);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter_with_setup(|| table.clone(), |t| black_box(cleaner.clean(t).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_standardize, bench_clean);
criterion_main!(benches);
