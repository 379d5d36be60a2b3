use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use runtools::export::{self, ExportFormat};
use runtools::{validate_time, CalculationRequest, Calculator, ZoneCalculator};
use rust_decimal_macros::dec;

/// Benchmarks for the calculator core
///
/// Every calculation is tiny; these exist to catch accidental regressions
/// such as repeated allocation in the zone table.

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Time Validation");

    for input in ["45:00", "1:02:03", "12:75", "not a time"] {
        group.bench_with_input(BenchmarkId::new("validate_time", input), &input, |b, input| {
            b.iter(|| validate_time(black_box(input), true));
        });
    }

    group.finish();
}

fn bench_zone_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Zone Calculation");

    group.bench_function("calculate_zones", |b| {
        b.iter(|| ZoneCalculator::calculate_zones(black_box(dec!(240))));
    });

    group.bench_function("zone_request", |b| {
        let request = CalculationRequest::Zone {
            time_10k: "40:00".to_string(),
        };
        b.iter(|| Calculator::compute(black_box(&request)));
    });

    group.finish();
}

fn bench_session_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("Session");

    for &size in &[10usize, 100, 1000] {
        let requests = create_request_mix(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("calculate", size), &requests, |b, requests| {
            b.iter(|| {
                let mut calculator = Calculator::new();
                for request in requests {
                    let _ = calculator.calculate(request.clone());
                }
            });
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("Export");
    let result = Calculator::compute(&CalculationRequest::Zone {
        time_10k: "40:00".to_string(),
    })
    .expect("valid benchmark input");

    for format in [ExportFormat::Text, ExportFormat::Json, ExportFormat::Csv] {
        group.bench_with_input(
            BenchmarkId::new("render", format),
            &format,
            |b, &format| {
                b.iter(|| export::render(black_box(&result), format));
            },
        );
    }

    group.finish();
}

fn create_request_mix(size: usize) -> Vec<CalculationRequest> {
    (0..size)
        .map(|i| {
            let minutes = 30 + i % 40;
            match i % 4 {
                0 => CalculationRequest::Zone {
                    time_10k: format!("{}:{:02}", minutes, i % 60),
                },
                1 => CalculationRequest::Pace {
                    distance: "21.0975".to_string(),
                    time: format!("1:{:02}:00", minutes),
                },
                2 => CalculationRequest::Time {
                    distance: "10".to_string(),
                    pace: format!("{}:{:02}", 3 + i % 4, i % 60),
                },
                _ => CalculationRequest::Distance {
                    time: format!("{}:00", minutes),
                    pace: "5:15".to_string(),
                },
            }
        })
        .collect()
}

criterion_group!(
    benches,
    bench_validation,
    bench_zone_calculation,
    bench_session_throughput,
    bench_export
);
criterion_main!(benches);
