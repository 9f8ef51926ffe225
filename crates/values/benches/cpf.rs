use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use keel_core::Formattable;
use keel_values::{Cpf, CpfFormatter};

fn parse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpf_parse");
    for input in ["11458201660", "114.582.016-60"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| Cpf::parse(black_box(input)))
        });
    }
    group.finish();
}

fn projection_benchmarks(c: &mut Criterion) {
    let cpf = match Cpf::parse("11458201660") {
        Ok(cpf) => cpf,
        Err(e) => panic!("benchmark fixture failed to parse: {e}"),
    };
    c.bench_function("cpf_formatted", |b| b.iter(|| black_box(&cpf).formatted()));
    c.bench_function("cpf_equals_str", |b| {
        b.iter(|| black_box(&cpf).equals_str(black_box("114.582.016-60")))
    });
}

fn formatter_build_benchmark(c: &mut Criterion) {
    c.bench_function("cpf_formatter_build", |b| b.iter(CpfFormatter::build));
}

criterion_group!(
    benches,
    parse_benchmarks,
    projection_benchmarks,
    formatter_build_benchmark
);
criterion_main!(benches);
