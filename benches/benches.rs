use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use offset_contours::polygon::{OffsetOptions, OffsetPolygon};
mod test_rings;
use test_rings::*;

fn bench_margin(b: &mut Bencher, polygon: &OffsetPolygon<f64>) {
    b.iter(|| {
        polygon.margin(2.0).unwrap();
    })
}

fn bench_padding(b: &mut Bencher, polygon: &OffsetPolygon<f64>) {
    b.iter(|| {
        polygon.padding(2.0).unwrap();
    })
}

fn bench_offset_both(b: &mut Bencher, polygon: &OffsetPolygon<f64>) {
    b.iter(|| {
        polygon.offset_both(2.0).unwrap();
    })
}

fn polygon_offset_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_offset");
    let vertex_counts = &[8, 32, 128];
    for &i in vertex_counts {
        group.bench_with_input(BenchmarkId::new("star_margin", i), &i, |b, i| {
            bench_margin(b, &OffsetPolygon::new(star_ring(*i), OffsetOptions::new()))
        });
        group.bench_with_input(BenchmarkId::new("star_padding", i), &i, |b, i| {
            bench_padding(b, &OffsetPolygon::new(star_ring(*i), OffsetOptions::new()))
        });
        group.bench_with_input(BenchmarkId::new("star_offset_both", i), &i, |b, i| {
            bench_offset_both(b, &OffsetPolygon::new(star_ring(*i), OffsetOptions::new()))
        });
    }

    group.finish();
}

criterion_group!(polygon_offset, polygon_offset_group,);
criterion_main!(polygon_offset);
