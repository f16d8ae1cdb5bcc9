//! Estimation engine benchmarks.
//!
//! Run with: `cargo bench --package cantina-bench`

use cantina_bench::{OrderShape, reference_times};
use cantina_lib::{Estimator, PredictionPayload, SystemClock, VendorProfiles};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Order shapes covering single items up to large group orders.
fn order_shapes() -> Vec<(&'static str, OrderShape)> {
    vec![
        ("single", OrderShape::new(1, 1)),
        ("small", OrderShape::new(3, 2)),
        ("group", OrderShape::new(8, 4)),
        ("catering", OrderShape::new(64, 10)),
    ]
}

fn predict_benchmark(c: &mut Criterion) {
    let estimator = Estimator::default();
    let times = reference_times();

    let mut group = c.benchmark_group("predict");

    for (name, shape) in order_shapes() {
        let order = shape.build();
        group.throughput(Throughput::Elements(order.len() as u64));

        group.bench_with_input(BenchmarkId::new("order", name), &order, |b, order| {
            let mut i = 0usize;
            b.iter(|| {
                let reference = times[i % times.len()];
                i += 1;
                estimator
                    .predict(black_box(order), black_box(reference), black_box(7))
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn payload_benchmark(c: &mut Criterion) {
    let json = r#"{
        "vendor_id": "main-canteen",
        "order_items": [
            {"food_item_id": "masala-dosa", "quantity": 2, "base_prep_time": 8},
            {"food_item_id": "filter-coffee", "quantity": 2, "base_prep_time": 3},
            {"food_item_id": "vada", "quantity": 4, "base_prep_time": 4}
        ],
        "current_time": "2024-03-04T12:10:00+05:30",
        "current_queue_length": 9
    }"#;

    c.bench_function("payload_to_prediction", |b| {
        b.iter(|| {
            let payload: PredictionPayload = serde_json::from_str(black_box(json)).unwrap();
            let request = payload.resolve(&SystemClock).unwrap();
            let config = VendorProfiles::global().resolve(payload.vendor_id.as_deref());
            Estimator::new(config.clone())
                .predict_request(&request)
                .unwrap()
        });
    });
}

criterion_group!(benches, predict_benchmark, payload_benchmark);
criterion_main!(benches);
