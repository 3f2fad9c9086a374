//! Performance benchmarks for the SuperMart engine.
//!
//! Covers the pure calculations on their own and the full HTTP path:
//! - Single tax split
//! - Aggregating carts of growing size
//! - Checkout request through the router
//! - Batch of 100 checkout requests
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use supermart_engine::api::{create_router, AppState};
use supermart_engine::calculation::{aggregate_line_items, compute_tax_split, score_password};
use supermart_engine::config::ConfigLoader;
use supermart_engine::models::{LineItem, TaxMode};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/kenya").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a cart of `count` lines with varied prices and tax rates.
fn create_items(count: usize) -> Vec<LineItem> {
    (0..count)
        .map(|i| {
            LineItem::new(
                format!("item_{:03}", i),
                Decimal::from(1 + (i % 5) as i64),
                Decimal::new(4999 + (i as i64) * 137, 2),
                if i % 3 == 0 { Decimal::ZERO } else { Decimal::from(16) },
            )
        })
        .collect()
}

/// Creates a checkout request body with `count` cart lines.
fn create_checkout_body(count: usize) -> String {
    let items: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "name": format!("product_{:03}", i),
                "quantity": 1 + i % 4,
                "unit_price": format!("{}.50", 40 + i * 3)
            })
        })
        .collect();

    serde_json::json!({ "items": items, "amount_tendered": 10000 }).to_string()
}

/// Benchmark: Single tax split in both modes.
fn bench_tax_split(c: &mut Criterion) {
    let amount = Decimal::new(123456, 2);
    let rate = Decimal::from(16);

    c.bench_function("tax_split_exclusive", |b| {
        b.iter(|| compute_tax_split(black_box(amount), black_box(rate), TaxMode::Exclusive))
    });
    c.bench_function("tax_split_inclusive", |b| {
        b.iter(|| compute_tax_split(black_box(amount), black_box(rate), TaxMode::Inclusive))
    });
}

/// Benchmark: Password scoring.
fn bench_password(c: &mut Criterion) {
    c.bench_function("score_password", |b| {
        b.iter(|| score_password(black_box("Duka-la-Mama-2024!")))
    });
}

/// Benchmark: Cart sizes to understand scaling behavior.
fn bench_aggregate_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_scaling");

    for count in [1, 10, 50, 200].iter() {
        let items = create_items(*count);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("items", count), &items, |b, items| {
            b.iter(|| aggregate_line_items(black_box(items)))
        });
    }

    group.finish();
}

/// Benchmark: Checkout request through the router.
fn bench_checkout_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_checkout_body(20);

    c.bench_function("checkout_20_lines", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/checkout")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 checkout requests.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100).map(|i| create_checkout_body(1 + i % 15)).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("checkout_batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/checkout")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tax_split,
    bench_password,
    bench_aggregate_scaling,
    bench_checkout_request,
    bench_batch_100,
);
criterion_main!(benches);
