use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use std::sync::Arc;
use stockbook_inventory::{InventoryStore, Product};
use stockbook_reports::ReportEngine;
use stockbook_sales::SaleLedger;

/// Inventory of `products` items with ample stock and `sales_per_product` sales each.
fn setup(products: usize, sales_per_product: usize) -> ReportEngine {
    let inventory = Arc::new(InventoryStore::new());
    for i in 0..products {
        inventory
            .add_product(Product::new(
                format!("P{i:05}"),
                format!("Product {i}"),
                1.0 + i as f64,
                i64::MAX / 2,
            ))
            .unwrap();
    }
    let ledger = Arc::new(SaleLedger::new(Arc::clone(&inventory)));
    for round in 0..sales_per_product {
        for i in 0..products {
            ledger
                .record_sale(&format!("P{i:05}"), 1 + (round % 3) as i64)
                .unwrap();
        }
    }
    ReportEngine::for_ledger(ledger)
}

fn bench_record_sale(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_sale");
    group.throughput(Throughput::Elements(1));

    for products in [10usize, 1_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(products), products, |b, &products| {
            let inventory = Arc::new(InventoryStore::new());
            for i in 0..products {
                inventory
                    .add_product(Product::new(format!("P{i:05}"), "item", 2.5, i64::MAX / 2))
                    .unwrap();
            }
            let ledger = SaleLedger::new(inventory);
            let last = format!("P{:05}", products - 1);

            b.iter(|| {
                ledger.record_sale(black_box(&last), black_box(1)).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("reports");

    for (products, sales) in [(10usize, 10usize), (100, 50), (1_000, 10)].iter() {
        let engine = setup(*products, *sales);
        let label = format!("{products}x{sales}");

        group.bench_function(BenchmarkId::new("total_revenue", &label), |b| {
            b.iter(|| black_box(engine.total_revenue()));
        });
        group.bench_function(BenchmarkId::new("top_selling_product", &label), |b| {
            b.iter(|| black_box(engine.top_selling_product()));
        });
        group.bench_function(BenchmarkId::new("out_of_stock_products", &label), |b| {
            b.iter(|| black_box(engine.out_of_stock_products()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_record_sale, bench_reports);
criterion_main!(benches);
