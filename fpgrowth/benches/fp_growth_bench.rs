use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fpgrowth::fp::transactions_from_matrix;
use fpgrowth::{find_with_config, GrowthConfig, ItemOrder};
use ndarray::Array2;
use rand::Rng;

/// Generate synthetic transaction data as column-index lists.
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: How dense the data is (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Vec<usize>> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.r#gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    let matrix = Array2::from_shape_vec((num_transactions, num_items), data).unwrap();
    transactions_from_matrix(matrix.view())
}

fn min_count(fraction: f64, num_transactions: usize) -> usize {
    ((fraction * num_transactions as f64).ceil() as usize).max(1)
}

fn mine_all(transactions: &[Vec<usize>], config: &GrowthConfig) -> usize {
    find_with_config(transactions, config).unwrap().count()
}

/// Benchmark FP-Growth with different dataset sizes
fn bench_fp_growth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        let config = GrowthConfig::new(min_count(0.1, num_tx));

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| mine_all(black_box(tx), black_box(&config)));
        });
    }

    group.finish();
}

/// Benchmark FP-Growth with different min_support thresholds
fn bench_fp_growth_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_min_support");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        let config = GrowthConfig::new(min_count(min_sup, transactions.len()));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &config,
            |b, config| {
                b.iter(|| mine_all(black_box(&transactions), black_box(config)));
            },
        );
    }

    group.finish();
}

/// Benchmark how projection order affects tree compactness and mining time
fn bench_fp_growth_item_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_item_order");

    let transactions = generate_transactions(1000, 50, 10, 0.7);
    let orders = vec![
        ("encountered", ItemOrder::Encountered),
        ("support", ItemOrder::Support),
        ("ranked", ItemOrder::Ranked),
    ];

    for (name, order) in orders {
        let config = GrowthConfig::new(min_count(0.1, transactions.len())).with_item_order(order);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| mine_all(black_box(&transactions), black_box(config)));
        });
    }

    group.finish();
}

/// Benchmark FP-Growth with different data densities
fn bench_fp_growth_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_density");

    let densities = vec![
        ("sparse_30", 0.3),
        ("medium_50", 0.5),
        ("dense_70", 0.7),
        ("very_dense_90", 0.9),
    ];

    for (name, density) in densities {
        let transactions = generate_transactions(1000, 50, 10, density);
        let config = GrowthConfig::new(min_count(0.1, transactions.len()));

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| mine_all(black_box(tx), black_box(&config)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fp_growth_scaling,
    bench_fp_growth_min_support,
    bench_fp_growth_item_order,
    bench_fp_growth_density
);
criterion_main!(benches);
