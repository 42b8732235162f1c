use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use chrono::Utc;
use pantry_shelf_life::{AmbientConditions, ShelfLifeInputs, ShelfLifeProfile, estimate, try_estimate};

fn inputs(method: &str, opened: bool) -> ShelfLifeInputs {
    let purchased_at = Utc::now();
    ShelfLifeInputs {
        profile: ShelfLifeProfile {
            base_shelf_life_days: 7.0,
            room_temp_shelf_life_days: Some(3.0),
            fridge_shelf_life_days: Some(14.0),
            freezer_shelf_life_days: Some(180.0),
            temp_min_c: 1.0,
            temp_max_c: 6.0,
            humidity_preferred: 85.0,
        },
        storage_method_name: method.to_string(),
        conditions: AmbientConditions {
            temp_c: 9.5,
            humidity: 60.0,
        },
        purchased_at,
        opened_at: opened.then_some(purchased_at),
    }
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");

    for method in ["Room temperature", "Fridge", "Freezer", "Pantry shelf"] {
        let input = inputs(method, true);
        group.bench_with_input(BenchmarkId::new("estimate", method), &input, |b, input| {
            b.iter(|| estimate(black_box(input)));
        });
    }

    let input = inputs("Fridge", false);
    group.bench_function("try_estimate", |b| {
        b.iter(|| try_estimate(black_box(&input)));
    });

    group.finish();
}

criterion_group!(benches, bench_estimate);
criterion_main!(benches);
