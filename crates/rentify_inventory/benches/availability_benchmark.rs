use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rentify_inventory::availability::is_available;
use rentify_inventory::catalog::{filter_available, unique_tags};
use rentify_inventory::models::{DateRange, Device};

// A fleet mixing free, dated, open-ended and undated devices
fn create_fleet(size: usize) -> Vec<Device> {
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..size)
        .map(|i| {
            let start = base + Duration::days((i % 300) as i64);
            let end = start + Duration::days((i % 14) as i64);
            let (location_ref_count, start_date, end_date) = match i % 4 {
                0 => (0, None, None),
                1 => (1, Some(start.to_string()), Some(end.to_string())),
                2 => (1, Some(format!("{}T10:00:00.000+01:00", start)), None),
                _ => (1, None, None),
            };
            Device {
                id: format!("dev-{}", i),
                name: format!("Unit {:04}", i),
                tag: format!("Model {}", i % 7),
                location_ref_count,
                start_date,
                end_date,
            }
        })
        .collect()
}

fn benchmark_availability(c: &mut Criterion) {
    let mut group = c.benchmark_group("availability");
    let query_start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let query_end = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();

    // One device with both bounds
    let single = create_fleet(2).pop().unwrap();
    group.bench_function("single_device", |b| {
        b.iter(|| is_available(black_box(&single), black_box(query_start), black_box(query_end)))
    });

    // A full page of the devices database
    let fleet = create_fleet(100);
    let range = DateRange::new(query_start, query_end).unwrap();
    group.bench_function("filter_page_of_100", |b| {
        b.iter(|| filter_available(black_box(fleet.clone()), black_box(&range)))
    });

    let large = create_fleet(10_000);
    group.bench_function("filter_10000", |b| {
        b.iter(|| filter_available(black_box(large.clone()), black_box(&range)))
    });

    group.bench_function("unique_tags_10000", |b| {
        b.iter(|| unique_tags(black_box(&large)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_availability);
criterion_main!(benches);
