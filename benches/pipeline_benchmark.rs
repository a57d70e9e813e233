use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::NaiveDate;
use fdd_rust::core::domain::{BagRecord, FlightRecord, PassengerFlightRecord, RemarkRecord};
use fdd_rust::io::loaders::DataSnapshot;
use fdd_rust::pipeline::DifficultyPipeline;
use fdd_rust::services;
use fdd_rust::transformations;

/// Deterministic synthetic snapshot: `flights_per_day` flights on each of
/// `days` days, three reservations per flight, factor values spread by
/// index so no column is constant.
fn synthetic_snapshot(flights_per_day: usize, days: u32) -> DataSnapshot {
    let mut passenger_flights = Vec::new();
    let mut remarks = Vec::new();
    let mut flights = Vec::new();
    let mut bags = Vec::new();

    for day in 1..=days {
        let date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        for i in 0..flights_per_day {
            let number = format!("{}", 1000 + i);
            let scheduled = date.and_hms_opt(6 + (i % 12) as u32, 0, 0).unwrap();
            let delay = (i % 40) as i64;

            flights.push(FlightRecord {
                company_id: "UA".to_string(),
                flight_number: number.clone(),
                scheduled_departure: Some(scheduled),
                actual_departure: Some(scheduled + chrono::Duration::minutes(delay)),
                scheduled_departure_date: Some(date),
                total_seats: Some(100 + (i % 5) as u32 * 30),
                scheduled_ground_time_minutes: Some(40.0 + (i % 7) as f64 * 10.0),
                minimum_turn_minutes: Some(35.0),
            });

            for r in 0..3 {
                let locator = format!("L{}-{}-{}", day, i, r);
                passenger_flights.push(PassengerFlightRecord {
                    record_locator: locator.clone(),
                    pnr_creation_date: NaiveDate::from_ymd_opt(2024, 4, 1),
                    flight_number: number.clone(),
                    scheduled_departure_date: Some(date),
                    total_pax: 1 + (i + r) as u32 % 4,
                });
                if (i + r) % 5 == 0 {
                    remarks.push(RemarkRecord {
                        record_locator: locator,
                        pnr_creation_date: NaiveDate::from_ymd_opt(2024, 4, 1),
                        flight_number: number.clone(),
                        special_service_request: Some("WCHR".to_string()),
                    });
                }
            }

            let origin = 2 + i % 6;
            let transfer = i % 4;
            for _ in 0..origin {
                bags.push(BagRecord {
                    company_id: "UA".to_string(),
                    flight_number: number.clone(),
                    bag_type: "origin".to_string(),
                });
            }
            for _ in 0..transfer {
                bags.push(BagRecord {
                    company_id: "UA".to_string(),
                    flight_number: number.clone(),
                    bag_type: "transfer".to_string(),
                });
            }
        }
    }

    DataSnapshot {
        passenger_flights,
        remarks,
        flights,
        bags,
    }
}

fn bench_merge_and_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_aggregate");

    for flights_per_day in [50usize, 200] {
        let snapshot = synthetic_snapshot(flights_per_day, 5);
        group.bench_with_input(
            BenchmarkId::from_parameter(flights_per_day),
            &snapshot,
            |b, snapshot| {
                b.iter(|| {
                    let merged = transformations::merge_passenger_records(
                        black_box(&snapshot.passenger_flights),
                        &snapshot.remarks,
                        &snapshot.flights,
                    );
                    let merged = transformations::derive_features(merged);
                    black_box(services::aggregate_flights(&merged))
                });
            },
        );
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let pipeline = DifficultyPipeline::new();

    for flights_per_day in [50usize, 200] {
        let snapshot = synthetic_snapshot(flights_per_day, 5);
        group.bench_with_input(
            BenchmarkId::from_parameter(flights_per_day),
            &snapshot,
            |b, snapshot| {
                b.iter(|| pipeline.run(black_box(snapshot)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_merge_and_aggregate, bench_full_pipeline);
criterion_main!(benches);
