//! Benchmarks for directory filtering
//!
//! Run with: cargo bench --package matching
//!
//! Uses a synthetic directory a few times larger than any real snapshot.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use directory::{Availability, AvailabilityFilter, Contact, LawyerRecord};
use matching::{filter_directory, CarouselCursor, FilterCriteria};

const CITIES: [&str; 5] = ["New Delhi", "Mumbai", "Bangalore", "Chennai", "Kolkata"];

fn synthetic_directory(size: usize) -> Vec<LawyerRecord> {
    (0..size)
        .map(|i| LawyerRecord {
            id: i.to_string(),
            name: format!("Adv. Lawyer {}", i),
            specialization: vec!["Criminal Law".to_string(), "Civil Law".to_string()],
            experience_years: (i % 25) as u32,
            fee_per_unit: 500.0 + (i % 20) as f64 * 500.0,
            rating: (i % 11) as f64 * 0.5,
            cases_won: (i * 7 % 300) as u32,
            location: CITIES[i % CITIES.len()].to_string(),
            availability: match i % 3 {
                0 => Availability::Available,
                1 => Availability::Busy,
                _ => Availability::Unavailable,
            },
            contact: Contact::default(),
            qualifications: vec!["LLB".to_string()],
            languages: vec!["English".to_string()],
            bio: String::new(),
        })
        .collect()
}

fn bench_filter_directory(c: &mut Criterion) {
    let records = synthetic_directory(500);
    let criteria = FilterCriteria::default()
        .max_fee(6000.0)
        .min_rating(3.0)
        .min_experience(5)
        .availability(AvailabilityFilter::Available)
        .location("delhi");

    c.bench_function("filter_directory_500", |b| {
        b.iter(|| {
            let result = filter_directory(black_box(&records), black_box(&criteria));
            black_box(result)
        })
    });
}

fn bench_carousel_walk(c: &mut Criterion) {
    c.bench_function("carousel_walk_1000", |b| {
        b.iter(|| {
            let mut cursor = CarouselCursor::new(black_box(37));
            for _ in 0..1000 {
                cursor.next();
            }
            black_box(cursor.current())
        })
    });
}

criterion_group!(benches, bench_filter_directory, bench_carousel_walk);
criterion_main!(benches);
