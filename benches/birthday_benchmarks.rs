//! Performance benchmarks for the upcoming-birthday scan.
//!
//! The scan walks every record on each call, so these measure how that
//! linear cost grows with book size in both match modes.

use address_book_bot::services::{due_birthdays, BirthdayMatch, BirthdayWindow};
use address_book_bot::{Birthday, ContactBook, ContactRecord};
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a book where every record has a birthday spread over the year.
fn create_test_book(size: u32) -> ContactBook {
    let mut book = ContactBook::new();
    for i in 0..size {
        let date = NaiveDate::from_ymd_opt(1970 + (i % 40) as i32, 1 + i % 12, 1 + i % 28)
            .unwrap_or_default();
        let record = ContactRecord::new(format!("555-{:06}", i)).with_birthday(Birthday::from(date));
        book.insert(format!("contact{}", i), record).unwrap();
    }
    book
}

/// Benchmark the scan across book sizes.
fn bench_due_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let mut group = c.benchmark_group("due_birthdays");

    for size in [100u32, 1_000, 10_000] {
        let book = create_test_book(size);

        for mode in [BirthdayMatch::Literal, BirthdayMatch::Anniversary] {
            let window = BirthdayWindow { days: 7, mode };
            group.bench_with_input(
                BenchmarkId::new(mode.to_string(), size),
                &book,
                |b, book| b.iter(|| due_birthdays(black_box(book), today, &window)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_due_birthdays);
criterion_main!(benches);
