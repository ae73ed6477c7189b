//! Integration tests for conversions running on several threads.

use std::thread;

use luach::hebrew::Annus;
use luach::{ConsistencyError, Error, GregorianDate};

const THREADS: usize = 8;

#[test]
fn hebrew_years_from_many_threads() {
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            thread::spawn(move || {
                let mut years: Vec<i32> = (5300..5900).collect();
                if i % 2 == 1 {
                    years.reverse();
                }
                let mut results: Vec<_> = years.into_iter().map(|y| (y, Annus::new(y))).collect();
                results.sort_by_key(|&(y, _)| y);
                results
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();
    for (i, other) in results.iter().enumerate().skip(1) {
        assert_eq!(&results[0], other, "thread {i} disagrees");
    }
    for (year, result) in &results[0] {
        match result {
            Ok(annus) => assert_eq!(*year, annus.year.year()),
            Err(err) => assert!(
                *year == 5522
                    && matches!(err, Error::Consistency(ConsistencyError::InvalidQuality { .. })),
                "{year}: {err}"
            ),
        }
    }
}

#[test]
fn conversions_from_many_threads() {
    let start = GregorianDate::new(2000, 1, 1);
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            thread::spawn(move || {
                (0..2000)
                    .map(|offset| start + offset * THREADS as i32 + i as i32)
                    .map(|date| {
                        let hebrew = luach::to_hebrew_date(date)?;
                        luach::from_hebrew_date(hebrew).map(|back| (date, back))
                    })
                    .collect::<Result<Vec<_>, Error>>()
            })
        })
        .collect();

    for handle in handles {
        let pairs = handle.join().expect("thread panicked").unwrap();
        for (date, back) in pairs {
            assert_eq!(date, back);
        }
    }
}
