//! Result ID generation.
//!
//! IDs are creation times in epoch milliseconds rendered as decimal strings.
//! Within one process they are strictly increasing: when two results are
//! created inside the same millisecond (or the wall clock steps backwards) the
//! previously issued value is bumped by one instead.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

static LAST_ISSUED: AtomicI64 = AtomicI64::new(i64::MIN);

/// Issue a fresh result ID for an instant.
#[must_use]
pub fn next_result_id(now: DateTime<Utc>) -> String {
    let candidate = now.timestamp_millis();
    let mut last = LAST_ISSUED.load(Ordering::Relaxed);
    loop {
        let next = if candidate > last { candidate } else { last + 1 };
        match LAST_ISSUED.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return next.to_string(),
            Err(observed) => last = observed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_within_one_instant_are_unique_and_increasing() {
        let now = Utc::now();
        let ids: Vec<i64> = (0..100)
            .map(|_| next_result_id(now).parse().unwrap())
            .collect();

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn ids_survive_clock_going_backwards() {
        let now = Utc::now();
        let first: i64 = next_result_id(now).parse().unwrap();
        let earlier = now - chrono::Duration::seconds(5);
        let second: i64 = next_result_id(earlier).parse().unwrap();
        assert!(second > first);
    }

    #[test]
    fn ids_are_unique_across_threads() {
        let now = Utc::now();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || (0..50).map(|_| next_result_id(now)).collect::<Vec<_>>()))
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id issued");
            }
        }
    }
}
