use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use time::{Date, Duration, OffsetDateTime, Time};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Source of timestamps and of "today" for expiry math.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// The calendar date of the local day.
    fn today(&self) -> Date;
}

#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }

    fn today(&self) -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()
    }
}

/// Deterministic clock: every `now_millis` call advances by one millisecond
/// so records created back to back keep a strict order.
#[derive(Clone)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    /// Starts at noon UTC on `date`.
    pub fn at(date: Date) -> Self {
        let noon = date.with_time(Time::MIDNIGHT).assume_utc() + Duration::hours(12);
        let millis = (noon.unix_timestamp_nanos() / 1_000_000) as i64;

        Self {
            millis: Arc::new(AtomicI64::new(millis)),
        }
    }

    pub fn advance_days(&self, days: i64) {
        self.millis
            .fetch_add(days * MILLIS_PER_DAY, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn today(&self) -> Date {
        let millis = self.millis.load(Ordering::SeqCst);
        OffsetDateTime::from_unix_timestamp(millis.div_euclid(1000))
            .map(|dt| dt.date())
            .unwrap_or(Date::MIN)
    }
}
