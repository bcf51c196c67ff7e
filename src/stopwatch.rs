use crate::{Timestamp, TimeUnit, nanos_to_unit, now_nanos};

/// A single start timestamp, overwritten only by [`Stopwatch::tick`].
///
/// `Default` gives a zeroed record which is not meaningful until ticked.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stopwatch {
    start_time: Timestamp,
}
impl Stopwatch {
    /// A stopwatch ticked at the current instant.
    #[inline]
    pub fn started() -> Self {
        Self {
            start_time: now_nanos(),
        }
    }

    #[inline(always)]
    pub const fn at(start_time: Timestamp) -> Self {
        Self { start_time }
    }

    #[inline(always)]
    pub const fn start_time(&self) -> Timestamp {
        self.start_time
    }

    #[inline]
    pub fn tick(&mut self) {
        self.start_time = now_nanos();
    }

    /// `other.start_time - self.start_time` in `unit`. Negative when `other` was ticked first.
    #[inline]
    pub fn distance_to(&self, other: &Stopwatch, unit: TimeUnit) -> i64 {
        nanos_to_unit(other.start_time - self.start_time, unit)
    }

    #[inline]
    pub fn elapsed_nanos(&self) -> i64 {
        now_nanos() - self.start_time
    }

    #[inline]
    pub fn elapsed(&self, unit: TimeUnit) -> i64 {
        nanos_to_unit(self.elapsed_nanos(), unit)
    }
}

/// Restarts `stopwatch`; absent stopwatches are left alone.
#[inline]
pub fn tick(stopwatch: Option<&mut Stopwatch>) {
    if let Some(sw) = stopwatch {
        sw.tick();
    }
}

/// `b - a` in `unit`, or `None` if either side is absent.
#[inline]
pub fn distance(a: Option<&Stopwatch>, b: Option<&Stopwatch>, unit: TimeUnit) -> Option<i64> {
    Some(a?.distance_to(b?, unit))
}

#[inline]
pub fn distance_from_now(a: Option<&Stopwatch>, unit: TimeUnit) -> Option<i64> {
    a.map(|sw| sw.elapsed(unit))
}
