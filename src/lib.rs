//! Monotonic nanosecond clock and stopwatch helpers
//!
//! Readings come from `clock_gettime(CLOCK_MONOTONIC)` on unix and from the performance counter on windows.
//! Absolute values are opaque; only differences between two readings taken in the same process mean anything.

mod platform;
mod stopwatch;
mod unit;

pub use self::stopwatch::*;
pub use self::unit::*;

#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("unknown time unit code: {0}")]
    UnknownUnit(i32),
    #[error(transparent)]
    Platform(#[from] std::io::Error),
}

/// Nanoseconds since an unspecified, process-local epoch.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);
impl Timestamp {
    pub const ZERO: Self = Self(0);

    #[inline(always)]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    #[inline(always)]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }
}
/// Two's-complement difference; readings far enough apart to overflow wrap instead of panicking.
impl core::ops::Sub for Timestamp {
    type Output = i64;

    #[inline(always)]
    fn sub(self, rhs: Self) -> i64 {
        self.0.wrapping_sub(rhs.0)
    }
}

pub fn try_now_nanos() -> Result<Timestamp, ClockError> {
    Ok(Timestamp(platform::monotonic_nanos()?))
}

/// Current monotonic reading. Non-decreasing within a process.
#[inline]
pub fn now_nanos() -> Timestamp {
    match try_now_nanos() {
        Ok(ts) => ts,
        Err(e) => {
            // the monotonic source is available on every supported target
            tracing::error!(reason = ?e, "reading monotonic clock failed");
            unreachable!();
        }
    }
}

/// `now - start` in nanoseconds. Negative if `start` lies in the future.
#[inline]
pub fn elapsed_since(start: Timestamp) -> i64 {
    now_nanos() - start
}
