use crate::ClockError;

/// Selector for converting nanosecond durations into coarser units.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Nanoseconds = 0,
    Microseconds = 1,
    Milliseconds = 2,
    Seconds = 3,
    Minutes = 4,
    Hours = 5,
    Days = 6,
}
impl TimeUnit {
    pub const ALL: [Self; 7] = [
        Self::Nanoseconds,
        Self::Microseconds,
        Self::Milliseconds,
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
    ];

    /// Length of one unit in nanoseconds.
    #[inline]
    pub const fn scale(self) -> i64 {
        match self {
            Self::Nanoseconds => 1,
            Self::Microseconds => 1_000,
            Self::Milliseconds => 1_000_000,
            Self::Seconds => 1_000_000_000,
            Self::Minutes => 60_000_000_000,
            Self::Hours => 3_600_000_000_000,
            Self::Days => 86_400_000_000_000,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Nanoseconds => "ns",
            Self::Microseconds => "us",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "min",
            Self::Hours => "h",
            Self::Days => "d",
        }
    }

    #[inline(always)]
    pub const fn raw(self) -> i32 {
        self as i32
    }
}
impl TryFrom<i32> for TimeUnit {
    type Error = ClockError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Nanoseconds),
            1 => Ok(Self::Microseconds),
            2 => Ok(Self::Milliseconds),
            3 => Ok(Self::Seconds),
            4 => Ok(Self::Minutes),
            5 => Ok(Self::Hours),
            6 => Ok(Self::Days),
            _ => Err(ClockError::UnknownUnit(raw)),
        }
    }
}
impl core::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Converts a nanosecond duration into `unit`, truncating toward zero.
#[inline]
pub const fn nanos_to_unit(nanos: i64, unit: TimeUnit) -> i64 {
    nanos / unit.scale()
}
