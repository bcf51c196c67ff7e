//! C ABI over `hires-clock`
//!
//! Stopwatch pointers may be null and units are passed as raw codes.
//! Every rejected input collapses to `-1`, which is also a legitimate one-unit negative distance;
//! callers cannot tell the two apart by value.

use hires_clock::{Stopwatch, TimeUnit, Timestamp};

const SENTINEL: i64 = -1;

#[inline(always)]
fn unit_or_sentinel(raw: core::ffi::c_int) -> Option<TimeUnit> {
    match TimeUnit::try_from(raw) {
        Ok(u) => Some(u),
        Err(e) => {
            tracing::trace!(reason = %e, "rejecting unit");
            None
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn hrclock_now_nanos() -> i64 {
    hires_clock::now_nanos().as_nanos()
}

#[unsafe(no_mangle)]
pub extern "C" fn hrclock_elapsed_since(start_time: i64) -> i64 {
    hires_clock::elapsed_since(Timestamp::from_nanos(start_time))
}

/// # Safety
/// `stopwatch` must be null or point to a writable `Stopwatch` not accessed concurrently.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hrclock_tick(stopwatch: *mut Stopwatch) {
    if stopwatch.is_null() {
        tracing::trace!("tick on null stopwatch");
    }
    hires_clock::tick(unsafe { stopwatch.as_mut() });
}

#[unsafe(no_mangle)]
pub extern "C" fn hrclock_nanos_to_unit(nanos: i64, unit: core::ffi::c_int) -> i64 {
    unit_or_sentinel(unit).map_or(SENTINEL, |u| hires_clock::nanos_to_unit(nanos, u))
}

/// # Safety
/// Both pointers must be null or point to valid `Stopwatch` values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hrclock_distance(
    clock: *const Stopwatch,
    other: *const Stopwatch,
    unit: core::ffi::c_int,
) -> i64 {
    let Some(unit) = unit_or_sentinel(unit) else {
        return SENTINEL;
    };

    hires_clock::distance(unsafe { clock.as_ref() }, unsafe { other.as_ref() }, unit)
        .unwrap_or_else(|| {
            tracing::trace!("distance with null stopwatch");
            SENTINEL
        })
}

/// # Safety
/// `clock` must be null or point to a valid `Stopwatch`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn hrclock_distance_from_now(
    clock: *const Stopwatch,
    unit: core::ffi::c_int,
) -> i64 {
    let Some(unit) = unit_or_sentinel(unit) else {
        return SENTINEL;
    };

    hires_clock::distance_from_now(unsafe { clock.as_ref() }, unit).unwrap_or_else(|| {
        tracing::trace!("distance_from_now with null stopwatch");
        SENTINEL
    })
}
