use std::time::Duration;

use hires_clock::{Stopwatch, TimeUnit, distance, distance_from_now, elapsed_since, now_nanos, tick};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init();
}

#[test]
fn sleep_is_measured_in_millis() {
    init_tracing();

    let mut sw = Stopwatch::default();
    tick(Some(&mut sw));
    std::thread::sleep(Duration::from_millis(50));
    let ms = distance_from_now(Some(&sw), TimeUnit::Milliseconds).unwrap();
    tracing::info!(ms, "slept 50ms");

    assert!(ms >= 49, "{ms}ms");
    assert!(ms < 500, "{ms}ms");
}

#[test]
fn ticks_around_sleep_are_ordered() {
    init_tracing();

    let mut a = Stopwatch::started();
    std::thread::sleep(Duration::from_millis(20));
    let b = Stopwatch::started();

    let us = distance(Some(&a), Some(&b), TimeUnit::Microseconds).unwrap();
    assert!(us >= 19_000, "{us}us");
    assert_eq!(
        distance(Some(&b), Some(&a), TimeUnit::Nanoseconds),
        distance(Some(&a), Some(&b), TimeUnit::Nanoseconds).map(|d| -d)
    );

    // re-ticking moves `a` past `b`
    a.tick();
    assert!(a.distance_to(&b, TimeUnit::Nanoseconds) <= 0);
}

#[test]
fn elapsed_since_matches_stopwatch() {
    let start = now_nanos();
    let sw = Stopwatch::at(start);
    std::thread::sleep(Duration::from_millis(5));

    let first = sw.elapsed_nanos();
    let second = elapsed_since(start);
    assert!(first >= 5_000_000);
    assert!(second >= first);
}
