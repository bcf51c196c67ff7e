use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};

pub fn monotonic_nanos() -> std::io::Result<i64> {
    let freq = monotonic_freq()?;
    let mut counter = 0i64;
    unsafe { QueryPerformanceCounter(&mut counter) }?;

    // counter / freq scaled to nsec; goes through f64 so very long uptimes lose sub-usec precision
    Ok((counter as f64 / freq as f64 * 1e9) as i64)
}

fn monotonic_freq() -> std::io::Result<i64> {
    let mut freq = 0i64;
    unsafe { QueryPerformanceFrequency(&mut freq) }?;

    Ok(freq)
}
