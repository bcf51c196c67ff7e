pub fn monotonic_nanos() -> std::io::Result<i64> {
    let mut ts = core::mem::MaybeUninit::<libc::timespec>::uninit();
    if unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, ts.as_mut_ptr()) } < 0 {
        return Err(std::io::Error::last_os_error());
    }
    let ts = unsafe { ts.assume_init() };

    Ok(ts.tv_sec as i64 * 1_000_000_000 + ts.tv_nsec as i64)
}
