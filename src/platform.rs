//! Host monotonic counter access

#[cfg(unix)]
mod posix {
    pub mod time;
}
#[cfg(windows)]
mod win32 {
    pub mod time;
}

#[cfg(unix)]
pub use self::posix::time::monotonic_nanos;
#[cfg(windows)]
pub use self::win32::time::monotonic_nanos;
