use std::ffi::c_int;
use std::panic::Location;
use std::result;

use libusb1_sys::constants::*;
use log::Level;

use crate::native;

pub type Result<T = ()> = result::Result<T, Error>;

/// One variant per libusb error code. The native code value is never lost:
/// [`Error::code`] gives it back and [`Error::from_code`] accepts any value,
/// folding codes this build does not know into [`Error::Unknown`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Input/Output Error")]
    Io,

    #[error("Invalid parameter")]
    InvalidParam,

    #[error("Access denied (insufficient permissions)")]
    Access,

    #[error("No such device (it may have been disconnected)")]
    NoDevice,

    #[error("Entity not found")]
    NotFound,

    #[error("Resource busy")]
    Busy,

    #[error("Operation timed out")]
    Timeout,

    #[error("Overflow")]
    Overflow,

    #[error("Pipe error")]
    Pipe,

    #[error("System call interrupted (perhaps due to signal)")]
    Interrupted,

    #[error("Insufficient memory")]
    NoMem,

    #[error("Operation not supported or unimplemented on this platform")]
    NotSupported,

    #[error("Other error")]
    Other,

    #[error("Unknown libusb error code {0}")]
    Unknown(c_int),
}

impl Error {
    pub fn from_code(code: c_int) -> Error {
        match code {
            LIBUSB_ERROR_IO => Error::Io,
            LIBUSB_ERROR_INVALID_PARAM => Error::InvalidParam,
            LIBUSB_ERROR_ACCESS => Error::Access,
            LIBUSB_ERROR_NO_DEVICE => Error::NoDevice,
            LIBUSB_ERROR_NOT_FOUND => Error::NotFound,
            LIBUSB_ERROR_BUSY => Error::Busy,
            LIBUSB_ERROR_TIMEOUT => Error::Timeout,
            LIBUSB_ERROR_OVERFLOW => Error::Overflow,
            LIBUSB_ERROR_PIPE => Error::Pipe,
            LIBUSB_ERROR_INTERRUPTED => Error::Interrupted,
            LIBUSB_ERROR_NO_MEM => Error::NoMem,
            LIBUSB_ERROR_NOT_SUPPORTED => Error::NotSupported,
            LIBUSB_ERROR_OTHER => Error::Other,
            other => Error::Unknown(other),
        }
    }

    pub fn code(&self) -> c_int {
        match self {
            Error::Io => LIBUSB_ERROR_IO,
            Error::InvalidParam => LIBUSB_ERROR_INVALID_PARAM,
            Error::Access => LIBUSB_ERROR_ACCESS,
            Error::NoDevice => LIBUSB_ERROR_NO_DEVICE,
            Error::NotFound => LIBUSB_ERROR_NOT_FOUND,
            Error::Busy => LIBUSB_ERROR_BUSY,
            Error::Timeout => LIBUSB_ERROR_TIMEOUT,
            Error::Overflow => LIBUSB_ERROR_OVERFLOW,
            Error::Pipe => LIBUSB_ERROR_PIPE,
            Error::Interrupted => LIBUSB_ERROR_INTERRUPTED,
            Error::NoMem => LIBUSB_ERROR_NO_MEM,
            Error::NotSupported => LIBUSB_ERROR_NOT_SUPPORTED,
            Error::Other => LIBUSB_ERROR_OTHER,
            Error::Unknown(c) => *c,
        }
    }
}

/// Strict check: a negative result is logged at `error` level and returned
/// as a typed failure. Non-negative results pass through unchanged, so the
/// value stays usable when it carries meaning (byte counts, configuration
/// values).
#[track_caller]
pub(crate) fn check_err(op: &'static str, rc: c_int) -> Result<c_int> {
    check_err_at(Level::Error, op, rc)
}

/// Strict check logging at a caller-chosen level. Scan paths that expect
/// some devices to refuse a query log at `debug` and move on.
#[track_caller]
pub(crate) fn check_err_at(level: Level, op: &'static str, rc: c_int) -> Result<c_int> {
    if rc >= 0 {
        return Ok(rc);
    }
    log_failure(level, op, rc);
    Err(Error::from_code(rc))
}

/// Best-effort check: a negative result is logged and handed back, never
/// raised. Teardown paths only.
#[track_caller]
pub(crate) fn check_soft(level: Level, op: &'static str, rc: c_int) -> c_int {
    if rc < 0 {
        log_failure(level, op, rc);
    }
    rc
}

#[track_caller]
fn log_failure(level: Level, op: &'static str, rc: c_int) {
    let caller = Location::caller();
    log::log!(
        target: "scoped_usb",
        level,
        "{} failed: {} ({}:{})",
        op,
        native::libusb_strerror(rc),
        caller.file(),
        caller.line()
    );
}
