use std::ptr;

use libusb1_sys::libusb_context;

use crate::device_handle::DeviceHandle;
use crate::device_list::DeviceList;
use crate::error::{check_err, Result};
use crate::native;
use crate::ptr::{Dispose, ScopedPtr};

pub(crate) enum ExitOnDrop {}

impl Dispose<libusb_context> for ExitOnDrop {
    unsafe fn dispose(ptr: *mut libusb_context) {
        unsafe { native::libusb_exit(ptr) };
    }
}

/// An initialized libusb session.
///
/// Every other type in this crate borrows from a `Context`, so the session
/// cannot be torn down while lists, devices or handles are still alive.
/// Dropping the context calls `libusb_exit` exactly once.
#[derive(Debug)]
pub struct Context {
    ctx: ScopedPtr<libusb_context, ExitOnDrop>,
}

// libusb contexts may be used from any thread.
unsafe impl Send for Context {}
unsafe impl Sync for Context {}

impl Context {
    /// Initialize a new session.
    pub fn new() -> Result<Context> {
        let mut ctx = ptr::null_mut();
        let rc = unsafe { native::libusb_init(&mut ctx) };
        check_err("libusb_init", rc)?;
        Ok(Context {
            ctx: ScopedPtr::new(ctx),
        })
    }

    /// Snapshot the devices currently attached to the system.
    pub fn devices(&self) -> Result<DeviceList<'_>> {
        DeviceList::new(self)
    }

    /// Open a handle over a device the operating system already handed us,
    /// for example a file descriptor received over Binder on Android.
    ///
    /// # Safety
    ///
    /// `sys_dev` must be a platform device reference that libusb can wrap
    /// (on Linux, an open usbfs file descriptor), and it must stay valid
    /// for the lifetime of the returned handle.
    pub unsafe fn wrap_sys_device(&self, sys_dev: isize) -> Result<DeviceHandle<'_>> {
        let mut handle = ptr::null_mut();
        let rc = unsafe { native::libusb_wrap_sys_device(self.as_raw(), sys_dev, &mut handle) };
        check_err("libusb_wrap_sys_device", rc)?;
        Ok(unsafe { DeviceHandle::from_raw(handle) })
    }

    pub fn as_raw(&self) -> *mut libusb_context {
        self.ctx.as_ptr()
    }

    /// Take over a session created elsewhere. The returned `Context` will
    /// call `libusb_exit` on it when dropped.
    ///
    /// # Safety
    ///
    /// `ctx` must be a live context this crate now exclusively owns.
    pub unsafe fn from_raw(ctx: *mut libusb_context) -> Context {
        Context {
            ctx: ScopedPtr::new(ctx),
        }
    }

    /// Release ownership without exiting the session.
    pub fn into_raw(mut self) -> *mut libusb_context {
        self.ctx.take()
    }
}
