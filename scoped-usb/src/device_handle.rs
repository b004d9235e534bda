use std::ffi::c_int;
use std::marker::PhantomData;

use libusb1_sys::libusb_device_handle;
use log::Level;

use crate::device::Device;
use crate::error::{check_err, check_err_at, check_soft, Result};
use crate::native;
use crate::ptr::{Dispose, ScopedPtr};

pub(crate) enum CloseOnDrop {}

impl Dispose<libusb_device_handle> for CloseOnDrop {
    unsafe fn dispose(ptr: *mut libusb_device_handle) {
        unsafe { native::libusb_close(ptr) };
    }
}

/// An open device, ready for I/O.
///
/// The handle remembers which interfaces it has claimed. Dropping it
/// releases them in the order they were claimed, best effort, and then
/// closes the handle; a release that fails is logged and never stops the
/// teardown.
#[derive(Debug)]
pub struct DeviceHandle<'ctx> {
    handle: ScopedPtr<libusb_device_handle, CloseOnDrop>,
    claimed: Vec<u8>,
    _ctx: PhantomData<&'ctx ()>,
}

unsafe impl Send for DeviceHandle<'_> {}

impl<'ctx> DeviceHandle<'ctx> {
    /// Adopt an already-open handle.
    ///
    /// # Safety
    ///
    /// `handle` must be open, owned by no one else, and the chosen
    /// lifetime must not outlive the context it was opened under.
    pub unsafe fn from_raw(handle: *mut libusb_device_handle) -> DeviceHandle<'ctx> {
        DeviceHandle {
            handle: ScopedPtr::new(handle),
            claimed: Vec::new(),
            _ctx: PhantomData,
        }
    }

    /// Claim `iface` for exclusive use. Claiming an interface this handle
    /// already holds is a no-op, not a native round trip.
    pub fn claim_interface(&mut self, iface: u8) -> Result<()> {
        if self.claimed.contains(&iface) {
            return Ok(());
        }
        let rc = unsafe { native::libusb_claim_interface(self.handle.as_ptr(), iface as c_int) };
        check_err("libusb_claim_interface", rc)?;
        self.claimed.push(iface);
        Ok(())
    }

    /// Release `iface`. Releasing an interface this handle never claimed
    /// is a no-op; the interface leaves the claimed set only when the
    /// native release succeeds.
    pub fn release_interface(&mut self, iface: u8) -> Result<()> {
        let pos = match self.claimed.iter().position(|&c| c == iface) {
            Some(pos) => pos,
            None => return Ok(()),
        };
        let rc = unsafe { native::libusb_release_interface(self.handle.as_ptr(), iface as c_int) };
        check_err("libusb_release_interface", rc)?;
        self.claimed.remove(pos);
        Ok(())
    }

    /// Interfaces currently claimed through this handle, oldest first.
    pub fn claimed_interfaces(&self) -> &[u8] {
        &self.claimed
    }

    /// Select the active configuration; `-1` puts the device in the
    /// unconfigured state.
    pub fn set_configuration(&self, config: i32) -> Result<()> {
        let rc = unsafe { native::libusb_set_configuration(self.handle.as_ptr(), config as c_int) };
        check_err("libusb_set_configuration", rc)?;
        Ok(())
    }

    /// The value of the active configuration, logging failures at `Error`
    /// level.
    pub fn configuration(&self) -> Result<i32> {
        self.configuration_at(Level::Error)
    }

    /// Like [`configuration`](DeviceHandle::configuration) with the
    /// failure log level chosen by the caller.
    pub fn configuration_at(&self, level: Level) -> Result<i32> {
        let mut config: c_int = 0;
        let rc = unsafe { native::libusb_get_configuration(self.handle.as_ptr(), &mut config) };
        check_err_at(level, "libusb_get_configuration", rc)?;
        Ok(config)
    }

    /// Ask the kernel to detach its driver on claim and reattach it on
    /// release.
    pub fn set_auto_detach_kernel_driver(&self, enable: bool) -> Result<()> {
        self.set_auto_detach_kernel_driver_at(Level::Error, enable)
    }

    /// Auto-detach with the failure log level chosen by the caller. The
    /// call is unsupported on some platforms, so call sites often log it
    /// quietly and move on.
    pub fn set_auto_detach_kernel_driver_at(&self, level: Level, enable: bool) -> Result<()> {
        let rc = unsafe {
            native::libusb_set_auto_detach_kernel_driver(self.handle.as_ptr(), enable as c_int)
        };
        check_err_at(level, "libusb_set_auto_detach_kernel_driver", rc)?;
        Ok(())
    }

    /// Read the ASCII string descriptor at `index`.
    pub fn string_descriptor_ascii(&self, index: u8) -> Result<String> {
        let mut buf = [0u8; 1024];
        let rc = unsafe {
            native::libusb_get_string_descriptor_ascii(
                self.handle.as_ptr(),
                index,
                buf.as_mut_ptr(),
                buf.len() as c_int,
            )
        };
        let n = check_err("libusb_get_string_descriptor_ascii", rc)?;
        Ok(String::from_utf8_lossy(&buf[..n as usize]).into_owned())
    }

    /// The device this handle is open on, with its own reference.
    pub fn device(&self) -> Device<'ctx> {
        let dev = unsafe { native::libusb_get_device(self.handle.as_ptr()) };
        unsafe { Device::from_raw(dev) }
    }

    pub fn as_raw(&self) -> *mut libusb_device_handle {
        self.handle.as_ptr()
    }

    /// Hand the open handle to the caller. The claimed set is forgotten;
    /// nothing is released and the handle is not closed on drop.
    pub fn into_raw(mut self) -> *mut libusb_device_handle {
        self.claimed.clear();
        self.handle.take()
    }
}

impl Drop for DeviceHandle<'_> {
    fn drop(&mut self) {
        if self.handle.as_ptr().is_null() {
            return;
        }
        for iface in self.claimed.drain(..) {
            let rc = unsafe {
                native::libusb_release_interface(self.handle.as_ptr(), iface as c_int)
            };
            check_soft(Level::Error, "libusb_release_interface", rc);
        }
        // the handle itself closes when the ScopedPtr field drops
    }
}
