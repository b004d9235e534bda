use std::ffi::c_int;
use std::fmt::{self, Display, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr;

use libusb1_sys::libusb_device;
use log::Level;

use crate::config_descriptor::ConfigDescriptor;
use crate::device_descriptor::DeviceDescriptor;
use crate::device_handle::DeviceHandle;
use crate::error::{check_err, check_err_at, Result};
use crate::native;
use crate::ptr::{Dispose, ScopedPtr};

pub(crate) enum UnrefOnDrop {}

impl Dispose<libusb_device> for UnrefOnDrop {
    unsafe fn dispose(ptr: *mut libusb_device) {
        unsafe { native::libusb_unref_device(ptr) };
    }
}

/// One strong reference to a device on the bus.
///
/// Cloning takes another reference, dropping releases one; the device
/// itself stays alive inside libusb until the last reference goes away,
/// so a `Device` remains usable after the [`DeviceList`] it came from is
/// gone.
///
/// [`DeviceList`]: crate::DeviceList
pub struct Device<'ctx> {
    dev: ScopedPtr<libusb_device, UnrefOnDrop>,
    _ctx: PhantomData<&'ctx ()>,
}

unsafe impl Send for Device<'_> {}

impl<'ctx> Device<'ctx> {
    /// Wrap `dev`, taking an additional reference on it.
    ///
    /// # Safety
    ///
    /// `dev` must point at a live libusb device, and the chosen lifetime
    /// must not outlive the context it belongs to.
    pub unsafe fn from_raw(dev: *mut libusb_device) -> Device<'ctx> {
        unsafe { native::libusb_ref_device(dev) };
        Device {
            dev: ScopedPtr::new(dev),
            _ctx: PhantomData,
        }
    }

    /// Open the device for I/O.
    pub fn open(&self) -> Result<DeviceHandle<'ctx>> {
        let mut handle = ptr::null_mut();
        let rc = unsafe { native::libusb_open(self.dev.as_ptr(), &mut handle) };
        check_err("libusb_open", rc)?;
        Ok(unsafe { DeviceHandle::from_raw(handle) })
    }

    /// Fetch the configuration descriptor at `index`. The index is checked
    /// by libusb itself; past the last configuration this returns
    /// [`Error::NotFound`](crate::Error::NotFound).
    pub fn config_descriptor(&self, index: u8) -> Result<ConfigDescriptor> {
        let mut desc = ptr::null();
        let rc =
            unsafe { native::libusb_get_config_descriptor(self.dev.as_ptr(), index, &mut desc) };
        check_err("libusb_get_config_descriptor", rc)?;
        Ok(unsafe { ConfigDescriptor::from_raw(desc) })
    }

    /// Read the device descriptor, logging failures at `Error` level.
    pub fn device_descriptor(&self) -> Result<DeviceDescriptor> {
        self.device_descriptor_at(Level::Error)
    }

    /// Read the device descriptor, logging failures at the given level.
    /// Call sites that can live without the descriptor pass a quiet level
    /// and discard the `Err`.
    pub fn device_descriptor_at(&self, level: Level) -> Result<DeviceDescriptor> {
        let mut desc = MaybeUninit::zeroed();
        let rc =
            unsafe { native::libusb_get_device_descriptor(self.dev.as_ptr(), desc.as_mut_ptr()) };
        check_err_at(level, "libusb_get_device_descriptor", rc)?;
        Ok(DeviceDescriptor::new(unsafe { desc.assume_init() }))
    }

    /// Point this wrapper at `dev` instead, referencing the new device
    /// before the old one is released. Resetting to the pointer already
    /// held is harmless, resetting to null just releases early.
    ///
    /// # Safety
    ///
    /// `dev` must be null or a live device from the same context.
    pub unsafe fn reset(&mut self, dev: *mut libusb_device) {
        if !dev.is_null() {
            unsafe { native::libusb_ref_device(dev) };
        }
        unsafe { self.dev.reset(dev) };
    }

    pub fn bus_number(&self) -> u8 {
        unsafe { native::libusb_get_bus_number(self.dev.as_ptr()) }
    }

    pub fn address(&self) -> u8 {
        unsafe { native::libusb_get_device_address(self.dev.as_ptr()) }
    }

    /// The chain of hub ports leading to this device, root first.
    pub fn port_numbers(&self) -> Result<Vec<u8>> {
        // a chain can be at most seven hubs deep
        let mut ports = [0u8; 7];
        let rc = unsafe {
            native::libusb_get_port_numbers(
                self.dev.as_ptr(),
                ports.as_mut_ptr(),
                ports.len() as c_int,
            )
        };
        let n = check_err("libusb_get_port_numbers", rc)?;
        Ok(ports[..n as usize].to_vec())
    }

    pub fn as_raw(&self) -> *mut libusb_device {
        self.dev.as_ptr()
    }

    /// Hand the reference this wrapper holds to the caller.
    pub fn into_raw(mut self) -> *mut libusb_device {
        self.dev.take()
    }
}

impl Clone for Device<'_> {
    fn clone(&self) -> Self {
        unsafe { Device::from_raw(self.dev.as_ptr()) }
    }
}

impl Display for Device<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.device_descriptor_at(Level::Debug) {
            Ok(des) => write!(
                f,
                "USB device [{:04x}:{:04x}], bus {}, address {}",
                des.vendor_id(),
                des.product_id(),
                self.bus_number(),
                self.address()
            ),
            Err(_) => write!(
                f,
                "USB device bus {}, address {}",
                self.bus_number(),
                self.address()
            ),
        }
    }
}
