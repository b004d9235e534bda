use std::fmt;

use libusb1_sys::libusb_config_descriptor;

use crate::native;
use crate::ptr::{Dispose, ScopedPtr};

pub(crate) enum FreeOnDrop {}

impl Dispose<libusb_config_descriptor> for FreeOnDrop {
    unsafe fn dispose(ptr: *mut libusb_config_descriptor) {
        unsafe { native::libusb_free_config_descriptor(ptr as *const _) };
    }
}

/// An owned configuration descriptor.
///
/// libusb allocates these; dropping the wrapper hands the memory back via
/// `libusb_free_config_descriptor`. The descriptor is plain data and does
/// not borrow the context it was read from.
pub struct ConfigDescriptor {
    descriptor: ScopedPtr<libusb_config_descriptor, FreeOnDrop>,
}

unsafe impl Send for ConfigDescriptor {}
unsafe impl Sync for ConfigDescriptor {}

impl ConfigDescriptor {
    /// Adopt a descriptor allocated by libusb.
    ///
    /// # Safety
    ///
    /// `desc` must come from a descriptor-returning libusb call and must
    /// not be freed elsewhere.
    pub unsafe fn from_raw(desc: *const libusb_config_descriptor) -> ConfigDescriptor {
        ConfigDescriptor {
            descriptor: ScopedPtr::new(desc as *mut _),
        }
    }

    fn get(&self) -> &libusb_config_descriptor {
        unsafe { &*self.descriptor.as_ptr() }
    }

    /// The `bConfigurationValue` to pass to `set_configuration`.
    pub fn value(&self) -> u8 {
        self.get().bConfigurationValue
    }

    pub fn num_interfaces(&self) -> u8 {
        self.get().bNumInterfaces
    }

    pub fn as_raw(&self) -> *const libusb_config_descriptor {
        self.descriptor.as_ptr()
    }

    /// Hand ownership back to the caller, skipping the free on drop.
    pub fn into_raw(mut self) -> *const libusb_config_descriptor {
        self.descriptor.take()
    }
}

impl fmt::Debug for ConfigDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigDescriptor")
            .field("value", &self.value())
            .field("num_interfaces", &self.num_interfaces())
            .finish()
    }
}
