use std::ffi::c_int;
use std::marker::PhantomData;
use std::ptr;
use std::slice;

use libusb1_sys::libusb_device;

use crate::context::Context;
use crate::device::Device;
use crate::error::{check_err, Result};
use crate::native;
use crate::ptr::{Dispose, ScopedPtr};

pub(crate) enum FreeListOnDrop {}

impl Dispose<*mut libusb_device> for FreeListOnDrop {
    unsafe fn dispose(ptr: *mut *mut libusb_device) {
        // freeing with unref set drops the reference the enumeration took
        // on every entry
        unsafe { native::libusb_free_device_list(ptr as *const _, 1) };
    }
}

/// A snapshot of the devices attached at enumeration time.
///
/// The snapshot owns one reference on every entry; dropping it frees the
/// list and releases all of them in one call. Entries handed out through
/// [`get`](DeviceList::get) or iteration carry their own reference and may
/// outlive the list.
#[derive(Debug)]
pub struct DeviceList<'ctx> {
    list: ScopedPtr<*mut libusb_device, FreeListOnDrop>,
    len: usize,
    _ctx: PhantomData<&'ctx ()>,
}

unsafe impl Send for DeviceList<'_> {}

impl<'ctx> DeviceList<'ctx> {
    /// Enumerate the attached devices. [`Context::devices`] is the usual
    /// way in.
    pub fn new(ctx: &'ctx Context) -> Result<DeviceList<'ctx>> {
        let mut list = ptr::null();
        let n = unsafe { native::libusb_get_device_list(ctx.as_raw(), &mut list) };
        if n < 0 {
            check_err("libusb_get_device_list", n as c_int)?;
        }
        Ok(DeviceList {
            list: ScopedPtr::new(list as *mut _),
            len: n as usize,
            _ctx: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_raw(&self) -> *const *mut libusb_device {
        self.list.as_ptr()
    }

    fn entries(&self) -> &[*mut libusb_device] {
        let list = self.list.as_ptr();
        if list.is_null() || self.len == 0 {
            return &[];
        }
        unsafe { slice::from_raw_parts(list, self.len) }
    }

    /// The entry at `index`, with its own reference, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Device<'ctx>> {
        self.entries()
            .get(index)
            .map(|&dev| unsafe { Device::from_raw(dev) })
    }

    /// Like [`get`](DeviceList::get) without the bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be below [`len`](DeviceList::len).
    pub unsafe fn get_unchecked(&self, index: usize) -> Device<'ctx> {
        let dev = unsafe { *self.list.as_ptr().add(index) };
        unsafe { Device::from_raw(dev) }
    }

    pub fn first(&self) -> Option<Device<'ctx>> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Device<'ctx>> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> Devices<'_, 'ctx> {
        Devices {
            iter: self.entries().iter(),
            _ctx: PhantomData,
        }
    }
}

impl<'a, 'ctx> IntoIterator for &'a DeviceList<'ctx> {
    type Item = Device<'ctx>;
    type IntoIter = Devices<'a, 'ctx>;

    fn into_iter(self) -> Devices<'a, 'ctx> {
        self.iter()
    }
}

/// Iterator over a [`DeviceList`], yielding referenced entries from either
/// end.
pub struct Devices<'a, 'ctx> {
    iter: slice::Iter<'a, *mut libusb_device>,
    _ctx: PhantomData<&'ctx ()>,
}

impl<'ctx> Iterator for Devices<'_, 'ctx> {
    type Item = Device<'ctx>;

    fn next(&mut self) -> Option<Device<'ctx>> {
        self.iter.next().map(|&dev| unsafe { Device::from_raw(dev) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Devices<'_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter
            .next_back()
            .map(|&dev| unsafe { Device::from_raw(dev) })
    }
}

impl ExactSizeIterator for Devices<'_, '_> {}
