use std::ffi::{c_int, CStr};

use libusb1_sys as ffi;
use libusb1_sys::{
    libusb_config_descriptor, libusb_context, libusb_device, libusb_device_descriptor,
    libusb_device_handle,
};

// Pointer arguments are cast with `as _` so the exact mutability the extern
// block declares never leaks into the wrappers.

pub(crate) unsafe fn libusb_init(ctx: *mut *mut libusb_context) -> c_int {
    ffi::libusb_init(ctx as _)
}

pub(crate) unsafe fn libusb_exit(ctx: *mut libusb_context) {
    ffi::libusb_exit(ctx as _)
}

pub(crate) unsafe fn libusb_get_device_list(
    ctx: *mut libusb_context,
    list: *mut *const *mut libusb_device,
) -> isize {
    ffi::libusb_get_device_list(ctx as _, list as _) as isize
}

pub(crate) unsafe fn libusb_free_device_list(
    list: *const *mut libusb_device,
    unref_devices: c_int,
) {
    ffi::libusb_free_device_list(list as _, unref_devices)
}

pub(crate) unsafe fn libusb_ref_device(dev: *mut libusb_device) -> *mut libusb_device {
    ffi::libusb_ref_device(dev as _)
}

pub(crate) unsafe fn libusb_unref_device(dev: *mut libusb_device) {
    ffi::libusb_unref_device(dev as _)
}

pub(crate) unsafe fn libusb_get_device_descriptor(
    dev: *mut libusb_device,
    desc: *mut libusb_device_descriptor,
) -> c_int {
    ffi::libusb_get_device_descriptor(dev as _, desc as _)
}

pub(crate) unsafe fn libusb_get_config_descriptor(
    dev: *mut libusb_device,
    index: u8,
    out: *mut *const libusb_config_descriptor,
) -> c_int {
    ffi::libusb_get_config_descriptor(dev as _, index, out as _)
}

pub(crate) unsafe fn libusb_free_config_descriptor(desc: *const libusb_config_descriptor) {
    ffi::libusb_free_config_descriptor(desc as _)
}

pub(crate) unsafe fn libusb_open(
    dev: *mut libusb_device,
    out: *mut *mut libusb_device_handle,
) -> c_int {
    ffi::libusb_open(dev as _, out as _)
}

pub(crate) unsafe fn libusb_close(handle: *mut libusb_device_handle) {
    ffi::libusb_close(handle as _)
}

pub(crate) unsafe fn libusb_wrap_sys_device(
    ctx: *mut libusb_context,
    sys_dev: isize,
    out: *mut *mut libusb_device_handle,
) -> c_int {
    ffi::libusb_wrap_sys_device(ctx as _, sys_dev as _, out as _)
}

pub(crate) unsafe fn libusb_get_device(
    handle: *mut libusb_device_handle,
) -> *mut libusb_device {
    ffi::libusb_get_device(handle as _)
}

pub(crate) unsafe fn libusb_claim_interface(
    handle: *mut libusb_device_handle,
    iface: c_int,
) -> c_int {
    ffi::libusb_claim_interface(handle as _, iface)
}

pub(crate) unsafe fn libusb_release_interface(
    handle: *mut libusb_device_handle,
    iface: c_int,
) -> c_int {
    ffi::libusb_release_interface(handle as _, iface)
}

pub(crate) unsafe fn libusb_set_configuration(
    handle: *mut libusb_device_handle,
    config: c_int,
) -> c_int {
    ffi::libusb_set_configuration(handle as _, config)
}

pub(crate) unsafe fn libusb_get_configuration(
    handle: *mut libusb_device_handle,
    config: *mut c_int,
) -> c_int {
    ffi::libusb_get_configuration(handle as _, config as _)
}

pub(crate) unsafe fn libusb_set_auto_detach_kernel_driver(
    handle: *mut libusb_device_handle,
    enable: c_int,
) -> c_int {
    ffi::libusb_set_auto_detach_kernel_driver(handle as _, enable)
}

pub(crate) unsafe fn libusb_get_bus_number(dev: *mut libusb_device) -> u8 {
    ffi::libusb_get_bus_number(dev as _)
}

pub(crate) unsafe fn libusb_get_device_address(dev: *mut libusb_device) -> u8 {
    ffi::libusb_get_device_address(dev as _)
}

pub(crate) unsafe fn libusb_get_port_numbers(
    dev: *mut libusb_device,
    buf: *mut u8,
    len: c_int,
) -> c_int {
    ffi::libusb_get_port_numbers(dev as _, buf as _, len)
}

pub(crate) unsafe fn libusb_get_string_descriptor_ascii(
    handle: *mut libusb_device_handle,
    index: u8,
    buf: *mut u8,
    len: c_int,
) -> c_int {
    ffi::libusb_get_string_descriptor_ascii(handle as _, index, buf as _, len)
}

pub(crate) fn libusb_strerror(code: c_int) -> &'static str {
    unsafe {
        let msg = ffi::libusb_strerror(code as _);
        if msg.is_null() {
            return "unknown error";
        }
        // libusb hands out pointers into static message tables
        CStr::from_ptr(msg).to_str().unwrap_or("unknown error")
    }
}
