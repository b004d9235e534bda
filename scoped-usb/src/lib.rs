//! Scoped ownership wrappers over libusb-1.0.
//!
//! Every native resource is held by a type that knows how to give it
//! back: the [`Context`] exits the session, a [`DeviceList`] frees the
//! snapshot and unreferences its entries, a [`Device`] releases its
//! reference, a [`DeviceHandle`] releases what it claimed and closes, a
//! [`ConfigDescriptor`] frees the descriptor memory. Lifetimes tie each
//! of them to the context they came from, so teardown order mistakes do
//! not compile.
//!
//! ```no_run
//! use scoped_usb::Context;
//!
//! fn main() -> scoped_usb::Result<()> {
//!     let ctx = Context::new()?;
//!     for device in &ctx.devices()? {
//!         let des = device.device_descriptor()?;
//!         println!(
//!             "{:03}:{:03} {:04x}:{:04x}",
//!             device.bus_number(),
//!             device.address(),
//!             des.vendor_id(),
//!             des.product_id()
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Failures coming back from libusb are logged under the `scoped_usb`
//! target with the failing call and its origin, then surfaced as
//! [`Error`].

pub use libusb1_sys as ffi;

mod config_descriptor;
mod context;
mod device;
mod device_descriptor;
mod device_handle;
mod device_list;
mod error;
mod native;
mod ptr;
#[cfg(test)]
mod utils;

pub use config_descriptor::ConfigDescriptor;
pub use context::Context;
pub use device::Device;
pub use device_descriptor::DeviceDescriptor;
pub use device_handle::DeviceHandle;
pub use device_list::{DeviceList, Devices};
pub use error::{Error, Result};
