//! Seam between the wrappers and the native stack. Normal builds call
//! straight into libusb1-sys; test builds swap in a scriptable in-process
//! fake with the same signatures.

#[cfg(not(test))]
mod libusb;
#[cfg(not(test))]
pub(crate) use libusb::*;

#[cfg(test)]
pub(crate) use fake::*;
