use std::fmt;

use libusb1_sys::libusb_device_descriptor;

/// A device descriptor, read once from the device and held by value.
pub struct DeviceDescriptor {
    descriptor: libusb_device_descriptor,
}

impl DeviceDescriptor {
    pub(crate) fn new(descriptor: libusb_device_descriptor) -> DeviceDescriptor {
        DeviceDescriptor { descriptor }
    }

    pub fn vendor_id(&self) -> u16 {
        self.descriptor.idVendor
    }

    pub fn product_id(&self) -> u16 {
        self.descriptor.idProduct
    }

    pub fn class_code(&self) -> u8 {
        self.descriptor.bDeviceClass
    }

    pub fn sub_class_code(&self) -> u8 {
        self.descriptor.bDeviceSubClass
    }

    pub fn protocol_code(&self) -> u8 {
        self.descriptor.bDeviceProtocol
    }

    pub fn num_configurations(&self) -> u8 {
        self.descriptor.bNumConfigurations
    }

    /// String descriptor index for the manufacturer name, if the device
    /// carries one.
    pub fn manufacturer_string_index(&self) -> Option<u8> {
        nonzero(self.descriptor.iManufacturer)
    }

    pub fn product_string_index(&self) -> Option<u8> {
        nonzero(self.descriptor.iProduct)
    }

    pub fn serial_number_string_index(&self) -> Option<u8> {
        nonzero(self.descriptor.iSerialNumber)
    }
}

// index zero means "no string"
fn nonzero(index: u8) -> Option<u8> {
    if index == 0 {
        None
    } else {
        Some(index)
    }
}

impl fmt::Debug for DeviceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceDescriptor")
            .field("vendor_id", &format_args!("{:04x}", self.vendor_id()))
            .field("product_id", &format_args!("{:04x}", self.product_id()))
            .field("class_code", &self.class_code())
            .field("num_configurations", &self.num_configurations())
            .finish()
    }
}
