use log::{info, warn, Level, LevelFilter};
use scoped_usb::Context;

fn main() {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Debug)
        .is_test(true)
        .try_init();

    let ctx = Context::new().unwrap();
    let list = ctx.devices().unwrap();
    info!("{} devices", list.len());

    for device in &list {
        let des = match device.device_descriptor_at(Level::Debug) {
            Ok(des) => des,
            Err(_) => {
                warn!(
                    "skipping bus {} address {}: descriptor unreadable",
                    device.bus_number(),
                    device.address()
                );
                continue;
            }
        };

        let ports = device.port_numbers().unwrap_or_default();
        let path = ports
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(".");
        let mut msg = format!(
            "Bus {:03} Address {:03} [{:04x}:{:04x}] path {}",
            device.bus_number(),
            device.address(),
            des.vendor_id(),
            des.product_id(),
            path
        );

        if let Some(index) = des.serial_number_string_index() {
            if let Ok(handle) = device.open() {
                if let Ok(serial) = handle.string_descriptor_ascii(index) {
                    msg += format!(" sn {serial}").as_str();
                }
            }
        }

        info!("{}", msg);
    }
}
