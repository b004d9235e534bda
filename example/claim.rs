use log::{info, Level, LevelFilter};
use scoped_usb::Context;

fn main() {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Debug)
        .is_test(true)
        .try_init();

    let ctx = Context::new().unwrap();
    let list = ctx.devices().unwrap();
    let device = list.first().expect("no usb devices attached");
    info!("using {}", device);

    let mut handle = device.open().unwrap();
    // not available everywhere, a quiet note is enough
    let _ = handle.set_auto_detach_kernel_driver_at(Level::Info, true);

    let active = handle.configuration_at(Level::Warn).unwrap_or(-1);
    if active != 1 {
        handle.set_configuration(1).unwrap();
    }

    handle.claim_interface(0).unwrap();
    info!("claimed interfaces {:?}", handle.claimed_interfaces());

    // dropping the handle releases interface 0 and closes the device
}
