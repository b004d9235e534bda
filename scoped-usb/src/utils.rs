//! Log capture for tests. One process-wide logger fans records out into
//! per-thread sinks, so parallel tests each observe only their own output.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) level: Level,
    pub(crate) target: String,
    pub(crate) message: String,
}

thread_local! {
    static SINK: RefCell<Vec<Entry>> = RefCell::new(Vec::new());
}

struct Capture;

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        SINK.with(|sink| {
            sink.borrow_mut().push(Entry {
                level: record.level(),
                target: record.target().to_string(),
                message: record.args().to_string(),
            })
        });
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;
static INSTALL: Once = Once::new();

/// Install the capture logger (first call only) and clear this thread's
/// sink.
pub(crate) fn init() {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    SINK.with(|sink| sink.borrow_mut().clear());
}

/// Drain everything this thread has logged since `init`.
pub(crate) fn take() -> Vec<Entry> {
    SINK.with(|sink| sink.borrow_mut().split_off(0))
}
