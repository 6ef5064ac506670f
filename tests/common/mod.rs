use std::sync::Once;

use simplelog::{Config, LevelFilter, TestLogger};

static LOGGER: Once = Once::new();

/// Routes the crate's log output through the test harness so it shows up next to failures.
pub(crate) fn init_logging() {
    LOGGER.call_once(|| {
        // Another test binary in the same process may have set a logger already.
        let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    });
}
