use log::Level;

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::Info;

/// Initialize the browser console logging just once.
pub fn init_logging() {
    let _ = console_log::init_with_level(LOG_LEVEL);
}
