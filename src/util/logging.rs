//! Browser logging bootstrap.
//!
//! With `hydrate`, routes the `log` facade to the browser console and turns
//! panics into readable console errors. Native builds leave logger setup to
//! the embedding binary, so `init` does nothing there.

/// Level used for the browser console logger.
#[cfg(feature = "hydrate")]
const CONSOLE_LEVEL: log::Level = log::Level::Debug;

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        // Already initialized on a second call; keep the first logger.
        let _ = console_log::init_with_level(CONSOLE_LEVEL);
    }
}
