//! Browser console logging.
//!
//! Everything in the crate logs through the `log` facade; this installs the
//! console backend and the panic hook once at startup.

/// Install the console logger at `level`. No-op outside the `csr` build.
pub fn init(level: log::Level) {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(level).is_err() {
            log::debug!("console logger already installed");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = level;
    }
}
