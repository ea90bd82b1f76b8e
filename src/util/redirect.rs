//! Hard (full page load) redirects.
//!
//! The 401 handler uses these so every in-memory store is discarded along
//! with the page.

/// Capability to replace the current document location.
pub trait Redirector: Send + Sync {
    fn hard_redirect(&self, path: &str);
}

/// Redirects through `window.location`. Logs only outside the `csr` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationRedirector;

impl Redirector for LocationRedirector {
    fn hard_redirect(&self, path: &str) {
        log::info!("hard redirect to {path}");
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
    }
}
