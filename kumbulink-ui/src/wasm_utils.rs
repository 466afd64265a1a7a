//! Cross-platform utilities that work in both WASM and native contexts

#[cfg(target_arch = "wasm32")]
mod wasm_impl {
    use wasm_bindgen::JsValue;

    pub fn set_panic_hook() {
        // When the `console_error_panic_hook` feature is enabled, we can call the
        // `set_panic_hook` function at least once during initialization, and then
        // we will get better error messages if our code ever panics.
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
    }

    pub fn get_browser_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn load_from_storage(key: &str) -> Option<String> {
        get_browser_storage()?.get_item(key).ok()?
    }

    /// Session token persisted by the marketplace under `key`.
    pub fn load_session_token(key: &str) -> Option<String> {
        load_from_storage(key)
    }

    pub fn current_path() -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    pub fn push_path(path: &str) {
        let pushed = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)));

        if !matches!(pushed, Some(Ok(()))) {
            log::warn!("Could not push history entry for {}", path);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native_impl {
    pub fn set_panic_hook() {
        // Native panic hook is already set up by env_logger
    }

    /// Desktop builds take the session from `KUMBULINK_TOKEN`.
    pub fn load_session_token(_key: &str) -> Option<String> {
        std::env::var("KUMBULINK_TOKEN").ok()
    }

    /// No address bar: the app starts at the offer list and keeps routing
    /// in memory.
    pub fn current_path() -> Option<String> {
        None
    }

    pub fn push_path(path: &str) {
        log::debug!("Navigated to {}", path);
    }
}

// Re-export the appropriate implementation
#[cfg(target_arch = "wasm32")]
pub use wasm_impl::*;

#[cfg(not(target_arch = "wasm32"))]
pub use native_impl::*;
