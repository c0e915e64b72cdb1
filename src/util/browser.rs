//! Native browser dialog helpers.

/// Show a blocking confirmation dialog.
///
/// Returns `false` outside the browser or when the user declines, so callers
/// can treat "confirmed" as the only path that performs work.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        false
    }
}
