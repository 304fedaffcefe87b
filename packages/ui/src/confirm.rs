/// Ask the user a yes/no question with the browser's native dialog.
///
/// Outside the browser there is nobody to ask, so the answer is "no".
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!(message, "no confirmation dialog available, declining");
        false
    }
}
