//! Window-chrome commands for the frameless app bar
//!
//! Non-data channels; the minimize/maximize buttons toggle back to the
//! restored state when pressed again.

use tracing::debug;

#[tauri::command]
pub fn window_minimize(window: tauri::Window) -> Result<(), String> {
    let minimized = window.is_minimized().map_err(|e| e.to_string())?;
    if minimized {
        window.unminimize().map_err(|e| e.to_string())
    } else {
        window.minimize().map_err(|e| e.to_string())
    }
}

#[tauri::command]
pub fn window_maximize(window: tauri::Window) -> Result<(), String> {
    let maximized = window.is_maximized().map_err(|e| e.to_string())?;
    if maximized {
        window.unmaximize().map_err(|e| e.to_string())
    } else {
        window.maximize().map_err(|e| e.to_string())
    }
}

#[tauri::command]
pub fn window_close(window: tauri::Window) -> Result<(), String> {
    window.close().map_err(|e| e.to_string())
}

/// Generic message passthrough kept for the frontend's connectivity check.
#[tauri::command]
pub fn send_message(message: String) -> String {
    debug!("message from renderer: {message}");
    "common.hi".to_string()
}
