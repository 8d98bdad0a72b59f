//! TrainPlan - a desktop training plan manager for coaches
//!
//! This is the main library entry point that sets up and runs the Tauri
//! application. The data-access core (schema, repositories, bridge, client
//! stub) lives in the `db`, `bridge` and `client` modules and has no Tauri
//! dependency of its own.

pub mod bridge;
pub mod client;
mod commands;
pub mod db;
pub mod error;
pub mod logging;
pub mod utils;

use db::Database;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::init();
    tracing::info!("Starting TrainPlan application");

    tauri::Builder::default()
        .setup(|app| {
            use tauri::Manager;

            // Schema creation failure is fatal at startup
            let database = Database::new().expect("Failed to initialize database");
            tracing::info!("Database ready at {}", database.path().display());
            app.manage(database);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Data access
            commands::db::db_request,
            // App bar
            commands::window::window_minimize,
            commands::window::window_maximize,
            commands::window::window_close,
            commands::window::send_message,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
