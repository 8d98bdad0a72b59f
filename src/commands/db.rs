//! The single data-access command
//!
//! All 25 data channels travel through here as [`DbRequest`] values; the
//! bridge's exhaustive dispatch replaces per-channel string registration.

use tauri::State;

use crate::bridge::{dispatch, DbRequest, DbResponse};
use crate::db::Database;
use crate::error::TrainPlanError;

#[tauri::command]
pub fn db_request(
    db: State<Database>,
    request: DbRequest,
) -> Result<DbResponse, TrainPlanError> {
    dispatch(&db, request)
}
