//! Tauri command handlers
//!
//! This module contains all the Tauri command handlers that are exposed
//! to the frontend via IPC.

pub mod db;
pub mod window;
