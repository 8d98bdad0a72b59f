//! Repository pattern implementations for database operations
//!
//! Each entity level gets its own module of free functions over a borrowed
//! connection; parent levels call into their child's module to assemble
//! nested results.

pub mod exercise_repo;
pub mod plan_repo;
pub mod set_repo;
pub mod week_repo;
pub mod workout_repo;

pub use exercise_repo::*;
pub use plan_repo::*;
pub use set_repo::*;
pub use week_repo::*;
pub use workout_repo::*;
