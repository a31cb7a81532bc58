//! Task list core
//!
//! - `Task`: one to-do record and its record conversion
//! - `TaskManager`: ordered collection, keyword filter, JSON save/load

pub mod error;
pub mod manager;
pub mod model;

pub use error::TaskError;
pub use manager::TaskManager;
pub use model::{Record, Task, RECORD_KEYS};
