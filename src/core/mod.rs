pub mod attendance;
pub mod classes;
pub mod config;
pub mod import;
pub mod log;
pub mod periods;
pub mod students;

pub use attendance::{AttendanceReport, MarkLogic};
pub use classes::ClassLogic;
pub use import::ImportLogic;
pub use periods::PeriodLogic;
pub use students::StudentLogic;

use crate::errors::{AppError, AppResult};

/// Trim a required text field, rejecting blank values.
pub(crate) fn required_text(field: &str, value: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(v.to_string())
}
