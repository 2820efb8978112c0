//! Domain models: one file per entity, plus the attendance mark helpers.

pub mod attendance;
pub mod class;
pub mod period;
pub mod student;

pub use attendance::{AttendanceMark, AttendanceSummary, MarkOutcome, Presence};
pub use class::Class;
pub use period::Period;
pub use student::{ImportTally, Student};
