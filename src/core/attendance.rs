use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{attendance_counts, period_exists, student_exists, upsert_attendance};
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceMark, AttendanceSummary, MarkOutcome};
use crate::ui::messages::warning;
use rusqlite::Connection;

/// Marks attendance for one period.
pub struct MarkLogic;

impl MarkLogic {
    fn check_student(conn: &Connection, reg_no: &str) -> AppResult<()> {
        if !student_exists(conn, reg_no)? {
            return Err(AppError::InvalidInput(format!(
                "student {} does not exist",
                reg_no
            )));
        }
        Ok(())
    }

    /// Apply every mark as its own upsert. Each one commits independently:
    /// a rejected pair is reported in the outcome and the batch goes on.
    pub fn apply(
        pool: &mut DbPool,
        period_id: i64,
        marks: &[AttendanceMark],
        strict: bool,
    ) -> AppResult<MarkOutcome> {
        if strict && !period_exists(&pool.conn, period_id)? {
            return Err(AppError::InvalidInput(format!(
                "period {} does not exist",
                period_id
            )));
        }

        let mut outcome = MarkOutcome {
            period_id,
            ..MarkOutcome::default()
        };

        for mark in marks {
            let reg_no = mark.reg_no.trim();
            let res = if reg_no.is_empty() {
                Err(AppError::InvalidInput("reg_no must not be empty".to_string()))
            } else if strict {
                Self::check_student(&pool.conn, reg_no)
            } else {
                Ok(())
            }
            .and_then(|_| upsert_attendance(&pool.conn, period_id, reg_no, mark.is_present));

            match res {
                Ok(()) => outcome.saved += 1,
                Err(e) => {
                    warning(format!(
                        "Attendance of '{}' for period {} not saved: {}",
                        reg_no, period_id, e
                    ));
                    outcome.rejected.push(reg_no.to_string());
                }
            }
        }

        audit(
            &pool.conn,
            "mark_attendance",
            &format!("period {}", period_id),
            &format!(
                "{} marks saved, {} rejected",
                outcome.saved,
                outcome.rejected.len()
            ),
        );

        Ok(outcome)
    }
}

/// Cumulative attendance of a student.
pub struct AttendanceReport;

impl AttendanceReport {
    /// Summary for `reg_no`; `NotFound` when no such student exists.
    pub fn for_student(pool: &mut DbPool, reg_no: &str) -> AppResult<AttendanceSummary> {
        let reg_no = reg_no.trim();
        let (student_name, total, attended) = attendance_counts(&pool.conn, reg_no)?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        Ok(AttendanceSummary::new(
            reg_no.to_string(),
            student_name,
            total,
            attended,
        ))
    }
}
