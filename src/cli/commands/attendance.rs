use crate::cli::parser::AttendanceAction;
use crate::config::Config;
use crate::core::{AttendanceReport, MarkLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceMark;
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{RESET, color_for_percentage, colorize_presence};

/// Parse every `REG_NO=STATE` entry; any malformed entry rejects the batch
/// before anything is written.
fn parse_entries(entries: &[String]) -> AppResult<Vec<AttendanceMark>> {
    entries
        .iter()
        .map(|e| {
            AttendanceMark::parse_entry(e).ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "'{}' is not REG_NO=STATE (STATE: 1/0, p/a, present/absent)",
                    e
                ))
            })
        })
        .collect()
}

pub fn handle(action: &AttendanceAction, cfg: &Config) -> AppResult<()> {
    match action {
        AttendanceAction::Mark { period_id, entries } => {
            let marks = parse_entries(entries)?;

            let mut pool = DbPool::new(&cfg.database)?;
            let outcome = MarkLogic::apply(&mut pool, *period_id, &marks, cfg.strict_references)?;

            for m in &marks {
                if !outcome.rejected.contains(&m.reg_no) {
                    println!("  {} {}", colorize_presence(m.is_present), m.reg_no);
                }
            }
            success(format!(
                "Attendance saved for period {}: {} marks",
                period_id, outcome.saved
            ));
            if !outcome.rejected.is_empty() {
                warning(format!("Rejected: {}", outcome.rejected.join(", ")));
            }
        }
        AttendanceAction::Show { reg_no, json } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let s = AttendanceReport::for_student(&mut pool, reg_no)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&s)?);
                return Ok(());
            }

            header(format!("{} - {}", s.reg_no, s.student_name));
            println!("Total classes:    {}", s.total_classes);
            println!("Attended classes: {}", s.attended_classes);
            println!(
                "Attendance:       {}{:.2}%{}",
                color_for_percentage(s.attendance_percentage),
                s.attendance_percentage,
                RESET
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_bad_entry_rejects_the_batch() {
        let ok = parse_entries(&["A1=1".to_string(), "B2=a".to_string()]).expect("valid");
        assert_eq!(ok.len(), 2);
        assert!(!ok[1].is_present);

        let bad = parse_entries(&["A1=1".to_string(), "B2".to_string()]);
        assert!(matches!(bad, Err(AppError::InvalidInput(_))));
    }
}
