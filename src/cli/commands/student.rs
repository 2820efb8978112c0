use crate::cli::parser::StudentAction;
use crate::config::Config;
use crate::core::{ImportLogic, StudentLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::table::{Column, Table};

pub fn handle(action: &StudentAction, cfg: &Config) -> AppResult<()> {
    match action {
        StudentAction::Add {
            reg_no,
            student_name,
            class_id,
        } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let s = StudentLogic::create(
                &mut pool,
                reg_no,
                student_name,
                *class_id,
                cfg.strict_references,
            )?;
            success(format!(
                "Student added: {} '{}' in class {}",
                s.reg_no, s.student_name, s.class_id
            ));
        }
        StudentAction::List { class_id, json } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let students = StudentLogic::list(&mut pool, *class_id)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&students)?);
                return Ok(());
            }
            if students.is_empty() {
                info("No students found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("Reg. No", 7),
                Column::new("Name", 4),
                Column::new("Class", 5),
            ]);
            for s in &students {
                table.add_row(vec![
                    s.reg_no.clone(),
                    s.student_name.clone(),
                    s.class_id.to_string(),
                ]);
            }
            print!("{}", table.render());
        }
        StudentAction::Import { file } => {
            if file.trim().is_empty() {
                return Err(AppError::InvalidInput("No file selected".to_string()));
            }
            let bytes = std::fs::read(file)?;

            let mut pool = DbPool::new(&cfg.database)?;
            let tally = ImportLogic::import_students(
                &mut pool,
                &bytes,
                cfg.delimiter()?,
                cfg.strict_references,
            )?;

            success(format!(
                "{} students added successfully, {} skipped (duplicates or errors)",
                tally.added, tally.skipped
            ));
            if tally.skipped > 0 {
                warning(format!("{} rows skipped", tally.skipped));
            }
        }
    }

    Ok(())
}
