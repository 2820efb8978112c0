use crate::cli::parser::PeriodAction;
use crate::config::Config;
use crate::core::PeriodLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(action: &PeriodAction, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        PeriodAction::Create {
            class_id,
            subject_name,
            period_date,
            period_number,
        } => {
            let p = PeriodLogic::create(
                &mut pool,
                *class_id,
                subject_name,
                period_date,
                *period_number,
            )?;
            success(format!(
                "Period created: id {} ({} #{}, class {}, {})",
                p.period_id, p.period_date, p.period_number, p.class_id, p.subject_name
            ));
        }
        PeriodAction::List { class_id, json } => {
            let periods = PeriodLogic::list(&mut pool, *class_id)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&periods)?);
                return Ok(());
            }
            if periods.is_empty() {
                info("No periods found.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 2),
                Column::new("Date", 10),
                Column::new("#", 1),
                Column::new("Class", 5),
                Column::new("Subject", 7),
            ]);
            for p in &periods {
                table.add_row(vec![
                    p.period_id.to_string(),
                    p.period_date.clone(),
                    p.period_number.to_string(),
                    p.class_id.to_string(),
                    p.subject_name.clone(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
