use crate::cli::parser::ClassAction;
use crate::config::Config;
use crate::core::ClassLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_optional;
use crate::utils::table::{Column, Table};

pub fn handle(action: &ClassAction, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        ClassAction::Add {
            class_id,
            class_name,
            department,
        } => {
            let class =
                ClassLogic::create(&mut pool, *class_id, class_name, department.as_deref())?;
            success(format!(
                "Class added: {} '{}' ({})",
                class.class_id,
                class.class_name,
                colorize_optional(&class.department)
            ));
        }
        ClassAction::List { json } => {
            let classes = ClassLogic::list(&mut pool)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&classes)?);
                return Ok(());
            }
            if classes.is_empty() {
                info("No classes defined.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 2),
                Column::new("Class", 5),
                Column::new("Department", 10),
            ]);
            for c in &classes {
                table.add_row(vec![
                    c.class_id.to_string(),
                    c.class_name.clone(),
                    c.department.clone(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
