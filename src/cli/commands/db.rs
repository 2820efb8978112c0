use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::queries::orphan_counts;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use rusqlite::Connection;

/// `db --migrate` opens the file directly: `DbPool::new` would already
/// apply pending migrations and leave nothing to report.
fn migrate(db_path: &str) -> AppResult<()> {
    info("Running migrations…");
    let conn = Connection::open(expand_tilde(db_path))?;
    let applied = run_pending_migrations(&conn)?;
    if applied.is_empty() {
        success("Schema already up to date.");
    } else {
        for v in &applied {
            println!("  • {}", v);
        }
        success(format!("{} migrations applied.", applied.len()));
    }
    Ok(())
}

fn check(pool: &DbPool) -> AppResult<()> {
    info("Running integrity check…");
    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if integrity == "ok" {
        success("SQLite integrity check passed.");
    } else {
        warning(format!("SQLite integrity check failed: {}", integrity));
    }

    let orphans = orphan_counts(&pool.conn)?;
    if orphans.total() == 0 {
        success("No dangling references.");
        return Ok(());
    }
    for (what, n) in [
        ("students of unknown classes", orphans.students_without_class),
        ("periods of unknown classes", orphans.periods_without_class),
        ("marks of unknown periods", orphans.marks_without_period),
        ("marks of unknown students", orphans.marks_without_student),
    ] {
        if n > 0 {
            warning(format!("{} {}", n, what));
        }
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate: do_migrate,
        check: do_check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if *do_migrate {
        migrate(&cfg.database)?;
    }

    let pool = DbPool::new(&cfg.database)?;

    if *show_info {
        stats::print_db_info(&pool, &cfg.database)?;
    }
    if *do_check {
        check(&pool)?;
    }
    if *vacuum {
        info("Running VACUUM…");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}
