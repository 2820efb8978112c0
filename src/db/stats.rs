use crate::db::pool::DbPool;
use crate::db::queries::count_rows;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET, YELLOW, colorize_optional};
use crate::utils::path::expand_tilde;
use std::fs;

/// Print file size, row counts and the date span covered by periods.
pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    let size_kb = fs::metadata(expand_tilde(db_path))
        .map(|m| m.len())
        .unwrap_or(0) as f64
        / 1024.0;

    println!();
    println!("{CYAN}• File:{RESET} {YELLOW}{db_path}{RESET}");
    println!("{CYAN}• Size:{RESET} {:.1} KB", size_kb);

    for table in ["classes", "students", "periods", "attendance"] {
        println!("{CYAN}• {table}:{RESET} {}", count_rows(&pool.conn, table)?);
    }

    let (first, last): (Option<String>, Option<String>) = pool.conn.query_row(
        "SELECT MIN(period_date), MAX(period_date) FROM periods",
        [],
        |r| Ok((r.get(0)?, r.get(1)?)),
    )?;
    let present: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM attendance WHERE is_present = 1",
        [],
        |r| r.get(0),
    )?;

    println!(
        "{CYAN}• Periods:{RESET} {} → {}",
        colorize_optional(first.as_deref().unwrap_or("")),
        colorize_optional(last.as_deref().unwrap_or(""))
    );
    println!("{CYAN}• Present marks:{RESET} {}", present);
    println!();
    Ok(())
}
