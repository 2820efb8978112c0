use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI colour of an audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add_class" | "add_student" => Colour::Green,
        "add_period" => Colour::Cyan,
        "mark_attendance" => Colour::Yellow,
        "import_students" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Truncate to `max` visible characters, ending with "..." when cut.
fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out = s.chars().take(max.saturating_sub(3)).collect::<String>();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

/// One rendered line: `id: date | op (target) => message`, op coloured.
fn render_entry(e: &LogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
    let op_target = if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    };
    let visible = truncate_visible(&op_target, MAX_OP_WIDTH);

    let color = color_for_operation(&e.operation);
    let colored = match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    };
    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        e.id,
        e.date,
        colored,
        padding,
        e.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    /// Rendered lines of the internal log, oldest first.
    pub fn render(pool: &mut DbPool) -> AppResult<Vec<String>> {
        let entries = load_log(&pool.conn)?;

        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        Ok(entries
            .iter()
            .map(|e| render_entry(e, id_w, date_w, op_w))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_targets_are_truncated_without_ansi_noise() {
        let e = LogEntry {
            id: 7,
            date: "2025-12-15T10:00:00+01:00".into(),
            operation: "add_student".into(),
            target: "x".repeat(80),
            message: "ok".into(),
        };
        let line = strip_ansi(&render_entry(&e, 1, 25, MAX_OP_WIDTH));
        assert!(line.starts_with("7: 2025-12-15T10:00:00+01:00 | add_student ("));
        assert!(line.contains("... => ok"));
    }
}
