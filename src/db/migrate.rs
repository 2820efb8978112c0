use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// A versioned schema step. Applied once, then recorded in `log`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

/// Schema of the four attendance tables.
///
/// Foreign keys are declared but `PRAGMA foreign_keys` is left off, so an
/// orphaned class_id / period_id / reg_no is stored as given.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251019_0001_create_classes",
        description: "Created classes table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS classes (
            class_id   INTEGER PRIMARY KEY,
            class_name TEXT NOT NULL,
            department TEXT
        );
        "#,
    },
    Migration {
        version: "20251019_0002_create_students",
        description: "Created students table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS students (
            reg_no       TEXT PRIMARY KEY,
            student_name TEXT NOT NULL,
            class_id     INTEGER NOT NULL,
            FOREIGN KEY (class_id) REFERENCES classes(class_id)
        );

        CREATE INDEX IF NOT EXISTS idx_students_class ON students(class_id);
        "#,
    },
    Migration {
        version: "20251019_0003_create_periods",
        description: "Created periods table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS periods (
            period_id     INTEGER PRIMARY KEY AUTOINCREMENT,
            class_id      INTEGER,
            subject_name  TEXT,
            period_date   TEXT,
            period_number INTEGER,
            FOREIGN KEY (class_id) REFERENCES classes(class_id)
        );

        CREATE INDEX IF NOT EXISTS idx_periods_class_date ON periods(class_id, period_date);
        "#,
    },
    Migration {
        version: "20251019_0004_create_attendance",
        description: "Created attendance table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS attendance (
            period_id  INTEGER,
            reg_no     TEXT,
            is_present INTEGER,
            PRIMARY KEY (period_id, reg_no),
            FOREIGN KEY (period_id) REFERENCES periods(period_id),
            FOREIGN KEY (reg_no) REFERENCES students(reg_no)
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_reg_no ON attendance(reg_no);
        "#,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(&format!(
        "BEGIN;\n{}\nINSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', '{}', '{}');\nCOMMIT;",
        m.sql, m.version, m.description
    ))
    .map_err(|e| {
        let _ = conn.execute_batch("ROLLBACK;");
        AppError::Migration(format!("{}: {}", m.version, e))
    })
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). Returns the versions applied by this call
/// (empty when the schema was already current).
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied.push(m.version);
    }

    Ok(applied)
}

/// Versions of every known migration, in order.
pub fn known_versions() -> Vec<&'static str> {
    MIGRATIONS.iter().map(|m| m.version).collect()
}
