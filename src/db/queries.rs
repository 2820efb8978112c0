use crate::errors::{AppError, AppResult};
use crate::models::{Class, Period, Presence, Student};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------
// Classes
// ---------------------------

pub fn insert_class(conn: &Connection, class: &Class) -> AppResult<()> {
    conn.execute(
        "INSERT INTO classes (class_id, class_name, department) VALUES (?1, ?2, ?3)",
        params![class.class_id, class.class_name, class.department],
    )
    .map_err(|e| AppError::from_insert(e, "Class ID already exists"))?;
    Ok(())
}

fn map_class(row: &Row) -> Result<Class> {
    Ok(Class {
        class_id: row.get("class_id")?,
        class_name: row.get("class_name")?,
        department: row
            .get::<_, Option<String>>("department")?
            .unwrap_or_default(),
    })
}

pub fn load_classes(conn: &Connection) -> AppResult<Vec<Class>> {
    let mut stmt = conn.prepare(
        "SELECT class_id, class_name, department FROM classes ORDER BY class_id ASC",
    )?;
    let rows = stmt.query_map([], map_class)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn class_exists(conn: &Connection, class_id: i64) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM classes WHERE class_id = ?1",
            [class_id],
            |r| r.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

// ---------------------------
// Students
// ---------------------------

pub fn insert_student(conn: &Connection, student: &Student) -> AppResult<()> {
    conn.execute(
        "INSERT INTO students (reg_no, student_name, class_id) VALUES (?1, ?2, ?3)",
        params![student.reg_no, student.student_name, student.class_id],
    )
    .map_err(|e| AppError::from_insert(e, "Student registration number already exists"))?;
    Ok(())
}

fn map_student(row: &Row) -> Result<Student> {
    Ok(Student {
        reg_no: row.get("reg_no")?,
        student_name: row.get("student_name")?,
        class_id: row.get("class_id")?,
    })
}

/// All students in insertion order, optionally restricted to one class.
pub fn load_students(conn: &Connection, class_id: Option<i64>) -> AppResult<Vec<Student>> {
    let mut out = Vec::new();

    match class_id {
        Some(cid) => {
            let mut stmt = conn.prepare(
                "SELECT reg_no, student_name, class_id FROM students
                 WHERE class_id = ?1
                 ORDER BY rowid ASC",
            )?;
            for r in stmt.query_map([cid], map_student)? {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT reg_no, student_name, class_id FROM students ORDER BY rowid ASC",
            )?;
            for r in stmt.query_map([], map_student)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn student_exists(conn: &Connection, reg_no: &str) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row("SELECT 1 FROM students WHERE reg_no = ?1", [reg_no], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(found.is_some())
}

// ---------------------------
// Periods
// ---------------------------

/// Insert a period and return its generated id.
pub fn insert_period(
    conn: &Connection,
    class_id: i64,
    subject_name: &str,
    period_date: &str,
    period_number: i64,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO periods (class_id, subject_name, period_date, period_number)
         VALUES (?1, ?2, ?3, ?4)",
        params![class_id, subject_name, period_date, period_number],
    )?;
    Ok(conn.last_insert_rowid())
}

fn map_period(row: &Row) -> Result<Period> {
    Ok(Period {
        period_id: row.get("period_id")?,
        class_id: row.get("class_id")?,
        subject_name: row.get("subject_name")?,
        period_date: row.get("period_date")?,
        period_number: row.get("period_number")?,
    })
}

pub fn load_periods(conn: &Connection, class_id: Option<i64>) -> AppResult<Vec<Period>> {
    let sql = "SELECT period_id, class_id, subject_name, period_date, period_number
               FROM periods
               WHERE (?1 IS NULL OR class_id = ?1)
               ORDER BY period_date ASC, period_number ASC, period_id ASC";
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([class_id], map_period)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn period_exists(conn: &Connection, period_id: i64) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM periods WHERE period_id = ?1",
            [period_id],
            |r| r.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

// ---------------------------
// Attendance
// ---------------------------

/// Insert or replace the mark of one student for one period.
pub fn upsert_attendance(
    conn: &Connection,
    period_id: i64,
    reg_no: &str,
    is_present: bool,
) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO attendance (period_id, reg_no, is_present)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(period_id, reg_no) DO UPDATE SET
           is_present = excluded.is_present",
    )?;
    stmt.execute(params![period_id, reg_no, Presence::from(is_present).to_db()])?;
    Ok(())
}

/// Stored mark for a (period, student) pair, if any.
pub fn load_mark(conn: &Connection, period_id: i64, reg_no: &str) -> AppResult<Option<bool>> {
    let flag: Option<i64> = conn
        .query_row(
            "SELECT is_present FROM attendance WHERE period_id = ?1 AND reg_no = ?2",
            params![period_id, reg_no],
            |r| r.get(0),
        )
        .optional()?;
    Ok(flag.map(|v| v == 1))
}

/// `(student_name, total_classes, attended_classes)` for one student, or
/// `None` when the student does not exist.
///
/// LEFT JOIN from students: a student without marks yields `(name, 0, 0)`.
pub fn attendance_counts(conn: &Connection, reg_no: &str) -> AppResult<Option<(String, i64, i64)>> {
    let row = conn
        .query_row(
            "SELECT
                s.student_name,
                COUNT(a.period_id) AS total_classes,
                SUM(CASE WHEN a.is_present = 1 THEN 1 ELSE 0 END) AS attended_classes
             FROM students s
             LEFT JOIN attendance a ON s.reg_no = a.reg_no
             WHERE s.reg_no = ?1
             GROUP BY s.reg_no, s.student_name",
            [reg_no],
            |r| {
                Ok((
                    r.get::<_, String>(0)?,
                    r.get::<_, i64>(1)?,
                    r.get::<_, Option<i64>>(2)?.unwrap_or(0),
                ))
            },
        )
        .optional()?;
    Ok(row)
}

// ---------------------------
// Maintenance
// ---------------------------

/// References that point nowhere. They are accepted on write unless
/// strict references are enabled, so `db --check` reports them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrphanCounts {
    pub students_without_class: i64,
    pub periods_without_class: i64,
    pub marks_without_period: i64,
    pub marks_without_student: i64,
}

impl OrphanCounts {
    pub fn total(&self) -> i64 {
        self.students_without_class
            + self.periods_without_class
            + self.marks_without_period
            + self.marks_without_student
    }
}

pub fn orphan_counts(conn: &Connection) -> AppResult<OrphanCounts> {
    let count = |sql: &str| -> AppResult<i64> { Ok(conn.query_row(sql, [], |r| r.get(0))?) };

    Ok(OrphanCounts {
        students_without_class: count(
            "SELECT COUNT(*) FROM students s
             WHERE NOT EXISTS (SELECT 1 FROM classes c WHERE c.class_id = s.class_id)",
        )?,
        periods_without_class: count(
            "SELECT COUNT(*) FROM periods p
             WHERE NOT EXISTS (SELECT 1 FROM classes c WHERE c.class_id = p.class_id)",
        )?,
        marks_without_period: count(
            "SELECT COUNT(*) FROM attendance a
             WHERE NOT EXISTS (SELECT 1 FROM periods p WHERE p.period_id = a.period_id)",
        )?,
        marks_without_student: count(
            "SELECT COUNT(*) FROM attendance a
             WHERE NOT EXISTS (SELECT 1 FROM students s WHERE s.reg_no = a.reg_no)",
        )?,
    })
}

/// Row count of one of the known tables.
pub fn count_rows(conn: &Connection, table: &str) -> AppResult<i64> {
    const TABLES: [&str; 5] = ["classes", "students", "periods", "attendance", "log"];
    if !TABLES.contains(&table) {
        return Err(AppError::InvalidInput(format!("unknown table '{}'", table)));
    }
    let n = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))?;
    Ok(n)
}
