use crate::core::required_text;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{class_exists, insert_student, load_students};
use crate::errors::{AppError, AppResult};
use crate::models::Student;
use rusqlite::Connection;

/// Business logic for students.
pub struct StudentLogic;

impl StudentLogic {
    /// Validate the fields of a new student (trimmed copy).
    pub fn build(reg_no: &str, student_name: &str, class_id: i64) -> AppResult<Student> {
        Ok(Student {
            reg_no: required_text("reg_no", reg_no)?,
            student_name: required_text("student_name", student_name)?,
            class_id,
        })
    }

    /// Insert one student on an open connection (or transaction).
    ///
    /// The class is only checked when `strict` is set; otherwise an unknown
    /// class_id is stored as given.
    pub fn insert(conn: &Connection, student: &Student, strict: bool) -> AppResult<()> {
        if strict && !class_exists(conn, student.class_id)? {
            return Err(AppError::InvalidInput(format!(
                "class {} does not exist",
                student.class_id
            )));
        }
        insert_student(conn, student)
    }

    /// Create a student. Fails with `DuplicateKey` when `reg_no` is taken.
    pub fn create(
        pool: &mut DbPool,
        reg_no: &str,
        student_name: &str,
        class_id: i64,
        strict: bool,
    ) -> AppResult<Student> {
        let student = Self::build(reg_no, student_name, class_id)?;
        Self::insert(&pool.conn, &student, strict)?;

        audit(
            &pool.conn,
            "add_student",
            &format!("student {}", student.reg_no),
            &format!(
                "Student '{}' added to class {}",
                student.student_name, student.class_id
            ),
        );

        Ok(student)
    }

    /// All students, or only those of `class_id`.
    pub fn list(pool: &mut DbPool, class_id: Option<i64>) -> AppResult<Vec<Student>> {
        load_students(&pool.conn, class_id)
    }
}
