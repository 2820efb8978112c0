use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub reg_no: String,       // ⇔ students.reg_no (TEXT PRIMARY KEY)
    pub student_name: String, // ⇔ students.student_name
    pub class_id: i64,        // ⇔ students.class_id (not checked unless strict)
}

/// Result of a bulk import: rows inserted and rows rejected.
/// Rows with fewer than three fields are counted in neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportTally {
    pub added: usize,
    pub skipped: usize,
}
