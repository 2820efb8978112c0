use serde::{Deserialize, Serialize};

/// One class session for which attendance is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub period_id: i64, // ⇔ periods.period_id (AUTOINCREMENT)
    pub class_id: i64,
    pub subject_name: String,
    pub period_date: String, // YYYY-MM-DD
    pub period_number: i64,  // 1, 2, 3... within the day
}
